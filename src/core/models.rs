//! # Data Models Module / 数据模型模块
//!
//! This module defines the data structures shared by the planner, the executor
//! and the console reporter: the workflow steps, the subprocess invocations
//! they carry, and the recorded outcome of each step.
//!
//! 此模块定义了规划器、执行器和控制台报告共享的数据结构：
//! 工作流程步骤、它们携带的子进程调用，以及每个步骤记录下的结果。

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::infra::{command::render_command_line, t};

/// The four stages of the coverage workflow, with the capture stage split into
/// its two `lcov` passes.
/// 覆盖率流程的各个阶段，其中采集阶段被拆分为两次 `lcov` 调用。
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum StepKind {
    /// Runs the instrumented test binary to produce gcov counters.
    /// 运行插桩的测试二进制文件以生成 gcov 计数器。
    RunTests,
    /// `lcov --capture` over the build directory.
    CaptureCoverage,
    /// `lcov --remove` of system paths from the raw info file.
    FilterCoverage,
    /// Disabled placeholder; the report tool creates its own output directory.
    /// 已禁用的占位步骤；报告工具会自行创建输出目录。
    PrepareReportDir,
    /// `genhtml` over the filtered info file.
    WriteReport,
}

impl StepKind {
    /// Stable machine-readable identifier.
    pub fn id(&self) -> &'static str {
        match self {
            StepKind::RunTests => "run-tests",
            StepKind::CaptureCoverage => "capture-coverage",
            StepKind::FilterCoverage => "filter-coverage",
            StepKind::PrepareReportDir => "prepare-report-dir",
            StepKind::WriteReport => "write-report",
        }
    }

    /// Localized, human-readable step name.
    /// 本地化的、便于阅读的步骤名称。
    pub fn label(&self, locale: &str) -> String {
        let label = match self {
            StepKind::RunTests => t!("step.run_tests", locale = locale),
            StepKind::CaptureCoverage => t!("step.capture_coverage", locale = locale),
            StepKind::FilterCoverage => t!("step.filter_coverage", locale = locale),
            StepKind::PrepareReportDir => t!("step.prepare_report_dir", locale = locale),
            StepKind::WriteReport => t!("step.write_report", locale = locale),
        };
        label.to_string()
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A single external program call: what to run, with which arguments, and where.
/// 一次外部程序调用：运行什么、使用哪些参数、在哪里运行。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: OsString,
    pub args: Vec<OsString>,
    pub current_dir: PathBuf,
}

impl Invocation {
    pub fn new(program: impl Into<OsString>, current_dir: &Path) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            current_dir: current_dir.to_path_buf(),
        }
    }

    /// Appends one argument. Arguments go to the program as-is, with no shell in between.
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    /// Builds the `tokio` command for this invocation.
    pub fn to_command(&self) -> tokio::process::Command {
        let mut cmd = tokio::process::Command::new(&self.program);
        cmd.args(&self.args).current_dir(&self.current_dir);
        cmd
    }

    /// Shell-quoted rendering, for logs only.
    pub fn command_line(&self) -> String {
        render_command_line(&self.program, &self.args)
    }
}

/// A planned step. `invocation` is `None` for steps that do nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowStep {
    pub kind: StepKind,
    pub invocation: Option<Invocation>,
}

/// The ordered list of steps for one run.
/// 单次运行的有序步骤列表。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowPlan {
    pub steps: Vec<WorkflowStep>,
}

impl WorkflowPlan {
    /// Steps that actually spawn a process, in order.
    pub fn invocations(&self) -> impl Iterator<Item = (StepKind, &Invocation)> {
        self.steps
            .iter()
            .filter_map(|step| step.invocation.as_ref().map(|inv| (step.kind, inv)))
    }

    pub fn step(&self, kind: StepKind) -> Option<&WorkflowStep> {
        self.steps.iter().find(|step| step.kind == kind)
    }
}

/// Why a step did not succeed.
/// 步骤未成功的原因。
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FailureReason {
    /// The process ran and exited with a non-zero code.
    /// 进程运行后以非零退出码退出。
    Exit(i32),
    /// The process ran but was stopped by a signal, so no exit code exists.
    /// 进程被信号终止，因此没有退出码。
    Terminated,
    /// The process could not be started at all (missing binary, no permission, ...).
    /// 进程根本无法启动（二进制文件缺失、没有权限等）。
    Spawn,
}

/// The recorded result of one workflow step. Failures are data, not errors:
/// the workflow keeps going whatever a step reports.
///
/// 单个工作流程步骤的记录结果。失败是数据而不是错误：
/// 无论某个步骤报告什么，流程都会继续。
#[derive(Debug, Clone)]
pub enum StepOutcome {
    Succeeded {
        kind: StepKind,
        output: String,
        duration: Duration,
    },
    Failed {
        kind: StepKind,
        /// Captured stdout and stderr, or the spawn error for `FailureReason::Spawn`.
        output: String,
        reason: FailureReason,
        duration: Duration,
    },
    /// The step has no process to run.
    Skipped { kind: StepKind },
}

impl StepOutcome {
    pub fn kind(&self) -> StepKind {
        match self {
            StepOutcome::Succeeded { kind, .. }
            | StepOutcome::Failed { kind, .. }
            | StepOutcome::Skipped { kind } => *kind,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, StepOutcome::Failed { .. })
    }

    pub fn failure_reason(&self) -> Option<FailureReason> {
        match self {
            StepOutcome::Failed { reason, .. } => Some(*reason),
            _ => None,
        }
    }

    pub fn get_duration(&self) -> Option<Duration> {
        match self {
            StepOutcome::Succeeded { duration, .. } | StepOutcome::Failed { duration, .. } => {
                Some(*duration)
            }
            StepOutcome::Skipped { .. } => None,
        }
    }

    /// Gets the captured output. Returns an empty string for skipped steps.
    /// 获取捕获的输出。对于跳过的步骤，返回空字符串。
    pub fn get_output(&self) -> &str {
        match self {
            StepOutcome::Succeeded { output, .. } | StepOutcome::Failed { output, .. } => output,
            StepOutcome::Skipped { .. } => "",
        }
    }

    /// Gets the status of the outcome as a localized string for display.
    /// 以本地化字符串形式获取结果状态以供显示。
    pub fn get_status_str(&self, locale: &str) -> String {
        let status = match self {
            StepOutcome::Succeeded { .. } => t!("report.status_passed", locale = locale),
            StepOutcome::Failed { .. } => t!("report.status_failed", locale = locale),
            StepOutcome::Skipped { .. } => t!("report.status_skipped", locale = locale),
        };
        status.to_string()
    }
}
