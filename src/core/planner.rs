//! # Workflow Planner Module / 流程规划模块
//!
//! Builds the fixed sequence of subprocess invocations for one coverage run.
//! Each step is a function over explicit paths, so nothing here depends on
//! the process's current directory.
//!
//! 为一次覆盖率运行构建固定的子进程调用序列。
//! 每个步骤都是基于显式路径的函数，因此这里不依赖进程的当前目录。

use std::ffi::OsStr;
use std::path::Path;

use crate::core::config::{
    CoverageLayout, FILTERED_COVERAGE_FILE, RAW_COVERAGE_FILE, REPORT_DIR_NAME,
    SYSTEM_PATH_PATTERN, Toolchain,
};
use crate::core::models::{Invocation, StepKind, WorkflowPlan, WorkflowStep};

/// Runs the test binary with no arguments. Its only useful effect is the
/// `.gcda` counters it leaves behind.
///
/// # Arguments
/// * `test_binary` - Path of the instrumented executable
/// * `work_dir` - Directory the binary runs in
pub fn run_test_step(test_binary: &Path, work_dir: &Path) -> WorkflowStep {
    WorkflowStep {
        kind: StepKind::RunTests,
        invocation: Some(Invocation::new(test_binary, work_dir)),
    }
}

/// The two `lcov` passes over `build_dir`: capture every counter into
/// `raw_coverage.info`, then drop `/usr/*` records into `coverage.info`.
///
/// 对 `build_dir` 的两次 `lcov` 调用：先将所有计数器采集到 `raw_coverage.info`，
/// 再移除 `/usr/*` 记录并写入 `coverage.info`。
pub fn capture_steps(lcov: &OsStr, build_dir: &Path, work_dir: &Path) -> [WorkflowStep; 2] {
    let raw_info = build_dir.join(RAW_COVERAGE_FILE);
    let filtered_info = build_dir.join(FILTERED_COVERAGE_FILE);

    let capture = Invocation::new(lcov, work_dir)
        .arg("--directory")
        .arg(build_dir)
        .arg("--capture")
        .arg("--output-file")
        .arg(&raw_info);

    let filter = Invocation::new(lcov, work_dir)
        .arg("--remove")
        .arg(&raw_info)
        .arg(SYSTEM_PATH_PATTERN)
        .arg("--output-file")
        .arg(&filtered_info);

    [
        WorkflowStep {
            kind: StepKind::CaptureCoverage,
            invocation: Some(capture),
        },
        WorkflowStep {
            kind: StepKind::FilterCoverage,
            invocation: Some(filter),
        },
    ]
}

/// Placeholder for the old "mkdir html_report" step. It runs nothing:
/// `genhtml` creates the output directory itself.
pub fn prepare_report_dir_step() -> WorkflowStep {
    WorkflowStep {
        kind: StepKind::PrepareReportDir,
        invocation: None,
    }
}

/// `genhtml` over `<build_dir>/coverage.info`, writing into `<output_root>/html_report`.
///
/// # Arguments
/// * `genhtml` - The report generator program
/// * `build_dir` - Directory holding `coverage.info`
/// * `output_root` - Parent of the `html_report` directory
/// * `work_dir` - Directory the generator runs in
pub fn write_report_step(
    genhtml: &OsStr,
    build_dir: &Path,
    output_root: &Path,
    work_dir: &Path,
) -> WorkflowStep {
    let report = Invocation::new(genhtml, work_dir)
        .arg(build_dir.join(FILTERED_COVERAGE_FILE))
        .arg("--output-directory")
        .arg(output_root.join(REPORT_DIR_NAME));

    WorkflowStep {
        kind: StepKind::WriteReport,
        invocation: Some(report),
    }
}

/// Creates the full, ordered plan for one run.
/// 为一次运行创建完整且有序的计划。
///
/// The order is fixed: test binary, capture, filter, report directory, report.
/// Nothing in the plan depends on the outcome of an earlier step.
pub fn plan_workflow(layout: &CoverageLayout, toolchain: &Toolchain) -> WorkflowPlan {
    let work_dir = layout.work_dir.as_path();
    let [capture, filter] = capture_steps(&toolchain.lcov, &layout.build_dir, work_dir);

    WorkflowPlan {
        steps: vec![
            run_test_step(&toolchain.test_binary_in(work_dir), work_dir),
            capture,
            filter,
            prepare_report_dir_step(),
            write_report_step(&toolchain.genhtml, &layout.build_dir, work_dir, work_dir),
        ],
    }
}
