//! # Tool Lookup Module / 工具查找模块
//!
//! Preflight checks for the external programs a plan will call. A missing
//! program is only worth a warning: the step still runs and its spawn
//! failure is recorded like any other outcome.
//!
//! 对计划将调用的外部程序进行预检。缺失的程序只会产生警告：
//! 该步骤仍会运行，其启动失败会像其他结果一样被记录。

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::core::models::{StepKind, WorkflowPlan};

/// A program from the plan that could not be found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingTool {
    pub kind: StepKind,
    pub program: OsString,
}

/// Resolves `program` the way the OS will when it is spawned from `work_dir`.
///
/// Bare names are searched on `PATH`. Anything with more than one path
/// component is a path, taken relative to `work_dir` unless absolute.
pub fn locate_program(program: &OsStr, work_dir: &Path) -> Option<PathBuf> {
    let as_path = Path::new(program);

    if as_path.components().count() > 1 {
        let candidate = work_dir.join(as_path);
        candidate.is_file().then_some(candidate)
    } else {
        which::which(program).ok()
    }
}

/// Lists the plan's programs that cannot be found, once per program.
/// 列出计划中找不到的程序，每个程序只列出一次。
pub fn find_missing_tools(plan: &WorkflowPlan) -> Vec<MissingTool> {
    let mut missing: Vec<MissingTool> = Vec::new();

    for (kind, invocation) in plan.invocations() {
        if missing.iter().any(|m| m.program == invocation.program) {
            continue;
        }
        if locate_program(&invocation.program, &invocation.current_dir).is_none() {
            missing.push(MissingTool {
                kind,
                program: invocation.program.clone(),
            });
        }
    }

    missing
}
