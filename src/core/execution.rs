//! # Workflow Execution Module / 流程执行模块
//!
//! Runs a `WorkflowPlan` one step at a time. Each child process is awaited
//! before the next one is spawned, and no outcome ever stops the sequence:
//! a failed test binary still gets its counters captured, a failed capture
//! still gets a report attempt.
//!
//! 逐步运行 `WorkflowPlan`。每个子进程结束后才会启动下一个，
//! 任何结果都不会中断该序列。

use colored::*;
use std::time::Instant;

use crate::{
    core::models::{FailureReason, StepOutcome, WorkflowPlan, WorkflowStep},
    infra::{command, t},
};

/// Runs every step of the plan in order and returns one outcome per step.
///
/// # Arguments
/// * `plan` - The plan produced by `planner::plan_workflow`
/// * `locale` - The language locale to use for messages
///
/// # Returns
/// The outcomes, in the same order as `plan.steps`.
pub async fn run_workflow(plan: &WorkflowPlan, locale: &str) -> Vec<StepOutcome> {
    let total = plan.steps.len();
    let mut outcomes = Vec::with_capacity(total);

    for (index, step) in plan.steps.iter().enumerate() {
        let position = index + 1;
        println!(
            "\n{}",
            t!(
                "run.step_started",
                locale = locale,
                index = position,
                total = total,
                step = step.kind.label(locale)
            )
            .bold()
        );
        outcomes.push(run_step(step, locale).await);
    }

    outcomes
}

/// Runs a single step and records what happened.
/// A step without an invocation is reported as skipped without spawning anything.
///
/// 运行单个步骤并记录其结果。
/// 没有调用的步骤会被报告为跳过，不会启动任何进程。
pub async fn run_step(step: &WorkflowStep, locale: &str) -> StepOutcome {
    let kind = step.kind;
    let label = kind.label(locale);

    let Some(invocation) = &step.invocation else {
        println!(
            "{}",
            t!("run.step_skipped", locale = locale, step = &label).dimmed()
        );
        return StepOutcome::Skipped { kind };
    };

    println!(
        "{} {}",
        t!("run.command_prefix", locale = locale).blue(),
        invocation.command_line()
    );

    let start_time = Instant::now();
    let (status_res, output) = command::spawn_and_capture(invocation.to_command()).await;
    let duration = start_time.elapsed();
    let duration_str = format!("{:.2?}", duration);

    if !output.trim().is_empty() {
        println!("{}", output.trim_end());
    }

    let status = match status_res {
        Ok(status) => status,
        Err(e) => {
            println!(
                "{}",
                t!(
                    "run.step_spawn_failed",
                    locale = locale,
                    step = &label,
                    error = &e
                )
                .red()
            );
            return StepOutcome::Failed {
                kind,
                output: format!("{}: {}\n{}", invocation.command_line(), e, output),
                reason: FailureReason::Spawn,
                duration,
            };
        }
    };

    if status.success() {
        println!(
            "{}",
            t!(
                "run.step_passed",
                locale = locale,
                step = &label,
                duration = &duration_str
            )
            .green()
        );
        return StepOutcome::Succeeded {
            kind,
            output,
            duration,
        };
    }

    let reason = match status.code() {
        Some(code) => {
            println!(
                "{}",
                t!(
                    "run.step_failed_exit",
                    locale = locale,
                    step = &label,
                    code = code,
                    duration = &duration_str
                )
                .red()
            );
            FailureReason::Exit(code)
        }
        None => {
            println!(
                "{}",
                t!(
                    "run.step_terminated",
                    locale = locale,
                    step = &label,
                    duration = &duration_str
                )
                .red()
            );
            FailureReason::Terminated
        }
    };

    StepOutcome::Failed {
        kind,
        output,
        reason,
        duration,
    }
}
