//! # Console Reporting Module / 控制台报告模块
//!
//! This module handles the display of workflow results in the console.
//! It provides functionality for printing colorful, formatted summaries with
//! internationalization support.
//!
//! 此模块处理控制台中流程结果的显示。
//! 它提供打印彩色格式化摘要的功能，支持国际化。

use colored::*;
use std::path::Path;

use crate::core::models::{FailureReason, StepOutcome};
use crate::infra::{fs::report_index, t};

/// Prints a formatted summary of step outcomes to the console.
///
/// 在控制台打印格式化的步骤结果摘要。
///
/// # Arguments / 参数
/// * `outcomes` - The outcomes of one run, in execution order
///                一次运行的结果，按执行顺序排列
/// * `locale` - The language locale to use for messages
///              用于消息的语言区域设置
///
/// # Output Format / 输出格式
/// ```text
/// --- Coverage Workflow Summary ---
///   - Passed   | Run test binary              |     1.23s
///   - Failed   | Capture coverage             |   120.45ms  (exit code 1)
///   - Skipped  | Prepare report directory     |       N/A
/// ```
pub fn print_summary(outcomes: &[StepOutcome], locale: &str) {
    println!("\n{}", t!("report.summary_banner", locale = locale).bold());

    for outcome in outcomes {
        let status_str = outcome.get_status_str(locale);
        let duration_str = outcome
            .get_duration()
            .map(|d| format!("{:.2?}", d))
            .unwrap_or_else(|| "N/A".to_string());

        let status_colored = match outcome {
            StepOutcome::Succeeded { .. } => status_str.green(),
            StepOutcome::Failed { .. } => status_str.red(),
            StepOutcome::Skipped { .. } => status_str.dimmed(),
        };

        let reason_str = outcome
            .failure_reason()
            .map(|reason| format!(" ({})", describe_failure(reason, locale)))
            .unwrap_or_default();

        println!(
            "  - {:<10} | {:<30} | {:>10} {}",
            status_colored,
            outcome.kind().label(locale),
            duration_str,
            reason_str
        );
    }

    let failed = outcomes.iter().filter(|o| o.is_failure()).count();
    if failed == 0 {
        println!("\n{}", t!("report.all_steps_succeeded", locale = locale).green().bold());
    } else {
        println!(
            "\n{}",
            t!("report.steps_failed", locale = locale, count = failed).yellow().bold()
        );
    }
}

/// Prints the captured output of every failed step.
/// Returns early when nothing failed.
///
/// 打印每个失败步骤的捕获输出。没有失败时直接返回。
pub fn print_failure_details(outcomes: &[StepOutcome], locale: &str) {
    let failures: Vec<&StepOutcome> = outcomes.iter().filter(|o| o.is_failure()).collect();
    if failures.is_empty() {
        return;
    }

    println!("\n{}", t!("report.failure_banner", locale = locale).red().bold());
    println!("{}", "-".repeat(80));

    for (i, outcome) in failures.iter().enumerate() {
        println!(
            "[{}/{}] {} '{}'",
            i + 1,
            failures.len(),
            t!("report.failure_header", locale = locale).red(),
            outcome.kind().label(locale).cyan()
        );

        let output = outcome.get_output().trim_end();
        if output.is_empty() {
            println!("{}", t!("report.no_output", locale = locale).dimmed());
        } else {
            println!("\n{}", output);
        }
        println!("\n{}", "-".repeat(80));
    }
}

/// Tells the user where the HTML report is, or that there isn't one.
/// Purely informational: a missing report never changes the exit status.
pub fn print_report_location(report_dir: &Path, locale: &str) {
    match report_index(report_dir) {
        Some(index) => println!(
            "{}",
            t!("report.report_written", locale = locale, path = index.display()).green()
        ),
        None => println!(
            "{}",
            t!("report.report_missing", locale = locale, path = report_dir.display()).yellow()
        ),
    }
}

/// Short localized description of a failure reason.
pub fn describe_failure(reason: FailureReason, locale: &str) -> String {
    match reason {
        FailureReason::Exit(code) => t!("report.reason_exit", locale = locale, code = code).to_string(),
        FailureReason::Terminated => t!("report.reason_terminated", locale = locale).to_string(),
        FailureReason::Spawn => t!("report.reason_spawn", locale = locale).to_string(),
    }
}
