// src/commands/run.rs

use anyhow::Result;
use colored::*;

use crate::{
    core::{
        config::{CoverageLayout, Toolchain},
        execution::run_workflow,
        models::StepOutcome,
        planner::plan_workflow,
    },
    infra::{t, tools::find_missing_tools},
    reporting::{print_failure_details, print_report_location, print_summary},
};

/// Runs the coverage workflow from the current directory with the default toolchain.
///
/// Step failures are reported but never turned into an error, so this only
/// fails when the working directory itself cannot be determined.
pub async fn execute(locale: &str) -> Result<()> {
    let layout = CoverageLayout::from_current_dir()?;
    run_coverage(&layout, &Toolchain::default(), locale).await;
    Ok(())
}

/// Plans, preflights, runs and reports one coverage workflow.
///
/// # Arguments
/// * `layout` - Paths derived from the working directory
/// * `toolchain` - The external programs to call
/// * `locale` - The language locale to use for messages
///
/// # Returns
/// The outcome of every step, in execution order.
pub async fn run_coverage(
    layout: &CoverageLayout,
    toolchain: &Toolchain,
    locale: &str,
) -> Vec<StepOutcome> {
    println!(
        "{}",
        t!("run.work_dir_detected", locale = locale, path = layout.work_dir.display())
    );

    if !layout.has_build_dir() {
        println!(
            "{}",
            t!("run.build_dir_missing", locale = locale, path = layout.build_dir.display()).yellow()
        );
    }

    let plan = plan_workflow(layout, toolchain);

    for missing in find_missing_tools(&plan) {
        println!(
            "{}",
            t!(
                "run.tool_missing",
                locale = locale,
                program = missing.program.to_string_lossy(),
                step = missing.kind.label(locale)
            )
            .yellow()
        );
    }

    let outcomes = run_workflow(&plan, locale).await;

    print_summary(&outcomes, locale);
    print_failure_details(&outcomes, locale);
    print_report_location(&layout.report_dir, locale);

    outcomes
}
