//! # Core Module / 核心模块
//!
//! This module contains the core functionality of Coverage Runner:
//! the fixed path layout, the workflow plan and the sequential executor.
//!
//! 此模块包含 Coverage Runner 的核心功能：
//! 固定的路径布局、流程计划以及顺序执行器。

pub mod config;
pub mod execution;
pub mod models;
pub mod planner;

// Re-exports
pub use config::{CoverageLayout, Toolchain};
pub use execution::run_workflow;
pub use models::StepOutcome;
pub use planner::plan_workflow;
