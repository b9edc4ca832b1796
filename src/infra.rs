//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for Coverage Runner,
//! including subprocess output capture, tool lookup and file system checks.
//!
//! 此模块为 Coverage Runner 提供基础设施服务，
//! 包括子进程输出捕获、工具查找和文件系统检查。

pub mod command;
pub mod fs;
pub mod tools;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
