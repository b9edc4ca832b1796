//! # Coverage Runner Library / Coverage Runner 库
//!
//! This library drives a local gcov/lcov coverage workflow for a CMake test
//! target: run the test binary, capture and filter the counters with `lcov`,
//! then render the filtered info file with `genhtml`.
//!
//! 此库驱动一个 CMake 测试目标的本地 gcov/lcov 覆盖率流程：
//! 运行测试二进制文件，用 `lcov` 采集并过滤计数器，再用 `genhtml` 生成 HTML 报告。
//!
//! ## Modules / 模块
//!
//! - `core` - Paths, workflow planning and sequential step execution
//! - `infra` - Subprocess capture, tool lookup and file system helpers
//! - `reporting` - Console summary of the workflow run
//! - `cli` - Command-line interface
//!
//! - `core` - 路径、流程规划和顺序执行步骤
//! - `infra` - 子进程输出捕获、工具查找和文件系统辅助
//! - `reporting` - 流程运行的控制台摘要
//! - `cli` - 命令行接口

pub mod cli;
pub mod commands;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use crate::core::config;
pub use crate::core::execution;
pub use crate::core::models;
pub use crate::core::planner;

/// Initializes the application's internationalization (i18n) based on the system locale.
///
/// It attempts to match the full locale (e.g., "zh-CN"), then just the
/// language code (e.g., "en"), and finally falls back to "en".
pub fn init() {
    let locale = sys_locale::get_locale().unwrap_or_else(|| "en".to_string());
    rust_i18n::set_locale(resolve_locale(&locale));
}

/// Maps a requested locale onto one of the bundled translation sets.
/// 将请求的语言区域映射到内置的翻译集合之一。
pub fn resolve_locale(requested: &str) -> &str {
    let available_locales = rust_i18n::available_locales!();

    if available_locales.contains(&requested) {
        requested
    } else {
        requested
            .split(['-', '_'])
            .next()
            .filter(|lang_code| available_locales.contains(lang_code))
            .unwrap_or("en")
    }
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
