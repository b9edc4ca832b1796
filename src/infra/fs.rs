//! # File System Operations Module / 文件系统操作模块
//!
//! Read-only checks on the paths the workflow leaves behind. Nothing here
//! creates or removes files; that is left to the external tools.
//!
//! 对流程遗留路径的只读检查。这里不创建也不删除任何文件，这些都交给外部工具。

use std::path::{Path, PathBuf};

/// Entry page `genhtml` writes at the root of its output directory.
pub const REPORT_INDEX_FILE: &str = "index.html";

/// Returns the report's entry page if the report directory has one.
///
/// # Arguments
/// * `report_dir` - The `html_report` directory
pub fn report_index(report_dir: &Path) -> Option<PathBuf> {
    let index = report_dir.join(REPORT_INDEX_FILE);
    index.is_file().then_some(index)
}
