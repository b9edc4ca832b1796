//! # Reporting Module / 报告模块
//!
//! This module prints the outcome of a coverage run to the console: a colored
//! per-step summary, the captured output of failed steps, and where the HTML
//! report ended up. Rendering the coverage report itself is `genhtml`'s job.
//!
//! 此模块将覆盖率运行的结果打印到控制台：带颜色的逐步摘要、失败步骤的捕获输出，
//! 以及 HTML 报告的位置。覆盖率报告本身由 `genhtml` 生成。

pub mod console;

// Re-export common reporting functions
pub use console::{print_failure_details, print_report_location, print_summary};
