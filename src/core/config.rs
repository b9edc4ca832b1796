//! # Configuration Module / 配置模块
//!
//! The workflow has no configuration file. Everything it touches is derived
//! from the working directory and a handful of fixed names, collected here as
//! typed defaults.
//!
//! 此流程没有配置文件。它涉及的所有路径都由工作目录和若干固定名称推导而来，
//! 在此以类型化的默认值集中定义。

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Build tree of the CMake `Test` target, relative to the working directory.
pub const BUILD_DIR_RELATIVE: &str = "CMakeFiles/Test.dir";
/// Info file written by the capture pass.
pub const RAW_COVERAGE_FILE: &str = "raw_coverage.info";
/// Info file written by the filter pass and read by the report writer.
pub const FILTERED_COVERAGE_FILE: &str = "coverage.info";
/// Report output directory, relative to the working directory.
pub const REPORT_DIR_NAME: &str = "html_report";
/// Records whose source path matches this glob are dropped by the filter pass.
/// Passed to `lcov` verbatim; it must never be expanded by a shell.
pub const SYSTEM_PATH_PATTERN: &str = "/usr/*";
/// Name of the instrumented test executable in the working directory.
pub const TEST_BINARY_NAME: &str = "Test";

/// Every path the workflow reads or writes, resolved against one working directory.
/// 工作流程读写的所有路径，均基于同一个工作目录解析。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageLayout {
    /// The directory the program was launched from.
    /// 程序启动时所在的目录。
    pub work_dir: PathBuf,
    /// `<work_dir>/CMakeFiles/Test.dir`, where gcov counters and info files live.
    /// `<work_dir>/CMakeFiles/Test.dir`，gcov 计数器和 info 文件所在的位置。
    pub build_dir: PathBuf,
    /// `<build_dir>/raw_coverage.info`
    pub raw_info: PathBuf,
    /// `<build_dir>/coverage.info`
    pub filtered_info: PathBuf,
    /// `<work_dir>/html_report`
    pub report_dir: PathBuf,
}

impl CoverageLayout {
    /// Derives the full layout from the working directory.
    ///
    /// # Arguments
    /// * `work_dir` - The directory expected to contain `CMakeFiles/Test.dir`
    pub fn from_work_dir(work_dir: impl Into<PathBuf>) -> Self {
        let work_dir = work_dir.into();
        let build_dir = work_dir.join(BUILD_DIR_RELATIVE);

        Self {
            raw_info: build_dir.join(RAW_COVERAGE_FILE),
            filtered_info: build_dir.join(FILTERED_COVERAGE_FILE),
            report_dir: work_dir.join(REPORT_DIR_NAME),
            build_dir,
            work_dir,
        }
    }

    /// Derives the layout from the process's current directory.
    pub fn from_current_dir() -> anyhow::Result<Self> {
        use anyhow::Context;

        let cwd = std::env::current_dir().context("Failed to determine the working directory")?;
        Ok(Self::from_work_dir(cwd))
    }

    /// Whether the CMake build tree the workflow expects is present.
    pub fn has_build_dir(&self) -> bool {
        self.build_dir.is_dir()
    }
}

/// The external programs the workflow hands off to.
/// A bare name is looked up on `PATH`; anything containing a separator is a path.
///
/// 流程所调用的外部程序。
/// 纯名称会在 `PATH` 中查找；包含路径分隔符的则视为路径。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    /// The instrumented test executable. Relative paths resolve against the
    /// working directory, never against `PATH`.
    pub test_binary: PathBuf,
    /// The coverage capture tool.
    pub lcov: OsString,
    /// The HTML report generator.
    pub genhtml: OsString,
}

impl Default for Toolchain {
    fn default() -> Self {
        Self {
            test_binary: PathBuf::from(TEST_BINARY_NAME),
            lcov: OsString::from("lcov"),
            genhtml: OsString::from("genhtml"),
        }
    }
}

impl Toolchain {
    /// Resolves the test binary against `work_dir` unless it is already absolute.
    pub fn test_binary_in(&self, work_dir: &Path) -> PathBuf {
        if self.test_binary.is_absolute() {
            self.test_binary.clone()
        } else {
            work_dir.join(&self.test_binary)
        }
    }
}

