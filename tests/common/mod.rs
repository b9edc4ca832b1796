// Shared test helpers for integration tests
#![allow(dead_code)]

use coverage_runner::core::models::{Invocation, StepKind};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

/// Every step in execution order.
pub const ALL_STEPS: [StepKind; 5] = [
    StepKind::RunTests,
    StepKind::CaptureCoverage,
    StepKind::FilterCoverage,
    StepKind::PrepareReportDir,
    StepKind::WriteReport,
];

/// The argument following `flag` in an invocation, if any.
pub fn value_of<'a>(invocation: &'a Invocation, flag: &str) -> Option<&'a OsStr> {
    invocation
        .args
        .iter()
        .position(|arg| arg == flag)
        .and_then(|pos| invocation.args.get(pos + 1))
        .map(|value| value.as_os_str())
}

/// Environment variable the stub programs append their argv to.
pub const STUB_LOG_ENV: &str = "COVERAGE_STUB_LOG";

/// A throwaway working directory with a CMake-like build tree, a `bin/`
/// directory for stub tools and a shared call log.
pub struct StubWorkspace {
    _temp_dir: TempDir,
    /// Canonical path of the working directory.
    pub root: PathBuf,
    /// Directory holding the stub `lcov` / `genhtml`; goes first on `PATH`.
    pub bin_dir: PathBuf,
    pub log_path: PathBuf,
}

impl StubWorkspace {
    pub fn new() -> Self {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let root = temp_dir
            .path()
            .canonicalize()
            .expect("Failed to canonicalize temporary directory");

        let work = root.join("work");
        let bin_dir = root.join("bin");
        fs::create_dir_all(work.join("CMakeFiles/Test.dir")).expect("Failed to create build dir");
        fs::create_dir_all(&bin_dir).expect("Failed to create bin dir");

        Self {
            _temp_dir: temp_dir,
            log_path: root.join("calls.log"),
            root: work,
            bin_dir,
        }
    }

    /// Installs stub `Test`, `lcov` and `genhtml`, all exiting with 0.
    /// `genhtml` also writes an `index.html` into its output directory.
    pub fn with_all_stubs(self) -> Self {
        self.install_test_binary(0);
        self.install_tool("lcov", 0);
        self.install_report_tool(0);
        self
    }

    pub fn install_test_binary(&self, exit_code: i32) {
        write_stub(&self.root.join("Test"), "Test", exit_code, "");
    }

    pub fn install_tool(&self, name: &str, exit_code: i32) {
        write_stub(&self.bin_dir.join(name), name, exit_code, "");
    }

    pub fn install_report_tool(&self, exit_code: i32) {
        let body = r#"while [ $# -gt 0 ]; do
  if [ "$1" = "--output-directory" ]; then
    mkdir -p "$2" && echo '<html></html>' > "$2/index.html"
  fi
  shift
done
"#;
        write_stub(&self.bin_dir.join("genhtml"), "genhtml", exit_code, body);
    }

    /// `PATH` with the stub directory in front of the system directories.
    pub fn path_env(&self) -> String {
        format!("{}:/usr/bin:/bin", self.bin_dir.display())
    }

    pub fn build_dir(&self) -> PathBuf {
        self.root.join("CMakeFiles/Test.dir")
    }

    /// Each recorded call as `"<program> <arg> <arg> ..."`.
    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(&self.log_path)
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

/// Writes an executable shell script that logs its name and argv, runs
/// `body`, then exits with `exit_code`.
pub fn write_stub(path: &Path, name: &str, exit_code: i32, body: &str) {
    let script = format!(
        r#"#!/bin/sh
{{
  printf '%s' '{name}'
  for arg in "$@"; do printf ' %s' "$arg"; done
  printf '\n'
}} >> "${log}"
{body}
exit {exit_code}
"#,
        name = name,
        log = STUB_LOG_ENV,
        body = body,
        exit_code = exit_code
    );
    fs::write(path, script).expect("Failed to write stub script");
    make_executable(path);
}

#[cfg(unix)]
pub fn make_executable(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    let mut perms = fs::metadata(path).expect("Failed to stat stub").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).expect("Failed to chmod stub");
}

#[cfg(not(unix))]
pub fn make_executable(_path: &Path) {}
