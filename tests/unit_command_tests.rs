//! # Command Module Unit Tests / Command 模块单元测试
//!
//! Tests for `spawn_and_capture` and `render_command_line`.
//!
//! 测试 `spawn_and_capture` 和 `render_command_line` 函数。

use coverage_runner::infra::command::{render_command_line, spawn_and_capture};
use std::ffi::{OsStr, OsString};
use tokio::process::Command;

#[cfg(all(test, unix))]
mod spawn_and_capture_tests {
    use super::*;

    #[tokio::test]
    async fn test_captures_stdout_and_stderr() {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg("echo to-stdout; echo to-stderr 1>&2");

        let (status, output) = spawn_and_capture(cmd).await;

        assert!(status.unwrap().success());
        assert!(output.contains("to-stdout\n"));
        assert!(output.contains("to-stderr\n"));
    }

    #[tokio::test]
    async fn test_reports_exit_code() {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg("echo partial; exit 7");

        let (status, output) = spawn_and_capture(cmd).await;

        assert_eq!(status.unwrap().code(), Some(7));
        assert_eq!(output, "partial\n");
    }

    #[tokio::test]
    async fn test_multiline_output_is_complete() {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg("for i in 1 2 3 4 5; do echo line$i; done");

        let (_, output) = spawn_and_capture(cmd).await;

        assert_eq!(output.lines().count(), 5);
        assert!(output.contains("line5"));
    }

    /// A child printing bytes that are not UTF-8 keeps its pipe, runs to
    /// completion and has everything after those bytes captured.
    /// 输出非 UTF-8 字节的子进程不会失去管道，能正常运行结束，其后的输出也会被捕获。
    #[tokio::test]
    async fn test_non_utf8_output_does_not_kill_child() {
        let temp = tempfile::tempdir().unwrap();
        let marker = temp.path().join("counters.gcda");

        let mut cmd = Command::new("sh");
        cmd.current_dir(temp.path()).arg("-c").arg(
            "printf 'binary \\377 junk\\n'; sleep 0.2; \
             i=0; while [ $i -lt 200 ]; do echo after$i; i=$((i+1)); done; \
             printf 'err \\376\\n' 1>&2; echo tail 1>&2; \
             touch counters.gcda",
        );

        let (status, output) = spawn_and_capture(cmd).await;

        assert!(status.unwrap().success());
        assert!(marker.exists());
        assert!(output.contains("binary \u{FFFD} junk\n"));
        assert!(output.contains("after0\n"));
        assert!(output.contains("after199\n"));
        assert!(output.contains("tail\n"));
    }

    #[tokio::test]
    async fn test_missing_program_is_an_error_not_a_panic() {
        let cmd = Command::new("this_command_definitely_does_not_exist_12345");

        let (status, output) = spawn_and_capture(cmd).await;

        assert!(status.is_err());
        assert!(output.is_empty());
    }
}

#[cfg(test)]
mod render_command_line_tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<OsString> {
        values.iter().map(OsString::from).collect()
    }

    #[test]
    fn test_plain_words_are_not_quoted() {
        let rendered = render_command_line(
            OsStr::new("lcov"),
            &args(&["--directory", "/w/CMakeFiles/Test.dir", "--capture"]),
        );
        assert_eq!(rendered, "lcov --directory /w/CMakeFiles/Test.dir --capture");
    }

    #[test]
    fn test_glob_and_spaces_round_trip() {
        let rendered = render_command_line(
            OsStr::new("lcov"),
            &args(&["--remove", "/my dir/raw.info", "/usr/*"]),
        );
        assert_eq!(
            shlex::split(&rendered).unwrap(),
            vec!["lcov", "--remove", "/my dir/raw.info", "/usr/*"]
        );
    }

    #[test]
    fn test_program_without_arguments() {
        assert_eq!(render_command_line(OsStr::new("/w/Test"), &[]), "/w/Test");
    }
}
