//! # Command Execution Module / 命令执行模块
//!
//! Spawning children and capturing what they print, plus a display helper
//! for logging the exact command line that was run.
//!
//! 派生子进程并捕获其输出，以及用于记录实际执行命令行的显示辅助函数。

use std::ffi::{OsStr, OsString};
use std::process::Stdio;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::sync::Mutex;

use crate::infra::t;

/// Spawns a command, captures its stdout and stderr.
/// The output streams are read concurrently and combined into a single string.
///
/// # Arguments
/// * `cmd` - The `tokio::process::Command` to execute.
///
/// # Returns
/// A tuple containing:
/// - The `ExitStatus` of the process wrapped in an `io::Result`.
/// - The combined stdout and stderr as a `String`.
///
/// 派生一个命令，捕获其 stdout 和 stderr。
/// 输出流被并发读取并合并到一个字符串中。
pub async fn spawn_and_capture(
    mut cmd: tokio::process::Command,
) -> (std::io::Result<std::process::ExitStatus>, String) {
    let mut child = match cmd.stdout(Stdio::piped()).stderr(Stdio::piped()).spawn() {
        Ok(child) => child,
        Err(e) => return (Err(e), String::new()),
    };

    let (Some(stdout), Some(stderr)) = (child.stdout.take(), child.stderr.take()) else {
        let _ = child.kill().await;
        return (
            Err(std::io::Error::other(
                t!("command.capture_streams_failed").to_string(),
            )),
            String::new(),
        );
    };

    let output = Arc::new(Mutex::new(String::new()));
    let stdout_handle = tokio::spawn(drain_lines(stdout, Arc::clone(&output)));
    let stderr_handle = tokio::spawn(drain_lines(stderr, Arc::clone(&output)));

    let status = child.wait().await;

    for (stream, handle) in [("stdout", stdout_handle), ("stderr", stderr_handle)] {
        if let Err(e) = handle.await {
            eprintln!(
                "{}",
                t!("command.join_reader_failed", stream = stream, error = e)
            );
        }
    }

    let output = output.lock().await.clone();
    (status, output)
}

/// Reads `reader` to EOF line by line, appending each line to `output`.
///
/// Lines are raw bytes decoded lossily, so a child printing non-UTF-8 data
/// never loses its pipe: closing the read end early would SIGPIPE it before
/// it gets to exit normally.
async fn drain_lines<R>(reader: R, output: Arc<Mutex<String>>)
where
    R: AsyncRead + Unpin,
{
    let mut segments = BufReader::new(reader).split(b'\n');
    loop {
        match segments.next_segment().await {
            Ok(Some(segment)) => {
                let mut output = output.lock().await;
                output.push_str(&String::from_utf8_lossy(&segment));
                output.push('\n');
            }
            Ok(None) => break,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(_) => break,
        }
    }
}

/// Renders a program and its arguments as a POSIX shell command line.
/// Arguments such as `/usr/*` come out quoted, which is how they reach the
/// program: literally, never glob-expanded.
///
/// 将程序及其参数渲染为 POSIX shell 命令行。
/// 诸如 `/usr/*` 的参数会被加上引号，这正是它们传递给程序的方式：按字面传递，从不展开。
pub fn render_command_line(program: &OsStr, args: &[OsString]) -> String {
    let words: Vec<String> = std::iter::once(program)
        .chain(args.iter().map(OsString::as_os_str))
        .map(|word| word.to_string_lossy().into_owned())
        .collect();

    shlex::try_join(words.iter().map(String::as_str)).unwrap_or_else(|_| words.join(" "))
}
