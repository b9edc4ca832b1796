// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use colored::*;
use std::env;

use crate::{commands, infra::t};

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for `--lang <VALUE>` or `--lang=<VALUE>`.
fn pre_parse_language() -> Option<String> {
    let args: Vec<String> = env::args().collect();
    if let Some(pos) = args.iter().position(|arg| arg == "--lang") {
        return args.get(pos + 1).cloned();
    }
    args.iter()
        .find_map(|arg| arg.strip_prefix("--lang="))
        .map(str::to_string)
}

fn build_cli(locale: &str) -> Command {
    Command::new("coverage-runner")
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli_about", locale = locale).to_string())
        .long_about(t!("cli_long_about", locale = locale).to_string())
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli_lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("ignored")
                .num_args(0..)
                .trailing_var_arg(true)
                .allow_hyphen_values(true)
                .hide(true)
                .action(ArgAction::Append),
        )
}

/// Parses the command line and runs the coverage workflow.
/// Extra arguments are accepted and ignored with a warning; every path is
/// fixed relative to the working directory.
///
/// 解析命令行并运行覆盖率流程。
/// 多余的参数会被忽略并给出警告；所有路径都相对于工作目录固定。
pub async fn run() -> Result<()> {
    // Language comes first so `--help` is already localized.
    match pre_parse_language() {
        Some(language) => rust_i18n::set_locale(crate::resolve_locale(&language)),
        None => crate::init(),
    }
    let locale = rust_i18n::locale().to_string();

    let matches = build_cli(&locale).get_matches();
    let ignored: Vec<&str> = matches
        .get_many::<String>("ignored")
        .map(|values| values.map(String::as_str).collect())
        .unwrap_or_default();
    if !ignored.is_empty() {
        let joined = ignored.join(" ");
        println!(
            "{}",
            t!("run.extra_args_ignored", locale = locale.as_str(), args = joined).yellow()
        );
    }

    commands::run::execute(&locale).await
}
