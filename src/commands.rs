//! # Commands Module / 命令模块
//!
//! Entry points reachable from the command line.
//! 可从命令行调用的入口点。

pub mod run;
