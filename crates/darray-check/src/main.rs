// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Console check runner for darray.
//!
//! Drives the container through its append, grow and direct-access paths,
//! prints a red report for every failed check and a colored summary.
//!
//! Exit status is `1` if any check failed, unless
//! `DARRAY_CHECK_ALWAYS_SUCCEED=1` is set.

mod config;
mod context;
mod error;
mod scenarios;

#[cfg(test)]
mod tests;

use std::io;
use std::process::ExitCode;

use config::RunnerConfig;
use context::CheckContext;

fn main() -> ExitCode {
    let config = RunnerConfig::from_env();
    let mut ctx = CheckContext::new(io::stdout().lock());

    if let Err(e) = scenarios::run_all(&mut ctx).and_then(|()| ctx.summary()) {
        eprintln!("darray-check: {e}");
        return ExitCode::FAILURE;
    }

    config.exit_code(ctx.failed())
}
