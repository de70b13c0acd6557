// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::env;
use std::process::ExitCode;

/// Environment variable that forces a zero exit status.
pub const ALWAYS_SUCCEED_VAR: &str = "DARRAY_CHECK_ALWAYS_SUCCEED";

/// Runner settings read from the environment.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Exit with status 0 even when checks failed.
    pub always_succeed: bool,
}

impl RunnerConfig {
    pub fn from_env() -> Self {
        Self::from_value(env::var(ALWAYS_SUCCEED_VAR).ok().as_deref())
    }

    /// Accepts `1`, `true`, `yes` and `on`, case-insensitively.
    pub fn from_value(value: Option<&str>) -> Self {
        let always_succeed = value
            .map(str::trim)
            .map(|v| {
                ["1", "true", "yes", "on"]
                    .iter()
                    .any(|accepted| v.eq_ignore_ascii_case(accepted))
            })
            .unwrap_or(false);

        Self { always_succeed }
    }

    pub fn exit_code(&self, failed: u32) -> ExitCode {
        if failed == 0 || self.always_succeed {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}
