// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::process::ExitCode;

use crate::config::RunnerConfig;

#[test]
fn test_from_value_unset() {
    assert!(!RunnerConfig::from_value(None).always_succeed);
}

#[test]
fn test_from_value_accepted() {
    for value in ["1", "true", "TRUE", " yes ", "On"] {
        assert!(
            RunnerConfig::from_value(Some(value)).always_succeed,
            "{value:?} should enable always_succeed"
        );
    }
}

#[test]
fn test_from_value_rejected() {
    for value in ["", "0", "false", "no", "2"] {
        assert!(
            !RunnerConfig::from_value(Some(value)).always_succeed,
            "{value:?} should not enable always_succeed"
        );
    }
}

#[test]
fn test_exit_code() {
    let strict = RunnerConfig::default();
    let lenient = RunnerConfig {
        always_succeed: true,
    };

    assert_eq!(strict.exit_code(0), ExitCode::SUCCESS);
    assert_eq!(strict.exit_code(3), ExitCode::FAILURE);
    assert_eq!(lenient.exit_code(3), ExitCode::SUCCESS);
}
