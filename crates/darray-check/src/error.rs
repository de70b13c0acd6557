// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::io;

use darray::DArrayError;
use thiserror::Error;

/// Errors that abort a check run.
///
/// A failed check is not an error: it is counted by the context and the run
/// continues.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("Output error: {0}")]
    Io(#[from] io::Error),

    #[error("DArray error: {0}")]
    DArray(#[from] DArrayError),
}
