// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::fmt::Debug;
use std::io::Write;

use crossterm::style::Stylize;

use crate::error::CheckError;

/// Counts checks and reports failures to a writer.
///
/// Output is styled with crossterm, which emits no escape codes when
/// `NO_COLOR` is set.
///
/// # Example
///
/// ```rust,ignore
/// let mut ctx = CheckContext::new(Vec::new());
/// ctx.section("example")?;
/// ctx.check_eq(1, 1)?;
/// ctx.check_eq(1, 2)?; // prints "Check 2 failed"
/// ctx.summary()?;
///
/// assert_eq!(ctx.total(), 2);
/// assert_eq!(ctx.failed(), 1);
/// ```
pub struct CheckContext<W: Write> {
    out: W,
    total: u32,
    failed: u32,
}

impl<W: Write> CheckContext<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            total: 0,
            failed: 0,
        }
    }

    #[cfg(test)]
    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn failed(&self) -> u32 {
        self.failed
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Prints a section banner.
    pub fn section(&mut self, name: &str) -> Result<(), CheckError> {
        writeln!(self.out, "\n== Checking {name} ==")?;
        Ok(())
    }

    /// Records one check; reports it when `expected != actual`.
    ///
    /// Returns `true` if the check passed.
    pub fn check_eq<T>(&mut self, expected: T, actual: T) -> Result<bool, CheckError>
    where
        T: PartialEq + Debug,
    {
        self.total += 1;

        if expected == actual {
            return Ok(true);
        }

        self.failed += 1;

        let report = format!(
            "Check {} failed:\n\tExpected: {:?}\n\tActual: {:?}",
            self.total, expected, actual
        );
        writeln!(self.out, "{}", report.red())?;

        Ok(false)
    }

    /// Prints the results banner and the pass/fail line.
    pub fn summary(&mut self) -> Result<(), CheckError> {
        writeln!(self.out, "\n== Results ==")?;

        match self.failed {
            0 => writeln!(self.out, "{}", "All checks passed".yellow())?,
            1 => writeln!(self.out, "{}", "1 check failed".red())?,
            n => writeln!(self.out, "{}", format!("{n} checks failed").red())?,
        }

        self.out.flush()?;
        Ok(())
    }
}
