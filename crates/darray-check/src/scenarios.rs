// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::io::Write;

use darray::{DArray, DArrayDouble, DArrayInt, DArrayString};
use darray_defs::{F32, I32, Vec3F32};

use crate::context::CheckContext;
use crate::error::CheckError;

/// Runs every scenario in order.
pub fn run_all<W: Write>(ctx: &mut CheckContext<W>) -> Result<(), CheckError> {
    check_int(ctx)?;
    check_string(ctx)?;
    check_double(ctx)?;
    check_vec3(ctx)?;

    Ok(())
}

// =============================================================================
// DArray<i32>
// =============================================================================

fn check_int<W: Write>(ctx: &mut CheckContext<W>) -> Result<(), CheckError> {
    ctx.section("darray (i32)")?;

    // Append
    let mut da = DArrayInt::try_new()?;
    da.append(1)?;
    ctx.check_eq(1, da[0])?;
    da.append(2)?;
    ctx.check_eq(2, da[1])?;
    da.append(3)?;
    ctx.check_eq(3, da[2])?;
    da.destroy();

    // Grow
    let mut da = DArrayInt::try_new()?;
    ctx.check_eq(256, da.capacity())?;
    da.grow()?;
    ctx.check_eq(512, da.capacity())?;
    da.destroy();

    // Append a bunch
    let mut da = DArrayInt::try_new()?;
    for i in 0..2047 {
        da.append(i)?;
    }
    ctx.check_eq(2048, da.capacity())?;
    ctx.check_eq(2047, da.size())?;
    // SAFETY: 1111 < size.
    ctx.check_eq(1111, unsafe { *da.get_unchecked(1111) })?;
    da.destroy();

    // Direct writes leave size alone until set_size
    let mut da = DArray::<I32>::try_with_capacity(4)?;
    // SAFETY: indices are below capacity, slots 0..2 are written before set_size(2).
    unsafe {
        da.write_unchecked(0, 40);
        da.write_unchecked(1, 41);
    }
    ctx.check_eq(0, da.size())?;
    // SAFETY: see above.
    unsafe { da.set_size(2) };
    ctx.check_eq(&[40, 41][..], da.as_slice())?;
    ctx.check_eq(4, da.capacity())?;

    Ok(())
}

// =============================================================================
// Smoke scenarios on other element types
// =============================================================================

fn check_string<W: Write>(ctx: &mut CheckContext<W>) -> Result<(), CheckError> {
    ctx.section("darray (String)")?;

    let mut da = DArrayString::try_with_capacity(2)?;
    for word in ["alpha", "beta", "gamma"] {
        da.append(word.to_string())?;
    }

    ctx.check_eq(3, da.size())?;
    ctx.check_eq(4, da.capacity())?;
    ctx.check_eq("gamma", da[2].as_str())?;

    Ok(())
}

fn check_double<W: Write>(ctx: &mut CheckContext<W>) -> Result<(), CheckError> {
    ctx.section("darray (f64)")?;

    let mut da = DArrayDouble::try_new()?;
    da.extend_from_slice(&[0.5, 1.5, 2.0])?;

    ctx.check_eq(4.0, da.iter().sum::<f64>())?;
    ctx.check_eq(256, da.capacity())?;

    Ok(())
}

fn check_vec3<W: Write>(ctx: &mut CheckContext<W>) -> Result<(), CheckError> {
    ctx.section("darray (Vec3F32)")?;

    let mut da = DArray::<Vec3F32>::try_new()?;
    for i in 0..300u16 {
        da.append(Vec3F32::splat(F32::from(i)))?;
    }

    ctx.check_eq(300, da.size())?;
    ctx.check_eq(512, da.capacity())?;
    ctx.check_eq(Vec3F32::new(299.0, 299.0, 299.0), da[299])?;
    ctx.check_eq(3.0, da[1].dot(Vec3F32::splat(1.0)))?;

    Ok(())
}
