// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Discrete Time
//!
//! This crate provides a unit-free, discrete notion of time: an ordered,
//! addable `i64` coordinate whose unit (a tick, a step, a day) is decided by
//! the caller, plus an infinity sentinel usable as an upper bound.
//!
//! # Core types
//!
//! - [`Time`] — a point on the axis: either [`Time::Finite`] or [`Time::INFINITY`].
//! - [`SymbolicTime`] — the finite, counter-based variant, built with [`SymbolicTime::of`].
//! - [`TimeInstant`] — trait shared by every point on the axis.
//! - [`TimeError`] — errors from checked arithmetic, narrowing and parsing.
//!
//! # Ordering and equality
//!
//! Every instant has a canonical `i64`.  Ordering, equality and hashing
//! compare canonical values only, across variants:
//!
//! ```
//! use zeitgeist::{SymbolicTime, Time};
//!
//! assert_eq!((SymbolicTime::of(10) + 5).value(), 15);
//! assert_eq!(SymbolicTime::of(-3) + 3, SymbolicTime::of(0));
//! assert!(Time::INFINITY > SymbolicTime::of(1_000));
//! assert_eq!(SymbolicTime::of(i64::MAX), Time::INFINITY);
//! ```
//!
//! # Overflow
//!
//! `+`, `-` and [`TimeInstant::add_periods`] saturate at the `i64` bounds.
//! Use `checked_add` to detect overflow or `wrapping_add` for
//! two's-complement wraparound.  Infinity absorbs all three.

mod error;
pub(crate) mod instant;
mod symbolic;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use error::TimeError;
pub use instant::{Time, TimeInstant};
pub use symbolic::SymbolicTime;
