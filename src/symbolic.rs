// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Symbolic (counter-based) discrete time.
//!
//! [`SymbolicTime`] is the finite variant of the time axis: a plain `i64`
//! coordinate *t* with no calendar meaning attached.  What one period
//! stands for (a tick, a step, a day) is decided by the caller.

use super::error::TimeError;
use super::instant::TimeInstant;
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A finite point *t* on the discrete time axis.
///
/// The coordinate is private; values are built through [`SymbolicTime::of`].
/// The type is `Copy` and every arithmetic operation yields a new value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct SymbolicTime {
    value: i64,
}

impl SymbolicTime {
    /// The origin of the axis, *t = 0*.
    pub const ZERO: Self = Self::of(0);

    /// Build a symbolic time from its discrete coordinate.
    ///
    /// Every `i64`, negative values included, is a valid coordinate.
    #[inline]
    pub const fn of(value: i64) -> Self {
        Self { value }
    }

    /// The wrapped coordinate.
    #[inline]
    pub const fn value(&self) -> i64 {
        self.value
    }

    /// Canonical value; identical to [`value`](Self::value) for this variant.
    #[inline]
    pub const fn canonical(&self) -> i64 {
        self.value
    }

    /// Advance by `periods`, failing if the result leaves the `i64` range.
    pub fn checked_add(self, periods: i64) -> Result<Self, TimeError> {
        self.value
            .checked_add(periods)
            .map(Self::of)
            .ok_or(TimeError::Overflow {
                canonical: self.value,
                periods,
            })
    }

    /// Advance by `periods` with two's-complement wraparound.
    #[inline]
    pub const fn wrapping_add(self, periods: i64) -> Self {
        Self::of(self.value.wrapping_add(periods))
    }

    /// Advance by `periods`, clamping at `i64::MIN` / `i64::MAX`.
    pub fn saturating_add(self, periods: i64) -> Self {
        match self.value.checked_add(periods) {
            Some(value) => Self::of(value),
            None => {
                let clamped = self.value.saturating_add(periods);
                tracing::debug!(
                    value = self.value,
                    periods,
                    clamped,
                    "symbolic time addition saturated"
                );
                Self::of(clamped)
            }
        }
    }

    /// Move back by `periods`, clamping at `i64::MIN` / `i64::MAX`.
    pub fn saturating_sub(self, periods: i64) -> Self {
        match self.value.checked_sub(periods) {
            Some(value) => Self::of(value),
            None => {
                let clamped = self.value.saturating_sub(periods);
                tracing::debug!(
                    value = self.value,
                    periods,
                    clamped,
                    "symbolic time subtraction saturated"
                );
                Self::of(clamped)
            }
        }
    }
}

impl TimeInstant for SymbolicTime {
    #[inline]
    fn canonical(&self) -> i64 {
        SymbolicTime::canonical(self)
    }

    #[inline]
    fn add_periods(&self, periods: i64) -> Self {
        self.saturating_add(periods)
    }
}

impl fmt::Display for SymbolicTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={}", self.value)
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl Add<i64> for SymbolicTime {
    type Output = Self;
    #[inline]
    fn add(self, periods: i64) -> Self::Output {
        self.saturating_add(periods)
    }
}

impl AddAssign<i64> for SymbolicTime {
    #[inline]
    fn add_assign(&mut self, periods: i64) {
        *self = self.saturating_add(periods);
    }
}

impl Sub<i64> for SymbolicTime {
    type Output = Self;
    #[inline]
    fn sub(self, periods: i64) -> Self::Output {
        self.saturating_sub(periods)
    }
}

impl SubAssign<i64> for SymbolicTime {
    #[inline]
    fn sub_assign(&mut self, periods: i64) {
        *self = self.saturating_sub(periods);
    }
}

/// Periods elapsed from `rhs` to `self`, saturating on overflow.
impl Sub for SymbolicTime {
    type Output = i64;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.value.saturating_sub(rhs.value)
    }
}

// ── Conversions ───────────────────────────────────────────────────────────

impl From<SymbolicTime> for i64 {
    #[inline]
    fn from(time: SymbolicTime) -> Self {
        time.value
    }
}
