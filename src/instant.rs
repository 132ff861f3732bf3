// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Unit-free discrete time.
//!
//! [`Time`] is the core type of the crate.  It is a closed set of two
//! variants: a finite [`SymbolicTime`] coordinate, or the [`Time::INFINITY`]
//! sentinel that bounds every finite value from above.  Both variants expose
//! a single canonical `i64`, and ordering, equality and hashing are defined
//! purely on that value, so a finite time is equal to any other time that
//! shares its coordinate, whatever the variant.
//!
//! The unit of one *period* is left to the caller.

use super::error::TimeError;
use super::symbolic::SymbolicTime;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ═══════════════════════════════════════════════════════════════════════════
// TimeInstant trait
// ═══════════════════════════════════════════════════════════════════════════

/// Trait for types that represent a point on the discrete time axis.
///
/// Implementors must keep `Ord`, `Eq` and `Hash` consistent with
/// [`canonical`](TimeInstant::canonical).
pub trait TimeInstant: Copy + Ord + Hash + fmt::Debug {
    /// The time coordinate as a signed 64-bit integer.
    fn canonical(&self) -> i64;

    /// A new instant advanced by `periods` base units.
    ///
    /// Negative `periods` move backward and zero yields an equal value.
    fn add_periods(&self, periods: i64) -> Self;

    /// Whether this instant sits at the unreachable upper bound.
    ///
    /// Decided by value, like equality: any instant whose canonical value is
    /// `i64::MAX` is infinite.
    fn is_infinite(&self) -> bool {
        self.canonical() == i64::MAX
    }

    /// Periods elapsed from `earlier` to `self`.
    ///
    /// Returns `None` if either side is infinite or the difference overflows.
    fn periods_since(&self, earlier: &Self) -> Option<i64> {
        if self.is_infinite() || earlier.is_infinite() {
            return None;
        }
        self.canonical().checked_sub(earlier.canonical())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Time — finite or infinite
// ═══════════════════════════════════════════════════════════════════════════

/// A point on the discrete time axis.
#[derive(Debug, Copy, Clone)]
pub enum Time {
    /// A finite symbolic coordinate.
    Finite(SymbolicTime),
    /// The positive-infinity sentinel; see [`Time::INFINITY`].
    Infinite,
}

impl Time {
    /// The largest representable time.
    ///
    /// Its canonical value is `i64::MAX`, it absorbs every addition, and it
    /// is greater than every time with a smaller canonical value.
    pub const INFINITY: Self = Self::Infinite;

    /// Shorthand for `Time::Finite(SymbolicTime::of(value))`.
    #[inline]
    pub const fn symbolic(value: i64) -> Self {
        Self::Finite(SymbolicTime::of(value))
    }

    /// The canonical coordinate; `i64::MAX` for infinity.
    #[inline]
    pub const fn canonical(&self) -> i64 {
        match self {
            Self::Finite(t) => t.value(),
            Self::Infinite => i64::MAX,
        }
    }

    /// Whether this time equals [`Time::INFINITY`].
    ///
    /// `Time::symbolic(i64::MAX)` is infinite too, so this agrees with `==`.
    #[inline]
    pub const fn is_infinite(&self) -> bool {
        self.canonical() == i64::MAX
    }

    /// Whether this time lies strictly below infinity.
    #[inline]
    pub const fn is_finite(&self) -> bool {
        !self.is_infinite()
    }

    /// The stored finite coordinate, if any.
    ///
    /// Structural: `Time::symbolic(i64::MAX)` still yields its coordinate.
    #[inline]
    pub const fn as_symbolic(&self) -> Option<SymbolicTime> {
        match self {
            Self::Finite(t) => Some(*t),
            Self::Infinite => None,
        }
    }

    /// Advance by `periods`, failing if a finite value leaves the `i64` range.
    ///
    /// Infinity always succeeds and stays infinite.
    pub fn checked_add(self, periods: i64) -> Result<Self, TimeError> {
        match self {
            Self::Finite(t) => Ok(Self::Finite(t.checked_add(periods)?)),
            Self::Infinite => Ok(Self::Infinite),
        }
    }

    /// Advance by `periods` with two's-complement wraparound on finite values.
    #[inline]
    pub const fn wrapping_add(self, periods: i64) -> Self {
        match self {
            Self::Finite(t) => Self::Finite(t.wrapping_add(periods)),
            Self::Infinite => Self::Infinite,
        }
    }

    /// Advance by `periods`, clamping finite values at the `i64` bounds.
    pub fn saturating_add(self, periods: i64) -> Self {
        match self {
            Self::Finite(t) => Self::Finite(t.saturating_add(periods)),
            Self::Infinite => Self::Infinite,
        }
    }

    /// Move back by `periods`, clamping finite values at the `i64` bounds.
    pub fn saturating_sub(self, periods: i64) -> Self {
        match self {
            Self::Finite(t) => Self::Finite(t.saturating_sub(periods)),
            Self::Infinite => Self::Infinite,
        }
    }
}

impl TimeInstant for Time {
    #[inline]
    fn canonical(&self) -> i64 {
        Time::canonical(self)
    }

    #[inline]
    fn add_periods(&self, periods: i64) -> Self {
        self.saturating_add(periods)
    }

    #[inline]
    fn is_infinite(&self) -> bool {
        Time::is_infinite(self)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Equality and ordering on the canonical value
// ═══════════════════════════════════════════════════════════════════════════

impl PartialEq for Time {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for Time {}

impl PartialOrd for Time {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Time {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical().cmp(&other.canonical())
    }
}

impl Hash for Time {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

impl PartialEq<SymbolicTime> for Time {
    #[inline]
    fn eq(&self, other: &SymbolicTime) -> bool {
        self.canonical() == other.canonical()
    }
}

impl PartialEq<Time> for SymbolicTime {
    #[inline]
    fn eq(&self, other: &Time) -> bool {
        self.canonical() == other.canonical()
    }
}

impl PartialOrd<SymbolicTime> for Time {
    #[inline]
    fn partial_cmp(&self, other: &SymbolicTime) -> Option<Ordering> {
        Some(self.canonical().cmp(&other.canonical()))
    }
}

impl PartialOrd<Time> for SymbolicTime {
    #[inline]
    fn partial_cmp(&self, other: &Time) -> Option<Ordering> {
        Some(self.canonical().cmp(&other.canonical()))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Arithmetic
// ═══════════════════════════════════════════════════════════════════════════

impl Add<i64> for Time {
    type Output = Self;
    #[inline]
    fn add(self, periods: i64) -> Self::Output {
        self.saturating_add(periods)
    }
}

impl AddAssign<i64> for Time {
    #[inline]
    fn add_assign(&mut self, periods: i64) {
        *self = self.saturating_add(periods);
    }
}

impl Sub<i64> for Time {
    type Output = Self;
    #[inline]
    fn sub(self, periods: i64) -> Self::Output {
        self.saturating_sub(periods)
    }
}

impl SubAssign<i64> for Time {
    #[inline]
    fn sub_assign(&mut self, periods: i64) {
        *self = self.saturating_sub(periods);
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Conversions
// ═══════════════════════════════════════════════════════════════════════════

impl From<SymbolicTime> for Time {
    #[inline]
    fn from(time: SymbolicTime) -> Self {
        Self::Finite(time)
    }
}

impl From<i64> for Time {
    #[inline]
    fn from(value: i64) -> Self {
        Self::symbolic(value)
    }
}

impl TryFrom<Time> for SymbolicTime {
    type Error = TimeError;

    fn try_from(time: Time) -> Result<Self, Self::Error> {
        time.as_symbolic().ok_or(TimeError::Infinite)
    }
}

// ── Display / FromStr ─────────────────────────────────────────────────────

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(t) => fmt::Display::fmt(t, f),
            Self::Infinite => f.write_str("t=∞"),
        }
    }
}

/// Accepts `t=15`, `15`, `t=∞`, `∞`, `inf` and `infinity`.
impl FromStr for Time {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let literal = trimmed.strip_prefix("t=").unwrap_or(trimmed).trim();
        if literal == "∞"
            || literal.eq_ignore_ascii_case("inf")
            || literal.eq_ignore_ascii_case("infinity")
        {
            return Ok(Self::INFINITY);
        }
        literal
            .parse::<i64>()
            .map(Self::symbolic)
            .map_err(|source| TimeError::Parse {
                input: s.to_owned(),
                source,
            })
    }
}

impl FromStr for SymbolicTime {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SymbolicTime::try_from(s.parse::<Time>()?)
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for Time {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.serialize_i64(self.canonical())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Time {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = i64::deserialize(deserializer)?;
        Ok(if v == i64::MAX {
            Self::INFINITY
        } else {
            Self::symbolic(v)
        })
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
