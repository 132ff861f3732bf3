// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

use std::num::ParseIntError;

/// Errors returned by the fallible operations of this crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeError {
    /// Advancing a finite time left the `i64` range.
    #[error("adding {periods} periods to t={canonical} overflows the discrete time axis")]
    Overflow { canonical: i64, periods: i64 },
    /// The infinity sentinel cannot be narrowed to a finite time.
    #[error("infinity has no finite symbolic time representation")]
    Infinite,
    /// The input is not a recognised time literal.
    #[error("invalid time literal {input:?}: {source}")]
    Parse {
        input: String,
        #[source]
        source: ParseIntError,
    },
}
