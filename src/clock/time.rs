// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};

/// A Unix date/time which contains the number of non leap milliseconds since 1970.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Ord, PartialOrd, Deserialize, Serialize)]
pub struct UnixMillis(pub i64);

impl UnixMillis {
    /// Milliseconds per second.
    pub const MILLIS_PER_SECOND: i64 = 1000;

    /// Adds milliseconds to a Unix date/time and returns the result.
    pub fn add_millis(&self, m: i64) -> Self {
        Self(self.0.saturating_add(m))
    }

    /// Adds seconds to a Unix date/time and returns the result.
    pub fn add_seconds(&self, s: i64) -> Self {
        self.add_millis(s.saturating_mul(Self::MILLIS_PER_SECOND))
    }

    /// Returns whether this date/time precedes the specified one.
    pub fn before(&self, other: UnixMillis) -> bool {
        self.0 < other.0
    }

    /// Creates a `UnixMillis` with the current date and time.
    pub fn now() -> Self {
        let duration = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time too low");
        Self(
            duration
                .as_millis()
                .try_into()
                .expect("system time too high"),
        )
    }

    /// Returns the number of non leap seconds since 1970.
    pub fn to_unix_seconds(&self) -> i64 {
        self.0 / Self::MILLIS_PER_SECOND
    }
}

impl Display for UnixMillis {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        Display::fmt(&self.0, f)
    }
}
