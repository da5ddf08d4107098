// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use super::UnixMillis;

/// The wall-clock capability threaded through request handlers.
pub trait Clock {
    /// Returns the current date and time.
    fn now(&self) -> UnixMillis;
}

/// A `Clock` backed by the system time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> UnixMillis {
        UnixMillis::now()
    }
}
