// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

/// Accounts resolved from provider identities.
mod account;

pub use self::account::{Account, AccountService};
