// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use crate::common::{Email, Error, Identity, UserName};
use crate::serde_utils::is_default;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A local account, keyed by email.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Account {
    /// The email the account is keyed by.
    pub email: Email,
    /// The display name, if any.
    #[serde(default, skip_serializing_if = "is_default")]
    pub user_name: Option<UserName>,
}

/// The account management capability.  Implementations own persistence and
/// its concurrency discipline.
#[async_trait]
pub trait AccountService {
    /// Returns the account for the specified identity, creating it if needed.
    async fn find_or_create(&self, identity: &Identity) -> Result<Account, Error>;
}
