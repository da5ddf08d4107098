// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use crate::clock::UnixMillis;
use crate::common::Error;
use crate::serde_utils::is_default;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Deserialize, Serialize)]
/// The short token that maps to an original long URL.
pub struct Alias(pub String);
crate::impl_wrapper_str!(Alias);

/// A short link and the original URL it expands to.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ShortLink {
    /// The alias the link is addressed by.
    pub alias: Alias,
    /// The URL the alias expands to.
    pub original_url: String,
    /// The date/time past which the link no longer resolves, if any.
    #[serde(default, skip_serializing_if = "is_default")]
    pub expire_at: Option<UnixMillis>,
}

/// The URL retrieval capability.  Implementations own alias storage and its
/// concurrency discipline.
#[async_trait]
pub trait UrlRetriever {
    /// Returns the link for `alias` if it exists and has not expired by `now`.
    async fn get_after(&self, alias: &str, now: UnixMillis) -> Result<ShortLink, Error>;
}
