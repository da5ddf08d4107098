// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

/// A client of the Facebook OAuth2 and graph APIs.
mod facebook;
/// A client of the Github OAuth2 and REST APIs.
mod github;
/// A wrapper around a particular OAuth2 provider API.
mod provider;
mod tests;

pub use self::facebook::{FacebookApi, FacebookOAuth2Service};
pub use self::github::{GithubApi, GithubOAuth2Service};
pub use self::provider::{
    AccessToken, OAuthConnection, OAuthProvider, ProfileApi, ProviderBinding, Url,
};
