// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::common::{Error, Identity};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// A convenient alias for URL so consuming code doesn't need to add it to `Cargo.toml`
pub type Url = reqwest::Url;

/// The `OAuthProvider` enum contains the list of supported `OAuth2` providers.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Hash, Serialize)]
pub enum OAuthProvider {
    /// https://facebook.com
    Facebook,
    /// https://github.com
    Github,
}

impl Display for OAuthProvider {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            Self::Facebook => Display::fmt("Facebook", f),
            Self::Github => Display::fmt("Github", f),
        }
    }
}

/// Convert from provider name to `OAuthProvider` enum.
impl TryFrom<String> for OAuthProvider {
    type Error = Error;
    fn try_from(oauth_provider: String) -> Result<Self, Error> {
        match oauth_provider.as_str() {
            "Facebook" | "facebook" => Ok(OAuthProvider::Facebook),
            "Github" | "github" => Ok(OAuthProvider::Github),
            _ => Err(Error::String(format!(
                "{}: not an oauth2 provider",
                oauth_provider
            ))),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
/// An OAuth2 access token issued by a provider.
pub struct AccessToken(pub String);
crate::impl_wrapper_str!(AccessToken);

/// One provider's OAuth2 connection: the consent-screen link and the
/// authorization-code exchange.
#[async_trait]
pub trait OAuthConnection {
    /// Returns provider.
    fn provider(&self) -> OAuthProvider;
    /// Exchanges an authorization code for an access token.
    async fn request_access_token(&self, authorization_code: String)
        -> Result<AccessToken, Error>;
    /// Returns a `Url` that redirects to the provider's consent screen.
    fn sign_in_url(&self) -> Url;
}

/// One provider's public API.
#[async_trait]
pub trait ProfileApi {
    /// Returns the profile of the user who granted the specified token.
    async fn profile(&self, access_token: &AccessToken) -> Result<Identity, Error>;
}

/// Groups one provider's OAuth2 connection and public API together.  Both
/// supported providers are bound through this same shape, so consuming code
/// never special-cases provider identity.
#[derive(Clone)]
pub struct ProviderBinding {
    /// The OAuth2 connection used to sign users in.
    pub oauth: Arc<dyn OAuthConnection + Send + Sync>,
    /// The public API used to fetch profiles.
    pub api: Arc<dyn ProfileApi + Send + Sync>,
}
