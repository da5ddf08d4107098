// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::account::AccountService;
use crate::common::Error;
use crate::oauth::{ProviderBinding, Url};
use crate::signin::{AuthToken, Authenticator};
use std::sync::Arc;

/// The provider-agnostic OAuth2 sign-in operation.  Holds no mutable state of
/// its own, so one value may serve arbitrarily many concurrent requests.
#[derive(Clone)]
pub struct OAuthSignIn {
    account_service: Arc<dyn AccountService + Send + Sync>,
    authenticator: Arc<dyn Authenticator + Send + Sync>,
    binding: ProviderBinding,
}

impl OAuthSignIn {
    /// Returns a `Url` that redirects to the provider's consent screen.
    pub fn sign_in_url(&self) -> Url {
        self.binding.oauth.sign_in_url()
    }

    /// Completes the provider's redirect: exchanges the authorization code
    /// for an access token, fetches the profile, resolves or creates the
    /// local account, and mints a session token.
    pub async fn sign_in(&self, authorization_code: String) -> Result<AuthToken, Error> {
        let access_token = self
            .binding
            .oauth
            .request_access_token(authorization_code)
            .await?;
        let identity = self.binding.api.profile(&access_token).await?;
        if identity.email.is_none() {
            return Err(Error::String(format!(
                "{}: no email on profile",
                identity.login_id
            )));
        }
        let account = self.account_service.find_or_create(&identity).await?;
        self.authenticator.generate_token(&account)
    }
}

/// Composes the sign-in operation for one provider binding.  Composition
/// performs no I/O and cannot fail; all fallible work happens per request.
pub fn new_oauth_sign_in(
    binding: &ProviderBinding,
    account_service: Arc<dyn AccountService + Send + Sync>,
    authenticator: Arc<dyn Authenticator + Send + Sync>,
) -> OAuthSignIn {
    OAuthSignIn {
        account_service,
        authenticator,
        binding: binding.clone(),
    }
}
