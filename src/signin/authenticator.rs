// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::account::Account;
use crate::clock::Clock;
use crate::common::Error;
use crate::jwt::{create_jwt, validate_jwt, JwtClient};
use crate::serde_utils::is_default;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
/// A session token minted upon successful sign in.
pub struct AuthToken(pub String);
crate::impl_wrapper_str!(AuthToken);

/// The capability that mints and checks session credentials.
pub trait Authenticator {
    /// Mints a session token for the specified account.
    fn generate_token(&self, account: &Account) -> Result<AuthToken, Error>;
    /// Returns `true` if the specified token names a live session.
    fn is_signed_in(&self, token: &str) -> bool;
}

/// Claims carried by a session token.
#[derive(Debug, Deserialize, Serialize)]
struct SessionClaims {
    email: String,
    #[serde(default, skip_serializing_if = "is_default")]
    user_name: Option<String>,
}

/// An `Authenticator` backed by HMAC-signed JWTs.
pub struct JwtAuthenticator {
    clock: Arc<dyn Clock + Send + Sync>,
    jwt_client: JwtClient,
    token_valid_seconds: i64,
}

impl JwtAuthenticator {
    /// Creates a JWT authenticator whose tokens expire after
    /// `token_valid_seconds`.
    pub fn new(
        jwt_client: JwtClient,
        clock: Arc<dyn Clock + Send + Sync>,
        token_valid_seconds: i64,
    ) -> Self {
        Self {
            clock,
            jwt_client,
            token_valid_seconds,
        }
    }
}

impl Authenticator for JwtAuthenticator {
    fn generate_token(&self, account: &Account) -> Result<AuthToken, Error> {
        let claims = SessionClaims {
            email: account.email.to_string(),
            user_name: account.user_name.as_ref().map(|u| u.to_string()),
        };
        let jwt = create_jwt(
            &self.jwt_client,
            claims,
            self.clock.now(),
            self.token_valid_seconds,
        )?;
        Ok(AuthToken(jwt))
    }

    fn is_signed_in(&self, token: &str) -> bool {
        validate_jwt::<SessionClaims>(&self.jwt_client, token)
            .map(|claims| !claims.email.is_empty())
            .unwrap_or(false)
    }
}
