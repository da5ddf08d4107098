// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

/// Session-token authentication.
mod authenticator;
/// The provider-agnostic OAuth2 sign-in flow.
mod oauth;

pub use self::authenticator::{AuthToken, Authenticator, JwtAuthenticator};
pub use self::oauth::{new_oauth_sign_in, OAuthSignIn};
