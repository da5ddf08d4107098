// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

#![warn(missing_docs)]
//! This crate is the request-routing and OAuth2 sign-in composition layer of
//! the Shortbear URL shortener.  It turns externally supplied collaborators
//! into the fixed table of HTTP routes served by the hosting dispatcher.

/// Account entity and the account management capability.
pub mod account;
pub use account::*;

/// Wall-clock capability and a thin Unix timestamp wrapper.
pub mod clock;
pub use clock::*;

/// Types common to multiple modules.
pub mod common;
pub use common::*;

/// A wrapper which provides access to JWT creation and validation.
pub mod jwt;
pub use jwt::*;

/// Thread-safe logging and tracing.
pub mod log;
pub use log::*;

/// A wrapper which provides access to Oauth2 authentication.
pub mod oauth;
pub use oauth::*;

/// Route table assembly for the HTTP layer.
pub mod routing;
pub use routing::*;

/// Macros used with `serde` serialization and serialization.
pub mod serde_utils;
pub use serde_utils::*;

/// Registration glue between the route table and `axum`.
pub mod server;
pub use server::*;

/// The provider-agnostic OAuth2 sign-in use case.
pub mod signin;
pub use signin::*;

/// Short link entity and the URL retrieval capability.
pub mod url;
pub use url::*;
