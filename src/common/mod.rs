// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

mod auth;
mod config;
/// An enum that encapsulates a variety of error types.
mod error;
mod http;

pub use self::auth::{AuthenticatedId, Email, Identity, UserName};
pub use self::config::ShortbearConfig;
pub use self::error::Error;
pub use self::http::{create_error_response, create_redirect_response};
