// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

/// Request handlers for the route table.
mod handle;
/// The route table entries handed to the HTTP layer.
mod route;
/// Top-level route table assembly.
mod shortbear;
mod tests;

pub use self::handle::{new_original_url, new_sign_in, new_sign_in_callback};
pub use self::route::{Handler, HandlerRequest, Route};
pub use self::shortbear::{new_shortbear_routes, Observability};
