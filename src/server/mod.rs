// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

/// Registration of the route table with `axum`.
mod socket;

pub use self::socket::{new_router, run_routes_on_socket};
