// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

/// JWT creation and validation.
mod validate;

pub use self::validate::{create_jwt, new_jwt_client, validate_jwt, JwtClient};
