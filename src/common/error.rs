// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt::{Display, Formatter};

#[derive(Debug)]
/// An enum that encapsulates a variety of error types.
///
/// # Example
///
/// Error::Http(StatusCode::NOT_FOUND, format!("{alias}: not found"))
pub enum Error {
    /// Fatal configuration error.  Raised during startup composition only;
    /// a service must not begin serving routes after one of these.
    Config(String),
    /// HTTP (or miscellaneous) error
    Http(hyper::StatusCode, String),
    /// String error.
    String(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            Error::Config(mesg) => Display::fmt(&format!("configuration: {mesg}"), f),
            Error::Http(status_code, mesg) => Display::fmt(&format!("{status_code}: {mesg}"), f),
            Error::String(s) => Display::fmt(&s, f),
        }
    }
}
