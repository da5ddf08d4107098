// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

/// Short link retrieval.
mod retriever;

pub use self::retriever::{Alias, ShortLink, UrlRetriever};
