// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::{new_original_url, new_sign_in, new_sign_in_callback, Route};
use crate::account::AccountService;
use crate::clock::Clock;
use crate::common::Error;
use crate::log::{StringLogger, StringTracer};
use crate::oauth::{ProviderBinding, Url};
use crate::signin::{new_oauth_sign_in, Authenticator};
use crate::url::UrlRetriever;
use hyper::Method;
use std::sync::Arc;

/// A set of tools to improve observability of the system.  Shared by every
/// route; never used for routing decisions.
#[derive(Clone, Default)]
pub struct Observability {
    /// The shared request logger.
    pub logger: StringLogger,
    /// The shared request tracer.
    pub tracer: StringTracer,
}

/// Assembles the complete route table.  Runs once at startup: composes one
/// sign-in operation per provider, parses the frontend URL, and returns the
/// five routes in fixed order.  A malformed frontend URL aborts the build
/// with `Error::Config`; the caller must not serve any route after that.
pub fn new_shortbear_routes(
    observability: Observability,
    web_frontend_url: &str,
    clock: Arc<dyn Clock + Send + Sync>,
    url_retriever: Arc<dyn UrlRetriever + Send + Sync>,
    github: ProviderBinding,
    facebook: ProviderBinding,
    authenticator: Arc<dyn Authenticator + Send + Sync>,
    account_service: Arc<dyn AccountService + Send + Sync>,
) -> Result<Vec<Route>, Error> {
    let github_sign_in = new_oauth_sign_in(&github, account_service.clone(), authenticator.clone());
    let facebook_sign_in = new_oauth_sign_in(&facebook, account_service, authenticator.clone());
    let frontend_url = Url::parse(web_frontend_url)
        .map_err(|e| Error::Config(format!("{web_frontend_url}: invalid frontend URL: {e}")))?;
    let Observability { logger, tracer } = observability;
    Ok(vec![
        Route {
            method: Method::GET,
            path: "/oauth/github/sign-in",
            handler: new_sign_in(
                logger.clone(),
                tracer.clone(),
                github.oauth.clone(),
                authenticator.clone(),
                web_frontend_url.to_string(),
            ),
        },
        Route {
            method: Method::GET,
            path: "/oauth/github/sign-in/callback",
            handler: new_sign_in_callback(
                logger.clone(),
                tracer.clone(),
                github_sign_in,
                frontend_url.clone(),
            ),
        },
        Route {
            method: Method::GET,
            path: "/oauth/facebook/sign-in",
            handler: new_sign_in(
                logger.clone(),
                tracer.clone(),
                facebook.oauth.clone(),
                authenticator,
                web_frontend_url.to_string(),
            ),
        },
        Route {
            method: Method::GET,
            path: "/oauth/facebook/sign-in/callback",
            handler: new_sign_in_callback(
                logger.clone(),
                tracer.clone(),
                facebook_sign_in,
                frontend_url.clone(),
            ),
        },
        Route {
            method: Method::GET,
            path: "/r/:alias",
            handler: new_original_url(logger, tracer, url_retriever, clock, frontend_url),
        },
    ])
}
