// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::{Handler, HandlerRequest};
use crate::clock::Clock;
use crate::common::{create_error_response, create_redirect_response};
use crate::log::{StringLogger, StringTracer};
use crate::oauth::{OAuthConnection, Url};
use crate::signin::{AuthToken, Authenticator, OAuthSignIn};
use crate::url::UrlRetriever;
use axum::response::Response;
use futures::future::BoxFuture;
use hyper::StatusCode;
use std::sync::Arc;

/// Creates the handler that begins a provider's sign-in flow.  A caller that
/// already presents a live session token is sent straight to the frontend;
/// anyone else is sent to the provider's consent screen.
pub fn new_sign_in(
    logger: StringLogger,
    tracer: StringTracer,
    oauth: Arc<dyn OAuthConnection + Send + Sync>,
    authenticator: Arc<dyn Authenticator + Send + Sync>,
    web_frontend_url: String,
) -> Handler {
    Arc::new(move |request: HandlerRequest| -> BoxFuture<'static, Response> {
        let logger = logger.clone();
        let tracer = tracer.clone();
        let oauth = oauth.clone();
        let authenticator = authenticator.clone();
        let web_frontend_url = web_frontend_url.clone();
        Box::pin(async move {
            let _span = tracer.begin("SignIn");
            if let Some(token) = request.query.get("token") {
                if authenticator.is_signed_in(token) {
                    return create_redirect_response(&web_frontend_url);
                }
            }
            logger.trace(format!("{}: begin sign in", oauth.provider()));
            create_redirect_response(oauth.sign_in_url().as_str())
        })
    })
}

/// Creates the handler that completes a provider's sign-in flow and sends
/// the caller back to the frontend with a session token.
pub fn new_sign_in_callback(
    logger: StringLogger,
    tracer: StringTracer,
    sign_in: OAuthSignIn,
    frontend_url: Url,
) -> Handler {
    Arc::new(move |request: HandlerRequest| -> BoxFuture<'static, Response> {
        let logger = logger.clone();
        let tracer = tracer.clone();
        let sign_in = sign_in.clone();
        let frontend_url = frontend_url.clone();
        Box::pin(async move {
            let _span = tracer.begin("SignInCallback");
            let Some(code) = request.query.get("code") else {
                return create_error_response(
                    StatusCode::BAD_REQUEST,
                    "missing authorization code".to_string(),
                );
            };
            match sign_in.sign_in(code.to_owned()).await {
                Ok(auth_token) => {
                    create_redirect_response(set_token(frontend_url, &auth_token).as_str())
                }
                Err(e) => {
                    logger.warn(format!("sign in failed: {e}"));
                    e.into()
                }
            }
        })
    })
}

/// Creates the handler that expands a short alias and redirects to the
/// original URL.  Unknown and expired aliases land on the frontend's
/// not-found page.
pub fn new_original_url(
    logger: StringLogger,
    tracer: StringTracer,
    url_retriever: Arc<dyn UrlRetriever + Send + Sync>,
    clock: Arc<dyn Clock + Send + Sync>,
    frontend_url: Url,
) -> Handler {
    Arc::new(move |request: HandlerRequest| -> BoxFuture<'static, Response> {
        let logger = logger.clone();
        let tracer = tracer.clone();
        let url_retriever = url_retriever.clone();
        let clock = clock.clone();
        let frontend_url = frontend_url.clone();
        Box::pin(async move {
            let _span = tracer.begin("OriginalUrl");
            let Some(alias) = request.params.get("alias") else {
                logger.warn("missing alias".to_string());
                return serve_404(frontend_url);
            };
            match url_retriever.get_after(alias, clock.now()).await {
                Ok(short_link) => create_redirect_response(&short_link.original_url),
                Err(e) => {
                    logger.warn(format!("{alias}: cannot expand: {e}"));
                    serve_404(frontend_url)
                }
            }
        })
    })
}

/// Redirect to the frontend's not-found page.
fn serve_404(frontend_url: Url) -> Response {
    let mut not_found_url = frontend_url;
    not_found_url.set_path("/404");
    create_redirect_response(not_found_url.as_str())
}

/// Returns the frontend URL with the session token appended.
fn set_token(frontend_url: Url, auth_token: &AuthToken) -> Url {
    let mut url = frontend_url;
    url.query_pairs_mut()
        .append_pair("token", auth_token.as_str());
    url
}
