// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use axum::response::Response;
use futures::future::BoxFuture;
use std::collections::HashMap;
use std::sync::Arc;

/// The parameters of one inbound request, as parsed by the HTTP dispatcher.
/// The routing layer never reads request bodies.
#[derive(Clone, Debug, Default)]
pub struct HandlerRequest {
    /// Path parameters.  For example, "alias" for "/r/:alias".
    pub params: HashMap<String, String>,
    /// Query parameters.
    pub query: HashMap<String, String>,
}

/// A request handler.  Each handler closes over exactly the collaborators it
/// needs and may be invoked from arbitrarily many concurrent callers.
pub type Handler = Arc<dyn Fn(HandlerRequest) -> BoxFuture<'static, Response> + Send + Sync>;

/// A single route served by the HTTP layer.  The route table is an ordered
/// `Vec<Route>`; dispatch is by method and path, so order does not affect
/// routing, but the order is preserved for inspection.
#[derive(Clone)]
pub struct Route {
    /// The HTTP method the route answers to.
    pub method: hyper::Method,
    /// The path pattern the route answers to.
    pub path: &'static str,
    /// The handler invoked once per matching request.
    pub handler: Handler,
}
