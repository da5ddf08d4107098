// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::common::Error;
use crate::routing::{HandlerRequest, Route};
use axum::extract::{Path, Query};
use axum::routing::{on, MethodFilter};
use axum::Router;
use std::collections::HashMap;
use std::net::SocketAddr;

/// Register the route table with an `axum::Router`.  Dispatch is by method
/// and path, so the table's order is irrelevant here.
pub fn new_router(routes: Vec<Route>) -> Router {
    let mut router = Router::new();
    for route in routes {
        let Route {
            method,
            path,
            handler,
        } = route;
        let method_filter = MethodFilter::try_from(method).expect("unsupported HTTP method");
        router = router.route(
            path,
            on(
                method_filter,
                move |Path(params): Path<HashMap<String, String>>,
                      Query(query): Query<HashMap<String, String>>| {
                    let handler = handler.clone();
                    async move { handler(HandlerRequest { params, query }).await }
                },
            ),
        );
    }
    router
}

/// Run the route table on incoming requests from a socket.
pub async fn run_routes_on_socket(routes: Vec<Route>, addr: SocketAddr) -> Result<(), Error> {
    let router = new_router(routes);
    println!("Begin running routes on socket {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| Error::from_string(format!("{e:?}")))?;
    axum::serve(listener, router.into_make_service())
        .await
        .map_err(|e| Error::from_string(format!("{e:?}")))?;
    println!("Done running routes on socket");
    Ok(())
}
