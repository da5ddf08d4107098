// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

#[cfg(test)]
mod routing_tests {
    use crate::account::{Account, AccountService};
    use crate::clock::{Clock, SystemClock, UnixMillis};
    use crate::common::{AuthenticatedId, Email, Error, Identity, ShortbearConfig, UserName};
    use crate::jwt::new_jwt_client;
    use crate::oauth::{
        AccessToken, OAuthConnection, OAuthProvider, ProfileApi, ProviderBinding, Url,
    };
    use crate::routing::{new_shortbear_routes, HandlerRequest, Observability, Route};
    use crate::signin::{Authenticator, JwtAuthenticator};
    use crate::url::{Alias, ShortLink, UrlRetriever};
    use async_trait::async_trait;
    use axum::response::Response;
    use hyper::{Method, StatusCode};
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    const FRONTEND_URL: &str = "https://short.ly";
    const NOW: UnixMillis = UnixMillis(1_700_000_000_000);

    struct FakeOAuth {
        provider: OAuthProvider,
    }

    #[async_trait]
    impl OAuthConnection for FakeOAuth {
        fn provider(&self) -> OAuthProvider {
            self.provider
        }

        async fn request_access_token(
            &self,
            authorization_code: String,
        ) -> Result<AccessToken, Error> {
            Ok(AccessToken(format!("access-{authorization_code}")))
        }

        fn sign_in_url(&self) -> Url {
            Url::parse(&format!("https://consent.example.com/{}", self.provider))
                .expect("consent URL")
        }
    }

    struct FakeProfileApi {
        provider: OAuthProvider,
    }

    #[async_trait]
    impl ProfileApi for FakeProfileApi {
        async fn profile(&self, _access_token: &AccessToken) -> Result<Identity, Error> {
            Ok(Identity {
                login_id: AuthenticatedId(format!("{}/42", self.provider)),
                email: Some(Email("bear@example.com".to_string())),
                user_name: Some(UserName("Bear".to_string())),
            })
        }
    }

    #[derive(Default)]
    struct RecordingAccounts {
        emails: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl AccountService for RecordingAccounts {
        async fn find_or_create(&self, identity: &Identity) -> Result<Account, Error> {
            let email = identity
                .email
                .clone()
                .ok_or(Error::String("no email".to_string()))?;
            if let Ok(mut emails) = self.emails.lock() {
                emails.push(email.to_string());
            }
            Ok(Account {
                email,
                user_name: identity.user_name.clone(),
            })
        }
    }

    struct FakeRetriever {
        links: HashMap<String, ShortLink>,
    }

    #[async_trait]
    impl UrlRetriever for FakeRetriever {
        async fn get_after(&self, alias: &str, now: UnixMillis) -> Result<ShortLink, Error> {
            let Some(link) = self.links.get(alias) else {
                return Err(Error::Http(
                    StatusCode::NOT_FOUND,
                    format!("{alias}: not found"),
                ));
            };
            if let Some(expire_at) = link.expire_at {
                if expire_at.before(now) {
                    return Err(Error::Http(
                        StatusCode::NOT_FOUND,
                        format!("{alias}: expired"),
                    ));
                }
            }
            Ok(link.clone())
        }
    }

    struct FixedClock(UnixMillis);

    impl Clock for FixedClock {
        fn now(&self) -> UnixMillis {
            self.0
        }
    }

    fn test_authenticator() -> Arc<JwtAuthenticator> {
        let config = ShortbearConfig::builder()
            .toml_str(
                r#"
            [jwt]
            secret = "a-test-secret-at-least-this-long"
            "#,
            )
            .build()
            .expect("routing_tests.toml");
        let jwt_client = new_jwt_client(&config).expect("jwt client");
        // The system clock keeps minted tokens live while they are validated.
        Arc::new(JwtAuthenticator::new(jwt_client, Arc::new(SystemClock), 3600))
    }

    fn test_binding(provider: OAuthProvider) -> ProviderBinding {
        ProviderBinding {
            oauth: Arc::new(FakeOAuth { provider }),
            api: Arc::new(FakeProfileApi { provider }),
        }
    }

    fn test_links() -> HashMap<String, ShortLink> {
        let mut links = HashMap::new();
        links.insert(
            "abc123".to_string(),
            ShortLink {
                alias: Alias("abc123".to_string()),
                original_url: "https://example.com/very/long/path".to_string(),
                expire_at: None,
            },
        );
        links.insert(
            "stale".to_string(),
            ShortLink {
                alias: Alias("stale".to_string()),
                original_url: "https://example.com/old".to_string(),
                expire_at: Some(NOW.add_seconds(-60)),
            },
        );
        links
    }

    fn build_routes(
        web_frontend_url: &str,
        github: ProviderBinding,
        facebook: ProviderBinding,
        accounts: Arc<RecordingAccounts>,
    ) -> Result<Vec<Route>, Error> {
        new_shortbear_routes(
            Observability::default(),
            web_frontend_url,
            Arc::new(FixedClock(NOW)),
            Arc::new(FakeRetriever {
                links: test_links(),
            }),
            github,
            facebook,
            test_authenticator(),
            accounts,
        )
    }

    fn default_routes() -> Vec<Route> {
        build_routes(
            FRONTEND_URL,
            test_binding(OAuthProvider::Github),
            test_binding(OAuthProvider::Facebook),
            Arc::new(RecordingAccounts::default()),
        )
        .expect("cannot build routes")
    }

    fn location(response: &Response) -> String {
        response
            .headers()
            .get("location")
            .expect("no location header")
            .to_str()
            .expect("location not a str")
            .to_string()
    }

    fn request_with_query(key: &str, value: &str) -> HandlerRequest {
        HandlerRequest {
            params: HashMap::new(),
            query: HashMap::from([(key.to_string(), value.to_string())]),
        }
    }

    fn request_with_alias(alias: &str) -> HandlerRequest {
        HandlerRequest {
            params: HashMap::from([("alias".to_string(), alias.to_string())]),
            query: HashMap::new(),
        }
    }

    #[test]
    fn route_table_order_tests() {
        println!("Testing route table order");
        let routes = default_routes();
        let table: Vec<_> = routes
            .iter()
            .map(|route| (route.method.clone(), route.path))
            .collect();
        assert_eq!(
            table,
            vec![
                (Method::GET, "/oauth/github/sign-in"),
                (Method::GET, "/oauth/github/sign-in/callback"),
                (Method::GET, "/oauth/facebook/sign-in"),
                (Method::GET, "/oauth/facebook/sign-in/callback"),
                (Method::GET, "/r/:alias"),
            ]
        );
    }

    #[test]
    fn idempotent_build_tests() {
        println!("Testing idempotent builds");
        let first: Vec<_> = default_routes()
            .iter()
            .map(|route| (route.method.clone(), route.path))
            .collect();
        let second: Vec<_> = default_routes()
            .iter()
            .map(|route| (route.method.clone(), route.path))
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn invalid_frontend_url_tests() {
        println!("Testing invalid frontend URLs");
        for bad in ["not a url", ""] {
            let result = build_routes(
                bad,
                test_binding(OAuthProvider::Github),
                test_binding(OAuthProvider::Facebook),
                Arc::new(RecordingAccounts::default()),
            );
            match result {
                Ok(routes) => panic!("built {} routes from {bad:?}", routes.len()),
                Err(Error::Config(mesg)) => {
                    println!("rejected as expected: {mesg}");
                    assert!(mesg.contains("invalid frontend URL"));
                }
                Err(e) => panic!("wrong error kind for {bad:?}: {e:?}"),
            }
        }
    }

    #[tokio::test]
    async fn sign_in_redirect_tests() {
        println!("Testing sign in redirects");
        let routes = default_routes();

        let response = (routes[0].handler)(HandlerRequest::default()).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "https://consent.example.com/Github");

        let response = (routes[2].handler)(HandlerRequest::default()).await;
        assert_eq!(location(&response), "https://consent.example.com/Facebook");

        // A caller with a live session skips the consent screen.
        let authenticator = test_authenticator();
        let account = Account {
            email: Email("bear@example.com".to_string()),
            user_name: None,
        };
        let token = authenticator
            .generate_token(&account)
            .expect("cannot generate token");
        let response = (routes[0].handler)(request_with_query("token", token.as_str())).await;
        assert_eq!(location(&response), FRONTEND_URL);
    }

    #[tokio::test]
    async fn provider_binding_swap_tests() {
        println!("Testing provider binding interchangeability");
        let swapped = build_routes(
            FRONTEND_URL,
            test_binding(OAuthProvider::Facebook),
            test_binding(OAuthProvider::Github),
            Arc::new(RecordingAccounts::default()),
        )
        .expect("cannot build swapped routes");

        // The Github paths now carry whichever binding was passed first, and
        // the Facebook paths the other; the control flow is unchanged.
        assert_eq!(swapped[0].path, "/oauth/github/sign-in");
        let response = (swapped[0].handler)(HandlerRequest::default()).await;
        assert_eq!(location(&response), "https://consent.example.com/Facebook");
        let response = (swapped[2].handler)(HandlerRequest::default()).await;
        assert_eq!(location(&response), "https://consent.example.com/Github");
    }

    #[tokio::test]
    async fn sign_in_callback_tests() {
        println!("Testing sign in callbacks");
        let accounts = Arc::new(RecordingAccounts::default());
        let routes = build_routes(
            FRONTEND_URL,
            test_binding(OAuthProvider::Github),
            test_binding(OAuthProvider::Facebook),
            accounts.clone(),
        )
        .expect("cannot build routes");

        let response = (routes[1].handler)(request_with_query("code", "abc")).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let location = location(&response);
        println!("callback redirected to {location}");
        assert!(location.starts_with("https://short.ly/"));
        assert!(location.contains("token="));
        assert_eq!(
            *accounts.emails.lock().expect("emails"),
            vec!["bear@example.com".to_string()]
        );

        let response = (routes[1].handler)(HandlerRequest::default()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn original_url_tests() {
        println!("Testing alias expansion");
        let routes = default_routes();
        let alias_route = &routes[4];

        let response = (alias_route.handler)(request_with_alias("abc123")).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "https://example.com/very/long/path");

        let response = (alias_route.handler)(request_with_alias("missing")).await;
        assert_eq!(location(&response), "https://short.ly/404");

        let response = (alias_route.handler)(request_with_alias("stale")).await;
        assert_eq!(location(&response), "https://short.ly/404");

        // A failed expansion never affects other routes in the same table.
        let response = (routes[0].handler)(HandlerRequest::default()).await;
        assert_eq!(location(&response), "https://consent.example.com/Github");
    }
}
