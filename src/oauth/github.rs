// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::{AccessToken, OAuthConnection, OAuthProvider, ProfileApi, Url};
use crate::common::{AuthenticatedId, Email, Error, Identity, ShortbearConfig, UserName};
use async_trait::async_trait;
use oauth2::basic::BasicClient;
use oauth2::{
    reqwest::async_http_client, AuthUrl, AuthorizationCode, ClientId, ClientSecret, CsrfToken,
    RedirectUrl, Scope, TokenResponse, TokenUrl,
};
use serde::Deserialize;
use std::time::Duration;

/// Signs users in via the Github OAuth2 API.
pub struct GithubOAuth2Service {
    oauth2_client: BasicClient,
}

impl GithubOAuth2Service {
    /// Creates a Github OAuth2 service from the `[github]` config table.
    pub fn new(config: &ShortbearConfig) -> Result<Self, Error> {
        #[derive(Deserialize)]
        struct GithubConfig {
            client_id: String,
            client_secret: String,
            redirect_url: String,
        }
        #[derive(Deserialize)]
        struct ConfigToml {
            github: GithubConfig,
        }
        let ConfigToml {
            github:
                GithubConfig {
                    client_id,
                    client_secret,
                    redirect_url,
                },
        } = config.get()?;

        let auth_url = String::from("https://github.com/login/oauth/authorize");
        let token_url = String::from("https://github.com/login/oauth/access_token");
        let oauth2_client = BasicClient::new(
            ClientId::new(client_id),
            Some(ClientSecret::new(client_secret)),
            AuthUrl::new(auth_url).map_err(|e| Error::String(format!("github auth URL: {e}")))?,
            Some(
                TokenUrl::new(token_url)
                    .map_err(|e| Error::String(format!("github token URL: {e}")))?,
            ),
        )
        .set_redirect_uri(
            RedirectUrl::new(redirect_url)
                .map_err(|e| Error::String(format!("github redirect URL: {e}")))?,
        );

        Ok(Self { oauth2_client })
    }
}

#[async_trait]
impl OAuthConnection for GithubOAuth2Service {
    fn provider(&self) -> OAuthProvider {
        OAuthProvider::Github
    }

    async fn request_access_token(
        &self,
        authorization_code: String,
    ) -> Result<AccessToken, Error> {
        let token = self
            .oauth2_client
            .exchange_code(AuthorizationCode::new(authorization_code))
            .request_async(async_http_client)
            .await
            .map_err(|e| Error::String(format!("github token exchange: {e}")))?;
        Ok(AccessToken(token.access_token().secret().to_owned()))
    }

    fn sign_in_url(&self) -> Url {
        let (auth_url, _csrf_token) = self
            .oauth2_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("read:user".to_string()))
            .add_scope(Scope::new("user:email".to_string()))
            .url();
        auth_url
    }
}

/// Fetches profiles from the Github REST API.
pub struct GithubApi {
    http_client: reqwest::Client,
}

impl GithubApi {
    /// Creates a Github API client.
    pub fn new() -> Result<Self, Error> {
        // Github rejects requests without a user agent.
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(3))
            .user_agent("shortbear")
            .build()
            .map_err(|e| Error::String(format!("cannot create http client: {e}")))?;
        Ok(Self { http_client })
    }
}

#[async_trait]
impl ProfileApi for GithubApi {
    async fn profile(&self, access_token: &AccessToken) -> Result<Identity, Error> {
        // https://docs.github.com/en/rest/users/users#get-the-authenticated-user
        #[derive(Deserialize)]
        struct GithubUser {
            email: Option<String>,
            id: u64,
            login: String,
            name: Option<String>,
        }

        let response = self
            .http_client
            .get("https://api.github.com/user")
            .header("accept", "application/vnd.github+json")
            .bearer_auth(access_token.as_str())
            .send()
            .await
            .map_err(|e| Error::String(e.to_string()))?;
        if !response.status().is_success() {
            return match response.text().await {
                Ok(body) => Err(Error::String(format!("github user get: {body}"))),
                Err(e) => Err(Error::String(format!("github user: {e}"))),
            };
        }
        let GithubUser {
            email,
            id,
            login,
            name,
        } = response
            .json::<GithubUser>()
            .await
            .map_err(|e| Error::String(format!("github user parse: {e}")))?;
        Ok(Identity {
            login_id: AuthenticatedId(format!("github/{}", id)),
            email: email.map(|e| Email(e)),
            user_name: Some(UserName(name.unwrap_or(login))),
        })
    }
}
