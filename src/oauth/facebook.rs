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

/// Signs users in via the Facebook OAuth2 API.
pub struct FacebookOAuth2Service {
    oauth2_client: BasicClient,
}

impl FacebookOAuth2Service {
    /// Creates a Facebook OAuth2 service from the `[facebook]` config table.
    pub fn new(config: &ShortbearConfig) -> Result<Self, Error> {
        #[derive(Deserialize)]
        struct FacebookConfig {
            client_id: String,
            client_secret: String,
            redirect_url: String,
        }
        #[derive(Deserialize)]
        struct ConfigToml {
            facebook: FacebookConfig,
        }
        let ConfigToml {
            facebook:
                FacebookConfig {
                    client_id,
                    client_secret,
                    redirect_url,
                },
        } = config.get()?;

        let auth_url = String::from("https://www.facebook.com/v12.0/dialog/oauth");
        let token_url = String::from("https://graph.facebook.com/v12.0/oauth/access_token");
        let oauth2_client = BasicClient::new(
            ClientId::new(client_id),
            Some(ClientSecret::new(client_secret)),
            AuthUrl::new(auth_url).map_err(|e| Error::String(format!("facebook auth URL: {e}")))?,
            Some(
                TokenUrl::new(token_url)
                    .map_err(|e| Error::String(format!("facebook token URL: {e}")))?,
            ),
        )
        .set_redirect_uri(
            RedirectUrl::new(redirect_url)
                .map_err(|e| Error::String(format!("facebook redirect URL: {e}")))?,
        );

        Ok(Self { oauth2_client })
    }
}

#[async_trait]
impl OAuthConnection for FacebookOAuth2Service {
    fn provider(&self) -> OAuthProvider {
        OAuthProvider::Facebook
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
            .map_err(|e| Error::String(format!("facebook token exchange: {e}")))?;
        Ok(AccessToken(token.access_token().secret().to_owned()))
    }

    fn sign_in_url(&self) -> Url {
        let (auth_url, _csrf_token) = self
            .oauth2_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("public_profile".to_string()))
            .add_scope(Scope::new("email".to_string()))
            .url();
        auth_url
    }
}

/// Fetches profiles from the Facebook graph API.
pub struct FacebookApi {
    http_client: reqwest::Client,
}

impl FacebookApi {
    /// Creates a Facebook API client.
    pub fn new() -> Result<Self, Error> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(3))
            .build()
            .map_err(|e| Error::String(format!("cannot create http client: {e}")))?;
        Ok(Self { http_client })
    }
}

#[async_trait]
impl ProfileApi for FacebookApi {
    async fn profile(&self, access_token: &AccessToken) -> Result<Identity, Error> {
        // https://developers.facebook.com/docs/graph-api/reference/user/
        #[derive(Deserialize)]
        struct FacebookUser {
            email: Option<String>,
            id: String,
            name: Option<String>,
        }

        let response = self
            .http_client
            .get("https://graph.facebook.com/me?fields=id,name,email")
            .bearer_auth(access_token.as_str())
            .send()
            .await
            .map_err(|e| Error::String(e.to_string()))?;
        if !response.status().is_success() {
            return match response.text().await {
                Ok(body) => Err(Error::String(format!("facebook me get: {body}"))),
                Err(e) => Err(Error::String(format!("facebook me: {e}"))),
            };
        }
        let FacebookUser { email, id, name } = response
            .json::<FacebookUser>()
            .await
            .map_err(|e| Error::String(format!("facebook me parse: {e}")))?;
        Ok(Identity {
            login_id: AuthenticatedId(format!("facebook/{}", id)),
            email: email.map(|e| Email(e)),
            user_name: name.map(|n| UserName(n)),
        })
    }
}
