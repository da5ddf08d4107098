// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

#[cfg(test)]
mod oauth_tests {
    use crate::common::ShortbearConfig;
    use crate::oauth::{
        FacebookApi, FacebookOAuth2Service, GithubApi, GithubOAuth2Service, OAuthConnection,
        OAuthProvider,
    };

    fn test_config() -> ShortbearConfig {
        ShortbearConfig::builder()
            .toml_str(
                r#"
            [github]
            client_id = "github-client-id"
            client_secret = "github-client-secret"
            redirect_url = "https://short.example.com/oauth/github/sign-in/callback"
            [facebook]
            client_id = "facebook-client-id"
            client_secret = "facebook-client-secret"
            redirect_url = "https://short.example.com/oauth/facebook/sign-in/callback"
            "#,
            )
            .build()
            .expect("oauth_tests.toml")
    }

    #[test]
    fn github_service_tests() {
        println!("Testing Github OAuth2 service");
        let service = match GithubOAuth2Service::new(&test_config()) {
            Ok(service) => service,
            Err(e) => panic!("cannot create Github service: {e:?}"),
        };
        assert_eq!(service.provider(), OAuthProvider::Github);

        let sign_in_url = service.sign_in_url();
        println!("Github sign in URL: {sign_in_url}");
        assert_eq!(sign_in_url.host_str(), Some("github.com"));
        assert!(sign_in_url.as_str().contains("client_id=github-client-id"));
        assert!(sign_in_url.as_str().contains("response_type=code"));

        let _api = GithubApi::new().expect("github api");
    }

    #[test]
    fn facebook_service_tests() {
        println!("Testing Facebook OAuth2 service");
        let service = match FacebookOAuth2Service::new(&test_config()) {
            Ok(service) => service,
            Err(e) => panic!("cannot create Facebook service: {e:?}"),
        };
        assert_eq!(service.provider(), OAuthProvider::Facebook);

        let sign_in_url = service.sign_in_url();
        println!("Facebook sign in URL: {sign_in_url}");
        assert_eq!(sign_in_url.host_str(), Some("www.facebook.com"));
        assert!(sign_in_url
            .as_str()
            .contains("client_id=facebook-client-id"));

        let _api = FacebookApi::new().expect("facebook api");
    }

    #[test]
    fn provider_name_tests() {
        assert_eq!(
            OAuthProvider::try_from("github".to_string()).expect("github"),
            OAuthProvider::Github
        );
        assert_eq!(
            OAuthProvider::try_from("Facebook".to_string()).expect("Facebook"),
            OAuthProvider::Facebook
        );
        assert!(OAuthProvider::try_from("twitter".to_string()).is_err());
    }

    #[test]
    fn missing_config_tests() {
        let config = ShortbearConfig::builder()
            .toml_str("")
            .build()
            .expect("empty toml");
        assert!(GithubOAuth2Service::new(&config).is_err());
        assert!(FacebookOAuth2Service::new(&config).is_err());
    }
}
