// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use crate::clock::UnixMillis;
use crate::common::{Error, ShortbearConfig};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::de::DeserializeOwned;
use serde::ser::Serialize;
use serde::Deserialize;
use serde_json::Value;

/// JWT creation and validation client.  Session tokens are symmetric, so one
/// secret signs and validates.
#[derive(Debug, Default)]
pub struct JwtClient {
    secret: String,
}

/// Creates a JWT whose validity window starts at `issued_at`.
pub fn create_jwt<T: Serialize>(
    client: &JwtClient,
    claims: T,
    issued_at: UnixMillis,
    ttl_seconds: i64,
) -> Result<String, Error> {
    // The next two errors mapped below never happen.
    let s = serde_json::to_string(&claims)
        .map_err(|e| Error::String(format!("cannot ser claims to JSON str: {e:?}")))?;
    let mut value: Value = serde_json::from_str(&s)
        .map_err(|e| Error::String(format!("cannot de claims into JSON: {e:?}")))?;
    let Value::Object(ref mut claims_obj) = value else {
        return Err(Error::String("claims not an object".to_string()));
    };
    let iat = issued_at.to_unix_seconds();
    let exp = issued_at.add_seconds(ttl_seconds).to_unix_seconds();
    claims_obj.insert("iat".to_string(), Value::Number(iat.into()));
    claims_obj.insert("exp".to_string(), Value::Number(exp.into()));
    if client.secret.is_empty() {
        return Err(Error::String(
            "cannot create JWT without a secret".to_string(),
        ));
    }
    encode(
        &Header::new(Algorithm::HS256),
        &value,
        &EncodingKey::from_secret(client.secret.as_bytes()),
    )
    .map_err(|e| Error::String(format!("cannot create JWT: {e:?}")))
}

/// Creates a JWT client from the `[jwt]` config table.
pub fn new_jwt_client(config: &ShortbearConfig) -> Result<JwtClient, Error> {
    #[derive(Deserialize)]
    struct JwtConfig {
        secret: String,
    }
    #[derive(Deserialize)]
    struct ConfigToml {
        jwt: JwtConfig,
    }
    let ConfigToml {
        jwt: JwtConfig { secret },
    } = config.get()?;
    Ok(JwtClient { secret })
}

/// Validates a JSON web token, including expiration, and returns claims of
/// any type.
pub fn validate_jwt<T: DeserializeOwned>(client: &JwtClient, jw_token: &str) -> Result<T, Error> {
    let validation = Validation::new(Algorithm::HS256);
    let mut claims: Value = decode::<Value>(
        jw_token,
        &DecodingKey::from_secret(client.secret.as_bytes()),
        &validation,
    )
    .map_err(|e| Error::String(format!("cannot validate JWT token: {e:?}")))?
    .claims;
    let Value::Object(ref mut claims_obj) = claims else {
        return Err(Error::String("claims not an object".to_string()));
    };
    claims_obj.remove("exp");
    claims_obj.remove("iat");
    // The 2 errors mapped below never happen.
    let s = serde_json::to_string(&claims)
        .map_err(|e| Error::String(format!("cannot ser after rm exp and iat: {e:?}")))?;
    serde_json::from_str(&s)
        .map_err(|e| Error::String(format!("cannot de after rm exp and iat: {e:?}")))
}
