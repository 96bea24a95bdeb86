use crate::catalog;
use crate::config;
use crate::store::{Store, StoreError};

use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use base64::{STANDARD, STANDARD_NO_PAD, URL_SAFE_NO_PAD, decode_config, encode_config};
use jwt_simple::algorithms::MACLike;
use jwt_simple::prelude::{
    Claims, Duration as JwtDuration, HS256Key, NoCustomClaims, VerificationOptions,
};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use serde_json::json;

use std::collections::HashSet;

/// Session tokens are HS256 JWTs carried in an HttpOnly cookie; the
/// subject claim is the account uid.
#[derive(Debug, Clone)]
pub(crate) struct AuthState {
    key: HS256Key,
    issuer: String,
    cookie_name: String,
    token_ttl: time::Duration,
    cookie_secure: bool,
}

#[derive(Debug)]
pub enum AuthError {
    InvalidKey,
    InvalidToken,
    MissingExpiry,
    MissingSubject,
    EmailInUse,
    InvalidCredential,
    WeakPassword,
    Store(StoreError),
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::InvalidKey => f.write_str("invalid auth key"),
            AuthError::InvalidToken => f.write_str("invalid auth token"),
            AuthError::MissingExpiry => f.write_str("auth token missing expiry"),
            AuthError::MissingSubject => f.write_str("auth token missing subject"),
            AuthError::EmailInUse => f.write_str("email already registered"),
            AuthError::InvalidCredential => f.write_str("invalid email or password"),
            AuthError::WeakPassword => f.write_str("password must be at least 6 characters"),
            AuthError::Store(err) => err.fmt(f),
        }
    }
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        AuthError::Store(err)
    }
}

impl AuthState {
    pub(crate) fn from_config(config: &config::AppConfig) -> Result<Option<Self>, AuthError> {
        let Some(auth) = config.auth.as_ref() else {
            return Ok(None);
        };

        let key_bytes = decode_key(&auth.key)?;
        let key = HS256Key::from_bytes(&key_bytes);

        Ok(Some(Self {
            key,
            issuer: config.app_name.clone(),
            cookie_name: auth.cookie_name.clone(),
            token_ttl: auth.token_ttl,
            cookie_secure: auth.cookie_secure,
        }))
    }

    pub(crate) fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    pub(crate) fn issue_token(&self, uid: &str) -> Result<String, AuthError> {
        let ttl_seconds = self.token_ttl.whole_seconds();
        if ttl_seconds <= 0 {
            return Err(AuthError::InvalidToken);
        }
        let claims = Claims::create(JwtDuration::from_secs(ttl_seconds as u64))
            .with_subject(uid)
            .with_issuer(&self.issuer);
        self.key
            .authenticate(claims)
            .map_err(|_| AuthError::InvalidToken)
    }

    pub(crate) fn auth_cookie(&self, token: &str) -> String {
        let max_age = self.token_ttl.whole_seconds().max(0);
        let mut cookie = format!(
            "{}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age}",
            self.cookie_name
        );
        if self.cookie_secure {
            cookie.push_str("; Secure");
        }
        cookie
    }

    pub(crate) fn clear_cookie(&self) -> String {
        let mut cookie = format!(
            "{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0",
            self.cookie_name
        );
        if self.cookie_secure {
            cookie.push_str("; Secure");
        }
        cookie
    }

    /// Verify a token and return the uid it was issued for.
    pub(crate) fn verify_token(&self, token: &str) -> Result<String, AuthError> {
        let mut options = VerificationOptions::default();
        let mut issuers = HashSet::new();
        issuers.insert(self.issuer.clone());
        options.allowed_issuers = Some(issuers);

        let claims = self
            .key
            .verify_token::<NoCustomClaims>(token, Some(options))
            .map_err(|_| AuthError::InvalidToken)?;

        if claims.expires_at.is_none() {
            return Err(AuthError::MissingExpiry);
        }

        let subject = claims.subject.ok_or(AuthError::MissingSubject)?;
        if subject.trim().is_empty() {
            return Err(AuthError::MissingSubject);
        }

        Ok(subject)
    }
}

// ---- identities -----------------------------------------------------------
//
// Credentials live in their own collection, keyed by uid, holding only the
// email and an argon2 hash. Profile data is a separate `users` document.

/// Create a credential record and return the new uid.
pub(crate) fn register_identity(
    store: &Store,
    email: &str,
    password: &str,
) -> Result<String, AuthError> {
    let email = normalize_email(email);
    if email.is_empty() {
        return Err(AuthError::InvalidCredential);
    }
    if password.len() < 6 {
        return Err(AuthError::WeakPassword);
    }
    if lookup_identity(store, &email).is_some() {
        return Err(AuthError::EmailInUse);
    }

    let password_hash = hash_password(password)?;
    let uid = store.add(
        catalog::IDENTITIES,
        json!({ "email": email, "passwordHash": password_hash }),
    )?;
    Ok(uid)
}

/// Check credentials and return the uid. One error for both unknown email
/// and wrong password so sign-in does not leak which accounts exist.
pub(crate) fn sign_in(store: &Store, email: &str, password: &str) -> Result<String, AuthError> {
    let email = normalize_email(email);
    let Some((uid, password_hash)) = lookup_identity(store, &email) else {
        return Err(AuthError::InvalidCredential);
    };
    if !verify_password(password, &password_hash) {
        return Err(AuthError::InvalidCredential);
    }
    Ok(uid)
}

fn lookup_identity(store: &Store, email: &str) -> Option<(String, String)> {
    store
        .query_eq(catalog::IDENTITIES, "email", &serde_json::Value::from(email))
        .into_iter()
        .next()
        .and_then(|(uid, doc)| {
            let hash = doc.get("passwordHash")?.as_str()?.to_string();
            Some((uid, hash))
        })
}

fn normalize_email(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}

fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::InvalidCredential)
}

pub(crate) fn verify_password(password: &str, password_hash: &str) -> bool {
    let hash = match PasswordHash::new(password_hash) {
        Ok(hash) => hash,
        Err(_) => return false,
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &hash)
        .is_ok()
}

fn decode_key(raw: &str) -> Result<Vec<u8>, AuthError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AuthError::InvalidKey);
    }

    let decoded = decode_config(trimmed, URL_SAFE_NO_PAD)
        .or_else(|_| decode_config(trimmed, STANDARD))
        .or_else(|_| decode_config(trimmed, STANDARD_NO_PAD))
        .map_err(|_| AuthError::InvalidKey)?;

    if decoded.is_empty() {
        return Err(AuthError::InvalidKey);
    }

    Ok(decoded)
}

pub fn generate_auth_key() -> Result<String, AuthError> {
    let mut rng = OsRng;
    generate_auth_key_with_rng(&mut rng)
}

pub(crate) fn generate_auth_key_with_rng<R: RngCore + CryptoRng>(
    rng: &mut R,
) -> Result<String, AuthError> {
    let mut bytes = [0u8; 32];
    rng.fill_bytes(&mut bytes);
    let encoded = encode_config(bytes, URL_SAFE_NO_PAD);
    if encoded.is_empty() {
        return Err(AuthError::InvalidKey);
    }
    Ok(encoded)
}

#[cfg(test)]
#[allow(non_snake_case)]
mod tests {
    use super::*;

    struct ZeroRng;

    impl RngCore for ZeroRng {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            for value in dest.iter_mut() {
                *value = 0;
            }
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    impl CryptoRng for ZeroRng {}

    fn temp_store(test_name: &str) -> (Store, std::path::PathBuf) {
        let mut root = std::env::temp_dir();
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time")
            .as_nanos();
        root.push(format!("furqan-auth-{test_name}-{nanos}"));
        let store = Store::open(&root).expect("open store");
        (store, root)
    }

    #[test]
    fn generate_auth_key_with_rng__should_match_fixture() {
        // Given
        let mut rng = ZeroRng;

        // When
        let key = generate_auth_key_with_rng(&mut rng).expect("auth key");

        // Then
        assert_eq!(key, "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA");
    }

    #[test]
    fn register_identity__should_reject_duplicate_email() {
        // Given
        let (store, root) = temp_store("dup-email");
        register_identity(&store, "admin@example.org", "secret1").expect("first");

        // When
        let err = register_identity(&store, "  ADMIN@example.org ", "another1").expect_err("dup");

        // Then
        assert!(matches!(err, AuthError::EmailInUse));

        std::fs::remove_dir_all(&root).expect("cleanup");
    }

    #[test]
    fn register_identity__should_reject_short_passwords() {
        // Given
        let (store, root) = temp_store("short-pass");

        // When
        let err = register_identity(&store, "admin@example.org", "12345").expect_err("weak");

        // Then
        assert!(matches!(err, AuthError::WeakPassword));
        assert!(lookup_identity(&store, "admin@example.org").is_none());

        std::fs::remove_dir_all(&root).expect("cleanup");
    }

    #[test]
    fn sign_in__should_return_registered_uid() {
        // Given
        let (store, root) = temp_store("sign-in");
        let uid = register_identity(&store, "admin@example.org", "secret1").expect("register");

        // When
        let signed_in = sign_in(&store, "Admin@Example.org", "secret1").expect("sign in");

        // Then
        assert_eq!(signed_in, uid);

        std::fs::remove_dir_all(&root).expect("cleanup");
    }

    #[test]
    fn sign_in__should_not_distinguish_bad_email_from_bad_password() {
        // Given
        let (store, root) = temp_store("credential-error");
        register_identity(&store, "admin@example.org", "secret1").expect("register");

        // When
        let unknown = sign_in(&store, "nobody@example.org", "secret1").expect_err("unknown");
        let wrong = sign_in(&store, "admin@example.org", "wrong-pass").expect_err("wrong");

        // Then
        assert!(matches!(unknown, AuthError::InvalidCredential));
        assert!(matches!(wrong, AuthError::InvalidCredential));

        std::fs::remove_dir_all(&root).expect("cleanup");
    }

    #[test]
    fn verify_token__should_round_trip_the_uid() {
        // Given
        let config = config::AppConfig {
            auth: Some(config::AuthConfig {
                key: generate_auth_key().expect("key"),
                token_ttl: time::Duration::hours(1),
                cookie_name: "furqan_auth".to_string(),
                cookie_secure: false,
            }),
            ..config::AppConfig::default()
        };
        let auth = AuthState::from_config(&config)
            .expect("auth state")
            .expect("enabled");

        // When
        let token = auth.issue_token("1700000000000-1").expect("token");

        // Then
        assert_eq!(auth.verify_token(&token).expect("verify"), "1700000000000-1");
        assert!(auth.verify_token("not-a-token").is_err());
    }
}
