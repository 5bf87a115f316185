//! Access policy: a static allow-list of public paths, and HTTP Basic
//! authentication against a single in-memory account for everything else.

use crate::error::PasswordFormatError;
use actix_web::{dev::ServiceRequest, http::header, web, Error};
use actix_web_httpauth::extractors::{
    basic::{BasicAuth, Config as BasicConfig},
    AuthenticationError,
};
use lazy_static::lazy_static;
use std::fmt;

pub const REALM: &str = "Realm";

/// Paths reachable without credentials, as declared.
pub const PUBLIC_PATHS: &[&str] = &[
    "/register",
    "/swagger-ui/**",
    "/v3/api-docs/**",
    "/swagger-resources/**",
    "/webjars/**",
    "/swagger-ui.html",
    "/api/v1/users",
];

#[derive(Debug, Clone, PartialEq, Eq)]
enum PathPattern {
    Exact(String),
    /// `prefix/**`: the prefix itself and everything below it.
    Subtree(String),
}

impl PathPattern {
    fn new(pattern: &str) -> Self {
        match pattern.strip_suffix("/**") {
            Some(prefix) => PathPattern::Subtree(prefix.to_string()),
            None => PathPattern::Exact(pattern.to_string()),
        }
    }

    fn matches(&self, path: &str) -> bool {
        match self {
            PathPattern::Exact(p) => path == p,
            PathPattern::Subtree(prefix) => match path.strip_prefix(prefix.as_str()) {
                Some(rest) => rest.is_empty() || rest.starts_with('/'),
                None => false,
            },
        }
    }
}

lazy_static! {
    static ref PUBLIC_MATCHERS: Vec<PathPattern> =
        PUBLIC_PATHS.iter().map(|p| PathPattern::new(p)).collect();
}

pub fn is_public(path: &str) -> bool {
    PUBLIC_MATCHERS.iter().any(|m| m.matches(path))
}

/// A password as kept in the credential store: `{id}encoded`.
#[derive(Clone, PartialEq, Eq)]
pub enum StoredPassword {
    Noop(String),
    Bcrypt(String),
}

impl StoredPassword {
    pub fn parse(raw: &str) -> Result<Self, PasswordFormatError> {
        let (id, encoded) = raw
            .strip_prefix('{')
            .and_then(|rest| rest.split_once('}'))
            .ok_or(PasswordFormatError::MissingEncoderId)?;

        match id {
            "noop" => Ok(StoredPassword::Noop(encoded.to_string())),
            "bcrypt" => Ok(StoredPassword::Bcrypt(encoded.to_string())),
            other => Err(PasswordFormatError::UnknownEncoder(other.to_string())),
        }
    }

    pub fn matches(&self, raw: &str) -> bool {
        match self {
            StoredPassword::Noop(stored) => stored == raw,
            StoredPassword::Bcrypt(hash) => bcrypt::verify(raw, hash).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "stored bcrypt hash could not be checked");
                false
            }),
        }
    }
}

impl fmt::Debug for StoredPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoredPassword::Noop(_) => f.write_str("{noop}[redacted]"),
            StoredPassword::Bcrypt(_) => f.write_str("{bcrypt}[redacted]"),
        }
    }
}

/// The single account known to the service.
#[derive(Debug, Clone)]
pub struct Credentials {
    username: String,
    password: StoredPassword,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: StoredPassword) -> Self {
        Credentials {
            username: username.into(),
            password,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Usernames compare case-insensitively, passwords exactly.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        self.username.to_lowercase() == username.to_lowercase() && self.password.matches(password)
    }
}

/// True when an `Authorization` header names the Basic scheme, whether or not
/// its token decodes.
fn has_basic_header(req: &ServiceRequest) -> bool {
    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split_whitespace().next())
        .map(|scheme| scheme.eq_ignore_ascii_case("basic"))
        .unwrap_or(false)
}

fn challenge(req: ServiceRequest) -> (Error, ServiceRequest) {
    let config = req.app_data::<BasicConfig>().cloned().unwrap_or_default();
    (AuthenticationError::from(config).into(), req)
}

/// Validation callback for `HttpAuthentication::with_fn`.
///
/// Credentials that are sent are always checked, even on public paths, and a
/// Basic header that cannot be decoded counts as bad credentials. A request
/// without credentials only gets through when its path is on the allow-list.
pub async fn validator(
    req: ServiceRequest,
    credentials: Option<BasicAuth>,
) -> Result<ServiceRequest, (Error, ServiceRequest)> {
    match credentials {
        Some(credentials) => {
            let accepted = req
                .app_data::<web::Data<Credentials>>()
                .map(|store| {
                    store.verify(
                        credentials.user_id(),
                        credentials.password().unwrap_or_default(),
                    )
                })
                .unwrap_or(false);

            if accepted {
                Ok(req)
            } else {
                tracing::warn!(
                    user = credentials.user_id(),
                    path = req.path(),
                    "rejected basic credentials"
                );
                Err(challenge(req))
            }
        }
        None if has_basic_header(&req) => {
            tracing::warn!(path = req.path(), "malformed basic credentials");
            Err(challenge(req))
        }
        None if is_public(req.path()) => Ok(req),
        None => {
            tracing::debug!(path = req.path(), "no credentials on protected path");
            Err(challenge(req))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allow_list_matches_declared_paths() {
        assert!(is_public("/register"));
        assert!(is_public("/swagger-ui.html"));
        assert!(is_public("/api/v1/users"));
        assert!(is_public("/v3/api-docs"));
        assert!(is_public("/v3/api-docs/swagger-config"));
        assert!(is_public("/swagger-ui/index.html"));
        assert!(is_public("/webjars/lib/app.js"));
        assert!(is_public("/swagger-resources"));
    }

    #[test]
    fn subtree_pattern_needs_segment_boundary() {
        assert!(!is_public("/swagger-uiX"));
        assert!(!is_public("/webjarsextra/file"));
        assert!(!is_public("/v3/api-docs-extra"));
    }

    #[test]
    fn exact_pattern_is_strict() {
        assert!(!is_public("/register/"));
        assert!(!is_public("/api/v1/users/1"));
        assert!(!is_public("/api/v1/user"));
    }

    // The allow-list was never aligned with the routes actually served.
    #[test]
    fn allow_list_does_not_cover_user_routes() {
        assert!(!is_public("/users/register"));
        assert!(!is_public("/users/login"));
        assert!(!is_public("/users/42"));
    }

    #[test]
    fn parses_stored_password_formats() {
        assert_eq!(
            StoredPassword::parse("{noop}pass"),
            Ok(StoredPassword::Noop("pass".to_string()))
        );
        assert_eq!(
            StoredPassword::parse("{noop}"),
            Ok(StoredPassword::Noop(String::new()))
        );
        assert_eq!(
            StoredPassword::parse("pass"),
            Err(PasswordFormatError::MissingEncoderId)
        );
        assert_eq!(
            StoredPassword::parse("{noop"),
            Err(PasswordFormatError::MissingEncoderId)
        );
        assert_eq!(
            StoredPassword::parse("{sha256}abc"),
            Err(PasswordFormatError::UnknownEncoder("sha256".to_string()))
        );
    }

    #[test]
    fn noop_password_compares_exactly() {
        let stored = StoredPassword::parse("{noop}pass").unwrap();
        assert!(stored.matches("pass"));
        assert!(!stored.matches("PASS"));
        assert!(!stored.matches("pass "));
    }

    #[test]
    fn bcrypt_password_verifies() {
        let hash = bcrypt::hash("pass", 4).unwrap();
        let stored = StoredPassword::parse(&format!("{{bcrypt}}{hash}")).unwrap();
        assert!(stored.matches("pass"));
        assert!(!stored.matches("nope"));

        let broken = StoredPassword::Bcrypt("not-a-hash".to_string());
        assert!(!broken.matches("pass"));
    }

    #[test]
    fn username_is_case_insensitive() {
        let creds = Credentials::new("user", StoredPassword::Noop("pass".to_string()));
        assert!(creds.verify("user", "pass"));
        assert!(creds.verify("USER", "pass"));
        assert!(!creds.verify("user", "Pass"));
        assert!(!creds.verify("someone", "pass"));
    }

    #[test]
    fn debug_output_hides_password() {
        let creds = Credentials::new("user", StoredPassword::Noop("pass".to_string()));
        let printed = format!("{creds:?}");
        assert!(printed.contains("[redacted]"));
        assert!(!printed.contains("\"pass\""));
    }
}
