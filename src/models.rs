use actix_web::{body::BoxBody, HttpRequest, HttpResponse, Responder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An account identity. Nothing about it is validated and it is never stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    /// Clear text.
    pub password: String,
    #[serde(
        rename = "creatdAt",
        alias = "createdAt",
        with = "chrono::serde::ts_milliseconds_option"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn builder() -> UserBuilder {
        UserBuilder::default()
    }
}

#[derive(Debug, Default)]
pub struct UserBuilder {
    user: User,
}

impl UserBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.user.id = id;
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.user.username = username.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.user.email = email.into();
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.user.password = password.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.user.created_at = Some(created_at);
        self
    }

    pub fn build(self) -> User {
        self.user
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterApiResponse {
    pub status: String,
    pub message: String,
}

impl RegisterApiResponse {
    pub fn success() -> Self {
        RegisterApiResponse {
            status: "success".to_string(),
            message: "User registered successfully".to_string(),
        }
    }
}

/// Result of a login. No fields are defined yet.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginResponse {}

/// Response envelope: `Some` is sent as a JSON body, `None` as an empty
/// `200 OK`.
#[derive(Debug)]
pub struct Entity<T>(pub Option<T>);

impl<T> Entity<T> {
    pub fn empty() -> Self {
        Entity(None)
    }
}

impl<T: Serialize> Responder for Entity<T> {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
        match self.0 {
            Some(body) => HttpResponse::Ok().json(body),
            None => HttpResponse::Ok().finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn builder_sets_every_field() {
        let at = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        let user = User::builder()
            .id(7)
            .username("alice")
            .email("alice@example.com")
            .password("hunter2")
            .created_at(at)
            .build();

        assert_eq!(user.id, 7);
        assert_eq!(user.username, "alice");
        assert_eq!(user.email, "alice@example.com");
        assert_eq!(user.password, "hunter2");
        assert_eq!(user.created_at, Some(at));
    }

    #[test]
    fn user_serializes_with_legacy_field_name() {
        let at = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        let user = User::builder().id(1).username("bob").created_at(at).build();

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["creatdAt"], json!(1_700_000_000_123i64));
        assert!(value.get("created_at").is_none());
    }

    #[test]
    fn user_accepts_partial_input() {
        let user: User = serde_json::from_str(r#"{"username":"carol"}"#).unwrap();
        assert_eq!(user.username, "carol");
        assert_eq!(user.id, 0);
        assert_eq!(user.created_at, None);

        let user: User = serde_json::from_str(r#"{"createdAt":1000}"#).unwrap();
        assert_eq!(user.created_at.map(|t| t.timestamp_millis()), Some(1000));
    }

    #[test]
    fn register_success_payload() {
        let value = serde_json::to_value(RegisterApiResponse::success()).unwrap();
        assert_eq!(
            value,
            json!({"status": "success", "message": "User registered successfully"})
        );
    }

    #[test]
    fn login_response_has_no_fields() {
        assert_eq!(serde_json::to_string(&LoginResponse::default()).unwrap(), "{}");
    }
}
