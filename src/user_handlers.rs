use crate::models::{Entity, LoginResponse, RegisterApiResponse, User};
use actix_web::{get, post, web, Error};
use futures_util::StreamExt;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LookupQuery {
    pub param: String,
}

/// Lookup by id. Not implemented: always answers with an empty body.
#[get("/{id}")]
pub async fn get_user_by_id(
    path: web::Path<String>,
    query: web::Query<LookupQuery>,
) -> Entity<User> {
    tracing::debug!(id = %path.into_inner(), param = %query.param, "user lookup");
    Entity::empty()
}

/// Registration ignores its body and always reports success. The payload is
/// drained undecoded, so no charset, encoding or size limit applies.
#[post("/register")]
pub async fn register_user(
    mut payload: web::Payload,
) -> Result<Entity<RegisterApiResponse>, Error> {
    let mut body_len = 0usize;
    while let Some(chunk) = payload.next().await {
        body_len += chunk?.len();
    }
    tracing::debug!(body_len, "register request");
    Ok(Entity(Some(RegisterApiResponse::success())))
}

/// Not implemented: always answers with an empty body.
#[post("/login")]
pub async fn login_user(user: web::Json<User>) -> Entity<LoginResponse> {
    tracing::debug!(username = %user.username, "login request");
    Entity::empty()
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .service(register_user)
            .service(login_user)
            .service(get_user_by_id),
    );
}
