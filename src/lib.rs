pub mod config;
pub mod docs;
pub mod error;
pub mod models;
pub mod security;
pub mod telemetry;
pub mod user_handlers;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App, Error,
};
use actix_web_httpauth::{extractors::basic, middleware::HttpAuthentication};
use security::Credentials;

/// Registers every route the service exposes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    docs::configure(cfg);
    user_handlers::configure(cfg);
}

/// The full application: credential store, Basic realm, auth filter, request
/// logging and routes.
pub fn build_app(
    credentials: web::Data<Credentials>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(credentials)
        .app_data(basic::Config::default().realm(security::REALM))
        .wrap(HttpAuthentication::with_fn(security::validator))
        .wrap(Logger::default())
        .configure(configure)
}
