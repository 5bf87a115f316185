use actix_web::{web, HttpServer};
use std::io;
use userservice::{config::Config, security, telemetry};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv::dotenv().ok();
    telemetry::init_tracing();

    let config = Config::from_env().map_err(|e| {
        tracing::error!("invalid configuration: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;
    let addr = config.bind_addr();
    let credentials = web::Data::new(config.credentials);

    tracing::info!(
        user = credentials.username(),
        public_paths = security::PUBLIC_PATHS.len(),
        "Listening on: {}",
        addr
    );

    HttpServer::new(move || userservice::build_app(credentials.clone()))
        .bind(addr)?
        .run()
        .await
}
