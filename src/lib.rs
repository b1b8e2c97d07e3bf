//! Caseworker dashboard for the Sirius LPA case-management system.
//!
//! The [`sirius`] module is a typed client for the Sirius API. With the
//! `server` feature the crate also provides the actix-web front end that
//! renders the dashboard pages on top of it.

pub mod domain;
pub mod pagination;
pub mod sirius;

#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod middleware;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

#[cfg(feature = "server")]
pub use server::run;

#[cfg(feature = "server")]
mod server {
    use actix_files::Files;
    use actix_web::{App, HttpServer, middleware, web};
    use tera::Tera;

    use crate::middleware::RedirectUnauthorized;
    use crate::models::config::ServerConfig;
    use crate::routes;
    use crate::routes::main::health_check;
    use crate::sirius::SiriusClient;

    /// Builds and runs the Actix-Web HTTP server using the provided configuration.
    pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
        let client =
            SiriusClient::with_timeout(server_config.sirius_url.clone(), server_config.request_timeout())
                .map_err(|e| std::io::Error::other(format!("Failed to build Sirius client: {e}")))?;

        let tera = Tera::new(&server_config.templates_dir)
            .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

        let bind_address = (server_config.address.clone(), server_config.port);
        log::info!(
            "Serving dashboard on {}:{} for Sirius at {}",
            server_config.address,
            server_config.port,
            server_config.sirius_url
        );

        HttpServer::new(move || {
            App::new()
                .wrap(middleware::Compress::default())
                .wrap(middleware::Logger::default())
                .service(Files::new("/assets", &server_config.assets_dir))
                .service(health_check)
                .service(
                    web::scope("")
                        .wrap(RedirectUnauthorized::new(server_config.auth_url()))
                        .configure(routes::configure),
                )
                .app_data(web::Data::new(tera.clone()))
                .app_data(web::Data::new(client.clone()))
                .app_data(web::Data::new(server_config.clone()))
        })
        .bind(bind_address)?
        .run()
        .await
    }
}
