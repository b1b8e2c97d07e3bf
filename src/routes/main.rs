use actix_web::{HttpRequest, HttpResponse, Responder, get, web};
use tera::Tera;

use crate::models::config::ServerConfig;
use crate::routes::{error_response, redirect, request_context};
use crate::services::home as home_service;
use crate::sirius::SiriusClient;

#[get("/")]
pub async fn home(
    req: HttpRequest,
    client: web::Data<SiriusClient>,
    tera: web::Data<Tera>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let ctx = request_context(&req, None);

    match home_service::resolve_home(client.get_ref(), &ctx).await {
        Ok(path) => redirect(path),
        Err(err) => error_response(&tera, &server_config, err),
    }
}

#[get("/health-check")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().finish()
}
