use actix_web::{HttpRequest, Responder, get, post, web};
use tera::Tera;

use crate::forms::cases::XsrfForm;
use crate::models::config::ServerConfig;
use crate::routes::{base_context, error_response, redirect, render_page, request_context};
use crate::services::home::CARD_PAYMENTS_PATH;
use crate::services::tasks as tasks_service;
use crate::sirius::SiriusClient;

const TASKS_DASHBOARD_PATH: &str = "/tasks-dashboard";

#[get("/tasks-dashboard")]
pub async fn tasks_dashboard(
    req: HttpRequest,
    client: web::Data<SiriusClient>,
    tera: web::Data<Tera>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let ctx = request_context(&req, None);

    match tasks_service::load_tasks_dashboard(client.get_ref(), &ctx).await {
        Ok(data) => render_page(
            &tera,
            "tasks_dashboard.html",
            &data,
            base_context(&ctx, &server_config, req.path()),
        ),
        Err(err) => error_response(&tera, &server_config, err),
    }
}

#[get("/card-payments")]
pub async fn card_payments(
    req: HttpRequest,
    client: web::Data<SiriusClient>,
    tera: web::Data<Tera>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let ctx = request_context(&req, None);

    match tasks_service::load_card_payments(client.get_ref(), &ctx).await {
        Ok(data) => render_page(
            &tera,
            "card_payments.html",
            &data,
            base_context(&ctx, &server_config, req.path()),
        ),
        Err(err) => error_response(&tera, &server_config, err),
    }
}

#[post("/request-next-task")]
pub async fn request_next_task(
    req: HttpRequest,
    web::Form(form): web::Form<XsrfForm>,
    client: web::Data<SiriusClient>,
    tera: web::Data<Tera>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let ctx = request_context(&req, Some(&form.xsrf_token));

    match tasks_service::request_next_task(client.get_ref(), &ctx).await {
        Ok(()) => redirect(TASKS_DASHBOARD_PATH),
        Err(err) => error_response(&tera, &server_config, err),
    }
}

#[post("/request-next-payment-task")]
pub async fn request_next_payment_task(
    req: HttpRequest,
    web::Form(form): web::Form<XsrfForm>,
    client: web::Data<SiriusClient>,
    tera: web::Data<Tera>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let ctx = request_context(&req, Some(&form.xsrf_token));

    match tasks_service::request_next_payment_task(client.get_ref(), &ctx).await {
        Ok(()) => redirect(CARD_PAYMENTS_PATH),
        Err(err) => error_response(&tera, &server_config, err),
    }
}
