use actix_web::{HttpRequest, Responder, get, post, web};
use tera::Tera;

use crate::forms::cases::{MarkWorkedForm, XsrfForm};
use crate::forms::{FormError, PageQuery};
use crate::models::config::ServerConfig;
use crate::routes::{base_context, error_response, redirect, render_page, request_context};
use crate::services::cases as cases_service;
use crate::services::home::PENDING_CASES_PATH;
use crate::sirius::SiriusClient;

#[get("/pending-cases")]
pub async fn pending_cases(
    req: HttpRequest,
    params: web::Query<PageQuery>,
    client: web::Data<SiriusClient>,
    tera: web::Data<Tera>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let ctx = request_context(&req, None);

    match cases_service::load_pending_cases(client.get_ref(), &ctx, params.page()).await {
        Ok(data) => render_page(
            &tera,
            "pending_cases.html",
            &data,
            base_context(&ctx, &server_config, req.path()),
        ),
        Err(err) => error_response(&tera, &server_config, err),
    }
}

#[get("/all-cases")]
pub async fn all_cases(
    req: HttpRequest,
    params: web::Query<PageQuery>,
    client: web::Data<SiriusClient>,
    tera: web::Data<Tera>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let ctx = request_context(&req, None);

    match cases_service::load_all_cases(client.get_ref(), &ctx, params.page()).await {
        Ok(data) => render_page(
            &tera,
            "all_cases.html",
            &data,
            base_context(&ctx, &server_config, req.path()),
        ),
        Err(err) => error_response(&tera, &server_config, err),
    }
}

#[get("/tasks")]
pub async fn open_task_cases(
    req: HttpRequest,
    params: web::Query<PageQuery>,
    client: web::Data<SiriusClient>,
    tera: web::Data<Tera>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let ctx = request_context(&req, None);

    match cases_service::load_open_task_cases(client.get_ref(), &ctx, params.page()).await {
        Ok(data) => render_page(
            &tera,
            "tasks.html",
            &data,
            base_context(&ctx, &server_config, req.path()),
        ),
        Err(err) => error_response(&tera, &server_config, err),
    }
}

#[post("/mark-worked")]
pub async fn mark_worked(
    req: HttpRequest,
    body: web::Bytes,
    client: web::Data<SiriusClient>,
    tera: web::Data<Tera>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let form: MarkWorkedForm = match serde_html_form::from_bytes(&body) {
        Ok(form) => form,
        Err(e) => return error_response(&tera, &server_config, FormError::from(e).into()),
    };
    let ctx = request_context(&req, Some(&form.xsrf_token));

    match cases_service::mark_worked(client.get_ref(), &ctx, form).await {
        Ok(()) => redirect(PENDING_CASES_PATH),
        Err(err) => error_response(&tera, &server_config, err),
    }
}

#[post("/request-next-cases")]
pub async fn request_next_cases(
    req: HttpRequest,
    web::Form(form): web::Form<XsrfForm>,
    client: web::Data<SiriusClient>,
    tera: web::Data<Tera>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let ctx = request_context(&req, Some(&form.xsrf_token));

    match cases_service::request_next_cases(client.get_ref(), &ctx).await {
        Ok(()) => redirect(PENDING_CASES_PATH),
        Err(err) => error_response(&tera, &server_config, err),
    }
}
