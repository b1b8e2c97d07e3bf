use actix_web::{HttpRequest, Responder, get, post, web};
use tera::Tera;

use crate::forms::users::ReassignForm;
use crate::forms::{FormError, PageQuery};
use crate::models::config::ServerConfig;
use crate::routes::{base_context, error_response, render_page, request_context};
use crate::services::ServiceError;
use crate::services::users as users_service;
use crate::sirius::SiriusClient;

#[get("/users/tasks/{user_id}")]
pub async fn user_tasks(
    req: HttpRequest,
    user_id: web::Path<String>,
    params: web::Query<PageQuery>,
    client: web::Data<SiriusClient>,
    tera: web::Data<Tera>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let Ok(user_id) = user_id.parse::<i32>() else {
        return error_response(&tera, &server_config, ServiceError::NotFound);
    };

    let ctx = request_context(&req, None);

    match users_service::load_user_tasks(client.get_ref(), &ctx, user_id, params.page()).await {
        Ok(data) => render_page(
            &tera,
            "user_tasks.html",
            &data,
            base_context(&ctx, &server_config, req.path()),
        ),
        Err(err) => error_response(&tera, &server_config, err),
    }
}

#[get("/users/pending-cases/{user_id}")]
pub async fn user_pending_cases(
    req: HttpRequest,
    user_id: web::Path<String>,
    params: web::Query<PageQuery>,
    client: web::Data<SiriusClient>,
    tera: web::Data<Tera>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let Ok(user_id) = user_id.parse::<i32>() else {
        return error_response(&tera, &server_config, ServiceError::NotFound);
    };

    let ctx = request_context(&req, None);

    match users_service::load_user_pending_cases(client.get_ref(), &ctx, user_id, params.page())
        .await
    {
        Ok(data) => render_page(
            &tera,
            "user_pending_cases.html",
            &data,
            base_context(&ctx, &server_config, req.path()),
        ),
        Err(err) => error_response(&tera, &server_config, err),
    }
}

#[get("/users/all-cases/{user_id}")]
pub async fn user_all_cases(
    req: HttpRequest,
    user_id: web::Path<String>,
    params: web::Query<PageQuery>,
    client: web::Data<SiriusClient>,
    tera: web::Data<Tera>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let Ok(user_id) = user_id.parse::<i32>() else {
        return error_response(&tera, &server_config, ServiceError::NotFound);
    };

    let ctx = request_context(&req, None);

    match users_service::load_user_all_cases(client.get_ref(), &ctx, user_id, params.page()).await {
        Ok(data) => render_page(
            &tera,
            "user_all_cases.html",
            &data,
            base_context(&ctx, &server_config, req.path()),
        ),
        Err(err) => error_response(&tera, &server_config, err),
    }
}

#[get("/reassign")]
pub async fn show_reassign(
    req: HttpRequest,
    client: web::Data<SiriusClient>,
    tera: web::Data<Tera>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let form: ReassignForm = match serde_html_form::from_str(req.query_string()) {
        Ok(form) => form,
        Err(e) => return error_response(&tera, &server_config, FormError::from(e).into()),
    };
    let ctx = request_context(&req, None);

    match users_service::load_reassign(client.get_ref(), &ctx, form).await {
        Ok(data) => render_page(
            &tera,
            "reassign.html",
            &data,
            base_context(&ctx, &server_config, req.path()),
        ),
        Err(err) => error_response(&tera, &server_config, err),
    }
}

#[post("/reassign")]
pub async fn submit_reassign(
    req: HttpRequest,
    body: web::Bytes,
    client: web::Data<SiriusClient>,
    tera: web::Data<Tera>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let form: ReassignForm = match serde_html_form::from_bytes(&body) {
        Ok(form) => form,
        Err(e) => return error_response(&tera, &server_config, FormError::from(e).into()),
    };
    let ctx = request_context(&req, Some(&form.xsrf_token));

    match users_service::reassign(client.get_ref(), &ctx, form).await {
        Ok(data) => render_page(
            &tera,
            "reassign.html",
            &data,
            base_context(&ctx, &server_config, req.path()),
        ),
        Err(err) => error_response(&tera, &server_config, err),
    }
}
