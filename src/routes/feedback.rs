use actix_web::http::header;
use actix_web::{HttpRequest, Responder, get, post, web};
use tera::Tera;
use url::Url;

use crate::forms::feedback::FeedbackForm;
use crate::models::config::ServerConfig;
use crate::routes::{
    base_context, error_response, redirect, render_template, request_context,
};
use crate::services::feedback as feedback_service;
use crate::sirius::SiriusClient;

/// Path and query of the page the user came from.
fn referer_path(req: &HttpRequest) -> String {
    let Some(referer) = req
        .headers()
        .get(header::REFERER)
        .and_then(|value| value.to_str().ok())
    else {
        return "/".to_string();
    };

    match Url::parse(referer) {
        Ok(url) => match url.query() {
            Some(query) => format!("{}?{query}", url.path()),
            None => url.path().to_string(),
        },
        Err(_) => referer.to_string(),
    }
}

#[get("/feedback")]
pub async fn show_feedback(
    req: HttpRequest,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let ctx = request_context(&req, None);

    let mut context = base_context(&ctx, &server_config, req.path());
    context.insert("redirect", &referer_path(&req));

    render_template(&tera, "feedback.html", &context)
}

#[post("/feedback")]
pub async fn submit_feedback(
    req: HttpRequest,
    web::Form(form): web::Form<FeedbackForm>,
    client: web::Data<SiriusClient>,
    tera: web::Data<Tera>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let ctx = request_context(&req, Some(&form.xsrf_token));

    match feedback_service::send_feedback(client.get_ref(), &ctx, form).await {
        Ok(location) => redirect(&location),
        Err(err) => error_response(&tera, &server_config, err),
    }
}
