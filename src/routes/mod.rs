//! HTTP handlers and the helpers they share.

use actix_web::http::{Method, StatusCode, header};
use actix_web::{HttpRequest, HttpResponse, web};
use serde::Serialize;
use tera::{Context, Tera};

use crate::models::config::ServerConfig;
use crate::services::ServiceError;
use crate::sirius::{ApiError, RequestContext, SessionCookie};

pub mod cases;
pub mod feedback;
pub mod main;
pub mod tasks;
pub mod teams;
pub mod users;

/// Cookie Sirius stores its anti-forgery token in.
pub const XSRF_COOKIE: &str = "XSRF-TOKEN";

/// Non-standard status used when the browser went away mid-request.
pub const CLIENT_CLOSED_REQUEST: u16 = 499;

/// Registers the pages that need a Sirius session.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(main::home)
        .service(cases::pending_cases)
        .service(cases::all_cases)
        .service(cases::open_task_cases)
        .service(cases::mark_worked)
        .service(cases::request_next_cases)
        .service(tasks::tasks_dashboard)
        .service(tasks::card_payments)
        .service(tasks::request_next_task)
        .service(tasks::request_next_payment_task)
        .service(teams::central_cases)
        .service(teams::team_work_in_progress)
        .service(users::user_pending_cases)
        .service(users::user_all_cases)
        .service(users::user_tasks)
        .service(users::show_reassign)
        .service(users::submit_reassign)
        .service(feedback::show_feedback)
        .service(feedback::submit_feedback);
}

/// Cookies of the incoming request, forwarded to Sirius untouched.
pub fn session_cookies(req: &HttpRequest) -> Vec<SessionCookie> {
    req.headers()
        .get_all(header::COOKIE)
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| {
            let (name, value) = pair.trim().split_once('=')?;
            Some(SessionCookie::new(name, value))
        })
        .collect()
}

/// Builds the per-call context for Sirius.
///
/// Safe requests take the XSRF token from the cookie Sirius set; anything
/// else must echo it back in the `xsrfToken` form field.
pub fn request_context(req: &HttpRequest, form_token: Option<&str>) -> RequestContext {
    let xsrf_token = if req.method() == Method::GET {
        req.cookie(XSRF_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .unwrap_or_default()
    } else {
        form_token.unwrap_or_default().to_string()
    };

    RequestContext::new(session_cookies(req), xsrf_token)
}

/// Template context shared by every page.
pub fn base_context(ctx: &RequestContext, server_config: &ServerConfig, path: &str) -> Context {
    let mut context = Context::new();
    context.insert("xsrf_token", ctx.xsrf_token());
    context.insert("sirius_url", &server_config.sirius_public_url);
    context.insert("current_path", path);
    context
}

/// Renders `template` with the page data merged over the base context.
pub fn render_page<T: Serialize>(
    tera: &Tera,
    template: &str,
    data: &T,
    mut context: Context,
) -> HttpResponse {
    match Context::from_serialize(data) {
        Ok(page) => {
            context.extend(page);
            render_template(tera, template, &context)
        }
        Err(e) => {
            log::error!("Failed to serialize page data for {template}: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            log::error!("Failed to render template {template}: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Maps a failed service call onto the response the browser sees.
///
/// `401` is left bare for [`crate::middleware::RedirectUnauthorized`] to
/// turn into a sign-in redirect.
pub fn error_response(tera: &Tera, server_config: &ServerConfig, err: ServiceError) -> HttpResponse {
    let (status, message) = match &err {
        ServiceError::Api(ApiError::Unauthorized) => return HttpResponse::Unauthorized().finish(),
        ServiceError::Api(ApiError::Cancelled) => {
            let status = StatusCode::from_u16(CLIENT_CLOSED_REQUEST)
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            return HttpResponse::build(status).finish();
        }
        ServiceError::Api(ApiError::Status(status_error)) => {
            log::warn!("{status_error}: {}", status_error.body);
            let status = StatusCode::from_u16(status_error.code)
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, status_error.title().to_string())
        }
        ServiceError::Forbidden => (StatusCode::FORBIDDEN, err.to_string()),
        ServiceError::NotFound => (StatusCode::NOT_FOUND, err.to_string()),
        ServiceError::Form(message) => (StatusCode::BAD_REQUEST, message.clone()),
        ServiceError::Api(api_error) => {
            log::error!("Sirius request failed: {api_error}");
            (StatusCode::INTERNAL_SERVER_ERROR, api_error.to_string())
        }
    };

    let mut context = Context::new();
    context.insert("code", &status.as_u16());
    context.insert("error", &message);
    context.insert("sirius_url", &server_config.sirius_public_url);

    match tera.render("error.html", &context) {
        Ok(body) => HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            log::error!("Failed to render error page: {e}");
            HttpResponse::build(status).body(message)
        }
    }
}
