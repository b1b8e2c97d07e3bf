use actix_web::{HttpRequest, Responder, get, web};
use tera::Tera;

use crate::forms::{FormError, PageQuery};
use crate::forms::teams::TeamWorkInProgressQuery;
use crate::models::config::ServerConfig;
use crate::routes::{base_context, error_response, render_page, request_context};
use crate::services::ServiceError;
use crate::services::teams as teams_service;
use crate::sirius::SiriusClient;

#[get("/teams/work-in-progress/{team_id}")]
pub async fn team_work_in_progress(
    req: HttpRequest,
    team_id: web::Path<String>,
    client: web::Data<SiriusClient>,
    tera: web::Data<Tera>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let Ok(team_id) = team_id.parse::<i32>() else {
        return error_response(&tera, &server_config, ServiceError::NotFound);
    };

    let query: TeamWorkInProgressQuery = match serde_html_form::from_str(req.query_string()) {
        Ok(query) => query,
        Err(e) => return error_response(&tera, &server_config, FormError::from(e).into()),
    };

    let ctx = request_context(&req, None);

    match teams_service::load_team_work_in_progress(client.get_ref(), &ctx, team_id, &query).await
    {
        Ok(data) => render_page(
            &tera,
            "team_work_in_progress.html",
            &data,
            base_context(&ctx, &server_config, req.path()),
        ),
        Err(err) => error_response(&tera, &server_config, err),
    }
}

#[get("/teams/central")]
pub async fn central_cases(
    req: HttpRequest,
    params: web::Query<PageQuery>,
    client: web::Data<SiriusClient>,
    tera: web::Data<Tera>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let ctx = request_context(&req, None);

    match teams_service::load_central_cases(client.get_ref(), &ctx, params.page()).await {
        Ok(data) => render_page(
            &tera,
            "central_cases.html",
            &data,
            base_context(&ctx, &server_config, req.path()),
        ),
        Err(err) => error_response(&tera, &server_config, err),
    }
}
