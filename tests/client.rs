mod common;

use std::time::Duration;

use actix_web::{HttpRequest, HttpResponse, web};
use serde_json::{Value, json};
use tokio_util::sync::CancellationToken;

use common::{header_value, spawn_sirius};
use sirius_lpa_dashboard::sirius::{
    ApiError, CaseReader, CaseWriter, Criteria, FeedbackWriter, RequestContext, SessionCookie,
    SiriusClient, SortOrder, StatusError, TaskWriter, TeamReader, UserReader,
};

fn client(base_url: &str) -> SiriusClient {
    SiriusClient::with_timeout(base_url, Duration::from_secs(5)).expect("build client")
}

fn session() -> RequestContext {
    RequestContext::new(
        vec![
            SessionCookie::new("sirius", "session-id"),
            SessionCookie::new("XSRF-TOKEN", "abc%3D"),
        ],
        "abc=",
    )
}

fn case_list() -> Value {
    json!({
        "limit": 25,
        "pages": {"current": 2, "total": 3},
        "total": 60,
        "cases": [{
            "id": 58,
            "uId": "7000-2830-9492",
            "donor": {"id": 1, "uId": "7000-5113-1871", "firstname": "Adrian", "surname": "Kurkjian"},
            "caseSubtype": "pf",
            "receiptDate": "09/01/2021",
            "status": "Pending",
            "workedDate": "10/01/2021"
        }]
    })
}

#[actix_web::test]
async fn forwards_session_headers() {
    let base_url = spawn_sirius(|cfg| {
        cfg.route(
            "/api/v1/users/current",
            web::get().to(|req: HttpRequest| async move {
                let authorised = header_value(&req, "OPG-Bypass-Membrane") == "1"
                    && header_value(&req, "X-XSRF-TOKEN") == "abc="
                    && header_value(&req, "Cookie") == "sirius=session-id; XSRF-TOKEN=abc%3D";

                if !authorised {
                    return HttpResponse::Unauthorized().finish();
                }

                HttpResponse::Ok().json(json!({
                    "id": 47,
                    "displayName": "system admin",
                    "roles": ["OPG User", "Manager"],
                    "teams": [{"id": 66, "displayName": "Casework Team 1"}]
                }))
            }),
        );
    });

    let me = client(&base_url).my_details(&session()).await.unwrap();

    assert_eq!(me.id, 47);
    assert_eq!(me.display_name, "system admin");
    assert!(me.is_manager());
    assert_eq!(me.teams[0].display_name, "Casework Team 1");
}

#[actix_web::test]
async fn lists_cases_with_encoded_criteria() {
    let base_url = spawn_sirius(|cfg| {
        cfg.route(
            "/api/v1/assignees/47/cases",
            web::get().to(|req: HttpRequest| async move {
                if req.query_string() != "filter=status%3APending%2CcaseType%3Alpa%2Cactive%3Atrue&page=2&sort=receiptDate%3Aasc" {
                    return HttpResponse::BadRequest().body(req.query_string().to_string());
                }
                HttpResponse::Ok().json(case_list())
            }),
        );
    });

    let criteria = Criteria::default()
        .filter("status", "Pending")
        .page(2)
        .sort("receiptDate", SortOrder::Ascending);

    let (cases, pagination) = client(&base_url)
        .cases_by_assignee(&session(), 47, &criteria)
        .await
        .unwrap();

    assert_eq!(cases.len(), 1);
    assert_eq!(cases[0].uid, "7000-2830-9492");
    assert_eq!(cases[0].donor.display_name(), "Adrian Kurkjian");
    assert_eq!(cases[0].receipt_date.to_string(), "2021-01-09");
    assert_eq!(
        cases[0].worked_date.map(|date| date.to_string()).as_deref(),
        Some("2021-01-10")
    );
    assert_eq!(pagination.total_items, 60);
    assert_eq!(pagination.current_page, 2);
    assert_eq!(pagination.total_pages, 3);
    assert_eq!(pagination.page_size, 25);
}

#[actix_web::test]
async fn workable_case_checks_unworked_pending_cases() {
    let base_url = spawn_sirius(|cfg| {
        cfg.route(
            "/api/v1/assignees/{id}/cases",
            web::get().to(|req: HttpRequest, id: web::Path<i32>| async move {
                if req.query_string() != "filter=status%3APending%2Cworked%3Afalse%2CcaseType%3Alpa%2Cactive%3Atrue&limit=1&page=1" {
                    return HttpResponse::BadRequest().finish();
                }
                let total = if *id == 47 { 1 } else { 0 };
                HttpResponse::Ok().json(json!({
                    "limit": 1,
                    "pages": {"current": 1, "total": total},
                    "total": total,
                    "cases": []
                }))
            }),
        );
    });

    let client = client(&base_url);
    assert!(client.has_workable_case(&session(), 47).await.unwrap());
    assert!(!client.has_workable_case(&session(), 12).await.unwrap());
}

#[actix_web::test]
async fn unauthorized_is_its_own_error() {
    let base_url = spawn_sirius(|cfg| {
        cfg.route(
            "/api/v1/users/current",
            web::get().to(|| async { HttpResponse::Unauthorized().body("expired") }),
        );
    });

    let err = client(&base_url)
        .my_details(&RequestContext::default())
        .await
        .unwrap_err();

    assert!(err.is_unauthorized());
}

#[actix_web::test]
async fn unexpected_status_keeps_request_details() {
    let base_url = spawn_sirius(|cfg| {
        cfg.route(
            "/api/v1/users/12",
            web::get().to(|| async { HttpResponse::ImATeapot().body("short and stout") }),
        );
    });

    let err = client(&base_url)
        .user(&session(), 12)
        .await
        .unwrap_err();

    match err {
        ApiError::Status(status) => {
            assert_eq!(
                status,
                StatusError {
                    code: 418,
                    url: format!("{base_url}/api/v1/users/12"),
                    method: "GET".to_string(),
                    body: "short and stout".to_string(),
                }
            );
            assert_eq!(status.title(), "unexpected response from Sirius");
        }
        other => panic!("expected a status error, got {other:?}"),
    }
}

#[actix_web::test]
async fn malformed_dates_fail_to_decode() {
    let base_url = spawn_sirius(|cfg| {
        cfg.route(
            "/api/v1/teams/66/cases",
            web::get().to(|| async {
                let mut body = case_list();
                body["cases"][0]["receiptDate"] = json!("2021-01-09");
                HttpResponse::Ok().json(body)
            }),
        );
    });

    let err = client(&base_url)
        .cases_by_team(&session(), 66, &Criteria::default())
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Decode(_)));
}

#[actix_web::test]
async fn cancelled_calls_stop_waiting() {
    let base_url = spawn_sirius(|cfg| {
        cfg.route(
            "/api/v1/users/current",
            web::get().to(|| async {
                actix_web::rt::time::sleep(Duration::from_secs(3)).await;
                HttpResponse::Ok().json(json!({"id": 1}))
            }),
        );
    });

    let token = CancellationToken::new();
    let ctx = RequestContext::default().with_cancellation(token.clone());

    actix_web::rt::spawn(async move {
        actix_web::rt::time::sleep(Duration::from_millis(50)).await;
        token.cancel();
    });

    let err = client(&base_url).my_details(&ctx).await.unwrap_err();
    assert!(matches!(err, ApiError::Cancelled));
}

#[actix_web::test]
async fn per_call_timeout_is_a_transport_error() {
    let base_url = spawn_sirius(|cfg| {
        cfg.route(
            "/api/v1/users/current",
            web::get().to(|| async {
                actix_web::rt::time::sleep(Duration::from_secs(3)).await;
                HttpResponse::Ok().json(json!({"id": 1}))
            }),
        );
    });

    let ctx = RequestContext::default().with_timeout(Duration::from_millis(50));
    let err = client(&base_url).my_details(&ctx).await.unwrap_err();

    match err {
        ApiError::Transport(err) => assert!(err.is_timeout()),
        other => panic!("expected a timeout, got {other:?}"),
    }
}

#[actix_web::test]
async fn mark_worked_puts_json() {
    let base_url = spawn_sirius(|cfg| {
        cfg.route(
            "/api/v1/lpas/58",
            web::put().to(|req: HttpRequest, body: web::Json<Value>| async move {
                if header_value(&req, "Content-Type") != "application/json"
                    || body.into_inner() != json!({"worked": true})
                {
                    return HttpResponse::BadRequest().finish();
                }
                HttpResponse::Ok().finish()
            }),
        );
    });

    client(&base_url)
        .mark_worked(&session(), 58)
        .await
        .unwrap();
}

#[actix_web::test]
async fn assign_lists_cases_in_path_and_body() {
    let base_url = spawn_sirius(|cfg| {
        cfg.route(
            "/api/v1/users/{assignee}/cases/{ids}",
            web::put().to(
                |path: web::Path<(i32, String)>, body: web::Json<Value>| async move {
                    let (assignee, ids) = path.into_inner();
                    let expected = json!({"data": [
                        {"assigneeId": 14, "caseType": "LPA", "id": 1},
                        {"assigneeId": 14, "caseType": "LPA", "id": 2}
                    ]});
                    if assignee != 14 || ids != "1+2" || body.into_inner() != expected {
                        return HttpResponse::BadRequest().finish();
                    }
                    HttpResponse::Ok().finish()
                },
            ),
        );
    });

    client(&base_url)
        .assign(&session(), &[1, 2], 14)
        .await
        .unwrap();
}

#[actix_web::test]
async fn bodiless_commands_send_no_content_type() {
    let base_url = spawn_sirius(|cfg| {
        cfg.route(
            "/api/v1/request-new-task",
            web::post().to(|req: HttpRequest| async move {
                if req.headers().contains_key("Content-Type") {
                    return HttpResponse::BadRequest().finish();
                }
                HttpResponse::Ok().finish()
            }),
        );
    });

    client(&base_url)
        .request_next_task(&session())
        .await
        .unwrap();
}

#[actix_web::test]
async fn user_lookup_by_email_escapes_query() {
    let base_url = spawn_sirius(|cfg| {
        cfg.route(
            "/api/v1/users",
            web::get().to(|req: HttpRequest| async move {
                if req.query_string() != "email=opgcasework%40publicguardian.gov.uk" {
                    return HttpResponse::NotFound().finish();
                }
                HttpResponse::Ok().json(json!({"id": 99}))
            }),
        );
    });

    let user = client(&base_url)
        .user_by_email(&session(), "opgcasework@publicguardian.gov.uk")
        .await
        .unwrap();

    assert_eq!(user.id, 99);
}

#[actix_web::test]
async fn teams_skip_typed_teams() {
    let base_url = spawn_sirius(|cfg| {
        cfg.route(
            "/api/v1/teams",
            web::get().to(|| async {
                HttpResponse::Ok().json(json!([
                    {"id": 66, "displayName": "Casework Team 1", "members": [{"id": 47, "displayName": "John"}]},
                    {"id": 67, "displayName": "Allocations", "teamType": {"handle": "ALLOCATIONS"}}
                ]))
            }),
        );
    });

    let teams = client(&base_url).teams(&session()).await.unwrap();

    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0].id, 66);
    assert_eq!(teams[0].members[0].display_name, "John");
}

#[actix_web::test]
async fn feedback_detail_is_surfaced() {
    let base_url = spawn_sirius(|cfg| {
        cfg.route(
            "/lpa-api/v1/feedback/poas",
            web::post().to(|body: web::Json<Value>| async move {
                if body["message"] == "" {
                    return HttpResponse::BadRequest().json(json!({"detail": "Feedback is required"}));
                }
                HttpResponse::Ok().finish()
            }),
        );
    });

    let client = client(&base_url);
    client.feedback(&session(), "Great tool").await.unwrap();

    let err = client.feedback(&session(), "").await.unwrap_err();
    assert!(matches!(err, ApiError::Rejected(ref detail) if detail == "Feedback is required"));
}
