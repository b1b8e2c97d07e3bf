use async_trait::async_trait;
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::sirius::{ApiError, ApiResult, FeedbackWriter, RequestContext, SiriusClient};

#[derive(Debug, Serialize)]
struct FeedbackRequest<'a> {
    message: &'a str,
}

#[derive(Debug, Deserialize)]
struct ProblemDetail {
    detail: String,
}

/// Replaces a status error with the validation detail Sirius sent, when there is one.
fn with_detail(err: ApiError) -> ApiError {
    match err {
        ApiError::Status(status) => match serde_json::from_str::<ProblemDetail>(&status.body) {
            Ok(problem) => ApiError::Rejected(problem.detail),
            Err(_) => ApiError::Status(status),
        },
        other => other,
    }
}

#[async_trait]
impl FeedbackWriter for SiriusClient {
    async fn feedback(&self, ctx: &RequestContext, message: &str) -> ApiResult<()> {
        let request = FeedbackRequest { message };
        self.send(ctx, Method::POST, "/lpa-api/v1/feedback/poas", Some(&request))
            .await
            .map_err(with_detail)
    }
}
