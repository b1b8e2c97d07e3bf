use crate::forms::feedback::{FeedbackForm, FeedbackPayload};
use crate::services::{ServiceError, ServiceResult};
use crate::sirius::{ApiError, FeedbackWriter, RequestContext};

/// Sends the feedback and returns the local path to go back to.
pub async fn send_feedback<R>(
    client: &R,
    ctx: &RequestContext,
    form: FeedbackForm,
) -> ServiceResult<String>
where
    R: FeedbackWriter + ?Sized,
{
    let payload = FeedbackPayload::try_from(form)?;

    match client.feedback(ctx, &payload.message).await {
        Ok(()) => Ok(payload.redirect),
        Err(ApiError::Rejected(detail)) => Err(ServiceError::Form(detail)),
        Err(err) => Err(err.into()),
    }
}
