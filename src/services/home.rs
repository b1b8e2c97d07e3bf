use crate::sirius::{RequestContext, UserReader};
use crate::services::ServiceResult;

pub const CARD_PAYMENTS_PATH: &str = "/card-payments";
pub const PENDING_CASES_PATH: &str = "/pending-cases";

/// Picks the landing page for the signed-in user.
pub async fn resolve_home<R>(client: &R, ctx: &RequestContext) -> ServiceResult<&'static str>
where
    R: UserReader + ?Sized,
{
    let me = client.my_details(ctx).await?;

    if me.is_card_payment_user() {
        Ok(CARD_PAYMENTS_PATH)
    } else {
        Ok(PENDING_CASES_PATH)
    }
}
