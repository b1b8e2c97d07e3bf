//! Page-level workflows composed from Sirius client calls.
//!
//! Every function is generic over the client traits it needs so the
//! handlers can pass the real [`SiriusClient`](crate::sirius::SiriusClient)
//! while tests pass a mock.

use thiserror::Error;

use crate::domain::user::MyDetails;
use crate::forms::FormError;
use crate::sirius::{ApiError, RequestContext, UserReader};

pub mod cases;
pub mod feedback;
pub mod home;
pub mod tasks;
pub mod teams;
pub mod users;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("you do not have permission to view this page")]
    Forbidden,

    #[error("not found")]
    NotFound,

    #[error("{0}")]
    Form(String),
}

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        ServiceError::Form(err.to_string())
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Loads the signed-in user and fails unless they are a manager.
pub(crate) async fn ensure_manager<R>(client: &R, ctx: &RequestContext) -> ServiceResult<MyDetails>
where
    R: UserReader + ?Sized,
{
    let me = client.my_details(ctx).await?;
    if !me.is_manager() {
        return Err(ServiceError::Forbidden);
    }
    Ok(me)
}
