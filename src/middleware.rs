//! Sends signed-out users to the Sirius sign-in page.

use std::future::{Future, Ready, ready};
use std::pin::Pin;

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::http::{StatusCode, header};
use actix_web::{Error, HttpResponse};
use url::form_urlencoded;

/// Rewrites any `401` response into a `302` to `auth_url?redirect=<path>`.
#[derive(Clone, Debug)]
pub struct RedirectUnauthorized {
    auth_url: String,
}

impl RedirectUnauthorized {
    pub fn new(auth_url: impl Into<String>) -> Self {
        Self {
            auth_url: auth_url.into(),
        }
    }
}

fn sign_in_location(auth_url: &str, path: &str) -> String {
    let redirect: String = form_urlencoded::byte_serialize(path.as_bytes()).collect();
    format!("{auth_url}?redirect={redirect}")
}

impl<S, B> Transform<S, ServiceRequest> for RedirectUnauthorized
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = RedirectUnauthorizedMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RedirectUnauthorizedMiddleware {
            service,
            auth_url: self.auth_url.clone(),
        }))
    }
}

pub struct RedirectUnauthorizedMiddleware<S> {
    service: S,
    auth_url: String,
}

impl<S, B> Service<ServiceRequest> for RedirectUnauthorizedMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let location = sign_in_location(&self.auth_url, req.path());
        let fut = self.service.call(req);

        Box::pin(async move {
            let res = fut.await?;

            if res.status() != StatusCode::UNAUTHORIZED {
                return Ok(res.map_into_left_body());
            }

            let (req, _) = res.into_parts();
            let response = HttpResponse::Found()
                .insert_header((header::LOCATION, location))
                .finish()
                .map_into_right_body();

            Ok(ServiceResponse::new(req, response))
        })
    }
}
