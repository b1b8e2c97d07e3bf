//! Request construction and response interpretation shared by every endpoint.

use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, COOKIE};
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use crate::domain::pagination::Pagination;
use crate::sirius::errors::{ApiError, ApiResult, StatusError};

pub const BYPASS_MEMBRANE_HEADER: &str = "OPG-Bypass-Membrane";
pub const XSRF_TOKEN_HEADER: &str = "X-XSRF-TOKEN";

/// A cookie of the caller's Sirius session, forwarded as-is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionCookie {
    pub name: String,
    pub value: String,
}

impl SessionCookie {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Per-call state supplied by the page handler.
///
/// The client only borrows it for the duration of a call.
#[derive(Clone, Debug, Default)]
pub struct RequestContext {
    cancellation: CancellationToken,
    timeout: Option<Duration>,
    cookies: Vec<SessionCookie>,
    xsrf_token: String,
}

impl RequestContext {
    pub fn new(cookies: Vec<SessionCookie>, xsrf_token: impl Into<String>) -> Self {
        Self {
            cookies,
            xsrf_token: xsrf_token.into(),
            ..Self::default()
        }
    }

    /// Aborts in-flight calls once `token` is cancelled.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancellation
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn cookies(&self) -> &[SessionCookie] {
        &self.cookies
    }

    pub fn xsrf_token(&self) -> &str {
        &self.xsrf_token
    }

    /// Value of the outgoing `Cookie` header, if there is anything to send.
    pub fn cookie_header(&self) -> Option<String> {
        if self.cookies.is_empty() {
            return None;
        }

        let header = self
            .cookies
            .iter()
            .map(|cookie| format!("{}={}", cookie.name, cookie.value))
            .collect::<Vec<_>>()
            .join("; ");

        Some(header)
    }
}

/// HTTP client for the Sirius API.
///
/// Holds nothing but the base URL and the underlying connection pool, so it
/// is cheap to clone and safe to share between workers.
#[derive(Clone, Debug)]
pub struct SiriusClient {
    http: reqwest::Client,
    base_url: String,
}

impl SiriusClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Builds a client whose requests give up after `timeout`.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> ApiResult<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::new(http, base_url))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, ctx: &RequestContext, method: Method, path: &str) -> RequestBuilder {
        let mut builder = self
            .http
            .request(method, format!("{}{}", self.base_url, path))
            .header(BYPASS_MEMBRANE_HEADER, "1")
            .header(XSRF_TOKEN_HEADER, ctx.xsrf_token());

        if let Some(cookies) = ctx.cookie_header() {
            builder = builder.header(COOKIE, cookies);
        }

        if let Some(timeout) = ctx.timeout() {
            builder = builder.timeout(timeout);
        }

        builder
    }

    /// Sends the request and returns the raw body of a successful response.
    ///
    /// A `401` maps to [`ApiError::Unauthorized`] without reading the body;
    /// any other status besides `expected` maps to a [`StatusError`].
    async fn execute(
        &self,
        ctx: &RequestContext,
        builder: RequestBuilder,
        expected: StatusCode,
    ) -> ApiResult<Vec<u8>> {
        let request = builder.build()?;
        let method = request.method().to_string();
        log::debug!("Sirius request: {method} {}", request.url().path());

        let exchange = async {
            let response = self.http.execute(request).await?;
            let status = response.status();

            if status == StatusCode::UNAUTHORIZED {
                return Err(ApiError::Unauthorized);
            }

            if status != expected {
                let url = response.url().to_string();
                let body = response.text().await.unwrap_or_default();
                log::warn!("Sirius responded with {status} to {method} {url}");
                return Err(ApiError::Status(StatusError {
                    code: status.as_u16(),
                    url,
                    method: method.clone(),
                    body,
                }));
            }

            Ok(response.bytes().await?.to_vec())
        };

        tokio::select! {
            biased;
            _ = ctx.cancellation().cancelled() => Err(ApiError::Cancelled),
            result = exchange => result,
        }
    }

    /// `GET path` and decode the JSON body.
    pub(crate) async fn get_json<T>(&self, ctx: &RequestContext, path: &str) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        let builder = self.request(ctx, Method::GET, path);
        let body = self.execute(ctx, builder, StatusCode::OK).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Sends a command, optionally with a JSON body, and ignores the response payload.
    pub(crate) async fn send<B>(
        &self,
        ctx: &RequestContext,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ApiResult<()>
    where
        B: Serialize + ?Sized + Sync,
    {
        let mut builder = self.request(ctx, method, path);
        if let Some(body) = body {
            builder = builder
                .header(CONTENT_TYPE, "application/json")
                .body(serde_json::to_vec(body)?);
        }

        self.execute(ctx, builder, StatusCode::OK).await?;
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct ApiPages {
    current: usize,
    total: usize,
}

/// Envelope of every paginated list endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct PaginatedList<T> {
    pages: ApiPages,
    total: usize,
    limit: usize,
    #[serde(default = "Vec::new", alias = "cases", alias = "tasks")]
    items: Vec<T>,
}

impl<T> PaginatedList<T> {
    pub(crate) fn into_parts(self) -> (Vec<T>, Pagination) {
        let pagination = Pagination {
            total_items: self.total,
            current_page: self.pages.current,
            total_pages: self.pages.total,
            page_size: self.limit,
        };

        (self.items, pagination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::case::Case;

    #[test]
    fn cookie_header_joins_pairs_in_order() {
        let ctx = RequestContext::new(
            vec![
                SessionCookie::new("sirius", "abc"),
                SessionCookie::new("XSRF-TOKEN", "a%20b"),
            ],
            "token",
        );

        assert_eq!(
            ctx.cookie_header().as_deref(),
            Some("sirius=abc; XSRF-TOKEN=a%20b")
        );
        assert_eq!(ctx.xsrf_token(), "token");
        assert!(RequestContext::default().cookie_header().is_none());
    }

    #[test]
    fn paginated_list_maps_to_pagination() {
        let list: PaginatedList<Case> = serde_json::from_str(
            r#"{
                "total": 1,
                "limit": 25,
                "pages": {"current": 1, "total": 1},
                "cases": [{
                    "id": 58,
                    "uId": "7000-2830-9492",
                    "donor": {"id": 1, "uId": "7000-5113-1871", "firstname": "Adrian", "surname": "Kurkjian"},
                    "caseSubtype": "pf",
                    "receiptDate": "09/01/2021",
                    "status": "Pending"
                }]
            }"#,
        )
        .unwrap();

        let (cases, pagination) = list.into_parts();

        assert_eq!(cases.len(), 1);
        assert_eq!(
            pagination,
            Pagination {
                total_items: 1,
                current_page: 1,
                total_pages: 1,
                page_size: 25,
            }
        );
    }

    #[test]
    fn missing_items_decode_as_empty() {
        let list: PaginatedList<Case> = serde_json::from_str(
            r#"{"total": 0, "limit": 25, "pages": {"current": 1, "total": 0}}"#,
        )
        .unwrap();

        let (cases, pagination) = list.into_parts();
        assert!(cases.is_empty());
        assert_eq!(pagination.total_items, 0);
    }
}
