use async_trait::async_trait;
use url::form_urlencoded;

use crate::domain::user::{Assignee, MyDetails, User};
use crate::sirius::{ApiResult, RequestContext, SiriusClient, UserReader};

#[async_trait]
impl UserReader for SiriusClient {
    async fn my_details(&self, ctx: &RequestContext) -> ApiResult<MyDetails> {
        self.get_json(ctx, "/api/v1/users/current").await
    }

    async fn user(&self, ctx: &RequestContext, user_id: i32) -> ApiResult<Assignee> {
        self.get_json(ctx, &format!("/api/v1/users/{user_id}")).await
    }

    async fn user_by_email(&self, ctx: &RequestContext, email: &str) -> ApiResult<User> {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("email", email)
            .finish();
        self.get_json(ctx, &format!("/api/v1/users?{query}")).await
    }
}
