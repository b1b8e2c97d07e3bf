use serde::Deserialize;
use validator::Validate;

use crate::forms::FormError;

#[derive(Debug, Default, Deserialize, Validate)]
pub struct FeedbackForm {
    #[serde(default)]
    #[validate(length(min = 1, max = 10000))]
    pub feedback: String,
    #[serde(default)]
    pub redirect: String,
    #[serde(default, rename = "xsrfToken")]
    pub xsrf_token: String,
}

pub struct FeedbackPayload {
    pub message: String,
    /// Local path to return to once the feedback is sent.
    pub redirect: String,
}

/// Only same-site paths are followed after submitting feedback.
fn local_path(redirect: &str) -> String {
    if redirect.starts_with('/') && !redirect.starts_with("//") {
        redirect.to_string()
    } else {
        "/".to_string()
    }
}

impl TryFrom<FeedbackForm> for FeedbackPayload {
    type Error = FormError;

    fn try_from(mut form: FeedbackForm) -> Result<Self, Self::Error> {
        form.feedback = form.feedback.trim().to_string();
        form.validate()?;

        Ok(Self {
            message: form.feedback,
            redirect: local_path(&form.redirect),
        })
    }
}
