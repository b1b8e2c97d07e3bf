use serde::Deserialize;

use crate::forms::{FormError, parse_ids};

/// Checkbox list posted by the pending cases page.
#[derive(Debug, Default, Deserialize)]
pub struct MarkWorkedForm {
    #[serde(default)]
    pub worked: Vec<String>,
    #[serde(default, rename = "xsrfToken")]
    pub xsrf_token: String,
}

pub struct MarkWorkedPayload {
    pub case_ids: Vec<i32>,
}

impl TryFrom<MarkWorkedForm> for MarkWorkedPayload {
    type Error = FormError;

    fn try_from(form: MarkWorkedForm) -> Result<Self, Self::Error> {
        let case_ids = parse_ids(&form.worked, FormError::InvalidCaseId)?;
        Ok(Self { case_ids })
    }
}

/// Form carrying nothing but the XSRF token, used by the "request next" buttons.
#[derive(Debug, Default, Deserialize)]
pub struct XsrfForm {
    #[serde(default, rename = "xsrfToken")]
    pub xsrf_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_repeated_checkboxes() {
        let form: MarkWorkedForm =
            serde_html_form::from_str("worked=12&worked=34&xsrfToken=abc").unwrap();
        assert_eq!(form.xsrf_token, "abc");

        let payload = MarkWorkedPayload::try_from(form).unwrap();
        assert_eq!(payload.case_ids, vec![12, 34]);
    }

    #[test]
    fn rejects_non_numeric_ids() {
        let form: MarkWorkedForm = serde_html_form::from_str("worked=12&worked=oops").unwrap();
        assert!(matches!(
            MarkWorkedPayload::try_from(form),
            Err(FormError::InvalidCaseId)
        ));
    }
}
