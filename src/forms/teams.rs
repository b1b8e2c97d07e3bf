//! Query-string filters of the team work-in-progress page.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::sirius::Criteria;

const FILTER_DATE_FORMAT: &str = "%Y-%m-%d";
const CASE_STATUSES: [&str; 2] = ["pending", "pending-worked"];
const LPA_TYPES: [&str; 3] = ["pfa", "hw", "both"];

/// Raw query parameters; repeated keys collect into the vectors.
#[derive(Debug, Default, Deserialize)]
pub struct TeamWorkInProgressQuery {
    #[serde(default)]
    pub allocation: Vec<String>,
    #[serde(default)]
    pub status: Vec<String>,
    #[serde(default, rename = "date-from")]
    pub date_from: Vec<String>,
    #[serde(default, rename = "date-to")]
    pub date_to: Vec<String>,
    #[serde(default, rename = "lpa-type")]
    pub lpa_type: Vec<String>,
    pub page: Option<String>,
}

impl TeamWorkInProgressQuery {
    pub fn page(&self) -> usize {
        super::parse_page(self.page.as_deref())
    }
}

/// Filters that survived validation. Unknown or malformed values are dropped.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TeamWorkInProgressFilters {
    /// At least one filter is active.
    pub set: bool,
    pub allocation: Vec<i32>,
    pub status: Vec<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub lpa_type: Option<String>,
}

fn parse_date(values: &[String]) -> Option<NaiveDate> {
    let first = values.first()?;
    NaiveDate::parse_from_str(first, FILTER_DATE_FORMAT).ok()
}

impl From<&TeamWorkInProgressQuery> for TeamWorkInProgressFilters {
    fn from(query: &TeamWorkInProgressQuery) -> Self {
        let allocation: Vec<i32> = query
            .allocation
            .iter()
            .filter_map(|value| value.parse().ok())
            .collect();

        let status: Vec<String> = query
            .status
            .iter()
            .filter(|value| CASE_STATUSES.contains(&value.as_str()))
            .cloned()
            .collect();

        let date_from = parse_date(&query.date_from);
        let date_to = parse_date(&query.date_to);

        let lpa_type = query
            .lpa_type
            .first()
            .filter(|value| LPA_TYPES.contains(&value.as_str()))
            .cloned();

        let set = !allocation.is_empty()
            || !status.is_empty()
            || date_from.is_some()
            || date_to.is_some()
            || lpa_type.is_some();

        Self {
            set,
            allocation,
            status,
            date_from,
            date_to,
            lpa_type,
        }
    }
}

impl TeamWorkInProgressFilters {
    /// Name/value pairs in the order they are applied.
    fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if !self.set {
            return pairs;
        }

        pairs.extend(self.allocation.iter().map(|id| ("allocation", id.to_string())));
        pairs.extend(self.status.iter().map(|status| ("status", status.clone())));
        if let Some(date) = self.date_from {
            pairs.push(("date-from", date.format(FILTER_DATE_FORMAT).to_string()));
        }
        if let Some(date) = self.date_to {
            pairs.push(("date-to", date.format(FILTER_DATE_FORMAT).to_string()));
        }
        if let Some(lpa_type) = &self.lpa_type {
            pairs.push(("lpa-type", lpa_type.clone()));
        }
        pairs
    }

    pub fn criteria(&self) -> Criteria {
        self.pairs()
            .into_iter()
            .fold(Criteria::default(), |criteria, (field, value)| {
                criteria.filter(field, value)
            })
    }

    /// Query string that reproduces these filters, keys in sorted order.
    pub fn encode(&self) -> String {
        let mut pairs = self.pairs();
        pairs.sort_by_key(|(name, _)| *name);

        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(pairs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filters(query: &str) -> TeamWorkInProgressFilters {
        let query: TeamWorkInProgressQuery = serde_html_form::from_str(query).unwrap();
        TeamWorkInProgressFilters::from(&query)
    }

    #[test]
    fn empty_query_sets_nothing() {
        let filters = filters("");

        assert!(!filters.set);
        assert_eq!(filters.criteria(), Criteria::default());
        assert_eq!(filters.encode(), "");
    }

    #[test]
    fn invalid_values_are_dropped() {
        let filters = filters("allocation=x&status=closed&date-from=yesterday&lpa-type=other");

        assert_eq!(filters, TeamWorkInProgressFilters::default());
    }

    #[test]
    fn criteria_follow_filter_order() {
        let filters = filters(
            "lpa-type=hw&status=pending-worked&allocation=12&allocation=47&date-to=2021-03-01&date-from=2021-02-01",
        );

        assert!(filters.set);
        assert_eq!(
            filters.criteria().encode(),
            "filter=allocation%3A12%2Callocation%3A47%2Cstatus%3Apending-worked%2Cdate-from%3A2021-02-01%2Cdate-to%3A2021-03-01%2Clpa-type%3Ahw"
        );
    }

    #[test]
    fn encode_sorts_keys() {
        let filters = filters("status=pending&allocation=12&lpa-type=both&date-from=2021-02-01");

        assert_eq!(
            filters.encode(),
            "allocation=12&date-from=2021-02-01&lpa-type=both&status=pending"
        );
    }

    #[test]
    fn page_is_read_alongside_filters() {
        let query: TeamWorkInProgressQuery =
            serde_html_form::from_str("status=pending&page=3").unwrap();
        assert_eq!(query.page(), 3);
    }
}
