//! Filter, sort and paging intent for list queries against Sirius.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use url::form_urlencoded;

/// Direction of a sort clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub const fn as_str(self) -> &'static str {
        match self {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        }
    }
}

impl Display for SortOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable description of a list query.
///
/// Every builder method returns a new value and leaves the receiver
/// untouched, so a base criteria can be shared between several calls:
///
/// ```
/// use sirius_lpa_dashboard::sirius::criteria::{Criteria, SortOrder};
///
/// let base = Criteria::default().filter("status", "Pending");
/// let first = base.page(1);
/// let oldest = base.sort("receiptDate", SortOrder::Ascending).limit(1);
///
/// assert_eq!(base.encode(), "filter=status%3APending");
/// assert_eq!(first.encode(), "filter=status%3APending&page=1");
/// assert_eq!(
///     oldest.encode(),
///     "filter=status%3APending&limit=1&sort=receiptDate%3Aasc"
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Criteria {
    page: usize,
    limit: usize,
    filters: Vec<(String, String)>,
    sorts: Vec<(String, SortOrder)>,
}

impl Criteria {
    /// Requests the given page. `0` leaves the parameter out.
    pub fn page(&self, page: usize) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }

    /// Limits the page size. `0` leaves the parameter out.
    pub fn limit(&self, limit: usize) -> Self {
        Self {
            limit,
            ..self.clone()
        }
    }

    /// Appends a `field:value` filter. Repeated fields are all emitted.
    pub fn filter(&self, field: impl Into<String>, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.filters.push((field.into(), value.into()));
        next
    }

    /// Appends a `field:order` sort clause.
    pub fn sort(&self, field: impl Into<String>, order: SortOrder) -> Self {
        let mut next = self.clone();
        next.sorts.push((field.into(), order));
        next
    }

    pub fn current_page(&self) -> usize {
        self.page
    }

    pub fn current_limit(&self) -> usize {
        self.limit
    }

    pub fn filters(&self) -> &[(String, String)] {
        &self.filters
    }

    pub fn sorts(&self) -> &[(String, SortOrder)] {
        &self.sorts
    }

    /// Encodes the criteria as a query string.
    ///
    /// Parameter names are emitted in alphabetical order (`filter`, `limit`,
    /// `page`, `sort`); Sirius relies on that ordering.
    pub fn encode(&self) -> String {
        let mut params: BTreeMap<&str, String> = BTreeMap::new();

        if !self.filters.is_empty() {
            let filters = self
                .filters
                .iter()
                .map(|(field, value)| format!("{field}:{value}"))
                .collect::<Vec<_>>()
                .join(",");
            params.insert("filter", filters);
        }

        if !self.sorts.is_empty() {
            let sorts = self
                .sorts
                .iter()
                .map(|(field, order)| format!("{field}:{order}"))
                .collect::<Vec<_>>()
                .join(",");
            params.insert("sort", sorts);
        }

        if self.page != 0 {
            params.insert("page", self.page.to_string());
        }

        if self.limit != 0 {
            params.insert("limit", self.limit.to_string());
        }

        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(params.iter())
            .finish()
    }
}

impl Display for Criteria {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.encode())
    }
}
