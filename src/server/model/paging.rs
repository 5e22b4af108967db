//! Paged query domain models.
//!
//! Provides the request-scoped types consumed and produced by the paging engine in
//! `data::paging`: the raw query descriptor taken from the query string, the normalized
//! filter and sort clause it parses into, the validated page request, and the uniform
//! page envelope returned for every collection.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::{model::paging::PageDto, server::error::paging::PagingError};

/// Page number used when the request does not specify one.
pub const DEFAULT_PAGE: u64 = 1;
/// Page size used when the request does not specify one.
pub const DEFAULT_TAKE: u64 = 10;
/// Largest page size a caller may request.
pub const MAX_TAKE: u64 = 100;

/// Reserved descriptor key for the requested page number.
pub const PAGE_KEY: &str = "page";
/// Reserved descriptor key for the page size.
pub const TAKE_KEY: &str = "take";
/// Reserved descriptor key for the sort field.
pub const ORDER_BY_KEY: &str = "orderby";
/// Reserved descriptor key for the sort direction.
pub const DIRECTION_KEY: &str = "direction";

/// Raw key-value pairs of a paged query, usually taken verbatim from the query string.
///
/// Besides the reserved keys (`page`, `take`, `orderby`, `direction`) any key following the
/// `<op>__<field>` convention is treated as a filter by the parser. Everything else is
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct QueryDescriptor(BTreeMap<String, String>);

impl QueryDescriptor {
    /// Creates an empty descriptor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the raw value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Adds or replaces a pair, returning the descriptor for chaining.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Iterates all pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for QueryDescriptor
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Predicate applied to a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// Field must equal the value (`where__<field>`).
    Exact(String),
    /// Field must contain the value as a substring (`like__<field>`).
    Contains(String),
}

/// Field name to predicate mapping with at most one predicate per field.
///
/// Exact matches take precedence: once a field holds an `Exact` filter a later
/// `Contains` for the same field is dropped, while a later `Exact` replaces a `Contains`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedFilter(BTreeMap<String, Filter>);

impl NormalizedFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of an exact-match entry.
    pub fn exact(mut self, field: impl Into<String>, value: impl ToString) -> Self {
        self.insert(field.into(), Filter::Exact(value.to_string()));
        self
    }

    /// Builder form of a substring entry.
    pub fn contains(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(field.into(), Filter::Contains(value.into()));
        self
    }

    /// Inserts a predicate, keeping an existing exact match over a new substring match.
    pub fn insert(&mut self, field: String, filter: Filter) {
        if matches!(filter, Filter::Contains(_))
            && matches!(self.0.get(&field), Some(Filter::Exact(_)))
        {
            return;
        }
        self.0.insert(field, filter);
    }

    pub fn get(&self, field: &str) -> Option<&Filter> {
        self.0.get(field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Filter)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Parses a caller supplied direction; only `asc` (any case) sorts ascending.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(value) if value.trim().eq_ignore_ascii_case("asc") => Self::Asc,
            _ => Self::Desc,
        }
    }
}

/// Single-field ordering of a paged query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortClause {
    pub field: String,
    pub direction: SortDirection,
}

impl SortClause {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }
}

/// Validated paging request.
///
/// Carries the page number and size already checked against the allowed bounds, plus the
/// full descriptor so the parser can still read the sort and filter keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// One-based page number.
    pub page: u64,
    /// Page size.
    pub take: u64,
    /// Original descriptor including reserved keys.
    pub descriptor: QueryDescriptor,
}

impl PageRequest {
    /// Builds a request for the given page and size without any sort or filter keys.
    pub fn new(page: u64, take: u64) -> Self {
        Self {
            page,
            take,
            descriptor: QueryDescriptor::new(),
        }
    }

    /// Validates the reserved `page` and `take` keys of a descriptor.
    ///
    /// Missing keys fall back to `DEFAULT_PAGE` and `DEFAULT_TAKE`.
    ///
    /// # Returns
    /// - `Ok(PageRequest)` - Page and size are within bounds
    /// - `Err(PagingError::InvalidRequest)` - Non-numeric value, `page < 1`, `take < 1`, or
    ///   `take > MAX_TAKE`
    pub fn from_descriptor(descriptor: QueryDescriptor) -> Result<Self, PagingError> {
        let page = parse_positive(&descriptor, PAGE_KEY, DEFAULT_PAGE)?;
        let take = parse_positive(&descriptor, TAKE_KEY, DEFAULT_TAKE)?;

        if take > MAX_TAKE {
            return Err(PagingError::InvalidRequest(format!(
                "take must not exceed {}",
                MAX_TAKE
            )));
        }

        Ok(Self {
            page,
            take,
            descriptor,
        })
    }
}

fn parse_positive(
    descriptor: &QueryDescriptor,
    key: &str,
    default: u64,
) -> Result<u64, PagingError> {
    let Some(raw) = descriptor.get(key) else {
        return Ok(default);
    };

    match raw.trim().parse::<u64>() {
        Ok(value) if value >= 1 => Ok(value),
        _ => Err(PagingError::InvalidRequest(format!(
            "{} must be a positive integer, got '{}'",
            key, raw
        ))),
    }
}

/// Pagination metadata of a page envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    /// Requested page, echoed verbatim even when past the last page.
    pub current: u64,
    /// Number of pages, 0 when nothing matched.
    pub last: u64,
    /// Total number of matching rows.
    pub total: u64,
    /// Page size.
    pub take: u64,
}

impl PageInfo {
    pub fn new(current: u64, take: u64, total: u64) -> Self {
        Self {
            current,
            last: last_page(total, take),
            total,
            take,
        }
    }
}

/// Number of rows to skip before the first row of `page`.
pub fn skip_for(page: u64, take: u64) -> u64 {
    page.saturating_sub(1).saturating_mul(take)
}

/// Number of pages needed to hold `total` rows, 0 when there are none.
pub fn last_page(total: u64, take: u64) -> u64 {
    if total == 0 || take == 0 {
        return 0;
    }
    total.div_ceil(take)
}

/// Uniform envelope returned by every paged query.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub info: PageInfo,
}

impl<T> Page<T> {
    /// Converts every item while keeping the pagination metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            data: self.data.into_iter().map(f).collect(),
            info: self.info,
        }
    }

    /// Converts the page into its API representation.
    pub fn into_dto<D>(self, f: impl FnMut(T) -> D) -> PageDto<D> {
        let page = self.map(f);

        PageDto {
            data: page.data,
            info: crate::model::paging::PageInfoDto {
                current: page.info.current,
                last: page.info.last,
                total: page.info.total,
                take: page.info.take,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn computes_last_page() {
        assert_eq!(last_page(21, 10), 3);
        assert_eq!(last_page(20, 10), 2);
        assert_eq!(last_page(1, 10), 1);
        assert_eq!(last_page(0, 10), 0);
    }

    #[test]
    fn last_page_is_zero_only_without_rows() {
        for take in 1..=12 {
            assert_eq!(last_page(0, take), 0);
            for total in 1..=50 {
                let last = last_page(total, take);
                assert!(last >= 1);
                assert!(last * take >= total);
                assert!((last - 1) * take < total);
            }
        }
    }

    #[test]
    fn computes_skip() {
        assert_eq!(skip_for(1, 10), 0);
        assert_eq!(skip_for(2, 10), 10);
        assert_eq!(skip_for(3, 5), 10);
    }

    #[test]
    fn uses_defaults_for_missing_page_and_take() {
        let request = PageRequest::from_descriptor(QueryDescriptor::new()).unwrap();

        assert_eq!(request.page, DEFAULT_PAGE);
        assert_eq!(request.take, DEFAULT_TAKE);
    }

    #[test]
    fn rejects_zero_and_non_numeric_values() {
        for (key, value) in [("page", "0"), ("take", "0"), ("page", "two"), ("take", "-1")] {
            let descriptor = QueryDescriptor::new().with(key, value);
            let result = PageRequest::from_descriptor(descriptor);

            assert!(
                matches!(result, Err(PagingError::InvalidRequest(_))),
                "{}={} should be rejected",
                key,
                value
            );
        }
    }

    #[test]
    fn rejects_take_above_maximum() {
        let descriptor = QueryDescriptor::new().with("take", (MAX_TAKE + 1).to_string());

        assert!(matches!(
            PageRequest::from_descriptor(descriptor),
            Err(PagingError::InvalidRequest(_))
        ));

        let descriptor = QueryDescriptor::new().with("take", MAX_TAKE.to_string());
        assert_eq!(PageRequest::from_descriptor(descriptor).unwrap().take, MAX_TAKE);
    }

    #[test]
    fn exact_filter_wins_over_contains_in_either_order() {
        let like_first = NormalizedFilter::new()
            .contains("name", "hel")
            .exact("name", "hello");
        let where_first = NormalizedFilter::new()
            .exact("name", "hello")
            .contains("name", "hel");

        assert_eq!(like_first, where_first);
        assert_eq!(
            like_first.get("name"),
            Some(&Filter::Exact("hello".to_string()))
        );
    }

    #[test]
    fn only_asc_sorts_ascending() {
        assert_eq!(SortDirection::parse(Some("asc")), SortDirection::Asc);
        assert_eq!(SortDirection::parse(Some("ASC")), SortDirection::Asc);
        assert_eq!(SortDirection::parse(Some("desc")), SortDirection::Desc);
        assert_eq!(SortDirection::parse(Some("sideways")), SortDirection::Desc);
        assert_eq!(SortDirection::parse(None), SortDirection::Desc);
    }
}
