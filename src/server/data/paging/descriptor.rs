//! Query descriptor parsing.

use dioxus_logger::tracing;

use crate::server::model::paging::{
    Filter, NormalizedFilter, QueryDescriptor, SortClause, SortDirection, DIRECTION_KEY,
    ORDER_BY_KEY,
};

/// Separator between the operator prefix and the field name of a filter key.
pub const KEY_SEPARATOR: &str = "__";

/// Parses a descriptor into its filter set and sort clause.
///
/// When `explicit_filters` is given it is used as the filter set and every filter key of the
/// descriptor is ignored; callers use this to pin which fields a route can filter on. The
/// sort clause always comes from the descriptor's `orderby`/`direction`, falling back to
/// `fallback_sort` descending when `orderby` is missing or blank.
///
/// Keys that are not `where__<field>` or `like__<field>` are skipped, so reserved and
/// unrelated keys pass through harmlessly. Never fails.
pub fn parse(
    descriptor: &QueryDescriptor,
    explicit_filters: Option<&NormalizedFilter>,
    fallback_sort: &str,
) -> (NormalizedFilter, SortClause) {
    let filter = match explicit_filters {
        Some(filters) => filters.clone(),
        None => parse_filters(descriptor),
    };

    (filter, parse_sort(descriptor, fallback_sort))
}

fn parse_filters(descriptor: &QueryDescriptor) -> NormalizedFilter {
    let mut filter = NormalizedFilter::new();

    for (key, value) in descriptor.iter() {
        let Some((op, field)) = split_key(key) else {
            continue;
        };

        match op {
            "where" => filter.insert(field.to_string(), Filter::Exact(value.to_string())),
            "like" => filter.insert(field.to_string(), Filter::Contains(value.to_string())),
            _ => tracing::debug!("Ignoring filter key '{}' with unknown operator", key),
        }
    }

    filter
}

/// Splits `<op>__<field>` on the first separator, rejecting empty halves.
fn split_key(key: &str) -> Option<(&str, &str)> {
    let (op, field) = key.split_once(KEY_SEPARATOR)?;
    if op.is_empty() || field.is_empty() {
        return None;
    }
    Some((op, field))
}

fn parse_sort(descriptor: &QueryDescriptor, fallback_sort: &str) -> SortClause {
    match descriptor
        .get(ORDER_BY_KEY)
        .map(str::trim)
        .filter(|field| !field.is_empty())
    {
        Some(field) => SortClause::new(
            field,
            SortDirection::parse(descriptor.get(DIRECTION_KEY)),
        ),
        None => SortClause::new(fallback_sort, SortDirection::Desc),
    }
}
