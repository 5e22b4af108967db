use super::*;

/// Tests that `where__` and `like__` keys become exact and substring filters.
///
/// Expected: one filter per field with the matching predicate
#[test]
fn parses_where_and_like_keys() {
    let descriptor = QueryDescriptor::new()
        .with("where__name", "hello")
        .with("like__title", "rust");

    let (filter, _) = descriptor::parse(&descriptor, None, "id");

    assert_eq!(filter.len(), 2);
    assert_eq!(filter.get("name"), Some(&Filter::Exact("hello".to_string())));
    assert_eq!(
        filter.get("title"),
        Some(&Filter::Contains("rust".to_string()))
    );
}

/// Tests that reserved, unknown and malformed keys never become filters.
///
/// Expected: empty filter
#[test]
fn skips_reserved_and_malformed_keys() {
    let descriptor = QueryDescriptor::new()
        .with("page", "2")
        .with("take", "5")
        .with("orderby", "name")
        .with("direction", "asc")
        .with("between__age", "1,2")
        .with("where__", "x")
        .with("__name", "x")
        .with("name", "x");

    let (filter, _) = descriptor::parse(&descriptor, None, "id");

    assert!(filter.is_empty());
}

/// Tests that the field keeps everything after the first separator.
///
/// Expected: field name `a__b`
#[test]
fn splits_on_first_separator_only() {
    let descriptor = QueryDescriptor::new().with("where__a__b", "1");

    let (filter, _) = descriptor::parse(&descriptor, None, "id");

    assert_eq!(filter.get("a__b"), Some(&Filter::Exact("1".to_string())));
}

/// Tests that an exact filter wins over a substring filter on the same field.
///
/// Expected: Exact filter kept
#[test]
fn where_wins_over_like_on_same_field() {
    let descriptor = QueryDescriptor::new()
        .with("like__name", "hel")
        .with("where__name", "hello");

    let (filter, _) = descriptor::parse(&descriptor, None, "id");

    assert_eq!(filter.len(), 1);
    assert_eq!(filter.get("name"), Some(&Filter::Exact("hello".to_string())));
}

/// Tests that explicit filters replace the descriptor's filter keys entirely.
///
/// Expected: only the explicit filter, sort still read from the descriptor
#[test]
fn explicit_filters_replace_descriptor_filters() {
    let descriptor = QueryDescriptor::new()
        .with("where__topicId", "99")
        .with("like__title", "rust")
        .with("orderby", "title")
        .with("direction", "asc");
    let explicit = NormalizedFilter::new().exact("topicId", 3);

    let (filter, sort) = descriptor::parse(&descriptor, Some(&explicit), "id");

    assert_eq!(filter, explicit);
    assert_eq!(sort, SortClause::new("title", SortDirection::Asc));
}

/// Tests the fallback sort when `orderby` is missing or blank.
///
/// Expected: fallback field, descending, even if `direction=asc`
#[test]
fn falls_back_to_identity_descending() {
    for descriptor in [
        QueryDescriptor::new(),
        QueryDescriptor::new().with("orderby", "").with("direction", "asc"),
        QueryDescriptor::new().with("orderby", "   "),
    ] {
        let (_, sort) = descriptor::parse(&descriptor, None, "slug");

        assert_eq!(sort, SortClause::new("slug", SortDirection::Desc));
    }
}

/// Tests that only `asc` (case-insensitive) sorts ascending.
///
/// Expected: Asc for `ASC`, Desc for anything else
#[test]
fn direction_defaults_to_descending() {
    let asc = QueryDescriptor::new()
        .with("orderby", "name")
        .with("direction", "ASC");
    let other = QueryDescriptor::new()
        .with("orderby", "name")
        .with("direction", "up");

    assert_eq!(
        descriptor::parse(&asc, None, "id").1.direction,
        SortDirection::Asc
    );
    assert_eq!(
        descriptor::parse(&other, None, "id").1.direction,
        SortDirection::Desc
    );
}
