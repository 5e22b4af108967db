use super::*;

fn posts() -> Collection<entity::post::Entity> {
    use entity::post::Column;

    Collection::new("posts", "id", Column::Id)
        .field("title", Column::Title, FieldKind::Text)
        .field("published", Column::Published, FieldKind::Boolean)
        .field("topicId", Column::TopicId, FieldKind::Integer)
        .field("createdAt", Column::CreatedAt, FieldKind::Timestamp)
}

/// Tests that the identity field is registered and used as fallback sort.
///
/// Expected: `id` is an integer field and the fallback sort
#[test]
fn registers_identity_field() {
    let collection = posts();

    assert_eq!(collection.fallback_sort(), "id");
    assert_eq!(
        collection.field_spec("id").map(|spec| spec.kind),
        Some(FieldKind::Integer)
    );
}

/// Tests that filters on fields outside the schema are rejected.
///
/// Expected: Err(PagingError::UnknownFilterField)
#[test]
fn rejects_unknown_filter_field() {
    let filter = NormalizedFilter::new().exact("password", "x");

    let result = posts().condition(&filter);

    assert!(matches!(
        result,
        Err(PagingError::UnknownFilterField { ref field, .. }) if field == "password"
    ));
}

/// Tests that substring filters only apply to text fields.
///
/// Expected: Err(PagingError::ContainsOnNonText)
#[test]
fn rejects_contains_on_integer_field() {
    let filter = NormalizedFilter::new().contains("topicId", "1");

    assert!(matches!(
        posts().condition(&filter),
        Err(PagingError::ContainsOnNonText { .. })
    ));
}

/// Tests that values are coerced to the field type.
///
/// Expected: Err(PagingError::InvalidFilterValue) for each malformed value
#[test]
fn rejects_values_of_wrong_type() {
    for (field, value) in [
        ("topicId", "three"),
        ("published", "maybe"),
        ("createdAt", "yesterday"),
    ] {
        let filter = NormalizedFilter::new().exact(field, value);

        assert!(
            matches!(
                posts().condition(&filter),
                Err(PagingError::InvalidFilterValue { .. })
            ),
            "{}={} should be rejected",
            field,
            value
        );
    }
}

/// Tests that well-formed filters on every kind resolve.
///
/// Expected: Ok(Condition)
#[test]
fn accepts_valid_filters() {
    let filter = NormalizedFilter::new()
        .contains("title", "rust")
        .exact("published", "true")
        .exact("topicId", "3")
        .exact("createdAt", "2026-01-02T03:04:05Z");

    assert!(posts().condition(&filter).is_ok());
}

/// Tests boolean coercion spellings.
///
/// Expected: `1`/`true` and `0`/`false` accepted in any case
#[test]
fn coerces_boolean_spellings() {
    for raw in ["true", "TRUE", "1", "false", "0", "False"] {
        assert!(FieldKind::Boolean.coerce("published", raw).is_ok(), "{}", raw);
    }
}

/// Tests that sorting by a field outside the schema is rejected.
///
/// Expected: Err(PagingError::UnknownSortField)
#[test]
fn rejects_unknown_sort_field() {
    let sort = SortClause::new("body", SortDirection::Asc);

    assert!(matches!(
        posts().order(&sort),
        Err(PagingError::UnknownSortField { .. })
    ));
}

/// Tests that a known sort field resolves to its column and order.
///
/// Expected: Ok((Column::Title, Order::Asc))
#[test]
fn resolves_sort_field() {
    let sort = SortClause::new("title", SortDirection::Asc);

    let (column, order) = posts().order(&sort).unwrap();

    assert!(matches!(column, entity::post::Column::Title));
    assert!(matches!(order, sea_orm::sea_query::Order::Asc));
}

/// Tests a collection keyed by a text field.
///
/// Expected: the slug is the fallback sort and accepts substring filters
#[test]
fn supports_text_identity_field() {
    use entity::post::Column;

    let collection = Collection::<entity::post::Entity>::with_identity(
        "posts_by_slug",
        "slug",
        Column::Slug,
        FieldKind::Text,
    );

    assert_eq!(collection.fallback_sort(), "slug");
    assert_eq!(
        collection.field_spec("slug").map(|spec| spec.kind),
        Some(FieldKind::Text)
    );
    assert!(collection
        .condition(&NormalizedFilter::new().contains("slug", "hello"))
        .is_ok());

    let (_, sort) = descriptor::parse(&QueryDescriptor::new(), None, collection.fallback_sort());
    assert!(collection.order(&sort).is_ok());
    assert_eq!(sort, SortClause::new("slug", SortDirection::Desc));
}
