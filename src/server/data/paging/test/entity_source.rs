use chrono::{Duration, Utc};

use super::*;

fn topics() -> Collection<entity::topic::Entity> {
    Collection::new("topics", "id", entity::topic::Column::Id).field(
        "name",
        entity::topic::Column::Name,
        FieldKind::Text,
    )
}

fn posts() -> Collection<entity::post::Entity> {
    use entity::post::Column;

    Collection::new("posts", "id", Column::Id)
        .field("title", Column::Title, FieldKind::Text)
        .field("published", Column::Published, FieldKind::Boolean)
        .field("topicId", Column::TopicId, FieldKind::Integer)
        .field("createdAt", Column::CreatedAt, FieldKind::Timestamp)
}

fn request(page: u64, take: u64, descriptor: QueryDescriptor) -> PageRequest {
    let mut request = PageRequest::new(page, take);
    request.descriptor = descriptor;
    request
}

/// Tests the third page of 21 rows against a real database.
///
/// With the default sort (id descending) the only row on page 3 is the first one inserted.
///
/// Expected: one row, total 21, last page 3
#[tokio::test]
async fn pages_through_twenty_one_rows() -> Result<(), PagingError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Topic)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut created = Vec::new();
    for n in 1..=21 {
        let topic = factory::topic::TopicFactory::new(db)
            .name(format!("Topic {:02}", n))
            .build()
            .await?;
        created.push(topic);
    }

    let collection = topics();
    let source = EntitySource::new(db, &collection, Models);
    let page = get_paged_results(&source, &request(3, 10, QueryDescriptor::new()), None).await?;

    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].id, created[0].id);
    assert_eq!(page.info.current, 3);
    assert_eq!(page.info.last, 3);
    assert_eq!(page.info.total, 21);
    assert_eq!(page.info.take, 10);

    Ok(())
}

/// Tests that the count honours the filter while the page honours skip and take.
///
/// Expected: total counts all matches, data holds only the requested window
#[tokio::test]
async fn counts_filtered_rows_independent_of_window() -> Result<(), PagingError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Topic)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for n in 1..=5 {
        factory::topic::TopicFactory::new(db)
            .name(format!("Rust {}", n))
            .build()
            .await?;
    }
    factory::topic::TopicFactory::new(db)
        .name("Go tips")
        .build()
        .await?;

    let collection = topics();
    let source = EntitySource::new(db, &collection, Models);
    let descriptor = QueryDescriptor::new()
        .with("like__name", "Rust")
        .with("orderby", "name")
        .with("direction", "asc");
    let page = get_paged_results(&source, &request(2, 2, descriptor), None).await?;

    let names: Vec<_> = page.data.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Rust 3", "Rust 4"]);
    assert_eq!(page.info.total, 5);
    assert_eq!(page.info.last, 3);

    Ok(())
}

/// Tests combined exact filters on boolean and integer fields.
///
/// Expected: only published posts of the chosen topic
#[tokio::test]
async fn combines_typed_filters() -> Result<(), PagingError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let rust = factory::create_topic(db).await?;
    let go = factory::create_topic(db).await?;

    let wanted = factory::post::PostFactory::new(db, author.id)
        .topic_id(rust.id)
        .published(true)
        .build()
        .await?;
    factory::post::PostFactory::new(db, author.id)
        .topic_id(rust.id)
        .published(false)
        .build()
        .await?;
    factory::post::PostFactory::new(db, author.id)
        .topic_id(go.id)
        .published(true)
        .build()
        .await?;

    let collection = posts();
    let source = EntitySource::new(db, &collection, Models);
    let descriptor = QueryDescriptor::new()
        .with("where__published", "true")
        .with("where__topicId", rust.id.to_string());
    let page = get_paged_results(&source, &request(1, 10, descriptor), None).await?;

    assert_eq!(page.info.total, 1);
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].id, wanted.id);

    Ok(())
}

/// Tests sorting by a timestamp field in both directions.
///
/// Expected: oldest first with `asc`, newest first without a direction
#[tokio::test]
async fn sorts_by_timestamp() -> Result<(), PagingError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let now = Utc::now();
    let old = factory::post::PostFactory::new(db, author.id)
        .created_at(now - Duration::days(2))
        .build()
        .await?;
    let new = factory::post::PostFactory::new(db, author.id)
        .created_at(now)
        .build()
        .await?;
    let middle = factory::post::PostFactory::new(db, author.id)
        .created_at(now - Duration::days(1))
        .build()
        .await?;

    let collection = posts();
    let source = EntitySource::new(db, &collection, Models);

    let ascending = QueryDescriptor::new()
        .with("orderby", "createdAt")
        .with("direction", "asc");
    let page = get_paged_results(&source, &request(1, 10, ascending), None).await?;
    let ids: Vec<_> = page.data.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![old.id, middle.id, new.id]);

    let descending = QueryDescriptor::new().with("orderby", "createdAt");
    let page = get_paged_results(&source, &request(1, 10, descending), None).await?;
    let ids: Vec<_> = page.data.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![new.id, middle.id, old.id]);

    Ok(())
}

/// Tests that schema violations are rejected before touching storage.
///
/// Expected: Err(PagingError::UnknownFilterField) and Err(PagingError::UnknownSortField)
#[tokio::test]
async fn rejects_fields_outside_schema() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Topic)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let collection = topics();
    let source = EntitySource::new(db, &collection, Models);

    let filter = QueryDescriptor::new().with("where__description", "x");
    let result = get_paged_results(&source, &request(1, 10, filter), None).await;
    assert!(matches!(result, Err(PagingError::UnknownFilterField { .. })));

    let sort = QueryDescriptor::new().with("orderby", "description");
    let result = get_paged_results(&source, &request(1, 10, sort), None).await;
    assert!(matches!(result, Err(PagingError::UnknownSortField { .. })));
}

/// Tests that the JSON projection returns one object per row.
///
/// Expected: objects keyed by column name
#[tokio::test]
async fn projects_rows_as_json() -> Result<(), PagingError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Topic)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let topic = factory::topic::TopicFactory::new(db)
        .name("Databases")
        .build()
        .await?;

    let collection = topics();
    let source = EntitySource::new(db, &collection, Json);
    let page = get_paged_results(&source, &request(1, 10, QueryDescriptor::new()), None).await?;

    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0]["id"], serde_json::json!(topic.id));
    assert_eq!(page.data[0]["name"], serde_json::json!("Databases"));

    Ok(())
}

/// Tests page numbers whose offset does not fit a signed 64-bit integer.
///
/// Expected: empty data with the requested page echoed and the real total
#[tokio::test]
async fn pages_far_past_the_end_are_empty() -> Result<(), PagingError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Topic)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_topic(db).await?;

    let collection = topics();
    let source = EntitySource::new(db, &collection, Models);

    for (page, take) in [
        ("18446744073709551615", "10"),
        ("92233720368547759", "100"),
        ("100000000000000000", "10"),
    ] {
        let descriptor = QueryDescriptor::new().with("page", page).with("take", take);
        let request = PageRequest::from_descriptor(descriptor)?;

        let result = get_paged_results(&source, &request, None).await?;

        assert!(result.data.is_empty(), "page {} take {}", page, take);
        assert_eq!(result.info.current.to_string(), page);
        assert_eq!(result.info.total, 1);
        assert_eq!(result.info.last, 1);
    }

    Ok(())
}

/// Tests that `like` matches `%`, `_` and `\` literally.
///
/// Expected: only rows containing the exact characters
#[tokio::test]
async fn like_treats_wildcards_literally() -> Result<(), PagingError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Topic)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["abc", "100% sure", "snake_case", "C:\\temp", "ABC upper"] {
        factory::topic::TopicFactory::new(db).name(name).build().await?;
    }

    let collection = topics();
    let source = EntitySource::new(db, &collection, Models);

    for (needle, expected) in [
        ("%", vec!["100% sure"]),
        ("_", vec!["snake_case"]),
        ("\\", vec!["C:\\temp"]),
        ("0% s", vec!["100% sure"]),
        ("e_c", vec!["snake_case"]),
        ("b", vec!["ABC upper", "abc"]),
    ] {
        let descriptor = QueryDescriptor::new()
            .with("like__name", needle)
            .with("orderby", "name")
            .with("direction", "asc");
        let page = get_paged_results(&source, &request(1, 10, descriptor), None).await?;

        let names: Vec<_> = page.data.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, expected, "like__name={}", needle);
        assert_eq!(page.info.total, expected.len() as u64);
    }

    Ok(())
}
