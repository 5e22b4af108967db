use std::sync::LazyLock;

use super::*;

static TOPICS: LazyLock<Collection<entity::topic::Entity>> = LazyLock::new(|| {
    Collection::new("topics", "id", entity::topic::Column::Id).field(
        "name",
        entity::topic::Column::Name,
        FieldKind::Text,
    )
});

static LOGS: LazyLock<Collection<entity::log::Entity>> = LazyLock::new(|| {
    Collection::new("logs", "id", entity::log::Column::Id).field(
        "level",
        entity::log::Column::Level,
        FieldKind::Text,
    )
});

fn registry() -> CollectionRegistry {
    CollectionRegistry::new().register(&*TOPICS).register(&*LOGS)
}

/// Tests that registered names are listed in order.
///
/// Expected: ["logs", "topics"]
#[test]
fn lists_registered_names() {
    assert_eq!(registry().names(), vec!["logs", "topics"]);
}

/// Tests browsing a collection by name with descriptor filters.
///
/// Expected: JSON rows of the matching entries only
#[tokio::test]
async fn browses_collection_by_name() -> Result<(), PagingError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Log)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::log::LogFactory::new(db).level("info").build().await?;
    factory::log::LogFactory::new(db).level("error").build().await?;
    factory::log::LogFactory::new(db).level("error").build().await?;

    let descriptor = QueryDescriptor::new().with("where__level", "error");
    let request = PageRequest::from_descriptor(descriptor)?;
    let page = registry().browse(db, "logs", &request).await?;

    assert_eq!(page.info.total, 2);
    assert!(page
        .data
        .iter()
        .all(|row| row["level"] == serde_json::json!("error")));

    Ok(())
}

/// Tests that an unregistered name is reported as unknown.
///
/// Expected: Err(PagingError::UnknownCollection)
#[tokio::test]
async fn rejects_unknown_collection() {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = registry()
        .browse(db, "passwords", &PageRequest::new(1, 10))
        .await;

    assert!(matches!(
        result,
        Err(PagingError::UnknownCollection(ref name)) if name == "passwords"
    ));
}
