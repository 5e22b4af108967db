use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError,
    model::topic::{CreateTopicParams, UpdateTopicParams},
    service::topic::TopicService,
};

/// Tests that names are trimmed and must be unique.
///
/// Expected: first create succeeds, duplicate fails with BadRequest
#[tokio::test]
async fn rejects_duplicate_topic_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Topic)
        .with_table(entity::prelude::Log)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = TopicService::new(db);
    let topic = service
        .create(CreateTopicParams {
            name: "  Rust ".to_string(),
            description: String::new(),
        })
        .await?;
    assert_eq!(topic.name, "Rust");

    let result = service
        .create(CreateTopicParams {
            name: "Rust".to_string(),
            description: String::new(),
        })
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let result = service
        .create(CreateTopicParams {
            name: "   ".to_string(),
            description: String::new(),
        })
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that a topic may keep its own name on update but not take another's.
///
/// Expected: Ok for own name, BadRequest for a name held by another topic
#[tokio::test]
async fn update_checks_name_against_other_topics() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Topic)
        .with_table(entity::prelude::Log)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let rust = factory::topic::TopicFactory::new(db).name("Rust").build().await?;
    factory::topic::TopicFactory::new(db).name("Go").build().await?;

    let service = TopicService::new(db);
    let kept = service
        .update(UpdateTopicParams {
            id: rust.id,
            name: "Rust".to_string(),
            description: "Updated".to_string(),
        })
        .await?
        .unwrap();
    assert_eq!(kept.description, "Updated");

    let result = service
        .update(UpdateTopicParams {
            id: rust.id,
            name: "Go".to_string(),
            description: String::new(),
        })
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that deleting a topic writes an audit entry.
///
/// Expected: true and one log row, then false without a new row
#[tokio::test]
async fn delete_writes_audit_entry() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Topic)
        .with_table(entity::prelude::Log)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let topic = factory::create_topic(db).await?;
    let service = TopicService::new(db);

    assert!(service.delete(topic.id).await?);
    assert!(!service.delete(topic.id).await?);

    let logs = entity::prelude::Log::find().all(db).await?;
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].context, "topic");
    assert_eq!(logs[0].level, "info");

    Ok(())
}
