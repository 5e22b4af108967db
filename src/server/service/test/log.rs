use chrono::{Duration, Utc};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError,
    model::{
        log::LogLevel,
        paging::{PageRequest, QueryDescriptor},
    },
    service::log::LogService,
};

/// Tests writing an entry and reading it back through the listing.
///
/// Expected: entry stored with its level and context
#[tokio::test]
async fn writes_and_lists_entries() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Log)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = LogService::new(db);
    service.write(LogLevel::Warn, "post", "careful").await?;
    service.write(LogLevel::Info, "topic", "fine").await?;

    let request =
        PageRequest::from_descriptor(QueryDescriptor::new().with("where__level", "warn"))?;
    let page = service.get_paged(&request).await?;

    assert_eq!(page.info.total, 1);
    assert_eq!(page.data[0].level, LogLevel::Warn);
    assert_eq!(page.data[0].context, "post");
    assert_eq!(page.data[0].message, "careful");

    Ok(())
}

/// Tests that purging removes only entries past the retention window.
///
/// Expected: old entry deleted, recent entry kept
#[tokio::test]
async fn purges_expired_entries() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Log)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::log::LogFactory::new(db)
        .created_at(Utc::now() - Duration::days(31))
        .build()
        .await?;
    let recent = factory::log::LogFactory::new(db)
        .created_at(Utc::now() - Duration::days(29))
        .build()
        .await?;

    let deleted = LogService::new(db).purge_expired(30).await?;
    assert_eq!(deleted, 1);

    let remaining = entity::prelude::Log::find().all(db).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, recent.id);

    Ok(())
}

/// Tests that an unknown stored level surfaces as an internal error.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn unknown_stored_level_is_internal_error() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Log)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::log::LogFactory::new(db).level("verbose").build().await?;

    let result = LogService::new(db).get_paged(&PageRequest::new(1, 10)).await;
    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
