use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::{post::PostRepository, series::SeriesRepository},
    model::series::{CreateSeriesParams, UpdateSeriesParams},
};

/// Tests creating, renaming and reading back a series.
///
/// Expected: the stored series reflects the update
#[tokio::test]
async fn creates_and_updates_series() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Series)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SeriesRepository::new(db);
    let series = repo
        .create(CreateSeriesParams {
            name: "Async in depth".to_string(),
            description: String::new(),
        })
        .await?;

    repo.update(UpdateSeriesParams {
        id: series.id,
        name: "Async deep dive".to_string(),
        description: "Five parts".to_string(),
    })
    .await?
    .unwrap();

    let found = repo.find_by_id(series.id).await?.unwrap();
    assert_eq!(found.name, "Async deep dive");
    assert_eq!(found.description, "Five parts");

    Ok(())
}

/// Tests that deleting a series keeps its posts and clears their reference.
///
/// Expected: post still exists with no series
#[tokio::test]
async fn delete_detaches_posts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let series = factory::create_series(db).await?;
    let post = factory::post::PostFactory::new(db, author.id)
        .series_id(series.id)
        .build()
        .await?;

    assert!(SeriesRepository::new(db).delete(series.id).await?);

    let stored = entity::prelude::Post::find_by_id(post.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.series_id, None);

    let loaded = PostRepository::new(db).find_by_id(post.id).await?.unwrap();
    assert!(loaded.series.is_none());

    Ok(())
}
