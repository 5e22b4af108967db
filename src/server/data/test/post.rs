use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::post::PostRepository,
    error::paging::PagingError,
    model::{
        paging::{NormalizedFilter, PageRequest, QueryDescriptor},
        post::{CreatePostParams, PostContent, UpdatePostParams},
    },
};

fn content(slug: &str) -> PostContent {
    PostContent {
        title: "Hello".to_string(),
        slug: slug.to_string(),
        body: "World".to_string(),
        published: true,
        topic_id: None,
        series_id: None,
    }
}

/// Tests that created posts come back with topic and series names.
///
/// Expected: Post with resolved topic and series references
#[tokio::test]
async fn creates_post_with_refs() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let topic = factory::topic::TopicFactory::new(db)
        .name("Rust")
        .build()
        .await?;
    let series = factory::series::SeriesFactory::new(db)
        .name("Async in depth")
        .build()
        .await?;

    let post = PostRepository::new(db)
        .create(CreatePostParams {
            author_id: author.id,
            content: PostContent {
                topic_id: Some(topic.id),
                series_id: Some(series.id),
                ..content("hello")
            },
        })
        .await?;

    assert_eq!(post.author_id, author.id);
    assert_eq!(post.topic.as_ref().map(|t| t.name.as_str()), Some("Rust"));
    assert_eq!(
        post.series.as_ref().map(|s| s.name.as_str()),
        Some("Async in depth")
    );

    Ok(())
}

/// Tests finding posts by id and slug.
///
/// Expected: Some for existing, None for missing
#[tokio::test]
async fn finds_post() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, topic, post) = factory::helpers::create_post_with_dependencies(db).await?;
    let repo = PostRepository::new(db);

    let found = repo.find_by_id(post.id).await?.unwrap();
    assert_eq!(found.topic.map(|t| t.id), Some(topic.id));
    assert!(found.series.is_none());

    assert_eq!(repo.find_id_by_slug(&post.slug).await?, Some(post.id));
    assert_eq!(repo.find_id_by_slug("missing").await?, None);
    assert!(repo.find_by_id(post.id + 100).await?.is_none());

    Ok(())
}

/// Tests updating post content and detaching its topic.
///
/// Expected: new content, no topic, later update timestamp
#[tokio::test]
async fn updates_post() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, post) = factory::helpers::create_post_with_dependencies(db).await?;
    let repo = PostRepository::new(db);

    let updated = repo
        .update(UpdatePostParams {
            id: post.id,
            content: PostContent {
                title: "Changed".to_string(),
                ..content("changed")
            },
        })
        .await?
        .unwrap();

    assert_eq!(updated.title, "Changed");
    assert_eq!(updated.slug, "changed");
    assert!(updated.topic.is_none());
    assert!(updated.updated_at >= post.updated_at);

    Ok(())
}

/// Tests that deleting a topic detaches its posts instead of deleting them.
///
/// Expected: post still exists without a topic
#[tokio::test]
async fn topic_delete_detaches_posts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, topic, post) = factory::helpers::create_post_with_dependencies(db).await?;

    crate::server::data::topic::TopicRepository::new(db)
        .delete(topic.id)
        .await?;

    let found = PostRepository::new(db).find_by_id(post.id).await?.unwrap();
    assert!(found.topic.is_none());

    Ok(())
}

/// Tests listing posts pinned to one topic through an explicit filter.
///
/// Caller-supplied filter keys are ignored when explicit filters are given.
///
/// Expected: only the topic's posts, each with the topic name resolved
#[tokio::test]
async fn lists_posts_by_topic() -> Result<(), PagingError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let rust = factory::topic::TopicFactory::new(db)
        .name("Rust")
        .build()
        .await?;
    let go = factory::create_topic(db).await?;

    for _ in 0..3 {
        factory::post::PostFactory::new(db, author.id)
            .topic_id(rust.id)
            .build()
            .await?;
    }
    factory::post::PostFactory::new(db, author.id)
        .topic_id(go.id)
        .build()
        .await?;

    let descriptor = QueryDescriptor::new().with("where__topicId", go.id.to_string());
    let request = PageRequest::from_descriptor(descriptor)?;
    let explicit = NormalizedFilter::new().exact("topicId", rust.id);

    let page = PostRepository::new(db)
        .get_paged(&request, Some(&explicit))
        .await?;

    assert_eq!(page.info.total, 3);
    assert!(page
        .data
        .iter()
        .all(|p| p.topic.as_ref().map(|t| t.name.as_str()) == Some("Rust")));

    Ok(())
}
