use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError,
    model::{
        paging::{PageRequest, QueryDescriptor},
        post::{CreatePostParams, PostContent, UpdatePostParams},
    },
    service::post::PostService,
};

fn content(slug: &str) -> PostContent {
    PostContent {
        title: "Title".to_string(),
        slug: slug.to_string(),
        body: "Body".to_string(),
        published: true,
        topic_id: None,
        series_id: None,
    }
}

/// Tests validation of title, slug and references on create.
///
/// Expected: BadRequest for empty title, empty slug, taken slug and unknown topic/series
#[tokio::test]
async fn create_validates_content() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .with_table(entity::prelude::Log)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    factory::post::PostFactory::new(db, author.id)
        .slug("taken")
        .build()
        .await?;

    let service = PostService::new(db);
    let invalid = [
        PostContent {
            title: " ".to_string(),
            ..content("a")
        },
        content(""),
        content("taken"),
        PostContent {
            topic_id: Some(999),
            ..content("b")
        },
        PostContent {
            series_id: Some(999),
            ..content("c")
        },
    ];

    for content in invalid {
        let result = service
            .create(CreatePostParams {
                author_id: author.id,
                content,
            })
            .await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    let post = service
        .create(CreatePostParams {
            author_id: author.id,
            content: content(" fresh "),
        })
        .await?;
    assert_eq!(post.slug, "fresh");

    Ok(())
}

/// Tests that a post keeps its own slug on update.
///
/// Expected: Ok(Some(Post)) with the new title
#[tokio::test]
async fn update_allows_own_slug() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .with_table(entity::prelude::Log)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let post = factory::post::PostFactory::new(db, author.id)
        .slug("mine")
        .build()
        .await?;

    let updated = PostService::new(db)
        .update(UpdatePostParams {
            id: post.id,
            content: PostContent {
                title: "Renamed".to_string(),
                ..content("mine")
            },
        })
        .await?
        .unwrap();

    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.slug, "mine");

    Ok(())
}

/// Tests that the topic listing ignores caller filters on the topic.
///
/// Expected: only posts of the requested topic, even with `where__topicId` pointing elsewhere
#[tokio::test]
async fn lists_posts_by_topic() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .with_table(entity::prelude::Log)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let rust = factory::create_topic(db).await?;
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

    let request = PageRequest::from_descriptor(
        QueryDescriptor::new().with("where__topicId", go.id.to_string()),
    )?;
    let page = PostService::new(db)
        .get_paged_by_topic(rust.id, &request)
        .await?;

    assert_eq!(page.info.total, 3);
    assert!(page
        .data
        .iter()
        .all(|post| post.topic.as_ref().map(|t| t.id) == Some(rust.id)));

    Ok(())
}

/// Tests listing by a topic or series that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn listing_by_missing_parent_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .with_table(entity::prelude::Log)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = PostService::new(db);
    let request = PageRequest::new(1, 10);

    assert!(matches!(
        service.get_paged_by_topic(42, &request).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.get_paged_by_series(42, &request).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
