mod common;

use common::{create_user, setup_db};
use microblog_core::{follows, posts};

#[tokio::test]
async fn test_create_post_sets_owner_and_timestamp() {
    let db = setup_db().await;
    let alice = create_user(&db, "alice", "a@x.com").await;

    let post = posts::create_post(&db, alice.id, "hello world").await.unwrap();
    assert_eq!(post.body, "hello world");
    assert_eq!(post.user_id, alice.id);
    assert!(post.created.is_some());
}

#[tokio::test]
async fn test_posts_by_user_newest_first_with_pagination() {
    let db = setup_db().await;
    let alice = create_user(&db, "alice", "a@x.com").await;
    let bob = create_user(&db, "bob", "b@x.com").await;

    posts::create_post(&db, alice.id, "first").await.unwrap();
    posts::create_post(&db, alice.id, "second").await.unwrap();
    posts::create_post(&db, alice.id, "third").await.unwrap();
    posts::create_post(&db, bob.id, "not alice's").await.unwrap();

    let page = posts::posts_by_user(&db, alice.id, 1, 2).await.unwrap();
    assert_eq!(page.total, 3);
    assert_eq!(page.total_page, 2);
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].body, "third");
    assert_eq!(page.items[1].body, "second");

    let page = posts::posts_by_user(&db, alice.id, 2, 2).await.unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].body, "first");
}

#[tokio::test]
async fn test_feed_aggregates_followed_users_and_self() {
    let db = setup_db().await;
    let alice = create_user(&db, "alice", "a@x.com").await;
    let bob = create_user(&db, "bob", "b@x.com").await;
    let carol = create_user(&db, "carol", "c@x.com").await;

    follows::follow(&db, alice.id, bob.id).await.unwrap();

    posts::create_post(&db, bob.id, "from bob").await.unwrap();
    posts::create_post(&db, carol.id, "from carol").await.unwrap();
    posts::create_post(&db, alice.id, "from alice").await.unwrap();

    let feed = posts::followed_posts(&db, alice.id, 1, 10).await.unwrap();
    let bodies: Vec<_> = feed.items.iter().map(|p| p.body.as_str()).collect();
    assert_eq!(bodies, vec!["from alice", "from bob"]);
    assert_eq!(feed.total, 2);

    // carol follows nobody, sees only her own post
    let feed = posts::followed_posts(&db, carol.id, 1, 10).await.unwrap();
    let bodies: Vec<_> = feed.items.iter().map(|p| p.body.as_str()).collect();
    assert_eq!(bodies, vec!["from carol"]);
}

#[tokio::test]
async fn test_feed_updates_after_unfollow() {
    let db = setup_db().await;
    let alice = create_user(&db, "alice", "a@x.com").await;
    let bob = create_user(&db, "bob", "b@x.com").await;

    follows::follow(&db, alice.id, bob.id).await.unwrap();
    posts::create_post(&db, bob.id, "from bob").await.unwrap();

    let feed = posts::followed_posts(&db, alice.id, 1, 10).await.unwrap();
    assert_eq!(feed.total, 1);

    follows::unfollow(&db, alice.id, bob.id).await.unwrap();
    let feed = posts::followed_posts(&db, alice.id, 1, 10).await.unwrap();
    assert_eq!(feed.total, 0);
    assert_eq!(feed.total_page, 0);
    assert!(feed.items.is_empty());
}
