use chrono::Utc;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, Statement,
};

use crate::db::query_count;
use crate::entity::post;
use crate::error::AppError;

#[derive(Debug)]
pub struct PostPage {
    pub items: Vec<post::Model>,
    pub total: i64,
    pub total_page: i64,
}

pub async fn create_post(
    db: &DatabaseConnection,
    user_id: i32,
    body: &str,
) -> Result<post::Model, AppError> {
    let post_model = post::ActiveModel {
        body: Set(body.to_string()),
        created: Set(Some(Utc::now())),
        user_id: Set(user_id),
        ..Default::default()
    };
    let inserted = post_model.insert(db).await?;
    debug!("post created id={}", inserted.id);
    Ok(inserted)
}

/// A user's own posts, newest first.
pub async fn posts_by_user(
    db: &DatabaseConnection,
    user_id: i32,
    page: i64,
    size: i64,
) -> Result<PostPage, AppError> {
    let page = page.max(1);
    let size = size.max(1);
    let offset = (page - 1) * size;

    let items = post::Entity::find()
        .filter(post::Column::UserId.eq(user_id))
        .order_by_desc(post::Column::Created)
        .order_by_desc(post::Column::Id)
        .limit(size as u64)
        .offset(offset as u64)
        .all(db)
        .await?;

    let total = query_count(
        db,
        "select count(*) as cnt from t_post where user_id = ?",
        vec![user_id.into()],
    )
    .await?;

    Ok(to_page(items, total, size))
}

/// The aggregated feed: posts by the users `user_id` follows plus the
/// user's own, newest first. One query over the indexed edge set.
pub async fn followed_posts(
    db: &DatabaseConnection,
    user_id: i32,
    page: i64,
    size: i64,
) -> Result<PostPage, AppError> {
    let page = page.max(1);
    let size = size.max(1);
    let offset = (page - 1) * size;

    let stmt = Statement::from_sql_and_values(
        db.get_database_backend(),
        "select p.id, p.body, p.created, p.user_id from t_post p \
         where p.user_id = ? \
         or p.user_id in (select followed_id from t_follower where follower_id = ?) \
         order by p.created desc, p.id desc limit ?,?",
        vec![user_id.into(), user_id.into(), offset.into(), size.into()],
    );
    let items = post::Entity::find().from_raw_sql(stmt).all(db).await?;

    let total = query_count(
        db,
        "select count(*) as cnt from t_post where user_id = ? \
         or user_id in (select followed_id from t_follower where follower_id = ?)",
        vec![user_id.into(), user_id.into()],
    )
    .await?;

    Ok(to_page(items, total, size))
}

fn to_page(items: Vec<post::Model>, total: i64, size: i64) -> PostPage {
    let total_page = if total % size == 0 {
        total / size
    } else {
        total / size + 1
    };
    PostPage {
        items,
        total,
        total_page,
    }
}
