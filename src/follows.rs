use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter, Statement,
};

use crate::db::query_count;
use crate::entity::{follower, user};
use crate::error::AppError;

pub async fn follow(
    db: &DatabaseConnection,
    follower_id: i32,
    followed_id: i32,
) -> Result<(), AppError> {
    if follower_id == followed_id {
        return Err(AppError::param_error("cannot follow yourself"));
    }
    let followed = user::Entity::find_by_id(followed_id).one(db).await?;
    if followed.is_none() {
        return Err(AppError::NotFound);
    }

    // raw insert keeps the composite primary key the single authority
    // on edge uniqueness
    let stmt = Statement::from_sql_and_values(
        db.get_database_backend(),
        "insert into t_follower (follower_id, followed_id) values (?, ?)",
        vec![follower_id.into(), followed_id.into()],
    );
    if let Err(err) = db.execute(stmt).await {
        let msg = err.to_string();
        if msg.contains("Duplicate") || msg.contains("UNIQUE") {
            return Err(AppError::conflict("already following"));
        }
        return Err(AppError::Database(err));
    }
    Ok(())
}

/// Removing an edge that does not exist is a no-op.
pub async fn unfollow(
    db: &DatabaseConnection,
    follower_id: i32,
    followed_id: i32,
) -> Result<(), AppError> {
    follower::Entity::delete_many()
        .filter(follower::Column::FollowerId.eq(follower_id))
        .filter(follower::Column::FollowedId.eq(followed_id))
        .exec(db)
        .await?;
    Ok(())
}

pub async fn is_following(
    db: &DatabaseConnection,
    follower_id: i32,
    followed_id: i32,
) -> Result<bool, AppError> {
    let edge = follower::Entity::find_by_id((follower_id, followed_id))
        .one(db)
        .await?;
    Ok(edge.is_some())
}

/// Users that `user_id` follows, resolved through the indexed edge set.
pub async fn following(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<Vec<user::Model>, AppError> {
    let stmt = Statement::from_sql_and_values(
        db.get_database_backend(),
        "select u.id, u.username, u.email, u.password_hash, u.about_me, u.last_seen \
         from t_user u join t_follower f on f.followed_id = u.id \
         where f.follower_id = ? order by u.username",
        vec![user_id.into()],
    );
    let rows = user::Entity::find().from_raw_sql(stmt).all(db).await?;
    Ok(rows)
}

/// Users that follow `user_id`.
pub async fn followers(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<Vec<user::Model>, AppError> {
    let stmt = Statement::from_sql_and_values(
        db.get_database_backend(),
        "select u.id, u.username, u.email, u.password_hash, u.about_me, u.last_seen \
         from t_user u join t_follower f on f.follower_id = u.id \
         where f.followed_id = ? order by u.username",
        vec![user_id.into()],
    );
    let rows = user::Entity::find().from_raw_sql(stmt).all(db).await?;
    Ok(rows)
}

pub async fn following_count(db: &DatabaseConnection, user_id: i32) -> Result<i64, AppError> {
    query_count(
        db,
        "select count(*) as cnt from t_follower where follower_id = ?",
        vec![user_id.into()],
    )
    .await
}

pub async fn follower_count(db: &DatabaseConnection, user_id: i32) -> Result<i64, AppError> {
    query_count(
        db,
        "select count(*) as cnt from t_follower where followed_id = ?",
        vec![user_id.into()],
    )
    .await
}
