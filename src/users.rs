use chrono::Utc;
use log::{debug, error};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};

use crate::avatar;
use crate::entity::user;
use crate::error::AppError;
use crate::password::PasswordHasher;

/// Creates a user with a freshly hashed password. The uniqueness
/// validators run before this in the normal flow; the unique indexes on
/// username and email are the safety net when a concurrent signup wins
/// the race, surfacing here as `Conflict`.
pub async fn create_user(
    db: &DatabaseConnection,
    hasher: &dyn PasswordHasher,
    username: &str,
    email: &str,
    password: &str,
) -> Result<user::Model, AppError> {
    let password_hash = hasher.hash(password)?;

    let user_model = user::ActiveModel {
        username: Set(username.to_string()),
        email: Set(email.to_string()),
        password_hash: Set(password_hash),
        last_seen: Set(Some(Utc::now())),
        ..Default::default()
    };

    match user_model.insert(db).await {
        Ok(created) => {
            debug!("user created id={}", created.id);
            Ok(created)
        }
        Err(err) => {
            let msg = err.to_string();
            if msg.contains("Duplicate") || msg.contains("UNIQUE") {
                return Err(AppError::conflict("username or email already exists"));
            }
            error!("user insert failed: {}", err);
            Err(AppError::Database(err))
        }
    }
}

pub async fn set_password(
    db: &DatabaseConnection,
    hasher: &dyn PasswordHasher,
    user_id: i32,
    password: &str,
) -> Result<(), AppError> {
    let password_hash = hasher.hash(password)?;
    let active = user::ActiveModel {
        id: Set(user_id),
        password_hash: Set(password_hash),
        ..Default::default()
    };
    active.update(db).await.map_err(map_update_err)?;
    Ok(())
}

pub fn avatar_url(user: &user::Model, size: u32) -> String {
    avatar::avatar_url(&user.email, size)
}

pub fn check_password(
    hasher: &dyn PasswordHasher,
    user: &user::Model,
    password: &str,
) -> Result<bool, AppError> {
    hasher.verify(password, &user.password_hash)
}

/// Session rehydration hook. Called on every authenticated request by
/// the external session layer, so a stale or invalid id must come back
/// as `None` instead of an error.
pub async fn load_user_by_id(db: &DatabaseConnection, id: i32) -> Option<user::Model> {
    match user::Entity::find_by_id(id).one(db).await {
        Ok(found) => found,
        Err(err) => {
            error!("load_user_by_id failed: {}", err);
            None
        }
    }
}

pub async fn find_by_username(
    db: &DatabaseConnection,
    username: &str,
) -> Result<Option<user::Model>, AppError> {
    let found = user::Entity::find()
        .filter(user::Column::Username.eq(username))
        .one(db)
        .await?;
    Ok(found)
}

pub async fn find_by_email(
    db: &DatabaseConnection,
    email: &str,
) -> Result<Option<user::Model>, AppError> {
    let found = user::Entity::find()
        .filter(user::Column::Email.eq(email))
        .one(db)
        .await?;
    Ok(found)
}

pub async fn update_profile(
    db: &DatabaseConnection,
    user_id: i32,
    username: &str,
    about_me: Option<String>,
) -> Result<user::Model, AppError> {
    let active = user::ActiveModel {
        id: Set(user_id),
        username: Set(username.to_string()),
        about_me: Set(about_me),
        ..Default::default()
    };
    let updated = active.update(db).await.map_err(map_update_err)?;
    Ok(updated)
}

/// Stamps the user as seen now. The web layer calls this once per
/// authenticated request.
pub async fn touch_last_seen(db: &DatabaseConnection, user_id: i32) -> Result<(), AppError> {
    let active = user::ActiveModel {
        id: Set(user_id),
        last_seen: Set(Some(Utc::now())),
        ..Default::default()
    };
    active.update(db).await.map_err(map_update_err)?;
    Ok(())
}

fn map_update_err(err: DbErr) -> AppError {
    if matches!(err, DbErr::RecordNotUpdated) {
        return AppError::NotFound;
    }
    let msg = err.to_string();
    if msg.contains("Duplicate") || msg.contains("UNIQUE") {
        return AppError::conflict("username or email already exists");
    }
    AppError::Database(err)
}
