#![allow(dead_code)]

use microblog_core::config::AppConfig;
use microblog_core::db::connect_db;
use microblog_core::entity::user;
use microblog_core::password::BcryptHasher;
use microblog_core::users;
use sea_orm::DatabaseConnection;

pub fn test_config() -> AppConfig {
    AppConfig {
        sqlite_path: String::new(),
        database_url: Some("sqlite::memory:".to_string()),
        jwt_secret: "test-secret".to_string(),
    }
}

/// Fresh in-memory database with the schema applied.
pub async fn setup_db() -> DatabaseConnection {
    let _ = env_logger::builder().is_test(true).try_init();
    connect_db(&test_config()).await
}

pub fn hasher() -> BcryptHasher {
    // low cost keeps the suite fast
    BcryptHasher { cost: 4 }
}

pub async fn create_user(db: &DatabaseConnection, username: &str, email: &str) -> user::Model {
    users::create_user(db, &hasher(), username, email, "pw1")
        .await
        .expect("create user")
}
