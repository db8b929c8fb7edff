use std::env;

#[derive(Clone)]
pub struct AppConfig {
    pub sqlite_path: String,
    pub database_url: Option<String>,
    pub jwt_secret: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let sqlite_path = env::var("SQLITE_PATH")
            .unwrap_or_else(|_| "/opt/microblog/data.sqlite".to_string());
        let database_url = env::var("DATABASE_URL").ok();

        let jwt_secret = env::var("JWT_SECRET")
            .unwrap_or_else(|_| "you-will-never-guess".to_string());

        Self {
            sqlite_path,
            database_url,
            jwt_secret,
        }
    }

    pub fn database_url(&self) -> String {
        if let Some(url) = &self.database_url {
            return url.clone();
        }

        let path = self.sqlite_path.trim();
        if path.starts_with("sqlite:") || path.starts_with("file:") {
            return path.to_string();
        }
        format!("sqlite://{}", path)
    }
}
