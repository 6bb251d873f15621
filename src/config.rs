use dotenvy::dotenv;
use serde::Deserialize;
use std::env;

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    pub db_url: Option<String>,
    pub app_name: String,
    pub keycloak_ui_id: String,
    pub keycloak_url: String,
    pub keycloak_realm: String,
    pub deployment: String,
    pub admin_role: String,
    pub export_dir: String,
    pub upload_dir: String,
    pub tests_running: bool,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok(); // Load from .env file if available
        let db_url = env::var("DB_URL").ok().or_else(|| {
            Some(format!(
                "{}://{}:{}@{}:{}/{}",
                env::var("DB_PREFIX").unwrap_or_else(|_| "postgresql".to_string()),
                env::var("DB_USER").expect("DB_USER must be set"),
                env::var("DB_PASSWORD").expect("DB_PASSWORD must be set"),
                env::var("DB_HOST").expect("DB_HOST must be set"),
                env::var("DB_PORT").unwrap_or_else(|_| "5432".to_string()),
                env::var("DB_NAME").expect("DB_NAME must be set"),
            ))
        });

        Config {
            app_name: env::var("APP_NAME").unwrap_or_else(|_| "soil-portal-api".to_string()),
            keycloak_ui_id: env::var("KEYCLOAK_UI_ID").unwrap_or_default(),
            keycloak_url: env::var("KEYCLOAK_URL").unwrap_or_default(),
            keycloak_realm: env::var("KEYCLOAK_REALM").unwrap_or_default(),
            deployment: env::var("DEPLOYMENT")
                .expect("DEPLOYMENT must be set, this can be local, dev, stage, or prod"),
            admin_role: "portal-admin".to_string(), // Admin role name in Keycloak
            export_dir: env::var("EXPORT_DIR").unwrap_or_else(|_| "portal_exports".to_string()),
            upload_dir: env::var("UPLOAD_DIR").unwrap_or_else(|_| "portal_uploads".to_string()),
            tests_running: false,
            db_url,
        }
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        // Every test run gets its own export/upload directories so parallel
        // tests cannot observe each other's files
        let scratch = tempfile::tempdir()
            .expect("Failed to create test scratch directory")
            .keep();

        Config {
            app_name: "soil-portal-api-test".to_string(),
            keycloak_ui_id: "test-ui".to_string(),
            keycloak_url: String::new(), // Disable Keycloak for tests
            keycloak_realm: "test-realm".to_string(),
            deployment: "test".to_string(),
            admin_role: "portal-admin".to_string(),
            export_dir: scratch.join("exports").to_string_lossy().to_string(),
            upload_dir: scratch.join("uploads").to_string_lossy().to_string(),
            tests_running: true,
            db_url: None,
        }
    }
}
