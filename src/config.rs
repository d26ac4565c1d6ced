use std::env;

#[derive(Debug, Clone)]
pub struct Settings {
    // App
    pub app_name: String,
    pub app_version: String,
    pub environment: String,
    pub host: String,
    pub port: u16,

    // Gemini
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_timeout: u64,

    // Static assets
    pub static_dir: String,

    // CORS
    pub cors_origins: String,

    // Logging
    pub log_level: String,
    pub log_format: String,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            app_name: env::var("APP_NAME").unwrap_or("HIV Mate API".into()),
            app_version: env::var("APP_VERSION").unwrap_or("1.0.0".into()),
            environment: env::var("ENVIRONMENT").unwrap_or("development".into()),
            host: env::var("HOST").unwrap_or("0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or("3000".into())
                .parse()
                .unwrap_or(3000),

            gemini_api_key: env::var("GEMINI_API_KEY").expect("GEMINI_API_KEY is required"),
            gemini_model: env::var("GEMINI_MODEL").unwrap_or("gemini-2.0-flash".into()),
            gemini_timeout: env::var("GEMINI_TIMEOUT")
                .unwrap_or("30".into())
                .parse()
                .unwrap_or(30),

            static_dir: env::var("STATIC_DIR").unwrap_or("public".into()),

            cors_origins: env::var("CORS_ORIGINS").unwrap_or("*".into()),

            log_level: env::var("LOG_LEVEL").unwrap_or("info".into()),
            log_format: env::var("LOG_FORMAT").unwrap_or("json".into()),
        }
    }

    /// Development mode exposes upstream error detail in 500 bodies.
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    pub fn cors_origins_list(&self) -> Vec<String> {
        if self.cors_origins == "*" {
            return vec!["*".to_string()];
        }
        self.cors_origins
            .split(',')
            .map(|s| s.trim().to_string())
            .collect()
    }
}
