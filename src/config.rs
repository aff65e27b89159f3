use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub frontend_origin: String,
    pub admin_email: String,
    pub admin_password_hash: String, // Argon2 PHC string
    pub stripe_secret_key: Option<String>,
    pub storage_url: Option<String>,
    pub storage_service_key: Option<String>,
    pub storage_root: String,
    pub public_image_base: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            port: env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().expect("PORT must be a number"),
            frontend_origin: env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:5173".to_string()),
            admin_email: env::var("ADMIN_EMAIL").expect("ADMIN_EMAIL must be set"),
            admin_password_hash: env::var("ADMIN_PASSWORD_HASH").expect("ADMIN_PASSWORD_HASH must be set (Argon2 PHC string)"),
            stripe_secret_key: env::var("STRIPE_SECRET_KEY").ok(),
            storage_url: env::var("STORAGE_URL").ok(),
            storage_service_key: env::var("STORAGE_SERVICE_KEY").ok(),
            storage_root: env::var("STORAGE_ROOT").unwrap_or_else(|_| "./storage/images".to_string()),
            public_image_base: env::var("PUBLIC_IMAGE_BASE").unwrap_or_else(|_| "http://localhost:3000/images".to_string()),
        }
    }
}
