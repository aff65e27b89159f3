use studio_backend::{
    api::router::create_router,
    config::Config,
    domain::models::image::{ImageCategory, StoredImage, PLACEHOLDER},
    domain::ports::{ImageStore, PaymentGateway, PaymentIntentParams},
    error::AppError,
    infra::repositories::{
        sqlite_booking_repo::SqliteBookingRepo,
        sqlite_session_repo::SqliteSessionRepo,
    },
    state::AppState,
};
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request},
    Router,
};
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;
use uuid::Uuid;

pub const ADMIN_EMAIL: &str = "admin@studio.test";
pub const ADMIN_PASSWORD: &str = "correct-horse";

pub struct MockPaymentGateway {
    pub fail: bool,
    counter: AtomicUsize,
    pub calls: Mutex<Vec<PaymentIntentParams>>,
}

impl MockPaymentGateway {
    pub fn new(fail: bool) -> Self {
        Self {
            fail,
            counter: AtomicUsize::new(0),
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl PaymentGateway for MockPaymentGateway {
    async fn create_payment_intent(&self, params: &PaymentIntentParams) -> Result<String, AppError> {
        self.calls.lock().unwrap().push(params.clone());

        if self.fail {
            return Err(AppError::Payment("Your card was declined.".to_string()));
        }

        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        Ok(format!("pi_test_secret_{}", n))
    }
}

pub struct InMemoryImageStore {
    pub objects: Mutex<HashMap<String, Vec<u8>>>,
}

impl InMemoryImageStore {
    pub fn new() -> Self {
        Self {
            objects: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl ImageStore for InMemoryImageStore {
    async fn put(&self, path: &str, bytes: &[u8]) -> Result<(), AppError> {
        self.objects.lock().unwrap().insert(path.to_string(), bytes.to_vec());
        Ok(())
    }

    async fn get(&self, path: &str) -> Result<Vec<u8>, AppError> {
        self.objects
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("object not found: {}", path)))
    }

    async fn exists(&self, path: &str) -> Result<bool, AppError> {
        Ok(self.objects.lock().unwrap().contains_key(path))
    }

    async fn delete(&self, path: &str) -> Result<(), AppError> {
        self.objects
            .lock()
            .unwrap()
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("object not found: {}", path)))
    }

    async fn list(&self, category: ImageCategory) -> Result<Vec<StoredImage>, AppError> {
        let prefix = format!("{}/", category);
        let objects = self.objects.lock().unwrap();

        let mut images: Vec<StoredImage> = objects
            .iter()
            .filter(|(path, _)| path.starts_with(&prefix))
            .map(|(path, bytes)| {
                let name = path[prefix.len()..].to_string();
                StoredImage {
                    name,
                    path: path.clone(),
                    category,
                    url: self.public_url(path),
                    size: bytes.len() as u64,
                    created_at: None,
                }
            })
            .filter(|image| image.name != PLACEHOLDER)
            .collect();

        images.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(images)
    }

    fn public_url(&self, path: &str) -> String {
        format!("https://cdn.test/images/{}", path)
    }
}

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
    pub payment: Option<Arc<MockPaymentGateway>>,
    pub store: Arc<InMemoryImageStore>,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::build(Some(Arc::new(MockPaymentGateway::new(false)))).await
    }

    #[allow(dead_code)]
    pub async fn with_failing_payment() -> Self {
        Self::build(Some(Arc::new(MockPaymentGateway::new(true)))).await
    }

    #[allow(dead_code)]
    pub async fn without_payment() -> Self {
        Self::build(None).await
    }

    async fn build(payment: Option<Arc<MockPaymentGateway>>) -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let salt = SaltString::generate(&mut OsRng);
        let admin_password_hash = Argon2::default()
            .hash_password(ADMIN_PASSWORD.as_bytes(), &salt)
            .expect("Failed to hash test password")
            .to_string();

        let config = Config {
            database_url: db_url,
            port: 0,
            frontend_origin: "http://localhost:5173".to_string(),
            admin_email: ADMIN_EMAIL.to_string(),
            admin_password_hash,
            stripe_secret_key: None,
            storage_url: None,
            storage_service_key: None,
            storage_root: "./storage/images".to_string(),
            public_image_base: "https://cdn.test/images".to_string(),
        };

        let store = Arc::new(InMemoryImageStore::new());

        let state = Arc::new(AppState {
            config,
            booking_repo: Arc::new(SqliteBookingRepo::new(pool.clone())),
            session_repo: Arc::new(SqliteSessionRepo::new(pool.clone())),
            image_store: store.clone(),
            payment: payment.clone().map(|gateway| gateway as Arc<dyn PaymentGateway>),
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
            payment,
            store,
        }
    }

    /// Logs in with the seeded admin credentials and returns the bearer token.
    pub async fn login(&self) -> String {
        let payload = serde_json::json!({
            "email": ADMIN_EMAIL,
            "password": ADMIN_PASSWORD,
        });

        let response = self.router.clone().oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/admin/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap()
        ).await.unwrap();

        if !response.status().is_success() {
            panic!("Login failed in test helper: status {}", response.status());
        }

        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body_json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

        body_json["session"]["access_token"]
            .as_str()
            .expect("No access token in login response")
            .to_string()
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}
