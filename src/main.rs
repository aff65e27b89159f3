#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    studio_backend::run().await;
}
