use crate::domain::ports::{PaymentGateway, PaymentIntentParams};
use crate::error::AppError;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::error;

const STRIPE_API_BASE: &str = "https://api.stripe.com";

pub struct StripeGateway {
    client: Client,
    secret_key: String,
    api_base: String,
}

impl StripeGateway {
    pub fn new(secret_key: String) -> Self {
        Self::with_base(secret_key, STRIPE_API_BASE.to_string())
    }

    pub fn with_base(secret_key: String, api_base: String) -> Self {
        Self {
            client: Client::new(),
            secret_key,
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }
}

#[derive(Deserialize)]
struct IntentResponse {
    client_secret: String,
}

#[async_trait]
impl PaymentGateway for StripeGateway {
    async fn create_payment_intent(&self, params: &PaymentIntentParams) -> Result<String, AppError> {
        // Stripe counts in cents; the rest of the system in whole dollars.
        let amount_cents = params.amount * 100;

        let form = [
            ("amount", amount_cents.to_string()),
            ("currency", "usd".to_string()),
            ("metadata[customer_email]", params.customer_email.clone()),
            ("metadata[customer_name]", params.customer_name.clone()),
            ("metadata[package_name]", params.package_name.clone()),
            ("metadata[total_price]", params.total_price.to_string()),
        ];

        let res = self.client.post(format!("{}/v1/payment_intents", self.api_base))
            .basic_auth(&self.secret_key, None::<&str>)
            .form(&form)
            .send()
            .await
            .map_err(|e| {
                let msg = format!("Stripe connection error: {}", e);
                error!("{}", msg);
                AppError::Payment(msg)
            })?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            let msg = format!("Stripe request failed. Status: {}, Body: {}", status, body);
            error!("{}", msg);
            return Err(AppError::Payment(msg));
        }

        let intent: IntentResponse = res.json()
            .await
            .map_err(|e| AppError::Payment(format!("Stripe response decode error: {}", e)))?;

        Ok(intent.client_secret)
    }
}
