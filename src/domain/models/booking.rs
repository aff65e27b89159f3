use crate::domain::wizard::CustomerInfo;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A persisted booking row. Owned by the database; the application never
/// caches these.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Booking {
    pub id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub booking_date: String,
    pub booking_time: String,
    pub location: String,
    pub package_name: String,
    pub package_price: i64,
    pub add_ons: String, // serialized add-on list, stored as JSON text
    pub total_price: i64,
    pub deposit_paid: i64,
    pub payment_intent_id: String,
    pub confirmed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewBookingParams {
    pub customer: CustomerInfo,
    pub package_name: String,
    pub package_price: i64,
    pub add_ons_json: String,
    pub total_price: i64,
    pub deposit_paid: i64,
    pub payment_intent_id: String,
}

impl Booking {
    pub fn new(params: NewBookingParams) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4().to_string(),
            customer_name: params.customer.name,
            customer_email: params.customer.email,
            customer_phone: params.customer.phone,
            booking_date: params.customer.date,
            booking_time: params.customer.time,
            location: params.customer.location,
            package_name: params.package_name,
            package_price: params.package_price,
            add_ons: params.add_ons_json,
            total_price: params.total_price,
            deposit_paid: params.deposit_paid,
            payment_intent_id: params.payment_intent_id,
            confirmed: false,
            created_at: now,
            updated_at: now,
        }
    }
}
