use crate::domain::catalog::{AddOn, Package};
use crate::domain::wizard::CustomerInfo;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// The wizard's selections as the wire carries them, camelCase keys and all.
#[derive(Serialize, Deserialize, Clone)]
pub struct BookingSnapshot {
    pub package: Package,
    #[serde(rename = "addOns")]
    pub add_ons: Vec<AddOn>,
    #[serde(rename = "customerInfo")]
    pub customer_info: CustomerInfo,
}

#[derive(Serialize, Deserialize)]
pub struct CreatePaymentIntentRequest {
    /// Deposit in whole dollars; the gateway converts to minor units.
    pub amount: i64,
    #[serde(rename = "bookingData")]
    pub booking_data: BookingSnapshot,
    #[serde(rename = "totalPrice")]
    pub total_price: i64,
}

#[derive(Serialize, Deserialize)]
pub struct BookingCompleteRequest {
    #[serde(rename = "bookingData")]
    pub booking_data: BookingSnapshot,
    #[serde(rename = "paymentIntentId")]
    pub payment_intent_id: String,
    #[serde(rename = "totalPrice")]
    pub total_price: i64,
    #[serde(rename = "depositPaid")]
    pub deposit_paid: i64,
}

#[derive(Serialize, Deserialize, Default)]
pub struct BookingListQuery {
    /// "confirmed", "pending" or "all".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(rename = "startDate", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(rename = "endDate", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct UploadImageRequest {
    #[serde(rename = "fileName")]
    pub file_name: String,
    /// Base64 payload, with or without a data-URL prefix.
    #[serde(rename = "fileData")]
    pub file_data: String,
    pub category: String,
}

#[derive(Serialize, Deserialize, Default)]
pub struct PhotoListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct DeletePhotoRequest {
    pub path: String,
}

/// Callers may send either a full destination path or just the target
/// category; an explicit `newPath` wins when both are present.
#[derive(Serialize, Deserialize, Default)]
pub struct MovePhotoRequest {
    #[serde(rename = "oldPath")]
    pub old_path: String,
    #[serde(rename = "newPath", skip_serializing_if = "Option::is_none")]
    pub new_path: Option<String>,
    #[serde(rename = "newCategory", skip_serializing_if = "Option::is_none")]
    pub new_category: Option<String>,
}
