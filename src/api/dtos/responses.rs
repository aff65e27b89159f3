use crate::domain::models::{auth::AdminProfile, booking::Booking, image::StoredImage};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SessionToken {
    pub access_token: String,
}

#[derive(Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub user: AdminProfile,
    pub session: SessionToken,
}

#[derive(Serialize, Deserialize)]
pub struct BookingsResponse {
    pub success: bool,
    pub bookings: Vec<Booking>,
}

#[derive(Serialize, Deserialize)]
pub struct ConfirmBookingResponse {
    pub success: bool,
    pub booking: Booking,
}

#[derive(Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

#[derive(Serialize, Deserialize)]
pub struct PaymentIntentResponse {
    #[serde(rename = "clientSecret")]
    pub client_secret: String,
}

#[derive(Serialize, Deserialize)]
pub struct BookingCompleteResponse {
    pub success: bool,
    #[serde(rename = "bookingId")]
    pub booking_id: String,
}

#[derive(Serialize, Deserialize)]
pub struct UploadImageResponse {
    pub success: bool,
    pub path: String,
    pub url: String,
}

#[derive(Serialize, Deserialize)]
pub struct ImagesResponse {
    pub success: bool,
    pub images: Vec<StoredImage>,
}

#[derive(Serialize, Deserialize)]
pub struct PhotosResponse {
    pub success: bool,
    pub photos: Vec<StoredImage>,
}

#[derive(Serialize, Deserialize)]
pub struct MovePhotoResponse {
    pub success: bool,
    #[serde(rename = "newPath")]
    pub new_path: String,
    pub url: String,
}
