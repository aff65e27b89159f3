use crate::domain::{models::booking::Booking, ports::{BookingFilter, BookingRepository}};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

pub struct SqliteBookingRepo {
    pool: SqlitePool,
}

impl SqliteBookingRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for SqliteBookingRepo {
    async fn create(&self, booking: &Booking) -> Result<Booking, AppError> {
        sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings (id, customer_name, customer_email, customer_phone, booking_date, booking_time, location, package_name, package_price, add_ons, total_price, deposit_paid, payment_intent_id, confirmed, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&booking.id).bind(&booking.customer_name).bind(&booking.customer_email).bind(&booking.customer_phone)
            .bind(&booking.booking_date).bind(&booking.booking_time).bind(&booking.location)
            .bind(&booking.package_name).bind(booking.package_price).bind(&booking.add_ons)
            .bind(booking.total_price).bind(booking.deposit_paid).bind(&booking.payment_intent_id)
            .bind(booking.confirmed).bind(booking.created_at).bind(booking.updated_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn list(&self, filter: &BookingFilter) -> Result<Vec<Booking>, AppError> {
        let mut query = QueryBuilder::<Sqlite>::new("SELECT * FROM bookings WHERE 1=1");
        if let Some(confirmed) = filter.confirmed {
            query.push(" AND confirmed = ").push_bind(confirmed);
        }
        if let Some(ref start) = filter.start_date {
            query.push(" AND booking_date >= ").push_bind(start);
        }
        if let Some(ref end) = filter.end_date {
            query.push(" AND booking_date <= ").push_bind(end);
        }
        query.push(" ORDER BY created_at DESC");

        query.build_query_as::<Booking>().fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn confirm(&self, id: &str) -> Result<Booking, AppError> {
        sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET confirmed = TRUE, updated_at = ? WHERE id = ? RETURNING *"
        )
            .bind(Utc::now()).bind(id)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound("Booking not found".into()))
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = ?").bind(id).execute(&self.pool).await.map_err(AppError::Database)?;
        if result.rows_affected() == 0 { return Err(AppError::NotFound("Booking not found".into())); }
        Ok(())
    }
}
