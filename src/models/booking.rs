use crate::error::{AppError, AppResult};
use crate::models::RestaurantResponse;
use crate::utils::validate_object_id;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, FromRow)]
pub struct Booking {
    pub id: String,
    pub user_id: String,
    pub restaurant_id: String,
    pub date: String,
    pub time: String,
    pub seats: i64,
    pub amount_paid: i64,
    pub confirmation_code: String,
    pub created_at: DateTime<Utc>,
}

/// 创建预订请求，所有字段必填
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub user_id: String,
    pub restaurant_id: String,
    /// 预订日期，格式 YYYY-MM-DD
    pub date: String,
    /// 预订时间，格式 HH:MM
    pub time: String,
    pub seats: i64,
    pub amount_paid: i64,
    pub confirmation_code: String,
}

impl CreateBookingRequest {
    pub fn validate(&self) -> AppResult<()> {
        validate_object_id(&self.user_id)?;
        validate_object_id(&self.restaurant_id)?;

        if NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").is_err() {
            return Err(AppError::ValidationError(format!(
                "Invalid date: {}, expected YYYY-MM-DD",
                self.date
            )));
        }
        if chrono::NaiveTime::parse_from_str(&self.time, "%H:%M").is_err() {
            return Err(AppError::ValidationError(format!(
                "Invalid time: {}, expected HH:MM",
                self.time
            )));
        }
        if self.seats <= 0 {
            return Err(AppError::ValidationError(
                "seats must be a positive integer".to_string(),
            ));
        }
        if self.amount_paid < 0 {
            return Err(AppError::ValidationError(
                "amountPaid must not be negative".to_string(),
            ));
        }
        if self.confirmation_code.trim().is_empty() {
            return Err(AppError::ValidationError(
                "confirmationCode must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub id: String,
    pub user_id: String,
    pub restaurant_id: String,
    pub date: String,
    pub time: String,
    pub seats: i64,
    pub amount_paid: i64,
    pub confirmation_code: String,
    pub created_at: DateTime<Utc>,
}

impl From<Booking> for BookingResponse {
    fn from(b: Booking) -> Self {
        Self {
            id: b.id,
            user_id: b.user_id,
            restaurant_id: b.restaurant_id,
            date: b.date,
            time: b.time,
            seats: b.seats,
            amount_paid: b.amount_paid,
            confirmation_code: b.confirmation_code,
            created_at: b.created_at,
        }
    }
}

/// 预订及其展开的餐厅对象，restaurantId 字段携带完整餐厅
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingWithRestaurant {
    pub id: String,
    pub user_id: String,
    #[serde(rename = "restaurantId")]
    pub restaurant: RestaurantResponse,
    pub date: String,
    pub time: String,
    pub seats: i64,
    pub amount_paid: i64,
    pub confirmation_code: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookingQuery {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}
