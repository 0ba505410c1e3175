use crate::error::{AppError, AppResult};
use crate::models::{
    Booking, BookingResponse, BookingWithRestaurant, CreateBookingRequest, RestaurantResponse,
};
use crate::utils::{generate_object_id, validate_object_id};
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

#[derive(Clone)]
pub struct BookingService {
    pool: SqlitePool,
}

/// 预订与餐厅联查的扁平行
#[derive(Debug, FromRow)]
struct BookingRestaurantRow {
    pub id: String,
    pub user_id: String,
    pub date: String,
    pub time: String,
    pub seats: i64,
    pub amount_paid: i64,
    pub confirmation_code: String,
    pub created_at: DateTime<Utc>,
    pub restaurant_id: String,
    pub restaurant_name: String,
    pub restaurant_location: String,
    pub restaurant_cuisine: String,
    pub restaurant_seats_total: i64,
    pub restaurant_created_at: DateTime<Utc>,
}

impl From<BookingRestaurantRow> for BookingWithRestaurant {
    fn from(row: BookingRestaurantRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            restaurant: RestaurantResponse {
                id: row.restaurant_id,
                name: row.restaurant_name,
                location: row.restaurant_location,
                cuisine: row.restaurant_cuisine,
                seats_total: row.restaurant_seats_total,
                created_at: row.restaurant_created_at,
            },
            date: row.date,
            time: row.time,
            seats: row.seats,
            amount_paid: row.amount_paid,
            confirmation_code: row.confirmation_code,
            created_at: row.created_at,
        }
    }
}

impl BookingService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// 创建预订：校验、检查引用存在、落库并返回持久化实体
    pub async fn create_booking(
        &self,
        request: CreateBookingRequest,
    ) -> AppResult<BookingResponse> {
        request.validate()?;

        let user_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE id = ?")
            .bind(&request.user_id)
            .fetch_one(&self.pool)
            .await?;
        if user_count == 0 {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        let restaurant_count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM restaurants WHERE id = ?")
                .bind(&request.restaurant_id)
                .fetch_one(&self.pool)
                .await?;
        if restaurant_count == 0 {
            return Err(AppError::NotFound("Restaurant not found".to_string()));
        }

        let booking_id = generate_object_id();

        sqlx::query(
            r#"
            INSERT INTO bookings (
                id, user_id, restaurant_id, date, time, seats, amount_paid, confirmation_code
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&booking_id)
        .bind(&request.user_id)
        .bind(&request.restaurant_id)
        .bind(&request.date)
        .bind(&request.time)
        .bind(request.seats)
        .bind(request.amount_paid)
        .bind(&request.confirmation_code)
        .execute(&self.pool)
        .await?;

        // 回读落库行，返回包含生成 ID 与 created_at 的实体
        let booking = sqlx::query_as::<_, Booking>(
            r#"
            SELECT id, user_id, restaurant_id, date, time, seats,
                   amount_paid, confirmation_code, created_at
            FROM bookings
            WHERE id = ?
            "#,
        )
        .bind(&booking_id)
        .fetch_one(&self.pool)
        .await?;

        log::info!(
            "Booking {} created for user {} at restaurant {}",
            booking.id,
            booking.user_id,
            booking.restaurant_id
        );

        Ok(BookingResponse::from(booking))
    }

    /// 按插入顺序列出用户预订，餐厅对象展开
    pub async fn list_bookings_for_user(
        &self,
        user_id: &str,
    ) -> AppResult<Vec<BookingWithRestaurant>> {
        validate_object_id(user_id)?;

        let rows = sqlx::query_as::<_, BookingRestaurantRow>(
            r#"
            SELECT
                b.id, b.user_id, b.date, b.time, b.seats,
                b.amount_paid, b.confirmation_code, b.created_at,
                r.id AS restaurant_id,
                r.name AS restaurant_name,
                r.location AS restaurant_location,
                r.cuisine AS restaurant_cuisine,
                r.seats_total AS restaurant_seats_total,
                r.created_at AS restaurant_created_at
            FROM bookings b
            JOIN restaurants r ON r.id = b.restaurant_id
            WHERE b.user_id = ?
            ORDER BY b.rowid
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(BookingWithRestaurant::from).collect())
    }

    /// 按插入顺序列出用户预订，不展开餐厅
    pub async fn list_raw_bookings_for_user(
        &self,
        user_id: &str,
    ) -> AppResult<Vec<BookingResponse>> {
        validate_object_id(user_id)?;

        let bookings = sqlx::query_as::<_, Booking>(
            r#"
            SELECT id, user_id, restaurant_id, date, time, seats,
                   amount_paid, confirmation_code, created_at
            FROM bookings
            WHERE user_id = ?
            ORDER BY rowid
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(bookings.into_iter().map(BookingResponse::from).collect())
    }
}
