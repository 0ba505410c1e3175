use crate::error::{AppError, AppResult};
use crate::models::{Restaurant, RestaurantResponse};
use crate::utils::validate_object_id;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct RestaurantService {
    pool: SqlitePool,
}

impl RestaurantService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get_restaurant(&self, restaurant_id: &str) -> AppResult<RestaurantResponse> {
        validate_object_id(restaurant_id)?;

        let restaurant = sqlx::query_as::<_, Restaurant>(
            r#"
            SELECT id, name, location, cuisine, seats_total, created_at
            FROM restaurants
            WHERE id = ?
            "#,
        )
        .bind(restaurant_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Restaurant not found".to_string()))?;

        Ok(RestaurantResponse::from(restaurant))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::MIGRATOR;
    use crate::error::AppError;
    use crate::utils::generate_object_id;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        MIGRATOR.run(&pool).await.unwrap();
        pool
    }

    async fn insert_restaurant(pool: &SqlitePool, id: &str, name: &str) {
        sqlx::query(
            "INSERT INTO restaurants (id, name, location, cuisine, seats_total) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(name)
        .bind("Indiranagar, Bengaluru")
        .bind("South Indian")
        .bind(40i64)
        .execute(pool)
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_get_restaurant_by_id() {
        let pool = test_pool().await;
        let service = RestaurantService::new(pool.clone());
        let id = generate_object_id();
        insert_restaurant(&pool, &id, "Dosa Corner").await;

        let restaurant = service.get_restaurant(&id).await.unwrap();
        assert_eq!(restaurant.id, id);
        assert_eq!(restaurant.name, "Dosa Corner");
    }

    #[tokio::test]
    async fn test_malformed_id_rejected_before_lookup() {
        let pool = test_pool().await;
        let service = RestaurantService::new(pool);

        let err = service.get_restaurant("not-hex").await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_unknown_restaurant_is_not_found() {
        let pool = test_pool().await;
        let service = RestaurantService::new(pool);

        let err = service
            .get_restaurant("000000000000000000000000")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
