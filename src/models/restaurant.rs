use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, FromRow)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub location: String,
    pub cuisine: String,
    pub seats_total: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantResponse {
    pub id: String,
    pub name: String,
    pub location: String,
    pub cuisine: String,
    pub seats_total: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Restaurant> for RestaurantResponse {
    fn from(r: Restaurant) -> Self {
        Self {
            id: r.id,
            name: r.name,
            location: r.location,
            cuisine: r.cuisine,
            seats_total: r.seats_total,
            created_at: r.created_at,
        }
    }
}
