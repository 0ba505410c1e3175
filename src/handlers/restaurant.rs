use crate::models::*;
use crate::services::RestaurantService;
use actix_web::{HttpResponse, ResponseError, Result, web};

#[utoipa::path(
    get,
    path = "/restaurant/{id}",
    tag = "restaurant",
    params(
        ("id" = String, Path, description = "餐厅 ID（24 位十六进制）")
    ),
    responses(
        (status = 200, description = "餐厅详情", body = RestaurantResponse),
        (status = 400, description = "ID 格式错误"),
        (status = 404, description = "餐厅不存在"),
        (status = 500, description = "存储错误")
    )
)]
pub async fn get_restaurant(
    restaurant_service: web::Data<RestaurantService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let restaurant_id = path.into_inner();

    match restaurant_service.get_restaurant(&restaurant_id).await {
        Ok(restaurant) => Ok(HttpResponse::Ok().json(ApiResponse::success(restaurant))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn restaurant_config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/restaurant").route("/{id}", web::get().to(get_restaurant)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::MIGRATOR;
    use actix_web::{App, test};
    use sqlx::SqlitePool;
    use sqlx::sqlite::SqlitePoolOptions;

    const RESTAURANT_ID: &str = "507f191e810c19729de860ea";

    async fn seeded_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        MIGRATOR.run(&pool).await.unwrap();

        sqlx::query(
            "INSERT INTO restaurants (id, name, location, cuisine, seats_total) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(RESTAURANT_ID)
        .bind("Spice Route")
        .bind("Koramangala, Bengaluru")
        .bind("North Indian")
        .bind(60i64)
        .execute(&pool)
        .await
        .unwrap();

        pool
    }

    #[actix_web::test]
    async fn test_fetch_restaurant_status_codes() {
        let pool = seeded_pool().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(RestaurantService::new(pool)))
                .configure(restaurant_config),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/restaurant/{RESTAURANT_ID}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["name"], "Spice Route");

        let req = test::TestRequest::get()
            .uri("/restaurant/bad-id")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let req = test::TestRequest::get()
            .uri("/restaurant/000000000000000000000000")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }
}
