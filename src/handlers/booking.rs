use crate::error::AppError;
use crate::models::*;
use crate::services::BookingService;
use actix_web::{HttpResponse, ResponseError, Result, web};

#[utoipa::path(
    post,
    path = "/bookings",
    tag = "booking",
    request_body = CreateBookingRequest,
    responses(
        (status = 201, description = "预订创建成功", body = BookingResponse),
        (status = 400, description = "请求参数错误"),
        (status = 404, description = "用户或餐厅不存在"),
        (status = 500, description = "存储失败")
    )
)]
pub async fn create_booking(
    booking_service: web::Data<BookingService>,
    request: web::Json<CreateBookingRequest>,
) -> Result<HttpResponse> {
    match booking_service.create_booking(request.into_inner()).await {
        Ok(booking) => Ok(HttpResponse::Created().json(ApiResponse::success(booking))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/bookings/{user_id}",
    tag = "booking",
    params(
        ("user_id" = String, Path, description = "用户 ID（24 位十六进制）")
    ),
    responses(
        (status = 200, description = "预订列表，餐厅对象展开；无预订时为空数组"),
        (status = 400, description = "用户 ID 格式错误"),
        (status = 500, description = "存储错误")
    )
)]
pub async fn get_user_bookings(
    booking_service: web::Data<BookingService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let user_id = path.into_inner();

    match booking_service.list_bookings_for_user(&user_id).await {
        Ok(bookings) => Ok(HttpResponse::Ok().json(ApiResponse::success(bookings))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/bookings",
    tag = "booking",
    params(
        ("userId" = String, Query, description = "用户 ID（24 位十六进制）")
    ),
    responses(
        (status = 200, description = "预订列表，不展开餐厅；无预订时为空数组"),
        (status = 400, description = "userId 缺失或格式错误"),
        (status = 500, description = "存储错误")
    )
)]
pub async fn get_raw_bookings(
    booking_service: web::Data<BookingService>,
    query: web::Query<BookingQuery>,
) -> Result<HttpResponse> {
    let Some(user_id) = query.user_id.as_deref() else {
        return Ok(
            AppError::ValidationError("userId query parameter is required".to_string())
                .error_response(),
        );
    };

    match booking_service.list_raw_bookings_for_user(user_id).await {
        Ok(bookings) => Ok(HttpResponse::Ok().json(ApiResponse::success(bookings))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn booking_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/bookings")
            .route("", web::post().to(create_booking))
            .route("", web::get().to(get_raw_bookings))
            .route("/{user_id}", web::get().to(get_user_bookings)),
    );
}
