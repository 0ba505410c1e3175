use crate::models::*;
use crate::services::PaymentService;
use actix_web::{HttpResponse, ResponseError, Result, web};

#[utoipa::path(
    post,
    path = "/payment",
    tag = "payment",
    request_body = CreatePaymentOrderRequest,
    responses(
        (status = 200, description = "支付订单创建成功，返回网关订单对象", body = PaymentOrder),
        (status = 400, description = "金额或货币无效"),
        (status = 500, description = "网关错误")
    )
)]
pub async fn create_payment(
    payment_service: web::Data<PaymentService>,
    request: web::Json<CreatePaymentOrderRequest>,
) -> Result<HttpResponse> {
    match payment_service
        .create_payment_order(request.into_inner())
        .await
    {
        Ok(order) => Ok(HttpResponse::Ok().json(ApiResponse::success(order))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn payment_config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/payment").route("", web::post().to(create_payment)));
}
