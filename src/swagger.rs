use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;
use crate::models::*;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::booking::create_booking,
        handlers::booking::get_user_bookings,
        handlers::booking::get_raw_bookings,
        handlers::payment::create_payment,
        handlers::restaurant::get_restaurant,
        handlers::events::events,
    ),
    components(
        schemas(
            CreateBookingRequest,
            BookingResponse,
            BookingWithRestaurant,
            BookingQuery,
            RestaurantResponse,
            CreatePaymentOrderRequest,
            PaymentOrder,
            ApiError,
        )
    ),
    tags(
        (name = "booking", description = "Booking API"),
        (name = "restaurant", description = "Restaurant API"),
        (name = "payment", description = "Payment order API"),
        (name = "events", description = "Realtime lifecycle events"),
    ),
    info(
        title = "Dinebook Backend API",
        version = "1.0.0",
        description = "Restaurant booking REST API documentation"
    ),
    servers(
        (url = "/", description = "Local server")
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
    .route(
        "/swagger-ui",
        web::get().to(|| async {
            actix_web::HttpResponse::Found()
                .append_header(("Location", "/swagger-ui/"))
                .finish()
        }),
    );
}
