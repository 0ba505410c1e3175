pub mod booking_service;
pub mod payment_service;
pub mod restaurant_service;

pub use booking_service::BookingService;
pub use payment_service::PaymentService;
pub use restaurant_service::RestaurantService;
