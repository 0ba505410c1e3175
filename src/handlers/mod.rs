pub mod booking;
pub mod events;
pub mod payment;
pub mod restaurant;

pub use booking::booking_config;
pub use events::events_config;
pub use payment::payment_config;
pub use restaurant::restaurant_config;
