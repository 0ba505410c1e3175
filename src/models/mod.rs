pub mod booking;
pub mod common;
pub mod payment;
pub mod restaurant;

pub use booking::*;
pub use common::*;
pub use payment::*;
pub use restaurant::*;
