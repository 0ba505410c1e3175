pub mod hub;

pub use hub::{ConnectedClient, NotificationEvent, NotificationHub};
