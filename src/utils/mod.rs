pub mod object_id;

pub use object_id::{generate_object_id, is_valid_object_id, validate_object_id};
