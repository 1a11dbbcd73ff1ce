pub mod cors;
pub mod request_id;

pub use cors::cors;
pub use request_id::{RequestId, REQUEST_ID_HEADER};
