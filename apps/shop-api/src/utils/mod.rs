pub mod request;
pub mod response;

pub use request::parse_json;
