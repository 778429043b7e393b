pub mod request;
pub mod response;

pub use request::{GenerateForm, GenerateRequest};
pub use response::GenerateResponse;
