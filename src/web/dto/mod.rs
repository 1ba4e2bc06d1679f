//! DTOs for the Letterbox Web API.

mod request;
mod response;
mod validation;

pub use request::CreateLetterRequest;
pub use response::{CreateLetterResponse, DispatchResponse};
pub use validation::is_valid_email;
