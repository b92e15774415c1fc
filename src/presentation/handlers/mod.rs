mod health;
mod home;
mod upload;

pub use health::health_handler;
pub use home::home_handler;
pub use upload::{upload_handler, ErrorResponse, UploadResponse};
