pub mod errors;
pub mod types;

pub use errors::SanitizeError;
pub use types::Color;

pub type Result<T> = std::result::Result<T, SanitizeError>;
