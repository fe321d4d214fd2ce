// Registry Service Library
// In-memory user registry plus the name formatting and email helpers

pub mod error;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use error::{ServiceError, ServiceResult};
pub use models::UserRecord;
pub use services::UserRegistry;
pub use utils::formatting::{capitalize_first, title_case};
pub use utils::validation::is_valid_email;
