pub mod app;
pub mod authz;
pub mod config;
pub mod directory;
pub mod errors;
pub mod models;
pub mod navigation;
pub mod session;
pub mod utils;

// Re-export commonly used items for tests
pub use app::{create_portal, Portal};
pub use config::PortalConfig;
pub use directory::Directory;
pub use errors::{AppError, AppResult, LoginError};
pub use models::{Permission, Principal, Role};
pub use session::SessionStore;
