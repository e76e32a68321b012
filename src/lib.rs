pub mod api;
pub mod catalog;
pub mod configuration;
pub mod constants;
pub mod context;
pub mod errors;
pub mod handlers;
pub mod http;
pub mod interchange;
pub mod messages;
pub mod session;
pub mod storage;
pub mod version;
pub mod view;

#[cfg(test)]
pub mod test_helpers;

pub use configuration::Configuration;
pub use context::Context;
pub use handlers::Command;
pub use self::http::{IsahcTransport, Transport};
pub use session::{Session, SessionStore};
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use view::{AuthUi, Card, Level, Message, Page, ProductForm, View};
