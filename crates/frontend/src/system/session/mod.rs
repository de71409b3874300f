pub mod context;
pub mod session;
pub mod storage;

pub use context::{use_session, SessionContext};
pub use session::{Session, DEFAULT_ADMIN_KEY, DEFAULT_API_BASE};
pub use storage::{KeyValueStore, LocalStore, MemoryStore};
