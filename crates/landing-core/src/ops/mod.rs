pub mod feature_ops;
pub mod memory;
pub mod page_ops;
pub mod projection;
pub mod section_ops;
pub mod store;
pub mod theme_ops;

pub use memory::MemoryStore;
pub use store::{ContentStore, StoreResult};
