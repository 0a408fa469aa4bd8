mod in_memory;
mod json_file;
mod r#trait;

pub use in_memory::InMemoryStateStore;
pub use json_file::{DEFAULT_FILE_NAME, JsonFileStore};
pub use r#trait::{StateStore, StorageError};
