mod schema;
mod settings;
mod storage;

pub use schema::SchemaManager;
pub use settings::{Backend, Database, Logger, Server, Settings};
pub use storage::Storage;
