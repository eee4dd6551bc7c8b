#![forbid(unsafe_code)]

pub mod http;
pub mod repository;
pub mod sqlite;

pub use http::{DEFAULT_API_URL, HttpInitError, HttpRepository};
pub use repository::{
    InMemoryRepository, InMemorySessionStore, SessionStore, Storage, StorageError,
};
pub use sqlite::{SqliteInitError, SqliteSessionStore};
