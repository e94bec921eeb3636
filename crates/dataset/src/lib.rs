#![forbid(unsafe_code)]

pub mod builtin;
pub mod json;
pub mod repository;

pub use builtin::builtin;
pub use repository::{CategoryRepository, DatasetError, InMemoryRepository};
