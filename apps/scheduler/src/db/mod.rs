//! Per-learner SQLite review store.

pub mod error;
pub mod repository;
pub mod schema;
pub mod time_utils;

pub use error::DbError;
pub use repository::{
    IntervalRepository, PlacementRepository, ReviewRepository, SqliteRepository, Store,
    StoreTransaction, WordRepository,
};
