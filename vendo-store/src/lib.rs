pub mod app_config;
pub mod collection;
pub mod database;
pub mod order_repo;

pub use collection::{DocumentCollection, MemoryCollection, PgCollection};
pub use database::DbClient;
pub use order_repo::DocumentOrderRepository;
