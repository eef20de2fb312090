pub mod ad_repository;
pub mod admin_repository;
pub mod config;
pub mod database;

pub use ad_repository::AdRepository;
pub use admin_repository::AdminRepository;
pub use config::DatabaseConfig;
pub use database::Database;
