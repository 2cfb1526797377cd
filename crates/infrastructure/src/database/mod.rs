mod connection;
pub mod entities;
pub mod sea_orm_repository;
pub mod sqlx_repository;

pub use connection::Database;
pub use sea_orm_repository::SeaOrmRepository;
pub use sqlx_repository::SqlxRepository;
