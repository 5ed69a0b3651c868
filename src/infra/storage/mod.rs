//! Storage layer: the `SeaORM` entity for the `contacts` table, the
//! repository implementation, and schema migrations. All database-specific
//! code lives here; the domain layer sees only the repository trait.

pub mod entity;
pub mod mapper;
pub mod migrations;

mod sea_orm_repo;
pub use sea_orm_repo::SeaOrmContactsRepository;
