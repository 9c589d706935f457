//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Write methods run the
//! domain validators from `storedvd-core` before touching the database;
//! the schema's declarative constraints backstop them.

pub mod discount_repo;
pub mod order_repo;
pub mod product_repo;
pub mod section_repo;

pub use discount_repo::DiscountRepo;
pub use order_repo::OrderRepo;
pub use product_repo::ProductRepo;
pub use section_repo::SectionRepo;
