//! Entity model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//! - A `Display` impl producing the admin-facing label

pub mod discount;
pub mod order;
pub mod product;
pub mod section;
pub mod status;
