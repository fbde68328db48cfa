//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod config_repo;
pub mod icon_category_repo;
pub mod icon_repo;

pub use config_repo::ConfigRepo;
pub use icon_category_repo::IconCategoryRepo;
pub use icon_repo::IconRepo;
