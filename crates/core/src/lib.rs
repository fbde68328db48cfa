//! Domain logic for the HOPS dashboard backend.
//!
//! Everything in this crate is synchronous and free of I/O: the dashboard
//! document model, the import format converter, the import merge policy,
//! the icon matcher and the icon-pack categorizer. Persistence lives in
//! `hops_db`; the HTTP surface lives in `hops_api`.

pub mod config_export;
pub mod converters;
pub mod dashboard;
pub mod error;
pub mod icon_category;
pub mod icon_match;
pub mod icons;
pub mod import_merge;
pub mod types;
