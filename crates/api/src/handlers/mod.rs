pub mod config;
pub mod icon_categories;
pub mod icons;
pub mod import;
