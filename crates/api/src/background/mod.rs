//! Tasks spawned once at startup.

pub mod icon_pack;
