//! Domain services.

pub mod items;
