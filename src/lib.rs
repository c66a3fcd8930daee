pub mod api;
pub mod budget;
pub mod core;
