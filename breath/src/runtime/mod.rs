pub mod app;
pub mod global;
