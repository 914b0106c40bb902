pub mod catalog;
pub mod clock;
pub mod config;
pub mod core;
pub mod render;
pub mod runtime;
pub mod session;
pub mod ui;

pub use crate::core::prelude;
pub use runtime::app::run;
