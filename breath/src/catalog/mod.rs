pub mod guide;
pub mod pattern;

pub use guide::*;
pub use pattern::*;
