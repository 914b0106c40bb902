pub mod dashboard;
pub mod layout;
pub mod style;
pub mod visualization;

pub use dashboard::Dashboard;
pub use layout::*;
