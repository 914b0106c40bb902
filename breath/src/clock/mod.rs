pub mod frame_clock;
pub mod phase;
pub mod source;

pub use frame_clock::*;
pub use phase::*;
pub use source::*;
