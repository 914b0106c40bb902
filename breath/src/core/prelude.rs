pub use crate::catalog::{BreathPattern, Motif, PhaseTiming, find_pattern, patterns};
pub use crate::clock::{Clock, ClockSource, Phase, PhaseSample, compute_phase, cycle_count};
pub use crate::config::Settings;
pub use crate::core::logging::init_logger;
pub use crate::core::logging::{debug, error, info, trace, warn};
pub use crate::core::util::TWO_PI;
pub use crate::core::util::lerp;
pub use crate::render::{Primitive, Renderer, Surface};
pub use crate::session::{CancelToken, Navigator, Screen, Session};
pub use crate::ternary;
