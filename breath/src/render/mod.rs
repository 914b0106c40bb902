pub mod modulation;
pub mod motif;
pub mod motifs;
pub mod params;
pub mod primitive;
pub mod renderer;
pub mod shapes;
pub mod surface;
pub mod trail;

pub use modulation::*;
pub use motif::*;
pub use params::*;
pub use primitive::*;
pub use renderer::*;
pub use surface::*;
pub use trail::*;
