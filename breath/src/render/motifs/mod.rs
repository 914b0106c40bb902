mod box_outline;
mod fire;
mod heart;
mod lightning;
mod moon;
mod shield;
mod spiral;
mod wave;

pub use box_outline::BoxOutline;
pub use fire::Fire;
pub use heart::Heart;
pub use lightning::Lightning;
pub use moon::Moon;
pub use shield::Shield;
pub use spiral::Spiral;
pub use wave::Wave;
