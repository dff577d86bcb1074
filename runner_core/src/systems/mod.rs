pub mod collision;
pub mod physics;
pub mod scoring;
pub mod scroll;
pub mod spawn;

pub use collision::*;
pub use physics::*;
pub use scoring::*;
pub use scroll::*;
pub use spawn::*;
