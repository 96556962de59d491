pub mod boundary;
pub mod collision;
pub mod input;
pub mod movement;
pub mod physics;

pub use boundary::*;
pub use collision::*;
pub use input::*;
pub use movement::*;
pub use physics::*;
