pub mod batch;
pub mod env;
pub mod error;
pub mod physics;
pub mod reward;

pub use batch::*;
pub use env::*;
pub use error::*;
pub use physics::*;
