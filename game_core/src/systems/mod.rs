pub mod ai;
pub mod collision;
pub mod imbalance;
pub mod input;
pub mod movement;
pub mod scoring;

pub use ai::*;
pub use collision::*;
pub use imbalance::*;
pub use input::*;
pub use movement::*;
pub use scoring::*;
