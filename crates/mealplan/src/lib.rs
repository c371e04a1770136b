mod plan;
mod recipes;
mod store;
mod week;

pub use plan::*;
pub use recipes::*;
pub use store::*;
pub use week::*;
