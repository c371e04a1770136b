mod clock;
mod command;
pub mod mealplan;
pub mod recipe;
mod storage;

pub use clock::*;
pub use command::*;
pub use storage::*;
