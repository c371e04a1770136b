mod catalog;
mod grocery;
mod market;
mod pricing;
mod scheduler;

pub use catalog::*;
pub use grocery::*;
pub use market::*;
pub use pricing::*;
pub use scheduler::*;
