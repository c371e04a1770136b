mod prices;
mod server;

pub use prices::*;
pub use server::*;
