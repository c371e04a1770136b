mod generator;
mod openai;
mod parse;
mod preferences;
mod prompt;

pub use generator::*;
pub use openai::*;
pub use parse::*;
pub use preferences::*;
pub use prompt::*;
