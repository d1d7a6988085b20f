pub mod constants;
pub mod flags;
pub mod formatting;
pub mod renderer;
pub mod structures;
