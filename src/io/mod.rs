pub mod input;

pub use input::{InputHandler, LineSource};
