pub mod case;
pub mod lines;

pub use case::{camel_to_snake, snake_to_camel};
pub use lines::{ensure_newlines, RunIdentification};
