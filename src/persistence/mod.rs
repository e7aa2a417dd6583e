mod reader;
mod real;
mod writer;

pub use reader::{load_model, read_model};
pub use real::Real;
pub use writer::{save_model, write_model};
