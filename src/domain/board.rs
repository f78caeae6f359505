pub mod commands;
pub mod driver;
pub mod errors;
pub mod value_objects;

pub use commands::*;
pub use driver::*;
pub use errors::*;
pub use value_objects::*;
