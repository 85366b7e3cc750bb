mod blob;
mod sql_value;

pub use blob::*;
pub use sql_value::*;
