//! Binary plumbing for the geowkx geometry codecs: the error type, the byte-order aware
//! value reader and the byte/value containers handed over by a database driver.

pub mod error;
pub mod io;
pub mod types;

pub use error::*;
pub use types::*;
