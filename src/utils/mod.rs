pub mod config;
pub mod diagnostics;
pub mod errors;
pub mod string_utils;

pub use config::*;
pub use diagnostics::*;
pub use errors::*;
