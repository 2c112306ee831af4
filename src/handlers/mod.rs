//! Handler implementations

pub mod console;
pub mod file;

pub use console::{ConsoleHandler, ConsoleTarget};
pub use file::{FileHandler, FileMode};

pub use crate::core::Handler;
