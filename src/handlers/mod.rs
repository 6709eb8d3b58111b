//! Concrete handler implementations

pub mod console;
pub mod file;

pub use console::ConsoleHandler;
pub use file::FileHandler;
