//! Terminal output for the simulator

mod console;

pub use console::Console;
