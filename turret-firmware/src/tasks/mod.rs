//! Embassy tasks

mod console;

pub use console::console_task;
