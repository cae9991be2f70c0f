//! Terminal prompting primitives
//!
//! Every interactive flow runs against a [`Console`], which owns explicit
//! input and output ends instead of reaching for the process terminal.
//! The module is structured in layers:
//! - `console`: the line-oriented endpoint (read a line, write a line,
//!   styled output, clear screen)
//! - `confirm`: yes/no questions
//! - `select`: numbered-menu selection with confirmation
//! - `collect`: repeated list and key/value collection

mod collect;
mod confirm;
mod console;
mod select;

pub use console::Console;
pub use select::is_int;
