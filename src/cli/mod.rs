mod args;
mod new;
mod prompt;
mod serve;
pub mod tui;

pub use args::{Args, Command, NewArgs};
pub use new::{default_output, run_new};
pub use serve::{router, run_serve};
