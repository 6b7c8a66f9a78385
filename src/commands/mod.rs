mod clap_command;
mod inspect;
mod project;

pub use clap_command::{ClapCommand, Command};
pub use inspect::Inspect;
pub use project::{Project, Unproject};
