//! Command-line interface.
//!
//! Parsed before the terminal is touched, so `--version` and `--help` print
//! to a normal terminal:
//!
//! ```ignore
//! use dungeon_crawler::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! if let Some(code) = run_cli_command(&command) {
//!     std::process::exit(code);
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand};
pub use version::{usage, version_line, BIN_NAME, VERSION};

/// Handle commands that do not start the game.
///
/// # Returns
///
/// * `None` - the command is `Play`; continue to the game
/// * `Some(code)` - output was printed; exit with `code`
pub fn run_cli_command(command: &CliCommand) -> Option<i32> {
    match command {
        CliCommand::Version => {
            println!("{}", version_line());
            Some(0)
        }
        CliCommand::Help => {
            print!("{}", usage());
            Some(0)
        }
        CliCommand::Invalid(reason) => {
            eprintln!("error: {}\n\n{}", reason, usage());
            Some(2)
        }
        CliCommand::Play { .. } => None,
    }
}
