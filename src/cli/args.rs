//! Command-line argument parsing.

use std::path::PathBuf;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the game (default)
    Play {
        /// Save directory from `--save-dir`
        save_dir: Option<PathBuf>,
    },
    /// Arguments could not be understood
    Invalid(String),
}

/// Parse command-line arguments, program name first.
///
/// `--version` and `--help` win over anything else on the line.
///
/// # Examples
///
/// ```
/// use dungeon_crawler::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["dungeon-crawler".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut save_dir = None;
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--save-dir" => match args.next() {
                Some(dir) if !dir.starts_with('-') => save_dir = Some(PathBuf::from(dir)),
                _ => return CliCommand::Invalid("--save-dir needs a path".to_string()),
            },
            other => {
                if let Some(dir) = other.strip_prefix("--save-dir=") {
                    save_dir = Some(PathBuf::from(dir));
                } else {
                    return CliCommand::Invalid(format!("unknown argument '{}'", other));
                }
            }
        }
    }
    CliCommand::Play { save_dir }
}
