//! Version and usage output.

/// The crate version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Binary name used in user-facing output.
pub const BIN_NAME: &str = "dungeon-crawler";

pub fn version_line() -> String {
    format!("{} {}", BIN_NAME, VERSION)
}

pub fn usage() -> String {
    format!(
        "Usage: {bin} [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 --save-dir <PATH>  Directory for save files and the log\n\
         \x20 -V, --version      Print version and exit\n\
         \x20 -h, --help         Print this help and exit\n\
         \n\
         Environment:\n\
         \x20 DUNGEON_SAVE_DIR   Same as --save-dir\n\
         \x20 DUNGEON_TICK_MS    Clock period in milliseconds (default 50)\n\
         \x20 DUNGEON_LOG        Log filter, e.g. debug (falls back to RUST_LOG)\n",
        bin = BIN_NAME
    )
}
