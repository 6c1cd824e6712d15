use std::path::PathBuf;

use clap::Parser;

use crate::record::FileMoveLog;
use crate::terminal::SessionOptions;

/// Move record written next to the working directory unless overridden.
pub const DEFAULT_RECORD_PATH: &str = "chess_record.txt";

/// Environment variable holding the `env_logger` filter.
pub const LOG_ENV: &str = "CHESS_LOG";

/// Default log filter; quiet enough not to interleave with the board.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, Parser)]
#[command(
    name = "offset-chess",
    version,
    about = "Two-player chess on one terminal, one fixed step per move"
)]
pub struct Cli {
    /// File that receives one line per completed move
    #[arg(long, value_name = "PATH", default_value = DEFAULT_RECORD_PATH)]
    pub record: PathBuf,

    /// Keep earlier output on screen instead of clearing it between turns
    #[arg(long)]
    pub no_clear: bool,
}

impl Cli {
    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            clear_screen: !self.no_clear,
        }
    }

    pub fn move_log(&self) -> FileMoveLog {
        FileMoveLog::new(&self.record)
    }
}
