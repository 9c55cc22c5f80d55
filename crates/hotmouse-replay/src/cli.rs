//! Command-line interface definitions for hotmouse-replay.

use std::path::PathBuf;

use clap::Parser;
use logging::LogArgs;

/// Command-line interface for the `hotmouse-replay` binary.
#[derive(Parser, Debug)]
#[command(
    name = "hotmouse-replay",
    about = "Replay a scripted pointer event stream through hotmouse",
    version
)]
pub struct Cli {
    /// Logging controls shared across hotmouse binaries.
    #[command(flatten)]
    pub log: LogArgs,

    /// Configuration file (.json or .ron). Defaults apply when omitted.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Script of input steps in RON syntax.
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,
}
