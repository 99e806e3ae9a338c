//! CLI argument parsing for the packing checklist.
//!
//! The CLI is thin: it restores the selection, applies at most one change,
//! and hands catalog plus selection to the engine.
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Default catalog location, relative to the working directory.
pub const DEFAULT_CATALOG: &str = "data.json";

/// Root CLI entrypoint.
#[derive(Parser, Debug)]
#[command(
    name = "packlist",
    version,
    about = "Packing checklist driven by trip tags and length",
    after_help = "Commands:\n  show                 Render the checklist for the saved selection\n  tags                 List catalog tags and which are active\n  nights <N>           Set the trip length (0-10, 10 means 10+)\n  tag <ID> [--off]     Activate or deactivate a trip tag\n  check <ID> [--off]   Mark an item as packed or unpacked\n  reset                Forget the saved selection\n\nExamples:\n  packlist --catalog data.json show\n  packlist nights 4\n  packlist tag hiking\n  packlist check socks\n  packlist show --json",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct RootArgs {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every command.
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Catalog JSON with tags, items, and group priorities
    #[arg(long, global = true, value_name = "PATH", default_value = DEFAULT_CATALOG)]
    pub catalog: PathBuf,

    /// Directory holding the saved selection (defaults to $PACKLIST_STATE_DIR
    /// or the user data directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub state_dir: Option<PathBuf>,

    /// Log engine decisions to stderr
    #[arg(long, global = true)]
    pub verbose: bool,
}

/// Checklist commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the checklist for the saved selection
    Show(ShowArgs),
    /// List catalog tags and which are active
    Tags,
    /// Set the number of nights and render
    Nights(NightsArgs),
    /// Activate or deactivate a trip tag and render
    Tag(TagArgs),
    /// Mark an item as packed or unpacked
    Check(CheckArgs),
    /// Forget the saved selection and render the defaults
    Reset(ShowArgs),
}

/// Render options.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Emit machine-readable JSON output
    #[arg(long)]
    pub json: bool,
}

/// Trip length update.
#[derive(Args, Debug)]
pub struct NightsArgs {
    /// Trip length in nights; rounded and clamped to 0-10
    #[arg(value_name = "N", allow_negative_numbers = true)]
    pub nights: f64,

    #[command(flatten)]
    pub show: ShowArgs,
}

/// Tag toggle.
#[derive(Args, Debug)]
pub struct TagArgs {
    /// Tag id as declared in the catalog
    #[arg(value_name = "ID")]
    pub id: String,

    /// Deactivate instead of activate
    #[arg(long)]
    pub off: bool,

    #[command(flatten)]
    pub show: ShowArgs,
}

/// Packed-state toggle.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Item id as declared in the catalog
    #[arg(value_name = "ID")]
    pub id: String,

    /// Mark as not packed
    #[arg(long)]
    pub off: bool,
}
