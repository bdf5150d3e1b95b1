use clap::{Parser, Subcommand};
use snipzapp::model::SnippetId;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "snipz",
    bin_name = "snipz",
    version,
    disable_help_subcommand = true
)]
#[command(about = "A personal library of code snippets", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding snippets.json (overrides config and SNIPZ_DATA_DIR)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List snippets
    #[command(alias = "ls", display_order = 1)]
    List {
        /// Only snippets whose title or code contains this text (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,

        /// Only snippets carrying this exact tag
        #[arg(short, long)]
        tag: Option<String>,
    },

    /// Show one snippet
    #[command(alias = "v", display_order = 2)]
    Show { id: SnippetId },

    /// Create a snippet
    #[command(alias = "n", display_order = 3)]
    Create {
        title: String,

        /// Code (otherwise read from stdin when piped, or opened in $EDITOR)
        #[arg(short, long)]
        code: Option<String>,

        /// Tags, as a JSON array ('["rust","cli"]') or comma separated (rust,cli)
        #[arg(long)]
        tags: Option<String>,
    },

    /// Replace a snippet's code
    #[command(alias = "e", display_order = 4)]
    Edit {
        id: SnippetId,

        /// New code (otherwise read from stdin when piped, or opened in $EDITOR)
        #[arg(short, long)]
        code: Option<String>,
    },

    /// Delete a snippet
    #[command(alias = "rm", display_order = 5)]
    Delete {
        id: SnippetId,

        /// Don't ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Copy a snippet's code to the clipboard
    #[command(alias = "cp", display_order = 6)]
    Copy { id: SnippetId },

    /// List every tag in use
    #[command(display_order = 7)]
    Tags,

    /// Replace all snippets with the sample set
    #[command(display_order = 8)]
    Seed,
}
