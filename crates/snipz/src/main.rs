//! # Snipz CLI
//!
//! Snipz ships a terminal client, but the binary is intentionally thin: the CLI
//! lives in `src/cli/`, and this file only invokes `cli::run()` and turns its
//! result into an exit code.
//!
//! ## Workspace Structure
//!
//! - `crates/snipzapp/`: core library with UI-agnostic logic
//! - `crates/snipz/`: this CLI, a client of `snipzapp`
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/snipz/src/cli/)                          │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring and dispatch (commands.rs)                │
//! │  - Terminal rendering with console styles (render.rs)       │
//! │  - Prompts for the list view's delete flow                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/snipzapp/src/api.rs)                     │
//! │  - Dispatches to command modules                            │
//! │  - Turns store faults into generic failure messages         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (crates/snipzapp/src/commands/*)             │
//! │  - Validation, mutations and reads                          │
//! │  - No knowledge of stdout/stderr or process exits           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Testing Approach
//!
//! - **Render functions** take data and return strings, so they are unit
//!   tested without a terminal.
//! - **End to end** (`tests/`): `assert_cmd` runs the binary against a temp
//!   data directory.

mod cli;
mod clipboard;
mod editor;

use std::process::ExitCode;

fn main() -> ExitCode {
    match cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
