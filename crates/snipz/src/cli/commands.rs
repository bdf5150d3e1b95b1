//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Decides exit codes
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: shell arguments to typed commands via clap
//! 2. **Context Setup**: configuration, logging, and the API over the data directory
//! 3. **Dispatch**: one handler per command
//! 4. **Output**: strings from `render.rs`, printed here
//! 5. **Errors**: `Err` bubbles to `main`, which prints `Error: ...` and exits 1

use super::logging;
use super::render;
use super::setup::{Cli, Commands};
use crate::{clipboard, editor};
use chrono::Utc;
use clap::Parser;
use snipzapp::api::SnipzApi;
use snipzapp::commands::helpers::check_title;
use snipzapp::commands::ActionOutcome;
use snipzapp::config::SnipzConfig;
use snipzapp::error::{Result, SnipzError};
use snipzapp::init::initialize;
use snipzapp::model::SnippetId;
use snipzapp::store::fs::FileStore;
use snipzapp::tags;
use snipzapp::view::{DeleteRequest, Interaction};
use std::io::{self, BufRead, IsTerminal, Read, Write};
use std::process::ExitCode;

type Api = SnipzApi<FileStore>;

pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = SnipzConfig::load()?;
    logging::init(cli.verbose, &config.log_level);

    let mut ctx = initialize(&config, cli.data_dir.as_deref())?;
    let command = cli.command.unwrap_or(Commands::List {
        search: None,
        tag: None,
    });
    tracing::debug!(?command, data_dir = %ctx.data_dir.display(), "dispatching");

    dispatch(&mut ctx.api, command)
}

fn dispatch(api: &mut Api, command: Commands) -> Result<ExitCode> {
    match command {
        Commands::List { search, tag } => handle_list(api, search, tag),
        Commands::Show { id } => handle_show(api, id),
        Commands::Create { title, code, tags } => {
            handle_create(api, &title, code, tags.as_deref())
        }
        Commands::Edit { id, code } => handle_edit(api, id, code),
        Commands::Delete { id, yes } => handle_delete(api, id, yes),
        Commands::Copy { id } => handle_copy(api, id),
        Commands::Tags => handle_tags(api),
        Commands::Seed => handle_seed(api),
    }
}

fn handle_list(api: &Api, search: Option<String>, tag: Option<String>) -> Result<ExitCode> {
    let mut view = api.list_view()?;
    view.set_search_text(search.unwrap_or_default());
    view.set_tag_filter(tag);
    print!("{}", render::render_list(&view, Utc::now()));
    Ok(ExitCode::SUCCESS)
}

fn handle_show(api: &Api, id: SnippetId) -> Result<ExitCode> {
    let snippet = api.get_snippet(id).map_err(not_found_message)?;
    print!("{}", render::render_snippet(&snippet, Utc::now()));
    Ok(ExitCode::SUCCESS)
}

fn handle_create(
    api: &mut Api,
    title: &str,
    code: Option<String>,
    tags_arg: Option<&str>,
) -> Result<ExitCode> {
    // Reject a bad title before asking for code
    if let Some(message) = check_title(title) {
        return Err(SnipzError::Api(message));
    }
    let code = read_code(code, "")?;
    let tags_raw = tags_arg.map(tags_transport);

    match api.create_snippet(title, &code, tags_raw.as_deref()) {
        ActionOutcome::Success(snippet) => {
            println!(
                "{}",
                render::success(&format!("Created snippet {}: {}", snippet.id, snippet.title))
            );
            Ok(ExitCode::SUCCESS)
        }
        ActionOutcome::Failure(message) => Err(SnipzError::Api(message)),
    }
}

fn handle_edit(api: &mut Api, id: SnippetId, code: Option<String>) -> Result<ExitCode> {
    let code = match code {
        Some(code) => code,
        None => {
            // Prefill the editor with what is there now
            let current = api.get_snippet(id).map_err(not_found_message)?;
            read_code(None, &current.code)?
        }
    };

    match api.save_snippet(id, &code) {
        ActionOutcome::Success(snippet) => {
            println!(
                "{}",
                render::success(&format!("Saved snippet {}: {}", snippet.id, snippet.title))
            );
            Ok(ExitCode::SUCCESS)
        }
        ActionOutcome::Failure(message) => Err(SnipzError::Api(message)),
    }
}

fn handle_delete(api: &mut Api, id: SnippetId, assume_yes: bool) -> Result<ExitCode> {
    let mut view = api.list_view()?;
    let mut prompt = TerminalPrompt { assume_yes };

    match view.request_delete(id, &mut prompt, api) {
        DeleteRequest::Deleted => {
            println!("{}", render::success(&format!("Deleted snippet {}", id)));
            Ok(ExitCode::SUCCESS)
        }
        DeleteRequest::Declined => {
            println!("{}", render::warning("Delete cancelled"));
            Ok(ExitCode::SUCCESS)
        }
        // A single process never has a delete in flight
        DeleteRequest::AlreadyDeleting => Ok(ExitCode::SUCCESS),
        // The notice was already shown
        DeleteRequest::Failed(_) => Ok(ExitCode::FAILURE),
    }
}

fn handle_copy(api: &Api, id: SnippetId) -> Result<ExitCode> {
    let snippet = api.get_snippet(id).map_err(not_found_message)?;
    match clipboard::copy_to_clipboard(&snippet.code) {
        Ok(()) => {
            println!(
                "{}",
                render::success(&format!("Copied code of snippet {} to clipboard", id))
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("{}", render::error(&format!("Failed to copy: {}", e)));
            Ok(ExitCode::FAILURE)
        }
    }
}

fn handle_tags(api: &Api) -> Result<ExitCode> {
    let view = api.list_view()?;
    print!("{}", render::render_tags(&view));
    Ok(ExitCode::SUCCESS)
}

fn handle_seed(api: &mut Api) -> Result<ExitCode> {
    let report = api.seed()?;
    println!(
        "{}",
        render::success(&format!(
            "Seeded {} snippets (removed {})",
            report.created.len(),
            report.removed
        ))
    );
    Ok(ExitCode::SUCCESS)
}

/// Confirmation and notices on the terminal.
struct TerminalPrompt {
    assume_yes: bool,
}

impl Interaction for TerminalPrompt {
    fn confirm(&mut self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        eprint!("{} [y/N] ", prompt);
        let _ = io::stderr().flush();

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => is_yes(&answer),
            Err(_) => false,
        }
    }

    fn notify(&mut self, message: &str) {
        eprintln!("{}", render::error(message));
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Code from the flag, else piped stdin, else the editor prefilled with `initial`.
fn read_code(flag: Option<String>, initial: &str) -> Result<String> {
    if let Some(code) = flag {
        return Ok(code);
    }
    let stdin = io::stdin();
    if !stdin.is_terminal() {
        let mut buffer = String::new();
        stdin.lock().read_to_string(&mut buffer)?;
        return Ok(buffer);
    }
    editor::edit_text(initial)
}

/// `--tags` takes either the JSON transport form or a comma separated list.
fn tags_transport(arg: &str) -> String {
    if arg.trim_start().starts_with('[') {
        arg.to_string()
    } else {
        let list: Vec<String> = arg.split(',').map(str::to_string).collect();
        tags::encode(&list)
    }
}

fn not_found_message(err: SnipzError) -> SnipzError {
    match err {
        SnipzError::SnippetNotFound(id) => SnipzError::Api(format!("Snippet {} not found", id)),
        other => other,
    }
}
