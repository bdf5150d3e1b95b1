//! System clipboard, through the platform's command-line tools.

use snipzapp::error::{Result, SnipzError};
use std::io::Write;
use std::process::{Command, Stdio};

type ClipboardTool = (&'static str, &'static [&'static str]);

#[cfg(target_os = "macos")]
const TOOLS: &[ClipboardTool] = &[("pbcopy", &[])];

#[cfg(target_os = "linux")]
const TOOLS: &[ClipboardTool] = &[
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

#[cfg(target_os = "windows")]
const TOOLS: &[ClipboardTool] = &[("clip", &[])];

#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
const TOOLS: &[ClipboardTool] = &[];

/// Copies `text` with the first tool that can be spawned.
/// - macOS: pbcopy
/// - Linux: xclip, then xsel
/// - Windows: clip.exe
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut last_spawn_error = None;

    for (program, args) in TOOLS {
        match Command::new(program)
            .args(*args)
            .stdin(Stdio::piped())
            .spawn()
        {
            Ok(child) => return feed(program, child, text),
            Err(e) => {
                tracing::debug!(program, error = %e, "clipboard tool unavailable");
                last_spawn_error = Some(e);
            }
        }
    }

    Err(SnipzError::Api(match last_spawn_error {
        Some(e) => format!("No clipboard tool available ({}). {}", e, install_hint()),
        None => "Clipboard not supported on this platform".to_string(),
    }))
}

fn feed(program: &str, mut child: std::process::Child, text: &str) -> Result<()> {
    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| SnipzError::Api(format!("Failed to write to {}: {}", program, e)))?;
    }

    let status = child
        .wait()
        .map_err(|e| SnipzError::Api(format!("Failed to wait for {}: {}", program, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(SnipzError::Api(format!("{} exited with error", program)))
    }
}

fn install_hint() -> &'static str {
    if cfg!(target_os = "linux") {
        "Install xclip or xsel."
    } else {
        ""
    }
}
