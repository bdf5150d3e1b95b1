//! Terminal styles.
//!
//! Code asks for styles by meaning (a title, a tag, a timestamp) rather than by
//! color, so the palette can change in one place. `console` drops the escape
//! codes on its own when the target stream is not a terminal or `NO_COLOR` is
//! set. Styles printed to stderr check stderr.

use console::Style;
use once_cell::sync::Lazy;

pub static TITLE: Lazy<Style> = Lazy::new(|| Style::new().bold());
pub static ID: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub static TAG: Lazy<Style> = Lazy::new(|| Style::new().cyan());
pub static ACTIVE_TAG: Lazy<Style> = Lazy::new(|| Style::new().black().on_cyan());
pub static MUTED: Lazy<Style> = Lazy::new(|| Style::new().dim());
pub static TIME: Lazy<Style> = Lazy::new(|| Style::new().dim().italic());
pub static SUCCESS: Lazy<Style> = Lazy::new(|| Style::new().green());
pub static WARNING: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub static ERROR: Lazy<Style> = Lazy::new(|| Style::new().for_stderr().red().bold());
