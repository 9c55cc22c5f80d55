//! Configuration snapshot types (shortcut table, thresholds, parsing) used by hotmouse.
#![warn(unsafe_op_in_unsafe_fn)]

mod action;
mod defaults;
mod error;
mod loader;
mod shortcuts;
mod types;
mod validation;

#[cfg(test)]
mod test_parse;

pub use action::Action;
pub use error::Error;
pub use loader::{Format, load_from_path, load_from_str};
pub use shortcuts::Shortcuts;
pub use types::Config;
pub use validation::{Warning, is_canonical_key};
