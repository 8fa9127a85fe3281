//! Object relationships built from plain structs and functions.
//!
//! The crate shows how encapsulation, composition, aggregation and
//! specialization-by-embedding look when every "object" is an ordinary struct
//! with private fields and the "methods" are the only way to touch them:
//! - [`list`]: a fixed-capacity integer list and the `reverse` algorithm over it.
//! - [`engine`] and [`car`]: a car that owns its engine (composition).
//! - [`vehicle`]: attributes that change only through behavior (encapsulation).
//! - [`player`]: a player that borrows a gun it does not own (aggregation).
//! - [`student`]: a student that embeds a person record.
//! - [`layout`]: size and padding of aligned versus packed records.
//!
//! The [`Interpreter`] runs the demos as small commands, either one at a time
//! or from an interactive prompt.

mod builtin;
pub mod car;
pub mod command;
pub mod engine;
pub mod error;
mod interpreter;
pub mod layout;
pub mod list;
pub mod player;
pub mod session;
pub mod student;
pub mod vehicle;

pub use error::{DemoError, Result};

/// Just a convenient re-export of the command runner.
///
/// See [`Interpreter`] for the high-level API and examples.
pub use interpreter::Interpreter;

/// Copy of `value` cut to at most `limit` bytes on a char boundary.
pub(crate) fn clamp_str(value: &str, limit: usize) -> String {
    let mut end = value.len().min(limit);
    while !value.is_char_boundary(end) {
        end -= 1;
    }
    value[..end].to_string()
}
