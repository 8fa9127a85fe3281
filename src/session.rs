use crate::list::BoundedList;

/// Mutable state shared by the commands of one interpreter.
///
/// The session contains:
/// - `list`: the working list manipulated by `add`, `get`, `clear`, `print`...
/// - `should_exit`: a flag that a REPL loop can check to know when to terminate.
///
/// Note: fields are public to keep the demo small.
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// Working list of the interactive session.
    pub list: BoundedList,
    /// When set to true, indicates that an interactive loop should exit.
    pub should_exit: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }
}
