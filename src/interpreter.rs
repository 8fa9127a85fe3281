use crate::command::{CommandFactory, ExitCode};
use crate::session::Session;
use log::{debug, info};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result};
use std::io::Write;

/// Factory allows creating instances of ExecutableCommand.
///
/// Only supports commands defined in this crate through `BuiltinCommand`.
pub(crate) struct Factory<T> {
    _phantom: std::marker::PhantomData<T>,
}

impl<T> Default for Factory<T> {
    fn default() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

/// A small command interpreter that runs the object-relationship demos.
///
/// The interpreter maintains a [`Session`] and a list of [`CommandFactory`] objects
/// that are queried to create commands by name. See [`Default`] for the built-in
/// factories included out of the box.
///
/// Example
/// ```
/// use oop_demos::Interpreter;
/// let mut it = Interpreter::default();
/// let mut out = Vec::new();
/// it.execute_line("add 4 6 1 5", &mut out).unwrap();
/// it.execute_line("reverse", &mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "[4 6 1 5 ]\n[5 1 6 4 ]\n");
/// ```
pub struct Interpreter {
    session: Session,
    commands: Vec<Box<dyn CommandFactory>>,
}

impl Interpreter {
    /// Create a new interpreter with a custom set of command factories.
    pub fn new(commands: Vec<Box<dyn CommandFactory>>) -> Self {
        Self {
            session: Session::new(),
            commands,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Run a single command invocation by name with arguments, printing to stdout.
    pub fn run(&mut self, name: &str, args: &[&str]) -> anyhow::Result<ExitCode> {
        let mut stdout = std::io::stdout().lock();
        self.run_with_output(name, args, &mut stdout)
    }

    /// Run a single command, writing its output to `stdout`.
    ///
    /// Returns the command's exit code or an error if no factory knows the command.
    pub fn run_with_output(
        &mut self,
        name: &str,
        args: &[&str],
        stdout: &mut dyn Write,
    ) -> anyhow::Result<ExitCode> {
        for factory in &self.commands {
            if let Some(cmd) = factory.try_create(name, args) {
                debug!("running {} {:?}", name, args);
                return cmd.execute(stdout, &mut self.session);
            }
        }
        Err(anyhow::anyhow!("command not found: {}", name))
    }

    /// Split a line on whitespace and run it. Blank lines succeed with 0.
    pub fn execute_line(&mut self, line: &str, stdout: &mut dyn Write) -> anyhow::Result<ExitCode> {
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.split_first() {
            Some((name, args)) => self.run_with_output(name, args, stdout),
            None => Ok(0),
        }
    }

    /// Read-Eval-Print Loop over the demo commands.
    pub fn repl(&mut self) -> Result<()> {
        let mut rl = DefaultEditor::new()?;

        while !self.session.should_exit {
            match rl.readline("oop$ ") {
                Ok(line) => {
                    rl.add_history_entry(line.as_str())?;
                    let mut stdout = std::io::stdout().lock();
                    if let Err(err) = self.execute_line(&line, &mut stdout) {
                        println!("{}", err);
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("Interrupted");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    println!("Eof");
                    break;
                }
                Err(err) => {
                    println!("Error: {:?}", err);
                    break;
                }
            }
        }

        info!("leaving interactive session");
        Ok(())
    }
}

impl Default for Interpreter {
    /// Create an interpreter with every demo command:
    /// - list: `add`, `get`, `clear`, `size`, `print`, `sort`, `reverse`
    /// - objects: `engine`, `drive`, `player`, `student`, `layout`
    /// - `exit`
    fn default() -> Self {
        use crate::builtin::*;
        Self::new(vec![
            Box::new(Factory::<Add>::default()),
            Box::new(Factory::<Get>::default()),
            Box::new(Factory::<Clear>::default()),
            Box::new(Factory::<Size>::default()),
            Box::new(Factory::<Print>::default()),
            Box::new(Factory::<Sort>::default()),
            Box::new(Factory::<Reverse>::default()),
            Box::new(Factory::<EngineDemo>::default()),
            Box::new(Factory::<Drive>::default()),
            Box::new(Factory::<PlayerDemo>::default()),
            Box::new(Factory::<StudentDemo>::default()),
            Box::new(Factory::<Layout>::default()),
            Box::new(Factory::<Exit>::default()),
        ])
    }
}
