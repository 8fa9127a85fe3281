use crate::car::Car;
use crate::command::{CommandFactory, ExecutableCommand, ExitCode};
use crate::interpreter::Factory;
use crate::layout::{aligned_report, packed_report, print_report};
use crate::list::{BoundedList, LessThan, less_than, less_than_modular, reverse};
use crate::player::{Gun, Player, Trigger};
use crate::session::Session;
use crate::student::{Person, Student, greet};
use crate::vehicle::{Vehicle, drive};
use anyhow::{Context, Result};
use argh::{EarlyExit, FromArgs};
use std::io::Write;

/// Demo commands known to the interpreter at compile time.
///
/// Builtins are parsed using the [`argh`] crate (`FromArgs`) and run in-process.
pub(crate) trait BuiltinCommand: Sized + FromArgs {
    /// Canonical name of the command, e.g. "add" or "reverse".
    fn name() -> &'static str;

    /// Executes the command against the session, reporting to `stdout`.
    ///
    /// Return value follows shell conventions: 0 for success, non-zero for error.
    fn execute(self, stdout: &mut dyn Write, session: &mut Session) -> Result<ExitCode>;
}

impl<T: BuiltinCommand> ExecutableCommand for T {
    fn execute(
        self: Box<Self>,
        stdout: &mut dyn Write,
        session: &mut Session,
    ) -> Result<ExitCode> {
        match T::execute(*self, stdout, session) {
            Ok(x) => Ok(x),
            Err(e) => {
                writeln!(stdout, "{}: {}", T::name(), e)?;
                Ok(1)
            }
        }
    }
}

struct InvalidArgs {
    output: String,
    is_error: bool,
}

impl ExecutableCommand for InvalidArgs {
    fn execute(
        self: Box<Self>,
        stdout: &mut dyn Write,
        _session: &mut Session,
    ) -> Result<ExitCode> {
        stdout.write_all(self.output.as_bytes())?;
        Ok(if self.is_error { 1 } else { 0 })
    }
}

impl<T: BuiltinCommand + 'static> CommandFactory for Factory<T> {
    fn try_create(&self, name: &str, args: &[&str]) -> Option<Box<dyn ExecutableCommand>> {
        if name == T::name() {
            Some(match T::from_args(&[name], args) {
                Ok(cmd) => Box::new(cmd),
                Err(EarlyExit { output, status }) => Box::new(InvalidArgs {
                    output,
                    is_error: status.is_err(),
                }),
            })
        } else {
            None
        }
    }
}

#[derive(FromArgs)]
/// Append values to the session list.
/// Stops at the first value that does not fit.
pub struct Add {
    #[argh(positional, greedy)]
    /// values to append, in order.
    pub values: Vec<i32>,
}

impl BuiltinCommand for Add {
    fn name() -> &'static str {
        "add"
    }

    fn execute(self, _stdout: &mut dyn Write, session: &mut Session) -> Result<ExitCode> {
        for value in self.values {
            session
                .list
                .add(value)
                .with_context(|| format!("can't add {}", value))?;
        }
        Ok(0)
    }
}

#[derive(FromArgs)]
/// Print the value stored at an index of the session list.
pub struct Get {
    #[argh(positional)]
    /// zero-based index into the list.
    pub index: usize,
}

impl BuiltinCommand for Get {
    fn name() -> &'static str {
        "get"
    }

    fn execute(self, stdout: &mut dyn Write, session: &mut Session) -> Result<ExitCode> {
        let value = session.list.get(self.index)?;
        writeln!(stdout, "{}", value)?;
        Ok(0)
    }
}

#[derive(FromArgs)]
/// Remove every value from the session list.
pub struct Clear {}

impl BuiltinCommand for Clear {
    fn name() -> &'static str {
        "clear"
    }

    fn execute(self, _stdout: &mut dyn Write, session: &mut Session) -> Result<ExitCode> {
        session.list.clear();
        Ok(0)
    }
}

#[derive(FromArgs)]
/// Print the number of values in the session list.
pub struct Size {}

impl BuiltinCommand for Size {
    fn name() -> &'static str {
        "size"
    }

    fn execute(self, stdout: &mut dyn Write, session: &mut Session) -> Result<ExitCode> {
        writeln!(stdout, "{}", session.list.size())?;
        Ok(0)
    }
}

#[derive(FromArgs)]
/// Print the session list as `[v1 v2 ... ]`.
pub struct Print {}

impl BuiltinCommand for Print {
    fn name() -> &'static str {
        "print"
    }

    fn execute(self, stdout: &mut dyn Write, session: &mut Session) -> Result<ExitCode> {
        session.list.print(stdout)?;
        Ok(0)
    }
}

#[derive(FromArgs)]
/// Sort the session list and print it.
pub struct Sort {
    #[argh(switch, short = 'm')]
    /// compare values by their remainder modulo 5.
    pub modular: bool,
}

impl BuiltinCommand for Sort {
    fn name() -> &'static str {
        "sort"
    }

    fn execute(self, stdout: &mut dyn Write, session: &mut Session) -> Result<ExitCode> {
        let comparator: LessThan = if self.modular {
            less_than_modular
        } else {
            less_than
        };
        session.list.sort_by(comparator);
        session.list.print(stdout)?;
        Ok(0)
    }
}

#[derive(FromArgs)]
/// Reverse a list and print the source and the result.
/// Without values the session list is reversed in place.
pub struct Reverse {
    #[argh(positional, greedy)]
    /// values of the source list; defaults to the session list.
    pub values: Vec<i32>,
}

impl BuiltinCommand for Reverse {
    fn name() -> &'static str {
        "reverse"
    }

    fn execute(self, stdout: &mut dyn Write, session: &mut Session) -> Result<ExitCode> {
        let mut dest: BoundedList = BoundedList::new();
        if self.values.is_empty() {
            reverse(&session.list, &mut dest)?;
            session.list.print(stdout)?;
            dest.print(stdout)?;
            session.list = dest;
        } else {
            let mut source: BoundedList = BoundedList::new();
            for value in self.values {
                source.add(value)?;
            }
            reverse(&source, &mut dest)?;
            source.print(stdout)?;
            dest.print(stdout)?;
        }
        Ok(0)
    }
}

#[derive(FromArgs)]
/// Start and stop a car, reporting the engine temperature.
pub struct EngineDemo {}

impl BuiltinCommand for EngineDemo {
    fn name() -> &'static str {
        "engine"
    }

    fn execute(self, stdout: &mut dyn Write, _session: &mut Session) -> Result<ExitCode> {
        let mut car = Car::new();
        writeln!(stdout, "Engine temperature: {}", car.engine_temperature())?;
        car.start();
        writeln!(stdout, "Car started, engine temperature: {}", car.engine_temperature())?;
        car.start();
        writeln!(
            stdout,
            "Car started again, engine temperature: {}",
            car.engine_temperature()
        )?;
        car.stop();
        writeln!(stdout, "Car stopped, engine temperature: {}", car.engine_temperature())?;
        Ok(0)
    }
}

#[derive(FromArgs)]
/// Drive a vehicle until it runs out of fuel, then coast to a stop.
pub struct Drive {
    #[argh(option, default = "100.0")]
    /// initial fuel level, at most 10000.
    pub fuel: f64,

    #[argh(option, default = "String::from(\"Renault\")")]
    /// vehicle name.
    pub name: String,
}

impl BuiltinCommand for Drive {
    fn name() -> &'static str {
        "drive"
    }

    fn execute(self, stdout: &mut dyn Write, _session: &mut Session) -> Result<ExitCode> {
        let mut vehicle = Vehicle::new(&self.name);
        drive(&mut vehicle, self.fuel, stdout)?;
        Ok(0)
    }
}

#[derive(FromArgs)]
/// Let a player shoot with and without a borrowed gun.
pub struct PlayerDemo {
    #[argh(option, default = "String::from(\"Billy\")")]
    /// player name.
    pub name: String,

    #[argh(switch, short = 'a')]
    /// hand the player a gun before shooting.
    pub armed: bool,
}

impl BuiltinCommand for PlayerDemo {
    fn name() -> &'static str {
        "player"
    }

    fn execute(self, stdout: &mut dyn Write, _session: &mut Session) -> Result<ExitCode> {
        let gun = Gun::new("AK47");
        let mut player = Player::new(&self.name);

        if !self.armed {
            player.shoot()?;
            return Ok(0);
        }

        player.pickup_gun(&gun);
        player.shoot()?;
        writeln!(stdout, "{} shot with {}", player.name(), gun.name())?;

        player.drop_gun();
        if let Err(e) = player.shoot() {
            writeln!(stdout, "{}", e)?;
        }

        gun.trigger();
        writeln!(
            stdout,
            "{} is still usable, {} shots fired",
            gun.name(),
            gun.shots_fired()
        )?;
        Ok(0)
    }
}

#[derive(FromArgs)]
/// Build a student around an embedded person record.
pub struct StudentDemo {
    #[argh(option, default = "String::from(\"Ada\")")]
    /// first name.
    pub first: String,

    #[argh(option, default = "String::from(\"Lovelace\")")]
    /// last name.
    pub last: String,

    #[argh(option, default = "1815")]
    /// year of birth.
    pub born: u32,

    #[argh(option, default = "String::from(\"S-0001\")")]
    /// student number.
    pub number: String,

    #[argh(option, default = "0")]
    /// credits already passed.
    pub credits: u32,
}

impl BuiltinCommand for StudentDemo {
    fn name() -> &'static str {
        "student"
    }

    fn execute(self, stdout: &mut dyn Write, _session: &mut Session) -> Result<ExitCode> {
        let person = Person::new(&self.first, &self.last, self.born);
        let mut student = Student::new(person, &self.number);
        student.pass_course(self.credits);

        writeln!(stdout, "Student: {}", student)?;
        writeln!(stdout, "Embedded person: {}", student.person)?;
        writeln!(stdout, "{}", greet(&student))?;
        Ok(0)
    }
}

#[derive(FromArgs)]
/// Show size and field offsets of an aligned and a packed record.
pub struct Layout {}

impl BuiltinCommand for Layout {
    fn name() -> &'static str {
        "layout"
    }

    fn execute(self, stdout: &mut dyn Write, _session: &mut Session) -> Result<ExitCode> {
        print_report(&aligned_report(), stdout)?;
        print_report(&packed_report(), stdout)?;
        Ok(0)
    }
}

#[derive(FromArgs)]
/// Leave the interactive session.
pub struct Exit {
    #[argh(positional, greedy)]
    /// ignored.
    pub _args: Vec<String>,
}

impl BuiltinCommand for Exit {
    fn name() -> &'static str {
        "exit"
    }

    fn execute(self, _stdout: &mut dyn Write, session: &mut Session) -> Result<ExitCode> {
        session.should_exit = true;
        Ok(0)
    }
}
