use anyhow::Context;
use argh::FromArgs;
use log::info;
use oop_demos::Interpreter;

#[derive(FromArgs)]
/// Run the object-relationship demos.
/// Without a command the classic walkthrough is replayed: drive a vehicle,
/// start and stop a car, reverse a list.
struct Args {
    #[argh(switch, short = 'i')]
    /// start an interactive prompt.
    interactive: bool,

    #[argh(switch, short = 'v')]
    /// log state transitions (same as RUST_LOG=debug).
    verbose: bool,

    #[argh(positional, greedy)]
    /// demo command and its arguments, e.g. `reverse 4 6 1 5`.
    command: Vec<String>,
}

fn walkthrough(interp: &mut Interpreter) -> anyhow::Result<()> {
    println!("$ drive");
    interp.run("drive", &[])?;

    println!("\n$ engine");
    interp.run("engine", &[])?;

    println!("\n$ reverse 4 6 1 5");
    interp.run("reverse", &["4", "6", "1", "5"])?;

    println!("\n$ player");
    interp.run("player", &[])?;

    println!("\n$ player --armed");
    interp.run("player", &["--armed"])?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args: Args = argh::from_env();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let mut interp = Interpreter::default();

    if args.interactive {
        info!("starting interactive session");
        interp.repl().context("interactive session failed")?;
        return Ok(());
    }

    match args.command.split_first() {
        Some((name, rest)) => {
            let rest: Vec<&str> = rest.iter().map(|s| s.as_str()).collect();
            let code = interp.run(name, &rest)?;
            if code != 0 {
                std::process::exit(code);
            }
        }
        None => walkthrough(&mut interp)?,
    }
    Ok(())
}
