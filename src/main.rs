use clap::Parser;
use env_logger::Env;

use strkeydict::cli::{run_commands, start_interactive, Args, CommandError, Runtime, Session};

fn main() -> Result<(), CommandError> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let mut session = Session::new(args.variant, args.seed.as_deref())?;

    match args.subcommand {
        Runtime::Interactive => start_interactive(&mut session),
        Runtime::Run { commands } => {
            run_commands(&mut session, &commands);
            Ok(())
        }
    }
}
