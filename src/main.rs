/**
 * Practice and test yourself from the command line.
 */
use colored::*;
use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

use quizbank::common::{is_broken_pipe, Command, Options, QuizError};
use quizbank::config::Config;
use quizbank::shell::Shell;


fn main() {
    init_logging();

    let options = Options::from_args();
    if options.no_color {
        colored::control::set_override(false);
    }

    match run(options) {
        Ok(()) | Err(QuizError::ReadlineInterrupted) => {},
        Err(ref e) if is_broken_pipe(e) => {},
        Err(e) => {
            eprintln!("{}: {}", "Error".red(), e);
            ::std::process::exit(2);
        },
    }
}


fn run(options: Options) -> Result<(), QuizError> {
    let config = Config::resolve(options.directory)?;
    config.require_dirs()?;
    tracing::debug!(data_dir = %config.data_dir().display(), "using data directory");

    let mut shell = Shell::new(&config);
    match options.cmd {
        None | Some(Command::Menu) => shell.run(),
        Some(Command::Add) => shell.add_questions().map(|_| ()),
        Some(Command::Stats(options)) => {
            let profile = shell.existing_profile(&options.profile)?;
            shell.statistics(&profile)
        },
        Some(Command::Toggle(options)) => shell.toggle(&options.ids),
        Some(Command::Practice(options)) => {
            let mut profile = shell.profile(&options.profile)?;
            shell.practice(&mut profile)
        },
        Some(Command::Test(options)) => {
            // Without -n, every active question is asked.
            shell.test(Some(options.num_to_ask.unwrap_or(usize::MAX)))
        },
        Some(Command::Profiles) => shell.list_profiles(),
    }
}


/// Log to standard error, filtered by `RUST_LOG` and quiet by default so that logging
/// does not interleave with the interactive prompts.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
