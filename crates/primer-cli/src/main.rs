use anyhow::Result;
use clap::Parser;
use log::LevelFilter;
use primer_core::{Session, SessionOptions};
use std::io;

#[derive(Parser, Debug)]
#[clap(
    name = "primer",
    author,
    version = "0.1.0",
    about = "Interactive console tutorial: greetings, arithmetic, and loops"
)]
struct Cli {
    #[clap(
        long,
        help = "Wait for a final Enter before exiting, like the classic console version"
    )]
    pause: bool,

    #[clap(long, short, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout is reserved for the tutorial transcript.
    let log_level_filter = cli.log_level.parse().unwrap_or(LevelFilter::Warn);
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .target(env_logger::Target::Stderr)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(
        stdin.lock(),
        stdout.lock(),
        SessionOptions {
            pause_on_exit: cli.pause,
        },
    );
    session.run()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_pause_flag_defaults_off() {
        let cli = Cli::parse_from(["primer"]);
        assert!(!cli.pause);
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn test_pause_flag_parses() {
        let cli = Cli::parse_from(["primer", "--pause", "-l", "debug"]);
        assert!(cli.pause);
        assert_eq!(cli.log_level, "debug");
    }
}
