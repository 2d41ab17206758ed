use std::io::IsTerminal;

use binomial::args::parse_query;
use binomial::config::Config;
use binomial::{USAGE, format_probability};
use clap::Parser;
use color_eyre::config::HookBuilder;
use log::debug;

/// Cumulative binomial probability of x successes in n trials
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, allow_negative_numbers = true)]
struct Args {
    /// Number of trials, an integer greater than 0
    n: Option<String>,

    /// Probability of success, a float between 0 and 1
    p: Option<String>,

    /// Successes: an integer or an interval such as [a,b], (a,b] or [a,b)
    x: Option<String>,
}

/// Report failures as one message on stderr, coloured only on a terminal.
fn install_error_hook() -> color_eyre::Result<()> {
    let hook = if std::io::stderr().is_terminal() {
        HookBuilder::default()
    } else {
        HookBuilder::blank()
    };
    hook.display_location_section(false)
        .display_env_section(false)
        .install()
}

fn main() -> color_eyre::Result<()> {
    install_error_hook()?;

    let args = Args::parse();
    if args.n.is_none() {
        print!("{USAGE}");
        return Ok(());
    }

    let config = Config::from_env()?;
    simplelog::TermLogger::init(
        config.log_level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;
    debug!("args = {args:?}, config = {config:?}");

    let query = parse_query(args.n.as_deref(), args.p.as_deref(), args.x.as_deref())?;
    debug!(
        "n = {}, p = {}, x = {}",
        query.model.trials(),
        query.model.success_probability(),
        query.successes
    );
    let probability = query.probability(config.arithmetic)?;

    println!("{}", format_probability(probability));
    Ok(())
}
