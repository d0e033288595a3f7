use std::io;

use anyhow::Context as _;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use chronowavel::cli::args::{Cli, Commands};
use chronowavel::cli::commands::{self, Context};
use chronowavel::config::{ColorSetting, Config, Paths};
use chronowavel::error::ChronoError;

const LOG_ENV: &str = "CHRONOWAVEL_LOG";

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("{}: {e:#}", "warning".yellow().bold());
    }

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(e.exit_code());
    }
}

/// Log to stderr, filtered by `CHRONOWAVEL_LOG` (default `warn`, `debug`
/// with `--verbose`).
fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber).context("Failed to set up logging")
}

fn run(cli: Cli) -> Result<(), ChronoError> {
    let paths = Paths::resolve(cli.data_dir)?;
    let config = Config::load(&paths)?;

    match config.general.color {
        ColorSetting::Always => colored::control::set_override(true),
        ColorSetting::Never => colored::control::set_override(false),
        ColorSetting::Auto => {},
    }

    let format = cli.output.unwrap_or(config.general.default_output);
    tracing::debug!(root = %paths.root.display(), ?format, "starting");
    let ctx = Context::new(paths, config, format);

    let output = match cli.command {
        Commands::Add(args) => commands::quick_add(&mut ctx.open_calendar()?, args, &ctx)?,
        Commands::Voice { transcript } => {
            let transcript = commands::read_transcript(&transcript, io::stdin().lock())?;
            commands::voice(&mut ctx.open_calendar()?, &transcript, &ctx)?
        },
        Commands::Chat => commands::chat(
            &mut ctx.open_calendar()?,
            io::stdin().lock(),
            io::stdout().lock(),
            &ctx,
            true,
        )?,
        Commands::List => commands::list(&ctx.open_calendar()?, &ctx)?,
        Commands::Today => commands::today(&ctx.open_calendar()?, &ctx)?,
        Commands::Agenda { days } => commands::agenda(&ctx.open_calendar()?, days, &ctx)?,
        Commands::Upcoming { limit } => commands::upcoming(&ctx.open_calendar()?, limit, &ctx)?,
        Commands::Search { query } => {
            commands::search(&ctx.open_calendar()?, &query.join(" "), &ctx)?
        },
        Commands::Export { file } => {
            commands::export(&ctx.open_calendar()?, file.as_deref(), &ctx)?
        },
        Commands::Import { file } => commands::import(&mut ctx.open_calendar()?, &file, &ctx)?,
        Commands::Month { month, offset } => {
            commands::month(&ctx.open_calendar()?, month.as_deref(), offset, &ctx)?
        },
        Commands::View { mode } => commands::view(&ctx.open_calendar()?, mode, &ctx)?,
        Commands::Show { id } => commands::show(&ctx.open_calendar()?, &id, &ctx)?,
        Commands::Edit(args) => commands::edit(&mut ctx.open_calendar()?, args, &ctx)?,
        Commands::Delete { id } => commands::delete(&mut ctx.open_calendar()?, &id, &ctx)?,
        Commands::Stats => commands::stats(&ctx.open_calendar()?, &ctx)?,
        Commands::Clear { yes } => commands::clear(&mut ctx.open_calendar()?, yes, &ctx)?,
        Commands::Config { init } => commands::config(init, &ctx)?,
        Commands::Completions { shell } => commands::completions(shell)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
