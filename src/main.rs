use addonman::cli::{Cli, Commands};
use addonman::output::{self, Verbosity};
use addonman::{AddonContext, commands};
use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{Generator, generate};
use colored::Colorize;
use std::io;
use std::process;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e:#}", "Error:".red().bold());
        process::exit(1);
    }
}

fn init_tracing(verbosity: Verbosity) {
    let default_level = match verbosity {
        Verbosity::Quiet => LevelFilter::ERROR,
        Verbosity::Normal => LevelFilter::WARN,
        Verbosity::Verbose => LevelFilter::DEBUG,
    };
    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .with_env_var("ADDON_LOG")
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let verbosity = if cli.quiet {
        Verbosity::Quiet
    } else if cli.verbose {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    };
    output::set_verbosity(verbosity);
    init_tracing(verbosity);

    // Completion and detect work without a config file
    match &cli.command {
        Commands::Completion { shell } => {
            print_completions(*shell, &mut Cli::command());
            return Ok(());
        }
        Commands::Detect { world } => return commands::detect::execute(world),
        _ => {}
    }

    let mut ctx = AddonContext::new()?;
    ctx.override_paths(cli.world, cli.resource_packs, cli.behavior_packs);

    match cli.command {
        Commands::Status => commands::status::execute(&ctx)?,
        Commands::List {
            category,
            active,
            inactive,
            all,
        } => {
            let filter = commands::list::ListFilter::from_flags(active, inactive);
            commands::list::execute(&ctx, category.map(Into::into), filter, all)?;
        }
        Commands::Show { id } => commands::show::execute(&ctx, id)?,
        Commands::Enable { category, ids } => {
            commands::enable::execute(&ctx, category.into(), &ids)?;
        }
        Commands::Disable { category, ids } => {
            commands::enable::execute_disable(&ctx, category.into(), &ids)?;
        }
        Commands::Move {
            category,
            id,
            target,
        } => {
            let step = commands::reorder::Step::from(target);
            commands::reorder::execute(&ctx, category.into(), id, step)?;
        }
        Commands::Delete { category, id, yes } => {
            commands::delete::execute(&ctx, category.into(), id, yes)?;
        }
        Commands::Config {
            key,
            value,
            unset,
            list,
        } => commands::config::execute(&mut ctx, key.as_deref(), value.as_deref(), unset, list)?,
        Commands::Completion { .. } | Commands::Detect { .. } => {}
    }

    Ok(())
}

fn print_completions<G: Generator>(g: G, cmd: &mut clap::Command) {
    generate(g, cmd, cmd.get_name().to_string(), &mut io::stdout());
}
