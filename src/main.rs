use clap::{CommandFactory, Parser};
use hedera_walkthrough::cli::{commands, Cli, Verbosity};
use hedera_walkthrough::config::{Config, Settings};
use hedera_walkthrough::simulator::SimulatedTestnet;
use hedera_walkthrough::ui::formatter::Formatter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn initialize_tracing(verbosity: Verbosity) {
    let log_level = verbosity.to_log_level();
    let fallback_filter = format!("hedera_walkthrough={}", log_level);

    let use_json = std::env::var("HEDERA_WALK_JSON").is_ok();

    if use_json {
        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true);

        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&fallback_filter)),
            )
            .with(json_layer)
            .init();
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true);

        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&fallback_filter)),
            )
            .with(fmt_layer)
            .init();
    }
}

fn main() {
    Formatter::configure_colors_from_env();

    let cli = Cli::parse();
    initialize_tracing(cli.verbosity());

    if let Err(err) = run(cli) {
        eprintln!("{}", Formatter::error(format!("Error: {err:#}")));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> hedera_walkthrough::Result<()> {
    if cli.commands.is_empty() {
        let mut cmd = Cli::command();
        cmd.print_help()?;
        println!();
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(),
    };
    let settings = Settings::resolve(&cli, &config)?;

    let mut client = SimulatedTestnet::for_testnet();
    client.set_operator(
        settings.operator.account_id,
        settings.operator.private_key.clone(),
    );

    commands::run_walkthrough(&mut client, &settings, &cli.commands)?;

    Ok(())
}
