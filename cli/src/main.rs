use clap::Parser;
use quire_cli::Cli;
use quire_cli::command::Commands;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.commands {
        Commands::Debug(debug) => debug.debug()?,
        Commands::Extract(extract) => extract.extract()?,
    }

    Ok(())
}
