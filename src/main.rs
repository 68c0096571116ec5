use anyhow::Result;
use clap::Parser;
use twig::cli::Cli;
use twig::logging::init_tracing;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose());

    cli.execute().await
}
