use anyhow::{anyhow, Result};
use clap::Parser;
use env_logger::Env;
use log::{debug, info, LevelFilter};
use std::io;

use docker_parse::{ContainerParser, DockerCli, OutputMode, RenderOptions};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(help = "Containers to reconstruct (defaults to every running container)")]
    containers: Vec<String>,

    #[arg(
        short,
        long,
        conflicts_with = "compose",
        help = "Join command options with line continuations for readability"
    )]
    pretty: bool,

    #[arg(
        short,
        long,
        help = "Emit a docker-compose service definition instead of a run command"
    )]
    compose: bool,

    #[arg(
        short,
        long,
        action = clap::ArgAction::Count,
        help = "Verbose mode (-v for info, -vv for debug, -vvv for trace)"
    )]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity level
    let log_level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::from_env(Env::default())
        .filter_level(log_level)
        .init();

    info!("Starting docker-parse");
    debug!("Containers: {:?}", cli.containers);
    debug!("Compose: {}, pretty: {}", cli.compose, cli.pretty);

    let inspector =
        DockerCli::new().map_err(|e| anyhow!("Failed to initialize Docker client: {}", e))?;

    let mode = if cli.compose {
        OutputMode::Compose
    } else {
        OutputMode::Command
    };
    let options = RenderOptions {
        mode,
        pretty: cli.pretty,
    };

    let parser = ContainerParser::new(inspector, options);
    let stdout = io::stdout();
    parser.run(&cli.containers, &mut stdout.lock())?;

    Ok(())
}
