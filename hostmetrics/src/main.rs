use std::net::IpAddr;
use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use hostmetrics::config::{Config, Overrides, CONFIG_FILE_NAME};
use hostmetrics::web::{self, state::AppState};
use hostmetrics::{ProbeKind, Prober};

#[derive(Parser)]
#[command(name = "hostmetrics")]
#[command(about = "Host CPU, memory, disk and network metrics over HTTP")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (default: nearest .hostmetrics.toml, then the global config)
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    /// Filesystem path reported by the disk probe
    #[arg(long, env = "HOSTMETRICS_DISK_PATH", global = true)]
    disk_path: Option<PathBuf>,

    /// CPU sampling window in milliseconds
    #[arg(long, env = "HOSTMETRICS_CPU_SAMPLE_MS", global = true)]
    cpu_sample_ms: Option<u64>,

    /// Increase verbosity (-v debug, -vv trace). Default is info.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API
    Serve {
        /// Address to bind
        #[arg(long, env = "HOSTMETRICS_BIND")]
        bind: Option<IpAddr>,
        /// Port to listen on
        #[arg(long, short, env = "HOSTMETRICS_PORT")]
        port: Option<u16>,
    },
    /// Take one snapshot and print it as JSON
    Probe {
        #[arg(value_enum)]
        kind: ProbeKind,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let (bind, port) = match &cli.command {
        Commands::Serve { bind, port } => (*bind, *port),
        Commands::Probe { .. } => (None, None),
    };
    let config_path = Config::locate(cli.config.as_deref())?;
    let config = Config::load(config_path.as_deref())?.apply(Overrides {
        bind,
        port,
        disk_path: cli.disk_path,
        cpu_sample_ms: cli.cpu_sample_ms,
    });

    api_common::init_tracing("hostmetrics", config.logging.format, cli.verbose)?;
    match &config_path {
        Some(path) => tracing::debug!("Loaded config from: {}", path.display()),
        None => tracing::debug!("No {} found, using defaults", CONFIG_FILE_NAME),
    }

    match cli.command {
        Commands::Serve { .. } => {
            config.validate_for_serve()?;
            let prober = Prober::system(config.probes.clone());
            web::serve(&config.server, AppState::new(prober)).await?;
        }
        Commands::Probe { kind } => {
            config.validate()?;
            let prober = Prober::system(config.probes.clone());
            println!("{}", probe_json(&prober, kind).await?);
        }
    }

    Ok(())
}

async fn probe_json(prober: &Prober, kind: ProbeKind) -> Result<String> {
    use api_common::pretty_json;

    let text = match kind {
        ProbeKind::Cpu => pretty_json(&prober.cpu().await?)?,
        ProbeKind::Memory => pretty_json(&prober.memory().await?)?,
        ProbeKind::Disk => pretty_json(&prober.disk().await?)?,
        ProbeKind::Network => pretty_json(&prober.network().await?)?,
        ProbeKind::Ports => pretty_json(&prober.ports().await?)?,
    };
    Ok(text)
}
