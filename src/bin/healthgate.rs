use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use healthgate::checks::{DiskSpaceCheck, FileWritableCheck, SmtpConnectCheck};
use healthgate::http::{self, HealthState};
use healthgate::{
    AccessGate, AppConfig, CheckRegistry, CheckRunner, HealthEndpoint, LogPolicy, TracingSink,
};

#[derive(Parser)]
#[command(name = "healthgate", about = "Run or serve health-check suites")]
struct Cli {
    /// Config profile (falls back to HEALTHGATE_PROFILE, then "release")
    #[arg(long)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a suite and print the report
    Run {
        /// Suite to run
        #[arg(default_value = "health")]
        suite: String,

        /// Also probe this SMTP server (host or host:port)
        #[arg(long)]
        smtp: Option<String>,
    },
    /// Serve the gated health endpoint over HTTP
    Serve {
        /// Suite to serve
        #[arg(default_value = "health")]
        suite: String,

        /// Address to bind
        #[arg(long, default_value = "127.0.0.1:8080")]
        addr: SocketAddr,

        /// Also probe this SMTP server (host or host:port)
        #[arg(long)]
        smtp: Option<String>,
    },
}

fn build_registry(suite: &str, smtp: Option<&str>) -> CheckRegistry {
    let mut registry = CheckRegistry::new();
    registry.register(suite, "Disk space", DiskSpaceCheck::new());
    registry.register(
        suite,
        "Temp dir writable",
        FileWritableCheck::new(std::env::temp_dir()),
    );
    if let Some(server) = smtp {
        let check = match server.rsplit_once(':') {
            Some((host, port)) => match port.parse() {
                Ok(port) => SmtpConnectCheck::with_server(host, port),
                Err(_) => SmtpConnectCheck::with_server(server, 25),
            },
            None => SmtpConnectCheck::with_server(server, 25),
        };
        registry.register(suite, "Outbound mail", check);
    }
    registry
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = match &cli.profile {
        Some(profile) => AppConfig::load(profile)?,
        None => AppConfig::load_from_env()?,
    };
    let policy = LogPolicy::new(config.log_on_warning, config.log_on_error);

    match cli.command {
        Command::Run { suite, smtp } => {
            let registry = build_registry(&suite, smtp.as_deref());

            let report = CheckRunner::run(&registry, &suite);
            healthgate::print_report(&report);
            policy.emit(&report, &mut TracingSink);

            std::process::exit(report.exit_code());
        }
        Command::Serve { suite, addr, smtp } => {
            let registry = build_registry(&suite, smtp.as_deref());

            let endpoint = HealthEndpoint::new(&suite, "Site health")
                .with_error_code(config.error_code)
                .with_login_path(&config.login_path);

            let state = Arc::new(HealthState {
                registry,
                gate: AccessGate::from_env(),
                endpoint,
                policy,
                mode: config.mode,
            });

            let listener = tokio::net::TcpListener::bind(addr)
                .await
                .with_context(|| format!("failed to bind {addr}"))?;
            tracing::info!(%addr, suite, "serving health endpoint");
            axum::serve(listener, http::router(state)).await?;
            Ok(())
        }
    }
}
