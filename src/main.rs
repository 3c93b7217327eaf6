/// Strato - command-line client for the Strato Cloud API
///
/// Manage servers, domains, VPCs, load balancers, firewalls, and floating
/// IPs from the terminal.
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use anyhow::Result;

use strato::api::ApiClient;
use strato::commands::{self, CmdContext};
use strato::config::CliConfig;
use strato::display::OutputFormat;

#[derive(Parser)]
#[command(name = "strato")]
#[command(about = "Manage Strato Cloud resources from the command line", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// API token (overrides STRATO_TOKEN and the config file)
    #[arg(short, long, global = true)]
    token: Option<String>,

    /// API base URL (overrides STRATO_API_URL and the config file)
    #[arg(short = 'u', long, global = true)]
    api_url: Option<String>,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    output: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Account details and balance
    #[command(subcommand)]
    Account(commands::account::AccountCommand),

    /// Provider-side actions
    #[command(subcommand)]
    Action(commands::actions::ActionCommand),

    /// Account balance (same as `account balance`)
    Balance,

    /// DNS domains and records
    #[command(subcommand)]
    Domain(commands::domains::DomainCommand),

    /// Firewalls
    #[command(subcommand)]
    Firewall(commands::firewalls::FirewallCommand),

    /// Floating IPs
    #[command(subcommand, name = "floating-ip")]
    FloatingIp(commands::floating_ips::FloatingIpCommand),

    /// Load balancers
    #[command(subcommand, name = "load-balancer")]
    LoadBalancer(commands::load_balancers::LoadBalancerCommand),

    /// Datacenter regions
    #[command(subcommand)]
    Region(commands::regions::RegionCommand),

    /// Servers
    #[command(subcommand)]
    Server(commands::servers::ServerCommand),

    /// VPCs
    #[command(subcommand)]
    Vpc(commands::vpcs::VpcCommand),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("strato={}", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(cli).await {
        error!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.clone().or_else(CliConfig::default_path);
    let config = match &config_path {
        Some(path) => CliConfig::from_file(path)?,
        None => CliConfig::default(),
    };

    let token = config.resolve_token(cli.token.as_deref())?;
    let api_url = config.resolve_api_url(cli.api_url.as_deref());
    let client = ApiClient::with_base_url(&token, &api_url)?;
    let ctx = CmdContext::new(client, cli.output);

    Ok(match cli.command {
        Command::Account(command) => commands::account::run(&ctx, command).await,
        Command::Action(command) => commands::actions::run(&ctx, command).await,
        Command::Balance => {
            commands::account::run(&ctx, commands::account::AccountCommand::Balance).await
        }
        Command::Domain(command) => commands::domains::run(&ctx, command).await,
        Command::Firewall(command) => commands::firewalls::run(&ctx, command).await,
        Command::FloatingIp(command) => commands::floating_ips::run(&ctx, command).await,
        Command::LoadBalancer(command) => commands::load_balancers::run(&ctx, command).await,
        Command::Region(command) => commands::regions::run(&ctx, command).await,
        Command::Server(command) => commands::servers::run(&ctx, command).await,
        Command::Vpc(command) => commands::vpcs::run(&ctx, command).await,
    }?)
}
