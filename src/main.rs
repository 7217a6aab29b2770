use anyhow::Result;
use clap::{Parser, Subcommand};

mod api;
mod cmd;

use api::Config;
use cmd::{DropletArgs, ImageArgs, ListArgs};

/// triton - the messenger for the DigitalOcean.
///
/// Command layout:
///   triton list <droplets|images|keys>
///   triton droplet <list|create|delete|poweron|poweroff|shutdown|reboot|
///                   powercycle|passwordreset|ipv6|disablebackups|
///                   privatenetworking|snapshot>
///   triton image <list|transfer|delete>
///
/// Global flags / env:
///   -t / --token    DigitalOcean API v2 access token
///                   (DIGITALOCEAN_API_TOKEN env fallback)
///   -v / --verbose  One-line method/URL/status summary per API request
///   --debug         Dump raw HTTP requests and responses to stderr
///
/// Positional droplet/image arguments accept either a name or a numeric ID;
/// names resolve against the remote listing (first exact match wins).
///
/// Examples:
///   triton list droplets
///   triton droplet create web-1 debian-12 --region ams1
///   triton droplet snapshot web-1 nightly
///   triton image transfer my-snap nyc3
#[derive(Parser, Debug)]
#[command(
    name = "triton",
    version,
    author,
    about = "The messenger for the DigitalOcean - manage droplets, images, and SSH keys",
    propagate_version = true,
    disable_help_subcommand = true
)]
pub struct Cli {
    /// The DigitalOcean API v2 access token
    /// (falls back to DIGITALOCEAN_API_TOKEN)
    #[arg(short = 't', long = "token", global = true, value_name = "TOKEN")]
    token: Option<String>,

    /// Print a one-line summary for every API request
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Dump raw HTTP requests and responses to stderr
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List droplets, images, or SSH keys
    #[command(visible_alias = "l")]
    List(ListArgs),

    /// Create, modify, or destroy droplets
    #[command(visible_alias = "d")]
    Droplet(DropletArgs),

    /// Perform image actions such as transfer or delete
    #[command(visible_alias = "i")]
    Image(ImageArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // CLI flag wins over the environment fallback.
    let token = cli.token.clone().or_else(|| {
        std::env::var("DIGITALOCEAN_API_TOKEN")
            .ok()
            .filter(|s| !s.trim().is_empty())
    });
    let Some(token) = token else {
        eprintln!("No API token provided (use --token or set DIGITALOCEAN_API_TOKEN)");
        std::process::exit(2);
    };

    let config = Config {
        token,
        debug: cli.debug,
        verbose: cli.verbose,
    };
    init_logging(&config);

    match cli.command {
        Commands::List(args) => cmd::execute_list(args, &config),
        Commands::Droplet(args) => cmd::execute_droplet(args, &config),
        Commands::Image(args) => cmd::execute_image(args, &config),
    }
}

/// Map the diagnostic flags onto tracing levels: request summaries are
/// emitted at info, raw HTTP dumps at debug. RUST_LOG overrides both.
fn init_logging(config: &Config) {
    use tracing_subscriber::EnvFilter;

    let default = if config.debug {
        "triton=debug"
    } else if config.verbose {
        "triton=info"
    } else {
        "triton=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/* ---- Tests ---- */
