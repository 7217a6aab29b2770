/*!
`list.rs`

Implements `triton list <droplets|images|keys>`.

Behavior:
  - droplets : ID / NAME / REGION / STATUS / IP ADDRESS table
  - images   : ID / NAME / CREATION / REGIONS table; private images only
               unless --all is given
  - keys     : ID / NAME table

The droplet and image subcommand families alias back into these listing
helpers, so the async bodies are crate-visible.
*/

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::api::{ApiClient, Config};
use crate::cmd::format::{StyleOptions, table};

/// CLI arguments for `triton list <target>`.
#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(subcommand)]
    pub target: ListTarget,
}

#[derive(Subcommand, Debug)]
pub enum ListTarget {
    /// List all droplets
    #[command(visible_alias = "d")]
    Droplets,

    /// List images (private only, use --all for public base images too)
    #[command(visible_alias = "i")]
    Images {
        /// Print all images (public and private)
        #[arg(short, long)]
        all: bool,
    },

    /// List all SSH keys
    #[command(visible_alias = "k")]
    Keys,
}

/// Entry point for the list subcommand.
pub fn execute_list(args: ListArgs, config: &Config) -> Result<()> {
    let client = ApiClient::new(config)?;
    let rt = crate::cmd::runtime()?;
    match args.target {
        ListTarget::Droplets => rt.block_on(list_droplets(&client)),
        ListTarget::Images { all } => rt.block_on(list_images(&client, all)),
        ListTarget::Keys => rt.block_on(list_keys(&client)),
    }
}

pub(crate) async fn list_droplets(client: &ApiClient) -> Result<()> {
    let droplets = client.list_droplets().await?;
    if droplets.is_empty() {
        println!("No Droplets available");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = droplets
        .iter()
        .map(|d| {
            vec![
                d.id.to_string(),
                d.name.clone(),
                d.region.name.clone(),
                d.status.clone(),
                d.first_ipv4().unwrap_or("-").to_string(),
            ]
        })
        .collect();

    println!("Available Droplets\n");
    println!(
        "{}",
        table(
            &["ID", "NAME", "REGION", "STATUS", "IP ADDRESS"],
            &rows,
            &StyleOptions::detect(),
        )
    );
    Ok(())
}

pub(crate) async fn list_images(client: &ApiClient, all: bool) -> Result<()> {
    let mut images = client.list_images().await?;
    if !all {
        images.retain(|i| !i.public);
    }
    if images.is_empty() {
        println!("No Images available");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = images
        .iter()
        .map(|i| {
            vec![
                i.id.to_string(),
                i.name.clone(),
                render_created_at(&i.created_at),
                i.regions.join(", "),
            ]
        })
        .collect();

    println!("Available Images\n");
    println!(
        "{}",
        table(
            &["ID", "NAME", "CREATION", "REGIONS"],
            &rows,
            &StyleOptions::detect(),
        )
    );
    Ok(())
}

pub(crate) async fn list_keys(client: &ApiClient) -> Result<()> {
    let keys = client.list_keys().await?;
    if keys.is_empty() {
        println!("No Keys available");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = keys
        .iter()
        .map(|k| vec![k.id.to_string(), k.name.clone()])
        .collect();

    println!("Available SSH Keys\n");
    println!("{}", table(&["ID", "NAME"], &rows, &StyleOptions::detect()));
    Ok(())
}

/// RFC822-style rendering of the API's ISO-8601 timestamps; unparseable
/// input is shown raw rather than dropped.
fn render_created_at(created_at: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(created_at)
        .map(|t| t.format("%d %b %y %H:%M %Z").to_string())
        .unwrap_or_else(|_| created_at.to_string())
}

/* ---- Tests ---- */
