/*!
`droplet.rs`

Implements the `droplet` subcommand family: list / create / delete, the
single-shot power and lifecycle verbs, and snapshot.

Every verb that names a droplet accepts either its numeric ID or its name;
names resolve through `api::resolve` (first exact match wins). The simple
verbs all funnel into one generic action post keyed by `DropletActionKind`,
so adding a verb is a new enum arm plus a match line, not a new function.
*/

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use crate::api::{
    ApiClient, ApiError, Config, DEFAULT_REGION, DEFAULT_SIZE, ResourceRef,
};
use crate::api::types::{DropletActionKind, DropletActionRequest, DropletCreateRequest};
use crate::cmd::list;

/// CLI arguments for `triton droplet <verb>`.
#[derive(Args, Debug)]
pub struct DropletArgs {
    #[command(subcommand)]
    pub verb: DropletVerb,
}

#[derive(Subcommand, Debug)]
pub enum DropletVerb {
    /// An alias for `list droplets`
    #[command(visible_alias = "l")]
    List,

    /// Create a Droplet from an Image
    #[command(visible_alias = "c")]
    Create {
        /// Name for the new Droplet
        name: String,
        /// Image name or numeric ID to boot from
        image: String,
        /// Which region to create the Droplet in
        #[arg(short, long, default_value = DEFAULT_REGION)]
        region: String,
        /// Do not set up any SSH keys in the Droplet
        #[arg(long, conflicts_with = "keys")]
        no_keys: bool,
        /// Comma-separated SSH key names or IDs to set up
        /// (default: all account keys)
        #[arg(long, value_delimiter = ',', value_name = "KEY")]
        keys: Vec<String>,
    },

    /// Destroy and delete a Droplet
    #[command(visible_alias = "d")]
    Delete {
        /// Droplet name or numeric ID
        droplet: String,
    },

    /// Power on a Droplet
    #[command(visible_alias = "p")]
    Poweron { droplet: String },

    /// Power off a Droplet
    Poweroff { droplet: String },

    /// Shutdown a Droplet
    #[command(visible_alias = "s")]
    Shutdown { droplet: String },

    /// Reboot a Droplet
    #[command(visible_alias = "r")]
    Reboot { droplet: String },

    /// Power off and on a Droplet
    Powercycle { droplet: String },

    /// Reset the root password for a Droplet
    Passwordreset { droplet: String },

    /// Enable IPv6 for a Droplet
    Ipv6 { droplet: String },

    /// Disable backups for a Droplet
    Disablebackups { droplet: String },

    /// Enable private networking for a Droplet
    Privatenetworking { droplet: String },

    /// Create a snapshot image from the Droplet
    #[command(visible_alias = "n")]
    Snapshot {
        /// Droplet name or numeric ID
        droplet: String,
        /// Name for the snapshot image
        snapshot_name: String,
    },
}

/// Entry point for the droplet subcommand family.
pub fn execute_droplet(args: DropletArgs, config: &Config) -> Result<()> {
    use DropletActionKind as Kind;
    use DropletVerb as Verb;

    let client = ApiClient::new(config)?;
    let rt = crate::cmd::runtime()?;

    match args.verb {
        Verb::List => rt.block_on(list::list_droplets(&client)),
        Verb::Create {
            name,
            image,
            region,
            no_keys,
            keys,
        } => rt.block_on(create(&client, name, &image, region, no_keys, &keys)),
        Verb::Delete { droplet } => rt.block_on(delete(&client, &droplet)),
        Verb::Snapshot {
            droplet,
            snapshot_name,
        } => rt.block_on(run_action(
            &client,
            &droplet,
            DropletActionRequest::snapshot(snapshot_name),
        )),
        Verb::Poweron { droplet } => rt.block_on(run_simple(&client, &droplet, Kind::PowerOn)),
        Verb::Poweroff { droplet } => rt.block_on(run_simple(&client, &droplet, Kind::PowerOff)),
        Verb::Shutdown { droplet } => rt.block_on(run_simple(&client, &droplet, Kind::Shutdown)),
        Verb::Reboot { droplet } => rt.block_on(run_simple(&client, &droplet, Kind::Reboot)),
        Verb::Powercycle { droplet } => {
            rt.block_on(run_simple(&client, &droplet, Kind::PowerCycle))
        }
        Verb::Passwordreset { droplet } => {
            rt.block_on(run_simple(&client, &droplet, Kind::PasswordReset))
        }
        Verb::Ipv6 { droplet } => rt.block_on(run_simple(&client, &droplet, Kind::EnableIpv6)),
        Verb::Disablebackups { droplet } => {
            rt.block_on(run_simple(&client, &droplet, Kind::DisableBackups))
        }
        Verb::Privatenetworking { droplet } => rt.block_on(run_simple(
            &client,
            &droplet,
            Kind::EnablePrivateNetworking,
        )),
    }
}

async fn create(
    client: &ApiClient,
    name: String,
    image: &str,
    region: String,
    no_keys: bool,
    keys: &[String],
) -> Result<()> {
    let image_ref = ResourceRef::parse(image);

    // Image and key lookups are independent; run them concurrently. Output
    // ordering is unaffected since nothing prints until both are done.
    let (image_id, ssh_keys) = tokio::try_join!(
        client.resolve_image(&image_ref),
        select_keys(client, no_keys, keys),
    )
    .with_context(|| format!("Cannot create droplet '{name}'"))?;

    let req = DropletCreateRequest {
        name,
        image: image_id,
        size: DEFAULT_SIZE.to_string(),
        region,
        ssh_keys,
    };
    let droplet = client.create_droplet(&req).await?;
    println!(
        "Created droplet {} in region {} with ID {}",
        droplet.name, droplet.region.name, droplet.id
    );
    Ok(())
}

/// Key IDs to embed in a new droplet. The default embeds every account key;
/// `--no-keys` sends none; `--keys` resolves the named subset.
async fn select_keys(
    client: &ApiClient,
    no_keys: bool,
    keys: &[String],
) -> Result<Vec<u64>, ApiError> {
    if no_keys {
        return Ok(Vec::new());
    }
    if keys.is_empty() {
        return Ok(client.list_keys().await?.into_iter().map(|k| k.id).collect());
    }
    let mut ids = Vec::with_capacity(keys.len());
    for key in keys {
        ids.push(client.resolve_key(&ResourceRef::parse(key)).await?);
    }
    Ok(ids)
}

async fn delete(client: &ApiClient, droplet: &str) -> Result<()> {
    let id = client.resolve_droplet(&ResourceRef::parse(droplet)).await?;
    client
        .delete_droplet(id)
        .await
        .context("Error while deleting droplet")?;
    println!("Deleted Droplet with ID {id}");
    Ok(())
}

async fn run_simple(client: &ApiClient, droplet: &str, kind: DropletActionKind) -> Result<()> {
    run_action(client, droplet, DropletActionRequest::simple(kind)).await
}

async fn run_action(
    client: &ApiClient,
    droplet: &str,
    req: DropletActionRequest,
) -> Result<()> {
    let id = client.resolve_droplet(&ResourceRef::parse(droplet)).await?;
    let action = client.droplet_action(id, &req).await?;
    println!("{action}");
    Ok(())
}

/* ---- Tests ---- */
