/*!
`image.rs`

Implements the `image` subcommand family: list (alias of `list images`),
region transfer, and delete. Image arguments are name-or-ID, resolved the
same way droplet arguments are.
*/

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use crate::api::{ApiClient, Config, ResourceRef};
use crate::cmd::list;

/// CLI arguments for `triton image <verb>`.
#[derive(Args, Debug)]
pub struct ImageArgs {
    #[command(subcommand)]
    pub verb: ImageVerb,
}

#[derive(Subcommand, Debug)]
pub enum ImageVerb {
    /// An alias for `list images`
    #[command(visible_alias = "l")]
    List {
        /// Print all images (public and private)
        #[arg(short, long)]
        all: bool,
    },

    /// Transfer an Image to another region
    #[command(visible_alias = "t")]
    Transfer {
        /// Image name or numeric ID
        image: String,
        /// Target region slug (e.g. nyc3)
        region: String,
    },

    /// Destroy and delete an Image
    #[command(visible_alias = "d")]
    Delete {
        /// Image name or numeric ID
        image: String,
    },
}

/// Entry point for the image subcommand family.
pub fn execute_image(args: ImageArgs, config: &Config) -> Result<()> {
    let client = ApiClient::new(config)?;
    let rt = crate::cmd::runtime()?;
    match args.verb {
        ImageVerb::List { all } => rt.block_on(list::list_images(&client, all)),
        ImageVerb::Transfer { image, region } => rt.block_on(transfer(&client, &image, &region)),
        ImageVerb::Delete { image } => rt.block_on(delete(&client, &image)),
    }
}

async fn transfer(client: &ApiClient, image: &str, region: &str) -> Result<()> {
    let id = client.resolve_image(&ResourceRef::parse(image)).await?;
    let action = client.transfer_image(id, region).await?;
    println!("{action}");
    Ok(())
}

async fn delete(client: &ApiClient, image: &str) -> Result<()> {
    let id = client.resolve_image(&ResourceRef::parse(image)).await?;
    client
        .delete_image(id)
        .await
        .context("Error while deleting image")?;
    println!("Deleted Image with ID {id}");
    Ok(())
}

/* ---- Tests ---- */

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser, Debug)]
    struct TestCli {
        #[command(subcommand)]
        cmd: TestSub,
    }

    #[derive(clap::Subcommand, Debug)]
    enum TestSub {
        Image(ImageArgs),
    }

    #[test]
    fn transfer_takes_image_and_region() {
        let cli = TestCli::try_parse_from(["t", "image", "transfer", "my-snap", "nyc3"]).unwrap();
        let TestSub::Image(a) = cli.cmd;
        match a.verb {
            ImageVerb::Transfer { image, region } => {
                assert_eq!(image, "my-snap");
                assert_eq!(region, "nyc3");
            }
            other => panic!("expected Transfer, got {other:?}"),
        }
    }

    #[test]
    fn list_alias_accepts_all_flag() {
        let cli = TestCli::try_parse_from(["t", "image", "l", "--all"]).unwrap();
        let TestSub::Image(a) = cli.cmd;
        assert!(matches!(a.verb, ImageVerb::List { all: true }));
    }
}
