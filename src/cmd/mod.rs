/*!
Command dispatcher module.

Layout:
  src/cmd/
    mod.rs      (module declarations + re-exports + runtime helper)
    list.rs     (ListArgs    + execute_list, shared listing helpers)
    droplet.rs  (DropletArgs + execute_droplet)
    image.rs    (ImageArgs   + execute_image)
    format.rs   (table / color formatting utilities)

Conventions:
  - Each subcommand module exposes exactly one public `execute_*` function
    returning `anyhow::Result<()>`.
  - Argument structs derive `clap::Args` and are kept minimal.
  - Handlers print results to stdout; errors bubble to `main` and land on
    stderr with a non-zero exit code.
*/

pub mod droplet;
pub mod format;
pub mod image;
pub mod list;

pub use droplet::{DropletArgs, execute_droplet};
pub use image::{ImageArgs, execute_image};
pub use list::{ListArgs, execute_list};

use anyhow::{Context, Result};
use tokio::runtime::Runtime;

/// Tokio runtime driving a single command's API calls.
pub(crate) fn runtime() -> Result<Runtime> {
    Runtime::new().context("Failed to create Tokio runtime")
}
