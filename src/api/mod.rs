/*!
DigitalOcean API v2 client.

Layering, leaf to root:
  client.rs   - authenticated request executor (the only HTTP code)
  types.rs    - wire models and request payloads
  droplets.rs / images.rs / keys.rs - typed per-kind accessors
  resolve.rs  - name-or-ID resolution on top of the list accessors

Re-exports cover everything the command layer needs.
*/

pub mod client;
pub mod droplets;
pub mod error;
pub mod images;
pub mod keys;
pub mod resolve;
pub mod types;

pub use client::{API_URL, ApiClient, Config};
pub use error::{ApiError, ResourceKind};
pub use resolve::ResourceRef;

/// Region used for `droplet create` when none is given.
pub const DEFAULT_REGION: &str = "ams1";

/// Size tier for new droplets. Fixed; the CLI does not expose a size flag.
pub const DEFAULT_SIZE: &str = "512mb";
