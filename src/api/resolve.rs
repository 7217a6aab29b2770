/*!
Name-or-ID resolution shared by droplet, image, and key commands.

A user argument is parsed once into a tagged `ResourceRef`:

  base-10 integer -> Id(n)    resolved immediately, no network call,
                              no existence check
  anything else   -> Name(s)  resolved by listing the collection and taking
                              the first exact (case-sensitive) name match

Duplicate names are an upstream quirk with no documented ordering guarantee;
first match wins. A miss costs exactly one list request and yields
`ApiError::NotFound`; list failures propagate unchanged.
*/

use std::fmt;

use crate::api::client::ApiClient;
use crate::api::error::{ApiError, ResourceKind};

/// A user-supplied resource identifier, disambiguated up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceRef {
    Id(u64),
    Name(String),
}

impl ResourceRef {
    /// IDs on the wire are unsigned, so signed or otherwise non-`u64` input
    /// (e.g. `"-42"`) falls through to name resolution.
    pub fn parse(input: &str) -> Self {
        match input.parse::<u64>() {
            Ok(id) => ResourceRef::Id(id),
            Err(_) => ResourceRef::Name(input.to_string()),
        }
    }
}

impl From<&str> for ResourceRef {
    fn from(input: &str) -> Self {
        ResourceRef::parse(input)
    }
}

impl fmt::Display for ResourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceRef::Id(id) => write!(f, "{id}"),
            ResourceRef::Name(name) => f.write_str(name),
        }
    }
}

/// First exact name match wins.
fn first_named<'a>(items: impl IntoIterator<Item = (u64, &'a str)>, name: &str) -> Option<u64> {
    items.into_iter().find(|(_, n)| *n == name).map(|(id, _)| id)
}

impl ApiClient {
    /// Resolve a droplet reference to its numeric ID.
    pub async fn resolve_droplet(&self, droplet: &ResourceRef) -> Result<u64, ApiError> {
        match droplet {
            ResourceRef::Id(id) => Ok(*id),
            ResourceRef::Name(name) => {
                let droplets = self.list_droplets().await?;
                first_named(droplets.iter().map(|d| (d.id, d.name.as_str())), name).ok_or_else(
                    || ApiError::NotFound {
                        kind: ResourceKind::Droplet,
                        name: name.clone(),
                    },
                )
            }
        }
    }

    /// Resolve an image reference to its numeric ID.
    pub async fn resolve_image(&self, image: &ResourceRef) -> Result<u64, ApiError> {
        match image {
            ResourceRef::Id(id) => Ok(*id),
            ResourceRef::Name(name) => {
                let images = self.list_images().await?;
                first_named(images.iter().map(|i| (i.id, i.name.as_str())), name).ok_or_else(
                    || ApiError::NotFound {
                        kind: ResourceKind::Image,
                        name: name.clone(),
                    },
                )
            }
        }
    }

    /// Resolve an SSH key reference to its numeric ID.
    pub async fn resolve_key(&self, key: &ResourceRef) -> Result<u64, ApiError> {
        match key {
            ResourceRef::Id(id) => Ok(*id),
            ResourceRef::Name(name) => {
                let keys = self.list_keys().await?;
                first_named(keys.iter().map(|k| (k.id, k.name.as_str())), name).ok_or_else(
                    || ApiError::NotFound {
                        kind: ResourceKind::SshKey,
                        name: name.clone(),
                    },
                )
            }
        }
    }
}

/* ---- Tests ---- */
