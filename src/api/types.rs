/*!
Wire models for the DigitalOcean v2 API.

All entities are immutable snapshots fetched fresh per invocation; nothing
is persisted locally. Request payloads keep the API's `omitempty` semantics
via `skip_serializing_if`.
*/

use std::fmt;

use serde::{Deserialize, Serialize};

/* ---- Resources ---- */

/// Region pair embedded in droplets; never fetched independently.
#[derive(Debug, Clone, Deserialize)]
pub struct Region {
    pub slug: String,
    pub name: String,
}

/// One assigned address inside the droplet's network block.
#[derive(Debug, Clone, Deserialize)]
pub struct NetworkAddress {
    pub ip_address: String,
}

/// IPv4/IPv6 address lists, in the order the API reports them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Networks {
    #[serde(default)]
    pub v4: Vec<NetworkAddress>,
    #[serde(default)]
    pub v6: Vec<NetworkAddress>,
}

/// A virtual machine instance managed by the remote API.
#[derive(Debug, Clone, Deserialize)]
pub struct Droplet {
    pub id: u64,
    pub name: String,
    pub memory: u64,
    pub vcpus: u32,
    pub disk: u64,
    pub region: Region,
    pub status: String,
    #[serde(default)]
    pub networks: Networks,
}

impl Droplet {
    /// First IPv4 address, when the API reported any.
    pub fn first_ipv4(&self) -> Option<&str> {
        self.networks.v4.first().map(|a| a.ip_address.as_str())
    }
}

/// A bootable disk template, public (shared base image) or private
/// (user-created, e.g. via snapshot).
#[derive(Debug, Clone, Deserialize)]
pub struct Image {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub regions: Vec<String>,
    pub public: bool,
    /// ISO-8601 creation timestamp, kept raw; parsed only at render time.
    pub created_at: String,
}

/// Read-only from this client's perspective: keys are listed and embedded
/// into new droplets, never created or deleted here.
#[derive(Debug, Clone, Deserialize)]
pub struct SshKey {
    pub id: u64,
    pub name: String,
}

/// Asynchronous operation record returned by mutating calls. Displayed once,
/// never polled to completion.
#[derive(Debug, Clone, Deserialize)]
pub struct Action {
    pub id: u64,
    pub status: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub resource_id: u64,
    pub resource_type: String,
    #[serde(default)]
    pub region: String,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Started {} for {} {} (Region {}): {}",
            self.kind, self.resource_type, self.resource_id, self.region, self.status
        )
    }
}

/* ---- Request Payloads ---- */

/// Body for `POST droplets`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropletCreateRequest {
    pub name: String,
    pub image: u64,
    pub size: String,
    pub region: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ssh_keys: Vec<u64>,
}

/// The fixed set of single-shot droplet actions the API accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropletActionKind {
    PowerOn,
    PowerOff,
    Shutdown,
    Reboot,
    PowerCycle,
    PasswordReset,
    EnableIpv6,
    DisableBackups,
    EnablePrivateNetworking,
    Snapshot,
}

impl DropletActionKind {
    /// Wire name for the action envelope's `type` field.
    pub const fn as_str(self) -> &'static str {
        match self {
            DropletActionKind::PowerOn => "power_on",
            DropletActionKind::PowerOff => "power_off",
            DropletActionKind::Shutdown => "shutdown",
            DropletActionKind::Reboot => "reboot",
            DropletActionKind::PowerCycle => "power_cycle",
            DropletActionKind::PasswordReset => "password_reset",
            DropletActionKind::EnableIpv6 => "enable_ipv6",
            DropletActionKind::DisableBackups => "disable_backups",
            DropletActionKind::EnablePrivateNetworking => "enable_private_networking",
            DropletActionKind::Snapshot => "snapshot",
        }
    }
}

impl fmt::Display for DropletActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body for `POST droplets/{id}/actions`. One envelope serves every verb;
/// only `snapshot` carries the extra `name` field.
#[derive(Debug, Clone, Serialize)]
pub struct DropletActionRequest {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl DropletActionRequest {
    pub fn simple(kind: DropletActionKind) -> Self {
        Self {
            kind: kind.as_str(),
            name: None,
        }
    }

    pub fn snapshot(name: impl Into<String>) -> Self {
        Self {
            kind: DropletActionKind::Snapshot.as_str(),
            name: Some(name.into()),
        }
    }
}

/// Body for `POST images/{id}/actions`.
#[derive(Debug, Clone, Serialize)]
pub struct ImageTransferRequest {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub region: String,
}

impl ImageTransferRequest {
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            kind: "transfer",
            region: region.into(),
        }
    }
}

/* ---- Tests ---- */

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn creation_payload_round_trips() {
        let req = DropletCreateRequest {
            name: "web-1".into(),
            image: 12345,
            size: "512mb".into(),
            region: "ams1".into(),
            ssh_keys: vec![11, 22],
        };
        let encoded = serde_json::to_string(&req).unwrap();
        let decoded: DropletCreateRequest = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, req);
    }

    #[test]
    fn creation_payload_omits_empty_key_list() {
        let req = DropletCreateRequest {
            name: "web-1".into(),
            image: 12345,
            size: "512mb".into(),
            region: "ams1".into(),
            ssh_keys: vec![],
        };
        let v = serde_json::to_value(&req).unwrap();
        assert!(v.get("ssh_keys").is_none());
    }

    #[test]
    fn action_kinds_use_wire_names() {
        assert_eq!(DropletActionKind::PowerOn.as_str(), "power_on");
        assert_eq!(DropletActionKind::PowerCycle.as_str(), "power_cycle");
        assert_eq!(
            DropletActionKind::EnablePrivateNetworking.as_str(),
            "enable_private_networking"
        );
    }

    #[test]
    fn simple_action_envelope_has_only_type() {
        let req = DropletActionRequest::simple(DropletActionKind::Reboot);
        assert_eq!(serde_json::to_value(&req).unwrap(), json!({"type": "reboot"}));
    }

    #[test]
    fn snapshot_action_envelope_carries_name() {
        let req = DropletActionRequest::snapshot("nightly");
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"type": "snapshot", "name": "nightly"})
        );
    }

    #[test]
    fn transfer_envelope_shape() {
        let req = ImageTransferRequest::new("nyc3");
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"type": "transfer", "region": "nyc3"})
        );
    }

    #[test]
    fn action_display_matches_confirmation_line() {
        let a = Action {
            id: 1,
            status: "in-progress".into(),
            kind: "power_on".into(),
            resource_id: 42,
            resource_type: "droplet".into(),
            region: "ams1".into(),
        };
        assert_eq!(
            a.to_string(),
            "Started power_on for droplet 42 (Region ams1): in-progress"
        );
    }

    #[test]
    fn droplet_first_ipv4() {
        let d: Droplet = serde_json::from_value(json!({
            "id": 7,
            "name": "web-1",
            "memory": 512,
            "vcpus": 1,
            "disk": 20,
            "region": {"slug": "ams1", "name": "Amsterdam 1"},
            "status": "active",
            "networks": {"v4": [{"ip_address": "10.0.0.1"}, {"ip_address": "10.0.0.2"}]}
        }))
        .unwrap();
        assert_eq!(d.first_ipv4(), Some("10.0.0.1"));
    }

    #[test]
    fn droplet_without_networks_block() {
        let d: Droplet = serde_json::from_value(json!({
            "id": 7,
            "name": "web-1",
            "memory": 512,
            "vcpus": 1,
            "disk": 20,
            "region": {"slug": "ams1", "name": "Amsterdam 1"},
            "status": "new"
        }))
        .unwrap();
        assert_eq!(d.first_ipv4(), None);
    }
}
