//! Droplet accessors: list / create / delete plus the generic action post.
//!
//! Each accessor is a thin wrapper over the client's request path; failures
//! surface unmodified and every call is a single best-effort attempt.

use serde::Deserialize;

use crate::api::client::ApiClient;
use crate::api::error::ApiError;
use crate::api::types::{Action, Droplet, DropletActionRequest, DropletCreateRequest};

#[derive(Debug, Deserialize)]
struct DropletListEnvelope {
    droplets: Vec<Droplet>,
}

#[derive(Debug, Deserialize)]
struct DropletEnvelope {
    droplet: Droplet,
}

/// Shared with image actions; both endpoints answer `{"action": {...}}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ActionEnvelope {
    pub action: Action,
}

impl ApiClient {
    /// All droplets, in the order the server returned them.
    pub async fn list_droplets(&self) -> Result<Vec<Droplet>, ApiError> {
        let list: DropletListEnvelope = self.get("droplets").await?;
        Ok(list.droplets)
    }

    /// Create a droplet and return the server's snapshot of it.
    pub async fn create_droplet(&self, req: &DropletCreateRequest) -> Result<Droplet, ApiError> {
        let resp: DropletEnvelope = self.post("droplets", req).await?;
        Ok(resp.droplet)
    }

    /// Destroy a droplet by numeric ID. Success is the absence of an error.
    pub async fn delete_droplet(&self, id: u64) -> Result<(), ApiError> {
        self.delete(&format!("droplets/{id}")).await
    }

    /// Post an action envelope to the droplet's action sub-path. The
    /// returned `Action` is displayed once and never polled.
    pub async fn droplet_action(
        &self,
        id: u64,
        req: &DropletActionRequest,
    ) -> Result<Action, ApiError> {
        let resp: ActionEnvelope = self.post(&format!("droplets/{id}/actions"), req).await?;
        Ok(resp.action)
    }
}

/* ---- Tests ---- */

#[cfg(test)]
mod tests {
    use crate::api::client::{ApiClient, Config};
    use crate::api::types::{DropletActionKind, DropletActionRequest, DropletCreateRequest};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> ApiClient {
        let config = Config {
            token: "test-token".into(),
            debug: false,
            verbose: false,
        };
        ApiClient::with_base_url(&config, &format!("{}/", server.uri())).unwrap()
    }

    fn droplet_json(id: u64, name: &str, ip: &str) -> serde_json::Value {
        json!({
            "id": id,
            "name": name,
            "memory": 512,
            "vcpus": 1,
            "disk": 20,
            "region": {"slug": "ams1", "name": "Amsterdam 1"},
            "status": "active",
            "networks": {"v4": [{"ip_address": ip}], "v6": []}
        })
    }

    #[tokio::test]
    async fn list_droplets_keeps_server_order_and_fields() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/droplets"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "droplets": [
                    droplet_json(1, "web-1", "10.0.0.1"),
                    droplet_json(2, "web-2", "10.0.0.2"),
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let droplets = client_for(&server).list_droplets().await.unwrap();
        assert_eq!(droplets.len(), 2);
        assert_eq!(droplets[0].name, "web-1");
        assert_eq!(droplets[0].region.name, "Amsterdam 1");
        assert_eq!(droplets[0].first_ipv4(), Some("10.0.0.1"));
        assert_eq!(droplets[1].id, 2);
        assert_eq!(droplets[1].first_ipv4(), Some("10.0.0.2"));
    }

    #[tokio::test]
    async fn power_on_posts_action_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/droplets/42/actions"))
            .and(body_json(json!({"type": "power_on"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "action": {
                    "id": 9001,
                    "status": "in-progress",
                    "type": "power_on",
                    "resource_id": 42,
                    "resource_type": "droplet",
                    "region": "ams1"
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let action = client_for(&server)
            .droplet_action(42, &DropletActionRequest::simple(DropletActionKind::PowerOn))
            .await
            .unwrap();
        assert_eq!(action.id, 9001);
        assert_eq!(action.kind, "power_on");
        assert_eq!(action.resource_id, 42);
        assert_eq!(action.status, "in-progress");
    }

    #[tokio::test]
    async fn snapshot_posts_name_alongside_type() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/droplets/7/actions"))
            .and(body_json(json!({"type": "snapshot", "name": "nightly"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "action": {
                    "id": 1,
                    "status": "in-progress",
                    "type": "snapshot",
                    "resource_id": 7,
                    "resource_type": "droplet",
                    "region": "ams1"
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server)
            .droplet_action(7, &DropletActionRequest::snapshot("nightly"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn create_droplet_posts_payload_and_unwraps_envelope() {
        let server = MockServer::start().await;
        let req = DropletCreateRequest {
            name: "web-1".into(),
            image: 12345,
            size: "512mb".into(),
            region: "ams1".into(),
            ssh_keys: vec![11, 22],
        };
        Mock::given(method("POST"))
            .and(path("/droplets"))
            .and(body_json(json!({
                "name": "web-1",
                "image": 12345,
                "size": "512mb",
                "region": "ams1",
                "ssh_keys": [11, 22]
            })))
            .respond_with(
                ResponseTemplate::new(202)
                    .set_body_json(json!({"droplet": droplet_json(99, "web-1", "10.0.0.9")})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let droplet = client_for(&server).create_droplet(&req).await.unwrap();
        assert_eq!(droplet.id, 99);
        assert_eq!(droplet.name, "web-1");
    }

    #[tokio::test]
    async fn delete_droplet_hits_id_path() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/droplets/99"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server).delete_droplet(99).await.unwrap();
    }
}
