//! SSH key accessor. Keys live under `account/keys`; this client only ever
//! lists them (and embeds their IDs into new droplets).

use serde::Deserialize;

use crate::api::client::ApiClient;
use crate::api::error::ApiError;
use crate::api::types::SshKey;

#[derive(Debug, Deserialize)]
struct KeyListEnvelope {
    ssh_keys: Vec<SshKey>,
}

impl ApiClient {
    /// All account SSH keys, in server order.
    pub async fn list_keys(&self) -> Result<Vec<SshKey>, ApiError> {
        let list: KeyListEnvelope = self.get("account/keys").await?;
        Ok(list.ssh_keys)
    }
}

/* ---- Tests ---- */

#[cfg(test)]
mod tests {
    use crate::api::client::{ApiClient, Config};
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn list_keys_unwraps_ssh_keys_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/account/keys"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "ssh_keys": [
                    {"id": 11, "name": "laptop"},
                    {"id": 22, "name": "ci"}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let config = Config {
            token: "test-token".into(),
            debug: false,
            verbose: false,
        };
        let client =
            ApiClient::with_base_url(&config, &format!("{}/", server.uri())).unwrap();
        let keys = client.list_keys().await.unwrap();
        assert_eq!(keys.len(), 2);
        assert_eq!(keys[0].id, 11);
        assert_eq!(keys[1].name, "ci");
    }
}
