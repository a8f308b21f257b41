use cheeze_wizards::{CheezeWizards, CheezeWizardsConfigBuilder};
use serde_json::{Value, json};
use wiremock::MockServer;

pub const API_KEY: &str = "test-api-key";
pub const EMAIL: &str = "wizard@example.com";

pub async fn start_server_and_client() -> (MockServer, CheezeWizards) {
    let server = MockServer::start().await;
    let config = CheezeWizardsConfigBuilder::default()
        .api_key(API_KEY)
        .email(EMAIL)
        .base_url(server.uri())
        .build()
        .unwrap();
    let client = CheezeWizards::from_config(config).unwrap();
    (server, client)
}

#[allow(dead_code)]
pub fn wizard_json(id: &str) -> Value {
    json!({
        "id": id,
        "owner": "0xF0128825b0c518858971d8521498769148137936",
        "affinity": 4,
        "initialPower": "150000000000000",
        "power": "340282366920938463463374607431768211455",
        "eliminatedBlockNumber": null,
        "createdBlockNumber": 4800000
    })
}

#[allow(dead_code)]
pub fn duel_json(id: &str) -> Value {
    json!({
        "id": id,
        "wizard1Id": "5991",
        "wizard2Id": "5993",
        "affinity1": 2,
        "affinity2": 3,
        "startPower1": "100",
        "startPower2": "200",
        "endPower1": "300",
        "endPower2": "0",
        "moveSet1": "0x0202020202",
        "moveSet2": "0x0303030303",
        "startBlock": 4943216,
        "endBlock": 4943220,
        "timeoutBlock": 4943300,
        "timedOut": false,
        "isAscensionBattle": false
    })
}
