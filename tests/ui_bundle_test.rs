use httpmock::prelude::*;
use tm_portal_client::{ApiClient, TomlConfig};

fn client_for(server: &MockServer) -> ApiClient<TomlConfig> {
    let toml_content = format!(
        r#"
[client]
name = "ui-test"

[api]
base_url = "{}"
"#,
        server.base_url()
    );
    ApiClient::new(TomlConfig::from_toml_str(&toml_content).unwrap())
}

#[tokio::test]
async fn test_bundle_and_components_share_the_id_keyed_route() {
    let server = MockServer::start();

    let bundle_mock = server.mock(|when, then| {
        when.method(GET).path("/ui/bundles/3");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "success": true,
                "data": {
                    "id": 3,
                    "name": "tm-dashboard",
                    "version": "2.4.0",
                    "components": [
                        {"id": 10, "name": "risk-map", "kind": "map", "displayOrder": 1}
                    ],
                    "layout": {"risk-map": "main"}
                },
                "timestamp": "2026-02-01T12:00:00.000Z"
            }));
    });
    let components_mock = server.mock(|when, then| {
        when.method(GET).path("/ui/bundles/3/components");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "success": true,
                "data": [
                    {"id": 10, "name": "risk-map", "kind": "map", "displayOrder": 1},
                    {"id": 11, "name": "hazard-table", "kind": "table", "displayOrder": 2}
                ],
                "timestamp": "2026-02-01T12:00:00.000Z"
            }));
    });

    let client = client_for(&server);

    let bundle = client.get_ui_bundle(3).await.unwrap();
    assert_eq!(bundle.name, "tm-dashboard");
    assert_eq!(bundle.components.len(), 1);

    let components = client.list_ui_bundle_components(3).await.unwrap();
    assert_eq!(components.len(), 2);
    assert_eq!(components[1].kind, "table");

    bundle_mock.assert();
    components_mock.assert();
}
