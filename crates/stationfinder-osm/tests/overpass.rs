//! Integration tests for `OverpassClient` using wiremock HTTP mocks.

use stationfinder_core::Coordinate;
use stationfinder_osm::{build_query, AmenityFetchError, AmenitySource, OverpassClient};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const BANDRA: Coordinate = Coordinate {
    latitude: 19.0544,
    longitude: 72.8402,
};

fn test_client(server: &MockServer) -> OverpassClient {
    OverpassClient::new(
        &format!("{}/api/interpreter", server.uri()),
        "stationfinder-test/0.1",
        5,
    )
    .expect("client construction should not fail")
}

#[tokio::test]
async fn fetch_nearby_sends_query_and_parses_elements() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "version": 0.6,
        "elements": [
            {
                "type": "node",
                "id": 101,
                "lat": 19.0551,
                "lon": 72.8390,
                "tags": { "amenity": "fuel", "brand": "Indian Oil" }
            },
            {
                "type": "node",
                "id": 102,
                "lat": 19.0530,
                "lon": 72.8411,
                "tags": { "amenity": "parking" }
            },
            {
                "type": "node",
                "id": 103,
                "lat": 19.0500,
                "lon": 72.8400
            }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/api/interpreter"))
        .and(query_param("data", build_query(BANDRA, 5000)))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let points = client
        .fetch_nearby(BANDRA, 5000)
        .await
        .expect("should parse elements");

    assert_eq!(points.len(), 3);
    assert_eq!(points[0].latitude, 19.0551);
    assert_eq!(
        points[0].tags.get("brand").map(String::as_str),
        Some("Indian Oil")
    );
    assert_eq!(
        points[1].tags.get("amenity").map(String::as_str),
        Some("parking")
    );
    assert!(points[2].tags.is_empty());
}

#[tokio::test]
async fn fetch_nearby_returns_empty_for_no_elements() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "elements": [] })))
        .mount(&server)
        .await;

    let points = test_client(&server)
        .fetch_nearby(BANDRA, 5000)
        .await
        .expect("empty result is not an error");

    assert!(points.is_empty());
}

#[tokio::test]
async fn fetch_nearby_maps_gateway_timeout_to_unexpected_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(504))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .fetch_nearby(BANDRA, 5000)
        .await
        .unwrap_err();

    assert!(
        matches!(err, AmenityFetchError::UnexpectedStatus { status: 504 }),
        "got {err:?}"
    );
}

#[tokio::test]
async fn fetch_nearby_rejects_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("rate limited, try later"))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .fetch_nearby(BANDRA, 5000)
        .await
        .unwrap_err();

    assert!(matches!(err, AmenityFetchError::Deserialize { .. }), "got {err:?}");
}

#[tokio::test]
async fn fetch_nearby_reports_connection_failure() {
    // Nothing listens on port 9 locally.
    let client = OverpassClient::new("http://127.0.0.1:9/api/interpreter", "ua", 2)
        .expect("client construction should not fail");

    let err = client.fetch_nearby(BANDRA, 5000).await.unwrap_err();

    assert!(matches!(err, AmenityFetchError::Http(_)), "got {err:?}");
}

#[tokio::test]
async fn fetch_nearby_reports_runtime_error_remark() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "version": 0.6,
            "elements": [],
            "remark": "runtime error: Query timed out in \"query\" at line 1 after 10 seconds."
        })))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .fetch_nearby(BANDRA, 5000)
        .await
        .unwrap_err();

    match err {
        AmenityFetchError::Remote { remark } => {
            assert!(remark.starts_with("runtime error: Query timed out"), "{remark}");
        }
        other => panic!("expected Remote error, got {other:?}"),
    }
}

#[tokio::test]
async fn fetch_nearby_keeps_results_for_informational_remark() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "elements": [
                { "type": "node", "id": 5, "lat": 19.05, "lon": 72.84, "tags": { "amenity": "fuel" } }
            ],
            "remark": "results limited by maxsize"
        })))
        .mount(&server)
        .await;

    let points = test_client(&server)
        .fetch_nearby(BANDRA, 5000)
        .await
        .expect("non-runtime remark is not an error");

    assert_eq!(points.len(), 1);
}

#[tokio::test]
async fn fetch_nearby_times_out_as_http_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "elements": [] }))
                .set_delay(std::time::Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let client = OverpassClient::new(
        &format!("{}/api/interpreter", server.uri()),
        "stationfinder-test/0.1",
        1,
    )
    .expect("client construction should not fail");
    let err = client.fetch_nearby(BANDRA, 5000).await.unwrap_err();

    match err {
        AmenityFetchError::Http(e) => assert!(e.is_timeout(), "expected timeout, got {e}"),
        other => panic!("expected Http timeout, got {other:?}"),
    }
}
