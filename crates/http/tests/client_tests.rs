//! Integration tests for the Beacon HTTP client

use beacon_core::OAuthProvider;
use beacon_http::{BeaconClient, ClientError, Streamer, TwitchAccount};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_base_url_trailing_slash_is_dropped() {
    let client = BeaconClient::new("http://localhost:8080/").unwrap();
    assert_eq!(client.base_url(), "http://localhost:8080");
}

#[test]
fn test_relative_base_url_is_rejected() {
    for url in ["", "/api", "localhost"] {
        let result = BeaconClient::new(url);
        assert!(
            matches!(result, Err(ClientError::InvalidBaseUrl { .. })),
            "url {url:?}"
        );
    }
}

#[tokio::test]
async fn test_get_authorization_url() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/auth/get_authorization_url/twitch/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "authorization_url": "https://id.twitch.tv/oauth2/authorize?client_id=abc"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = BeaconClient::new(mock_server.uri()).unwrap();
    let response = client
        .get_authorization_url(OAuthProvider::Twitch)
        .await
        .unwrap();

    assert_eq!(
        response.authorization_url,
        "https://id.twitch.tv/oauth2/authorize?client_id=abc"
    );
}

#[tokio::test]
async fn test_exchange_callback_forwards_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/auth/callback/twitch/"))
        .and(query_param("code", "abc"))
        .and(query_param("scope", "user:read:email"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "t0k3n" })))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = BeaconClient::new(mock_server.uri()).unwrap();

    // With and without the leading '?'
    for query in ["?code=abc&scope=user%3Aread%3Aemail", "code=abc&scope=user%3Aread%3Aemail"] {
        let response = client
            .exchange_callback(OAuthProvider::Twitch, query)
            .await
            .unwrap();
        assert_eq!(response.token, "t0k3n");
    }
}

#[tokio::test]
async fn test_list_streamers_sends_bearer_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/streamers/"))
        .and(header("authorization", "Bearer session-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "twitch": { "id": 12826, "name": "twitch" } },
            { "twitch": { "id": 141981764, "name": "twitchdev" } }
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = BeaconClient::new(mock_server.uri()).unwrap();
    let streamers = client.list_streamers("session-token").await.unwrap();

    assert_eq!(
        streamers,
        vec![
            Streamer {
                twitch: TwitchAccount {
                    id: 12826,
                    name: "twitch".to_string()
                }
            },
            Streamer {
                twitch: TwitchAccount {
                    id: 141981764,
                    name: "twitchdev".to_string()
                }
            },
        ]
    );
}

#[tokio::test]
async fn test_auth_endpoints_are_anonymous() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/auth/get_authorization_url/twitch/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "authorization_url": "https://x" })),
        )
        .mount(&mock_server)
        .await;

    let client = BeaconClient::new(mock_server.uri()).unwrap();
    client
        .get_authorization_url(OAuthProvider::Twitch)
        .await
        .unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].headers.contains_key("authorization"));
}

#[tokio::test]
async fn test_list_streamers_rejected_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/streamers/"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Signature has expired"))
        .mount(&mock_server)
        .await;

    let client = BeaconClient::new(mock_server.uri()).unwrap();
    let error = client.list_streamers("stale").await.unwrap_err();

    assert!(error.is_unauthorized());
    assert_eq!(error.status(), Some(401));
    assert!(matches!(
        error,
        ClientError::Unauthorized { message, .. } if message == "Signature has expired"
    ));
}

#[tokio::test]
async fn test_error_status_mapping() {
    let cases = [
        (400, "missing code"),
        (401, "bad state"),
        (403, "banned"),
        (404, "no such provider"),
        (502, "twitch unavailable"),
    ];

    for (status, body) in cases {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/auth/callback/twitch/"))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&mock_server)
            .await;

        let client = BeaconClient::new(mock_server.uri()).unwrap();
        let error = client
            .exchange_callback(OAuthProvider::Twitch, "?code=abc")
            .await
            .unwrap_err();

        match &error {
            ClientError::Unauthorized { message, .. } => {
                assert!(matches!(status, 401 | 403));
                assert_eq!(message, body);
            }
            ClientError::Rejected { message, .. } => {
                assert!(matches!(status, 400 | 404));
                assert_eq!(message, body);
            }
            ClientError::Server { message, .. } => {
                assert_eq!(status, 502);
                assert_eq!(message, body);
            }
            _ => panic!("unexpected error for {status}: {error:?}"),
        }
        assert_eq!(error.status(), Some(status));
        assert_eq!(error.is_rejection(), status < 500);
    }
}

#[tokio::test]
async fn test_unexpected_body_names_endpoint() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/auth/callback/twitch/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "access": "nope" })))
        .mount(&mock_server)
        .await;

    let client = BeaconClient::new(mock_server.uri()).unwrap();
    let result = client
        .exchange_callback(OAuthProvider::Twitch, "?code=abc")
        .await;

    assert!(matches!(
        result,
        Err(ClientError::UnexpectedBody {
            endpoint: "auth_callback",
            ..
        })
    ));
}
