//! Mock-backed tests for the fetch operation's response handling.

use httptest::{all_of, matchers::*, responders::*, Expectation, Server};

use net_identity::{fetch_identity_from, ClientConfig, FetchError};

#[tokio::test]
async fn test_fetch_parses_successful_response() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/"))
            .respond_with(status_code(200).body(r#"{"ip":"1.2.3.4","city":"Testville"}"#)),
    );

    let result = fetch_identity_from(&ClientConfig::default(), &server.url("/").to_string())
        .await
        .expect("mocked success should not error");

    let record = result.expect("2xx with a body should produce a record");
    assert_eq!(record.ip.as_deref(), Some("1.2.3.4"));
    assert_eq!(record.city.as_deref(), Some("Testville"));
    assert!(record.hostname.is_none());
    assert!(record.region.is_none());
    assert!(record.country.is_none());
    assert!(record.timezone.is_none());
    assert!(record.loc.is_none());
}

#[tokio::test]
async fn test_fetch_sends_json_headers() {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/"),
            request::headers(contains(("accept", "application/json"))),
            request::headers(contains(("content-type", "application/json"))),
        ])
        .respond_with(status_code(200).body(r#"{"ip":"1.2.3.4"}"#)),
    );

    let result = fetch_identity_from(&ClientConfig::default(), &server.url("/").to_string())
        .await
        .expect("mocked success should not error");
    assert!(result.is_some());
}

#[tokio::test]
async fn test_fetch_returns_absent_on_server_error() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/"))
            .respond_with(status_code(500).body("Internal Server Error")),
    );

    let result = fetch_identity_from(&ClientConfig::default(), &server.url("/").to_string())
        .await
        .expect("a 500 is not a transport failure");
    assert!(result.is_none(), "non-2xx must surface as absent");
}

#[tokio::test]
async fn test_fetch_returns_absent_on_empty_body() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/"))
            .respond_with(status_code(200)),
    );

    let result = fetch_identity_from(&ClientConfig::default(), &server.url("/").to_string())
        .await
        .expect("an empty 200 is not a transport failure");
    assert!(result.is_none(), "empty body must surface as absent");
}

#[tokio::test]
async fn test_fetch_tolerates_unknown_fields() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/")).respond_with(
            status_code(200).body(
                r#"{"ip":"8.8.8.8","org":"AS15169 Google LLC","postal":"94035","timezone":"America/Los_Angeles"}"#,
            ),
        ),
    );

    let record = fetch_identity_from(&ClientConfig::default(), &server.url("/").to_string())
        .await
        .expect("unknown fields should not error")
        .expect("record should be present");
    assert_eq!(record.ip.as_deref(), Some("8.8.8.8"));
    assert_eq!(record.timezone.as_deref(), Some("America/Los_Angeles"));
}

#[tokio::test]
async fn test_fetch_rejects_malformed_body() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/"))
            .respond_with(status_code(200).body("definitely not json")),
    );

    let err = fetch_identity_from(&ClientConfig::default(), &server.url("/").to_string())
        .await
        .expect_err("garbage on a 2xx must be a parse failure");
    assert!(matches!(err, FetchError::Parse(_)), "got: {err}");
}

#[tokio::test]
async fn test_fetch_is_idempotent_against_unchanged_backend() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/"))
            .times(2)
            .respond_with(
                status_code(200).body(r#"{"ip":"1.2.3.4","city":"Testville","loc":"10.0,20.0"}"#),
            ),
    );

    let endpoint = server.url("/").to_string();
    let config = ClientConfig::default();
    let first = fetch_identity_from(&config, &endpoint)
        .await
        .expect("first call should succeed")
        .expect("first record present");
    let second = fetch_identity_from(&config, &endpoint)
        .await
        .expect("second call should succeed")
        .expect("second record present");

    // No hidden cross-call state beyond configuration
    assert_eq!(first, second);
}
