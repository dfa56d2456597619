// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use smokrs::utils::preflight::{wait_for_target, PreflightError};
use std::time::Duration;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_answering_target_is_reachable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    wait_for_target(
        &server.uri(),
        Duration::from_secs(5),
        Duration::from_millis(50),
    )
    .await
    .expect("answering server should pass preflight");
}

#[tokio::test]
async fn test_server_error_still_counts_as_reachable() {
    // Preflight only asks whether the front end answers at all
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    wait_for_target(
        &server.uri(),
        Duration::from_secs(5),
        Duration::from_millis(50),
    )
    .await
    .expect("a 500 is still an answer");
}

#[tokio::test]
async fn test_closed_port_times_out() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().expect("addr").port();
    drop(listener);

    let url = format!("http://127.0.0.1:{}/", port);
    let err = wait_for_target(&url, Duration::from_millis(300), Duration::from_millis(50))
        .await
        .expect_err("closed port must not pass preflight");

    assert!(matches!(err, PreflightError::Unreachable { .. }));
}
