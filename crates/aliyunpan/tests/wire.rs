//! Request shape checks against a local one-shot HTTP server.

use std::collections::HashMap;

use aliyunpan_api::headers::{MOBILE_UA, WEB_UA};
use aliyunpan_api::{ApiError, Endpoints, Reward, refresh_token, sign_in_list, sign_in_reward};
use reqwest::Client;
use serde_json::{Value, json};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A request as seen by the server. Header names are lowercased.
#[derive(Debug)]
struct CapturedRequest {
    method: String,
    path: String,
    headers: HashMap<String, String>,
    body: Value,
}

/// Accept a single connection, record the request, answer with `response_body`.
async fn serve_once(response_body: &'static str) -> (String, JoinHandle<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();

        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];
        let header_end = loop {
            let n = stream.read(&mut chunk).await.unwrap();
            assert!(n > 0, "connection closed before headers were complete");
            buf.extend_from_slice(&chunk[..n]);
            if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
        };

        let head = String::from_utf8_lossy(&buf[..header_end]).into_owned();
        let mut lines = head.split("\r\n");
        let mut request_line = lines.next().unwrap().split(' ');
        let method = request_line.next().unwrap().to_string();
        let path = request_line.next().unwrap().to_string();
        let headers: HashMap<String, String> = lines
            .filter_map(|line| line.split_once(':'))
            .map(|(k, v)| (k.trim().to_ascii_lowercase(), v.trim().to_string()))
            .collect();

        let content_length: usize = headers
            .get("content-length")
            .map(|v| v.parse().unwrap())
            .unwrap_or(0);
        while buf.len() < header_end + content_length {
            let n = stream.read(&mut chunk).await.unwrap();
            assert!(n > 0, "connection closed before body was complete");
            buf.extend_from_slice(&chunk[..n]);
        }
        let body = serde_json::from_slice(&buf[header_end..header_end + content_length]).unwrap();

        let response = format!(
            "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            response_body.len(),
            response_body
        );
        stream.write_all(response.as_bytes()).await.unwrap();
        stream.shutdown().await.ok();

        CapturedRequest {
            method,
            path,
            headers,
            body,
        }
    });

    (base, handle)
}

fn client() -> Client {
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();
    Client::new()
}

#[tokio::test]
async fn test_refresh_token_request() {
    let (base, server) = serve_once(
        r#"{"access_token":"at-1","refresh_token":"rt-2","expire_time":"2024-01-01T00:00:00Z","nick_name":"tester"}"#,
    )
    .await;
    let endpoints = Endpoints::with_bases(&base, &base);

    let info = refresh_token(&client(), &endpoints, "rt-1").await.unwrap();
    let request = server.await.unwrap();

    assert_eq!(request.method, "POST");
    assert_eq!(request.path, "/v2/account/token");
    assert_eq!(
        request.body,
        json!({"refresh_token": "rt-1", "grant_type": "refresh_token"})
    );
    assert_eq!(
        request.headers["content-type"],
        "application/json;charset=UTF-8"
    );
    assert_eq!(request.headers["origin"], "https://www.aliyundrive.com");
    assert_eq!(request.headers["referer"], "https://www.aliyundrive.com/");
    assert_eq!(request.headers["user-agent"], WEB_UA);
    assert!(!request.headers.contains_key("authorization"));

    assert_eq!(info.access_token, "at-1");
    assert_eq!(info.refresh_token, "rt-2");
    assert_eq!(info.nick_name, "tester");
}

#[tokio::test]
async fn test_sign_in_list_request() {
    let (base, server) = serve_once(
        r#"{"success":true,"result":{"signInCount":1,"signInLogs":[{"day":1,"status":"normal","isReward":true}]}}"#,
    )
    .await;
    let endpoints = Endpoints::with_bases(&base, &base);

    let response = sign_in_list(&client(), &endpoints, "at-raw").await.unwrap();
    let request = server.await.unwrap();

    assert_eq!(request.method, "POST");
    assert_eq!(request.path, "/v1/activity/sign_in_list");
    assert_eq!(request.body, json!({}));
    // Sent as-is, no "Bearer" prefix.
    assert_eq!(request.headers["authorization"], "at-raw");
    assert_eq!(request.headers["content-type"], "application/json");
    assert_eq!(request.headers["user-agent"], MOBILE_UA);

    assert_eq!(response.result.sign_in_count, 1);
    assert_eq!(response.result.sign_in_logs.len(), 1);
    assert!(response.raw.contains("signInLogs"));
}

#[tokio::test]
async fn test_sign_in_reward_request() {
    let (base, server) = serve_once(
        r#"{"success":true,"result":{"name":"7-day VIP","description":"membership"}}"#,
    )
    .await;
    let endpoints = Endpoints::with_bases(&base, &base);

    let reward = sign_in_reward(&client(), &endpoints, "at-raw", 12)
        .await
        .unwrap();
    let request = server.await.unwrap();

    assert_eq!(request.method, "POST");
    assert_eq!(request.path, "/v1/activity/sign_in_reward");
    assert_eq!(request.body, json!({"signInDay": 12}));
    assert_eq!(request.headers["authorization"], "at-raw");
    assert_eq!(request.headers["user-agent"], MOBILE_UA);

    assert_eq!(reward, Reward::new("7-day VIP", "membership"));
}

#[tokio::test]
async fn test_sign_in_reward_null_result() {
    let (base, server) =
        serve_once(r#"{"success":false,"code":"SignInDayNotReached","result":null}"#).await;
    let endpoints = Endpoints::with_bases(&base, &base);

    let err = sign_in_reward(&client(), &endpoints, "at", 30)
        .await
        .unwrap_err();
    server.await.unwrap();

    assert!(matches!(
        err,
        ApiError::MissingResult { ref code, .. } if code == "SignInDayNotReached"
    ));
}
