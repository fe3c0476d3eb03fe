use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use authbench_core::{
    ErrorPolicy, GeneralTransport, HttpTarget, TargetConfig, TokenPlacement, WebSocketTarget,
};
use authbench_runner::{Runner, RunnerConfig, Transport};
use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpListener;
use tokio_tungstenite::{
    accept_hdr_async,
    tungstenite::{
        handshake::server::{Request, Response},
        Message,
    },
};
use url::Url;
use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Echo server that accepts one connection and answers the first
/// `replies` text messages, then closes. Returns the address and the query
/// string seen during the upgrade.
async fn start_echo_server(replies: usize) -> (String, Arc<std::sync::Mutex<Option<String>>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let seen_query = Arc::new(std::sync::Mutex::new(None));
    let seen = seen_query.clone();

    tokio::spawn(async move {
        let (socket, _) = listener.accept().await.unwrap();
        let callback = |request: &Request, response: Response| {
            *seen.lock().unwrap() = request.uri().query().map(str::to_string);
            Ok(response)
        };
        let mut ws = accept_hdr_async(socket, callback).await.unwrap();
        let mut answered = 0;
        while let Some(Ok(message)) = ws.next().await {
            if let Message::Text(text) = message {
                if answered == replies {
                    let _ = ws.close(None).await;
                    break;
                }
                ws.send(Message::Text(format!("echo: {text}"))).await.unwrap();
                answered += 1;
            }
        }
    });

    (format!("ws://{addr}/v1"), seen_query)
}

fn websocket_target(url: &str) -> TargetConfig {
    TargetConfig::WebSocket(WebSocketTarget {
        url: Url::parse(url).unwrap(),
        ..Default::default()
    })
}

fn http_target(url: &str) -> TargetConfig {
    TargetConfig::Http(HttpTarget {
        url: Url::parse(url).unwrap(),
        ..Default::default()
    })
}

fn runner(calls: usize, on_error: ErrorPolicy) -> Runner {
    Runner::new(RunnerConfig { calls, on_error })
}

#[tokio::test]
async fn websocket_run_reuses_one_connection() {
    let (url, seen_query) = start_echo_server(usize::MAX).await;
    let client = reqwest::Client::new();
    let mut transport = Transport::from_target(&websocket_target(&url), &client).unwrap();
    assert!(transport.has_handshake());

    let results = runner(50, ErrorPolicy::Abort).run(&mut transport).await.unwrap();
    assert_eq!(results.subsequent_calls.len(), 50);
    assert!(results.failed_calls.is_empty());
    assert_eq!(seen_query.lock().unwrap().as_deref(), Some("token=1234"));
}

#[tokio::test]
async fn websocket_close_mid_run_aborts() {
    // initial call + 3 steady calls get answered, the 5th sees a close
    let (url, _) = start_echo_server(4).await;
    let client = reqwest::Client::new();
    let mut transport = Transport::from_target(&websocket_target(&url), &client).unwrap();

    let err = runner(10, ErrorPolicy::Abort)
        .run(&mut transport)
        .await
        .unwrap_err();
    assert!(err.is_transport());
}

#[tokio::test]
async fn websocket_close_mid_run_is_recorded() {
    let (url, _) = start_echo_server(4).await;
    let client = reqwest::Client::new();
    let mut transport = Transport::from_target(&websocket_target(&url), &client).unwrap();

    let results = runner(10, ErrorPolicy::Record)
        .run(&mut transport)
        .await
        .unwrap();
    assert_eq!(results.subsequent_calls.len(), 10);
    assert_eq!(results.failed_calls.len(), 7);
    assert_eq!(results.failed_calls[0].index, 3);
    assert_eq!(results.successful_calls().len(), 3);
}

#[tokio::test]
async fn websocket_refused_connection_is_fatal() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = reqwest::Client::new();
    let target = websocket_target(&format!("ws://{addr}/v1"));
    let mut transport = Transport::from_target(&target, &client).unwrap();
    let err = runner(5, ErrorPolicy::Record)
        .run(&mut transport)
        .await
        .unwrap_err();
    assert!(err.is_transport());
}

#[tokio::test]
async fn http_run_sends_authorization_header_every_call() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/hello"))
        .and(header("Authorization", "1234"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Hello, from hello http api route."))
        .expect(21)
        .mount(&server)
        .await;

    let client = reqwest::Client::new();
    let target = http_target(&format!("{}/hello", server.uri()));
    let mut transport = Transport::from_target(&target, &client).unwrap();
    assert!(!transport.has_handshake());

    let results = runner(20, ErrorPolicy::Abort).run(&mut transport).await.unwrap();
    assert_eq!(results.connect_and_auth, 0.0);
    assert_eq!(results.subsequent_calls.len(), 20);
    assert_eq!(transport.name(), "httpapi");
}

#[tokio::test]
async fn http_error_status_is_not_a_transport_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let client = reqwest::Client::new();
    let mut transport =
        Transport::from_target(&http_target(&format!("{}/hello", server.uri())), &client).unwrap();
    let results = runner(3, ErrorPolicy::Abort).run(&mut transport).await.unwrap();
    assert_eq!(results.subsequent_calls.len(), 3);
}

#[tokio::test]
async fn http_token_can_travel_in_query() {
    let server = MockServer::start().await;
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    Mock::given(method("GET"))
        .and(wiremock::matchers::query_param("token", "1234"))
        .respond_with(move |_: &wiremock::Request| {
            counter.fetch_add(1, Ordering::SeqCst);
            ResponseTemplate::new(200)
        })
        .mount(&server)
        .await;

    let client = reqwest::Client::new();
    let target = TargetConfig::Http(HttpTarget {
        url: Url::parse(&format!("{}/hello", server.uri())).unwrap(),
        token_placement: TokenPlacement::Query("token".to_string()),
        ..Default::default()
    });
    let mut transport = Transport::from_target(&target, &client).unwrap();
    runner(4, ErrorPolicy::Abort).run(&mut transport).await.unwrap();
    assert_eq!(hits.load(Ordering::SeqCst), 5);
}
