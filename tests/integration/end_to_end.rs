//! Text in, clip sequences out, over a real socket.

use std::io::{BufRead, BufReader};
use std::net::TcpListener;
use std::thread;

use futures_util::StreamExt;
use signbridge_runtime::{RuntimeConfig, Session};
use signbridge_transport::{ConsumerTransport, PlaySequence};

#[test]
fn configured_session_delivers_over_websocket() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.set_nonblocking(true).unwrap();
    let endpoint = format!("ws://{}", listener.local_addr().unwrap());

    let consumer = thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::from_std(listener).unwrap();
            let (stream, _) = listener.accept().await.unwrap();
            let mut socket = tokio_tungstenite::accept_async(stream).await.unwrap();
            let mut received = Vec::new();
            for _ in 0..2 {
                let text = socket.next().await.unwrap().unwrap().into_text().unwrap();
                received.push(PlaySequence::from_json(text.as_str()).unwrap());
            }
            received
        })
    });

    let config = RuntimeConfig {
        endpoint,
        ..RuntimeConfig::default()
    };
    let mut session = Session::from_config(&config).unwrap();
    assert!(matches!(session.transport(), ConsumerTransport::WebSocket(_)));

    assert!(session.submit("You love school today").is_sent());
    assert!(session.submit("I went home").is_sent());

    let received = consumer.join().unwrap();
    assert_eq!(
        received[0].clips,
        vec!["today.bvh", "school.bvh", "you.bvh", "love.bvh"]
    );
    assert_eq!(received[1].clips, vec!["home.bvh", "i.bvh", "go.bvh"]);
}

#[test]
fn configured_session_delivers_over_tcp() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let endpoint = listener.local_addr().unwrap().to_string();

    let consumer = thread::spawn(move || {
        let (socket, _) = listener.accept().unwrap();
        BufReader::new(socket)
            .lines()
            .take(2)
            .map(|line| PlaySequence::from_json(&line.unwrap()).unwrap())
            .collect::<Vec<_>>()
    });

    let config = RuntimeConfig {
        endpoint,
        ..RuntimeConfig::default()
    };
    let mut session = Session::from_config(&config).unwrap();
    assert!(matches!(session.transport(), ConsumerTransport::Tcp(_)));

    assert!(session.submit("You love school today").is_sent());
    assert!(session.submit("").translation.is_empty());
    assert!(session.submit("I went home").is_sent());

    let received = consumer.join().unwrap();
    assert_eq!(
        received[0].clips,
        vec!["today.bvh", "school.bvh", "you.bvh", "love.bvh"]
    );
    assert_eq!(received[1].clips, vec!["home.bvh", "i.bvh", "go.bvh"]);
}

#[test]
fn unreachable_consumer_reports_failure() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let endpoint = listener.local_addr().unwrap().to_string();
    drop(listener);

    let config = RuntimeConfig {
        endpoint,
        connect_timeout_ms: 200,
        ..RuntimeConfig::default()
    };
    let mut session = Session::from_config(&config).unwrap();

    let delivery = session.submit("I eat");
    assert!(delivery.is_failed());
    assert_eq!(delivery.translation.gloss, vec!["I", "EAT"]);
}

#[test]
fn disabled_sending_never_connects() {
    let config = RuntimeConfig {
        endpoint: "127.0.0.1:1".to_string(),
        send: false,
        ..RuntimeConfig::default()
    };
    let mut session = Session::from_config(&config).unwrap();

    let delivery = session.submit("I eat");
    assert!(!delivery.is_sent());
    assert!(!delivery.is_failed());
    assert!(!session.transport().is_connected());
}
