//! TCP transport tests.
//!
//! Each test runs a throwaway consumer on an ephemeral port.

use std::time::Duration;

use signbridge_foundation::ClipId;
use signbridge_transport::{DEFAULT_CONNECT_TIMEOUT, PlaySequence, TcpTransport, Transport};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::net::{TcpListener, TcpStream};

fn message(clips: &[&str]) -> PlaySequence {
    PlaySequence::new(clips.iter().map(|c| ClipId::new(*c)).collect())
}

async fn read_line(stream: TcpStream) -> (String, BufReader<TcpStream>) {
    let mut reader = BufReader::new(stream);
    let mut line = String::new();
    reader.read_line(&mut line).await.unwrap();
    (line, reader)
}

#[tokio::test]
async fn connects_lazily() {
    let transport = TcpTransport::new("127.0.0.1:1");
    assert!(!transport.is_connected());
    assert_eq!(transport.endpoint(), "127.0.0.1:1");
}

#[tokio::test]
async fn consumer_receives_newline_delimited_json() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let consumer = tokio::spawn(async move {
        let (socket, _) = listener.accept().await.unwrap();
        let (line, _) = read_line(socket).await;
        line
    });

    let mut transport = TcpTransport::new(addr.to_string());
    transport.send(&message(&["today.bvh", "you.bvh"])).await.unwrap();

    let line = consumer.await.unwrap();
    assert_eq!(
        line,
        "{\"type\":\"play_sequence\",\"clips\":[\"today.bvh\",\"you.bvh\"]}\n"
    );
}

#[tokio::test]
async fn first_send_after_consumer_restart_reaches_new_connection() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let mut transport = TcpTransport::new(addr.to_string());

    let (sent, accepted) = tokio::join!(async { transport.send(&message(&["i.bvh"])).await }, listener.accept());
    sent.unwrap();
    let (first, reader) = read_line(accepted.unwrap().0).await;
    assert!(first.contains("i.bvh"));

    // Consumer goes away; its replacement listens on the same socket
    drop(reader);
    tokio::time::sleep(Duration::from_millis(20)).await;

    let (sent, accepted) = tokio::time::timeout(Duration::from_secs(5), async {
        tokio::join!(async { transport.send(&message(&["you.bvh"])).await }, listener.accept())
    })
    .await
    .expect("frame never reached a new connection");
    sent.unwrap();
    assert!(transport.is_connected());

    let (second, _) = read_line(accepted.unwrap().0).await;
    assert_eq!(PlaySequence::from_json(second.trim_end()).unwrap().clips, vec!["you.bvh"]);
}

#[tokio::test]
async fn connect_timeout_is_configurable() {
    let transport = TcpTransport::new("127.0.0.1:1");
    assert_eq!(transport.connect_timeout(), DEFAULT_CONNECT_TIMEOUT);

    let transport = transport.with_connect_timeout(Duration::from_millis(50));
    assert_eq!(transport.connect_timeout(), Duration::from_millis(50));
}

#[tokio::test]
async fn refused_connection_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let mut transport =
        TcpTransport::new(addr.to_string()).with_connect_timeout(Duration::from_millis(500));
    let err = transport.send(&message(&["i.bvh"])).await.unwrap_err();

    assert!(err.is_transport());
    assert!(!transport.is_connected());
}

#[tokio::test]
async fn failed_send_does_not_poison_transport() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let mut transport = TcpTransport::new(addr.to_string());
    assert!(transport.send(&message(&["i.bvh"])).await.is_err());

    // Consumer comes up on the same port
    let listener = TcpListener::bind(addr).await.unwrap();
    let consumer = tokio::spawn(async move {
        let (socket, _) = listener.accept().await.unwrap();
        read_line(socket).await.0
    });

    transport.send(&message(&["you.bvh"])).await.unwrap();
    assert!(consumer.await.unwrap().contains("you.bvh"));
}
