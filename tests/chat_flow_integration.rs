//! End-to-end chat flow tests
//!
//! Drives `ChatController` over a real `HttpTransport` against a `wiremock`
//! backend and checks what ends up in the session list.

use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use chatdesk::chat::{ChatController, Role, FALLBACK_REPLY};
use chatdesk::transport::create_transport;

mod common;

async fn controller_for(server: &MockServer) -> ChatController {
    let transport = create_transport(&common::backend_config(&server.uri())).unwrap();
    ChatController::new(transport, 30)
}

async fn posted_bodies(server: &MockServer) -> Vec<Value> {
    server
        .received_requests()
        .await
        .expect("request recording enabled")
        .iter()
        .map(|request| serde_json::from_slice(&request.body).expect("json body"))
        .collect()
}

#[tokio::test]
async fn test_first_message_creates_titled_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .and(body_partial_json(json!({"message": "Hi"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"reply": "Hello! How can I help?"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut controller = controller_for(&server).await;
    let outcome = controller.send_message("Hi").await.unwrap();
    assert!(outcome.is_delivered());

    let state = controller.state();
    assert_eq!(state.sessions().len(), 1);
    let session = state.current_session().unwrap();
    assert_eq!(session.title(), "Hi");
    assert_eq!(session.messages().len(), 2);
    assert_eq!(session.messages()[0].role(), Role::User);
    assert_eq!(session.messages()[1].content(), "Hello! How can I help?");
    assert!(!state.is_loading());

    let bodies = posted_bodies(&server).await;
    assert_eq!(bodies[0]["session_id"], session.id().as_str());
}

#[tokio::test]
async fn test_long_first_message_title_is_truncated() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"reply": "ok"})))
        .mount(&server)
        .await;

    let mut controller = controller_for(&server).await;
    controller
        .send_message("My laptop keeps restarting every time I open Teams")
        .await
        .unwrap();

    let session = controller.state().current_session().unwrap();
    assert_eq!(session.title(), "My laptop keeps restarting eve...");
}

#[tokio::test]
async fn test_follow_ups_reuse_session_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"reply": "noted"})))
        .expect(3)
        .mount(&server)
        .await;

    let mut controller = controller_for(&server).await;
    controller.send_message("first").await.unwrap();
    controller.send_message("second").await.unwrap();
    controller.send_message("third").await.unwrap();

    let session = controller.state().current_session().unwrap();
    assert_eq!(session.title(), "first");
    assert_eq!(session.messages().len(), 6);

    let bodies = posted_bodies(&server).await;
    assert!(bodies
        .iter()
        .all(|body| body["session_id"] == session.id().as_str()));
}

#[tokio::test]
async fn test_new_chat_gets_distinct_session_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"reply": "ok"})))
        .mount(&server)
        .await;

    let mut controller = controller_for(&server).await;
    controller.send_message("printer").await.unwrap();
    controller.create_new_session();
    controller.send_message("scanner").await.unwrap();

    let bodies = posted_bodies(&server).await;
    assert_eq!(bodies.len(), 2);
    assert_ne!(bodies[0]["session_id"], bodies[1]["session_id"]);

    let titles: Vec<&str> = controller
        .state()
        .sessions()
        .iter()
        .map(|s| s.title())
        .collect();
    assert_eq!(titles, vec!["scanner", "printer"]);
}

#[tokio::test]
async fn test_server_error_appends_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut controller = controller_for(&server).await;
    let outcome = controller.send_message("Hi").await.unwrap();
    assert!(!outcome.is_delivered());

    let messages = controller.state().current_session().unwrap().messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[1].role(), Role::Assistant);
    assert_eq!(messages[1].content(), FALLBACK_REPLY);
    assert!(!controller.state().is_loading());
}

#[tokio::test]
async fn test_malformed_reply_appends_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"detail": "oops"})))
        .mount(&server)
        .await;

    let mut controller = controller_for(&server).await;
    let outcome = controller.send_message("Hi").await.unwrap();
    assert_eq!(outcome.assistant_text(), FALLBACK_REPLY);
}

#[tokio::test]
async fn test_unreachable_backend_appends_fallback() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let transport = create_transport(&common::backend_config(&uri)).unwrap();
    let mut controller = ChatController::new(transport, 30);
    let outcome = controller.send_message("Hi").await.unwrap();
    assert_eq!(outcome.assistant_text(), FALLBACK_REPLY);
    assert_eq!(
        controller.state().current_session().unwrap().messages().len(),
        2
    );
}

#[tokio::test]
async fn test_reply_lands_in_original_session_after_switch() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"reply": "Try WPA2."})))
        .mount(&server)
        .await;

    let mut controller = controller_for(&server).await;
    let pending = controller.begin_send("Wi-Fi password rejected").unwrap();
    let origin = pending.session_id().clone();

    let other = controller.create_new_session();
    let reply = controller.deliver(&pending).await;
    controller.complete_send(pending, reply);

    assert_eq!(controller.state().current_session_id(), Some(&other));
    assert!(controller.state().current_session().unwrap().is_empty());

    let origin_session = controller.state().sessions().get(&origin).unwrap();
    assert_eq!(origin_session.messages().len(), 2);
    assert_eq!(origin_session.messages()[1].content(), "Try WPA2.");
}
