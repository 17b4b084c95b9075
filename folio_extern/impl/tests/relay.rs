use bytes::Bytes;
use folio_extern_contracts::relay::{
    RelayApiService, RelayForwardRequest, RelayResponse, RelayResponseBody,
};
use folio_extern_impl::relay::{RelayApiServiceConfig, RelayApiServiceImpl};
use folio_models::contact::Draft;
use folio_testing::relay::{spawn, ReceivedRequest, RelayBehavior, SpawnedRelay};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn accepted() {
    let (sut, relay) = make_sut(RelayBehavior::Accept).await;

    let result = sut.send_email(jane()).await.unwrap();

    assert_eq!(
        result,
        RelayResponse {
            status: 200,
            body: Some(RelayResponseBody { ok: true }),
        }
    );
    assert_eq!(
        relay.relay.received().await,
        [ReceivedRequest {
            draft: Some(jane()),
            content_type: Some("application/json".into()),
            accept: Some("application/json".into()),
        }]
    );
}

#[tokio::test]
async fn rejected() {
    let (sut, _relay) = make_sut(RelayBehavior::Reject).await;

    let result = sut.send_email(jane()).await.unwrap();

    assert_eq!(
        result,
        RelayResponse {
            status: 200,
            body: Some(RelayResponseBody { ok: false }),
        }
    );
}

#[tokio::test]
async fn server_error() {
    let (sut, _relay) = make_sut(RelayBehavior::Fail).await;

    let result = sut.send_email(jane()).await.unwrap();

    assert_eq!(result.status, 500);
    assert!(!result.is_success_status());
}

#[tokio::test]
async fn malformed_body() {
    let (sut, _relay) = make_sut(RelayBehavior::Malformed).await;

    let result = sut.send_email(jane()).await.unwrap();

    assert_eq!(
        result,
        RelayResponse {
            status: 200,
            body: None,
        }
    );
}

#[tokio::test]
async fn unreachable() {
    // Bind and immediately drop a listener to get a port nothing listens on.
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let endpoint = format!("http://127.0.0.1:{port}/send_email").parse().unwrap();
    let sut = RelayApiServiceImpl::new(RelayApiServiceConfig::new(endpoint)).unwrap();

    let result = sut.send_email(jane()).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn forward_passes_request_through() {
    let (sut, relay) = make_sut(RelayBehavior::Fail).await;
    let body = Bytes::from_static(br#"{"firstName":"Jane","the_email":"Hello there"}"#);

    let result = sut
        .forward(RelayForwardRequest {
            content_type: Some("application/json".into()),
            accept: Some("application/json".into()),
            body,
        })
        .await
        .unwrap();

    assert_eq!(result.status, 500);
    assert_eq!(result.content_type.as_deref(), Some("application/json"));
    assert_eq!(&result.body[..], br#"{"ok":false}"#);

    let received = relay.relay.received().await;
    assert_eq!(received.len(), 1);
    assert_eq!(
        received[0].draft,
        Some(Draft {
            first_name: "Jane".into(),
            message: "Hello there".into(),
            ..Default::default()
        })
    );
}

#[tokio::test]
async fn forward_without_headers_accepts_anything() {
    let (sut, relay) = make_sut(RelayBehavior::Malformed).await;

    let result = sut
        .forward(RelayForwardRequest {
            content_type: None,
            accept: None,
            body: Bytes::new(),
        })
        .await
        .unwrap();

    assert_eq!(result.status, 200);
    assert_eq!(result.content_type.as_deref(), Some("text/html"));

    let received = relay.relay.received().await;
    assert_eq!(
        received,
        [ReceivedRequest {
            draft: None,
            content_type: None,
            accept: Some("*/*".into()),
        }]
    );
}

async fn make_sut(behavior: RelayBehavior) -> (RelayApiServiceImpl, SpawnedRelay) {
    let relay = spawn(behavior).await.unwrap();
    let config = RelayApiServiceConfig::new(relay.send_email_url());
    (RelayApiServiceImpl::new(config).unwrap(), relay)
}

fn jane() -> Draft {
    Draft {
        first_name: "Jane".into(),
        last_name: "Doe".into(),
        email: "jane@x.com".into(),
        message: "Hello there, great site!".into(),
        honeypot: String::new(),
    }
}
