mod common;

use common::{LIVE_PATH, SANDBOX_PATH, confirmer_for};
use paypal_confirm::ConfirmError;
use std::collections::BTreeMap;
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_lookup_posts_form_to_live_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(LIVE_PATH))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string("cmd=_notify-synch&tx=id&at=token"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("SUCCESS\nfirst_name=Joe+Black\nitem_number=\n"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let result = confirmer_for(&server)
        .confirm_via_lookup("id", "token", false)
        .await
        .unwrap();

    assert!(result.confirmed);
    assert_eq!(
        result.details,
        BTreeMap::from([
            ("first_name".to_string(), "Joe Black".to_string()),
            ("item_number".to_string(), String::new()),
        ])
    );
}

#[tokio::test]
async fn test_lookup_uses_sandbox_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SANDBOX_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("FAIL\nError: 4003"))
        .expect(1)
        .mount(&server)
        .await;

    let result = confirmer_for(&server)
        .confirm_via_lookup("id", "token", true)
        .await
        .unwrap();

    assert!(!result.confirmed);
    assert!(result.details.is_empty());
}

#[tokio::test]
async fn test_lookup_non_200_is_request_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(404).set_body_string("SUCCESS"))
        .mount(&server)
        .await;

    let err = confirmer_for(&server)
        .confirm_via_lookup("id", "token", false)
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ConfirmError::RequestError("PayPal returned a 404 status".to_string())
    );
}

#[tokio::test]
async fn test_lookup_rejects_empty_input_before_sending() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("SUCCESS"))
        .expect(0)
        .mount(&server)
        .await;

    let confirmer = confirmer_for(&server);
    for (tx, token) in [("", "token"), ("id", "")] {
        let err = confirmer.confirm_via_lookup(tx, token, false).await.unwrap_err();
        assert!(matches!(err, ConfirmError::InvalidData(_)));
    }
}
