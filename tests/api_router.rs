//! Dispatch through the API router with raw JSON arguments

mod common;

use common::harness;
use list_navigation::api::ErrorBody;
use list_navigation::{ApiRouter, ErrorDisposition, ListNavError, StaleField};
use serde_json::{Value, json};
use tokio_test::{assert_err, assert_ok};

#[tokio::test]
async fn direct_get_page_from_json() {
    let h = harness(false);
    let router = ApiRouter::standard(h.navigator.clone());

    let args = json!({
        "listRef": { "listType": "pages", "pageSize": 10 },
        "pageToken": "B"
    });
    let response = assert_ok!(router.dispatch(&h.conversation, "ListNav.getPage", args).await);

    assert_eq!(response["itemCount"], json!(10));
    assert_eq!(response["items"][0], json!("B1"));
    assert_eq!(response["prevPageToken"], json!("A"));
    assert_eq!(response["pageToken"], json!("B"));
    assert_eq!(response["nextPageToken"], json!("C"));
}

#[tokio::test]
async fn session_flow_from_json() {
    let h = harness(true);
    let router = ApiRouter::standard(h.navigator.clone());
    let conv = &h.conversation;

    let opened = assert_ok!(
        router
            .dispatch(conv, "openList", json!({ "listType": "pages", "pageSize": 10 }))
            .await
    );
    assert_eq!(opened["listRef"]["listType"], json!("pages"));

    let first = assert_ok!(router.dispatch(conv, "ListNav.getPage", Value::Null).await);
    assert_eq!(first["pageToken"], json!("A"));

    let queued = assert_ok!(router.dispatch(conv, "ListNav.nextPage", Value::Null).await);
    assert_eq!(queued["upcomingPageToken"], json!("B"));

    let second = assert_ok!(router.dispatch(conv, "ListNav.getPage", json!({})).await);
    assert_eq!(second["pageToken"], json!("B"));
    assert_eq!(second["items"][9], json!("B10"));

    let back = assert_ok!(router.dispatch(conv, "ListNav.previousPage", json!({})).await);
    assert_eq!(back["upcomingPageToken"], json!("A"));
}

#[tokio::test]
async fn open_list_uses_the_default_page_size() {
    let h = harness(true);
    let router = ApiRouter::standard(h.navigator.clone());

    let opened = assert_ok!(
        router
            .dispatch(&h.conversation, "ListNav.openList", json!({ "listType": "pages" }))
            .await
    );
    assert_eq!(
        opened["listRef"]["pageSize"],
        json!(h.navigator.default_page_size().get())
    );
}

#[tokio::test]
async fn unknown_api_is_rejected() {
    let h = harness(false);
    let router = ApiRouter::standard(h.navigator.clone());

    let err = assert_err!(router.dispatch(&h.conversation, "ListNav.jumpTo", json!({})).await);
    assert!(matches!(err, ListNavError::UnknownApi(_)));
    assert_eq!(err.disposition(), ErrorDisposition::Rejected);
}

#[tokio::test]
async fn malformed_arguments_are_rejected_before_the_navigator() {
    let h = harness(false);
    let router = ApiRouter::standard(h.navigator.clone());

    let zero = json!({ "listRef": { "listType": "pages", "pageSize": 0 } });
    let err = assert_err!(router.dispatch(&h.conversation, "ListNav.getPage", zero).await);
    assert!(matches!(err, ListNavError::InvalidArguments { .. }));

    let extra = json!({ "pageToken": "A", "page": 2 });
    let err = assert_err!(router.dispatch(&h.conversation, "ListNav.getPage", extra).await);
    assert!(matches!(err, ListNavError::InvalidArguments { .. }));

    assert_eq!(h.provider.calls(), 0);
}

#[tokio::test]
async fn stale_error_body_asks_for_a_retry() {
    let h = harness(true);
    let router = ApiRouter::standard(h.navigator.clone());
    let conv = &h.conversation;

    assert_ok!(router.dispatch(conv, "ListNav.openList", json!({ "listType": "pages" })).await);
    assert_ok!(router.dispatch(conv, "ListNav.getPage", Value::Null).await);

    let err = assert_err!(
        router
            .dispatch(conv, "ListNav.getPage", json!({ "pageToken": "C" }))
            .await
    );
    assert!(matches!(
        err,
        ListNavError::StaleArgument { field: StaleField::PageToken, .. }
    ));

    let body = assert_ok!(serde_json::to_value(ErrorBody::from(&err)));
    assert_eq!(body["disposition"], json!("retry"));
    assert!(body["error"].as_str().is_some_and(|msg| !msg.is_empty()));
}

#[test]
fn catalog_lists_every_operation() {
    let h = harness(false);
    let router = ApiRouter::standard(h.navigator.clone());

    let catalog = router.describe();
    let names: Vec<&str> = catalog.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "ListNav.getPage",
            "ListNav.openList",
            "ListNav.nextPage",
            "ListNav.previousPage"
        ]
    );
    assert!(catalog.iter().all(|d| d.input_schema.is_object()));
}
