// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for StorefrontApi against a scripted transport.

#![allow(clippy::unwrap_used)]

use serde_json::json;
use sf_core::forms::{
    Credentials, Feedback, ProfileUpdate, RatingSubmission, SalesRegistration, UserRegistration,
    VendorQuery, VendorRegistration, VendorUpdate,
};
use sf_core::{Action, AppState, FilePart, Payload, ResourceRef, User};
use yare::parameterized;

use crate::error::ClientError;
use crate::notice::NoticeLog;
use crate::store::SessionStore;
use crate::test_helpers::mock_api;
use crate::toggle::{OptimisticHandle, ToggleOutcome};
use crate::transport::{Method, TransportError};

#[tokio::test]
async fn categories_map_domain_key() {
    let (api, mock) = mock_api();
    mock.respond_json(json!({"categories": [{"id": 1, "name": "Grocery"}]}));

    let categories = api.categories().await.unwrap();

    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].id, 1);
    assert_eq!(categories[0].name, "Grocery");
    assert_eq!(mock.last_request().url, "http://test.local/api/categories");
}

#[parameterized(
    empty_object = { json!({}) },
    null_key = { json!({"categories": null}) },
    wrong_type = { json!({"categories": "oops"}) },
    success_only = { json!({"success": true, "message": "ok"}) },
)]
fn missing_lists_are_empty(body: serde_json::Value) {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();
    rt.block_on(async {
        let (api, mock) = mock_api();
        mock.respond_json(body);
        assert!(api.categories().await.unwrap().is_empty());
    });
}

#[tokio::test]
async fn states_and_cities_are_strings() {
    let (api, mock) = mock_api();
    mock.respond_json(json!({"states": ["Goa", "Kerala"]}));
    mock.respond_json(json!({"cities": ["Panaji"]}));

    assert_eq!(api.states().await.unwrap(), vec!["Goa", "Kerala"]);
    assert_eq!(api.cities("Goa").await.unwrap(), vec!["Panaji"]);

    let req = mock.last_request();
    assert_eq!(req.query, vec![("state".to_string(), "Goa".to_string())]);
}

#[tokio::test]
async fn notifications_accept_bare_array() {
    let (api, mock) = mock_api();
    mock.respond_json(json!([{"id": 1, "title": "Sale", "message": "50% off"}]));

    let notifications = api.notifications().await.unwrap();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].message, "50% off");
}

#[tokio::test]
async fn vendors_near_posts_location() {
    let (api, mock) = mock_api();
    mock.respond_json(json!({"success": true, "data": [{"id": 3, "shop_name": "Bakery"}]}));

    let vendors = api.vendors_near("Pune", "Maharashtra").await.unwrap();
    assert_eq!(vendors[0].shop_name, "Bakery");

    let req = mock.last_request();
    assert_eq!(req.method, Method::Post);
    assert_eq!(
        req.payload,
        Payload::Json(json!({"city": "Pune", "state": "Maharashtra"}))
    );
}

#[tokio::test]
async fn vendors_by_category_sends_filters() {
    let (api, mock) = mock_api();
    mock.respond_json(json!({"data": []}));

    let query = VendorQuery::near("Pune", "Maharashtra").in_category(2, Some(5));
    api.vendors_by_category(&query).await.unwrap();

    let req = mock.last_request();
    assert!(req.url.ends_with("/vendor-category-wise"));
    assert_eq!(
        req.payload,
        Payload::Json(json!({
            "city": "Pune", "state": "Maharashtra", "category_id": 2, "subcategory_id": 5
        }))
    );
}

#[tokio::test]
async fn vendor_is_optional() {
    let (api, mock) = mock_api();
    mock.respond_json(json!({"vendor": {"id": 9, "shop_name": "Chemist"}}));
    mock.respond_json(json!({"vendor": null}));

    assert_eq!(api.vendor(9).await.unwrap().unwrap().id, 9);
    assert!(api.vendor(10).await.unwrap().is_none());
    assert!(mock.last_request().url.ends_with("/vendor/10"));
}

#[tokio::test]
async fn reviews_use_reviews_key() {
    let (api, mock) = mock_api();
    mock.respond_json(json!({"reviews": [{"id": 1, "rating": 5, "review": "Great"}]}));

    let reviews = api.reviews(3).await.unwrap();
    assert_eq!(reviews[0].review, "Great");
    assert!(mock.last_request().url.ends_with("/vendor-rating/3"));
}

#[tokio::test]
async fn invalid_rating_never_reaches_the_network() {
    let (api, mock) = mock_api();
    let rating = RatingSubmission {
        user_id: 1,
        vendor_id: 2,
        rating: 0,
        review: String::new(),
    };

    let err = api.rate_vendor(&rating).await.unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));
    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn rate_vendor_returns_server_message() {
    let (api, mock) = mock_api();
    mock.respond_json(json!({"success": true, "message": "Rating submitted"}));

    let rating = RatingSubmission {
        user_id: 1,
        vendor_id: 2,
        rating: 4,
        review: "Fresh bread".into(),
    };
    let message = api.rate_vendor(&rating).await.unwrap();
    assert_eq!(message.as_deref(), Some("Rating submitted"));
}

#[tokio::test]
async fn login_returns_user() {
    let (api, mock) = mock_api();
    mock.respond_json(json!({
        "success": true, "message": "Login successful",
        "user": {"id": 7, "name": "Asha", "city": "Pune"}
    }));

    let credentials = Credentials {
        mobile: "9999999999".into(),
        password: "secret".into(),
        device_token: None,
    };
    let user = api.login(&credentials).await.unwrap();
    assert_eq!(user.id, 7);
    assert_eq!(
        mock.last_request().payload,
        Payload::Json(json!({"mobile": "9999999999", "password": "secret"}))
    );
}

#[tokio::test]
async fn login_without_user_is_protocol_error() {
    let (api, mock) = mock_api();
    mock.respond_json(json!({"message": "Invalid credentials"}));

    let credentials = Credentials {
        mobile: "1".into(),
        password: "x".into(),
        device_token: None,
    };
    let err = api.login(&credentials).await.unwrap_err();
    assert_eq!(err.user_message(), "Invalid credentials");
}

#[tokio::test]
async fn login_requires_mobile() {
    let (api, mock) = mock_api();
    let err = api.login(&Credentials::default()).await.unwrap_err();
    assert_eq!(err.user_message(), "Mobile is required");
    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn sales_registration_requires_document() {
    let (api, mock) = mock_api();
    let form = SalesRegistration {
        name: "Ravi".into(),
        contact_number: "1".into(),
        bank_name: "SBI".into(),
        bank_account_name: "Ravi".into(),
        bank_account_number: "123".into(),
        bank_ifsc: "SBIN0001".into(),
        password: "pw".into(),
        document: None,
        passbook: None,
    };
    assert!(api.register_sales(&form).await.is_err());
    assert!(mock.requests().is_empty());

    mock.respond_json(json!({"success": true, "message": "Registered"}));
    let form = SalesRegistration {
        document: Some(FilePart::new("doc", "id.jpg", "image/jpeg", vec![1, 2])),
        ..form
    };
    api.register_sales(&form).await.unwrap();

    let req = mock.last_request();
    assert!(req.url.ends_with("/sales/register"));
    let Payload::Multipart(body) = req.payload else {
        unreachable!("sales registration is multipart");
    };
    assert_eq!(body.files()[0].field, "document_file");
}

#[tokio::test]
async fn feedback_posts_json() {
    let (api, mock) = mock_api();
    mock.respond_json(json!({"success": true, "message": "Thanks"}));

    let feedback = Feedback {
        name: "Asha".into(),
        email: "a@example.com".into(),
        subject: "Hi".into(),
        message: "Nice app".into(),
    };
    assert_eq!(
        api.send_feedback(&feedback).await.unwrap().as_deref(),
        Some("Thanks")
    );
    assert!(mock.last_request().url.ends_with("/help-feedback"));
}

#[tokio::test]
async fn about_page_reads_nested_content() {
    let (api, mock) = mock_api();
    mock.respond_json(json!({"data": {"title": "About", "content": "We list shops."}}));
    mock.respond_json(json!({}));

    assert_eq!(api.about_page().await.unwrap().content, "We list shops.");
    assert_eq!(api.about_page().await.unwrap().content, "");
}

#[tokio::test]
async fn load_bookmarks_replaces_membership() {
    let (api, mock) = mock_api();
    mock.respond_json(json!({"data": [
        {"id": 1, "user_id": 7, "vendor_id": 3},
        {"id": 2, "user_id": 7, "vendor_id": 5}
    ]}));

    let handle = OptimisticHandle::new();
    handle.replace_confirmed([ResourceRef::from(99)]);
    let count = api.load_bookmarks(&handle, 7).await.unwrap();

    assert_eq!(count, 2);
    assert_eq!(
        handle.snapshot(),
        vec![ResourceRef::from(3), ResourceRef::from(5)]
    );
    assert_eq!(
        mock.last_request().query,
        vec![("user_id".to_string(), "7".to_string())]
    );
}

#[tokio::test]
async fn toggle_bookmark_adds_with_post() {
    let (api, mock) = mock_api();
    mock.respond_json(json!({"success": true}));
    let handle = OptimisticHandle::new();
    let log = NoticeLog::new();

    let outcome = api
        .toggle_bookmark(&handle, 7, ResourceRef::from(42), &log)
        .await;

    assert!(outcome.is_confirmed());
    assert!(handle.contains(&ResourceRef::from(42)));
    let req = mock.last_request();
    assert_eq!(req.method, Method::Post);
    assert!(req.url.ends_with("/bookmark/add"));
    assert_eq!(
        req.payload,
        Payload::Json(json!({"user_id": 7, "vendor_id": 42}))
    );
}

#[tokio::test]
async fn toggle_bookmark_remove_rolls_back_on_failure() {
    let (api, mock) = mock_api();
    mock.respond_json(json!({"success": false, "message": "Bookmark not found"}));
    let handle = OptimisticHandle::new();
    handle.replace_confirmed([ResourceRef::from(42)]);
    let log = NoticeLog::new();

    let outcome = api
        .toggle_bookmark(&handle, 7, ResourceRef::from(42), &log)
        .await;

    assert!(matches!(outcome, ToggleOutcome::RolledBack { active: true, .. }));
    assert!(handle.contains(&ResourceRef::from(42)));
    assert_eq!(mock.last_request().method, Method::Delete);

    let errors = log.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "Bookmark not found");
}

#[tokio::test]
async fn toggle_bookmark_rolls_back_on_transport_error() {
    let (api, mock) = mock_api();
    mock.fail(TransportError::Timeout);
    let handle = OptimisticHandle::new();
    let log = NoticeLog::new();

    let outcome = api
        .toggle_bookmark(&handle, 7, ResourceRef::from(42), &log)
        .await;

    assert!(outcome.is_rolled_back());
    assert!(handle.snapshot().is_empty());
    assert_eq!(log.len(), 1);
}

#[tokio::test]
async fn sync_profile_updates_store() {
    let (api, mock) = mock_api();
    mock.respond_json(json!({"success": true, "user": {"id": 7, "name": "Asha B"}}));

    let store = SessionStore::new(AppState::default());
    assert!(!api.sync_profile(&store).await.unwrap());
    assert!(mock.requests().is_empty());

    store.dispatch(Action::SetUser(User {
        id: 7,
        name: "Asha".into(),
        ..User::default()
    }));
    assert!(api.sync_profile(&store).await.unwrap());
    assert_eq!(store.state().user.as_ref().unwrap().name, "Asha B");
}

#[tokio::test]
async fn sliders_read_data_list() {
    let (api, mock) = mock_api();
    mock.respond_json(json!({
        "success": true,
        "data": [{"id": 1, "title": "Sale", "image_path": "banner.jpg"}, {"id": 2, "title": null}]
    }));

    let sliders = api.sliders().await.unwrap();

    assert_eq!(sliders.len(), 2);
    assert_eq!(sliders[0].image_path, "banner.jpg");
    let req = mock.last_request();
    assert_eq!(req.method, Method::Get);
    assert!(req.url.ends_with("/app_sliders"));
}

fn vendor_registration() -> VendorRegistration {
    VendorRegistration {
        shop_name: "Bakery".into(),
        address: "MG Road".into(),
        city: "Pune".into(),
        state: "MH".into(),
        contact_number: "12345".into(),
        category_id: Some(2),
        subcategory_id: Some(5),
        password: "pw".into(),
        images: vec![FilePart::new("photo", "front.jpg", "image/jpeg", vec![1, 2, 3])],
        ..VendorRegistration::default()
    }
}

#[tokio::test]
async fn register_vendor_posts_multipart_with_images() {
    let (api, mock) = mock_api();

    let incomplete = VendorRegistration {
        subcategory_id: None,
        ..vendor_registration()
    };
    assert!(matches!(
        api.register_vendor(&incomplete).await,
        Err(ClientError::Validation(_))
    ));
    assert!(mock.requests().is_empty());

    mock.respond_json(json!({"success": true, "message": "Shop registered"}));
    let message = api.register_vendor(&vendor_registration()).await.unwrap();

    assert_eq!(message.as_deref(), Some("Shop registered"));
    let req = mock.last_request();
    assert_eq!(req.method, Method::Post);
    assert!(req.url.ends_with("/vendors/register"));
    let Payload::Multipart(body) = req.payload else {
        unreachable!("vendor registration is multipart");
    };
    assert_eq!(body.get("created_by"), Some("self"));
    assert_eq!(body.get("subcategory_id"), Some("5"));
    assert_eq!(body.files().len(), 1);
    assert_eq!(body.files()[0].field, "images");
    assert_eq!(body.files()[0].file_name, "front.jpg");
}

#[tokio::test]
async fn update_vendor_puts_multipart() {
    let (api, mock) = mock_api();
    let update = VendorUpdate {
        shop_name: "Bakery".into(),
        address: "MG Road".into(),
        city: "Pune".into(),
        state: "MH".into(),
        contact_number: "12345".into(),
        category_id: Some(2),
        new_images: vec![FilePart::new("photo", "side.png", "image/png", vec![9])],
        ..VendorUpdate::default()
    };

    let missing_category = VendorUpdate {
        category_id: None,
        ..update.clone()
    };
    assert!(api.update_vendor(3, &missing_category).await.is_err());
    assert!(mock.requests().is_empty());

    mock.respond_json(json!({"success": true, "message": "Updated"}));
    api.update_vendor(3, &update).await.unwrap();

    let req = mock.last_request();
    assert_eq!(req.method, Method::Put);
    assert!(req.url.ends_with("/vendor-update/3"));
    let Payload::Multipart(body) = req.payload else {
        unreachable!("vendor update is multipart");
    };
    assert_eq!(body.get("password"), None);
    assert_eq!(body.files()[0].field, "images");
}

#[tokio::test]
async fn update_vendor_failure_envelope_is_error() {
    let (api, mock) = mock_api();
    mock.respond_json(json!({"success": false, "message": "Not your shop"}));
    let update = VendorUpdate {
        shop_name: "Bakery".into(),
        address: "MG Road".into(),
        city: "Pune".into(),
        state: "MH".into(),
        contact_number: "12345".into(),
        category_id: Some(2),
        ..VendorUpdate::default()
    };

    let err = api.update_vendor(3, &update).await.unwrap_err();

    assert_eq!(err.user_message(), "Not your shop");
}

#[tokio::test]
async fn register_user_posts_json() {
    let (api, mock) = mock_api();
    let form = UserRegistration {
        name: "Asha".into(),
        email: "a@example.com".into(),
        password: "pw".into(),
        mobile: "99999".into(),
        state: "MH".into(),
        city: String::new(),
    };
    assert!(api.register_user(&form).await.is_err());
    assert!(mock.requests().is_empty());

    mock.respond_json(json!({"success": true, "message": "Welcome"}));
    let form = UserRegistration {
        city: "Pune".into(),
        ..form
    };
    assert_eq!(
        api.register_user(&form).await.unwrap().as_deref(),
        Some("Welcome")
    );

    let req = mock.last_request();
    assert_eq!(req.method, Method::Post);
    assert!(req.url.ends_with("/users-register"));
    let Payload::Json(body) = req.payload else {
        unreachable!("user registration is JSON");
    };
    assert_eq!(body["city"], "Pune");
    assert_eq!(body["mobile"], "99999");
}

#[tokio::test]
async fn update_profile_puts_json() {
    let (api, mock) = mock_api();
    let profile = ProfileUpdate {
        id: 7,
        name: "Asha".into(),
        email: String::new(),
        mobile: "99999".into(),
        state: "MH".into(),
        city: "Pune".into(),
    };
    assert!(matches!(
        api.update_profile(&profile).await,
        Err(ClientError::Validation(_))
    ));
    assert!(mock.requests().is_empty());

    mock.respond_json(json!({"success": true, "message": "Profile updated"}));
    let profile = ProfileUpdate {
        email: "a@example.com".into(),
        ..profile
    };
    assert_eq!(
        api.update_profile(&profile).await.unwrap().as_deref(),
        Some("Profile updated")
    );

    let req = mock.last_request();
    assert_eq!(req.method, Method::Put);
    assert!(req.url.ends_with("/update-profile"));
    assert_eq!(
        req.payload,
        Payload::Json(json!({
            "id": 7,
            "name": "Asha",
            "email": "a@example.com",
            "mobile": "99999",
            "state": "MH",
            "city": "Pune"
        }))
    );
}
