//! Integration tests for the customer API endpoints
//!
//! The full HTTP stack is exercised against the app factory, with the
//! in-memory repository implementations standing in for MySQL.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{test, web};
use serde_json::json;

use se_api::app::create_app;
use se_api::routes::AppState;
use se_core::repositories::{MockCustomerRepository, MockProductRepository};
use se_core::services::{CustomerService, ProductService};

fn test_state() -> web::Data<AppState<MockCustomerRepository, MockProductRepository>> {
    web::Data::new(AppState {
        customer_service: Arc::new(CustomerService::new(Arc::new(MockCustomerRepository::new()))),
        product_service: Arc::new(ProductService::new(Arc::new(MockProductRepository::new()))),
    })
}

#[actix_web::test]
async fn test_create_customer_returns_envelope_with_full_name() {
    let app = test::init_service(create_app(test_state())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/customers")
        .set_json(json!({
            "email": "A@B.com",
            "first_name": "Jo",
            "last_name": "Do"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["full_name"], "Jo Do");
    // Stored and returned in canonical lower-cased form
    assert_eq!(body["data"]["email"], "a@b.com");
    assert!(body["data"]["id"].is_string());
}

#[actix_web::test]
async fn test_duplicate_email_is_validation_error() {
    let app = test::init_service(create_app(test_state())).await;

    let first = test::TestRequest::post()
        .uri("/api/v1/customers")
        .set_json(json!({
            "email": "a@b.com",
            "first_name": "Jo",
            "last_name": "Do"
        }))
        .to_request();
    assert_eq!(
        test::call_service(&app, first).await.status(),
        StatusCode::CREATED
    );

    // Same email, different case
    let second = test::TestRequest::post()
        .uri("/api/v1/customers")
        .set_json(json!({
            "email": "A@B.COM",
            "first_name": "Jo",
            "last_name": "Do"
        }))
        .to_request();
    let resp = test::call_service(&app, second).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "VALIDATION_ERROR");

    // No second row was persisted
    let list = test::TestRequest::get()
        .uri("/api/v1/customers")
        .to_request();
    let body: serde_json::Value =
        test::read_body_json(test::call_service(&app, list).await).await;
    assert_eq!(body["count"], 1);
}

#[actix_web::test]
async fn test_invalid_body_returns_field_details() {
    let app = test::init_service(create_app(test_state())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/customers")
        .set_json(json!({
            "email": "not-an-email",
            "first_name": "J",
            "last_name": "Do"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert!(body["details"]["email"].is_array());
    assert!(body["details"]["first_name"].is_array());
}

#[actix_web::test]
async fn test_get_absent_customer_is_not_found() {
    let app = test::init_service(create_app(test_state())).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/customers/00000000-0000-0000-0000-000000000000")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "NOT_FOUND");
}

#[actix_web::test]
async fn test_get_customer_with_malformed_id_is_bad_request() {
    let app = test::init_service(create_app(test_state())).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/customers/not-a-uuid")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

#[actix_web::test]
async fn test_get_customer_by_email() {
    let app = test::init_service(create_app(test_state())).await;

    let create = test::TestRequest::post()
        .uri("/api/v1/customers")
        .set_json(json!({
            "email": "jo.doe@example.com",
            "first_name": "Jo",
            "last_name": "Do"
        }))
        .to_request();
    test::call_service(&app, create).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/customers/by-email/jo.doe@example.com")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["email"], "jo.doe@example.com");

    let absent = test::TestRequest::get()
        .uri("/api/v1/customers/by-email/nobody@example.com")
        .to_request();
    let resp = test::call_service(&app, absent).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_update_and_delete_customer_flow() {
    let app = test::init_service(create_app(test_state())).await;

    let create = test::TestRequest::post()
        .uri("/api/v1/customers")
        .set_json(json!({
            "email": "jo.doe@example.com",
            "first_name": "Jo",
            "last_name": "Do"
        }))
        .to_request();
    let body: serde_json::Value =
        test::read_body_json(test::call_service(&app, create).await).await;
    let id = body["data"]["id"].as_str().unwrap().to_string();

    // Update
    let update = test::TestRequest::put()
        .uri(&format!("/api/v1/customers/{}", id))
        .set_json(json!({"first_name": "Joan"}))
        .to_request();
    let resp = test::call_service(&app, update).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["full_name"], "Joan Do");
    assert_eq!(body["data"]["email"], "jo.doe@example.com");

    // Delete
    let delete = test::TestRequest::delete()
        .uri(&format!("/api/v1/customers/{}", id))
        .to_request();
    let resp = test::call_service(&app, delete).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Customer deleted successfully");

    // Gone afterwards
    let get = test::TestRequest::get()
        .uri(&format!("/api/v1/customers/{}", id))
        .to_request();
    assert_eq!(
        test::call_service(&app, get).await.status(),
        StatusCode::NOT_FOUND
    );
}

#[actix_web::test]
async fn test_update_absent_customer_is_not_found() {
    let app = test::init_service(create_app(test_state())).await;

    let req = test::TestRequest::put()
        .uri("/api/v1/customers/00000000-0000-0000-0000-000000000000")
        .set_json(json!({"first_name": "Joan"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "NOT_FOUND");
}

#[actix_web::test]
async fn test_unknown_route_returns_envelope_404() {
    let app = test::init_service(create_app(test_state())).await;

    let req = test::TestRequest::get().uri("/api/v2/nothing").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "NOT_FOUND");
}

#[actix_web::test]
async fn test_health_endpoint() {
    let app = test::init_service(create_app(test_state())).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
}
