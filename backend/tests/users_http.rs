//! End-to-end tests for the user resource over the in-memory repository.

use std::sync::Arc;
use std::time::Duration;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use actix_web::{App, web};
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use trackme::domain::ports::InMemoryUserRepository;
use trackme::domain::{TRACE_ID_HEADER, User};
use trackme::inbound::http::state::HttpState;
use trackme::inbound::http::users_scope;
use trackme::{RequestTimeout, Trace};

const ALICE: &str = r#"{"username":"alice","email":"a@x.com","net_worth":100.5,"accounts":["checking"],"credit_score":700,"budget":["rent"]}"#;

#[fixture]
fn repository() -> Arc<InMemoryUserRepository> {
    Arc::new(InMemoryUserRepository::new())
}

fn app(
    repository: Arc<InMemoryUserRepository>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(HttpState::for_repository(repository)))
        .wrap(RequestTimeout::new(Duration::from_secs(5)))
        .wrap(Trace)
        .service(users_scope())
}

fn json_body(request: TestRequest, body: &'static str) -> TestRequest {
    request
        .insert_header(("content-type", "application/json"))
        .set_payload(body)
}

#[rstest]
#[actix_web::test]
async fn user_lifecycle(repository: Arc<InMemoryUserRepository>) {
    let app = test::init_service(app(repository)).await;

    let created = test::call_service(
        &app,
        json_body(TestRequest::post().uri("/api/products/"), ALICE).to_request(),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    assert!(created.headers().contains_key(TRACE_ID_HEADER));
    let body: Value = test::read_body_json(created).await;
    assert_eq!(body, json!({ "message": "success" }));

    let users: Vec<User> =
        test::call_and_read_body_json(&app, TestRequest::get().uri("/api/products/").to_request())
            .await;
    assert_eq!(users.len(), 1);
    let uri = format!("/api/products/{}", users[0].id);

    let fetched: User =
        test::call_and_read_body_json(&app, TestRequest::get().uri(&uri).to_request()).await;
    assert_eq!(fetched, users[0]);

    let updated = test::call_service(
        &app,
        json_body(
            TestRequest::put().uri(&uri),
            r#"{"username":"alice","net_worth":100.5,"accounts":["checking"],"credit_score":700,"budget":["rent"]}"#,
        )
        .to_request(),
    )
    .await;
    assert_eq!(updated.status(), StatusCode::ACCEPTED);
    let updated: User = test::read_body_json(updated).await;
    assert_eq!(updated.id, fetched.id);
    assert_eq!(updated.email, "");
    assert_eq!(updated.username, "alice");

    let deleted = test::call_service(&app, TestRequest::delete().uri(&uri).to_request()).await;
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let again = test::call_service(&app, TestRequest::delete().uri(&uri).to_request()).await;
    assert_eq!(again.status(), StatusCode::NOT_FOUND);

    let gone = test::call_service(&app, TestRequest::get().uri(&uri).to_request()).await;
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);
    let error: Value = test::read_body_json(gone).await;
    assert_eq!(error.get("code").and_then(Value::as_str), Some("not_found"));
    assert!(error.get("traceId").is_some());
}

#[rstest]
#[actix_web::test]
async fn listing_empty_collection_returns_empty_array(repository: Arc<InMemoryUserRepository>) {
    let app = test::init_service(app(repository)).await;

    let res = test::call_service(&app, TestRequest::get().uri("/api/products/").to_request()).await;

    assert_eq!(res.status(), StatusCode::OK);
    let users: Vec<User> = test::read_body_json(res).await;
    assert!(users.is_empty());
}

#[rstest]
#[case::get(TestRequest::get())]
#[case::put(json_body(TestRequest::put(), ALICE))]
#[case::delete(TestRequest::delete())]
#[actix_web::test]
async fn malformed_id_is_a_bad_request(
    repository: Arc<InMemoryUserRepository>,
    #[case] request: TestRequest,
) {
    let app = test::init_service(app(repository)).await;

    let res =
        test::call_service(&app, request.uri("/api/products/invalid-id").to_request()).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[rstest]
#[actix_web::test]
async fn malformed_body_is_a_bad_request(repository: Arc<InMemoryUserRepository>) {
    let app = test::init_service(app(repository.clone())).await;

    let res = test::call_service(
        &app,
        json_body(TestRequest::post().uri("/api/products/"), "{not json").to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let users: Vec<User> =
        test::call_and_read_body_json(&app, TestRequest::get().uri("/api/products/").to_request())
            .await;
    assert!(users.is_empty());
}
