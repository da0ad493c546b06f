use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, Person};
use serde_json::Value;
use tower::ServiceExt;

const KEY: &str = "test-key";

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("X-Api-Key", KEY)
        .body(String::new())
        .unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("X-Api-Key", KEY)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

// --- auth ---

#[tokio::test]
async fn missing_api_key_returns_401() {
    let resp = app(KEY)
        .oneshot(Request::builder().uri("/v1/people").body(String::new()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn wrong_api_key_returns_401() {
    let resp = app(KEY)
        .oneshot(
            Request::builder()
                .uri("/v1/emailAccounts")
                .header("X-Api-Key", "other")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

// --- people ---

#[tokio::test]
async fn list_people_empty() {
    let resp = app(KEY).oneshot(request("GET", "/v1/people")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let people: Vec<Person> = body_json(resp).await;
    assert!(people.is_empty());
}

#[tokio::test]
async fn create_person_returns_201() {
    let resp = app(KEY)
        .oneshot(json_request(
            "POST",
            "/v1/people",
            r#"{"email":"ada@example.com","firstName":"Ada"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let person: Person = body_json(resp).await;
    assert_eq!(person.id, 1);
    assert_eq!(person.email, "ada@example.com");
    assert_eq!(person.first_name.as_deref(), Some("Ada"));
}

#[tokio::test]
async fn posting_existing_email_updates_in_place() {
    let app = app(KEY);
    app.clone()
        .oneshot(json_request(
            "POST",
            "/v1/people",
            r#"{"email":"ada@example.com","firstName":"Ada"}"#,
        ))
        .await
        .unwrap();

    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/v1/people",
            r#"{"email":"ada@example.com","company":"Analytical Engines"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let person: Person = body_json(resp).await;
    assert_eq!(person.id, 1);
    assert_eq!(person.first_name.as_deref(), Some("Ada"));
    assert_eq!(person.company.as_deref(), Some("Analytical Engines"));

    let resp = app.oneshot(request("GET", "/v1/people")).await.unwrap();
    let people: Vec<Person> = body_json(resp).await;
    assert_eq!(people.len(), 1);
}

#[tokio::test]
async fn create_person_without_email_returns_400() {
    let resp = app(KEY)
        .oneshot(json_request("POST", "/v1/people", r#"{"firstName":"Nobody"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = body_json(resp).await;
    assert_eq!(body["error"], "email is required");
}

#[tokio::test]
async fn get_person_by_email_not_found_returns_404() {
    let resp = app(KEY)
        .oneshot(request("GET", "/v1/people?email=ghost@example.com"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = body_json(resp).await;
    assert_eq!(body["message"], "Person with email ghost@example.com not found");
}

#[tokio::test]
async fn get_person_by_id_after_create() {
    let app = app(KEY);
    app.clone()
        .oneshot(json_request("POST", "/v1/people", r#"{"email":"ada@example.com"}"#))
        .await
        .unwrap();

    let resp = app.oneshot(request("GET", "/v1/people?id=1")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let person: Person = body_json(resp).await;
    assert_eq!(person.email, "ada@example.com");
}

#[tokio::test]
async fn delete_person_by_email_with_trailing_slash() {
    let app = app(KEY);
    app.clone()
        .oneshot(json_request("POST", "/v1/people", r#"{"email":"ada@example.com"}"#))
        .await
        .unwrap();

    let resp = app
        .clone()
        .oneshot(request("DELETE", "/v1/people/?email=ada@example.com"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_bytes(resp).await.is_empty());

    let resp = app
        .oneshot(request("DELETE", "/v1/people/?id=1"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_person_without_selector_returns_400() {
    let resp = app(KEY).oneshot(request("DELETE", "/v1/people/")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- blacklist ---

#[tokio::test]
async fn blacklist_add_list_remove() {
    let app = app(KEY);
    let resp = app
        .clone()
        .oneshot(request("POST", "/v1/Blacklist?domain=spam.example"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .clone()
        .oneshot(request("GET", "/v1/Blacklist?outputType=Domains"))
        .await
        .unwrap();
    let body: Value = body_json(resp).await;
    assert_eq!(body["domains"][0], "spam.example");
    assert!(body.get("emails").is_none());

    let resp = app
        .clone()
        .oneshot(request("DELETE", "/v1/Blacklist?domain=spam.example"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .oneshot(request("DELETE", "/v1/Blacklist?domain=spam.example"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn blacklist_add_without_domain_returns_400() {
    let resp = app(KEY).oneshot(request("POST", "/v1/Blacklist")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn blacklist_unknown_output_type_returns_400() {
    let resp = app(KEY)
        .oneshot(request("GET", "/v1/Blacklist?outputType=Phones"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- accounts ---

#[tokio::test]
async fn email_accounts_are_fixed() {
    let resp = app(KEY).oneshot(request("GET", "/v1/emailAccounts")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = body_json(resp).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
    assert_eq!(body[0]["emailAddress"], "sales@example.com");
}
