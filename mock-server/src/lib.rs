use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Query, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: u64,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertPerson {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company: Option<String>,
}

#[derive(Deserialize)]
pub struct PersonQuery {
    pub id: Option<u64>,
    pub email: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlacklistQuery {
    pub output_type: Option<String>,
    pub domain: Option<String>,
}

#[derive(Default)]
pub struct Store {
    next_id: u64,
    people: BTreeMap<u64, Person>,
    domains: Vec<String>,
    emails: Vec<String>,
}

#[derive(Clone)]
pub struct AppState {
    api_key: Arc<str>,
    store: Arc<RwLock<Store>>,
}

pub fn app(api_key: &str) -> Router {
    let state = AppState {
        api_key: Arc::from(api_key),
        store: Arc::new(RwLock::new(Store::default())),
    };
    Router::new()
        .route("/v1/people", get(get_people).post(upsert_person).delete(delete_person))
        .route("/v1/people/", get(get_people).delete(delete_person))
        .route(
            "/v1/Blacklist",
            get(list_blacklist).post(add_domain).delete(remove_domain),
        )
        .route("/v1/emailAccounts", get(list_email_accounts))
        .layer(middleware::from_fn_with_state(state.clone(), require_api_key))
        .with_state(state)
}

pub async fn run(listener: TcpListener, api_key: &str) -> Result<(), std::io::Error> {
    axum::serve(listener, app(api_key)).await
}

async fn require_api_key(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let presented = request
        .headers()
        .get("x-api-key")
        .and_then(|value| value.to_str().ok());
    if presented != Some(&*state.api_key) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    next.run(request).await
}

fn not_found(message: String) -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "message": message }))).into_response()
}

fn bad_request(message: &str) -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
}

async fn get_people(State(state): State<AppState>, Query(query): Query<PersonQuery>) -> Response {
    let store = state.store.read().await;
    if let Some(id) = query.id {
        return match store.people.get(&id) {
            Some(person) => Json(person.clone()).into_response(),
            None => not_found(format!("Person with id {id} not found")),
        };
    }
    if let Some(email) = query.email {
        return match store.people.values().find(|p| p.email == email) {
            Some(person) => Json(person.clone()).into_response(),
            None => not_found(format!("Person with email {email} not found")),
        };
    }
    Json(store.people.values().cloned().collect::<Vec<_>>()).into_response()
}

async fn upsert_person(State(state): State<AppState>, Json(input): Json<UpsertPerson>) -> Response {
    let Some(email) = input.email else {
        return bad_request("email is required");
    };
    let mut store = state.store.write().await;

    if let Some(person) = store.people.values_mut().find(|p| p.email == email) {
        if input.first_name.is_some() {
            person.first_name = input.first_name;
        }
        if input.last_name.is_some() {
            person.last_name = input.last_name;
        }
        if input.company.is_some() {
            person.company = input.company;
        }
        return Json(person.clone()).into_response();
    }

    store.next_id += 1;
    let person = Person {
        id: store.next_id,
        email,
        first_name: input.first_name,
        last_name: input.last_name,
        company: input.company,
    };
    store.people.insert(person.id, person.clone());
    (StatusCode::CREATED, Json(person)).into_response()
}

async fn delete_person(
    State(state): State<AppState>,
    Query(query): Query<PersonQuery>,
) -> Response {
    let mut store = state.store.write().await;
    let id = match (query.id, query.email) {
        (Some(id), _) => Some(id).filter(|id| store.people.contains_key(id)),
        (None, Some(email)) => store
            .people
            .values()
            .find(|p| p.email == email)
            .map(|p| p.id),
        (None, None) => return bad_request("id or email is required"),
    };
    match id {
        Some(id) => {
            store.people.remove(&id);
            StatusCode::OK.into_response()
        }
        None => not_found("Person not found".to_string()),
    }
}

async fn list_blacklist(
    State(state): State<AppState>,
    Query(query): Query<BlacklistQuery>,
) -> Response {
    let store = state.store.read().await;
    match query.output_type.as_deref() {
        Some("Domains") => Json(json!({ "domains": store.domains })).into_response(),
        Some("Emails") => Json(json!({ "emails": store.emails })).into_response(),
        Some(other) => bad_request(&format!("unknown outputType {other}")),
        None => Json(json!({ "domains": store.domains, "emails": store.emails })).into_response(),
    }
}

async fn add_domain(State(state): State<AppState>, Query(query): Query<BlacklistQuery>) -> Response {
    let Some(domain) = query.domain else {
        return bad_request("domain is required");
    };
    let mut store = state.store.write().await;
    if !store.domains.contains(&domain) {
        store.domains.push(domain);
    }
    StatusCode::OK.into_response()
}

async fn remove_domain(
    State(state): State<AppState>,
    Query(query): Query<BlacklistQuery>,
) -> Response {
    let Some(domain) = query.domain else {
        return bad_request("domain is required");
    };
    let mut store = state.store.write().await;
    let before = store.domains.len();
    store.domains.retain(|d| *d != domain);
    if store.domains.len() == before {
        return not_found(format!("{domain} is not blacklisted"));
    }
    StatusCode::OK.into_response()
}

async fn list_email_accounts() -> Json<Value> {
    Json(json!([
        { "id": 1, "emailAddress": "sales@example.com", "senderName": "Sales" },
        { "id": 2, "emailAddress": "founder@example.com", "senderName": "Founder" }
    ]))
}
