use crate::AppState;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use marquee_api::{ActorResponseDto, ActorsResponseDto, ApiError, DirectorResponseDto};
use marquee_query::{
    actor_report, director_report, list_actors, list_directors, QueryError, QueryErrorCode,
};
use serde_json::{json, Value};
use std::sync::atomic::Ordering;
use std::time::Instant;
use tracing::{info, warn};

pub(crate) fn api_error_response(status: StatusCode, err: ApiError) -> Response {
    (status, Json(json!({"error": err}))).into_response()
}

fn make_request_id(state: &AppState) -> String {
    format!(
        "req-{:08x}",
        state.request_id_seed.fetch_add(1, Ordering::Relaxed)
    )
}

fn base_url(headers: &HeaderMap) -> String {
    headers
        .get("host")
        .and_then(|v| v.to_str().ok())
        .map_or_else(|| "/".to_string(), |host| format!("http://{host}/"))
}

fn director_error(err: &QueryError, name: &str) -> (StatusCode, ApiError) {
    match err.code {
        QueryErrorCode::NotFound => (StatusCode::NOT_FOUND, ApiError::director_not_found(name)),
        QueryErrorCode::Validation => (StatusCode::BAD_REQUEST, ApiError::empty_person_name()),
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::internal(err.message.clone()),
        ),
    }
}

fn actor_error(err: &QueryError, name: &str) -> (StatusCode, ApiError) {
    match err.code {
        QueryErrorCode::NotFound => (StatusCode::NOT_FOUND, ApiError::actor_not_found(name)),
        QueryErrorCode::Validation => (StatusCode::BAD_REQUEST, ApiError::empty_person_name()),
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::internal(err.message.clone()),
        ),
    }
}

pub(crate) async fn welcome_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let started = Instant::now();
    let base = base_url(&headers);

    let mut functions = serde_json::Map::new();
    functions.insert(
        format!("{base}director/{{director_name}}"),
        Value::String(
            "Obtiene información sobre un director específico, incluyendo sus películas y \
             ingresos totales."
                .to_string(),
        ),
    );
    functions.insert(
        format!("{base}directores"),
        Value::String(
            "Devuelve una lista de todos los directores disponibles en la base de datos."
                .to_string(),
        ),
    );
    functions.insert(
        format!("{base}actor/{{actor_name}}"),
        Value::String("Obtiene el rendimiento financiero del actor especificado.".to_string()),
    );
    functions.insert(
        format!("{base}actores"),
        Value::String("Lista todos los actores disponibles en la base de datos.".to_string()),
    );

    let payload = json!({
        "message": "Bienvenido a la API de Análisis de Cine.",
        "functions": functions,
        "examples": {
            "Get Director Info": format!("Ejemplo: {base}director/Quentin%20Tarantino"),
            "Get All Directors": format!("Ejemplo: {base}directores"),
            "Get Actor Info": format!("Ejemplo: {base}actor/Leonardo%20DiCaprio"),
            "Get All Actors": format!("Ejemplo: {base}actores"),
        },
    });

    let response = Json(payload).into_response();
    state
        .metrics
        .observe_request("/", StatusCode::OK, started.elapsed())
        .await;
    response
}

pub(crate) async fn director_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> impl IntoResponse {
    let started = Instant::now();
    let request_id = make_request_id(&state);
    info!(request_id = %request_id, route = "/director/{name}", name = %name, "request start");

    let response = match director_report(&state.store, &name) {
        Ok(report) => Json(DirectorResponseDto::from(&report)).into_response(),
        Err(err) => {
            let (status, api_err) = director_error(&err, &name);
            api_error_response(status, api_err)
        }
    };

    let latency = started.elapsed();
    if latency > state.api.slow_query_threshold {
        warn!(
            request_id = %request_id,
            latency_ms = latency.as_millis() as u64,
            "slow director lookup"
        );
    }
    state
        .metrics
        .observe_request("/director/{name}", response.status(), latency)
        .await;
    response
}

pub(crate) async fn directors_handler(State(state): State<AppState>) -> impl IntoResponse {
    let started = Instant::now();
    let response = Json(list_directors(&state.store)).into_response();
    state
        .metrics
        .observe_request("/directores", StatusCode::OK, started.elapsed())
        .await;
    response
}

pub(crate) async fn actor_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> impl IntoResponse {
    let started = Instant::now();
    let request_id = make_request_id(&state);
    info!(request_id = %request_id, route = "/actor/{name}", name = %name, "request start");

    let response = match actor_report(&state.store, &name) {
        Ok(report) => Json(ActorResponseDto::from(&report)).into_response(),
        Err(err) => {
            let (status, api_err) = actor_error(&err, &name);
            api_error_response(status, api_err)
        }
    };

    let latency = started.elapsed();
    if latency > state.api.slow_query_threshold {
        warn!(
            request_id = %request_id,
            latency_ms = latency.as_millis() as u64,
            "slow actor lookup"
        );
    }
    state
        .metrics
        .observe_request("/actor/{name}", response.status(), latency)
        .await;
    response
}

pub(crate) async fn actors_handler(State(state): State<AppState>) -> impl IntoResponse {
    let started = Instant::now();
    let response = Json(ActorsResponseDto {
        names: list_actors(&state.store),
    })
    .into_response();
    state
        .metrics
        .observe_request("/actores", StatusCode::OK, started.elapsed())
        .await;
    response
}

pub(crate) async fn healthz_handler() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}

pub(crate) async fn readyz_handler(State(state): State<AppState>) -> impl IntoResponse {
    if state.ready.load(Ordering::Relaxed) {
        (StatusCode::OK, Json(json!({"ready": true})))
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, Json(json!({"ready": false})))
    }
}

pub(crate) async fn metrics_handler(State(state): State<AppState>) -> impl IntoResponse {
    let rows: Vec<Value> = state
        .metrics
        .counts_snapshot()
        .await
        .into_iter()
        .map(|(route, status, count)| json!({"route": route, "status": status, "count": count}))
        .collect();
    Json(json!({"requests": rows}))
}
