//! Axum HTTP server: the stateless seam the setup UI talks to.
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | POST | `/api/concordia/setup` | Fresh random hashes for all four encoders |
//! | GET | `/api/concordia/decode` | Decode stored hashes back to a setup |
//!
//! Hashes are syntax-checked (known map name, separator structure, alphabet
//! membership) before they reach the core; a request that fails those checks
//! gets a 400 with a JSON error body. A hash that passes them but was never
//! issued under the current multiset definitions is a broken invariant and
//! panics in the core.

use axum::{
    extract::Query,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};

use crate::games::concordia::{castles, city_tiles, forum, market};
use crate::games::concordia::map::{MapId, ZONES};
use crate::hash_codec::{is_valid_base32, is_valid_base64};
use crate::index_source::RandomIndexSource;

pub fn create_router() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handle_health_check))
        .route("/api/concordia/setup", post(handle_generate_setup))
        .route("/api/concordia/decode", get(handle_decode_setup))
        .layer(cors)
}

// ── Request types ───────────────────────────────────────────────────

#[derive(Deserialize)]
struct GenerateRequest {
    map: String,
}

#[derive(Deserialize)]
struct DecodeQuery {
    map: Option<String>,
    city_tiles: Option<String>,
    market: Option<String>,
    forum: Option<String>,
    castles: Option<String>,
}

fn error_response(status: StatusCode, msg: &str) -> (StatusCode, Json<serde_json::Value>) {
    (status, Json(serde_json::json!({ "error": msg })))
}

// ── Hash syntax checks ──────────────────────────────────────────────

fn valid_parts(hash: &str, separator: char, count: usize, valid: fn(&str) -> bool) -> bool {
    let parts: Vec<&str> = hash.split(separator).collect();
    parts.len() == count && parts.iter().all(|p| valid(p))
}

// ── Handlers ────────────────────────────────────────────────────────

async fn handle_health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "OK" }))
}

async fn handle_generate_setup(
    Json(req): Json<GenerateRequest>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    let map = match MapId::parse(&req.map) {
        Some(m) => m,
        None => {
            return Err(error_response(
                StatusCode::BAD_REQUEST,
                "unknown map (expected \"italia\" or \"imperium\")",
            ))
        }
    };

    let mut src = RandomIndexSource::new();
    Ok(Json(serde_json::json!({
        "map": map.name(),
        "city_tiles": city_tiles::random_hash(map, &mut src),
        "market": market::random_hash(&mut src),
        "forum": forum::random_hash(&mut src),
        "castles": castles::random_hash(map, &mut src),
    })))
}

async fn handle_decode_setup(
    Query(params): Query<DecodeQuery>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    let map = match params.map.as_deref() {
        Some(name) => match MapId::parse(name) {
            Some(m) => Some(m),
            None => {
                return Err(error_response(
                    StatusCode::BAD_REQUEST,
                    "unknown map (expected \"italia\" or \"imperium\")",
                ))
            }
        },
        None => None,
    };

    let mut result = serde_json::json!({
        "map": map.map(MapId::name),
    });

    if let Some(hash) = &params.city_tiles {
        if !valid_parts(hash, city_tiles::SEPARATOR, ZONES.len(), is_valid_base32) {
            return Err(error_response(
                StatusCode::BAD_REQUEST,
                "malformed city_tiles hash",
            ));
        }
        result["city_tiles"] = serde_json::json!(city_tiles::decode(map, hash));
    }

    if let Some(hash) = &params.market {
        if !is_valid_base64(hash) {
            return Err(error_response(
                StatusCode::BAD_REQUEST,
                "malformed market hash",
            ));
        }
        let order: Vec<&str> = market::decode(hash).iter().map(|c| c.name()).collect();
        result["market"] = serde_json::json!(order);
    }

    if let Some(hash) = &params.forum {
        if !valid_parts(hash, forum::SEPARATOR, 2, is_valid_base32) {
            return Err(error_response(
                StatusCode::BAD_REQUEST,
                "malformed forum hash",
            ));
        }
        result["forum"] = serde_json::json!(forum::decode(hash));
    }

    if let Some(hash) = &params.castles {
        if !is_valid_base64(hash) {
            return Err(error_response(
                StatusCode::BAD_REQUEST,
                "malformed castles hash",
            ));
        }
        let track = castles::decode(map, hash).map(|resources| {
            resources
                .iter()
                .map(|r| r.name())
                .collect::<Vec<&str>>()
        });
        result["castles"] = serde_json::json!(track);
    }

    Ok(Json(result))
}
