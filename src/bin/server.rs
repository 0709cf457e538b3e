//! Beam Solver HTTP Server

use std::collections::BTreeMap;

use axum::{
    extract::Json,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};

use beam_solver::prelude::*;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

/// Request body for `/api/v1/solve`
#[derive(Debug, Deserialize)]
struct BeamModelIn {
    length: f64,
    #[serde(rename = "E")]
    e: f64,
    #[serde(rename = "I")]
    i: f64,
    supports: Vec<SupportIn>,
    #[serde(default)]
    point_loads: Vec<PointLoadIn>,
    #[serde(default)]
    point_moments: Vec<PointMomentIn>,
    #[serde(default)]
    distributed_loads: Vec<DistributedLoadIn>,
}

#[derive(Debug, Deserialize)]
struct SupportIn {
    #[serde(rename = "type")]
    kind: SupportKind,
    position: f64,
}

#[derive(Debug, Deserialize)]
struct PointLoadIn {
    magnitude: f64,
    position: f64,
}

#[derive(Debug, Deserialize)]
struct PointMomentIn {
    magnitude: f64,
    position: f64,
}

#[derive(Debug, Deserialize)]
struct DistributedLoadIn {
    start_magnitude: f64,
    end_magnitude: f64,
    start_position: f64,
    end_position: f64,
}

impl BeamModelIn {
    fn into_model(self) -> BeamModel {
        let mut model = BeamModel::new(self.length, self.e, self.i);
        for s in self.supports {
            model.add_support(Support::new(s.kind, s.position));
        }
        for p in self.point_loads {
            model.add_point_load(PointLoad::new(p.magnitude, p.position));
        }
        for m in self.point_moments {
            model.add_point_moment(PointMoment::new(m.magnitude, m.position));
        }
        for w in self.distributed_loads {
            model.add_distributed_load(DistributedLoad::new(
                w.start_magnitude,
                w.end_magnitude,
                w.start_position,
                w.end_position,
            ));
        }
        model
    }
}

/// Response body for `/api/v1/solve`
#[derive(Debug, Serialize)]
struct SolverResultsOut {
    reactions: BTreeMap<String, ReactionOut>,
    shear_diagram: Diagram,
    moment_diagram: Diagram,
    deflection_diagram: Diagram,
}

#[derive(Debug, Serialize)]
struct ReactionOut {
    #[serde(rename = "Fx")]
    fx: f64,
    #[serde(rename = "Fy")]
    fy: f64,
    #[serde(rename = "Mz")]
    mz: f64,
}

impl From<SolverResults> for SolverResultsOut {
    fn from(results: SolverResults) -> Self {
        Self {
            reactions: results
                .reactions
                .into_iter()
                .map(|(label, r)| {
                    (
                        label,
                        ReactionOut {
                            fx: r.fx,
                            fy: r.fy,
                            mz: r.mz,
                        },
                    )
                })
                .collect(),
            shear_diagram: results.shear_diagram,
            moment_diagram: results.moment_diagram,
            deflection_diagram: results.deflection_diagram,
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: String,
}

/// API errors, mapped onto the `{ detail }` error contract
#[derive(Debug)]
enum ApiError {
    Unprocessable(String),
    BadRequest(String),
    Internal,
}

impl From<SolverError> for ApiError {
    fn from(err: SolverError) -> Self {
        match err {
            SolverError::InvalidModel(diag) => ApiError::Unprocessable(diag.to_string()),
            SolverError::SingularSystem(msg) => {
                ApiError::BadRequest(format!("unstable structure: {msg}"))
            }
            other => {
                // solver defect, not bad input; keep the cause server-side
                log::error!("solver failure: {other}");
                ApiError::Internal
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::Unprocessable(detail) => (StatusCode::UNPROCESSABLE_ENTITY, detail),
            ApiError::BadRequest(detail) => (StatusCode::BAD_REQUEST, detail),
            ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal solver error".to_string(),
            ),
        };
        (status, Json(ErrorBody { detail })).into_response()
    }
}

async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn solve(Json(body): Json<BeamModelIn>) -> Result<Json<SolverResultsOut>, ApiError> {
    let model = body.into_model();
    log::info!(
        "solve request: L = {}, {} supports, {} point loads, {} moments, {} distributed loads",
        model.length,
        model.supports.len(),
        model.point_loads.len(),
        model.point_moments.len(),
        model.distributed_loads.len(),
    );

    let results = model.solve()?;
    Ok(Json(results.into()))
}

fn create_router() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/api/v1/solve", post(solve))
        .layer(cors)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let app = create_router();

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "8000".to_string());
    let addr = format!("{host}:{port}");

    println!("Beam Solver Server listening on http://{addr}");
    println!("  Health check: GET  /health");
    println!("  Solve:        POST /api/v1/solve");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
