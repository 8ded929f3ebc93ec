use std::net::SocketAddr;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing::post};
use base64::Engine;
use image::ImageEncoder;
use image::codecs::png::PngEncoder;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use wrapgrid::render;
use wrapgrid::{GridError, GridParams, Params};

/// Pixels per cell in returned PNG layers.
const CELL_PX: usize = 8;

struct ApiError(StatusCode, String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.0, Json(json!({ "error": self.1 }))).into_response()
    }
}

impl From<GridError> for ApiError {
    fn from(err: GridError) -> Self {
        ApiError(StatusCode::BAD_REQUEST, err.to_string())
    }
}

fn internal(err: impl std::fmt::Display) -> ApiError {
    log::error!("{}", err);
    ApiError(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
}

#[derive(Deserialize)]
struct NeighboursRequest {
    #[serde(flatten)]
    grid: GridParams,
    /// Row-major cells; `null` is an empty cell.
    #[serde(default)]
    cells: Vec<Option<Value>>,
    row: i64,
    col: i64,
}

#[derive(Serialize)]
struct NeighboursResponse {
    row: usize,
    col: usize,
    value: Option<Value>,
    row_values: Vec<Option<Value>>,
    neighbours: Vec<Value>,
}

async fn neighbours_handler(
    Json(req): Json<NeighboursRequest>,
) -> Result<Json<NeighboursResponse>, ApiError> {
    let grid = req.grid.build_from(req.cells)?;

    let response = NeighboursResponse {
        row: grid.sanitize_row(req.row)?,
        col: grid.sanitize_col(req.col)?,
        value: grid.value_at(req.row, req.col)?.cloned(),
        row_values: grid
            .get_row(req.row)?
            .into_iter()
            .map(|v| v.cloned())
            .collect(),
        neighbours: grid
            .get_neighbours(req.row, req.col)?
            .into_iter()
            .cloned()
            .collect(),
    };

    Ok(Json(response))
}

#[derive(Deserialize)]
struct SimulateRequest {
    seed: Option<u64>,
    #[serde(flatten)]
    params: Params,
}

#[derive(Serialize)]
struct SimulateResponse {
    layers: Vec<Layer>,
    timings: Vec<TimingEntry>,
    rows: usize,
    cols: usize,
    population: usize,
}

#[derive(Serialize)]
struct Layer {
    name: String,
    data_url: String,
}

#[derive(Serialize)]
struct TimingEntry {
    name: String,
    ms: f64,
}

fn encode_png(rgba: &[u8], w: usize, h: usize) -> Result<String, ApiError> {
    let (pw, ph) = render::image_dims(w, h, CELL_PX)
        .ok_or_else(|| internal(format!("{}x{} board is too large for an image", h, w)))?;
    let big = render::upscale(rgba, w, h, CELL_PX);
    let mut buf = Vec::new();
    let encoder = PngEncoder::new(&mut buf);
    encoder
        .write_image(&big, pw, ph, image::ExtendedColorType::Rgba8)
        .map_err(internal)?;
    let b64 = base64::engine::general_purpose::STANDARD.encode(&buf);
    Ok(format!("data:image/png;base64,{}", b64))
}

async fn simulate_handler(
    Json(req): Json<SimulateRequest>,
) -> Result<Json<SimulateResponse>, ApiError> {
    let seed = req.seed.unwrap_or(42);
    let params = req.params;

    let response = tokio::task::spawn_blocking(move || -> Result<SimulateResponse, ApiError> {
        let (run, timings) = wrapgrid::simulate(&params, seed)?;

        let layers = vec![
            Layer {
                name: "initial".into(),
                data_url: encode_png(&render::render_ages(&run.initial), run.cols, run.rows)?,
            },
            Layer {
                name: "final".into(),
                data_url: encode_png(&run.rgba, run.cols, run.rows)?,
            },
        ];

        let timing_entries = timings
            .iter()
            .map(|t| TimingEntry {
                name: t.name.to_string(),
                ms: t.ms,
            })
            .collect();

        Ok(SimulateResponse {
            layers,
            timings: timing_entries,
            rows: run.rows,
            cols: run.cols,
            population: run.population,
        })
    })
    .await
    .map_err(internal)??;

    Ok(Json(response))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let app = Router::new()
        .route("/api/neighbours", post(neighbours_handler))
        .route("/api/simulate", post(simulate_handler));

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    log::info!("wrapgrid server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
