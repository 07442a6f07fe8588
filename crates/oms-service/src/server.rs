//! HTTP server for the OMS API.
//!
//! Exposes the transaction intake endpoint and the ad hoc order search
//! endpoint on top of the shared application state.

use axum::{
	extract::{Query, State},
	http::StatusCode,
	response::Json,
	routing::{get, post},
	Router,
};
use oms_config::ServiceConfig;
use oms_core::{OrchestrationPipeline, ProcessError};
use oms_query::QueryService;
use oms_types::{OrderSummary, Page, Transaction, TxResult, TxState};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

/// Shared application state for the API server.
#[derive(Clone)]
pub struct AppState {
	/// Processing pipeline for inbound transactions.
	pub pipeline: Arc<OrchestrationPipeline>,
	/// Search service for the query surface.
	pub query: Arc<QueryService>,
}

/// Builds the API router over the shared state.
pub fn router(state: AppState) -> Router {
	Router::new()
		.nest(
			"/api",
			Router::new()
				.route("/tx", post(handle_tx))
				.route("/query/orders", get(handle_search)),
		)
		.layer(ServiceBuilder::new().layer(CorsLayer::permissive()))
		.with_state(state)
}

/// Starts the HTTP server and serves until the task is aborted.
pub async fn start_server(
	service_config: &ServiceConfig,
	state: AppState,
) -> Result<(), Box<dyn std::error::Error>> {
	let app = router(state);

	let bind_address = format!("{}:{}", service_config.host, service_config.port);
	let listener = TcpListener::bind(&bind_address).await?;

	tracing::info!("OMS API server starting on {}", bind_address);

	axum::serve(listener, app).await?;

	Ok(())
}

/// Handles POST /api/tx requests.
///
/// The payload is decoded as a tagged transaction command. A payload whose
/// tag is not a supported command never reaches the pipeline; it fails here
/// with an unsupported-transaction result. Processed transactions answer
/// 201 on OK and 500 on FAIL, with the result as the body either way.
async fn handle_tx(
	State(state): State<AppState>,
	Json(payload): Json<Value>,
) -> (StatusCode, Json<TxResult>) {
	let transaction: Transaction = match serde_json::from_value(payload) {
		Ok(transaction) => transaction,
		Err(e) => {
			let err = ProcessError::UnsupportedTransaction(e.to_string());
			tracing::warn!("Rejected transaction payload: {}", err);
			return (
				StatusCode::INTERNAL_SERVER_ERROR,
				Json(TxResult::fail(err.to_string(), err.code())),
			);
		}
	};

	let result = state.pipeline.process(transaction).await;
	let status = match result.state {
		TxState::Ok => StatusCode::CREATED,
		TxState::Fail => StatusCode::INTERNAL_SERVER_ERROR,
	};
	(status, Json(result))
}

/// Handles GET /api/query/orders requests.
///
/// `page`, `size` and `sort` are control parameters; every remaining query
/// parameter is a filter. Unparsable control values fall back to their
/// defaults, matching the permissive filter policy.
async fn handle_search(
	State(state): State<AppState>,
	Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Page<OrderSummary>>, (StatusCode, Json<Value>)> {
	let mut filters = params;
	let page = filters.remove("page").and_then(|v| v.parse::<i64>().ok());
	let size = filters.remove("size").and_then(|v| v.parse::<i64>().ok());
	let sort = filters.remove("sort");

	match state.query.search(&filters, page, size, sort.as_deref()).await {
		Ok(result) => Ok(Json(result)),
		Err(e) => {
			tracing::error!("Order search failed: {}", e);
			Err((
				StatusCode::INTERNAL_SERVER_ERROR,
				Json(serde_json::json!({ "error": e.to_string() })),
			))
		}
	}
}
