#[cfg(feature = "server")]
pub mod http {
    use axum::{
        extract::{Path, Query, State},
        http::StatusCode,
        response::{IntoResponse, Json},
        routing::{get, post},
        Router,
    };
    use langcalc::{Engine, Inputs, Operation, Response, Value};
    use serde::{Deserialize, Serialize};
    use std::net::SocketAddr;
    use std::sync::Arc;
    use tower_http::cors::CorsLayer;
    use tracing::{error, info};

    type SharedEngine = Arc<Engine>;

    #[derive(Debug, Deserialize)]
    struct EvaluateRequest {
        operation: String,
        #[serde(default)]
        inputs: Inputs,
    }

    #[derive(Debug, Serialize)]
    struct EvaluateResponse {
        operation: String,
        operands: Vec<OperandJson>,
        result: String,
        value: Value,
        summary: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    }

    #[derive(Debug, Serialize)]
    struct OperandJson {
        name: String,
        value: String,
    }

    #[derive(Debug, Serialize)]
    struct OperationJson {
        name: &'static str,
        title: &'static str,
        category: &'static str,
        parameters: Vec<langcalc::Parameter>,
    }

    #[derive(Debug, Serialize)]
    struct ErrorResponse {
        error: String,
    }

    type ApiError = (StatusCode, Json<ErrorResponse>);

    pub async fn start_server(engine: Engine, host: &str, port: u16) -> anyhow::Result<()> {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "langcalc=info,tower_http=info".into()),
            )
            .init();

        let app = router(engine);

        let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
        info!("LangCalc server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }

    pub fn router(engine: Engine) -> Router {
        let shared_engine: SharedEngine = Arc::new(engine);

        Router::new()
            .route("/health", get(health_check))
            .route("/operations", get(list_operations))
            .route("/evaluate/:operation", get(evaluate_get))
            .route("/evaluate", post(evaluate_post))
            .layer(CorsLayer::permissive())
            .with_state(shared_engine)
    }

    async fn health_check() -> impl IntoResponse {
        Json(serde_json::json!({
            "status": "ok",
            "service": "langcalc",
            "version": env!("CARGO_PKG_VERSION")
        }))
    }

    async fn list_operations() -> impl IntoResponse {
        let operations: Vec<OperationJson> = Operation::ALL
            .iter()
            .map(|op| OperationJson {
                name: op.name(),
                title: op.title(),
                category: op.category().title(),
                parameters: op.parameters().to_vec(),
            })
            .collect();
        Json(operations)
    }

    async fn evaluate_get(
        State(engine): State<SharedEngine>,
        Path(operation_name): Path<String>,
        Query(params): Query<Inputs>,
    ) -> Result<impl IntoResponse, ApiError> {
        let operation: Operation = operation_name.parse().map_err(|e| {
            error!("Unknown operation requested: {}", operation_name);
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: format!("{}", e),
                }),
            )
        })?;

        evaluate(&engine, operation, &params)
    }

    async fn evaluate_post(
        State(engine): State<SharedEngine>,
        Json(payload): Json<EvaluateRequest>,
    ) -> Result<impl IntoResponse, ApiError> {
        let operation: Operation = payload.operation.parse().map_err(|e| {
            error!("Unknown operation requested: {}", payload.operation);
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("{}", e),
                }),
            )
        })?;

        evaluate(&engine, operation, &payload.inputs)
    }

    fn evaluate(
        engine: &Engine,
        operation: Operation,
        inputs: &Inputs,
    ) -> Result<Json<EvaluateResponse>, ApiError> {
        let response: Response = engine.evaluate(operation, inputs).map_err(|e| {
            error!("Evaluation of '{}' failed: {}", operation, e);
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Evaluation failed: {}", e),
                }),
            )
        })?;

        info!("Evaluated '{}': {}", operation, response.summary);

        Ok(Json(convert_response(response)))
    }

    fn convert_response(response: Response) -> EvaluateResponse {
        EvaluateResponse {
            operation: response.operation.name().to_string(),
            operands: response
                .operands
                .iter()
                .map(|operand| OperandJson {
                    name: operand.name.clone(),
                    value: operand.value.to_string(),
                })
                .collect(),
            result: response.result.to_string(),
            value: response.result,
            summary: response.summary,
            note: response.note,
        }
    }

}

#[cfg(not(feature = "server"))]
pub mod http {
    pub async fn start_server(
        _engine: langcalc::Engine,
        _host: &str,
        _port: u16,
    ) -> anyhow::Result<()> {
        anyhow::bail!("Server feature not enabled. Recompile with --features server")
    }
}
