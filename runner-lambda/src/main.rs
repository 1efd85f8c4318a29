use anyhow::Context as _;
use greeting_core::telemetry::init_tracing;
use greeting_core::{GreetingResponse, InvocationContext, LocalContext};
use lambda_runtime::{Context, Error, LambdaEvent, service_fn};
use serde_json::{Value, json};
use std::env;
use tracing::{error, info};

/// Request id used for local runs when set; otherwise one is generated.
const LOCAL_REQUEST_ID_VAR: &str = "LOCAL_REQUEST_ID";

/// Adapts the runtime's context to the handler.
///
/// `lambda_runtime` refuses invocations without a request id header, so the id
/// is always present here and is passed through as-is, even when empty.
struct LambdaContext<'a>(&'a Context);

impl InvocationContext for LambdaContext<'_> {
    fn request_id(&self) -> Option<&str> {
        Some(self.0.request_id.as_str())
    }
}

pub async fn lambda_handler(event: LambdaEvent<Value>) -> Result<GreetingResponse, Error> {
    let (payload, context) = event.into_parts();

    greeting_core::handle(&payload, &LambdaContext(&context)).map_err(|e| {
        error!("Invocation failed: {}", e);
        Error::from(e)
    })
}

/// Runs the handler once outside of Lambda and returns the response.
///
/// The event is read from `event_path` when given, `{}` otherwise.
fn run_local(event_path: Option<&str>) -> anyhow::Result<GreetingResponse> {
    let event = match event_path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read event file {}", path))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Event file {} is not valid JSON", path))?
        }
        None => json!({}),
    };

    let request_id = env::var(LOCAL_REQUEST_ID_VAR)
        .unwrap_or_else(|_| format!("local-{}", chrono::Utc::now().timestamp_millis()));

    let response = greeting_core::handle(&event, &LocalContext::new(request_id))?;
    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    if env::var("AWS_LAMBDA_RUNTIME_API").is_ok() {
        info!("Running in AWS Lambda environment");
        lambda_runtime::run(service_fn(lambda_handler)).await
    } else {
        info!("Running in local development mode");

        let event_path = env::args().nth(1);
        let response = run_local(event_path.as_deref())
            .map_err(|e| format!("Local invocation failed: {:#}", e))?;

        println!("{}", serde_json::to_string_pretty(&response)?);
        Ok(())
    }
}
