use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, info};

use crate::config::EnvironmentConfig;
use crate::context::InvocationContext;
use crate::errors::{HandlerError, Result};

pub const GREETING_MESSAGE: &str = "Hello from GitHub Actions deployed Lambda!";

pub const SUCCESS_STATUS_CODE: u16 = 200;

/// Decoded form of [`GreetingResponse::body`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GreetingBody {
    pub message: String,
    pub environment: String,
    pub request_id: String,
}

/// Proxy-style response: a status code plus a JSON-encoded body string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GreetingResponse {
    pub status_code: u16,
    pub body: String,
}

impl GreetingResponse {
    pub fn parse_body(&self) -> Result<GreetingBody> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Handles one invocation, reading `ENVIRONMENT` from the process.
///
/// The event is accepted and ignored.
pub fn handle<C>(event: &Value, context: &C) -> Result<GreetingResponse>
where
    C: InvocationContext + ?Sized,
{
    handle_with(event, context, &EnvironmentConfig::from_env())
}

/// Same as [`handle`] with the environment supplied by the caller.
pub fn handle_with<C>(
    _event: &Value,
    context: &C,
    config: &EnvironmentConfig,
) -> Result<GreetingResponse>
where
    C: InvocationContext + ?Sized,
{
    let request_id = context.request_id().ok_or_else(|| {
        error!("Invocation arrived without a request id");
        HandlerError::MissingRequestId
    })?;

    let body = GreetingBody {
        message: GREETING_MESSAGE.to_string(),
        environment: config.environment.clone(),
        request_id: request_id.to_string(),
    };

    let body = serde_json::to_string(&body).map_err(|e| {
        error!(request_id, "Failed to encode response body: {}", e);
        HandlerError::from(e)
    })?;

    info!(request_id, environment = %config.environment, "Greeting sent");

    Ok(GreetingResponse {
        status_code: SUCCESS_STATUS_CODE,
        body,
    })
}
