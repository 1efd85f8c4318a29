pub mod config;
pub mod context;
pub mod errors;
pub mod handler;
pub mod telemetry;

pub use config::EnvironmentConfig;
pub use context::{InvocationContext, LocalContext};
pub use errors::{HandlerError, Result};
pub use handler::{GreetingBody, GreetingResponse, handle, handle_with};
