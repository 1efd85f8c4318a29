/// Runtime metadata for a single invocation.
///
/// Hosting runtimes implement this so the handler never depends on a
/// particular runtime crate.
pub trait InvocationContext {
    /// Identifier assigned by the runtime, unique per invocation.
    fn request_id(&self) -> Option<&str>;
}

/// Context for invocations that do not come from a managed runtime,
/// e.g. local runs and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalContext {
    pub request_id: Option<String>,
}

impl LocalContext {
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: Some(request_id.into()),
        }
    }
}

impl InvocationContext for LocalContext {
    fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }
}
