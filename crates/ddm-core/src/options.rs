use serde::{Deserialize, Serialize};

use ddm_condition::SessionMap;

/// Caller-supplied settings for one resolution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolveOptions {
    /// Mapping used when a recipe canonicalizes gapped session labels.
    pub session_map: SessionMap,
    /// Opaque id carried into the specification and the artifact name.
    pub trace_id: u32,
}

impl ResolveOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_session_map(mut self, session_map: SessionMap) -> Self {
        self.session_map = session_map;
        self
    }

    #[must_use]
    pub fn with_trace_id(mut self, trace_id: u32) -> Self {
        self.trace_id = trace_id;
        self
    }
}
