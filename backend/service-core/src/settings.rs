use serde::{Deserialize, Serialize};

/// Header telling the service whether it may learn from request data.
pub const LEARNING_OPT_OUT_HEADER: &str = "x-watson-learning-opt-out";

/// Per-client settings shared by every service built on this core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSettings {
    /// Opt out of the service using request data to improve itself.
    #[serde(default = "default_learning_opt_out")]
    pub learning_opt_out: bool,
}

impl ServiceSettings {
    pub fn new(learning_opt_out: bool) -> Self {
        Self { learning_opt_out }
    }

    /// Lowercase `"true"` / `"false"` as sent on the wire.
    pub fn opt_out_header_value(&self) -> &'static str {
        if self.learning_opt_out { "true" } else { "false" }
    }
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            learning_opt_out: default_learning_opt_out(),
        }
    }
}

fn default_learning_opt_out() -> bool {
    true
}
