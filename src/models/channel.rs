use serde::{Deserialize, Serialize};

/// A sales/distribution context identified by a code (e.g. "WEB-EU")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Channel {
    code: String,
}

impl Channel {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }

    pub fn code(&self) -> &str {
        &self.code
    }
}
