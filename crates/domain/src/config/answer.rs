use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AnswerConfig {
    /// Host name placed in SRV targets. Defaults to this machine's hostname.
    #[serde(default)]
    pub target_host: Option<String>,
}
