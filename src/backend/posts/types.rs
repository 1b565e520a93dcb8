use serde::{Deserialize, Serialize};

/// Body of a new post or comment
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct TextRequest {
    #[serde(default)]
    pub text: Option<String>,
}
