pub mod ollama;

use std::sync::Arc;

use anyhow::Result;

use crate::domain::models::AgentBox;

pub struct AgentManager {}

impl AgentManager {
    pub fn get() -> Result<AgentBox> {
        return Ok(Arc::new(ollama::Ollama::default()));
    }
}
