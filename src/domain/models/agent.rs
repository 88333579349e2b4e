#[cfg(test)]
#[path = "agent_test.rs"]
mod tests;

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::mpsc;

use super::Author;
use super::Event;
use super::FormData;

pub type AgentBox = Arc<dyn Agent + Send + Sync>;

pub struct AgentPrompt {
    pub text: String,
    pub agent_context: String,
}

impl AgentPrompt {
    pub fn new(text: &str, agent_context: &str) -> AgentPrompt {
        return AgentPrompt {
            text: text.to_string(),
            agent_context: agent_context.to_string(),
        };
    }

    /// Prompt for the first exchange of a session. The completed form is
    /// rendered once into the prompt; later turns send the raw text only and
    /// rely on the agent's own conversational context.
    pub fn first_turn(form: &FormData, text: &str, agent_context: &str) -> AgentPrompt {
        return AgentPrompt {
            text: format!("{}\n\nFrage: {text}", form.format_context()),
            agent_context: agent_context.to_string(),
        };
    }
}

pub struct AgentResponse {
    pub author: Author,
    pub text: String,
    pub done: bool,
    pub context: Option<String>,
}

#[async_trait]
pub trait Agent {
    /// Used before the first completion to verify the agent is reachable
    /// with the current configuration.
    async fn health_check(&self) -> Result<()>;

    /// Requests a completion from the agent. Incremental response fragments
    /// are streamed back to the UI through the channel, with a final `done`
    /// marker on the last fragment.
    ///
    /// Agents that maintain history hand back an opaque context string
    /// alongside `done`. It is provided again on the next prompt.
    async fn get_completion<'a>(
        &self,
        prompt: AgentPrompt,
        tx: &'a mpsc::UnboundedSender<Event>,
    ) -> Result<()>;
}
