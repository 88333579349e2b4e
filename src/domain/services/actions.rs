#[cfg(test)]
#[path = "actions_test.rs"]
mod tests;

use anyhow::Result;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::domain::models::Action;
use crate::domain::models::AgentBox;
use crate::domain::models::Event;
use crate::infrastructure::agents::AgentManager;

fn worker_error(err: anyhow::Error, tx: &mpsc::UnboundedSender<Event>) -> Result<()> {
    tracing::error!(error = ?err, "agent turn failed");
    tx.send(Event::AgentError(format!(
        "Ein Fehler ist aufgetreten: {err}"
    )))?;

    return Ok(());
}

/// Background worker owning the lazily created agent handle. Requests arrive
/// over the action channel; response fragments and errors flow back to the
/// UI over the event channel. Failures never escape a turn.
#[derive(Default)]
pub struct ActionsService {
    agent: Option<AgentBox>,
    worker: Option<JoinHandle<Result<()>>>,
}

impl ActionsService {
    pub async fn start(
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        let mut service = ActionsService::default();

        loop {
            let action = rx.recv().await;
            if action.is_none() {
                break;
            }

            service.process(action.unwrap(), &tx).await?;
        }

        return Ok(());
    }

    async fn process(&mut self, action: Action, tx: &mpsc::UnboundedSender<Event>) -> Result<()> {
        match action {
            Action::AgentAbort() => {
                if let Some(worker) = self.worker.take() {
                    worker.abort();
                }
            }
            Action::AgentRequest(prompt) => {
                let agent = match self.ensure_agent().await {
                    Ok(agent) => agent,
                    Err(err) => return worker_error(err, tx),
                };

                let worker_tx = tx.clone();
                self.worker = Some(tokio::spawn(async move {
                    if let Err(err) = agent.get_completion(prompt, &worker_tx).await {
                        return worker_error(err, &worker_tx);
                    }

                    return Ok(());
                }));
            }
        }

        return Ok(());
    }

    /// Hands out the session's agent handle, creating it on the first call.
    /// A failed health check leaves the slot empty so the next turn retries.
    async fn ensure_agent(&mut self) -> Result<AgentBox> {
        if let Some(agent) = &self.agent {
            return Ok(agent.clone());
        }

        return self.initialize(AgentManager::get()?).await;
    }

    async fn initialize(&mut self, agent: AgentBox) -> Result<AgentBox> {
        agent.health_check().await?;
        self.agent = Some(agent.clone());
        return Ok(agent);
    }
}
