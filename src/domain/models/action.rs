use super::AgentPrompt;

pub enum Action {
    AgentAbort(),
    AgentRequest(AgentPrompt),
}
