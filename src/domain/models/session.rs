use super::FormData;
use super::Message;

/// Per-session state surviving across redraws: the completed intake form,
/// the chat transcript, and the opaque continuity context handed back by the
/// agent. Owned by exactly one session, never shared.
#[derive(Default)]
pub struct SessionState {
    completed_form: Option<FormData>,
    pub messages: Vec<Message>,
    pub agent_context: String,
}

impl SessionState {
    pub fn completed_form(&self) -> Option<&FormData> {
        return self.completed_form.as_ref();
    }

    pub fn set_completed_form(&mut self, form: FormData) {
        self.completed_form = Some(form);
    }
}
