#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use ratatui::prelude::Rect;

use super::IntakeForm;
use super::Scroll;
use super::Transcript;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::AgentPrompt;
use crate::domain::models::AgentResponse;
use crate::domain::models::Author;
use crate::domain::models::FormData;
use crate::domain::models::Message;
use crate::domain::models::SessionState;
use crate::domain::models::Step;

pub struct AppState<'a> {
    pub step: Step,
    pub intake: IntakeForm<'a>,
    pub session: SessionState,
    pub stream_buffer: Option<Message>,
    pub error_banner: Option<String>,
    pub waiting_for_backend: bool,
    pub show_context: bool,
    pub scroll: Scroll,
    pub last_known_width: u16,
    pub last_known_height: u16,
}

impl<'a> AppState<'a> {
    pub fn new() -> AppState<'a> {
        let step = Step::parse(&Config::get(ConfigKey::StartStep)).unwrap_or(Step::Form);

        return AppState {
            step,
            intake: IntakeForm::default(),
            session: SessionState::default(),
            stream_buffer: None,
            error_banner: None,
            waiting_for_backend: false,
            show_context: false,
            scroll: Scroll::default(),
            last_known_width: 0,
            last_known_height: 0,
        };
    }

    /// Stores the submitted form and navigates to the chat step.
    pub fn submit_form(&mut self, form: FormData) {
        self.session.set_completed_form(form);
        self.error_banner = None;
        self.step = Step::Chat;
        self.sync_scroll();
    }

    /// Starts a chat turn for the given input. The user message is committed
    /// to the transcript before any agent work happens, so it survives a
    /// failing turn. Returns `None` when no completed form is present.
    ///
    /// The form context is injected only while the transcript holds at most
    /// one earlier message, i.e. until the first exchange succeeded.
    pub fn begin_turn(&mut self, input: &str) -> Option<AgentPrompt> {
        let form = match self.session.completed_form() {
            Some(form) => form.clone(),
            None => return None,
        };

        let first_turn = self.session.messages.len() <= 1;

        self.error_banner = None;
        self.session.messages.push(Message::new(Author::User, input));
        self.waiting_for_backend = true;
        self.sync_scroll();

        if first_turn {
            return Some(AgentPrompt::first_turn(
                &form,
                input,
                &self.session.agent_context,
            ));
        }

        return Some(AgentPrompt::new(input, &self.session.agent_context));
    }

    /// Folds a streamed response fragment into the in-flight buffer. The
    /// buffer always holds the full accumulated answer; it is committed to
    /// the transcript as a single message once the stream reports done.
    pub fn handle_agent_response(&mut self, res: AgentResponse) {
        if !self.waiting_for_backend {
            return;
        }

        let mut buffer = match self.stream_buffer.take() {
            Some(message) => message,
            None => Message::new(res.author, ""),
        };
        buffer.append(&res.text);

        if res.done {
            self.session.messages.push(buffer);
            if let Some(context) = res.context {
                self.session.agent_context = context;
            }
            self.waiting_for_backend = false;
        } else {
            self.stream_buffer = Some(buffer);
        }

        self.sync_scroll();
    }

    /// Ends the turn with an error banner. The partially streamed text is
    /// dropped and never reaches the transcript; the user message stays.
    pub fn handle_agent_error(&mut self, text: String) {
        self.stream_buffer = None;
        self.error_banner = Some(text);
        self.waiting_for_backend = false;
        self.sync_scroll();
    }

    /// Abandons the in-flight turn without surfacing an error.
    pub fn abort_turn(&mut self) {
        self.stream_buffer = None;
        self.waiting_for_backend = false;
        self.sync_scroll();
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.last_known_width = rect.width;
        self.last_known_height = rect.height;
        self.sync_scroll();
    }

    pub fn transcript_width(&self) -> u16 {
        return self.last_known_width.saturating_sub(2);
    }

    fn sync_scroll(&mut self) {
        let lines = Transcript::lines(
            &self.session.messages,
            self.stream_buffer.as_ref(),
            self.transcript_width(),
        );

        self.scroll
            .set_state(lines.len() as u16, self.last_known_height);

        if self.waiting_for_backend {
            self.scroll.last();
        }
    }
}
