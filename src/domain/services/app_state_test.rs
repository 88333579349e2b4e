use super::AppState;
use super::IntakeForm;
use super::Scroll;
use crate::domain::models::AgentResponse;
use crate::domain::models::Author;
use crate::domain::models::FormData;
use crate::domain::models::SessionState;
use crate::domain::models::Step;

impl Default for AppState<'static> {
    fn default() -> AppState<'static> {
        return AppState {
            step: Step::Chat,
            intake: IntakeForm::default(),
            session: SessionState::default(),
            stream_buffer: None,
            error_banner: None,
            waiting_for_backend: false,
            show_context: false,
            scroll: Scroll::default(),
            last_known_width: 100,
            last_known_height: 40,
        };
    }
}

fn fixture_form() -> FormData {
    return FormData {
        title: "X".to_string(),
        description: "Y".to_string(),
        ..FormData::default()
    };
}

fn chunk(text: &str, done: bool) -> AgentResponse {
    return AgentResponse {
        author: Author::Assistant,
        text: text.to_string(),
        done,
        context: None,
    };
}

fn run_successful_turn(app_state: &mut AppState<'static>, input: &str, reply: &str) {
    app_state.begin_turn(input).unwrap();
    app_state.handle_agent_response(chunk(reply, true));
}

#[test]
fn it_refuses_turns_without_a_completed_form() {
    let mut app_state = AppState::default();

    assert!(app_state.begin_turn("Hallo").is_none());
    assert!(app_state.session.messages.is_empty());
    assert!(!app_state.waiting_for_backend);
}

#[test]
fn it_injects_the_context_on_the_first_turn() {
    let mut app_state = AppState::default();
    app_state.session.set_completed_form(fixture_form());

    let prompt = app_state.begin_turn("What next?").unwrap();

    assert_eq!(
        prompt.text,
        format!("{}\n\nFrage: What next?", fixture_form().format_context())
    );
    assert_eq!(app_state.session.messages.len(), 1);
    assert_eq!(app_state.session.messages[0].author, Author::User);
    assert_eq!(app_state.session.messages[0].text, "What next?");
    assert!(app_state.waiting_for_backend);
}

#[test]
fn it_sends_raw_text_on_later_turns() {
    let mut app_state = AppState::default();
    app_state.session.set_completed_form(fixture_form());
    run_successful_turn(&mut app_state, "What next?", "Ein Plan.");

    let prompt = app_state.begin_turn("Und dann?").unwrap();

    assert_eq!(prompt.text, "Und dann?");
}

#[test]
fn it_accumulates_stream_chunks() {
    let mut app_state = AppState::default();
    app_state.session.set_completed_form(fixture_form());
    app_state.begin_turn("Hallo").unwrap();

    let mut displayed: Vec<String> = vec![];
    for (text, done) in [("Hel", false), ("lo", false), (" world", true)] {
        app_state.handle_agent_response(chunk(text, done));
        if let Some(buffer) = app_state.stream_buffer.as_ref() {
            displayed.push(buffer.text.to_string());
        }
    }

    assert_eq!(displayed, vec!["Hel".to_string(), "Hello".to_string()]);
    assert!(app_state.stream_buffer.is_none());
    assert!(!app_state.waiting_for_backend);

    let last = app_state.session.messages.last().unwrap();
    assert_eq!(last.author, Author::Assistant);
    assert_eq!(last.text, "Hello world");
}

#[test]
fn it_appends_two_messages_per_successful_turn() {
    let mut app_state = AppState::default();
    app_state.session.set_completed_form(fixture_form());

    run_successful_turn(&mut app_state, "eins", "Antwort eins");
    run_successful_turn(&mut app_state, "zwei", "Antwort zwei");
    run_successful_turn(&mut app_state, "drei", "Antwort drei");

    assert_eq!(app_state.session.messages.len(), 6);
    assert_eq!(app_state.session.messages[2].text, "zwei");
    assert_eq!(app_state.session.messages[3].text, "Antwort zwei");
}

#[test]
fn it_keeps_the_user_message_when_the_stream_fails() {
    let mut app_state = AppState::default();
    app_state.session.set_completed_form(fixture_form());
    app_state.begin_turn("Hallo").unwrap();
    app_state.handle_agent_response(chunk("Teil", false));

    app_state.handle_agent_error("Ein Fehler ist aufgetreten: kaputt".to_string());

    assert_eq!(app_state.session.messages.len(), 1);
    assert_eq!(app_state.session.messages[0].author, Author::User);
    assert!(app_state.stream_buffer.is_none());
    assert!(!app_state.waiting_for_backend);
    assert_eq!(
        app_state.error_banner.as_deref(),
        Some("Ein Fehler ist aufgetreten: kaputt")
    );
}

#[test]
fn it_clears_the_banner_on_the_next_turn() {
    let mut app_state = AppState::default();
    app_state.session.set_completed_form(fixture_form());
    app_state.begin_turn("Hallo").unwrap();
    app_state.handle_agent_error("Ein Fehler ist aufgetreten: kaputt".to_string());

    app_state.begin_turn("Nochmal").unwrap();

    assert!(app_state.error_banner.is_none());
}

#[test]
fn it_ignores_stale_responses_after_an_abort() {
    let mut app_state = AppState::default();
    app_state.session.set_completed_form(fixture_form());
    app_state.begin_turn("Hallo").unwrap();

    app_state.abort_turn();
    app_state.handle_agent_response(chunk("zu spät", false));

    assert!(app_state.stream_buffer.is_none());
    assert_eq!(app_state.session.messages.len(), 1);
}

#[test]
fn it_stores_the_agent_context_for_the_next_prompt() {
    let mut app_state = AppState::default();
    app_state.session.set_completed_form(fixture_form());
    app_state.begin_turn("Hallo").unwrap();
    app_state.handle_agent_response(AgentResponse {
        author: Author::Assistant,
        text: "Tag".to_string(),
        done: true,
        context: Some("[1,2,3]".to_string()),
    });

    let prompt = app_state.begin_turn("Weiter").unwrap();

    assert_eq!(app_state.session.agent_context, "[1,2,3]");
    assert_eq!(prompt.agent_context, "[1,2,3]");
}

#[test]
fn it_navigates_to_the_chat_step_on_submit() {
    let mut app_state = AppState {
        step: Step::Form,
        ..AppState::default()
    };

    app_state.submit_form(fixture_form());

    assert_eq!(app_state.step, Step::Chat);
    assert_eq!(app_state.session.completed_form(), Some(&fixture_form()));
}
