use tui_textarea::Input;

use super::AgentResponse;

pub enum Event {
    AgentError(String),
    AgentResponse(AgentResponse),
    KeyboardBackTab(),
    KeyboardCharInput(Input),
    KeyboardCTRLC(),
    KeyboardCTRLK(),
    KeyboardCTRLO(),
    KeyboardCTRLS(),
    KeyboardEnter(),
    KeyboardEsc(),
    KeyboardPaste(String),
    KeyboardTab(),
    UIResize(),
    UIScrollDown(),
    UIScrollPageDown(),
    UIScrollPageUp(),
    UIScrollUp(),
    UITick(),
}
