use ratatui::style::Color;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Padding;

pub struct TextArea {}

impl<'a> TextArea {
    pub fn chat_input() -> tui_textarea::TextArea<'a> {
        let mut textarea = tui_textarea::TextArea::default();
        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .title("Ihre Frage...")
                .padding(Padding::new(1, 1, 0, 0)),
        );

        return textarea;
    }

    pub fn path_input() -> tui_textarea::TextArea<'a> {
        let mut textarea = tui_textarea::TextArea::default();
        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title("Pfad zur Textdatei (Enter: laden, Esc: abbrechen)")
                .padding(Padding::new(1, 1, 0, 0)),
        );

        return textarea;
    }

    pub fn field_block(label: &str, focused: bool) -> Block<'a> {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .title(label.to_string())
            .padding(Padding::new(1, 1, 0, 0));

        if focused {
            block = block.border_style(Style::default().fg(Color::Yellow));
        }

        return block;
    }
}
