#[cfg(test)]
#[path = "intake_test.rs"]
mod tests;

use ratatui::prelude::Backend;
use ratatui::prelude::Constraint;
use ratatui::prelude::Direction;
use ratatui::prelude::Layout;
use ratatui::prelude::Rect;
use ratatui::Frame;
use tui_textarea::Input;

use crate::domain::models::FormData;
use crate::domain::models::TextArea;
use crate::domain::models::FORM_LABELS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntakeMode {
    Editing,
    PathEntry,
}

/// Editing state for the five-field intake form. Fields are multi-line text
/// areas; one of them holds the focus, and a separate single-line area takes
/// a file path when importing a text file into the focused field.
pub struct IntakeForm<'a> {
    areas: Vec<tui_textarea::TextArea<'a>>,
    pub focus: usize,
    pub mode: IntakeMode,
    path_area: tui_textarea::TextArea<'a>,
}

impl<'a> Default for IntakeForm<'a> {
    fn default() -> IntakeForm<'a> {
        let mut form = IntakeForm {
            areas: FORM_LABELS
                .iter()
                .map(|_| return tui_textarea::TextArea::default())
                .collect(),
            focus: 0,
            mode: IntakeMode::Editing,
            path_area: TextArea::path_input(),
        };

        form.apply_focus();
        return form;
    }
}

impl<'a> IntakeForm<'a> {
    pub fn next_field(&mut self) {
        self.focus = (self.focus + 1) % self.areas.len();
        self.apply_focus();
    }

    pub fn prev_field(&mut self) {
        self.focus = (self.focus + self.areas.len() - 1) % self.areas.len();
        self.apply_focus();
    }

    pub fn input(&mut self, input: Input) {
        match self.mode {
            IntakeMode::Editing => {
                self.areas[self.focus].input(input);
            }
            IntakeMode::PathEntry => {
                self.path_area.input(input);
            }
        }
    }

    pub fn insert_str(&mut self, text: &str) {
        match self.mode {
            IntakeMode::Editing => {
                self.areas[self.focus].insert_str(text);
            }
            IntakeMode::PathEntry => {
                self.path_area.insert_str(text);
            }
        }
    }

    pub fn begin_path_entry(&mut self) {
        self.path_area = TextArea::path_input();
        self.mode = IntakeMode::PathEntry;
    }

    pub fn cancel_path_entry(&mut self) {
        self.mode = IntakeMode::Editing;
    }

    pub fn path(&self) -> String {
        return self.path_area.lines().join("");
    }

    /// Replaces the content of the focused field, used by the file import.
    pub fn set_focused_text(&mut self, text: &str) {
        let lines = text
            .split('\n')
            .map(|line| return line.to_string())
            .collect::<Vec<String>>();

        self.areas[self.focus] = tui_textarea::TextArea::new(lines);
        self.apply_focus();
    }

    pub fn to_form_data(&self) -> FormData {
        return FormData {
            title: self.field_text(0),
            description: self.field_text(1),
            requirements: self.field_text(2),
            constraints: self.field_text(3),
            additional_info: self.field_text(4),
        };
    }

    pub fn render<B: Backend>(&self, frame: &mut Frame<B>, rect: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Percentage(20); self.areas.len()])
            .split(rect);

        for (idx, area) in self.areas.iter().enumerate() {
            frame.render_widget(area.widget(), chunks[idx]);
        }
    }

    pub fn render_path_entry<B: Backend>(&self, frame: &mut Frame<B>, rect: Rect) {
        frame.render_widget(self.path_area.widget(), rect);
    }

    fn field_text(&self, idx: usize) -> String {
        return self.areas[idx].lines().join("\n");
    }

    fn apply_focus(&mut self) {
        for (idx, area) in self.areas.iter_mut().enumerate() {
            area.set_block(TextArea::field_block(FORM_LABELS[idx], idx == self.focus));
        }
    }
}
