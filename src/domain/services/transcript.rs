#[cfg(test)]
#[path = "transcript_test.rs"]
mod tests;

use ratatui::prelude::Color;
use ratatui::prelude::Line;
use ratatui::prelude::Modifier;
use ratatui::prelude::Span;
use ratatui::prelude::Style;

use crate::domain::models::Author;
use crate::domain::models::Message;

pub struct Transcript {}

impl Transcript {
    /// Projects the transcript, plus a partially streamed response when one
    /// is in flight, into renderable lines. Pure function of its inputs,
    /// recomputed on every draw.
    pub fn lines<'a>(
        messages: &'a [Message],
        stream_buffer: Option<&'a Message>,
        line_max_width: u16,
    ) -> Vec<Line<'a>> {
        let mut lines: Vec<Line<'a>> = vec![];

        for message in messages.iter().chain(stream_buffer) {
            let color = match message.author {
                Author::User => Color::Cyan,
                Author::Assistant => Color::Green,
            };

            lines.push(Line::from(Span::styled(
                message.author.to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )));

            for text_line in message.as_string_lines(line_max_width as usize) {
                lines.push(Line::from(text_line));
            }

            lines.push(Line::from(""));
        }

        return lines;
    }
}
