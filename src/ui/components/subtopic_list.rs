use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::ui::theme::Theme;

pub struct SubtopicList<'a> {
    pub title: String,
    pub subtopics: &'a [String],
    pub focused: usize,
    pub selected: Option<&'a str>,
    pub theme: &'a Theme,
}

impl Widget for SubtopicList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(format!(" {} ", self.title))
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        // One row per subtopic so mouse hit-testing maps rows directly.
        let lines: Vec<Line> = self
            .subtopics
            .iter()
            .enumerate()
            .map(|(i, subtopic)| {
                let is_focused = i == self.focused;
                let is_selected = self.selected == Some(subtopic.as_str());
                let indicator = if is_focused { ">" } else { " " };
                let marker = if is_selected { "*" } else { " " };

                let style = Style::default()
                    .fg(if is_selected {
                        colors.accent()
                    } else if is_focused {
                        colors.fg()
                    } else {
                        colors.text_dim()
                    })
                    .add_modifier(if is_selected || is_focused {
                        Modifier::BOLD
                    } else {
                        Modifier::empty()
                    });

                Line::from(Span::styled(
                    format!(" {indicator}{marker} {subtopic}"),
                    style,
                ))
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}
