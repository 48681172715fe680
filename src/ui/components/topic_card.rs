use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::catalog::Topic;
use crate::ui::theme::Theme;

pub struct TopicCard<'a> {
    pub topic: &'a Topic,
    pub key_hint: usize,
    pub focused: bool,
    pub selected: bool,
    pub theme: &'a Theme,
}

impl Widget for TopicCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let card_style = if self.selected {
            Style::default()
                .bg(colors.card_selected_bg())
                .fg(colors.card_selected_fg())
        } else {
            Style::default().bg(colors.bg()).fg(colors.fg())
        };

        let border_color = if self.focused {
            colors.border_focused()
        } else {
            colors.border()
        };

        let block = Block::bordered()
            .border_style(Style::default().fg(border_color))
            .style(card_style);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let hint_color = if self.selected {
            colors.card_selected_fg()
        } else {
            colors.text_dim()
        };

        let name_style = card_style.add_modifier(if self.selected || self.focused {
            Modifier::BOLD
        } else {
            Modifier::empty()
        });

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("[{}]", self.key_hint),
                Style::default().fg(hint_color),
            )),
            Line::from(Span::styled(self.topic.name.clone(), name_style)),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}
