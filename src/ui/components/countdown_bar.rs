use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Widget};

use crate::session::countdown::format_time;
use crate::ui::theme::Theme;

const LOW_TIME_SECS: u32 = 60;

pub struct CountdownBar<'a> {
    pub label: String,
    pub seconds_remaining: u32,
    pub total_seconds: u32,
    pub theme: &'a Theme,
}

impl Widget for CountdownBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(format!(" {} ", self.label))
            .border_style(Style::default().fg(colors.accent_dim()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let ratio = if self.total_seconds == 0 {
            0.0
        } else {
            (self.seconds_remaining as f64 / self.total_seconds as f64).clamp(0.0, 1.0)
        };
        let filled_width = (ratio * inner.width as f64) as u16;
        let fill = if self.seconds_remaining < LOW_TIME_SECS {
            colors.warning()
        } else {
            colors.bar_filled()
        };

        for x in inner.x..inner.x + inner.width {
            let style = if x < inner.x + filled_width {
                Style::default().fg(colors.bg()).bg(fill)
            } else {
                Style::default().fg(colors.fg()).bg(colors.bar_empty())
            };
            buf[(x, inner.y)].set_style(style);
        }

        let label = format_time(self.seconds_remaining);
        let label_x = inner.x + (inner.width.saturating_sub(label.len() as u16)) / 2;
        buf.set_string(label_x, inner.y, &label, Style::default().fg(colors.fg()));
    }
}
