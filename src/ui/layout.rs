use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

/// Screen regions for the picker. Built from the frame area alone, so the
/// mouse handler can rebuild the exact same rects for hit-testing without
/// the renderer having to publish them.
pub struct PickerLayout {
    pub header: Rect,
    pub cards: Vec<Rect>,
    pub heading: Rect,
    pub subtopics: Rect,
    pub countdown: Rect,
    pub footer: Rect,
}

impl PickerLayout {
    pub fn new(area: Rect, card_count: usize) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(7),
                Constraint::Length(2),
                Constraint::Min(3),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(area);

        let cards = if card_count == 0 {
            Vec::new()
        } else {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Ratio(1, card_count as u32); card_count])
                .split(vertical[1])
                .to_vec()
        };

        Self {
            header: vertical[0],
            cards,
            heading: vertical[2],
            subtopics: vertical[3],
            countdown: vertical[4],
            footer: vertical[5],
        }
    }

    /// Index of the card under the given cell, if any.
    pub fn card_hit(&self, column: u16, row: u16) -> Option<usize> {
        self.cards
            .iter()
            .position(|rect| rect.contains(Position::new(column, row)))
    }

    /// Index of the subtopic row under the given cell. Rows are one line
    /// each inside the bordered list, starting right below the top border.
    pub fn subtopic_hit(&self, subtopic_count: usize, column: u16, row: u16) -> Option<usize> {
        if !self.subtopics.contains(Position::new(column, row)) {
            return None;
        }
        if row <= self.subtopics.y {
            return None;
        }
        let index = (row - self.subtopics.y - 1) as usize;
        if index < subtopic_count { Some(index) } else { None }
    }
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    const MIN_POPUP_WIDTH: u16 = 50;
    const MIN_POPUP_HEIGHT: u16 = 12;

    let requested_w = area.width.saturating_mul(percent_x.min(100)) / 100;
    let requested_h = area.height.saturating_mul(percent_y.min(100)) / 100;

    let target_w = requested_w.max(MIN_POPUP_WIDTH).min(area.width);
    let target_h = requested_h.max(MIN_POPUP_HEIGHT).min(area.height);

    let left = area
        .x
        .saturating_add((area.width.saturating_sub(target_w)) / 2);
    let top = area
        .y
        .saturating_add((area.height.saturating_sub(target_h)) / 2);

    Rect::new(left, top, target_w, target_h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_deals_one_rect_per_card() {
        let layout = PickerLayout::new(Rect::new(0, 0, 120, 30), 5);
        assert_eq!(layout.cards.len(), 5);
    }

    #[test]
    fn test_card_hit_finds_each_card_center() {
        let layout = PickerLayout::new(Rect::new(0, 0, 120, 30), 5);
        for (i, rect) in layout.cards.iter().enumerate() {
            let cx = rect.x + rect.width / 2;
            let cy = rect.y + rect.height / 2;
            assert_eq!(layout.card_hit(cx, cy), Some(i));
        }
    }

    #[test]
    fn test_card_hit_misses_outside_card_row() {
        let layout = PickerLayout::new(Rect::new(0, 0, 120, 30), 5);
        assert_eq!(layout.card_hit(0, 0), None);
        assert_eq!(layout.card_hit(60, 29), None);
    }

    #[test]
    fn test_subtopic_hit_maps_rows_below_border() {
        let layout = PickerLayout::new(Rect::new(0, 0, 120, 30), 5);
        let list = layout.subtopics;
        // Top border row is not a subtopic.
        assert_eq!(layout.subtopic_hit(4, list.x + 2, list.y), None);
        assert_eq!(layout.subtopic_hit(4, list.x + 2, list.y + 1), Some(0));
        assert_eq!(layout.subtopic_hit(4, list.x + 2, list.y + 3), Some(2));
        // Rows past the list length don't count.
        assert_eq!(layout.subtopic_hit(1, list.x + 2, list.y + 3), None);
    }

    #[test]
    fn test_centered_rect_stays_within_area() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = centered_rect(60, 80, area);
        assert!(rect.x + rect.width <= area.width);
        assert!(rect.y + rect.height <= area.height);
    }
}
