#[derive(Debug, Clone, Default)]
pub struct ScrollState {
    pub offset: usize,
    pub content_height: usize,
    pub viewport_height: usize,
}

impl ScrollState {
    pub fn update_viewport_height(&mut self, new_height: usize) {
        self.viewport_height = new_height;
        let max_offset = self.content_height.saturating_sub(self.viewport_height);
        self.offset = self.offset.min(max_offset);
    }

    pub fn update_content_height(&mut self, new_height: usize) {
        self.content_height = new_height;
        let max_offset = self.content_height.saturating_sub(self.viewport_height);
        self.offset = self.offset.min(max_offset);
    }

    /// Scroll the minimum amount needed to bring `row` into the viewport.
    pub fn ensure_visible(&mut self, row: usize) {
        if row < self.offset {
            self.offset = row;
        } else if self.viewport_height > 0 && row >= self.offset + self.viewport_height {
            self.offset = row + 1 - self.viewport_height;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_visible_scrolls_both_directions() {
        let mut scroll = ScrollState {
            offset: 10,
            content_height: 100,
            viewport_height: 5,
        };

        scroll.ensure_visible(3);
        assert_eq!(scroll.offset, 3);

        scroll.ensure_visible(20);
        assert_eq!(scroll.offset, 16);

        // Already visible rows do not move the viewport.
        scroll.ensure_visible(18);
        assert_eq!(scroll.offset, 16);
    }

    #[test]
    fn shrinking_content_clamps_offset() {
        let mut scroll = ScrollState {
            offset: 50,
            content_height: 100,
            viewport_height: 10,
        };
        scroll.update_content_height(20);
        assert_eq!(scroll.offset, 10);
    }
}
