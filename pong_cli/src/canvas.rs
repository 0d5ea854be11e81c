use pong_core::{Canvas, Color, Score};

/// Character-cell canvas: rasterizes the facade's filled rectangles into a
/// text grid scaled down from arena coordinates.
pub struct TermCanvas {
    cols: usize,
    rows: usize,
    world_w: f64,
    world_h: f64,
    cells: Vec<char>,
    brush: char,
}

impl TermCanvas {
    pub fn new(cols: usize, rows: usize, world_w: f64, world_h: f64) -> Self {
        Self {
            cols,
            rows,
            world_w,
            world_h,
            cells: vec![' '; cols * rows],
            brush: '#',
        }
    }

    pub fn begin_frame(&mut self) {
        for cell in &mut self.cells {
            *cell = ' ';
        }
    }

    /// Render the grid with a border and score line. The leading escape
    /// rewinds the cursor so successive frames overdraw in place.
    pub fn present(&self, score: &Score) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.rows * 3 + 80);
        out.push_str("\x1b[2J\x1b[H");
        out.push_str(&format!(
            "  Player One {:>2}  :  {:<2} Player Two\n",
            score.player_one, score.player_two
        ));

        out.push('+');
        out.extend(std::iter::repeat('-').take(self.cols));
        out.push_str("+\n");
        for row in 0..self.rows {
            out.push('|');
            out.extend(self.cells[row * self.cols..(row + 1) * self.cols].iter());
            out.push_str("|\n");
        }
        out.push('+');
        out.extend(std::iter::repeat('-').take(self.cols));
        out.push_str("+\n");
        out
    }

    fn glyph(color: Color) -> char {
        match color {
            Color::YELLOW => 'o',
            _ => '#',
        }
    }

    fn cell_span(world_at: f64, world_extent: f64, world_size: f64, cells: usize) -> (i64, i64) {
        let scale = cells as f64 / world_size;
        let lo = ((world_at - world_extent / 2.0) * scale).floor() as i64;
        let hi = ((world_at + world_extent / 2.0) * scale).ceil() as i64;
        (lo.max(0), hi.min(cells as i64))
    }
}

impl Canvas for TermCanvas {
    fn set_color(&mut self, color: Color) {
        self.brush = Self::glyph(color);
    }

    fn fill_rect(&mut self, cx: f64, cy: f64, w: f64, h: f64) {
        let (x0, x1) = Self::cell_span(cx, w, self.world_w, self.cols);
        let (y0, y1) = Self::cell_span(cy, h, self.world_h, self.rows);
        for row in y0..y1 {
            for col in x0..x1 {
                self.cells[row as usize * self.cols + col as usize] = self.brush;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_rect_marks_scaled_cells() {
        let mut canvas = TermCanvas::new(80, 24, 800.0, 600.0);
        canvas.set_color(Color::YELLOW);
        canvas.fill_rect(400.0, 300.0, 20.0, 25.0);

        let rendered = canvas.present(&Score::new());
        assert!(rendered.contains('o'), "ball glyph appears in the frame");

        // Center cell: x 400/800*80 = 40, y 300/600*24 = 12.
        assert_eq!(canvas.cells[12 * 80 + 40], 'o');
        assert_eq!(canvas.cells[0], ' ', "far cells untouched");
    }

    #[test]
    fn test_fill_rect_clips_to_the_grid() {
        let mut canvas = TermCanvas::new(80, 24, 800.0, 600.0);
        canvas.set_color(Color::WHITE);
        // Centered past the right edge; must not panic or wrap.
        canvas.fill_rect(810.0, -20.0, 100.0, 100.0);

        assert_eq!(canvas.cells[79], '#', "clipped corner still painted");
    }

    #[test]
    fn test_begin_frame_clears() {
        let mut canvas = TermCanvas::new(10, 4, 800.0, 600.0);
        canvas.set_color(Color::WHITE);
        canvas.fill_rect(400.0, 300.0, 800.0, 600.0);
        canvas.begin_frame();

        assert!(canvas.cells.iter().all(|&c| c == ' '));
    }
}
