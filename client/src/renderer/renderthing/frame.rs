pub const PIXEL_BYTES: usize = 4;

pub type Rgba = [u8; PIXEL_BYTES];

/// An RGBA frame borrowed from the pixel buffer for one redraw.
pub struct RenderFrame<'a> {
    width: u32,
    height: u32,
    buffer: &'a mut [u8],
}

impl<'a> RenderFrame<'a> {
    /// `buffer` must hold exactly `width * height` RGBA pixels.
    pub fn new(width: u32, height: u32, buffer: &'a mut [u8]) -> Self {
        debug_assert_eq!(buffer.len(), width as usize * height as usize * PIXEL_BYTES);

        Self {
            width,
            height,
            buffer,
        }
    }

    #[cfg(test)]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let index = self.byte_index(x, y);
        let mut color = [0; PIXEL_BYTES];
        color.copy_from_slice(&self.buffer[index..index + PIXEL_BYTES]);
        Some(color)
    }

    pub fn fill(&mut self, color: Rgba) {
        for pixel in self.buffer.chunks_exact_mut(PIXEL_BYTES) {
            pixel.copy_from_slice(&color);
        }
    }

    /// Fills a rectangle, clipped to the frame.
    pub fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }

        let x_end = x.saturating_add(width).min(self.width);
        let y_end = y.saturating_add(height).min(self.height);

        for row in y..y_end {
            let start = self.byte_index(x, row);
            let end = self.byte_index(x_end, row);

            for pixel in self.buffer[start..end].chunks_exact_mut(PIXEL_BYTES) {
                pixel.copy_from_slice(&color);
            }
        }
    }

    fn byte_index(&self, x: u32, y: u32) -> usize {
        (x as usize + y as usize * self.width as usize) * PIXEL_BYTES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba = [255, 0, 0, 255];
    const BLACK: Rgba = [0, 0, 0, 255];

    #[test]
    fn fill_covers_every_pixel() {
        let mut buffer = vec![0; 3 * 2 * PIXEL_BYTES];
        let mut frame = RenderFrame::new(3, 2, &mut buffer);

        frame.fill(RED);

        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(frame.pixel(x, y), Some(RED));
            }
        }
    }

    #[test]
    fn fill_rect_paints_only_the_rect() {
        let mut buffer = vec![0; 4 * 4 * PIXEL_BYTES];
        let mut frame = RenderFrame::new(4, 4, &mut buffer);
        frame.fill(BLACK);

        frame.fill_rect(1, 2, 2, 1, RED);

        for y in 0..4 {
            for x in 0..4 {
                let expected = if y == 2 && (1..3).contains(&x) { RED } else { BLACK };
                assert_eq!(frame.pixel(x, y), Some(expected), "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn fill_rect_clips_at_edges() {
        let mut buffer = vec![0; 3 * 3 * PIXEL_BYTES];
        let mut frame = RenderFrame::new(3, 3, &mut buffer);
        frame.fill(BLACK);

        frame.fill_rect(2, 2, 10, 10, RED);
        frame.fill_rect(5, 0, 1, 1, RED);

        assert_eq!(frame.pixel(2, 2), Some(RED));
        assert_eq!(frame.pixel(1, 2), Some(BLACK));
        assert_eq!(frame.pixel(2, 1), Some(BLACK));
        // Clipped rows must not bleed into the start of the next row.
        assert_eq!(frame.pixel(0, 0), Some(BLACK));
    }

    #[test]
    fn pixel_out_of_frame_is_none() {
        let mut buffer = vec![0; 2 * 2 * PIXEL_BYTES];
        let frame = RenderFrame::new(2, 2, &mut buffer);

        assert_eq!(frame.pixel(2, 0), None);
        assert_eq!(frame.pixel(0, 2), None);
    }
}
