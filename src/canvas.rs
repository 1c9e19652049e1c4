use crate::basis::Color;

#[cfg(test)]
mod tests;

/// `Canvas` is a mutable RGB pixel grid, stored row-major.
pub(crate) struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Canvas {
    pub(crate) fn new(width: u32, height: u32, fill: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; (width * height) as usize],
        }
    }

    pub(crate) fn width(&self) -> u32 {
        self.width
    }

    pub(crate) fn height(&self) -> u32 {
        self.height
    }

    pub(crate) fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    fn put(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return;
        }
        self.pixels[(y as u32 * self.width + x as u32) as usize] = color;
    }

    pub(crate) fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) {
        let x0 = (x as i64).clamp(0, self.width as i64) as u32;
        let y0 = (y as i64).clamp(0, self.height as i64) as u32;
        let x1 = (x as i64 + w as i64).clamp(0, self.width as i64) as u32;
        let y1 = (y as i64 + h as i64).clamp(0, self.height as i64) as u32;
        for yy in y0..y1 {
            for xx in x0..x1 {
                self.pixels[(yy * self.width + xx) as usize] = color;
            }
        }
    }

    /// Fills the disc of radius `r` around `(cx, cy)`. Pixels are covered when
    /// their center lies inside the disc.
    pub(crate) fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, color: Color) {
        let (x0, y0, x1, y1) = scan_box(cx, cy, r);
        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f32 + 0.5 - cx;
                let dy = y as f32 + 0.5 - cy;
                if dx * dx + dy * dy <= r * r {
                    self.put(x, y, color);
                }
            }
        }
    }

    /// Strokes the circle of radius `r`, the stroke straddling the radius by
    /// `width / 2` on each side.
    pub(crate) fn stroke_circle(&mut self, cx: f32, cy: f32, r: f32, width: f32, color: Color) {
        let outer = r + width * 0.5;
        let inner = (r - width * 0.5).max(0.0);
        let (x0, y0, x1, y1) = scan_box(cx, cy, outer);
        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f32 + 0.5 - cx;
                let dy = y as f32 + 0.5 - cy;
                let d2 = dx * dx + dy * dy;
                if inner * inner <= d2 && d2 <= outer * outer {
                    self.put(x, y, color);
                }
            }
        }
    }

    /// Draws a segment of the given stroke width with round caps: a pixel is
    /// covered when its center is within `width / 2` of the segment.
    pub(crate) fn line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, width: f32, color: Color) {
        let half = width * 0.5;
        let vx = x1 - x0;
        let vy = y1 - y0;
        let len2 = vx * vx + vy * vy;

        let (sx, sy, ex, ey) = (
            (x0.min(x1) - half - 1.0).floor() as i32,
            (y0.min(y1) - half - 1.0).floor() as i32,
            (x0.max(x1) + half + 1.0).ceil() as i32,
            (y0.max(y1) + half + 1.0).ceil() as i32,
        );
        for y in sy..=ey {
            for x in sx..=ex {
                let px = x as f32 + 0.5;
                let py = y as f32 + 0.5;
                let t = if len2 == 0.0 {
                    0.0
                } else {
                    (((px - x0) * vx + (py - y0) * vy) / len2).max(0.0).min(1.0)
                };
                let dx = px - (x0 + t * vx);
                let dy = py - (y0 + t * vy);
                if dx * dx + dy * dy <= half * half {
                    self.put(x, y, color);
                }
            }
        }
    }

    pub(crate) fn rgb_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| [p.r, p.g, p.b]).collect()
    }
}

fn scan_box(cx: f32, cy: f32, r: f32) -> (i32, i32, i32, i32) {
    (
        (cx - r - 1.0).floor() as i32,
        (cy - r - 1.0).floor() as i32,
        (cx + r + 1.0).ceil() as i32,
        (cy + r + 1.0).ceil() as i32,
    )
}
