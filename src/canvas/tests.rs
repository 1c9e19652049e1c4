use super::Canvas;
use crate::basis::Color;

const BG: Color = Color::from_hex(0x000000);
const FG: Color = Color::from_hex(0xffffff);

#[test]
fn fill_rect_clips_to_canvas() {
    let mut canvas = Canvas::new(8, 8, BG);
    canvas.fill_rect(-2, -2, 4, 4, FG);
    assert_eq!(canvas.get(0, 0), FG);
    assert_eq!(canvas.get(1, 1), FG);
    assert_eq!(canvas.get(2, 2), BG);

    canvas.fill_rect(6, 6, 4, 4, FG);
    assert_eq!(canvas.get(7, 7), FG);
    assert_eq!(canvas.get(5, 5), BG);
}

#[test]
fn fill_circle_covers_the_disc() {
    let mut canvas = Canvas::new(32, 32, BG);
    canvas.fill_circle(16.0, 16.0, 8.0, FG);

    assert_eq!(canvas.get(16, 16), FG);
    // pixel centers at distance ~7.5 are in, ~9.5 are out
    assert_eq!(canvas.get(23, 16), FG);
    assert_eq!(canvas.get(25, 16), BG);
    assert_eq!(canvas.get(16, 8), FG);
    assert_eq!(canvas.get(16, 6), BG);
}

#[test]
fn stroke_circle_leaves_interior_untouched() {
    let mut canvas = Canvas::new(64, 64, BG);
    canvas.stroke_circle(32.0, 32.0, 20.0, 4.0, FG);

    assert_eq!(canvas.get(32, 32), BG);
    assert_eq!(canvas.get(40, 32), BG);
    assert_eq!(canvas.get(51, 32), FG);
    assert_eq!(canvas.get(56, 32), BG);
}

#[test]
fn horizontal_line_has_stroke_width() {
    let mut canvas = Canvas::new(32, 32, BG);
    canvas.line(4.0, 16.0, 28.0, 16.0, 4.0, FG);

    // rows 14..=17 have centers within 2.0 of y = 16
    for y in 14..=17 {
        assert_eq!(canvas.get(16, y), FG, "row {}", y);
    }
    assert_eq!(canvas.get(16, 13), BG);
    assert_eq!(canvas.get(16, 18), BG);

    // round cap reaches just past the endpoint
    assert_eq!(canvas.get(2, 16), FG);
    assert_eq!(canvas.get(1, 16), BG);
}

#[test]
fn diagonal_line_stays_near_the_segment() {
    let mut canvas = Canvas::new(32, 32, BG);
    canvas.line(4.0, 4.0, 28.0, 28.0, 2.0, FG);

    assert_eq!(canvas.get(16, 16), FG);
    assert_eq!(canvas.get(16, 12), BG);
    assert_eq!(canvas.get(12, 16), BG);
}

#[test]
fn zero_length_line_is_a_dot() {
    let mut canvas = Canvas::new(32, 32, BG);
    canvas.line(10.0, 10.0, 10.0, 10.0, 4.0, FG);
    assert_eq!(canvas.get(10, 10), FG);
    assert_eq!(canvas.get(13, 10), BG);
}

#[test]
fn drawing_outside_the_canvas_is_a_noop() {
    let mut canvas = Canvas::new(8, 8, BG);
    canvas.fill_circle(-100.0, -100.0, 5.0, FG);
    canvas.line(-20.0, -10.0, -10.0, -20.0, 3.0, FG);
    for y in 0..8 {
        for x in 0..8 {
            assert_eq!(canvas.get(x, y), BG, "({}, {})", x, y);
        }
    }
}

#[test]
fn rgb_bytes_flattens_row_major() {
    let mut canvas = Canvas::new(2, 2, BG);
    canvas.fill_rect(1, 0, 1, 1, Color::from_hex(0x667eea));
    let bytes = canvas.rgb_bytes();
    assert_eq!(bytes.len(), 2 * 2 * 3);
    assert_eq!(&bytes[3..6], &[0x66, 0x7e, 0xea]);
}
