/// `Color` is a 24-bit RGB color.
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) struct Color {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
}

impl std::fmt::Debug for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Color {
    pub(crate) const fn from_hex(hex: u32) -> Self {
        Self {
            r: (hex >> 16) as u8,
            g: (hex >> 8) as u8,
            b: hex as u8,
        }
    }

    /// Blends each channel toward `other` by `t` in `0.0..=1.0`, truncating
    /// fractional components.
    pub(crate) fn lerp(self, other: Self, t: f32) -> Self {
        let blend = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t) as u8;
        Self {
            r: blend(self.r, other.r),
            g: blend(self.g, other.g),
            b: blend(self.b, other.b),
        }
    }
}

#[test]
fn test_from_hex() {
    let color = Color::from_hex(0x667eea);
    assert_eq!((color.r, color.g, color.b), (0x66, 0x7e, 0xea));
    assert_eq!(format!("{:?}", color), "#667eea");
}

#[test]
fn test_lerp() {
    let a = Color::from_hex(0x667eea);
    let b = Color::from_hex(0x764ba2);
    assert_eq!(a.lerp(b, 0.0), a);
    assert_eq!(a.lerp(b, 1.0), b);

    // fractional results truncate toward zero
    let mid = Color::from_hex(0x000000).lerp(Color::from_hex(0x0000ff), 0.5);
    assert_eq!(mid, Color { r: 0, g: 0, b: 127 });
}
