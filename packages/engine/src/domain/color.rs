//! RGBA colour helpers.
//!
//! Pixels handed to the canvas are packed ABGR (little-endian `0xAABBGGRR`, bytes
//! `[R, G, B, A]`), which is what `ImageData` expects.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgba(0, 0, 0, 255);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA` (leading `#` optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        let full = match hex.len() {
            3 => {
                let mut s = String::with_capacity(8);
                for c in hex.chars() {
                    s.push(c);
                    s.push(c);
                }
                s.push_str("FF");
                s
            }
            6 => format!("{}FF", hex),
            8 => hex.to_string(),
            _ => return None,
        };

        let raw = u32::from_str_radix(&full, 16).ok()?;
        Some(Self::rgba(
            (raw >> 24) as u8,
            (raw >> 16) as u8,
            (raw >> 8) as u8,
            raw as u8,
        ))
    }

    /// `#RRGGBB` when opaque, `#RRGGBBAA` otherwise.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }

    /// `a + (b - a) * t` per channel, `t` clamped to `[0, 1]`.
    pub fn lerp(a: Color, b: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round().clamp(0.0, 255.0) as u8;
        Color::rgba(mix(a.r, b.r), mix(a.g, b.g), mix(a.b, b.b), mix(a.a, b.a))
    }

    /// Scale RGB towards black by `factor` (0 = unchanged, 1 = black); alpha kept.
    pub fn darken(self, factor: f32) -> Color {
        let keep = (1.0 - factor).clamp(0.0, 1.0);
        let scale = |c: u8| (c as f32 * keep).round() as u8;
        Color::rgba(scale(self.r), scale(self.g), scale(self.b), self.a)
    }

    #[inline]
    pub fn to_abgr(&self) -> u32 {
        ((self.a as u32) << 24) | ((self.b as u32) << 16) | ((self.g as u32) << 8) | (self.r as u32)
    }
}
