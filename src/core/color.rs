/// Straight (unpremultiplied) RGBA color, the form handed to palettes and UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn transparent() -> Self {
        Self { r: 0, g: 0, b: 0, a: 0 }
    }

    /// Scales the color channels by alpha. Truncating, so the result never
    /// exceeds the alpha channel.
    pub fn to_premultiplied(self) -> ColorBgra {
        let a = self.a as u32;
        ColorBgra {
            b: (self.b as u32 * a / 255) as u8,
            g: (self.g as u32 * a / 255) as u8,
            r: (self.r as u32 * a / 255) as u8,
            a: self.a,
        }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }
}

/// Premultiplied pixel in the BGRA byte order used by layer storage.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColorBgra {
    pub b: u8,
    pub g: u8,
    pub r: u8,
    pub a: u8,
}

impl ColorBgra {
    pub const TRANSPARENT: ColorBgra = ColorBgra { b: 0, g: 0, r: 0, a: 0 };

    pub const fn from_bgra(b: u8, g: u8, r: u8, a: u8) -> Self {
        Self { b, g, r, a }
    }

    /// Divides the color channels back out of alpha.
    ///
    /// Zero alpha has no recoverable color and maps to transparent black.
    pub fn to_straight_alpha(self) -> Color {
        if self.a == 0 {
            return Color::transparent();
        }
        let a = self.a as u32;
        let unscale = |c: u8| ((c as u32 * 255) / a).min(255) as u8;
        Color::new(unscale(self.r), unscale(self.g), unscale(self.b), self.a)
    }

    /// Unweighted per-channel mean of premultiplied pixels.
    ///
    /// Sums are exact integers, so the result does not depend on the order of
    /// `colors`. An empty slice yields [`ColorBgra::TRANSPARENT`].
    pub fn blend_premultiplied(colors: &[ColorBgra]) -> ColorBgra {
        match colors {
            [] => ColorBgra::TRANSPARENT,
            [single] => *single,
            _ => {
                let (mut b, mut g, mut r, mut a) = (0u32, 0u32, 0u32, 0u32);
                for c in colors {
                    b += c.b as u32;
                    g += c.g as u32;
                    r += c.r as u32;
                    a += c.a as u32;
                }
                let n = colors.len() as u32;
                ColorBgra::from_bgra((b / n) as u8, (g / n) as u8, (r / n) as u8, (a / n) as u8)
            }
        }
    }

    /// Premultiplied source-over: `src + dst * (1 - src.a)`, with the source
    /// first scaled by `opacity`.
    #[inline(always)]
    pub fn over(self, dst: ColorBgra, opacity: u8) -> ColorBgra {
        let op = opacity as u32;
        let scale = |c: u8| c as u32 * op / 255;
        let (sb, sg, sr, sa) = (scale(self.b), scale(self.g), scale(self.r), scale(self.a));
        if sa == 0 && sb == 0 && sg == 0 && sr == 0 {
            return dst;
        }
        let inv = 255 - sa;
        let mix = |s: u32, d: u8| (s + d as u32 * inv / 255).min(255) as u8;
        ColorBgra::from_bgra(mix(sb, dst.b), mix(sg, dst.g), mix(sr, dst.r), mix(sa, dst.a))
    }
}
