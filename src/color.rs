/// Linear RGB color with components in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

pub const BLACK: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
};

impl Color {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value.
    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as f32 / 255.0,
            g: ((hex >> 8) & 0xff) as f32 / 255.0,
            b: (hex & 0xff) as f32 / 255.0,
        }
    }

    /// Linear interpolation toward `other`; `t = 0` is exactly `self`,
    /// `t = 1` is exactly `other`. The two-product form keeps the
    /// endpoints bit-exact in f32, which the segment coloring relies on
    /// when alpha saturates.
    pub fn lerp(self, other: Color, t: f32) -> Self {
        let s = 1.0 - t;
        Self {
            r: self.r * s + other.r * t,
            g: self.g * s + other.g * t,
            b: self.b * s + other.b * t,
        }
    }

    /// Componentwise difference, used by the additive blend mode.
    pub fn sub(self, other: Color) -> Self {
        Self {
            r: self.r - other.r,
            g: self.g - other.g,
            b: self.b - other.b,
        }
    }

    /// Rec. 601 luma score, for ranking colors by perceived brightness.
    pub fn brightness(self) -> f32 {
        0.299 * self.r + 0.587 * self.g + 0.114 * self.b
    }
}

/// Colors resolved once at effect construction and reused every frame.
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    pub foreground: Color,
    pub background: Color,
    /// Cached `foreground - background`, the additive-blend lerp target.
    pub diff: Color,
    pub highlight: Color,
}

impl Palette {
    pub fn new(foreground: Color, background: Color, highlight: Color) -> Self {
        Self {
            foreground,
            background,
            diff: foreground.sub(background),
            highlight,
        }
    }
}
