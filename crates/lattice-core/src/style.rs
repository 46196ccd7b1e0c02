//! Style variables consulted by widget construction.
//!
//! Three closed enumerations index fixed tables on [`Style`]. Widgets never
//! hard-code sizes or colors; they read the current table, and callers
//! override entries for a subtree through the per-frame override stacks in
//! `lattice-ui`.

use crate::color::Color;

/// Opaque font handle. Loading and rasterization belong to the host; the
/// engine only forwards the handle and queries its default glyph height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Font {
    pub handle: u64,
    pub base_size: f32,
}

impl Default for Font {
    fn default() -> Self {
        Font {
            handle: 0,
            base_size: 18.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumVar {
    SpacerWidth,
    SpacerHeight,
    ItemWidth,
    ItemHeight,
    ItemThickness,
    ItemRounding,
    ListThickness,
}

impl NumVar {
    pub const COUNT: usize = 7;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorVar {
    ItemFill,
    ItemStroke,
    ItemStrokeHover,
    ItemStrokeActive,
    ListFill,
    ListStroke,
}

impl ColorVar {
    pub const COUNT: usize = 6;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontVar {
    Default,
}

impl FontVar {
    pub const COUNT: usize = 1;
}

#[derive(Clone, Copy, Debug)]
pub struct Style {
    nums: [f32; NumVar::COUNT],
    colors: [Color; ColorVar::COUNT],
    fonts: [Font; FontVar::COUNT],
}

impl Style {
    pub fn num(&self, var: NumVar) -> f32 {
        self.nums[var as usize]
    }

    pub fn set_num(&mut self, var: NumVar, value: f32) {
        self.nums[var as usize] = value;
    }

    pub fn color(&self, var: ColorVar) -> Color {
        self.colors[var as usize]
    }

    pub fn set_color(&mut self, var: ColorVar, value: Color) {
        self.colors[var as usize] = value;
    }

    pub fn font(&self, var: FontVar) -> Font {
        self.fonts[var as usize]
    }

    pub fn set_font(&mut self, var: FontVar, value: Font) {
        self.fonts[var as usize] = value;
    }
}

impl Default for Style {
    fn default() -> Self {
        let mut style = Style {
            nums: [0.0; NumVar::COUNT],
            colors: [Color::TRANSPARENT; ColorVar::COUNT],
            fonts: [Font::default(); FontVar::COUNT],
        };
        style.set_num(NumVar::SpacerWidth, 20.0);
        style.set_num(NumVar::SpacerHeight, 20.0);
        style.set_num(NumVar::ItemWidth, 80.0);
        style.set_num(NumVar::ItemHeight, 30.0);
        style.set_num(NumVar::ItemThickness, 4.0);
        style.set_num(NumVar::ItemRounding, 0.5);
        style.set_num(NumVar::ListThickness, 2.0);
        style.set_color(ColorVar::ItemFill, Color::from_hex("#969664"));
        style.set_color(ColorVar::ItemStroke, Color::BLACK);
        style.set_color(ColorVar::ItemStrokeHover, Color::from_hex("#FFFF00"));
        style.set_color(ColorVar::ItemStrokeActive, Color::from_hex("#00FF00"));
        style.set_color(ColorVar::ListFill, Color::TRANSPARENT);
        style.set_color(ColorVar::ListStroke, Color::BLACK);
        style
    }
}
