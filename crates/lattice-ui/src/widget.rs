use lattice_core::{Color, Font, Rect, Span, Vec2};

/// Identity derived from a widget's label each frame.
///
/// The id is a hash of the *entire* label; everything after the first `#` is
/// hashed but never displayed, so `"Save#1"` and `"Save#2"` are distinct
/// widgets that both render as `Save`. Collisions are accepted: the hash is
/// used directly as the lookup key with no fallback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WidgetId(pub u64);

impl WidgetId {
    pub const NONE: WidgetId = WidgetId(u64::MAX);

    pub fn from_label(label: &str) -> WidgetId {
        let mut accum: u64 = 0;
        for &byte in label.as_bytes() {
            accum = accum
                .wrapping_mul(13)
                .wrapping_add((byte as u64).wrapping_mul(17));
        }
        WidgetId(accum)
    }
}

impl Default for WidgetId {
    fn default() -> Self {
        WidgetId::NONE
    }
}

/// The portion of a label that is actually rendered.
pub fn display_text(label: &str) -> &str {
    match label.find('#') {
        Some(idx) => &label[..idx],
        None => label,
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SizeKind {
    #[default]
    Pixels,
    Text,
    SumOfChildren,
    MaxOfChildren,
    PercentOfParent,
}

/// Logical size on one axis; resolved to pixels by the layout solver.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub kind: SizeKind,
    pub value: f32,
}

impl Size {
    pub fn pixels(value: f32) -> Size {
        Size {
            kind: SizeKind::Pixels,
            value,
        }
    }

    pub fn text() -> Size {
        Size {
            kind: SizeKind::Text,
            value: 0.0,
        }
    }

    pub fn sum_of_children() -> Size {
        Size {
            kind: SizeKind::SumOfChildren,
            value: 0.0,
        }
    }

    pub fn max_of_children() -> Size {
        Size {
            kind: SizeKind::MaxOfChildren,
            value: 0.0,
        }
    }

    /// `fraction` is relative to the parent's resolved size, 0.0..=1.0.
    pub fn percent_of_parent(fraction: f32) -> Size {
        Size {
            kind: SizeKind::PercentOfParent,
            value: fraction,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub thickness: f32,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Text {
    /// Arena-owned copy of the display text; empty span means no text.
    pub content: Span,
    pub font: Font,
    pub size: f32,
    pub color: Color,
}

/// Links into the per-frame widget vector. Indices, not pointers: the vector
/// is rebuilt from scratch every frame, so nothing can dangle across resets.
#[derive(Clone, Copy, Debug, Default)]
pub struct Tree {
    pub first_child: Option<u32>,
    pub last_child: Option<u32>,
    pub sibling: Option<u32>,
    pub parent: Option<u32>,
}

/// Solver outputs, filled in during `end_frame`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Layout {
    pub computed_size: [f32; 2],
    pub bounds: Rect,
    pub text_size: Vec2,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Widget {
    pub id: WidgetId,
    // Logical geometry
    pub offset: Vec2,
    pub logical_size: [Size; 2],
    pub growth_axis: Vec2,
    // Paint
    pub fill: Color,
    pub stroke: Stroke,
    pub rounding: f32,
    // Text
    pub text: Text,
    // Hierarchy
    pub tree: Tree,
    // Computed
    pub layout: Layout,
}
