use lattice_core::{Arena, Renderer, Vec2};

use crate::widget::Widget;

/// Emit draw calls for the laid-out tree in pre-order: construction order is
/// paint order, which is also what the hit-test relies on.
pub(crate) fn draw(widgets: &[Widget], arena: &Arena, renderer: &mut dyn Renderer) {
    for widget in widgets {
        let bounds = widget.layout.bounds;

        if widget.fill.is_visible() {
            if widget.rounding <= 0.0 {
                renderer.draw_rect(bounds, widget.fill);
            } else {
                renderer.draw_rect_rounded(bounds, widget.rounding, widget.fill);
            }
        }

        let stroke = widget.stroke;
        if stroke.thickness > 0.0 && stroke.color.is_visible() {
            if widget.rounding <= 0.0 {
                renderer.draw_rect_outline(bounds, stroke.thickness, stroke.color);
            } else {
                renderer.draw_rect_rounded_outline(
                    bounds,
                    widget.rounding,
                    stroke.thickness,
                    stroke.color,
                );
            }
        }

        if !widget.text.content.is_empty() {
            let text = arena.str(widget.text.content);
            let position = Vec2::new(
                bounds.x + (bounds.w - widget.layout.text_size.x) / 2.0,
                bounds.y + (bounds.h - widget.layout.text_size.y) / 2.0,
            );
            renderer.draw_text(
                widget.text.font,
                text,
                position,
                widget.text.size,
                widget.text.color,
            );
        }
    }
}
