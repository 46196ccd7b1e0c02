#![allow(non_snake_case)]
//! # Lattice UI
//!
//! Immediate-mode widgets over the `lattice-core` building blocks. The
//! application rebuilds the whole tree every frame:
//!
//! ```rust,ignore
//! let mut ui = begin_frame(&mut ctx, &mut arena, screen);
//! VList(&mut ui);
//! Header(&mut ui, "Demo");
//! if Button(&mut ui, "Quit") {
//!     running = false;
//! }
//! PopParent(&mut ui);
//! end_frame(ui, &mut renderer, &host);
//! arena.reset();
//! ```
//!
//! Widgets carry no state of their own. Identity is a hash of the label
//! (everything after `#` disambiguates without being displayed), interaction
//! is the previous frame's resolved input, and the frame cache carries small
//! per-id payloads (a window's drag offset) across rebuilds.

pub mod cache;
pub mod context;
pub mod input;
pub mod widget;

mod layout;
mod paint;

pub use cache::FrameCache;
pub use context::{Ui, UiConfig, UiCtx, begin_frame, end_frame};
pub use input::{Input, Interaction, interaction_for};
pub use widget::{Size, SizeKind, Stroke, Text, Widget, WidgetId, display_text};

use lattice_core::{Color, ColorVar, FontVar, NumVar, Rect, Vec2};

/// Orientation of a [`Space`] relative to the parent's growth axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpaceKind {
    /// Along the axis the parent stacks children on.
    #[default]
    InLine,
    /// Across it.
    CrossLine,
}

fn styled_text(ui: &mut Ui, label: &str, scale: f32) -> Text {
    let font = ui.style().font(FontVar::Default);
    Text {
        content: ui.arena.write_str(display_text(label)),
        font,
        size: font.base_size * scale,
        color: Color::BLACK,
    }
}

fn list_container(ui: &mut Ui, growth_axis: Vec2) {
    let style = *ui.style();
    let index = ui.add_widget(WidgetId::NONE);
    let widget = ui.widget_mut(index);
    widget.growth_axis = growth_axis;
    widget.fill = style.color(ColorVar::ListFill);
    widget.stroke = Stroke {
        color: style.color(ColorVar::ListStroke),
        thickness: style.num(NumVar::ListThickness),
    };
    widget.logical_size = if growth_axis.x != 0.0 {
        [Size::sum_of_children(), Size::max_of_children()]
    } else if growth_axis.y != 0.0 {
        [Size::max_of_children(), Size::sum_of_children()]
    } else {
        [Size::max_of_children(), Size::max_of_children()]
    };
    ui.push_parent(index);
}

/// Container stacking children top to bottom. Close with [`PopParent`].
pub fn VList(ui: &mut Ui) {
    list_container(ui, Vec2::new(0.0, 1.0));
}

/// Container stacking children left to right. Close with [`PopParent`].
pub fn HList(ui: &mut Ui) {
    list_container(ui, Vec2::new(1.0, 0.0));
}

/// Container overlaying all children at its own origin. Close with
/// [`PopParent`].
pub fn Overlay(ui: &mut Ui) {
    list_container(ui, Vec2::ZERO);
}

pub fn PopParent(ui: &mut Ui) {
    ui.pop_parent();
}

/// [`VList`] with the matching pop guaranteed on every exit path.
pub fn VListWith(ui: &mut Ui, body: impl FnOnce(&mut Ui)) {
    VList(ui);
    body(ui);
    PopParent(ui);
}

/// [`HList`] with the matching pop guaranteed on every exit path.
pub fn HListWith(ui: &mut Ui, body: impl FnOnce(&mut Ui)) {
    HList(ui);
    body(ui);
    PopParent(ui);
}

/// Labeled button sized by the item style vars. Returns whether it was
/// clicked, as resolved at the previous frame's end.
pub fn Button(ui: &mut Ui, label: &str) -> bool {
    let id = WidgetId::from_label(label);
    let interaction = ui.interaction(id);

    let text = styled_text(ui, label, 1.0);
    let style = *ui.style();
    let index = ui.add_widget(id);

    let stroke_var = if interaction.held {
        ColorVar::ItemStrokeActive
    } else if interaction.hovered {
        ColorVar::ItemStrokeHover
    } else {
        ColorVar::ItemStroke
    };

    let widget = ui.widget_mut(index);
    widget.text = text;
    widget.fill = style.color(ColorVar::ItemFill);
    widget.rounding = style.num(NumVar::ItemRounding);
    widget.stroke = Stroke {
        color: style.color(stroke_var),
        thickness: style.num(NumVar::ItemThickness),
    };
    widget.logical_size = [
        Size::pixels(style.num(NumVar::ItemWidth)),
        Size::pixels(style.num(NumVar::ItemHeight)),
    ];

    interaction.clicked
}

/// Static text, sized to its measurement.
pub fn Label(ui: &mut Ui, text: &str) {
    let text = styled_text(ui, text, 1.0);
    let index = ui.add_widget(WidgetId::NONE);
    let widget = ui.widget_mut(index);
    widget.text = text;
    widget.logical_size = [Size::text(), Size::text()];
}

/// A [`Label`] at 1.5x the default glyph height.
pub fn Header(ui: &mut Ui, text: &str) {
    let text = styled_text(ui, text, 1.5);
    let index = ui.add_widget(WidgetId::NONE);
    let widget = ui.widget_mut(index);
    widget.text = text;
    widget.logical_size = [Size::text(), Size::text()];
}

/// In-line spacer of one spacer-style step.
pub fn Space(ui: &mut Ui) {
    SpaceWith(ui, SpaceKind::InLine, 1.0);
}

pub fn SpaceWith(ui: &mut Ui, kind: SpaceKind, multiplier: f32) {
    let parent_growth = ui.widget(ui.active_parent).growth_axis;
    let horizontal = parent_growth.x != 0.0;
    let in_line = kind == SpaceKind::InLine;
    let style = *ui.style();
    // In a horizontal parent, "in line" is a width; everywhere else the
    // orientations mirror.
    let (w, h) = if horizontal == in_line {
        (style.num(NumVar::SpacerWidth) * multiplier, 0.0)
    } else {
        (0.0, style.num(NumVar::SpacerHeight) * multiplier)
    };
    let index = ui.add_widget(WidgetId::NONE);
    ui.widget_mut(index).logical_size = [Size::pixels(w), Size::pixels(h)];
}

/// Floating, draggable container. `title` is also the identity; a `#suffix`
/// distinguishes same-titled windows. Close with [`PopParent`].
///
/// The drag offset lives in the frame cache: while the window is held, the
/// pointer's movement accumulates into the offset stored for next frame.
pub fn Window(ui: &mut Ui, title: &str, bounds: Rect) {
    let id = WidgetId::from_label(title);
    let interaction = ui.interaction(id);

    let mut drag = ui.recall(id).unwrap_or_default();
    if interaction.held {
        drag += ui.input().pointer_delta;
    }
    ui.store(id, drag);

    let style = *ui.style();
    let text = styled_text(ui, title, 1.5);
    let index = ui.add_widget(id);
    let widget = ui.widget_mut(index);
    widget.offset = bounds.corner() + drag;
    widget.logical_size = [Size::pixels(bounds.w), Size::pixels(bounds.h)];
    widget.growth_axis = Vec2::new(0.0, 1.0);
    widget.fill = style.color(ColorVar::ListFill);
    widget.stroke = Stroke {
        color: style.color(ColorVar::ListStroke),
        thickness: style.num(NumVar::ListThickness),
    };
    ui.push_parent(index);

    let header = ui.add_widget(WidgetId::NONE);
    let widget = ui.widget_mut(header);
    widget.text = text;
    widget.logical_size = [Size::text(), Size::text()];
}

/// [`Window`] with the matching pop guaranteed on every exit path.
pub fn WindowWith(ui: &mut Ui, title: &str, bounds: Rect, body: impl FnOnce(&mut Ui)) {
    Window(ui, title, bounds);
    body(ui);
    PopParent(ui);
}

#[cfg(test)]
mod tests {
    use super::*;
    use lattice_core::{Arena, Font, PointerHost, Renderer};

    #[derive(Default)]
    struct TestRenderer {
        fills: Vec<Rect>,
        outlines: Vec<Rect>,
        texts: Vec<(String, Vec2, f32)>,
    }

    impl Renderer for TestRenderer {
        fn measure_text(&mut self, _font: Font, text: &str, size: f32) -> Vec2 {
            Vec2::new(text.chars().count() as f32 * size * 0.5, size)
        }
        fn draw_rect(&mut self, bounds: Rect, _color: Color) {
            self.fills.push(bounds);
        }
        fn draw_rect_rounded(&mut self, bounds: Rect, _radius: f32, _color: Color) {
            self.fills.push(bounds);
        }
        fn draw_rect_outline(&mut self, bounds: Rect, _thickness: f32, _color: Color) {
            self.outlines.push(bounds);
        }
        fn draw_rect_rounded_outline(
            &mut self,
            bounds: Rect,
            _radius: f32,
            _thickness: f32,
            _color: Color,
        ) {
            self.outlines.push(bounds);
        }
        fn draw_text(&mut self, _font: Font, text: &str, position: Vec2, size: f32, _color: Color) {
            self.texts.push((text.to_string(), position, size));
        }
    }

    struct TestPointer {
        position: Vec2,
        pressed: bool,
        down: bool,
    }

    impl TestPointer {
        fn idle() -> Self {
            TestPointer {
                position: Vec2::new(-100.0, -100.0),
                pressed: false,
                down: false,
            }
        }
    }

    impl PointerHost for TestPointer {
        fn pointer_position(&self) -> Vec2 {
            self.position
        }
        fn primary_pressed(&self) -> bool {
            self.pressed
        }
        fn primary_down(&self) -> bool {
            self.down
        }
    }

    const SCREEN: Rect = Rect {
        x: 0.0,
        y: 0.0,
        w: 800.0,
        h: 600.0,
    };

    #[test]
    fn test_button_click_arrives_one_frame_late() {
        let mut ctx = UiCtx::new(UiConfig::default());
        let mut arena = Arena::new(4096);
        let mut renderer = TestRenderer::default();

        // Frame 1: pointer far away.
        let mut ui = begin_frame(&mut ctx, &mut arena, SCREEN);
        assert!(!Button(&mut ui, "OK"));
        end_frame(ui, &mut renderer, &TestPointer::idle());
        arena.reset();

        // Frame 2: press inside the button (first child of the root, so its
        // bounds are the item style's 80x30 at the root corner). This frame
        // still reports the previous resolve.
        let press = TestPointer {
            position: Vec2::new(40.0, 15.0),
            pressed: true,
            down: true,
        };
        let mut ui = begin_frame(&mut ctx, &mut arena, SCREEN);
        assert!(!Button(&mut ui, "OK"));
        end_frame(ui, &mut renderer, &press);
        arena.reset();

        // Frame 3: the resolved press-edge is now visible.
        let mut ui = begin_frame(&mut ctx, &mut arena, SCREEN);
        assert!(Button(&mut ui, "OK"));
        end_frame(ui, &mut renderer, &press);
    }

    #[test]
    fn test_overlapping_hover_prefers_later_widget() {
        let mut ctx = UiCtx::new(UiConfig::default());
        let mut arena = Arena::new(4096);
        let mut renderer = TestRenderer::default();

        let mut ui = begin_frame(&mut ctx, &mut arena, SCREEN);
        Overlay(&mut ui);
        Button(&mut ui, "A");
        Button(&mut ui, "B");
        PopParent(&mut ui);
        let host = TestPointer {
            position: Vec2::new(40.0, 15.0),
            pressed: false,
            down: false,
        };
        end_frame(ui, &mut renderer, &host);

        assert_eq!(ctx.input().hovered, WidgetId::from_label("B"));
    }

    #[test]
    fn test_vlist_stacks_buttons() {
        let mut ctx = UiCtx::new(UiConfig::default());
        let mut arena = Arena::new(4096);
        let mut renderer = TestRenderer::default();

        let mut ui = begin_frame(&mut ctx, &mut arena, SCREEN);
        ui.push_num_var(NumVar::ItemRounding, 0.0);
        VList(&mut ui);
        Button(&mut ui, "one");
        ui.with_num_var(NumVar::ItemHeight, 40.0, |ui| {
            Button(ui, "two");
        });
        PopParent(&mut ui);
        ui.pop_num_var();
        end_frame(ui, &mut renderer, &TestPointer::idle());

        assert_eq!(renderer.fills.len(), 2);
        assert_eq!(renderer.fills[0], Rect::new(0.0, 0.0, 80.0, 30.0));
        assert_eq!(renderer.fills[1], Rect::new(0.0, 30.0, 80.0, 40.0));
        // The list hugs its content: 80 wide, 70 tall.
        assert_eq!(renderer.outlines[0], Rect::new(0.0, 0.0, 80.0, 70.0));
    }

    #[test]
    fn test_labels_render_prefix_only() {
        let mut ctx = UiCtx::new(UiConfig::default());
        let mut arena = Arena::new(4096);
        let mut renderer = TestRenderer::default();

        let mut ui = begin_frame(&mut ctx, &mut arena, SCREEN);
        Label(&mut ui, "Save#1");
        Header(&mut ui, "Settings");
        end_frame(ui, &mut renderer, &TestPointer::idle());

        assert_eq!(renderer.texts[0].0, "Save");
        assert_eq!(renderer.texts[0].2, 18.0);
        assert_eq!(renderer.texts[1].0, "Settings");
        assert_eq!(renderer.texts[1].2, 27.0);
    }

    #[test]
    fn test_spacer_follows_parent_growth_axis() {
        let mut ctx = UiCtx::new(UiConfig::default());
        let mut arena = Arena::new(4096);

        let mut ui = begin_frame(&mut ctx, &mut arena, SCREEN);
        VList(&mut ui);
        Space(&mut ui);
        SpaceWith(&mut ui, SpaceKind::CrossLine, 2.0);
        PopParent(&mut ui);
        HList(&mut ui);
        Space(&mut ui);
        PopParent(&mut ui);

        // vlist is widget 1, its spacers 2 and 3; hlist is 4, spacer 5
        assert_eq!(
            ui.widget(2).logical_size,
            [Size::pixels(0.0), Size::pixels(20.0)]
        );
        assert_eq!(
            ui.widget(3).logical_size,
            [Size::pixels(40.0), Size::pixels(0.0)]
        );
        assert_eq!(
            ui.widget(5).logical_size,
            [Size::pixels(20.0), Size::pixels(0.0)]
        );
        end_frame(ui, &mut TestRenderer::default(), &TestPointer::idle());
    }

    #[test]
    fn test_window_drags_while_held() {
        let mut ctx = UiCtx::new(UiConfig::default());
        let mut arena = Arena::new(4096);
        let mut renderer = TestRenderer::default();
        let bounds = Rect::new(10.0, 10.0, 200.0, 150.0);

        let build = |ctx: &mut UiCtx, arena: &mut Arena, renderer: &mut TestRenderer, host: &TestPointer| {
            let mut ui = begin_frame(ctx, arena, SCREEN);
            WindowWith(&mut ui, "Win", bounds, |_| {});
            end_frame(ui, renderer, host);
            arena.reset();
        };

        // Hover below the title text so the window itself is the hit.
        let grab = Vec2::new(50.0, 100.0);
        build(&mut ctx, &mut arena, &mut renderer, &TestPointer {
            position: grab,
            pressed: false,
            down: false,
        });
        // Press; the press frame itself contributes no delta.
        build(&mut ctx, &mut arena, &mut renderer, &TestPointer {
            position: grab,
            pressed: true,
            down: true,
        });
        // Move while held.
        build(&mut ctx, &mut arena, &mut renderer, &TestPointer {
            position: grab + Vec2::new(20.0, 10.0),
            pressed: false,
            down: true,
        });
        // Next build applies the accumulated (20, 10).
        renderer.outlines.clear();
        build(&mut ctx, &mut arena, &mut renderer, &TestPointer {
            position: grab + Vec2::new(20.0, 10.0),
            pressed: false,
            down: true,
        });

        assert_eq!(renderer.outlines[0], Rect::new(30.0, 20.0, 200.0, 150.0));
    }

    #[test]
    fn test_hlist_places_children_left_to_right() {
        let mut ctx = UiCtx::new(UiConfig::default());
        let mut arena = Arena::new(4096);
        let mut renderer = TestRenderer::default();

        let mut ui = begin_frame(&mut ctx, &mut arena, SCREEN);
        ui.push_num_var(NumVar::ItemRounding, 0.0);
        HListWith(&mut ui, |ui| {
            Button(ui, "left");
            Space(ui);
            Button(ui, "right");
        });
        ui.pop_num_var();
        end_frame(ui, &mut renderer, &TestPointer::idle());

        assert_eq!(renderer.fills[0], Rect::new(0.0, 0.0, 80.0, 30.0));
        // 80 button + 20 spacer
        assert_eq!(renderer.fills[1], Rect::new(100.0, 0.0, 80.0, 30.0));
    }
}
