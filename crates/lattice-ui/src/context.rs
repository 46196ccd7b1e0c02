//! Frame context: persistent storage plus the per-frame builder.
//!
//! [`UiCtx`] outlives frames and owns widget storage, the last resolved
//! [`Input`], and the frame cache. [`begin_frame`] hands out a [`Ui`] that
//! borrows the context and a frame arena; widget calls append to the
//! pre-order list until [`end_frame`] runs layout, interaction, paint, and
//! the cache swap.

use lattice_core::{
    Arena, BoundedVec, Color, ColorVar, Font, FontVar, NumVar, PointerHost, Rect, Renderer, Style,
    Vec2,
};

use crate::cache::FrameCache;
use crate::input::{self, Input, Interaction};
use crate::widget::{Size, Widget, WidgetId};
use crate::{layout, paint};

/// Everything a context needs up front; no load-time globals.
#[derive(Clone, Copy, Debug)]
pub struct UiConfig {
    /// Upper bound on widgets per frame, root included.
    pub max_widgets: usize,
    pub style: Style,
    /// Depth of each of the three style override stacks.
    pub style_stack_depth: usize,
    /// Per-id state slots in the frame cache.
    pub cache_entries: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            max_widgets: 1024,
            style: Style::default(),
            style_stack_depth: 20,
            cache_entries: 64,
        }
    }
}

pub struct UiCtx {
    widgets: Vec<Widget>,
    max_widgets: usize,
    style_stack_depth: usize,
    base_style: Style,
    input: Input,
    cache: FrameCache,
}

impl UiCtx {
    pub fn new(config: UiConfig) -> Self {
        assert!(config.max_widgets > 0, "need room for at least the root widget");
        UiCtx {
            widgets: Vec::with_capacity(config.max_widgets),
            max_widgets: config.max_widgets,
            style_stack_depth: config.style_stack_depth,
            base_style: config.style,
            input: Input::default(),
            cache: FrameCache::new(config.cache_entries),
        }
    }

    /// Input as resolved at the most recent `end_frame`.
    pub fn input(&self) -> &Input {
        &self.input
    }

    /// The style every frame starts from.
    pub fn base_style_mut(&mut self) -> &mut Style {
        &mut self.base_style
    }

    pub fn set_default_font(&mut self, font: Font) {
        self.base_style.set_font(FontVar::Default, font);
    }
}

/// Per-frame builder. One per frame; dropped by [`end_frame`].
pub struct Ui<'frame> {
    pub(crate) ctx: &'frame mut UiCtx,
    pub(crate) arena: &'frame mut Arena,
    pub(crate) active_parent: u32,
    pub(crate) style: Style,
    num_stack: BoundedVec<(NumVar, f32)>,
    color_stack: BoundedVec<(ColorVar, Color)>,
    font_stack: BoundedVec<(FontVar, Font)>,
}

/// Reset the context for a new frame and create the root widget sized to
/// `bounds`, growing vertically, as the active parent.
pub fn begin_frame<'frame>(
    ctx: &'frame mut UiCtx,
    arena: &'frame mut Arena,
    bounds: Rect,
) -> Ui<'frame> {
    ctx.widgets.clear();

    let mut root = Widget::default();
    root.offset = bounds.corner();
    root.logical_size = [Size::pixels(bounds.w), Size::pixels(bounds.h)];
    root.growth_axis = Vec2::new(0.0, 1.0);
    ctx.widgets.push(root);

    let style = ctx.base_style;
    let depth = ctx.style_stack_depth;
    Ui {
        ctx,
        arena,
        active_parent: 0,
        style,
        num_stack: BoundedVec::new(depth),
        color_stack: BoundedVec::new(depth),
        font_stack: BoundedVec::new(depth),
    }
}

/// Finish the frame: layout, interaction resolution, draw emission, cache
/// swap. Panics if container or style nesting is unbalanced.
pub fn end_frame(mut ui: Ui<'_>, renderer: &mut dyn Renderer, host: &dyn PointerHost) {
    assert_eq!(ui.active_parent, 0, "unbalanced container push/pop");
    assert!(
        ui.num_stack.is_empty() && ui.color_stack.is_empty() && ui.font_stack.is_empty(),
        "unbalanced style push/pop"
    );

    layout::solve(&mut ui.ctx.widgets, &*ui.arena, renderer);
    ui.ctx.input = input::resolve(&ui.ctx.widgets, host, &ui.ctx.input);
    paint::draw(&ui.ctx.widgets, &*ui.arena, renderer);
    ui.ctx.cache.swap();
}

impl Ui<'_> {
    /// Append a widget under the active parent and onto the pre-order list.
    /// Exceeding the configured widget bound is a caller contract violation.
    pub fn add_widget(&mut self, id: WidgetId) -> u32 {
        assert!(
            self.ctx.widgets.len() < self.ctx.max_widgets,
            "widget storage exhausted; raise UiConfig::max_widgets"
        );
        let index = self.ctx.widgets.len() as u32;
        let mut widget = Widget::default();
        widget.id = id;
        widget.tree.parent = Some(self.active_parent);
        self.ctx.widgets.push(widget);

        let parent = self.active_parent as usize;
        let prev_last = self.ctx.widgets[parent].tree.last_child;
        match prev_last {
            Some(last) => self.ctx.widgets[last as usize].tree.sibling = Some(index),
            None => self.ctx.widgets[parent].tree.first_child = Some(index),
        }
        self.ctx.widgets[parent].tree.last_child = Some(index);
        index
    }

    pub fn widget(&self, index: u32) -> &Widget {
        &self.ctx.widgets[index as usize]
    }

    pub fn widget_mut(&mut self, index: u32) -> &mut Widget {
        &mut self.ctx.widgets[index as usize]
    }

    /// Make `index` the parent for subsequent widget calls.
    pub fn push_parent(&mut self, index: u32) {
        self.active_parent = index;
    }

    /// Restore the previous parent. The chain is the widgets' own parent
    /// links; there is no separate stack to unbalance.
    pub fn pop_parent(&mut self) {
        self.active_parent = self.ctx.widgets[self.active_parent as usize]
            .tree
            .parent
            .expect("pop_parent on the frame root");
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn input(&self) -> &Input {
        &self.ctx.input
    }

    pub fn interaction(&self, id: WidgetId) -> Interaction {
        input::interaction_for(&self.ctx.input, id)
    }

    /// Per-id state from the previous frame.
    pub fn recall(&self, id: WidgetId) -> Option<Vec2> {
        self.ctx.cache.recall(id)
    }

    /// Per-id state for the next frame.
    pub fn store(&mut self, id: WidgetId, value: Vec2) {
        self.ctx.cache.store(id, value);
    }

    pub fn push_num_var(&mut self, var: NumVar, value: f32) {
        let prev = self.style.num(var);
        self.num_stack
            .push((var, prev))
            .expect("num-var stack overflow; raise UiConfig::style_stack_depth");
        self.style.set_num(var, value);
    }

    pub fn pop_num_var(&mut self) {
        let (var, prev) = self.num_stack.pop().expect("pop_num_var without a push");
        self.style.set_num(var, prev);
    }

    pub fn push_color_var(&mut self, var: ColorVar, value: Color) {
        let prev = self.style.color(var);
        self.color_stack
            .push((var, prev))
            .expect("color-var stack overflow; raise UiConfig::style_stack_depth");
        self.style.set_color(var, value);
    }

    pub fn pop_color_var(&mut self) {
        let (var, prev) = self.color_stack.pop().expect("pop_color_var without a push");
        self.style.set_color(var, prev);
    }

    pub fn push_font_var(&mut self, var: FontVar, value: Font) {
        let prev = self.style.font(var);
        self.font_stack
            .push((var, prev))
            .expect("font-var stack overflow; raise UiConfig::style_stack_depth");
        self.style.set_font(var, value);
    }

    pub fn pop_font_var(&mut self) {
        let (var, prev) = self.font_stack.pop().expect("pop_font_var without a push");
        self.style.set_font(var, prev);
    }

    /// Scoped override: the pop runs on every exit path of `body`.
    pub fn with_num_var<R>(&mut self, var: NumVar, value: f32, body: impl FnOnce(&mut Self) -> R) -> R {
        self.push_num_var(var, value);
        let out = body(self);
        self.pop_num_var();
        out
    }

    pub fn with_color_var<R>(
        &mut self,
        var: ColorVar,
        value: Color,
        body: impl FnOnce(&mut Self) -> R,
    ) -> R {
        self.push_color_var(var, value);
        let out = body(self);
        self.pop_color_var();
        out
    }

    pub fn with_font_var<R>(
        &mut self,
        var: FontVar,
        value: Font,
        body: impl FnOnce(&mut Self) -> R,
    ) -> R {
        self.push_font_var(var, value);
        let out = body(self);
        self.pop_font_var();
        out
    }
}
