//! Two-pass, per-axis constraint solver.
//!
//! Operates on the flat pre-order widget list: parents always precede their
//! descendants, so a forward walk sees parents first and a reverse walk sees
//! children first. Each axis is solved independently: self-contained kinds
//! first, then the child-dependent kinds in reverse order, then bounds and a
//! forward placement walk driven by each parent's growth axis.

use lattice_core::{Arena, Renderer, Vec2};

use crate::widget::{SizeKind, Widget};

pub(crate) fn solve(widgets: &mut [Widget], arena: &Arena, renderer: &mut dyn Renderer) {
    measure_text(widgets, arena, renderer);
    for axis in 0..2 {
        solve_standalone(widgets, axis);
        solve_child_dependent(widgets, axis);
    }
    apply_bounds(widgets);
    place(widgets);
}

/// Cache the measured size of every widget that carries text. Runs once,
/// before either axis is solved.
fn measure_text(widgets: &mut [Widget], arena: &Arena, renderer: &mut dyn Renderer) {
    for widget in widgets.iter_mut() {
        if widget.text.content.is_empty() {
            continue;
        }
        let text = arena.str(widget.text.content);
        widget.layout.text_size = renderer.measure_text(widget.text.font, text, widget.text.size);
    }
}

fn solve_standalone(widgets: &mut [Widget], axis: usize) {
    for widget in widgets.iter_mut() {
        let size = widget.logical_size[axis];
        widget.layout.computed_size[axis] = match size.kind {
            SizeKind::Pixels => size.value,
            SizeKind::Text => widget.layout.text_size.axis(axis),
            _ => continue,
        };
    }
}

/// Reverse walk: children are resolved before the ancestors that fold over
/// them. A widget with no children folds to 0.
fn solve_child_dependent(widgets: &mut [Widget], axis: usize) {
    for idx in (0..widgets.len()).rev() {
        let size = widgets[idx].logical_size[axis];
        let resolved = match size.kind {
            SizeKind::SumOfChildren => fold_children(widgets, idx, axis, |acc, v| acc + v),
            SizeKind::MaxOfChildren => fold_children(widgets, idx, axis, f32::max),
            SizeKind::PercentOfParent => {
                let Some(parent) = widgets[idx].tree.parent else {
                    continue;
                };
                widgets[parent as usize].layout.computed_size[axis] * size.value
            }
            _ => continue,
        };
        widgets[idx].layout.computed_size[axis] = resolved;
    }
}

fn fold_children(
    widgets: &[Widget],
    parent: usize,
    axis: usize,
    fold: impl Fn(f32, f32) -> f32,
) -> f32 {
    let mut accum = 0.0;
    let mut child = widgets[parent].tree.first_child;
    while let Some(idx) = child {
        accum = fold(accum, widgets[idx as usize].layout.computed_size[axis]);
        child = widgets[idx as usize].tree.sibling;
    }
    accum
}

fn apply_bounds(widgets: &mut [Widget]) {
    for widget in widgets.iter_mut() {
        widget.layout.bounds.w = widget.layout.computed_size[0];
        widget.layout.bounds.h = widget.layout.computed_size[1];
    }
}

/// Forward walk: each widget shifts by its own offset, then places its
/// children at a running cursor advanced by `child size * growth axis`.
fn place(widgets: &mut [Widget]) {
    for idx in 0..widgets.len() {
        let offset = widgets[idx].offset;
        widgets[idx].layout.bounds.x += offset.x;
        widgets[idx].layout.bounds.y += offset.y;

        let growth = widgets[idx].growth_axis;
        let mut cursor = widgets[idx].layout.bounds.corner();
        let mut child = widgets[idx].tree.first_child;
        while let Some(c) = child {
            let c = c as usize;
            widgets[c].layout.bounds.x = cursor.x;
            widgets[c].layout.bounds.y = cursor.y;
            let size = Vec2::new(widgets[c].layout.bounds.w, widgets[c].layout.bounds.h);
            cursor += size * growth;
            child = widgets[c].tree.sibling;
        }
    }
}
