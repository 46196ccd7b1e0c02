use lattice_core::{PointerHost, Vec2};

use crate::widget::{Widget, WidgetId};

/// Pointer state resolved once per frame, after layout. Widgets read the
/// *previous* frame's record during construction, so interaction always
/// lags the tree rebuild by exactly one frame.
#[derive(Clone, Copy, Debug)]
pub struct Input {
    pub hovered: WidgetId,
    /// Primary button went down during the resolved frame (edge).
    pub click: bool,
    /// Primary button was down during the resolved frame (level).
    pub hold: bool,
    pub pointer: Vec2,
    /// Pointer movement between two consecutive held frames; zero otherwise.
    pub pointer_delta: Vec2,
}

impl Default for Input {
    fn default() -> Self {
        Input {
            hovered: WidgetId::NONE,
            click: false,
            hold: false,
            pointer: Vec2::ZERO,
            pointer_delta: Vec2::ZERO,
        }
    }
}

/// Per-widget view of [`Input`], derived by id comparison.
#[derive(Clone, Copy, Debug, Default)]
pub struct Interaction {
    pub hovered: bool,
    pub clicked: bool,
    pub held: bool,
}

pub fn interaction_for(input: &Input, id: WidgetId) -> Interaction {
    let hovered = input.hovered == id;
    Interaction {
        hovered,
        clicked: hovered && input.click,
        held: hovered && input.hold,
    }
}

/// Hit-test the laid-out tree against the host's pointer state.
///
/// The scan runs over the pre-order list in reverse so the later-constructed,
/// visually topmost widget wins; only one widget can be hovered per frame.
pub(crate) fn resolve(widgets: &[Widget], host: &dyn PointerHost, previous: &Input) -> Input {
    let pointer = host.pointer_position();
    let hold = host.primary_down();
    let mut input = Input {
        hovered: WidgetId::NONE,
        click: host.primary_pressed(),
        hold,
        pointer,
        pointer_delta: if hold && previous.hold {
            pointer - previous.pointer
        } else {
            Vec2::ZERO
        },
    };
    for widget in widgets.iter().rev() {
        if widget.layout.bounds.contains(pointer) {
            input.hovered = widget.id;
            break;
        }
    }
    input
}
