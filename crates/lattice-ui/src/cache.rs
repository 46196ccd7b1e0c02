use lattice_core::{BoundedVec, Vec2};

use crate::widget::WidgetId;

/// Double-buffered per-id state that survives the full tree rebuild.
///
/// Writes land in one buffer while reads come from the other; the buffers
/// swap at frame end, so this frame's writes become next frame's reads and a
/// widget never observes its own same-frame write.
pub struct FrameCache {
    write: BoundedVec<(WidgetId, Vec2)>,
    read: BoundedVec<(WidgetId, Vec2)>,
}

impl FrameCache {
    pub fn new(capacity: usize) -> Self {
        FrameCache {
            write: BoundedVec::new(capacity),
            read: BoundedVec::new(capacity),
        }
    }

    /// Value stored for `id` during the previous frame, if any.
    pub fn recall(&self, id: WidgetId) -> Option<Vec2> {
        self.read
            .iter()
            .find(|(entry, _)| *entry == id)
            .map(|(_, value)| *value)
    }

    /// Record `id`'s state for next frame. Re-storing overwrites; a full
    /// buffer drops the entry (the widget falls back to its default state).
    pub fn store(&mut self, id: WidgetId, value: Vec2) {
        if let Some(entry) = self.write.iter_mut().find(|(entry, _)| *entry == id) {
            entry.1 = value;
            return;
        }
        if self.write.push((id, value)).is_err() {
            log::warn!("frame cache full; dropping state for widget {id:?}");
        }
    }

    pub(crate) fn swap(&mut self) {
        std::mem::swap(&mut self.read, &mut self.write);
        self.write.clear();
    }
}
