//! Chunked bump arena backing all per-frame allocation.
//!
//! Allocations return [`Span`] index handles rather than references, so a
//! caller can keep many live handles while continuing to allocate. Chunks are
//! append-only and never reallocated in place, which keeps every previously
//! returned span valid until [`Arena::reset`].

/// Minimum size of a freshly appended chunk.
const GROWTH_QUANTUM: usize = 2048;

/// Index handle into an [`Arena`]. Valid until the arena is reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Span {
    chunk: u32,
    start: u32,
    len: u32,
}

impl Span {
    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

struct Chunk {
    buf: Vec<u8>,
    cursor: usize,
}

impl Chunk {
    fn new(capacity: usize) -> Self {
        Chunk {
            buf: vec![0; capacity],
            cursor: 0,
        }
    }

    fn free_space(&self) -> usize {
        self.buf.len() - self.cursor
    }
}

pub struct Arena {
    chunks: Vec<Chunk>,
}

impl Arena {
    pub fn new(capacity: usize) -> Self {
        Arena {
            chunks: vec![Chunk::new(capacity)],
        }
    }

    /// Reserve `num_bytes` of zeroed storage, appending a chunk of
    /// `max(num_bytes, GROWTH_QUANTUM)` when the current chunk is full.
    pub fn alloc_bytes(&mut self, num_bytes: usize) -> Span {
        if self.chunks.last().map_or(0, Chunk::free_space) < num_bytes {
            self.chunks.push(Chunk::new(num_bytes.max(GROWTH_QUANTUM)));
            log::trace!(
                "arena grew to {} chunks / {} bytes",
                self.chunks.len(),
                self.capacity()
            );
        }
        let chunk_idx = self.chunks.len() - 1;
        let chunk = &mut self.chunks[chunk_idx];
        let start = chunk.cursor;
        chunk.cursor += num_bytes;
        debug_assert!(chunk.cursor <= chunk.buf.len());
        Span {
            chunk: chunk_idx as u32,
            start: start as u32,
            len: num_bytes as u32,
        }
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) -> Span {
        let span = self.alloc_bytes(bytes.len());
        self.bytes_mut(span).copy_from_slice(bytes);
        span
    }

    /// Copy `text` into the arena. The returned span resolves through
    /// [`Arena::str`] for the rest of the frame.
    pub fn write_str(&mut self, text: &str) -> Span {
        self.write_bytes(text.as_bytes())
    }

    pub fn bytes(&self, span: Span) -> &[u8] {
        let chunk = &self.chunks[span.chunk as usize];
        &chunk.buf[span.start as usize..(span.start + span.len) as usize]
    }

    pub fn bytes_mut(&mut self, span: Span) -> &mut [u8] {
        let chunk = &mut self.chunks[span.chunk as usize];
        &mut chunk.buf[span.start as usize..(span.start + span.len) as usize]
    }

    pub fn str(&self, span: Span) -> &str {
        std::str::from_utf8(self.bytes(span)).unwrap_or("")
    }

    /// Total capacity across all chunks.
    pub fn capacity(&self) -> usize {
        self.chunks.iter().map(|c| c.buf.len()).sum()
    }

    /// Total bytes handed out since creation or the last reset.
    pub fn allocated(&self) -> usize {
        self.chunks.iter().map(|c| c.cursor).sum()
    }

    /// Reclaim everything into a single zeroed chunk of the accumulated
    /// capacity. Outstanding spans are invalidated.
    pub fn reset(&mut self) {
        if self.chunks.len() == 1 {
            let chunk = &mut self.chunks[0];
            chunk.buf.fill(0);
            chunk.cursor = 0;
        } else {
            let capacity = self.capacity();
            self.chunks.clear();
            self.chunks.push(Chunk::new(capacity));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_within_capacity() {
        let mut arena = Arena::new(64);
        let a = arena.alloc_bytes(16);
        let b = arena.alloc_bytes(16);
        assert_eq!(a.len(), 16);
        assert_ne!(a, b);
        assert_eq!(arena.allocated(), 32);
        assert_eq!(arena.capacity(), 64);
    }

    #[test]
    fn test_grows_by_quantum() {
        let mut arena = Arena::new(8);
        arena.alloc_bytes(8);
        arena.alloc_bytes(1);
        assert_eq!(arena.capacity(), 8 + GROWTH_QUANTUM);
    }

    #[test]
    fn test_large_request_gets_own_chunk() {
        let mut arena = Arena::new(8);
        let span = arena.alloc_bytes(GROWTH_QUANTUM * 3);
        assert_eq!(span.len(), GROWTH_QUANTUM * 3);
        assert_eq!(arena.capacity(), 8 + GROWTH_QUANTUM * 3);
    }

    #[test]
    fn test_allocated_never_exceeds_capacity() {
        let mut arena = Arena::new(32);
        for n in [5usize, 64, 7, 2048, 1, 300] {
            arena.alloc_bytes(n);
            assert!(arena.allocated() <= arena.capacity());
        }
    }

    #[test]
    fn test_spans_survive_growth() {
        let mut arena = Arena::new(16);
        let hello = arena.write_str("hello");
        arena.alloc_bytes(GROWTH_QUANTUM * 2);
        let world = arena.write_str("world");
        assert_eq!(arena.str(hello), "hello");
        assert_eq!(arena.str(world), "world");
    }

    #[test]
    fn test_reset_zeroes_storage() {
        let mut arena = Arena::new(16);
        arena.write_str("scribble");
        arena.alloc_bytes(4096);
        let capacity = arena.capacity();
        arena.reset();
        assert_eq!(arena.allocated(), 0);
        assert_eq!(arena.capacity(), capacity);
        let fresh = arena.alloc_bytes(8);
        assert!(arena.bytes(fresh).iter().all(|&b| b == 0));
    }
}
