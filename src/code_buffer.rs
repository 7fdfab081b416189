/// Append-only buffer of generated firmware code.
///
/// Grows one block per captured frame; the only other mutation is a full
/// clear. A failed frame never touches it, so it can never hold a partial
/// block.

#[derive(Debug, Clone, Default)]
pub struct CodeBuffer {
    text: String,
    frames: usize,
}

impl CodeBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one complete generated block. The caller guarantees the block
    /// is fully validated before it gets here.
    pub fn append_block(&mut self, block: &str) {
        self.text.push_str(block);
        self.frames += 1;
    }

    /// Empty the buffer. Idempotent, cannot fail.
    pub fn clear(&mut self) {
        self.text.clear();
        self.frames = 0;
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Owned copy for clipboard export; does not mutate.
    pub fn snapshot(&self) -> String {
        self.text.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of blocks appended since the last clear.
    pub fn frame_count(&self) -> usize {
        self.frames
    }
}
