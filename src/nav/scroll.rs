/// Derives a "scrolling down" signal from successive scroll offsets.
///
/// Each sample is compared with the previous one, with no threshold or
/// debounce. The first sample is compared against offset 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollDirectionDetector {
    previous: usize,
    downscrolling: bool,
}

impl ScrollDirectionDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new offset and return whether it moved further down.
    pub fn sample(&mut self, offset: usize) -> bool {
        self.downscrolling = offset > self.previous;
        self.previous = offset;
        self.downscrolling
    }

    pub fn is_downscrolling(&self) -> bool {
        self.downscrolling
    }

    pub fn previous_offset(&self) -> usize {
        self.previous
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
