//! Row-range partitioning for the frame renderer.
//!
//! The image is split into contiguous horizontal bands, one per worker.
//! Bands never overlap, so each worker owns its slice of the pixel buffer.

/// A band of image rows, `start..end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowRange {
    /// First row
    pub start: u32,
    /// One past the last row
    pub end: u32,
    /// Index of this range in the partition
    pub index: usize,
}

impl RowRange {
    pub fn new(start: u32, end: u32, index: usize) -> Self {
        Self { start, end, index }
    }

    /// Number of rows in this range.
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    pub fn rows(&self) -> std::ops::Range<u32> {
        self.start..self.end
    }
}

/// Split `height` rows across `workers`.
///
/// Every range gets `height / workers` rows and the last one also takes
/// the remainder. Never produces more ranges than rows.
pub fn partition_rows(height: u32, workers: usize) -> Vec<RowRange> {
    if height == 0 {
        return Vec::new();
    }

    let workers = workers.clamp(1, height as usize) as u32;
    let rows_per_worker = height / workers;

    (0..workers)
        .map(|i| {
            let start = i * rows_per_worker;
            let end = if i + 1 == workers {
                height
            } else {
                start + rows_per_worker
            };
            RowRange::new(start, end, i as usize)
        })
        .collect()
}
