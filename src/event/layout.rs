/// Width of the timestamp field inside an event record.
pub const TIMESTAMP_SIZE: usize = 4;

/// Describes where fields live inside one event record.
///
/// Only the timestamp offset is queried here; the rest of a packet header
/// belongs to whoever owns the records.
pub trait RecordLayout {
    /// Byte offset of the timestamp field from the start of a record.
    fn event_ts_offset(&self) -> usize;
}

impl<L: RecordLayout + ?Sized> RecordLayout for &L {
    #[inline(always)]
    fn event_ts_offset(&self) -> usize {
        (**self).event_ts_offset()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedLayout {
    pub ts_offset: usize,
}

impl FixedLayout {
    pub const fn new(ts_offset: usize) -> Self {
        Self { ts_offset }
    }

    /// First byte past the timestamp field.
    pub const fn ts_end(&self) -> usize {
        self.ts_offset.saturating_add(TIMESTAMP_SIZE)
    }
}

impl RecordLayout for FixedLayout {
    #[inline(always)]
    fn event_ts_offset(&self) -> usize {
        self.ts_offset
    }
}
