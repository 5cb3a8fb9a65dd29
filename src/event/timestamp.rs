use super::layout::{RecordLayout, TIMESTAMP_SIZE};
use crate::error::RecordError;
use std::ops::Range;

#[inline]
fn ts_range<L: RecordLayout + ?Sized>(layout: &L, len: usize) -> Result<Range<usize>, RecordError> {
    let offset = layout.event_ts_offset();
    match offset.checked_add(TIMESTAMP_SIZE) {
        Some(end) if end <= len => Ok(offset..end),
        end => {
            let required = end.unwrap_or(usize::MAX);
            tracing::debug!(offset, required, len, "timestamp field outside event record");
            Err(RecordError::OutOfBounds {
                offset,
                required,
                len,
            })
        }
    }
}

/// Stores `timestamp` little-endian at the layout's timestamp offset.
///
/// Touches exactly four bytes of `record`. Nothing is written when the field
/// does not fit.
#[inline]
pub fn set_timestamp<L: RecordLayout + ?Sized>(
    record: &mut [u8],
    layout: &L,
    timestamp: i32,
) -> Result<(), RecordError> {
    let range = ts_range(layout, record.len())?;
    tracing::trace!(offset = range.start, timestamp, "event timestamp set");
    record[range].copy_from_slice(&timestamp.to_le_bytes());
    Ok(())
}

#[inline]
pub fn timestamp<L: RecordLayout + ?Sized>(record: &[u8], layout: &L) -> Result<i32, RecordError> {
    let range = ts_range(layout, record.len())?;
    let mut bytes = [0u8; TIMESTAMP_SIZE];
    bytes.copy_from_slice(&record[range]);
    Ok(i32::from_le_bytes(bytes))
}
