use super::layout::RecordLayout;
use super::timestamp::{set_timestamp, timestamp as read_timestamp};
use crate::error::RecordError;

#[derive(Debug, Clone, Copy)]
pub struct EventRecord<'a> {
    pub bytes: &'a [u8],
}

impl<'a> EventRecord<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    #[inline]
    pub fn timestamp<L: RecordLayout + ?Sized>(&self, layout: &L) -> Result<i32, RecordError> {
        read_timestamp(self.bytes, layout)
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Mutable view over one event record owned elsewhere.
#[derive(Debug)]
pub struct EventRecordMut<'a> {
    pub bytes: &'a mut [u8],
}

impl<'a> EventRecordMut<'a> {
    pub fn new(bytes: &'a mut [u8]) -> Self {
        Self { bytes }
    }

    #[inline]
    pub fn set_timestamp<L: RecordLayout + ?Sized>(
        &mut self,
        layout: &L,
        timestamp: i32,
    ) -> Result<(), RecordError> {
        set_timestamp(&mut *self.bytes, layout, timestamp)
    }

    #[inline]
    pub fn timestamp<L: RecordLayout + ?Sized>(&self, layout: &L) -> Result<i32, RecordError> {
        read_timestamp(&*self.bytes, layout)
    }

    pub fn as_record(&self) -> EventRecord<'_> {
        EventRecord::new(&*self.bytes)
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
