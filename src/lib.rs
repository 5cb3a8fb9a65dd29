pub mod error;
pub mod event;

pub use error::RecordError;
pub use event::{
    EventRecord, EventRecordMut, FixedLayout, RecordLayout, TIMESTAMP_SIZE, set_timestamp,
    timestamp,
};
