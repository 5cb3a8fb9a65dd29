pub mod layout;
pub mod record;
pub mod timestamp;

pub use layout::{FixedLayout, RecordLayout, TIMESTAMP_SIZE};
pub use record::{EventRecord, EventRecordMut};
pub use timestamp::{set_timestamp, timestamp};
