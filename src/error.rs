#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error(
        "timestamp field out of bounds: offset {offset} needs {required} bytes, record has {len} bytes"
    )]
    OutOfBounds {
        offset: usize,
        required: usize,
        len: usize,
    },
}
