//! Error handling for the huffpack library.

use thiserror::Error;

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, HuffError>;

/// All the ways an encode or decode can fail. Every failure is terminal for
/// the current invocation; nothing here is retried.
#[derive(Error, Debug)]
pub enum HuffError {
    /// Reading or writing the underlying streams failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A persisted section could not be serialized or deserialized.
    #[error("symbol table error: {0}")]
    Table(#[from] bincode::Error),

    /// The bit source ran out in the middle of a code, or the payload holds
    /// fewer bits than the recorded count.
    #[error("encoded stream ended in the middle of a code")]
    TruncatedStream,

    /// A byte to encode has no code assigned. The code table is built from
    /// the same input it encodes, so this indicates an internal defect.
    #[error("no code assigned for byte {0:#04x}")]
    MissingCode(u8),

    /// The persisted symbol table describes an impossible tree.
    #[error("corrupt symbol table: {reason}")]
    CorruptTable { reason: String },
}
