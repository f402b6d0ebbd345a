//! Physical layout of an encoded stream.
//!
//! Three bincode values written back to back: the symbol-table section
//! (`Vec<SymbolEntry>`, its length prefix doubling as the table terminator),
//! the payload bit count (`u64`), and the payload bytes with bits packed
//! MSB-first and the final byte zero-padded. The bit count is what lets the
//! reader tell real bits from padding.

use std::io::{Read, Write};

use crate::error::{HuffError, Result};
use crate::table::SymbolEntry;

/// Bit accumulator packing bits MSB-first into bytes.
#[derive(Debug, Default)]
struct BitBuf {
    bytes: Vec<u8>,
    bit_count: u64,
}

impl BitBuf {
    fn push(&mut self, bit: bool) {
        let byte_index = (self.bit_count / 8) as usize;
        let bit_offset = (self.bit_count % 8) as u8;

        if byte_index >= self.bytes.len() {
            self.bytes.push(0);
        }
        if bit {
            self.bytes[byte_index] |= 1 << (7 - bit_offset);
        }
        self.bit_count += 1;
    }
}

/// Writer half of the persisted format.
///
/// Symbol entries are buffered until [`finalize_symbols`] writes the table
/// section; payload bits are buffered until [`finish`] writes the remaining
/// sections and flushes the sink.
///
/// [`finalize_symbols`]: HuffWriter::finalize_symbols
/// [`finish`]: HuffWriter::finish
pub struct HuffWriter<W: Write> {
    sink: W,
    entries: Vec<SymbolEntry>,
    table_written: bool,
    bits: BitBuf,
}

impl<W: Write> HuffWriter<W> {
    pub fn new(sink: W) -> Self {
        HuffWriter {
            sink,
            entries: Vec::new(),
            table_written: false,
            bits: BitBuf::default(),
        }
    }

    /// Queue one symbol-table entry. Must precede [`finalize_symbols`].
    ///
    /// [`finalize_symbols`]: HuffWriter::finalize_symbols
    pub fn write_symbol(&mut self, entry: SymbolEntry) {
        debug_assert!(!self.table_written, "symbol table already finalized");
        self.entries.push(entry);
    }

    /// Write the symbol-table section and mark it terminated.
    pub fn finalize_symbols(&mut self) -> Result<()> {
        debug_assert!(!self.table_written, "symbol table already finalized");
        bincode::serialize_into(&mut self.sink, &self.entries)?;
        self.table_written = true;
        Ok(())
    }

    /// Append one payload bit.
    pub fn write_bit(&mut self, bit: bool) {
        debug_assert!(self.table_written, "payload bit before the symbol table");
        self.bits.push(bit);
    }

    /// Write the bit count and payload sections, then flush. The final
    /// partially filled byte goes out zero-padded.
    pub fn finish(mut self) -> Result<()> {
        if !self.table_written {
            self.finalize_symbols()?;
        }
        bincode::serialize_into(&mut self.sink, &self.bits.bit_count)?;
        bincode::serialize_into(&mut self.sink, &self.bits.bytes)?;
        self.sink.flush()?;
        Ok(())
    }
}

/// Reader half of the persisted format. All three sections are read up front
/// from `source` (which is released immediately afterwards); entries and bits
/// are then served back one at a time, with `None` marking exhaustion.
pub struct HuffReader {
    entries: std::vec::IntoIter<SymbolEntry>,
    payload: Vec<u8>,
    bit_count: u64,
    cursor: u64,
}

impl HuffReader {
    pub fn new<R: Read>(mut source: R) -> Result<Self> {
        let entries: Vec<SymbolEntry> = bincode::deserialize_from(&mut source)?;
        let bit_count: u64 = bincode::deserialize_from(&mut source)?;
        let payload: Vec<u8> = bincode::deserialize_from(&mut source)?;

        if bit_count > payload.len() as u64 * 8 {
            return Err(HuffError::TruncatedStream);
        }

        Ok(HuffReader {
            entries: entries.into_iter(),
            payload,
            bit_count,
            cursor: 0,
        })
    }

    /// Next symbol-table entry, or `None` once the table section is done.
    pub fn read_symbol(&mut self) -> Option<SymbolEntry> {
        self.entries.next()
    }

    /// Next payload bit, or `None` once all recorded bits are consumed.
    /// Padding bits in the final byte are never returned.
    pub fn read_bit(&mut self) -> Option<bool> {
        if self.cursor >= self.bit_count {
            return None;
        }
        let byte = self.payload[(self.cursor / 8) as usize];
        let bit = byte & (1 << (7 - (self.cursor % 8) as u8)) != 0;
        self.cursor += 1;
        Some(bit)
    }
}
