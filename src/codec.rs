//! Encoding and decoding of whole byte streams.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::error::{HuffError, Result};
use crate::stream::{HuffReader, HuffWriter};
use crate::tree::{HuffNode, HuffmanTree};

/// Encode `data` into `sink`: the symbol table first, then the concatenation
/// of every input byte's code, in input order.
pub fn encode<W: Write>(data: &[u8], sink: W) -> Result<()> {
    let tree = HuffmanTree::from_bytes(data);
    let table = tree.code_table();

    log::debug!(
        "encoding {} bytes over {} distinct symbols",
        data.len(),
        table.len()
    );

    let mut writer = HuffWriter::new(sink);
    for entry in table.entries() {
        writer.write_symbol(entry);
    }
    writer.finalize_symbols()?;

    for &byte in data {
        let code = table.get(byte).ok_or(HuffError::MissingCode(byte))?;
        for bit in code.bits() {
            writer.write_bit(bit);
        }
    }
    writer.finish()
}

/// Decode an encoded stream from `source`, writing the original bytes to
/// `sink`.
///
/// The walk starts at the root, follows one child per input bit, emits a
/// symbol at each leaf and resets to the root. Exhausting the bit source
/// anywhere but the root means the payload was cut off mid-code.
pub fn decode<R: Read, W: Write>(source: R, mut sink: W) -> Result<()> {
    let mut reader = HuffReader::new(source)?;

    let mut entries = Vec::new();
    while let Some(entry) = reader.read_symbol() {
        entries.push(entry);
    }
    let tree = HuffmanTree::from_entries(&entries)?;

    log::debug!("rebuilt code tree over {} symbols", entries.len());

    match tree.root() {
        None => {
            if reader.read_bit().is_some() {
                return Err(HuffError::CorruptTable {
                    reason: "payload bits but no symbol table".to_string(),
                });
            }
        }
        Some(HuffNode::Leaf { symbol }) => {
            // One-symbol alphabet: each payload bit stands for one occurrence.
            while reader.read_bit().is_some() {
                sink.write_all(&[*symbol])?;
            }
        }
        Some(root) => {
            let mut node = root;
            loop {
                match node {
                    HuffNode::Leaf { symbol } => {
                        sink.write_all(&[*symbol])?;
                        node = root;
                    }
                    HuffNode::Internal { left, right } => match reader.read_bit() {
                        Some(bit) => {
                            node = if bit { right.as_ref() } else { left.as_ref() };
                        }
                        None => {
                            if std::ptr::eq(node, root) {
                                break;
                            }
                            return Err(HuffError::TruncatedStream);
                        }
                    },
                }
            }
        }
    }

    sink.flush()?;
    Ok(())
}

/// Compress the file at `src` into `dst`.
pub fn encode_file<P: AsRef<Path>, Q: AsRef<Path>>(src: P, dst: Q) -> Result<()> {
    let mut input = BufReader::new(File::open(&src)?);
    let mut data = Vec::new();
    input.read_to_end(&mut data)?;

    log::debug!(
        "compressing {} into {}",
        src.as_ref().display(),
        dst.as_ref().display()
    );

    let output = BufWriter::new(File::create(dst)?);
    encode(&data, output)
}

/// Decompress the file at `src` into `dst`.
pub fn decode_file<P: AsRef<Path>, Q: AsRef<Path>>(src: P, dst: Q) -> Result<()> {
    log::debug!(
        "decompressing {} into {}",
        src.as_ref().display(),
        dst.as_ref().display()
    );

    let input = BufReader::new(File::open(src)?);
    let output = BufWriter::new(File::create(dst)?);
    decode(input, output)
}
