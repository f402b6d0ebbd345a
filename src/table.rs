//! Codes and the symbol table that carries them between encode and decode.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The bit path from the tree root to one leaf: `false` is "take the left
/// child" (a 0 bit), `true` the right (a 1 bit). The set of codes produced
/// from one tree is prefix-free because only leaves carry symbols.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Code(Vec<bool>);

impl Code {
    pub fn new() -> Self {
        Code(Vec::new())
    }

    pub fn push(&mut self, bit: bool) {
        self.0.push(bit);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }

    /// True if `self` is a prefix of `other` (an equal code counts).
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.0.len() >= self.0.len() && self.0[..] == other.0[..self.0.len()]
    }
}

impl From<Vec<bool>> for Code {
    fn from(bits: Vec<bool>) -> Self {
        Code(bits)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.0 {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// The persisted form of one leaf: a symbol and its code. The symbol-table
/// section of an encoded stream is a sequence of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolEntry {
    pub symbol: u8,
    pub code: Code,
}

/// Symbol-to-code mapping generated from a Huffman tree, total over the
/// alphabet of the input it was built from.
#[derive(Debug, Clone, Default)]
pub struct CodeTable {
    codes: HashMap<u8, Code>,
}

impl CodeTable {
    pub(crate) fn from_map(codes: HashMap<u8, Code>) -> Self {
        CodeTable { codes }
    }

    pub fn get(&self, symbol: u8) -> Option<&Code> {
        self.codes.get(&symbol)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, &Code)> + '_ {
        self.codes.iter().map(|(&symbol, code)| (symbol, code))
    }

    /// Entries in ascending symbol order. The map itself iterates in hash
    /// order, which must not leak into the persisted stream: encoding the
    /// same input twice has to produce byte-identical output.
    pub fn entries(&self) -> Vec<SymbolEntry> {
        let mut entries: Vec<SymbolEntry> = self
            .codes
            .iter()
            .map(|(&symbol, code)| SymbolEntry {
                symbol,
                code: code.clone(),
            })
            .collect();
        entries.sort_by_key(|entry| entry.symbol);
        entries
    }
}
