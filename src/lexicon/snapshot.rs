//! Versioned binary snapshots of the trie lexicon.
//!
//! A snapshot is an explicit, portable serialization of the trie arena:
//! a magic tag and format version, the node and word counts, the flattened
//! edge list of every node in arena order, and a trailing CRC32 of
//! everything before it. Loading verifies the header, the checksum, and the
//! structural integrity of the edge list; any mismatch is a hard
//! [`Snapshot`](crate::error::PravopisError::Snapshot) error, never a silent
//! fallback to an empty lexicon.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use crc32fast::Hasher;

use crate::error::{PravopisError, Result};
use crate::lexicon::trie::{Trie, TrieNode};

/// Magic tag identifying a pravopis lexicon snapshot.
const MAGIC: &[u8; 4] = b"PVPS";

/// Current snapshot format version.
const FORMAT_VERSION: u32 = 1;

/// A snapshot writer that tracks a running CRC32 of the written bytes.
struct SnapshotWriter<W: Write> {
    writer: W,
    hasher: Hasher,
}

impl<W: Write> SnapshotWriter<W> {
    fn new(writer: W) -> Self {
        SnapshotWriter {
            writer,
            hasher: Hasher::new(),
        }
    }

    fn write_raw(&mut self, bytes: &[u8]) -> Result<()> {
        self.writer.write_all(bytes)?;
        self.hasher.update(bytes);
        Ok(())
    }

    fn write_u8(&mut self, value: u8) -> Result<()> {
        self.write_raw(&[value])
    }

    fn write_u32(&mut self, value: u32) -> Result<()> {
        self.write_raw(&value.to_le_bytes())
    }

    fn write_u64(&mut self, value: u64) -> Result<()> {
        self.write_raw(&value.to_le_bytes())
    }

    /// Append the checksum of everything written so far and flush.
    fn finish(mut self) -> Result<()> {
        let checksum = self.hasher.clone().finalize();
        self.writer.write_u32::<LittleEndian>(checksum)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// A snapshot reader that tracks a running CRC32 of the consumed bytes.
struct SnapshotReader<R: Read> {
    reader: R,
    hasher: Hasher,
}

impl<R: Read> SnapshotReader<R> {
    fn new(reader: R) -> Self {
        SnapshotReader {
            reader,
            hasher: Hasher::new(),
        }
    }

    fn read_raw(&mut self, buf: &mut [u8]) -> Result<()> {
        self.reader
            .read_exact(buf)
            .map_err(|_| PravopisError::snapshot("truncated snapshot"))?;
        self.hasher.update(buf);
        Ok(())
    }

    fn read_u8(&mut self) -> Result<u8> {
        let mut buf = [0u8; 1];
        self.read_raw(&mut buf)?;
        Ok(buf[0])
    }

    fn read_u32(&mut self) -> Result<u32> {
        let mut buf = [0u8; 4];
        self.read_raw(&mut buf)?;
        Ok(u32::from_le_bytes(buf))
    }

    fn read_u64(&mut self) -> Result<u64> {
        let mut buf = [0u8; 8];
        self.read_raw(&mut buf)?;
        Ok(u64::from_le_bytes(buf))
    }

    /// Read the trailing checksum and compare it to the running one.
    fn verify_checksum(mut self) -> Result<()> {
        let computed = self.hasher.clone().finalize();
        let stored = self
            .reader
            .read_u32::<LittleEndian>()
            .map_err(|_| PravopisError::snapshot("truncated snapshot"))?;
        if stored != computed {
            return Err(PravopisError::snapshot(format!(
                "checksum mismatch: stored {stored:#010x}, computed {computed:#010x}"
            )));
        }
        Ok(())
    }
}

/// Narrow a count to the u32 the format stores, refusing to truncate.
fn checked_u32(value: usize, what: &str) -> Result<u32> {
    u32::try_from(value).map_err(|_| {
        PravopisError::snapshot(format!("{what} {value} exceeds the snapshot format limit"))
    })
}

/// Serialize the trie into `writer`.
pub fn write_snapshot<W: Write>(trie: &Trie, writer: W) -> Result<()> {
    let node_count = checked_u32(trie.node_count(), "node count")?;

    let mut out = SnapshotWriter::new(writer);
    out.write_raw(MAGIC)?;
    out.write_u32(FORMAT_VERSION)?;
    out.write_u32(node_count)?;
    out.write_u64(trie.len())?;

    for node in trie.nodes() {
        out.write_u8(node.terminal as u8)?;
        out.write_u32(node.children.len() as u32)?;
        for &(ch, child) in &node.children {
            out.write_u32(ch as u32)?;
            out.write_u32(child)?;
        }
    }

    out.finish()
}

/// Deserialize a trie from `reader`, verifying the format and checksum.
pub fn read_snapshot<R: Read>(reader: R) -> Result<Trie> {
    let mut input = SnapshotReader::new(reader);

    let mut magic = [0u8; 4];
    input.read_raw(&mut magic)?;
    if &magic != MAGIC {
        return Err(PravopisError::snapshot("not a lexicon snapshot"));
    }

    let version = input.read_u32()?;
    if version != FORMAT_VERSION {
        return Err(PravopisError::snapshot(format!(
            "unsupported snapshot version {version} (expected {FORMAT_VERSION})"
        )));
    }

    let node_count = input.read_u32()? as usize;
    if node_count == 0 {
        return Err(PravopisError::snapshot("snapshot has no root node"));
    }
    let word_count = input.read_u64()?;

    let mut nodes = Vec::with_capacity(node_count);
    let mut terminals = 0u64;
    for _ in 0..node_count {
        let terminal = match input.read_u8()? {
            0 => false,
            1 => true,
            other => {
                return Err(PravopisError::snapshot(format!(
                    "invalid terminal flag {other}"
                )));
            }
        };
        if terminal {
            terminals += 1;
        }

        let child_count = input.read_u32()? as usize;
        let mut children = Vec::with_capacity(child_count);
        let mut previous: Option<char> = None;
        for _ in 0..child_count {
            let ch = char::from_u32(input.read_u32()?)
                .ok_or_else(|| PravopisError::snapshot("invalid edge character"))?;
            let target = input.read_u32()?;
            if target as usize >= node_count {
                return Err(PravopisError::snapshot(format!(
                    "edge target {target} out of range (node count {node_count})"
                )));
            }
            if previous.is_some_and(|prev| prev >= ch) {
                return Err(PravopisError::snapshot("edge list is not sorted"));
            }
            previous = Some(ch);
            children.push((ch, target));
        }
        nodes.push(TrieNode { children, terminal });
    }

    if terminals != word_count {
        return Err(PravopisError::snapshot(format!(
            "word count mismatch: header says {word_count}, found {terminals} terminal nodes"
        )));
    }

    input.verify_checksum()?;
    Ok(Trie::from_parts(nodes, word_count))
}

/// Save the trie to a snapshot file.
pub fn save<P: AsRef<Path>>(trie: &Trie, path: P) -> Result<()> {
    let file = File::create(path)?;
    write_snapshot(trie, BufWriter::new(file))
}

/// Load a trie from a snapshot file.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Trie> {
    let file = File::open(path)?;
    read_snapshot(BufReader::new(file))
}
