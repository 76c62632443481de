use std::borrow::Cow;
use std::io::Write;

/// A single FASTA entry held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Raw defline, including the leading '>' and any description
    header: Vec<u8>,
    /// Sequence with all line breaks removed
    seq: Vec<u8>,
}

impl Record {
    /// Creates a record from a header line and a linearized sequence.
    ///
    /// The header is expected to start with '>'.
    pub fn new(header: impl Into<Vec<u8>>, seq: impl Into<Vec<u8>>) -> Self {
        let header = header.into();
        debug_assert!(header.first() == Some(&b'>'));
        Self {
            header,
            seq: seq.into(),
        }
    }

    /// Returns the full header line, including the leading '>'.
    pub fn header(&self) -> &[u8] {
        &self.header
    }

    /// Returns the identifier of the record.
    ///
    /// The identifier is everything between the leading '>' and the first space
    /// (or the end of the header if there is no space).
    pub fn id(&self) -> &[u8] {
        extract_id(&self.header)
    }

    /// Get the sequence as a borrowed slice.
    pub fn seq(&self) -> &[u8] {
        &self.seq
    }

    /// Convert ID to string (UTF-8), replacing invalid bytes
    pub fn id_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.id())
    }

    /// Convert header to string (UTF-8), replacing invalid bytes
    pub fn header_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.header)
    }

    /// Writes the record in FASTA format to a Write.
    ///
    /// The header is written verbatim and the sequence on a single line.
    pub fn write_fasta<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&self.header)?;
        writer.write_all(b"\n")?;
        writer.write_all(&self.seq)?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}

/// Extracts the identifier from a FASTA defline.
pub fn extract_id(header: &[u8]) -> &[u8] {
    let body = header.strip_prefix(b">").unwrap_or(header);
    match memchr::memchr(b' ', body) {
        Some(end) => &body[..end],
        None => body,
    }
}
