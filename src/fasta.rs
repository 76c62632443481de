use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use log::{debug, error};

use crate::{Case, Error, Record};

pub struct Reader<R: io::Read> {
    /// Handle to the underlying reader (byte stream)
    reader: R,
    /// Case applied to every parsed sequence
    case: Case,
    /// Holds the complete input once read
    buffer: Vec<u8>,
}

impl<R: io::Read> Reader<R> {
    pub fn new(reader: R, case: Case) -> Self {
        Self {
            reader,
            case,
            buffer: Vec::new(),
        }
    }

    /// Read the whole input into memory
    fn fill(&mut self) -> Result<(), Error> {
        self.buffer.clear();
        self.reader.read_to_end(&mut self.buffer)?;
        Ok(())
    }

    /// Reads every record of the input in file order.
    ///
    /// Blank lines and ';' comment lines are skipped and multi-line sequences are
    /// joined into one.
    pub fn read_records(&mut self) -> Result<Vec<Record>, Error> {
        self.fill()?;
        Ok(parse_records(&self.buffer, self.case))
    }
}

/// Splits a buffer into lines, without line terminators.
///
/// A final line lacking a newline is still yielded.
fn lines(buffer: &[u8]) -> impl Iterator<Item = &[u8]> {
    let mut start = 0;
    memchr::memchr_iter(b'\n', buffer)
        .map(|i| i + 1)
        .chain(std::iter::once(buffer.len() + 1))
        .filter_map(move |end| {
            if start > buffer.len() {
                return None;
            }
            let line = &buffer[start..(end - 1).max(start)];
            start = end;
            Some(line.strip_suffix(b"\r").unwrap_or(line))
        })
}

fn parse_records(buffer: &[u8], case: Case) -> Vec<Record> {
    let mut records = Vec::new();
    let mut header: Option<&[u8]> = None;
    let mut seq = Vec::new();

    for line in lines(buffer) {
        match line.first() {
            None | Some(b';') => continue,
            Some(b'>') => {
                if let Some(open) = header.replace(line) {
                    case.apply(&mut seq);
                    records.push(Record::new(open, std::mem::take(&mut seq)));
                }
            }
            // Sequence lines before the first header belong to no record
            Some(_) if header.is_none() => continue,
            Some(_) => seq.extend_from_slice(line),
        }
    }

    if let Some(open) = header {
        case.apply(&mut seq);
        records.push(Record::new(open, seq));
    }

    records
}

/// Reads all records of a FASTA file.
///
/// A file that cannot be opened or read is reported and treated as empty.
pub fn read_path<P: AsRef<Path>>(path: P, case: Case) -> Vec<Record> {
    let path = path.as_ref();
    let records = File::open(path)
        .map_err(Error::from)
        .and_then(|file| Reader::new(file, case).read_records());
    match records {
        Ok(records) => {
            debug!("Read {} records from {}", records.len(), path.display());
            records
        }
        Err(e) => {
            error!(
                "File '{}' not opened correctly ({e}). No sequences are read from it.",
                path.display()
            );
            Vec::new()
        }
    }
}

/// Writes records in FASTA format, two lines per record.
pub fn write_records<'a, W, I>(writer: &mut W, records: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Record>,
{
    for record in records {
        record.write_fasta(writer)?;
    }
    Ok(())
}

/// Writes records to a file, replacing any existing content.
pub fn write_path<'a, P, I>(path: P, records: I) -> Result<(), Error>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = &'a Record>,
{
    let path = path.as_ref();
    let wrap = |source| Error::WriteOutput {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = BufWriter::new(File::create(path).map_err(wrap)?);
    write_records(&mut writer, records).map_err(wrap)?;
    writer.flush().map_err(wrap)?;
    Ok(())
}
