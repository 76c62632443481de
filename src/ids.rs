use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use log::{debug, error};

use crate::Error;

/// Reads one identifier per line.
///
/// Lines are trimmed of surrounding whitespace, blank lines are skipped and
/// duplicates are kept in file order.
pub fn read_ids<R: BufRead>(mut reader: R) -> Result<Vec<Vec<u8>>, Error> {
    let mut ids = Vec::new();
    let mut line = Vec::new();
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        let id = line.trim_ascii();
        if !id.is_empty() {
            ids.push(id.to_vec());
        }
    }
    Ok(ids)
}

/// Reads all identifiers of a file.
///
/// A file that cannot be opened or read is reported and treated as empty.
pub fn read_path<P: AsRef<Path>>(path: P) -> Vec<Vec<u8>> {
    let path = path.as_ref();
    let ids = File::open(path)
        .map_err(Error::from)
        .and_then(|file| read_ids(BufReader::new(file)));
    match ids {
        Ok(ids) => {
            debug!("Read {} identifiers from {}", ids.len(), path.display());
            ids
        }
        Err(e) => {
            error!(
                "File '{}' not opened correctly ({e}). No identifiers are read from it.",
                path.display()
            );
            Vec::new()
        }
    }
}
