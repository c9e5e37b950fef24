//! Streaming FASTA reader shared by the flat-file provider and efetch parsing.

use crate::seq::SequenceRecord;

use flate2::read::MultiGzDecoder;

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

/// Iterates over the records of a FASTA stream without loading it whole.
///
/// Text before the first header line is skipped. Blank lines and `\r\n`
/// line endings are tolerated.
pub struct FastaRecords<R> {
    reader: R,
    line: Vec<u8>,
    pending: Option<String>,
    done: bool,
}

impl<R: BufRead> FastaRecords<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: Vec::new(),
            pending: None,
            done: false,
        }
    }

    fn read_line(&mut self) -> io::Result<bool> {
        self.line.clear();
        let bytes_read = self.reader.read_until(b'\n', &mut self.line)?;

        if bytes_read == 0 {
            return Ok(false);
        }

        if self.line.ends_with(b"\n") {
            self.line.pop();
        }

        if self.line.ends_with(b"\r") {
            self.line.pop();
        }

        Ok(true)
    }
}

impl<R: BufRead> Iterator for FastaRecords<R> {
    type Item = io::Result<SequenceRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut seq = Vec::new();
        loop {
            match self.read_line() {
                Ok(true) => {}
                Ok(false) => {
                    self.done = true;
                    return self
                        .pending
                        .take()
                        .map(|definition| Ok(SequenceRecord::new(definition, seq)));
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }

            if self.line.is_empty() {
                continue;
            }

            if self.line[0] == b'>' {
                let header = String::from_utf8_lossy(&self.line[1..]).trim().to_string();
                if let Some(prev) = self.pending.replace(header) {
                    return Some(Ok(SequenceRecord::new(prev, seq)));
                }
            } else if self.pending.is_some() {
                seq.extend(self.line.iter().filter(|b| !b.is_ascii_whitespace()));
            }
        }
    }
}

/// Opens a FASTA file, transparently decompressing `.gz` paths.
pub fn open_fasta(path: &Path) -> io::Result<FastaRecords<Box<dyn BufRead>>> {
    let file = File::open(path)?;

    let reader: Box<dyn BufRead> = match path.extension().and_then(|ext| ext.to_str()) {
        Some("gz") => Box::new(BufReader::new(MultiGzDecoder::new(file))),
        _ => Box::new(BufReader::new(file)),
    };

    Ok(FastaRecords::new(reader))
}
