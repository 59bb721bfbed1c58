//! Record-level IO for **gzipped FASTQ** streams.
//!
//! ### Design
//! - Input decoded with `flate2::bufread::MultiGzDecoder`, parsed four lines
//!   at a time so that a truncated trailing record is distinguishable from a
//!   clean end of stream.
//! - Output encoded with `flate2::write::GzEncoder`; call
//!   [`FastqWriter::finish`] to close the gzip member.
//! - Lines keep their bytes as read, minus trailing `\r`/`\n`. No case
//!   folding, no whitespace trimming.
//!
//! ### Errors
//! Genuine IO failures bubble via `anyhow::Result`; end-of-stream and
//! truncation are ordinary [`ReadOutcome`] values, not errors.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use flate2::bufread::MultiGzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

/// One FASTQ record: four lines in stream order.
///
/// `sep` is carried verbatim (conventionally `+`, but some producers repeat
/// the header there) so the output reproduces the input byte for byte when no
/// trimming is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastqRecord {
    pub id: String,
    pub seq: String,
    pub sep: String,
    pub qual: String,
}

impl FastqRecord {
    /// Delete `[start, start + len)` from both the sequence and the quality
    /// string, shifting the tail left.
    ///
    /// The two deletions use the same offset and length, so
    /// `seq.len() == qual.len()` is preserved for any well-formed record.
    /// Header and separator are never touched.
    pub fn trim_span(&mut self, start: usize, len: usize) {
        self.seq.replace_range(start..start + len, "");
        self.qual.replace_range(start..start + len, "");
    }
}

/// Result of pulling one record from a stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    Record(FastqRecord),
    /// The stream ended cleanly at a record boundary.
    EndOfStream,
    /// The stream ended mid-record: the header line was read but one of the
    /// remaining three lines was missing.
    Truncated,
}

/// Line-oriented FASTQ reader over any buffered byte source.
pub struct FastqReader<R: BufRead> {
    inner: R,
    line: String,
}

impl<R: BufRead> FastqReader<R> {
    pub fn new(inner: R) -> Self {
        FastqReader {
            inner,
            line: String::new(),
        }
    }

    /// Read exactly four lines and assemble them into a record.
    ///
    /// EOF on the first line is a clean [`ReadOutcome::EndOfStream`]; EOF on
    /// any later line is [`ReadOutcome::Truncated`]. Both advance the cursor
    /// past whatever was consumed.
    pub fn next_record(&mut self) -> Result<ReadOutcome> {
        let id = match self.read_line()? {
            Some(line) => line,
            None => return Ok(ReadOutcome::EndOfStream),
        };
        let (seq, sep, qual) = match (self.read_line()?, self.read_line()?, self.read_line()?) {
            (Some(seq), Some(sep), Some(qual)) => (seq, sep, qual),
            _ => return Ok(ReadOutcome::Truncated),
        };
        Ok(ReadOutcome::Record(FastqRecord { id, seq, sep, qual }))
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        self.line.clear();
        let n = self.inner.read_line(&mut self.line).context("reading line")?;
        if n == 0 {
            return Ok(None);
        }
        while self.line.ends_with('\n') || self.line.ends_with('\r') {
            self.line.pop();
        }
        Ok(Some(self.line.clone()))
    }
}

/// Open a gzipped FASTQ file for record-level reading.
pub fn open_fastq_gz(path: impl AsRef<Path>) -> Result<FastqReader<impl BufRead>> {
    let path = path.as_ref();
    let fh = File::open(path).with_context(|| format!("opening input {}", path.display()))?;
    let gz = MultiGzDecoder::new(BufReader::new(fh));
    Ok(FastqReader::new(BufReader::new(gz)))
}

/// FASTQ writer emitting four lines per record onto any byte sink.
pub struct FastqWriter<W: Write> {
    inner: W,
}

impl<W: Write> FastqWriter<W> {
    pub fn new(inner: W) -> Self {
        FastqWriter { inner }
    }

    /// Serialize one record as four `\n`-terminated lines, in order.
    pub fn write_record(&mut self, rec: &FastqRecord) -> Result<()> {
        self.inner.write_all(rec.id.as_bytes())?;
        self.inner.write_all(b"\n")?;
        self.inner.write_all(rec.seq.as_bytes())?;
        self.inner.write_all(b"\n")?;
        self.inner.write_all(rec.sep.as_bytes())?;
        self.inner.write_all(b"\n")?;
        self.inner.write_all(rec.qual.as_bytes())?;
        self.inner.write_all(b"\n")?;
        Ok(())
    }
}

impl<W: Write> FastqWriter<GzEncoder<W>> {
    /// Flush and close the gzip member. Dropping the writer also closes it,
    /// but only `finish` reports write errors.
    pub fn finish(self) -> Result<()> {
        self.inner.finish().context("closing gzip output")?;
        Ok(())
    }
}

/// Create a gzipped FASTQ file for record-level writing.
pub fn create_fastq_gz(path: impl AsRef<Path>) -> Result<FastqWriter<GzEncoder<BufWriter<File>>>> {
    let path = path.as_ref();
    let fh = File::create(path).with_context(|| format!("creating output {}", path.display()))?;
    let gz = GzEncoder::new(BufWriter::new(fh), Compression::default());
    Ok(FastqWriter::new(gz))
}
