//! Paired-end barcode split pipeline.
//!
//! Drives the two mate streams in lockstep: one record from R1, one from R2,
//! barcode scan on both, and an all-or-nothing keep decision. A pair is
//! written only when both mates carry the barcode within the mismatch budget;
//! with trimming enabled, each mate loses the matched span at its own offset.
//!
//! The loop stops the moment either stream runs out, whether cleanly or
//! mid-record; a truncated trailing record is noted in the summary but is not
//! an error and does not change the reported count.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::detect::find_barcode;
use crate::seqio::{create_fastq_gz, open_fastq_gz, ReadOutcome};

/// Shortest barcode the pipeline accepts. Anything shorter produces too many
/// spurious hits within a 1-mismatch budget to be a usable split key.
pub const MIN_BARCODE_LEN: usize = 11;

/// Configuration for one split run, handed over from the CLI as plain values.
#[derive(Debug, Clone)]
pub struct SplitOpts {
    pub r1: PathBuf,
    pub r2: PathBuf,
    pub barcode: String,
    pub max_mismatches: usize,
    pub search_len: usize,
    pub trim: bool,
    /// Output prefix; `None` derives it from the R1 file name.
    pub out_stem: Option<String>,
}

/// What a finished run reports back.
#[derive(Debug, Clone)]
pub struct SplitSummary {
    /// Pairs read from the inputs (complete records on both sides).
    pub pairs_seen: u64,
    /// Pairs where both mates matched and were written out.
    pub pairs_kept: u64,
    /// True when a stream ended mid-record rather than at a record boundary.
    pub truncated: bool,
    pub out_r1: PathBuf,
    pub out_r2: PathBuf,
}

/// File name up to the first dot: `sample.fastq.gz` -> `sample`.
pub fn default_stem(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    match name.find('.') {
        Some(dot) => name[..dot].to_string(),
        None => name,
    }
}

/// Run the split: open all four streams, filter pairs, report the tally.
///
/// Fails before opening anything when the barcode is too short, and before
/// reading anything when any of the four streams cannot be opened. End of
/// input on either side ends the run normally.
pub fn run(opts: &SplitOpts) -> Result<SplitSummary> {
    if opts.barcode.len() < MIN_BARCODE_LEN {
        anyhow::bail!(
            "barcode must be at least {} nucleotides (got {})",
            MIN_BARCODE_LEN,
            opts.barcode.len()
        );
    }

    let stem = opts
        .out_stem
        .clone()
        .unwrap_or_else(|| default_stem(&opts.r1));
    let out_r1 = PathBuf::from(format!("{}_R1.fastq.gz", stem));
    let out_r2 = PathBuf::from(format!("{}_R2.fastq.gz", stem));

    let mut reader1 = open_fastq_gz(&opts.r1)?;
    let mut reader2 = open_fastq_gz(&opts.r2)?;
    let mut writer1 = create_fastq_gz(&out_r1)?;
    let mut writer2 = create_fastq_gz(&out_r2)?;

    eprintln!(
        "split: barcode={} | mismatches={} | window={} | trim={} | inputs={},{}",
        opts.barcode,
        opts.max_mismatches,
        opts.search_len,
        opts.trim,
        opts.r1.display(),
        opts.r2.display()
    );

    let barcode = opts.barcode.as_bytes();
    let mut pairs_seen = 0u64;
    let mut pairs_kept = 0u64;
    let mut truncated = false;

    loop {
        let rec1 = match reader1.next_record()? {
            ReadOutcome::Record(rec) => rec,
            ReadOutcome::EndOfStream => break,
            ReadOutcome::Truncated => {
                truncated = true;
                break;
            }
        };
        let rec2 = match reader2.next_record()? {
            ReadOutcome::Record(rec) => rec,
            ReadOutcome::EndOfStream => break,
            ReadOutcome::Truncated => {
                truncated = true;
                break;
            }
        };
        pairs_seen += 1;

        let pos1 = find_barcode(rec1.seq.as_bytes(), barcode, opts.max_mismatches, opts.search_len);
        let pos2 = find_barcode(rec2.seq.as_bytes(), barcode, opts.max_mismatches, opts.search_len);

        // Keep only when both mates carry the barcode; no partial pairs.
        if let (Some(p1), Some(p2)) = (pos1, pos2) {
            let (mut rec1, mut rec2) = (rec1, rec2);
            if opts.trim {
                rec1.trim_span(p1, barcode.len());
                rec2.trim_span(p2, barcode.len());
            }
            writer1.write_record(&rec1)?;
            writer2.write_record(&rec2)?;
            pairs_kept += 1;
        }
    }

    writer1.finish()?;
    writer2.finish()?;

    Ok(SplitSummary {
        pairs_seen,
        pairs_kept,
        truncated,
        out_r1,
        out_r2,
    })
}
