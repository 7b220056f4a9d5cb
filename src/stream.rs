use crate::record::AlignmentRecord;
use anyhow::{Context, Result};
use rust_htslib::bam::{self, HeaderView, Read};
use std::path::{Path, PathBuf};

/// Single-pass, ordered supply of alignment records.
pub trait RecordSource {
    type Record: AlignmentRecord;

    /// A blank record buffer suitable for `read_next`.
    fn new_record(&self) -> Self::Record;

    /// Fills `record` with the next entry. Returns `Ok(false)` once the
    /// stream is exhausted.
    fn read_next(&mut self, record: &mut Self::Record) -> Result<bool>;
}

/// Append-only destination for alignment records.
pub trait RecordSink<R> {
    fn write_record(&mut self, record: &R) -> Result<()>;
}

/// Reads SAM, BAM or CRAM; the format is detected by htslib.
pub struct BamSource {
    reader: bam::Reader,
    path: PathBuf,
}

impl BamSource {
    pub fn open(path: &Path) -> Result<Self> {
        let reader = bam::Reader::from_path(path).with_context(|| {
            format!("Failed to open input alignment file {}", path.display())
        })?;

        Ok(Self {
            reader,
            path: path.to_path_buf(),
        })
    }

    pub fn header(&self) -> &HeaderView {
        self.reader.header()
    }
}

impl RecordSource for BamSource {
    type Record = bam::Record;

    fn new_record(&self) -> bam::Record {
        bam::Record::new()
    }

    fn read_next(&mut self, record: &mut bam::Record) -> Result<bool> {
        match self.reader.read(record) {
            Some(result) => {
                result.with_context(|| {
                    format!("Failed to read record from {}", self.path.display())
                })?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// BAM writer whose header is copied from the input it was opened against.
/// The file is flushed and closed when the sink is dropped.
pub struct BamSink {
    writer: bam::Writer,
    path: PathBuf,
}

impl BamSink {
    pub fn create(path: &Path, template: &HeaderView) -> Result<Self> {
        let header = bam::Header::from_template(template);
        let writer = bam::Writer::from_path(path, &header, bam::Format::Bam).with_context(|| {
            format!("Failed to create output alignment file {}", path.display())
        })?;

        Ok(Self {
            writer,
            path: path.to_path_buf(),
        })
    }
}

impl RecordSink<bam::Record> for BamSink {
    fn write_record(&mut self, record: &bam::Record) -> Result<()> {
        self.writer
            .write(record)
            .with_context(|| format!("Failed to write record to {}", self.path.display()))
    }
}

/// Opens `input`, then creates `output` with the input's header.
///
/// The input is opened first so a bad input path never leaves an empty
/// output file behind.
pub fn open_pair(input: &Path, output: &Path) -> Result<(BamSource, BamSink)> {
    let source = BamSource::open(input)?;
    let sink = BamSink::create(output, source.header())?;
    Ok((source, sink))
}
