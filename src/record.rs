use rust_htslib::bam;

/// The nine SAM CIGAR operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CigarKind {
    Match,
    Ins,
    Del,
    RefSkip,
    SoftClip,
    HardClip,
    Pad,
    Equal,
    Diff,
}

impl CigarKind {
    /// Maps the 4-bit BAM operation code (`MIDNSHP=X` = 0..8).
    pub fn from_bam_code(code: u32) -> Option<Self> {
        let kind = match code {
            0 => CigarKind::Match,
            1 => CigarKind::Ins,
            2 => CigarKind::Del,
            3 => CigarKind::RefSkip,
            4 => CigarKind::SoftClip,
            5 => CigarKind::HardClip,
            6 => CigarKind::Pad,
            7 => CigarKind::Equal,
            8 => CigarKind::Diff,
            _ => return None,
        };
        Some(kind)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CigarOp {
    pub kind: CigarKind,
    pub len: u32,
}

impl CigarOp {
    pub fn new(kind: CigarKind, len: u32) -> Self {
        Self { kind, len }
    }

    /// Decodes one packed BAM CIGAR word (`len << 4 | op`).
    pub fn from_bam_word(word: u32) -> Option<Self> {
        CigarKind::from_bam_code(word & 0xf).map(|kind| CigarOp::new(kind, word >> 4))
    }
}

/// The handful of alignment fields the cleanup tools look at.
///
/// Everything else on a record is carried through untouched.
pub trait AlignmentRecord {
    /// Ordered CIGAR operations; empty when the record has no alignment.
    fn cigar_ops(&self) -> impl Iterator<Item = CigarOp> + '_;

    fn is_unmapped(&self) -> bool;

    fn is_secondary(&self) -> bool;

    fn clear_secondary(&mut self);
}

impl AlignmentRecord for bam::Record {
    // Reads the packed words in place; `Record::cigar()` would build a Vec per read.
    // Codes above 8 are skipped.
    fn cigar_ops(&self) -> impl Iterator<Item = CigarOp> + '_ {
        self.raw_cigar()
            .iter()
            .filter_map(|&word| CigarOp::from_bam_word(word))
    }

    fn is_unmapped(&self) -> bool {
        bam::Record::is_unmapped(self)
    }

    fn is_secondary(&self) -> bool {
        bam::Record::is_secondary(self)
    }

    fn clear_secondary(&mut self) {
        self.unset_secondary();
    }
}
