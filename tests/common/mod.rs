#![allow(dead_code)]

use rust_htslib::bam::{self, header::HeaderRecord, record::Cigar, record::CigarString, Header, Read};
use std::path::Path;

pub const FLAG_UNMAPPED: u16 = 0x4;
pub const FLAG_SECONDARY: u16 = 0x100;

pub fn test_header() -> Header {
    let mut header = Header::new();
    let mut hd = HeaderRecord::new(b"HD");
    hd.push_tag(b"VN", &"1.6");
    hd.push_tag(b"SO", &"unsorted");
    header.push_record(&hd);

    let mut sq = HeaderRecord::new(b"SQ");
    sq.push_tag(b"SN", &"chr1");
    sq.push_tag(b"LN", &100_000);
    header.push_record(&sq);

    let mut pg = HeaderRecord::new(b"PG");
    pg.push_tag(b"ID", &"aligner");
    header.push_record(&pg);
    header
}

pub fn mapped(name: &str, cigar: Vec<Cigar>, flags: u16) -> bam::Record {
    let read_len: u32 = cigar
        .iter()
        .filter(|c| matches!(c, Cigar::Match(_) | Cigar::Ins(_) | Cigar::SoftClip(_)))
        .map(|c| c.len())
        .sum();
    let mut rec = bam::Record::new();
    rec.set(
        name.as_bytes(),
        Some(&CigarString(cigar)),
        &vec![b'A'; read_len as usize],
        &vec![30u8; read_len as usize],
    );
    rec.set_tid(0);
    rec.set_pos(1_000);
    rec.set_mapq(60);
    rec.set_mtid(-1);
    rec.set_mpos(-1);
    rec.set_flags(flags);
    rec
}

pub fn unmapped(name: &str, flags: u16) -> bam::Record {
    let mut rec = bam::Record::new();
    rec.set(name.as_bytes(), None, b"ACGTACGT", &[30; 8]);
    rec.set_tid(-1);
    rec.set_pos(-1);
    rec.set_mapq(0);
    rec.set_mtid(-1);
    rec.set_mpos(-1);
    rec.set_flags(flags | FLAG_UNMAPPED);
    rec
}

/// 50M, then a `del_len` deletion and another 50M when `del_len > 0`.
pub fn with_deletion(name: &str, del_len: u32) -> bam::Record {
    let mut cigar = vec![Cigar::Match(50)];
    if del_len > 0 {
        cigar.push(Cigar::Del(del_len));
        cigar.push(Cigar::Match(50));
    }
    mapped(name, cigar, 0)
}

pub fn write_bam(path: &Path, records: &[bam::Record]) {
    let header = test_header();
    let mut writer = bam::Writer::from_path(path, &header, bam::Format::Bam).unwrap();
    for rec in records {
        writer.write(rec).unwrap();
    }
}

pub fn read_bam(path: &Path) -> (bam::HeaderView, Vec<bam::Record>) {
    let mut reader = bam::Reader::from_path(path).unwrap();
    let header = reader.header().clone();
    let records = reader.records().map(|r| r.unwrap()).collect();
    (header, records)
}

pub fn names(records: &[bam::Record]) -> Vec<String> {
    records
        .iter()
        .map(|r| String::from_utf8_lossy(r.qname()).into_owned())
        .collect()
}
