//! Memory layout of a naturally aligned record versus a packed one.
//!
//! Both records hold three one-byte fields followed by a two-byte field. With
//! C layout the two-byte field is pushed to an even offset, leaving one byte of
//! padding; the packed record drops that padding.

use std::io::{self, Write};
use std::mem::{align_of, offset_of, size_of};

/// u8 + u8 + u8 + i16
const FIELD_BYTES: usize = 5;

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct AlignedSample {
    pub first: u8,
    pub second: u8,
    pub third: u8,
    pub fourth: i16,
}

#[repr(C, packed)]
#[derive(Debug, Clone, Copy)]
pub struct PackedSample {
    pub first: u8,
    pub second: u8,
    pub third: u8,
    pub fourth: i16,
}

/// Size, alignment and field offsets of one record type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutReport {
    pub name: &'static str,
    pub size: usize,
    pub align: usize,
    pub offsets: [(&'static str, usize); 4],
}

impl LayoutReport {
    /// Bytes not covered by any field.
    pub fn padding(&self) -> usize {
        self.size.saturating_sub(FIELD_BYTES)
    }
}

pub fn aligned_report() -> LayoutReport {
    LayoutReport {
        name: "AlignedSample",
        size: size_of::<AlignedSample>(),
        align: align_of::<AlignedSample>(),
        offsets: [
            ("first", offset_of!(AlignedSample, first)),
            ("second", offset_of!(AlignedSample, second)),
            ("third", offset_of!(AlignedSample, third)),
            ("fourth", offset_of!(AlignedSample, fourth)),
        ],
    }
}

pub fn packed_report() -> LayoutReport {
    LayoutReport {
        name: "PackedSample",
        size: size_of::<PackedSample>(),
        align: align_of::<PackedSample>(),
        offsets: [
            ("first", offset_of!(PackedSample, first)),
            ("second", offset_of!(PackedSample, second)),
            ("third", offset_of!(PackedSample, third)),
            ("fourth", offset_of!(PackedSample, fourth)),
        ],
    }
}

pub fn print_report(report: &LayoutReport, out: &mut dyn Write) -> io::Result<()> {
    writeln!(
        out,
        "{}: size {} bytes, align {}, padding {}",
        report.name,
        report.size,
        report.align,
        report.padding()
    )?;
    for (field, offset) in report.offsets.iter() {
        writeln!(out, "  {:<6} @ {}", field, offset)?;
    }
    Ok(())
}
