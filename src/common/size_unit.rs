// SizeUnit
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Unit labels used when displaying sizes.
///
/// The index of a label is the number of times the byte count has been
/// divided by 1024. Sizes beyond the last entry are displayed in that unit.
pub const SIZE_UNITS: [&str; 7] = [
    "Bs",
    "KBs",
    "MBs",
    "GBs",
    "TBs",
    "PBs",
    "EBs",
];
