//! Published polyomino counts, used to check enumeration results.

use serde::{Deserialize, Serialize};

use crate::schema::EquivalenceMode;

/// Free polyominoes (OEIS A000105), index 0 is size 1.
const FREE: [u64; 28] = [
    1,
    1,
    2,
    5,
    12,
    35,
    108,
    369,
    1_285,
    4_655,
    17_073,
    63_600,
    238_591,
    901_971,
    3_426_576,
    13_079_255,
    50_107_909,
    192_622_052,
    742_624_232,
    2_870_671_950,
    11_123_060_678,
    43_191_857_688,
    168_047_007_728,
    654_999_700_403,
    2_557_227_044_764,
    9_995_060_286_548,
    39_108_541_432_160,
    153_172_559_604_965,
];

/// One-sided polyominoes (OEIS A000988).
const ONE_SIDED: [u64; 20] = [
    1,
    1,
    2,
    7,
    18,
    60,
    196,
    704,
    2_500,
    9_189,
    33_896,
    126_759,
    476_270,
    1_802_312,
    6_849_777,
    26_152_418,
    100_203_194,
    385_221_143,
    1_485_200_848,
    5_741_256_764,
];

/// Fixed polyominoes (OEIS A001168).
const FIXED: [u64; 20] = [
    1,
    2,
    6,
    19,
    63,
    216,
    760,
    2_725,
    9_910,
    36_446,
    135_268,
    505_861,
    1_903_890,
    7_204_874,
    27_394_666,
    104_592_937,
    400_795_844,
    1_540_820_542,
    5_940_738_676,
    22_964_779_660,
];

/// Known number of polyominoes of `size` cells under `mode`, if tabulated.
pub fn known_count(mode: EquivalenceMode, size: usize) -> Option<u64> {
    let table: &[u64] = match mode {
        EquivalenceMode::Fixed => &FIXED,
        EquivalenceMode::OneSided => &ONE_SIDED,
        EquivalenceMode::Free => &FREE,
    };
    size.checked_sub(1).and_then(|i| table.get(i)).copied()
}

/// Outcome of comparing a count with the published value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Validation {
    Passed,
    Failed { expected: u64, actual: u64 },
    /// No published value for this size and mode.
    Unknown,
}

/// Compare `count` with the known value for `size` and `mode`.
pub fn validate_count(mode: EquivalenceMode, size: usize, count: u64) -> Validation {
    match known_count(mode, size) {
        Some(expected) if expected == count => Validation::Passed,
        Some(expected) => Validation::Failed {
            expected,
            actual: count,
        },
        None => Validation::Unknown,
    }
}
