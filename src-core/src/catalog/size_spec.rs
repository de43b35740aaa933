//! Per-size Hardware Table
//!
//! One immutable row per tent size. The lookup is an exhaustive match,
//! so adding a size without a row does not compile.

use crate::domain::TentSize;

/// Hardware and ballast counts for one frame size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeSpec {
    pub hip_ends: u32,
    pub hip_corners: u32,
    pub hip_mids: u32,
    pub rafters: u32,
    pub eaves: u32,
    pub legs: u32,
    pub ridge_connectors: u32,
    pub corner_connectors: u32,
    pub perimeter_connectors: u32,
    pub brace_bars: u32,
    pub tensioning_straps: u32,
    pub ballasting_straps: u32,
    /// Most stakes the frame can take
    pub stakes: u32,
    /// Most concrete blocks / water barrels the frame can take
    pub concrete: u32,
}

impl SizeSpec {
    /// Rows are built from the bay count; every size differs only in
    /// how many bays it has and how many legs stand on each bay line.
    const fn frame(bays: u32, legs: u32) -> Self {
        Self {
            hip_ends: 2,
            hip_corners: 4,
            hip_mids: 2 * (bays - 1),
            rafters: 2 * (bays - 1),
            eaves: legs,
            legs,
            ridge_connectors: 1,
            corner_connectors: 4,
            perimeter_connectors: 2 * bays,
            brace_bars: 2 * bays + 1,
            tensioning_straps: legs,
            ballasting_straps: legs,
            stakes: 2 * legs,
            concrete: legs,
        }
    }

    pub fn for_size(size: TentSize) -> &'static SizeSpec {
        // 30' wide frames use 15' bays, 40' wide frames use 20' bays with
        // a centre leg on each gable end.
        static S30X30: SizeSpec = SizeSpec::frame(2, 8);
        static S30X45: SizeSpec = SizeSpec::frame(3, 12);
        static S30X60: SizeSpec = SizeSpec::frame(4, 16);
        static S30X75: SizeSpec = SizeSpec::frame(5, 20);
        static S40X40: SizeSpec = SizeSpec::frame(2, 10);
        static S40X60: SizeSpec = SizeSpec::frame(3, 14);
        static S40X80: SizeSpec = SizeSpec::frame(4, 18);
        static S40X100: SizeSpec = SizeSpec::frame(5, 22);

        match size {
            TentSize::S30x30 => &S30X30,
            TentSize::S30x45 => &S30X45,
            TentSize::S30x60 => &S30X60,
            TentSize::S30x75 => &S30X75,
            TentSize::S40x40 => &S40X40,
            TentSize::S40x60 => &S40X60,
            TentSize::S40x80 => &S40X80,
            TentSize::S40x100 => &S40X100,
        }
    }
}
