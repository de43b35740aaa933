//! Section Builders
//!
//! Static checklist content. Only quantity text varies per size.

use crate::domain::{ChecklistItem, ChecklistSection, TentSize};

use super::size_spec::SizeSpec;

pub const COMMON_EQUIPMENT_ID: &str = "common-equipment";
pub const STAKES_ID: &str = "stakes";
pub const CONCRETE_ID: &str = "concrete";
pub const SPECIFIC_HARDWARE_ID: &str = "specific-hardware";
pub const WALLS_ID: &str = "walls";
pub const LIGHTING_ID: &str = "lighting";

/// Sections shared by every size, ballast candidates included
pub fn common_sections(size: TentSize) -> Vec<ChecklistSection> {
    vec![
        ChecklistSection::new(
            COMMON_EQUIPMENT_ID,
            format!("FOR ALL {}' WIDE TENTS", size.width()),
            vec![
                ChecklistItem::new("top-tension-straps", "Top Tension Straps"),
                ChecklistItem::new("ballast-tension-straps", "Ballast Tension Straps"),
                ChecklistItem::new("ladders", "Ladders - min 2, 4 if walls"),
                ChecklistItem::new("tarp-20x16", "Tarp: 20x16 white"),
                ChecklistItem::new("pulling-bag", "Pulling Bag").with_sub_items(vec![
                    ChecklistItem::new("ropes-2x", "2x ropes w/ carabiners"),
                    ChecklistItem::new("track-guides-2x", "2x track guides"),
                    ChecklistItem::new("keder-feeders-2x", "2x keder feeders"),
                    ChecklistItem::new("track-handles-2x", "2x track handles"),
                ]),
                ChecklistItem::new("cleaning-products", "Cleaning products"),
                ChecklistItem::new("towels", "Towels"),
            ],
        ),
        ChecklistSection::new(
            STAKES_ID,
            "Stakes",
            vec![
                ChecklistItem::new("stake-driver", "Stake driver")
                    .with_note("*Charge and bring both batteries*"),
                ChecklistItem::new("stake-puller", "Stake Puller"),
                ChecklistItem::new("sledge-hammer", "Sledge hammer"),
                ChecklistItem::new("big-blue-wrench", "Big Blue Wrench"),
                ChecklistItem::new("stake-caps", "Stake Caps"),
            ],
        ),
        ChecklistSection::new(
            CONCRETE_ID,
            "Concrete / Water Barrels",
            vec![
                ChecklistItem::new("concrete-dolly", "Concrete dolly w/ chain & hook")
                    .with_note("*Possible ice: bring torch*"),
                ChecklistItem::new("electric-pallet-jack", "Electric pallet jack")
                    .with_note("*Charge Battery*"),
            ],
        ),
    ]
}

/// Frame hardware for one size; every quantity comes from the table
pub fn specific_hardware(size: TentSize) -> ChecklistSection {
    let spec = SizeSpec::for_size(size);
    let hip_end_width = size.width() / 2;

    ChecklistSection::new(
        SPECIFIC_HARDWARE_ID,
        format!("{} FRAME SPECIFIC HARDWARE", size),
        vec![
            ChecklistItem::new(
                "hip-end-tops",
                format!("{}x hip end {}' wide tops", spec.hip_ends, hip_end_width),
            ),
            ChecklistItem::new(
                "hip-corner-rafters",
                format!("{}x hip corner rafters", spec.hip_corners),
            ),
            ChecklistItem::new("hip-mid-rafters", format!("{}x hip mid rafters", spec.hip_mids)),
            ChecklistItem::new("rafters", format!("{}x rafters", spec.rafters)),
            ChecklistItem::new("eaves", format!("{}x eaves", spec.eaves)),
            ChecklistItem::new(
                "legs-base-plates",
                format!("{}x legs with base plates (feet)", spec.legs),
            ),
            ChecklistItem::new(
                "ridge-connector",
                format!("{}x 8 way ridge connector", spec.ridge_connectors),
            ),
            ChecklistItem::new(
                "corner-connectors",
                format!("{}x corner connectors", spec.corner_connectors),
            ),
            ChecklistItem::new(
                "perimeter-connectors",
                format!("{}x perimeter connectors", spec.perimeter_connectors),
            ),
            ChecklistItem::new("brace-bars", format!("{}x brace bars", spec.brace_bars)),
            ChecklistItem::new(
                "tensioning-straps",
                format!("{}x Tensioning straps", spec.tensioning_straps),
            ),
            ChecklistItem::new(
                "ballasting-straps",
                format!("{}x Ballasting Straps (max)", spec.ballasting_straps),
            ),
        ],
    )
}

/// Sidewall add-on, same for every size
pub fn walls_section() -> ChecklistSection {
    ChecklistSection::new(
        WALLS_ID,
        "Walls",
        vec![
            ChecklistItem::new("wall-panels", "Sidewall panels"),
            ChecklistItem::new("wall-rails", "Wall rails"),
            ChecklistItem::new("wall-clamps", "Wall clamps"),
            ChecklistItem::new("wall-ball-ties", "Ball ties / bungees"),
        ],
    )
}

/// Lighting add-on, same for every size
pub fn lighting_section() -> ChecklistSection {
    ChecklistSection::new(
        LIGHTING_ID,
        "Lighting",
        vec![
            ChecklistItem::new("string-lights", "String lights"),
            ChecklistItem::new("pendant-fixtures", "Pendant light fixtures"),
            ChecklistItem::new("spare-bulbs", "Spare bulbs"),
            ChecklistItem::new("extension-cords", "Extension cords"),
            ChecklistItem::new("power-strips", "Power strips"),
            ChecklistItem::new("light-hangers", "Light clamps / hangers"),
            ChecklistItem::new("zip-ties", "Zip ties"),
            ChecklistItem::new("gaffer-tape", "Gaffer tape / cord covers"),
        ],
    )
}
