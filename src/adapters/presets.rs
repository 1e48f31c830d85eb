//! Preset catalogs offered by the shell.
//!
//! The calculators only see resolved numbers; the names live here. Lookup is
//! case-insensitive and ignores punctuation and spacing, so `le-minerale`,
//! `Le Minerale` and `LEMINERALE` all resolve to the same preset.
use serde::Serialize;

use crate::models::{FlavorProfile, SourceWaterProfile, TargetProfile};

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SourcePreset {
    pub name: &'static str,
    pub profile: SourceWaterProfile,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TargetPreset {
    pub name: &'static str,
    pub profile: TargetProfile,
}

pub const SOURCE_PRESETS: &[SourcePreset] = &[SourcePreset {
    name: "Le Minerale",
    profile: SourceWaterProfile {
        kh_ppm: 133.2,
        gh_ppm: 63.3,
        tds_mg_l: 255.5,
    },
}];

pub const TARGET_PRESETS: &[TargetPreset] = &[
    TargetPreset {
        name: "Simplified Rao/Perger",
        profile: TargetProfile {
            kh_ppm: 40.0,
            gh_ppm: 88.0,
        },
    },
    TargetPreset {
        name: "Classic Rao/Perger",
        profile: TargetProfile {
            kh_ppm: 40.0,
            gh_ppm: 50.0,
        },
    },
];

pub const FLAVOR_PRESETS: &[FlavorProfile] = &[
    FlavorProfile {
        name: "Bright & Juicy",
        mg_concentration_g_per_l: 12.0,
        ca_concentration_g_per_l: 3.0,
        flavor_note: "Magnesium-forward; lifts acidity and fruit clarity",
    },
    FlavorProfile {
        name: "Balanced",
        mg_concentration_g_per_l: 8.0,
        ca_concentration_g_per_l: 8.0,
        flavor_note: "Even magnesium/calcium split; rounded sweetness",
    },
    FlavorProfile {
        name: "Heavy Body",
        mg_concentration_g_per_l: 4.0,
        ca_concentration_g_per_l: 12.0,
        flavor_note: "Calcium-forward; heavier mouthfeel, muted acidity",
    },
    FlavorProfile {
        name: "Espresso",
        mg_concentration_g_per_l: 6.0,
        ca_concentration_g_per_l: 10.0,
        flavor_note: "Moderate hardness that keeps shots syrupy without scale",
    },
];

fn normalized(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
}

fn name_matches(name: &str, query: &str) -> bool {
    normalized(name).eq(normalized(query))
}

pub fn find_source(name: &str) -> Option<&'static SourcePreset> {
    SOURCE_PRESETS.iter().find(|p| name_matches(p.name, name))
}

pub fn find_target(name: &str) -> Option<&'static TargetPreset> {
    TARGET_PRESETS.iter().find(|p| name_matches(p.name, name))
}

pub fn find_flavor(name: &str) -> Option<&'static FlavorProfile> {
    FLAVOR_PRESETS.iter().find(|p| name_matches(p.name, name))
}
