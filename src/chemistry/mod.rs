//! Chemistry module: constants and helpers for brewing-water blending.
//!
//! This module provides:
//! - Volume unit conversion between litres and millilitres
//! - Default strength of the GH booster concentrate
//! - The salt recipe for that concentrate, scalable to any volume
//! - Reference source water used by the flavor calculator
//!
//! Units conventions:
//! - KH and GH are ppm (KH as CaCO3 equivalent)
//! - TDS is mg/L
//! - Batch volumes are litres, doses are mL per litre of batch
//! - Salt masses are grams
//!
//! # Examples
//! ```rust
//! use brewwater_rs::chemistry::booster_concentrate_salts;
//!
//! let salts = booster_concentrate_salts(0.5);
//! assert!((salts.calcium_chloride_g - 2.2).abs() < 1e-12);
//! assert!((salts.epsom_salt_g - 3.3).abs() < 1e-12);
//! ```
//!
//! # Panics
//! None of the functions panic.
use serde::Serialize;

/// Millilitres per litre.
pub const ML_PER_L: f64 = 1000.0;

/// GH (ppm) gained per mL of booster concentrate per litre of batch.
pub const DEFAULT_BOOSTER_STRENGTH_PPM_PER_ML: f64 = 6.6;
/// Dissolved solids (mg) carried by one mL of booster concentrate.
pub const DEFAULT_BOOSTER_SOLIDS_MG_PER_ML: f64 = 11.0;

/// Calcium chloride (CaCl2) per litre of booster concentrate, grams.
pub const BOOSTER_CACL2_G_PER_L: f64 = 4.40;
/// Epsom salt (MgSO4·7H2O) per litre of booster concentrate, grams.
pub const BOOSTER_EPSOM_G_PER_L: f64 = 6.60;

// Le Minerale-like reference water for flavor concentrates
pub const DEFAULT_FLAVOR_SOURCE_TDS_MG_L: f64 = 255.5;
pub const DEFAULT_FLAVOR_SOURCE_KH_PPM: f64 = 133.0;

/// Salts to dissolve, then top up with distilled water to `volume_l`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BoosterSalts {
    pub volume_l: f64,
    pub calcium_chloride_g: f64,
    pub epsom_salt_g: f64,
}

/// Scale the booster concentrate recipe to `volume_l` litres of concentrate.
pub fn booster_concentrate_salts(volume_l: f64) -> BoosterSalts {
    let volume_l = volume_l.max(0.0);
    BoosterSalts {
        volume_l,
        calcium_chloride_g: BOOSTER_CACL2_G_PER_L * volume_l,
        epsom_salt_g: BOOSTER_EPSOM_G_PER_L * volume_l,
    }
}

