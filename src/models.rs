use serde::{Deserialize, Serialize};

use crate::chemistry::{
    DEFAULT_BOOSTER_SOLIDS_MG_PER_ML, DEFAULT_BOOSTER_STRENGTH_PPM_PER_ML,
    DEFAULT_FLAVOR_SOURCE_KH_PPM, DEFAULT_FLAVOR_SOURCE_TDS_MG_L,
};

/// Mineral profile of the source (mineral-rich) water.
///
/// - `kh_ppm`: alkalinity, ppm as CaCO3
/// - `gh_ppm`: general hardness, ppm
/// - `tds_mg_l`: total dissolved solids, mg/L
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SourceWaterProfile {
    pub kh_ppm: f64,
    pub gh_ppm: f64,
    pub tds_mg_l: f64,
}

/// Desired alkalinity and hardness of the finished brewing water.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TargetProfile {
    pub kh_ppm: f64,
    pub gh_ppm: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BatchRequest {
    pub volume_l: f64,
}

impl BatchRequest {
    pub fn volume_ml(&self) -> f64 {
        self.volume_l * crate::chemistry::ML_PER_L
    }
}

/// Strength of the GH booster concentrate.
///
/// `strength_ppm_per_ml` is the GH gained per mL of concentrate dosed into one
/// litre of batch; `solids_mg_per_ml` is the dissolved solids each mL carries.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoosterParameters {
    pub strength_ppm_per_ml: f64,
    pub solids_mg_per_ml: f64,
}

impl Default for BoosterParameters {
    fn default() -> Self {
        Self {
            strength_ppm_per_ml: DEFAULT_BOOSTER_STRENGTH_PPM_PER_ML,
            solids_mg_per_ml: DEFAULT_BOOSTER_SOLIDS_MG_PER_ML,
        }
    }
}

/// Named magnesium/calcium concentrate used by the flavor calculator.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FlavorProfile {
    pub name: &'static str,
    pub mg_concentration_g_per_l: f64,
    pub ca_concentration_g_per_l: f64,
    pub flavor_note: &'static str,
}

/// Reference source water the flavor calculator dilutes from.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlavorReference {
    pub source_tds_mg_l: f64,
    pub source_kh_ppm: f64,
}

impl Default for FlavorReference {
    fn default() -> Self {
        Self {
            source_tds_mg_l: DEFAULT_FLAVOR_SOURCE_TDS_MG_L,
            source_kh_ppm: DEFAULT_FLAVOR_SOURCE_KH_PPM,
        }
    }
}
