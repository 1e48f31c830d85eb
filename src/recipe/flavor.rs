use crate::chemistry::ML_PER_L;
use crate::error::RecipeError;
use crate::models::{FlavorProfile, FlavorReference};
use serde::Serialize;

/// Blend and concentrate plan driven by a flavor preset.
///
/// Source and diluent volumes are litres, the concentrate volume is mL and the
/// salt masses are grams.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct FlavorRecipeResult {
    pub dilution_factor: f64,
    pub source_ratio: f64,
    pub source_volume_l: f64,
    pub diluent_volume_l: f64,
    pub concentrate_volume_ml: f64,
    pub mg_total_g: f64,
    pub ca_total_g: f64,
    pub gh_ppm: f64,
    pub estimated_tds_mg_l: f64,
}

impl FlavorRecipeResult {
    /// Check whether the plan can actually be mixed.
    ///
    /// A target KH above the reference source KH asks for more source water
    /// than the batch holds, which shows up as a negative diluent volume. The
    /// error reports the diluent in mL and the concentrate as the booster
    /// volume, matching [`super::calculator::RecipeResult::check_feasible`].
    pub fn check_feasible(&self) -> Result<(), RecipeError> {
        let volumes_ok = self.diluent_volume_l.is_finite()
            && self.concentrate_volume_ml.is_finite()
            && self.diluent_volume_l >= 0.0
            && self.concentrate_volume_ml >= 0.0;
        if volumes_ok {
            Ok(())
        } else {
            Err(RecipeError::InfeasibleRecipe {
                diluent_volume_ml: self.diluent_volume_l * ML_PER_L,
                booster_total_ml: self.concentrate_volume_ml,
            })
        }
    }

    pub fn is_feasible(&self) -> bool {
        self.check_feasible().is_ok()
    }
}

/// Compute a flavor-preset recipe.
///
/// The source water is diluted by `reference.source_kh_ppm / target_kh_ppm`,
/// and the source share of the batch is the inverse of that factor. This is
/// the same idea as [`super::calculator::dilution_fraction`] taken the other
/// way round, which rounds differently, so the two are kept apart.
///
/// GH is `(mg + ca concentration) * dose_per_liter_ml` and does not scale with
/// `batch_volume_l`: the per-litre dose already normalises it. The salt masses
/// (`mg_total_g`, `ca_total_g`) do scale with the batch.
///
/// # Errors
/// `RecipeError::DivisionByZero` when `target_kh_ppm <= 0` or
/// `reference.source_kh_ppm <= 0`.
pub fn compute_flavor_recipe(
    flavor: &FlavorProfile,
    target_kh_ppm: f64,
    batch_volume_l: f64,
    dose_per_liter_ml: f64,
    reference: &FlavorReference,
) -> Result<FlavorRecipeResult, RecipeError> {
    if target_kh_ppm.is_nan() || target_kh_ppm <= 0.0 {
        return Err(RecipeError::DivisionByZero {
            input: "target KH",
            value: target_kh_ppm,
        });
    }
    if reference.source_kh_ppm.is_nan() || reference.source_kh_ppm <= 0.0 {
        return Err(RecipeError::DivisionByZero {
            input: "reference source KH",
            value: reference.source_kh_ppm,
        });
    }

    let dilution_factor = reference.source_kh_ppm / target_kh_ppm;
    let source_ratio = 1.0 / dilution_factor;

    let source_volume_l = source_ratio * batch_volume_l;
    let diluent_volume_l = (1.0 - source_ratio) * batch_volume_l;
    let concentrate_volume_ml = dose_per_liter_ml * batch_volume_l;

    let mg_total_g = flavor.mg_concentration_g_per_l * batch_volume_l;
    let ca_total_g = flavor.ca_concentration_g_per_l * batch_volume_l;

    let gh_ppm =
        (flavor.mg_concentration_g_per_l + flavor.ca_concentration_g_per_l) * dose_per_liter_ml;
    let estimated_tds_mg_l = source_ratio * reference.source_tds_mg_l + gh_ppm;

    tracing::trace!(
        flavor = flavor.name,
        dilution_factor,
        gh_ppm,
        estimated_tds_mg_l,
        "computed flavor recipe"
    );

    Ok(FlavorRecipeResult {
        dilution_factor,
        source_ratio,
        source_volume_l,
        diluent_volume_l,
        concentrate_volume_ml,
        mg_total_g,
        ca_total_g,
        gh_ppm,
        estimated_tds_mg_l,
    })
}
