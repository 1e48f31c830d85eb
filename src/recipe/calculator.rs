use crate::error::RecipeError;
use crate::models::{BatchRequest, BoosterParameters, SourceWaterProfile, TargetProfile};
use serde::Serialize;

/// Blend and dosing plan for one batch of brewing water.
///
/// Volumes are in mL, hardness in ppm, dissolved solids in mg/L. Values are
/// full precision; rounding is left to whoever displays them.
///
/// - `dilution_fraction`: share of the batch that is source water
/// - `source_volume_ml`: source water to measure out
/// - `diluent_volume_ml`: distilled water, the residual after source and booster
/// - `base_gh_ppm` / `base_tds_mg_l`: what the diluted source alone contributes
/// - `gh_deficit_ppm`: hardness the booster has to make up (never negative)
/// - `booster_dose_ml_per_l`: booster concentrate per litre of batch
/// - `booster_total_ml`: booster concentrate for the whole batch
/// - `booster_ppm_contribution`: dissolved solids added by the booster (mg/L)
/// - `final_kh_ppm` / `final_gh_ppm` / `final_tds_mg_l`: finished water
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct RecipeResult {
    pub dilution_fraction: f64,
    pub source_volume_ml: f64,
    pub diluent_volume_ml: f64,
    pub base_gh_ppm: f64,
    pub base_tds_mg_l: f64,
    pub gh_deficit_ppm: f64,
    pub booster_dose_ml_per_l: f64,
    pub booster_total_ml: f64,
    pub booster_ppm_contribution: f64,
    pub final_kh_ppm: f64,
    pub final_gh_ppm: f64,
    pub final_tds_mg_l: f64,
}

impl RecipeResult {
    /// Check whether the plan can actually be mixed.
    ///
    /// The calculator never hides an unreachable target: it returns the raw
    /// numbers, including a negative diluent volume when source plus booster
    /// overflow the batch. This check turns those numbers into
    /// `RecipeError::InfeasibleRecipe` so callers can report it. Non-finite
    /// volumes (e.g. a zero-strength booster asked to close a deficit) count
    /// as infeasible too.
    pub fn check_feasible(&self) -> Result<(), RecipeError> {
        let volumes_ok = self.diluent_volume_ml.is_finite()
            && self.booster_total_ml.is_finite()
            && self.diluent_volume_ml >= 0.0
            && self.booster_total_ml >= 0.0;
        if volumes_ok {
            Ok(())
        } else {
            Err(RecipeError::InfeasibleRecipe {
                diluent_volume_ml: self.diluent_volume_ml,
                booster_total_ml: self.booster_total_ml,
            })
        }
    }

    pub fn is_feasible(&self) -> bool {
        self.check_feasible().is_ok()
    }
}

/// Fraction of the batch that must be source water to reach `target_kh_ppm`.
///
/// KH is treated as diluting linearly with distilled water and the booster as
/// adding no alkalinity. A source without alkalinity cannot be diluted to any
/// KH target, so a zero `source_kh_ppm` yields a fraction of `0.0` instead of
/// a division fault.
pub fn dilution_fraction(source_kh_ppm: f64, target_kh_ppm: f64) -> f64 {
    if source_kh_ppm != 0.0 {
        target_kh_ppm / source_kh_ppm
    } else {
        0.0
    }
}

/// Compute the KH/GH/TDS blend for one batch.
///
/// Steps:
/// 1. dilute the source water until its KH matches the target
/// 2. measure the GH and TDS that diluted source brings along
/// 3. dose booster concentrate to close the remaining GH gap; an overshoot is
///    left as is, the booster only ever adds hardness
/// 4. fill the rest of the batch with distilled water
/// 5. add the booster's dissolved solids to the base TDS
///
/// The function is infallible: a zero source KH is absorbed by
/// [`dilution_fraction`], a zero GH deficit gives a dose of exactly `0.0`, and
/// an empty batch contributes no booster solids. Whether the resulting volumes
/// are physically possible is answered by [`RecipeResult::check_feasible`].
pub fn compute_recipe(
    source: &SourceWaterProfile,
    target: &TargetProfile,
    batch: &BatchRequest,
    booster: &BoosterParameters,
) -> RecipeResult {
    if source.kh_ppm == 0.0 {
        tracing::warn!("source water has no alkalinity, using no source water");
    }
    let frac = dilution_fraction(source.kh_ppm, target.kh_ppm);
    let batch_ml = batch.volume_ml();
    let source_volume_ml = frac * batch_ml;

    let base_gh_ppm = source.gh_ppm * frac;
    let base_tds_mg_l = source.tds_mg_l * frac;

    let gh_deficit_ppm = (target.gh_ppm - base_gh_ppm).max(0.0);
    let booster_dose_ml_per_l = if gh_deficit_ppm > 0.0 {
        gh_deficit_ppm / booster.strength_ppm_per_ml
    } else {
        0.0
    };
    let booster_total_ml = booster_dose_ml_per_l * batch.volume_l;

    let diluent_volume_ml = batch_ml - source_volume_ml - booster_total_ml;

    let booster_ppm_contribution = if batch.volume_l != 0.0 {
        (booster_total_ml * booster.solids_mg_per_ml) / batch.volume_l
    } else {
        0.0
    };
    let final_tds_mg_l = base_tds_mg_l + booster_ppm_contribution;

    let result = RecipeResult {
        dilution_fraction: frac,
        source_volume_ml,
        diluent_volume_ml,
        base_gh_ppm,
        base_tds_mg_l,
        gh_deficit_ppm,
        booster_dose_ml_per_l,
        booster_total_ml,
        booster_ppm_contribution,
        final_kh_ppm: source.kh_ppm * frac,
        final_gh_ppm: base_gh_ppm + gh_deficit_ppm,
        final_tds_mg_l,
    };
    tracing::trace!(
        batch_l = batch.volume_l,
        dilution_fraction = frac,
        booster_total_ml,
        final_tds_mg_l,
        "computed recipe"
    );
    result
}

/// Compute the same source/target/booster blend for several batch sizes.
///
/// Each batch is an independent [`compute_recipe`] call, yielded in the order
/// of `volumes_l`.
pub fn compute_batches<'a>(
    source: &'a SourceWaterProfile,
    target: &'a TargetProfile,
    volumes_l: &'a [f64],
    booster: &'a BoosterParameters,
) -> impl Iterator<Item = (f64, RecipeResult)> + 'a {
    volumes_l.iter().map(move |&volume_l| {
        let batch = BatchRequest { volume_l };
        (volume_l, compute_recipe(source, target, &batch, booster))
    })
}
