use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Read};

use crate::adapters::presets::{
    FLAVOR_PRESETS, SOURCE_PRESETS, TARGET_PRESETS, find_flavor, find_source, find_target,
};
use crate::chemistry::{BoosterSalts, booster_concentrate_salts};
use crate::error::AppError;
use crate::models::{
    BatchRequest, BoosterParameters, FlavorProfile, FlavorReference, SourceWaterProfile,
    TargetProfile,
};
use crate::recipe::calculator::RecipeResult;
use crate::recipe::flavor::FlavorRecipeResult;

const CUSTOM_SOURCE: &str = "Custom";

#[derive(Parser, Debug)]
#[command(author, version, about = "Brewing water recipe calculator — optional JSON output", long_about = None)]
pub struct Cli {
    #[arg(long, global = true, help = "Log every calculation step to stderr")]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Blend source water, distilled water and GH booster to a KH/GH target
    Recipe(RecipeArgs),
    /// Blend source water with a flavor-preset Mg/Ca concentrate
    Flavor(FlavorArgs),
    /// List the source, target and flavor presets
    Presets(PresetsArgs),
}

#[derive(Args, Debug)]
pub struct RecipeArgs {
    #[arg(long)]
    json: bool,
    #[arg(
        long,
        value_name = "FILE",
        help = "JSON file with source, target and optional batch/booster; '-' reads from stdin"
    )]
    input: Option<String>,
    #[arg(
        long,
        value_name = "JSON",
        help = "Inline JSON document (overrides --input)"
    )]
    inputs_json: Option<String>,
    #[arg(long, value_name = "PRESET", default_value = "le-minerale")]
    source: String,
    #[arg(long, value_name = "PRESET")]
    target: Option<String>,
    #[arg(
        long,
        value_name = "LITRES",
        num_args = 1..,
        default_value = "1.0",
        help = "Batch size; several values compare batches side by side (a 'batch' in the input document takes precedence)"
    )]
    batch_l: Vec<f64>,
}

#[derive(Args, Debug)]
pub struct FlavorArgs {
    #[arg(long)]
    json: bool,
    #[arg(long, value_name = "PRESET")]
    flavor: String,
    #[arg(long, default_value_t = 40.0, allow_negative_numbers = true)]
    target_kh: f64,
    #[arg(long, default_value_t = 1.0)]
    batch_l: f64,
    #[arg(long, default_value_t = 2.0)]
    dose_ml_per_l: f64,
    #[arg(long, allow_negative_numbers = true)]
    source_tds_ref: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    source_kh_ref: Option<f64>,
}

#[derive(Args, Debug)]
pub struct PresetsArgs {
    #[arg(long)]
    json: bool,
}

/// Resolved numbers for the `recipe` subcommand.
#[derive(Debug)]
pub struct RecipeInputs {
    pub source_name: String,
    pub source: SourceWaterProfile,
    pub target: TargetProfile,
    pub booster: BoosterParameters,
    pub batches_l: Vec<f64>,
}

/// Resolved numbers for the `flavor` subcommand.
#[derive(Debug)]
pub struct FlavorInputs {
    pub flavor: &'static FlavorProfile,
    pub target_kh_ppm: f64,
    pub batch_volume_l: f64,
    pub dose_per_liter_ml: f64,
    pub reference: FlavorReference,
}

#[derive(Deserialize)]
struct CmdInput {
    source: SourceWaterProfile,
    target: TargetProfile,
    #[serde(default)]
    batch: Option<BatchRequest>,
    #[serde(default)]
    booster: Option<BoosterParameters>,
}

fn from_cmd_input(parsed: CmdInput, args: &RecipeArgs) -> RecipeInputs {
    if let Some(batch) = &parsed.batch {
        tracing::debug!(
            batch_l = batch.volume_l,
            "input document sets the batch, ignoring --batch-l"
        );
    }
    RecipeInputs {
        source_name: CUSTOM_SOURCE.to_string(),
        source: parsed.source,
        target: parsed.target,
        booster: parsed.booster.unwrap_or_default(),
        batches_l: parsed
            .batch
            .map(|b| vec![b.volume_l])
            .unwrap_or_else(|| args.batch_l.clone()),
    }
}

fn parse_cmd_input_doc(doc: &str, args: &RecipeArgs) -> Result<RecipeInputs, AppError> {
    let parsed: CmdInput =
        serde_json::from_str(doc).map_err(|source| AppError::ParseCmdInputJson { source })?;
    Ok(from_cmd_input(parsed, args))
}

fn resolve_presets(target: &str, args: &RecipeArgs) -> Result<RecipeInputs, AppError> {
    let source = find_source(&args.source).ok_or_else(|| AppError::UnknownPreset {
        kind: "source",
        name: args.source.clone(),
    })?;
    let target = find_target(target).ok_or_else(|| AppError::UnknownPreset {
        kind: "target",
        name: target.to_string(),
    })?;
    tracing::debug!(source = source.name, target = target.name, "resolved presets");
    Ok(RecipeInputs {
        source_name: source.name.to_string(),
        source: source.profile,
        target: target.profile,
        booster: BoosterParameters::default(),
        batches_l: args.batch_l.clone(),
    })
}

pub fn parse_recipe_inputs(args: &RecipeArgs) -> Result<RecipeInputs, AppError> {
    match (&args.inputs_json, &args.input, &args.target) {
        (Some(inputs_json), _, _) => {
            let parsed: CmdInput = serde_json::from_str(inputs_json)
                .map_err(|source| AppError::ParseInputsJson { source })?;
            Ok(from_cmd_input(parsed, args))
        }
        (None, Some(path), _) if path == "-" => {
            let mut s = String::new();
            io::stdin()
                .read_to_string(&mut s)
                .map_err(|source| AppError::ReadStdin { source })?;
            parse_cmd_input_doc(&s, args)
        }
        (None, Some(path), _) => {
            let s = fs::read_to_string(path).map_err(|source| AppError::ReadFile {
                path: path.clone(),
                source,
            })?;
            parse_cmd_input_doc(&s, args)
        }
        (None, None, Some(target)) => resolve_presets(target, args),
        (None, None, None) => Err(AppError::MissingInputData),
    }
}

pub fn parse_flavor_inputs(args: &FlavorArgs) -> Result<FlavorInputs, AppError> {
    let flavor = find_flavor(&args.flavor).ok_or_else(|| AppError::UnknownPreset {
        kind: "flavor",
        name: args.flavor.clone(),
    })?;
    let defaults = FlavorReference::default();
    Ok(FlavorInputs {
        flavor,
        target_kh_ppm: args.target_kh,
        batch_volume_l: args.batch_l,
        dose_per_liter_ml: args.dose_ml_per_l,
        reference: FlavorReference {
            source_tds_mg_l: args.source_tds_ref.unwrap_or(defaults.source_tds_mg_l),
            source_kh_ppm: args.source_kh_ref.unwrap_or(defaults.source_kh_ppm),
        },
    })
}

#[derive(Serialize)]
struct BatchOutput<'a> {
    volume_l: f64,
    feasible: bool,
    recipe: &'a RecipeResult,
}

#[derive(Serialize)]
struct RecipeOutput<'a> {
    source_name: &'a str,
    source: &'a SourceWaterProfile,
    target: &'a TargetProfile,
    booster: &'a BoosterParameters,
    batches: Vec<BatchOutput<'a>>,
    booster_concentrate: BoosterSalts,
}

fn to_json<T: Serialize>(out: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(out).map_err(|source| AppError::SerializeOutput { source })
}

pub fn print_recipes(
    inp: &RecipeInputs,
    batches: &[(f64, RecipeResult)],
    args: &RecipeArgs,
) -> Result<(), AppError> {
    let salts = booster_concentrate_salts(1.0);

    if args.json {
        let out = RecipeOutput {
            source_name: &inp.source_name,
            source: &inp.source,
            target: &inp.target,
            booster: &inp.booster,
            batches: batches
                .iter()
                .map(|(volume_l, recipe)| BatchOutput {
                    volume_l: *volume_l,
                    feasible: recipe.is_feasible(),
                    recipe,
                })
                .collect(),
            booster_concentrate: salts,
        };
        println!("{}", to_json(&out)?);
        return Ok(());
    }

    for (volume_l, r) in batches {
        println!("Recipe for {:.1} L batch", volume_l);
        println!(
            "- Source: {} (KH {:.1} ppm, GH {:.1} ppm, TDS {:.1} mg/L)",
            inp.source_name, inp.source.kh_ppm, inp.source.gh_ppm, inp.source.tds_mg_l
        );
        println!("- Source water: {:.1} mL", r.source_volume_ml);
        println!("- Distilled water: {:.1} mL", r.diluent_volume_ml);
        println!(
            "- Base GH: {:.1} ppm, Base TDS: {:.1} mg/L",
            r.base_gh_ppm, r.base_tds_mg_l
        );
        println!(
            "- GH booster: {:.2} mL per litre ({:.1} mL total)",
            r.booster_dose_ml_per_l, r.booster_total_ml
        );
        println!(
            "- Final KH: {:.1} ppm, GH: {:.1} ppm, TDS: {:.1} mg/L",
            r.final_kh_ppm, r.final_gh_ppm, r.final_tds_mg_l
        );
        println!("- Booster contributed: {:.1} ppm", r.booster_ppm_contribution);
        if let Err(e) = r.check_feasible() {
            println!("INFEASIBLE: {}", e);
        }
        println!();
    }

    println!("Booster concentrate ({:.0} L)", salts.volume_l);
    println!("- {:.2} g calcium chloride (CaCl2)", salts.calcium_chloride_g);
    println!("- {:.2} g Epsom salt (MgSO4·7H2O)", salts.epsom_salt_g);
    println!("- Fill to {:.0} L with distilled water", salts.volume_l);

    Ok(())
}

#[derive(Serialize)]
struct FlavorOutput<'a> {
    flavor: &'a FlavorProfile,
    target_kh_ppm: f64,
    batch_volume_l: f64,
    dose_per_liter_ml: f64,
    reference: &'a FlavorReference,
    feasible: bool,
    recipe: &'a FlavorRecipeResult,
}

pub fn print_flavor(
    inp: &FlavorInputs,
    out: &FlavorRecipeResult,
    args: &FlavorArgs,
) -> Result<(), AppError> {
    if args.json {
        let doc = FlavorOutput {
            flavor: inp.flavor,
            target_kh_ppm: inp.target_kh_ppm,
            batch_volume_l: inp.batch_volume_l,
            dose_per_liter_ml: inp.dose_per_liter_ml,
            reference: &inp.reference,
            feasible: out.is_feasible(),
            recipe: out,
        };
        println!("{}", to_json(&doc)?);
        return Ok(());
    }

    println!("Flavor: {} ({})", inp.flavor.name, inp.flavor.flavor_note);
    println!(
        "- Dilution factor: {:.2} (source ratio {:.3})",
        out.dilution_factor, out.source_ratio
    );
    println!(
        "- Source water: {:.3} L, Distilled water: {:.3} L",
        out.source_volume_l, out.diluent_volume_l
    );
    println!("- Concentrate: {:.1} mL", out.concentrate_volume_ml);
    println!(
        "- Magnesium salt: {:.2} g, Calcium salt: {:.2} g",
        out.mg_total_g, out.ca_total_g
    );
    println!("- GH: {:.1} ppm", out.gh_ppm);
    println!("- Estimated TDS: {:.1} mg/L", out.estimated_tds_mg_l);
    if let Err(e) = out.check_feasible() {
        println!("INFEASIBLE: {}", e);
    }

    Ok(())
}

#[derive(Serialize)]
struct PresetsOutput {
    sources: &'static [crate::adapters::presets::SourcePreset],
    targets: &'static [crate::adapters::presets::TargetPreset],
    flavors: &'static [FlavorProfile],
}

pub fn print_presets(args: &PresetsArgs) -> Result<(), AppError> {
    if args.json {
        let out = PresetsOutput {
            sources: SOURCE_PRESETS,
            targets: TARGET_PRESETS,
            flavors: FLAVOR_PRESETS,
        };
        println!("{}", to_json(&out)?);
        return Ok(());
    }

    println!("Source water:");
    for p in SOURCE_PRESETS {
        println!(
            "- {}: KH {:.1} ppm, GH {:.1} ppm, TDS {:.1} mg/L",
            p.name, p.profile.kh_ppm, p.profile.gh_ppm, p.profile.tds_mg_l
        );
    }
    println!("Targets:");
    for p in TARGET_PRESETS {
        println!(
            "- {}: KH {:.1} ppm, GH {:.1} ppm",
            p.name, p.profile.kh_ppm, p.profile.gh_ppm
        );
    }
    println!("Flavors:");
    for p in FLAVOR_PRESETS {
        println!(
            "- {}: Mg {:.1} g/L, Ca {:.1} g/L ({})",
            p.name, p.mg_concentration_g_per_l, p.ca_concentration_g_per_l, p.flavor_note
        );
    }

    Ok(())
}
