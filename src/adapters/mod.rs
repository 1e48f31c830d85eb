#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod logging;
pub mod presets;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
pub fn run() -> Result<(), crate::error::AppError> {
    use crate::adapters::cli::{Cli, Command, parse_flavor_inputs, parse_recipe_inputs};
    use crate::recipe::calculator::compute_batches;
    use crate::recipe::flavor::compute_flavor_recipe;

    let cli = Cli::parse();
    crate::adapters::logging::init_logging(cli.verbose);

    match &cli.command {
        Command::Recipe(args) => {
            let inp = parse_recipe_inputs(args)?;
            let batches: Vec<_> =
                compute_batches(&inp.source, &inp.target, &inp.batches_l, &inp.booster).collect();
            for (volume_l, recipe) in &batches {
                if let Err(e) = recipe.check_feasible() {
                    tracing::warn!(batch_l = volume_l, "{e}");
                }
            }
            crate::adapters::cli::print_recipes(&inp, &batches, args)?;
        }
        Command::Flavor(args) => {
            let inp = parse_flavor_inputs(args)?;
            let out = compute_flavor_recipe(
                inp.flavor,
                inp.target_kh_ppm,
                inp.batch_volume_l,
                inp.dose_per_liter_ml,
                &inp.reference,
            )?;
            if let Err(e) = out.check_feasible() {
                tracing::warn!(flavor = inp.flavor.name, "{e}");
            }
            crate::adapters::cli::print_flavor(&inp, &out, args)?;
        }
        Command::Presets(args) => crate::adapters::cli::print_presets(args)?,
    }

    Ok(())
}
