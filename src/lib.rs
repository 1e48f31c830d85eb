#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod adapters;
pub mod chemistry;
pub mod error;
pub mod models;
pub mod recipe;

#[cfg(feature = "std")]
pub use crate::error::AppError;
pub use crate::error::RecipeError;
pub use crate::models::{
    BatchRequest, BoosterParameters, FlavorProfile, FlavorReference, SourceWaterProfile,
    TargetProfile,
};
pub use crate::recipe::calculator::{
    RecipeResult, compute_batches, compute_recipe, dilution_fraction,
};
pub use crate::recipe::flavor::{FlavorRecipeResult, compute_flavor_recipe};
