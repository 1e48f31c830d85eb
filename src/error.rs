// std-Variante: Fehler mit thiserror, ohne std als schlichte Enum
#[cfg(feature = "std")]
use thiserror::Error;

/// Faults raised by the recipe calculators.
#[cfg(feature = "std")]
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum RecipeError {
    #[error("Division by zero: {input} must be positive (got {value})")]
    DivisionByZero { input: &'static str, value: f64 },

    #[error(
        "Infeasible recipe: diluent {diluent_volume_ml} mL, booster {booster_total_ml} mL do not fit the batch"
    )]
    InfeasibleRecipe {
        diluent_volume_ml: f64,
        booster_total_ml: f64,
    },
}

#[cfg(not(feature = "std"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RecipeError {
    DivisionByZero {
        input: &'static str,
        value: f64,
    },
    InfeasibleRecipe {
        diluent_volume_ml: f64,
        booster_total_ml: f64,
    },
}

#[cfg(feature = "std")]
#[derive(Error, Debug)]
pub enum AppError {
    #[cfg(feature = "cli")]
    #[error("Error reading from stdin: {source}")]
    ReadStdin {
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Error reading file '{path}': {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Invalid JSON for --inputs-json: {source}")]
    ParseInputsJson {
        #[source]
        source: serde_json::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Invalid JSON in input document: {source}")]
    ParseCmdInputJson {
        #[source]
        source: serde_json::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Could not serialize output to JSON: {source}")]
    SerializeOutput {
        #[source]
        source: serde_json::Error,
    },

    #[error("Unknown {kind} preset '{name}'")]
    UnknownPreset { kind: &'static str, name: String },

    #[error(transparent)]
    Recipe(#[from] RecipeError),

    #[cfg(feature = "cli")]
    #[error("Missing input data: provide --target, --input or --inputs-json")]
    MissingInputData,
}
