// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to the layers below.
//
// Three commands are supported:
//   1. `interactive` : the terminal form, re-predicting on every change
//   2. `predict`     : one prediction from flags
//   3. `inspect`     : print the model schema and category maps
//
// Every command loads the model artifact exactly once, up front.
// A load failure aborts with the path and the cause.
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;

use commands::{Commands, InteractiveArgs, PredictArgs};
use crate::application::predict_use_case::SurvivalPredictor;
use crate::domain::passenger::{Category, Passenger, Port, Sex, TicketClass, FEATURE_NAMES};
use crate::domain::prediction::Prediction;
use crate::infra::artifact::LoadedModel;

#[derive(Parser, Debug)]
#[command(
    name = "titanic-survival",
    version = "0.1.0",
    about = "Would you have survived the Titanic? Ask a pre-trained classifier."
)]
pub struct Cli {
    /// Model artifact (JSON manifest)
    #[arg(long, global = true, default_value = "models/reference_model.json")]
    pub model: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

/// Shape of `predict --json`
#[derive(Serialize)]
struct PredictReport<'a> {
    passenger:  &'a Passenger,
    /// In model column order
    features:   Vec<NamedFeature>,
    prediction: &'a Prediction,
}

#[derive(Serialize)]
struct NamedFeature {
    name:  &'static str,
    value: f64,
}

impl Cli {
    /// Log file for the interactive form; `None` means stderr.
    pub fn log_file(&self) -> Option<&PathBuf> {
        match &self.command {
            Commands::Interactive(args) => Some(&args.log_file),
            _ => None,
        }
    }

    pub fn run(self) -> Result<()> {
        let model = self.load_model()?;
        match &self.command {
            Commands::Interactive(args) => self.run_interactive(model, args),
            Commands::Predict(args)     => self.run_predict(model, args),
            Commands::Inspect           => self.run_inspect(&model),
        }
    }

    fn load_model(&self) -> Result<LoadedModel> {
        LoadedModel::load(&self.model)
            .with_context(|| format!("Failed to load model artifact '{}'", self.model.display()))
    }

    fn run_interactive(&self, model: LoadedModel, args: &InteractiveArgs) -> Result<()> {
        tracing::info!("Starting interactive form with {} model", model.kind());
        crate::ui::run(SurvivalPredictor::new(model), &args.image_url)
    }

    fn run_predict(&self, model: LoadedModel, args: &PredictArgs) -> Result<()> {
        let passenger = Passenger::try_from(args)?;
        let predictor = SurvivalPredictor::new(model);
        let prediction = predictor.predict(&passenger)?;
        tracing::info!(
            "Predicted {:?} ({:.2}%) for {:?}",
            prediction.outcome,
            prediction.confidence,
            passenger
        );

        if args.json {
            println!("{}", predict_json(&passenger, &prediction)?);
        } else {
            println!("{}", predict_text(&passenger, &prediction));
        }
        Ok(())
    }

    fn run_inspect(&self, model: &LoadedModel) -> Result<()> {
        print!("{}", inspect_text(model));
        Ok(())
    }
}

fn predict_text(passenger: &Passenger, prediction: &Prediction) -> String {
    format!(
        "{} · {} · age {} · {} sibling/spouse · {} parent/child · fare ${} · {}\n\n{prediction}",
        passenger.class.label(),
        passenger.sex.label(),
        passenger.age,
        passenger.sibsp,
        passenger.parch,
        passenger.fare,
        passenger.embarked.label(),
    )
}

fn predict_json(passenger: &Passenger, prediction: &Prediction) -> Result<String> {
    let report = PredictReport {
        passenger,
        features: passenger
            .to_features()
            .named()
            .map(|(name, value)| NamedFeature { name, value })
            .collect(),
        prediction,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

fn inspect_text(model: &LoadedModel) -> String {
    let mut out = format!(
        "Model:     {}\nEstimator: {}\nScaler:    {}\nFeatures:  {}\n",
        model.source().display(),
        model.kind(),
        if model.is_scaled() { "standard" } else { "none" },
        FEATURE_NAMES.join(", "),
    );
    out.push_str(&category_text::<TicketClass>("Pclass"));
    out.push_str(&category_text::<Sex>("Sex"));
    out.push_str(&category_text::<Port>("Embarked"));
    out
}

fn category_text<C: Category>(name: &str) -> String {
    let mut out = format!("\n{name}:\n");
    for c in C::ALL {
        out.push_str(&format!("  {} = {}\n", c.code(), c.label()));
    }
    out
}
