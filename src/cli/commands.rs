// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the three subcommands: `interactive`, `predict` and
// `inspect`, with all their flags.
//
// The `predict` flags take the same categorical codes and ranges
// as the interactive form, and clap rejects anything outside them
// before the application layer ever sees a value.
//
// Reference: Rust Book §12 (Building a CLI Program)

use anyhow::{anyhow, Result};
use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::domain::passenger::{Category, Passenger, Port, Sex, TicketClass};

pub const DEFAULT_IMAGE_URL: &str = "https://media.gettyimages.com/id/520112444/photo/forepeek-of-titanic-shipwreck.jpg?s=612x612&w=gi&k=20&c=rgIlHYkBU1bBF4Kb6hli9Mz0Fpez9VVc_7c3Ni1FCzs=";

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive passenger form
    Interactive(InteractiveArgs),

    /// Predict once from command-line values
    Predict(PredictArgs),

    /// Show the loaded model's schema and the category maps
    Inspect,
}

#[derive(Args, Debug)]
pub struct InteractiveArgs {
    /// Where to write logs while the form owns the terminal
    #[arg(long, default_value = "titanic-survival.log")]
    pub log_file: PathBuf,

    /// Decorative image shown (as a link) next to the form
    #[arg(long, default_value = DEFAULT_IMAGE_URL)]
    pub image_url: String,
}

#[derive(Args, Debug)]
pub struct PredictArgs {
    /// Ticket class: 0 = First, 1 = Second, 2 = Third
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(0..=2))]
    pub pclass: u8,

    /// Sex: 0 = Female, 1 = Male
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(0..=1))]
    pub sex: u8,

    /// Age in years
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u16).range(0..=80))]
    pub age: u16,

    /// Number of siblings/spouses aboard
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(0..=10))]
    pub sibsp: u16,

    /// Number of parents/children aboard
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u16).range(0..=6))]
    pub parch: u16,

    /// Ticket fare in dollars
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u16).range(0..=512))]
    pub fare: u16,

    /// Port of embarkation: 0 = Cherbourg, 1 = Queenstown, 2 = Southampton
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(0..=2))]
    pub embarked: u8,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

/// The boundary between Layer 1 and the domain:
/// the application layer never sees clap types.
impl TryFrom<&PredictArgs> for Passenger {
    type Error = anyhow::Error;

    fn try_from(a: &PredictArgs) -> Result<Self> {
        Passenger::new(
            TicketClass::from_code(a.pclass).ok_or_else(|| anyhow!("unknown ticket class {}", a.pclass))?,
            Sex::from_code(a.sex).ok_or_else(|| anyhow!("unknown sex {}", a.sex))?,
            a.age,
            a.sibsp,
            a.parch,
            a.fare,
            Port::from_code(a.embarked).ok_or_else(|| anyhow!("unknown port {}", a.embarked))?,
        )
    }
}
