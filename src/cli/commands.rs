use clap::{Parser, Subcommand};
use soulmirror::{Category, Intensity};

/// `soulmirror` - Relationship reflection scoring with an offline voice.
#[derive(Parser, Debug)]
#[command(name = "soulmirror")]
#[command(version)]
#[command(
    about = "Score relationship reflections and answer in a reflective voice.",
    long_about = None
)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze all three reflections and print the full report
    Reflect {
        /// What feels misaligned
        #[arg(long, default_value = "")]
        misaligned: String,

        /// What is emerging
        #[arg(long, default_value = "")]
        emerging: String,

        /// What remains uncertain
        #[arg(long, default_value = "")]
        uncertain: String,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Score a single reflection
    Analyze {
        /// Category (misaligned, emerging, uncertain)
        #[arg(short, long)]
        category: Category,

        /// Reflection text
        text: String,

        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },

    /// Restyle text in the reflective voice
    Stylize {
        /// Intensity (gentle, moderate, intense)
        #[arg(short, long, default_value = "moderate")]
        intensity: Intensity,

        text: String,
    },

    /// Print a reflection prompt for one area
    Prompt {
        /// Category (misaligned, emerging, uncertain)
        #[arg(short, long)]
        area: Category,

        /// Selects the prompt deterministically
        #[arg(short, long, default_value = "0", allow_negative_numbers = true)]
        seed: i64,
    },

    /// Print journal prompts for three scores
    Journal {
        misaligned: u8,
        emerging: u8,
        uncertain: u8,
    },

    /// Show configuration and whether remote analysis is enabled
    Status,

    /// Re-enable remote analysis after a quota failure
    Reset,
}
