use crate::app::status::{render_report, render_status};
use crate::cli::commands::{Cli, Commands};
use anyhow::{Context, Result};
use soulmirror::{
    Config, ReflectionEntries, ReflectionPipeline, journal_prompts, reflection_prompt, stylize,
};

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}

pub async fn dispatch(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        Commands::Reflect {
            misaligned,
            emerging,
            uncertain,
            json,
        } => {
            let pipeline = ReflectionPipeline::from_config(&config);
            let entries = ReflectionEntries::new(misaligned, emerging, uncertain);
            let report = pipeline.run(&entries).await;
            if json {
                print_json(&report)
            } else {
                println!("{}", render_report(&report));
                Ok(())
            }
        }

        Commands::Analyze {
            category,
            text,
            json,
        } => {
            let pipeline = ReflectionPipeline::from_config(&config);
            let analysis = pipeline.analysis().analyze(&text, category).await;
            if json {
                print_json(&analysis)
            } else {
                println!("◆ {category} ({}/100)", analysis.score);
                println!("  {}", analysis.insights);
                println!("  → {}", analysis.suggestions);
                Ok(())
            }
        }

        Commands::Stylize { intensity, text } => {
            println!("{}", stylize(&text, intensity));
            Ok(())
        }

        Commands::Prompt { area, seed } => {
            println!("{}", reflection_prompt(area, seed));
            Ok(())
        }

        Commands::Journal {
            misaligned,
            emerging,
            uncertain,
        } => {
            for prompt in journal_prompts(misaligned, emerging, uncertain) {
                println!("- {prompt}");
            }
            Ok(())
        }

        Commands::Status => {
            let pipeline = ReflectionPipeline::from_config(&config);
            println!("{}", render_status(&config, pipeline.circuit()));
            Ok(())
        }

        Commands::Reset => {
            let pipeline = ReflectionPipeline::from_config(&config);
            pipeline
                .circuit()
                .reset()
                .context("Failed to re-enable remote analysis")?;
            println!("Remote analysis re-enabled.");
            Ok(())
        }
    }
}
