//! Squadron Planner - Entry Point
//!
//! Loads a roster file, shows which squad covers each available mission with
//! the current training bonus, then searches training programs that unlock
//! more missions.

use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;

use squadron_planner::core::config::{config, set_config};
use squadron_planner::roster::load_roster;
use squadron_planner::{ProgramReport, Result, Squadron};

/// Squad and training planner
#[derive(Parser, Debug)]
#[command(name = "squadron-planner")]
#[command(about = "Rank squads for missions and search training programs")]
struct Args {
    /// Roster file (TOML)
    #[arg(long, default_value = "data/squadron.toml")]
    roster: PathBuf,

    /// Only search programs of this many courses (default: every length up to the daily limit)
    #[arg(long)]
    length: Option<usize>,

    /// Report programs doing more than this many missions (default: from the roster's planner table)
    #[arg(long)]
    threshold: Option<usize>,

    /// Output format: text or json
    #[arg(long, default_value = "text")]
    format: String,
}

/// JSON output structure
#[derive(Serialize)]
struct PlanOutput {
    squadron: String,
    training_attr: String,
    missions: Vec<MissionLine>,
    programs: Vec<ProgramReport>,
}

#[derive(Serialize)]
struct MissionLine {
    mission: String,
    squad: Option<String>,
    squad_attr: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    let roster = load_roster(&args.roster)?;
    if set_config(roster.config.clone()).is_err() {
        tracing::warn!("Planner config already set; keeping the existing one");
    }
    let squadron = Squadron::from_roster(roster)?;
    tracing::info!(
        "Loaded '{}': {} members, {} squads, {} missions",
        squadron.name(),
        squadron.members().len(),
        squadron.squads().len(),
        squadron.missions().len()
    );

    let bonus = squadron.training_attr();
    let missions: Vec<MissionLine> = squadron
        .available_missions()
        .map(|mission| {
            let squad = squadron.lowest_qualifying_squad(mission, bonus);
            MissionLine {
                mission: mission.name().to_string(),
                squad: squad.map(|s| s.id().to_string()),
                squad_attr: squad.map(|s| s.attr().to_string()),
            }
        })
        .collect();

    let threshold = args.threshold.unwrap_or(config().report_threshold);
    let lengths: Vec<usize> = match args.length {
        Some(length) => vec![length],
        None => (1..=squadron.remaining_daily_courses()).collect(),
    };
    let mut programs = Vec::new();
    for length in lengths {
        programs.extend(squadron.search_programs(length, threshold)?);
    }

    let output = PlanOutput {
        squadron: squadron.name().to_string(),
        training_attr: bonus.to_string(),
        missions,
        programs,
    };

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_text(&output);
    }
    Ok(())
}

fn print_text(output: &PlanOutput) {
    println!("=== {} ===", output.squadron);
    println!("Training: {}", output.training_attr);
    println!();
    println!("Lowest qualifying squad per available mission:");
    for line in &output.missions {
        match (&line.squad, &line.squad_attr) {
            (Some(squad), Some(attr)) => println!("  {:<24} squad {} {}", line.mission, squad, attr),
            _ => println!("  {:<24} no squad qualifies", line.mission),
        }
    }

    println!();
    println!("Training programs ({}):", output.programs.len());
    for report in &output.programs {
        let courses: Vec<String> = report.program.courses.iter().map(|c| c.to_string()).collect();
        println!(
            "  {:<24} {} -> {} doable",
            courses.join("+"),
            report.program.attr,
            report.doable.len()
        );
        if !report.newly_unlocked.is_empty() {
            println!("      unlocks: {}", report.newly_unlocked.join(", "));
        }
    }
}
