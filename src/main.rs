//! Placement prep: rule-based interview readiness analysis for job descriptions

use anyhow::Context;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};
use placement_prep::analysis::scoring::Confidence;
use placement_prep::analysis::vocabulary::SkillCategory;
use placement_prep::analysis::{AnalysisEngine, AnalysisEntry};
use placement_prep::cli::{self, Cli, Commands, ConfigAction, HistoryAction};
use placement_prep::config::{Config, OutputFormat};
use placement_prep::error::{PrepError, Result};
use placement_prep::input::{InputManager, JdSource, JdStats};
use placement_prep::output::report::WEAK_AREA_LIMIT;
use placement_prep::output::{format_history, save_report_to_file, suggest_filename, PrepReport, ReportGenerator};
use placement_prep::storage::{FileStore, HistoryStore};
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

const SHORT_JD_WARNING: &str = "This JD is too short to analyze deeply. Paste full JD for better output.";

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else {
        "info"
    };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_level)
    ).init();

    // Load configuration
    let loaded = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    let config_path = cli.config.unwrap_or_else(Config::config_path);

    if !config.output.color_output {
        colored::control::set_override(false);
    }

    // Execute command
    if let Err(e) = run_command(cli.command, config, &config_path).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: &Path) -> Result<()> {
    match command {
        Commands::Analyze {
            company,
            role,
            jd,
            text,
            output,
            save,
            no_store,
            no_delay,
        } => {
            info!("Starting job description analysis");

            let output_format = resolve_format(output.as_deref(), &config)?;

            let source = match (jd, text) {
                (Some(path), _) => {
                    cli::validate_file_extension(&path, &["txt", "md", "markdown", "pdf"])
                        .map_err(|e| PrepError::InvalidInput(format!("Job description file: {}", e)))?;
                    println!("💼 Job Description: {}", path.display());
                    JdSource::File(path)
                }
                (None, Some(text)) => JdSource::Text(text),
                (None, None) => {
                    println!("📋 Paste the job description, then press Ctrl-D:");
                    JdSource::Stdin
                }
            };

            let mut input_manager = InputManager::new();
            let jd_text = input_manager.load(&source).await?;

            let stats = JdStats::of(&jd_text);
            println!("📊 {} characters, {} words", stats.chars, stats.words);
            if stats.is_short(config.analysis.min_jd_chars) {
                warn!("Job description has {} characters (< {})", stats.chars, config.analysis.min_jd_chars);
                println!("⚠️  {}", SHORT_JD_WARNING);
            }

            if !no_delay {
                simulate_processing(config.analysis.processing_delay_ms).await;
            }

            let engine = AnalysisEngine::new();
            let entry = engine.analyze(&company, &role, &jd_text);
            println!("✅ Analysis complete: {} skills detected, readiness {}/100",
                entry.extracted_skills.total(),
                entry.final_score
            );

            if no_store {
                info!("Skipping history for analysis {}", entry.id);
            } else {
                let mut history = open_history(&config);
                history.save(&entry)?;
                println!("💾 Saved to history as {}", entry.id);
            }

            emit_report(&entry, &output_format, save.as_deref(), &config)?;
        }

        Commands::History { action } => {
            let mut history = open_history(&config);

            match action {
                HistoryAction::List => {
                    let entries = history.list()?;
                    if entries.is_empty() {
                        println!("📭 No analyses yet. Run `placement-prep analyze` to create one.");
                    } else {
                        println!("📚 {} saved analyses (newest first)\n", entries.len());
                        print!("{}", format_history(&entries, config.output.color_output, chrono::Utc::now()));
                    }
                }

                HistoryAction::Show { id, output } => {
                    let output_format = resolve_format(output.as_deref(), &config)?;
                    let entry = find_entry(&history, id.as_deref())?;
                    emit_report(&entry, &output_format, None, &config)?;
                }

                HistoryAction::Remove { id } => {
                    let entry = find_entry(&history, Some(&id))?;
                    history.remove(&entry.id)?;
                    println!("🗑️  Removed analysis {} ({} @ {})",
                        entry.id,
                        entry.display_role(),
                        entry.display_company()
                    );
                }

                HistoryAction::Clear => {
                    history.clear()?;
                    println!("🧹 History cleared");
                }
            }
        }

        Commands::Rate { id, know, practice, toggle } => {
            let mut history = open_history(&config);
            let mut entry = find_entry(&history, Some(&id))?;
            let before = entry.final_score;

            let mut ignored = Vec::new();
            for (names, level) in [(&know, Confidence::Know), (&practice, Confidence::Practice)] {
                for name in names {
                    match entry.resolve_skill(name) {
                        Some(skill) => {
                            entry.set_confidence(&skill, level);
                        }
                        None => ignored.push(name.clone()),
                    }
                }
            }
            for name in &toggle {
                match entry.resolve_skill(name) {
                    Some(skill) => {
                        if let Some(level) = entry.toggle_skill(&skill) {
                            println!("🔁 {} → {}", skill, level);
                        }
                    }
                    None => ignored.push(name.clone()),
                }
            }

            if !ignored.is_empty() {
                warn!("Skills not detected in this analysis: {}", ignored.join(", "));
                println!("⚠️  Ignored (not detected in this JD): {}", ignored.join(", "));
            }

            if !history.update(&entry)? {
                return Err(PrepError::EntryNotFound(entry.id));
            }

            println!("\n🧠 Skill Self-Assessment");
            for skill in entry.flat_skills() {
                let mark = if entry.confidence_of(&skill) == Confidence::Know { "✔" } else { "○" };
                println!("  {} {}", mark, skill);
            }
            println!("\n📈 Readiness: {} → {}/100 (base {})", before, entry.final_score, entry.base_score);

            let weak = entry.weak_areas(WEAK_AREA_LIMIT);
            if weak.is_empty() {
                println!("🎉 Focus areas: All good!");
            } else {
                println!("🎯 Focus on your weakest areas: {}", weak.join(", "));
            }
        }

        Commands::Export { id, output, save } => {
            let output_format = cli::parse_output_format(&output)
                .map_err(PrepError::InvalidInput)?;
            let history = open_history(&config);
            let entry = find_entry(&history, id.as_deref())?;
            emit_report(&entry, &output_format, save.as_deref(), &config)?;
        }

        Commands::Skills => {
            println!("📖 Skill vocabulary\n");
            for category in SkillCategory::ALL {
                println!("{}: {}", category.label(), category.skills().join(", "));
            }
        }

        Commands::Config { action } => {
            match action {
                Some(ConfigAction::Show) | None => {
                    println!("⚙️  Current Configuration ({})\n", config_path.display());
                    let rendered = toml::to_string_pretty(&config)
                        .map_err(|e| PrepError::Configuration(format!("Failed to render config: {}", e)))?;
                    println!("{}", rendered);
                }

                Some(ConfigAction::Path) => {
                    println!("{}", config_path.display());
                }

                Some(ConfigAction::Reset) => {
                    println!("🔄 Resetting configuration to defaults...");
                    Config::default()
                        .save_to(config_path)
                        .with_context(|| format!("Failed to write configuration to {}", config_path.display()))?;
                    println!("✅ Configuration reset successfully!");
                }

                Some(ConfigAction::Set { key, value }) => {
                    println!("🔧 Setting {}: {}", key, value);
                    let mut updated = config.clone();
                    updated.set_value(&key, &value)?;
                    updated
                        .save_to(config_path)
                        .with_context(|| format!("Failed to write configuration to {}", config_path.display()))?;
                    println!("✅ Configuration updated");
                }
            }
        }
    }

    Ok(())
}

fn open_history(config: &Config) -> HistoryStore<FileStore> {
    HistoryStore::with_key(
        FileStore::new(config.data_dir().clone()),
        config.storage.history_key.clone(),
    )
}

fn find_entry(history: &HistoryStore<FileStore>, id: Option<&str>) -> Result<AnalysisEntry> {
    match id {
        Some(id) => history
            .find(id)?
            .ok_or_else(|| PrepError::EntryNotFound(id.to_string())),
        None => history
            .latest()?
            .ok_or_else(|| PrepError::EntryNotFound("no analyses in history".to_string())),
    }
}

fn resolve_format(requested: Option<&str>, config: &Config) -> Result<OutputFormat> {
    match requested {
        Some(format) => cli::parse_output_format(format).map_err(PrepError::InvalidInput),
        None => Ok(config.output.format),
    }
}

/// Render and either print or write the report. A directory target gets the suggested file name.
fn emit_report(entry: &AnalysisEntry, format: &OutputFormat, save: Option<&Path>, config: &Config) -> Result<()> {
    let use_colors = config.output.color_output && save.is_none();
    let generator = ReportGenerator::with_options(use_colors, config.output.detailed, true, true, true);
    let report = PrepReport::from_entry(entry);
    let content = generator.generate_report(&report, format)?;

    match save {
        Some(path) => {
            let target: PathBuf = if path.is_dir() {
                path.join(suggest_filename(format, &entry.company))
            } else {
                path.to_path_buf()
            };
            save_report_to_file(&content, &target)?;
            println!("📁 Report saved to {}", target.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}

async fn simulate_processing(delay_ms: u64) {
    if delay_ms == 0 {
        return;
    }

    let spinner = ProgressBar::new_spinner();
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Analyzing job description...");
    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
    spinner.finish_and_clear();
}
