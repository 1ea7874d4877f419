//! resume-scan: send a resume to the analysis service and review the feedback

use clap::Parser;
use indicatif::ProgressBar;
use log::{debug, error, info, warn};
use resume_scan::analysis::HttpAnalysisClient;
use resume_scan::cli::{self, Cli, Commands, ConfigAction};
use resume_scan::config::{Config, OutputFormat};
use resume_scan::error::{Result, ResumeScanError};
use resume_scan::input::CandidateFile;
use resume_scan::output::{formatter_for, ReportExporter};
use resume_scan::upload::{ConsoleNotifier, UploadController, ViewState};
use std::path::PathBuf;
use std::process;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let loaded = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let mut config = match loaded {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };
    if let Some(endpoint) = cli.endpoint {
        config = config.with_base_url(endpoint);
    }

    // Execute command
    if let Err(e) = run_command(cli.command, config, cli.config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: Option<PathBuf>) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            job,
            job_text,
            expand,
            output,
            report,
        } => {
            let output_format = cli::parse_output_format(&output).map_err(ResumeScanError::InvalidInput)?;

            let client = HttpAnalysisClient::new(&config.service)?;
            let notifier = ConsoleNotifier::new(config.output.color_output);
            let mut controller = UploadController::new(client, notifier);

            let candidate = CandidateFile::from_path(&resume).await?;
            controller.select_document(candidate)?;

            let job_text = match job {
                Some(path) => Some(tokio::fs::read_to_string(&path).await?),
                None => job_text,
            };
            if let Some(text) = job_text {
                controller.set_job_description(text.trim_end())?;
            }

            if output_format == OutputFormat::Console {
                println!("🚀 Resume analysis");
                println!("📄 Resume: {}", resume.display());
                if controller.job_description().is_empty() {
                    println!("💼 Job description: not supplied");
                } else {
                    println!("💼 Job description: {} characters", controller.job_description().counter());
                }
            }

            let spinner = spawn_spinner(controller.subscribe());
            let analyzed = controller.analyze().await;
            if analyzed.is_ok() {
                if let Some(index) = expand {
                    // an unknown index leaves every item abridged
                    if let Err(e) = controller.expand(index) {
                        warn!("Ignoring --expand {}: {}", index, e);
                    }
                }
            }

            let view = controller.results().clone();
            drop(controller);
            if let Err(e) = spinner.await {
                debug!("Spinner task ended abnormally: {}", e);
            }
            analyzed?;

            let formatter = formatter_for(output_format, config.output.color_output);
            println!("{}", formatter.format_result(&view)?);

            if let Some(dir) = report {
                let dir = dir.unwrap_or_else(|| config.output.report_dir.clone());
                if let Some(result) = view.result() {
                    let path = ReportExporter::new(dir).save(result)?;
                    println!("📝 Report saved to {}", path.display());
                }
            }
        }

        Commands::Health => {
            let client = HttpAnalysisClient::new(&config.service)?;
            info!("Checking {}", config.service.health_url());
            let status = client.health().await?;
            if !status.is_healthy() {
                return Err(ResumeScanError::Transport(format!(
                    "service reports status '{}'",
                    status.status
                )));
            }
            println!("✅ Analysis service at {} is healthy", config.service.base_url);
        }

        Commands::Config { action } => {
            let path = config_path.unwrap_or_else(Config::config_path);
            match action {
                Some(ConfigAction::Show) | None => {
                    println!("⚙️  Current Configuration\n");
                    println!("Service: {}", config.service.base_url);
                    println!("Analyze endpoint: {}", config.service.analyze_url());
                    println!("Health endpoint: {}", config.service.health_url());
                    match config.service.request_timeout_secs {
                        Some(secs) => println!("Request timeout: {}s", secs),
                        None => println!("Request timeout: none"),
                    }
                    println!("\nColored output: {}", config.output.color_output);
                    println!("Report directory: {}", config.output.report_dir.display());
                }

                Some(ConfigAction::Reset) => {
                    println!("🔄 Resetting configuration to defaults...");
                    Config::default().save_to(&path)?;
                    println!("✅ Configuration reset successfully!");
                }

                Some(ConfigAction::Path) => {
                    println!("{}", path.display());
                }
            }
        }
    }

    Ok(())
}

/// Show a spinner while an analyze request is in flight. Ends when the
/// controller is dropped.
fn spawn_spinner(mut state: watch::Receiver<ViewState>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut spinner: Option<ProgressBar> = None;
        while state.changed().await.is_ok() {
            let analyzing = state.borrow_and_update().is_analyzing;
            match (analyzing, spinner.take()) {
                (true, None) => {
                    let bar = ProgressBar::new_spinner();
                    bar.set_message("Analyzing...");
                    bar.enable_steady_tick(Duration::from_millis(100));
                    spinner = Some(bar);
                }
                (true, Some(bar)) => spinner = Some(bar),
                (false, Some(bar)) => bar.finish_and_clear(),
                (false, None) => {}
            }
        }
        if let Some(bar) = spinner {
            bar.finish_and_clear();
        }
    })
}
