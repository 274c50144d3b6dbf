//! Vigil CLI - incident dashboard actions from the terminal.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use vigil_client::HttpDiagnosticClient;
use vigil_session::{ActionDispatcher, CheckOutcome, HealOutcome, Session};

#[derive(Parser)]
#[command(name = "vigil")]
#[command(about = "Incident-monitoring dashboard client", long_about = None)]
struct Cli {
    /// Diagnostic backend base URL
    #[arg(long, default_value = "http://localhost:5001")]
    backend: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an on-demand health check against a URL
    Check {
        /// Website URL to check
        url: String,
    },
    /// Ask the backend to inject a fault
    Simulate {
        /// Target URL (defaults to a known failing endpoint)
        url: Option<String>,
    },
    /// Register a URL for continuous monitoring
    Monitor {
        /// Website URL to monitor
        url: String,
    },
    /// Ask the backend to auto-heal a URL
    Heal {
        /// Website URL to heal
        url: String,
    },
    /// Show the backend's own status snapshot
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let session = Session::shared();
    let service = Arc::new(HttpDiagnosticClient::new(&cli.backend));
    let dispatcher = ActionDispatcher::new(service, session.clone());

    match cli.command {
        Commands::Check { url } => {
            match dispatcher.check_website(&url).await? {
                CheckOutcome::Completed {
                    diagnosis,
                    pattern,
                    mttr,
                    ..
                } => {
                    let session = session.lock().await;
                    println!("Status: {}", session.controller().status());
                    if let Some(mttr) = mttr {
                        println!("MTTR: {}", mttr);
                    }
                    println!("Confidence: {}%", diagnosis.confidence);

                    println!("\nPattern recognition:");
                    for line in &pattern.patterns {
                        println!("  {}", line);
                    }

                    println!("\nRoot cause: {}", diagnosis.root_cause);
                    if let Some(explanation) = &diagnosis.error_explanation {
                        println!("  {}", explanation);
                    }
                    if !diagnosis.fix_steps.is_empty() {
                        println!("Recommended fixes:");
                        for (i, step) in diagnosis.fix_steps.iter().enumerate() {
                            println!("  {}. {}", i + 1, step);
                        }
                    }
                    if !diagnosis.prevention.is_empty() {
                        println!("Prevention:");
                        for step in &diagnosis.prevention {
                            println!("  - {}", step);
                        }
                    }
                    println!("Estimated fix time: {}", diagnosis.estimated_fix_time);
                }
                CheckOutcome::TransportFailed { mttr } => {
                    println!("Check failed to reach {}", url);
                    println!("Status: Issues Detected");
                    if let Some(mttr) = mttr {
                        println!("MTTR: {}", mttr);
                    }
                }
            }

            if dispatcher.issues_detected().await {
                println!("\nAuto-heal available: vigil heal {}", url);
            }
        }
        Commands::Simulate { url } => {
            dispatcher.simulate_failure(url.as_deref()).await;
            println!("Failure simulation started");
        }
        Commands::Monitor { url } => {
            let ack = dispatcher.start_monitoring(&url).await?;
            if ack.message.is_empty() {
                println!("Started monitoring {}", url);
            } else {
                println!("{}", ack.message);
            }

            let session = session.lock().await;
            println!("Monitored sites ({})", session.registry().len());
            for site in session.registry().sites() {
                println!("  {} (active)", site.url);
            }
        }
        Commands::Heal { url } => match dispatcher.auto_heal(&url).await? {
            HealOutcome::Healed { healing_time, mttr } => {
                println!("Auto-healing completed in {}", healing_time);
                if let Some(mttr) = mttr {
                    println!("MTTR: {}", mttr);
                }
            }
            HealOutcome::Rejected { message } => {
                println!("{}", message);
            }
            HealOutcome::TransportFailed => {
                println!("Auto-heal failed to reach the backend");
                println!("Status: Error");
            }
        },
        Commands::Status => {
            let snapshot = dispatcher.fetch_status().await?;
            println!("Backend status: {}", snapshot.status);
            println!("  MTTR: {}", snapshot.mttr);
            println!("  Reason: {}", snapshot.reason);
            println!(
                "  Monitoring active: {}",
                if snapshot.monitoring_active { "yes" } else { "no" }
            );
            if !snapshot.monitored_urls.is_empty() {
                println!("  Monitored URLs:");
                for url in &snapshot.monitored_urls {
                    println!("    {}", url);
                }
            }
        }
    }

    Ok(())
}
