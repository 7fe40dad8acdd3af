use std::sync::atomic::AtomicBool;

use tracing::{info, warn};

use deckpress::batch::BatchEvent;
use deckpress::engines::detect;
use deckpress::types::JobStatus;

use super::args::CliArgs;
use super::errors::AppError;

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    if args.detect {
        println!("{}", detect::report());
        return Ok(());
    }

    if args.inputs.is_empty() {
        return Err(AppError::NoInputs.into());
    }
    let output_dir = args.output_dir.ok_or(AppError::MissingArgument {
        arg: "--output-dir".to_string(),
    })?;

    info!("Output directory: {:?}", output_dir);

    let cancel = AtomicBool::new(false);
    let report = deckpress::run_batch(
        &args.inputs,
        args.recursive,
        &output_dir,
        args.engine,
        &cancel,
        |event| {
            if let BatchEvent::JobFinished { index, total, job } = event {
                match job.status {
                    JobStatus::Succeeded => {
                        println!("[{}/{}] {:?} -> {:?}", index + 1, total, job.source, job.output)
                    }
                    _ => {
                        let reason = job.error.unwrap_or_else(|| "unknown error".to_string());
                        warn!("[{}/{}] {:?} failed: {}", index + 1, total, job.source, reason);
                        eprintln!("[{}/{}] {:?} FAILED: {}", index + 1, total, job.source, reason);
                    }
                }
            }
        },
    )?;

    println!("{}", report);

    if report.failed > 0 {
        return Err(AppError::BatchFailed {
            failed: report.failed,
        }
        .into());
    }

    Ok(())
}
