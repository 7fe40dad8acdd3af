//! Sequential batch runner. Jobs run one at a time on the caller's thread
//! (automation engines are not safe for concurrent document opens); the cancel
//! flag is honored between jobs only, so an in-flight conversion always runs
//! to completion.
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{info, warn};

use crate::engines::Engine;
use crate::types::{ConversionJob, JobStatus};

/// Progress events emitted while a batch runs, consumed by the shells.
#[derive(Clone, Debug)]
pub enum BatchEvent {
    JobStarted { index: usize, total: usize },
    JobFinished { index: usize, total: usize, job: ConversionJob },
    Cancelled { remaining: usize },
    Finished(BatchReport),
}

/// End-of-batch summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub converted: usize,
    pub failed: usize,
    pub cancelled: usize,
}

impl std::fmt::Display for BatchReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Converted: {}, Failed: {}, Cancelled: {}",
            self.converted, self.failed, self.cancelled
        )
    }
}

/// Run every pending job through `engine`, mutating statuses in place.
/// A failed job is recorded and the batch moves on; nothing here is fatal.
pub fn run(
    engine: &dyn Engine,
    jobs: &mut [ConversionJob],
    cancel: &AtomicBool,
    mut on_event: impl FnMut(BatchEvent),
) -> BatchReport {
    let total = jobs.len();
    let mut report = BatchReport::default();

    for (index, job) in jobs.iter_mut().enumerate() {
        if cancel.load(Ordering::SeqCst) {
            report.cancelled = total - index;
            warn!("Batch cancelled; {} job(s) left pending", report.cancelled);
            on_event(BatchEvent::Cancelled {
                remaining: report.cancelled,
            });
            break;
        }

        job.status = JobStatus::Running;
        info!("Converting ({}/{}): {:?}", index + 1, total, job.source);
        on_event(BatchEvent::JobStarted { index, total });

        match engine.convert(&job.source, job.output.parent().unwrap_or(job.output.as_path())) {
            Ok(produced) => {
                job.status = JobStatus::Succeeded;
                report.converted += 1;
                info!("Done: {:?}", produced);
            }
            Err(e) => {
                job.status = JobStatus::Failed;
                job.error = Some(e.to_string());
                report.failed += 1;
                warn!("Failed: {:?}: {}", job.source, e);
            }
        }

        on_event(BatchEvent::JobFinished {
            index,
            total,
            job: job.clone(),
        });
    }

    info!("Batch complete. {}", report);
    on_event(BatchEvent::Finished(report));
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};
    use crate::types::{ConversionJob, EngineKind};
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;
    use std::sync::atomic::AtomicBool;

    /// Test double: succeeds unless the source stem appears in `fail_on`,
    /// and records every invocation.
    struct FakeEngine {
        fail_on: Vec<&'static str>,
        invoked: Mutex<Vec<PathBuf>>,
    }

    impl FakeEngine {
        fn new(fail_on: Vec<&'static str>) -> Self {
            Self {
                fail_on,
                invoked: Mutex::new(Vec::new()),
            }
        }

        fn invocations(&self) -> Vec<PathBuf> {
            self.invoked.lock().unwrap().clone()
        }
    }

    impl Engine for FakeEngine {
        fn kind(&self) -> EngineKind {
            EngineKind::LibreOffice
        }

        fn convert(&self, input: &Path, output_dir: &Path) -> Result<PathBuf> {
            self.invoked.lock().unwrap().push(input.to_path_buf());
            let stem = input.file_stem().and_then(|s| s.to_str()).unwrap();
            if self.fail_on.contains(&stem) {
                Err(Error::ConversionFailed(format!("engine rejected {stem}")))
            } else {
                Ok(output_dir.join(stem).with_extension("pdf"))
            }
        }
    }

    fn jobs_for(stems: &[&str]) -> Vec<ConversionJob> {
        stems
            .iter()
            .map(|s| ConversionJob::new(PathBuf::from(format!("/in/{s}.pptx")), Path::new("/out")))
            .collect()
    }

    #[test]
    fn all_jobs_succeed_on_a_clean_run() {
        let engine = FakeEngine::new(vec![]);
        let mut jobs = jobs_for(&["a", "b", "c"]);
        let cancel = AtomicBool::new(false);

        let report = run(&engine, &mut jobs, &cancel, |_| {});
        assert_eq!(report, BatchReport { converted: 3, failed: 0, cancelled: 0 });
        assert!(jobs.iter().all(|j| j.status == JobStatus::Succeeded));
    }

    #[test]
    fn a_failing_job_does_not_abort_the_batch() {
        let engine = FakeEngine::new(vec!["b"]);
        let mut jobs = jobs_for(&["a", "b", "c"]);
        let cancel = AtomicBool::new(false);

        let report = run(&engine, &mut jobs, &cancel, |_| {});
        assert_eq!(report, BatchReport { converted: 2, failed: 1, cancelled: 0 });
        assert_eq!(jobs[0].status, JobStatus::Succeeded);
        assert_eq!(jobs[1].status, JobStatus::Failed);
        assert!(jobs[1].error.as_deref().unwrap().contains("engine rejected b"));
        assert_eq!(jobs[2].status, JobStatus::Succeeded);
        assert_eq!(engine.invocations().len(), 3);
    }

    #[test]
    fn cancel_between_jobs_leaves_the_rest_pending() {
        let engine = FakeEngine::new(vec![]);
        let mut jobs = jobs_for(&["a", "b", "c"]);
        let cancel = AtomicBool::new(false);

        // Cancel as soon as the first job finishes.
        let report = run(&engine, &mut jobs, &cancel, |event| {
            if matches!(event, BatchEvent::JobFinished { index: 0, .. }) {
                cancel.store(true, Ordering::SeqCst);
            }
        });

        assert_eq!(report, BatchReport { converted: 1, failed: 0, cancelled: 2 });
        assert_eq!(jobs[0].status, JobStatus::Succeeded);
        assert_eq!(jobs[1].status, JobStatus::Pending);
        assert_eq!(jobs[2].status, JobStatus::Pending);
        // The engine was never invoked for the cancelled jobs.
        assert_eq!(engine.invocations(), vec![PathBuf::from("/in/a.pptx")]);
    }

    #[test]
    fn cancel_before_the_first_job_converts_nothing() {
        let engine = FakeEngine::new(vec![]);
        let mut jobs = jobs_for(&["a", "b"]);
        let cancel = AtomicBool::new(true);

        let report = run(&engine, &mut jobs, &cancel, |_| {});
        assert_eq!(report, BatchReport { converted: 0, failed: 0, cancelled: 2 });
        assert!(engine.invocations().is_empty());
        assert!(jobs.iter().all(|j| j.status == JobStatus::Pending));
    }

    #[test]
    fn events_arrive_in_job_order_and_end_with_finished() {
        let engine = FakeEngine::new(vec![]);
        let mut jobs = jobs_for(&["a", "b"]);
        let cancel = AtomicBool::new(false);

        let mut seen = Vec::new();
        run(&engine, &mut jobs, &cancel, |event| {
            seen.push(match event {
                BatchEvent::JobStarted { index, .. } => format!("start {index}"),
                BatchEvent::JobFinished { index, .. } => format!("finish {index}"),
                BatchEvent::Cancelled { .. } => "cancelled".to_string(),
                BatchEvent::Finished(_) => "finished".to_string(),
            });
        });
        assert_eq!(seen, vec!["start 0", "finish 0", "start 1", "finish 1", "finished"]);
    }
}
