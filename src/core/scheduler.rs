use crate::core::app_config::AppConfig;
use crate::core::mirror::reconciler::Reconciler;
use crate::model::error::Error;
use crate::model::log::system::SystemLog;
use crate::model::pass_report::PassReport;
use chrono::Local;
use macros::log;
use std::sync::Arc;
use tokio::select;
use tokio::sync::oneshot;
use tokio::time::sleep;
use tracing::Instrument;
use uuid::Uuid;

/// Runs reconciliation passes back to back with the configured pause in between.
///
/// Passes never overlap and a running pass is never interrupted; shutdown is only
/// observed while sleeping.
pub struct Scheduler {
    app_config: Arc<AppConfig>,
    reconciler: Reconciler,
}

impl Scheduler {
    pub fn new(app_config: Arc<AppConfig>, reconciler: Reconciler) -> Self {
        Self {
            app_config,
            reconciler,
        }
    }

    pub async fn run(&self, mut shutdown: oneshot::Receiver<()>) {
        loop {
            // Failures are logged by the pass itself; the next tick retries.
            let _ = self.run_pass().await;

            select! {
                biased;
                _ = &mut shutdown => break,
                _ = sleep(self.app_config.interval) => {}
            }
        }
    }

    pub async fn run_pass(&self) -> Result<PassReport, Error> {
        let pass = Uuid::new_v4().simple().to_string()[..8].to_string();
        let span = tracing::info_span!("pass", id = %pass);
        self.run_pass_inner(pass).instrument(span).await
    }

    async fn run_pass_inner(&self, pass: String) -> Result<PassReport, Error> {
        let config = &self.app_config;
        let started_at = Local::now();
        log!(SystemLog::PassStarted { pass: pass.clone() });

        let result = self
            .reconciler
            .reconcile(&config.source_path, &config.replica_path)
            .await;

        let elapsed = Local::now() - started_at;
        match &result {
            Ok(report) => {
                let summary = format!("{report} in {} ms", elapsed.num_milliseconds());
                if report.failed > 0 {
                    log!(SystemLog::PassDegraded {
                        pass,
                        failed: report.failed,
                        summary
                    });
                } else if report.changes() > 0 {
                    log!(SystemLog::PassChanged { pass, summary });
                } else {
                    log!(SystemLog::PassCompleted { pass, summary });
                }
            }
            Err(err) => log!(err),
        }

        result
    }
}
