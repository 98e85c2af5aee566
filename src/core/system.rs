use crate::cli::Cli;
use crate::core::action_log::ActionLog;
use crate::core::app_config::AppConfig;
use crate::core::io_manager::IOManager;
use crate::core::mirror::reconciler::Reconciler;
use crate::core::scheduler::Scheduler;
use crate::model::error::system::SystemError;
use crate::model::log::system::SystemLog;
use crate::utils::logging::Logging;
use anyhow::{Context, Result};
use macros::log;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::oneshot;
use tracing_appender::non_blocking::WorkerGuard;

pub struct System {
    app_config: Arc<AppConfig>,
    io_manager: Arc<IOManager>,
    scheduler: Scheduler,
    _guard: WorkerGuard,
}

impl System {
    pub fn initialize(cli: &Cli) -> Result<Self> {
        let app_config = AppConfig::new(cli).context("Failed to load configuration")?;
        let guard = Logging::initialize(app_config.log_level);
        log!(SystemLog::Initializing);

        Self::bootstrap(&app_config)?;
        let action_log = ActionLog::open(&app_config.log_file)?;

        let app_config = Arc::new(app_config);
        let io_manager = Arc::new(IOManager::new(app_config.max_file_operations));
        let reconciler = Reconciler::new(
            io_manager.clone(),
            Arc::new(action_log),
            app_config.comparison_mode,
            app_config.max_concurrency,
        );
        let scheduler = Scheduler::new(app_config.clone(), reconciler);

        log!(SystemLog::InitializeComplete);
        Ok(Self {
            app_config,
            io_manager,
            scheduler,
            _guard: guard,
        })
    }

    /// Creates the replica root and the log file's directory when absent.
    fn bootstrap(app_config: &AppConfig) -> Result<(), SystemError> {
        if !app_config.replica_path.exists() {
            Self::create_directory(&app_config.replica_path)?;
            log!(SystemLog::ReplicaRootCreated {
                path: app_config.replica_path.clone()
            });
        }
        if let Some(parent) = app_config.log_file.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                Self::create_directory(parent)?;
            }
        }
        Ok(())
    }

    fn create_directory(path: &Path) -> Result<(), SystemError> {
        fs::create_dir_all(path).map_err(|err| SystemError::BootstrapFailed {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }

    /// Returns false when a single-pass run hit a structural failure.
    pub async fn run(&self) -> bool {
        let config = &self.app_config;
        log!(SystemLog::Online {
            source_root: config.source_path.clone(),
            replica_root: config.replica_path.clone(),
            interval: config.interval
        });

        if config.run_once {
            return self.scheduler.run_pass().await.is_ok();
        }

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    log!(SystemLog::ShutdownRequested);
                    let _ = shutdown_tx.send(());
                }
                Err(err) => {
                    tracing::warn!("Failed to listen for Ctrl-C: {err}");
                    // Keep the sender alive so the scheduler does not read a drop as shutdown.
                    let _keep = shutdown_tx;
                    std::future::pending::<()>().await;
                }
            }
        });

        self.scheduler.run(shutdown_rx).await;
        true
    }

    pub fn terminate(self) {
        log!(SystemLog::Terminating);
        self.io_manager.terminate();
        log!(SystemLog::TerminateComplete);
    }
}
