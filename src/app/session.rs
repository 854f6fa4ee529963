//! Per-caller upload session.
//!
//! A reconciliation run needs exactly two uploads in order. The session is
//! a small explicit state machine, so an out-of-order upload is a matched
//! variant, not a runtime guard over nullable fields. Sessions are
//! independent of each other and of the engine, which holds no state.

use tracing::{info, warn};

use crate::app::models::{NormalizedRecord, ReconcileOutcome};
use crate::app::services::engine;
use crate::config::Config;
use crate::Result;

/// Where a session stands in the two-upload protocol
#[derive(Debug, Clone, PartialEq)]
pub enum UploadState {
    /// Waiting for the ERP export
    AwaitingFirst,
    /// ERP export accepted; waiting for the WMS export
    AwaitingSecond { erp_records: Vec<NormalizedRecord> },
    /// Reconciliation finished; only a restart accepts new uploads
    Done,
}

/// Reply produced by a successful upload
#[derive(Debug, Clone, PartialEq)]
pub enum SessionReply {
    /// First file accepted; the WMS export should follow
    FirstAccepted { records: usize },
    /// Both files processed; the encoded report is ready for delivery
    Report { bytes: Vec<u8>, rows: usize },
    /// Both files processed and the sides agree everywhere
    NoDiscrepancies,
    /// Two files were already processed; a restart is required first
    AlreadyComplete,
}

/// One caller's reconciliation session
#[derive(Debug)]
pub struct Session {
    state: UploadState,
    config: Config,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self {
            state: UploadState::AwaitingFirst,
            config,
        }
    }

    pub fn state(&self) -> &UploadState {
        &self.state
    }

    /// Reset to the initial state, discarding any stored upload
    pub fn reset(&mut self) {
        info!("Session reset");
        self.state = UploadState::AwaitingFirst;
    }

    /// Feed the next uploaded file into the session
    ///
    /// On any engine failure the session is fully cleared before the error
    /// propagates; partially consumed state must never leak into the next
    /// reconciliation attempt.
    pub fn handle_upload(&mut self, bytes: &[u8]) -> Result<SessionReply> {
        match std::mem::replace(&mut self.state, UploadState::AwaitingFirst) {
            UploadState::AwaitingFirst => match engine::process_first_upload(bytes, &self.config) {
                Ok(erp_records) => {
                    let records = erp_records.len();
                    self.state = UploadState::AwaitingSecond { erp_records };
                    Ok(SessionReply::FirstAccepted { records })
                }
                Err(e) => {
                    warn!("First upload rejected: {}", e);
                    Err(e)
                }
            },
            UploadState::AwaitingSecond { erp_records } => {
                match engine::process_second_upload_and_reconcile(erp_records, bytes, &self.config)
                {
                    Ok(ReconcileOutcome::Report { bytes, rows }) => {
                        self.state = UploadState::Done;
                        Ok(SessionReply::Report { bytes, rows })
                    }
                    Ok(ReconcileOutcome::NoDiscrepancies) => {
                        self.state = UploadState::Done;
                        Ok(SessionReply::NoDiscrepancies)
                    }
                    Err(e) => {
                        warn!("Second upload rejected: {}", e);
                        Err(e)
                    }
                }
            }
            UploadState::Done => {
                self.state = UploadState::Done;
                Ok(SessionReply::AlreadyComplete)
            }
        }
    }
}
