use std::{
    sync::{Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use model::{
    error::EditError,
    fields::Field,
    record::{FieldValue, PatientRecord},
    wire::{predict_request_body, PredictResponse, WireNames},
};
use reqwest::Client;
use serde_json::{Map, Value};
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use crate::{
    config::Settings,
    error::{ConfigError, PredictError, ResponseError, TransportError},
    outcome::PredictionOutcome,
    validate::validate_record,
};

pub mod config;
pub mod error;
pub mod outcome;
pub mod validate;

const PREDICT_PATH: &str = "/api/predict";
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Pushed to subscribers whenever the record or the submission phase moves.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    RecordChanged(PatientRecord),
    PhaseChanged(SessionPhase),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionPhase {
    Idle,
    Submitting,
    Completed(PredictionOutcome),
    Failed(String),
}

/// One patient's intake session: an editable record plus a single-flight
/// submission to the scoring service. Edits are synchronous; `submit` is the
/// only async entry point and never holds the state lock across an await.
pub struct PredictSession {
    http: Client,
    settings: Settings,
    wire_names: WireNames,
    inner: Mutex<SessionState>,
    events: broadcast::Sender<SessionEvent>,
}

struct SessionState {
    record: PatientRecord,
    phase: SessionPhase,
    attempt: u64,
    closed: bool,
}

impl PredictSession {
    pub fn new(settings: Settings) -> Result<Self, ConfigError> {
        Self::with_wire_names(settings, WireNames::canonical())
    }

    pub fn with_wire_names(settings: Settings, wire_names: WireNames) -> Result<Self, ConfigError> {
        let http = Client::builder()
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ConfigError::HttpClient(err.to_string()))?;
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Ok(Self {
            http,
            settings,
            wire_names,
            inner: Mutex::new(SessionState {
                record: PatientRecord::new(),
                phase: SessionPhase::Idle,
                attempt: 0,
                closed: false,
            }),
            events,
        })
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    pub fn record(&self) -> PatientRecord {
        self.state().record.clone()
    }

    pub fn phase(&self) -> SessionPhase {
        self.state().phase.clone()
    }

    /// Applies one edit and rebroadcasts the record. Edits are accepted in
    /// every phase; a submission already in flight keeps the body it was
    /// built from.
    pub fn update(
        &self,
        field: Field,
        value: Option<FieldValue>,
    ) -> Result<PatientRecord, EditError> {
        let mut state = self.state();
        state.record.update(field, value)?;
        let record = state.record.clone();
        let _ = self
            .events
            .send(SessionEvent::RecordChanged(record.clone()));
        debug!(%field, "record updated");
        Ok(record)
    }

    /// Tears the session down. Any response still in flight is discarded
    /// and the phase resets to idle; later submissions are refused.
    pub fn close(&self) {
        let mut state = self.state();
        state.closed = true;
        state.attempt += 1;
        state.phase = SessionPhase::Idle;
    }

    /// Validates the record and posts it to the scoring endpoint; the
    /// reply settles the phase. At most one submission runs at a time; a
    /// second call while one is in flight is refused without touching it.
    pub async fn submit(&self) -> Result<PredictionOutcome, PredictError> {
        let (attempt, body) = {
            let mut state = self.state();
            if state.closed {
                return Err(PredictError::SessionClosed);
            }
            if matches!(state.phase, SessionPhase::Submitting) {
                return Err(PredictError::SubmissionInFlight);
            }
            validate_record(&state.record)?;
            state.attempt += 1;
            state.phase = SessionPhase::Submitting;
            let _ = self
                .events
                .send(SessionEvent::PhaseChanged(SessionPhase::Submitting));
            (
                state.attempt,
                predict_request_body(&state.record, &self.wire_names),
            )
        };

        let result = self.post_predict(&body).await;

        let mut state = self.state();
        if state.closed || state.attempt != attempt {
            return Err(PredictError::SessionClosed);
        }
        match result {
            Ok(outcome) => {
                info!(risk_percent = outcome.risk_percent, "prediction received");
                state.phase = SessionPhase::Completed(outcome.clone());
                let _ = self
                    .events
                    .send(SessionEvent::PhaseChanged(state.phase.clone()));
                Ok(outcome)
            }
            Err(err) => {
                warn!(error = %err, "prediction failed");
                state.phase = SessionPhase::Failed(err.to_string());
                let _ = self
                    .events
                    .send(SessionEvent::PhaseChanged(state.phase.clone()));
                Err(err)
            }
        }
    }

    async fn post_predict(
        &self,
        body: &Map<String, Value>,
    ) -> Result<PredictionOutcome, PredictError> {
        let url = format!("{}{PREDICT_PATH}", self.settings.base_url);
        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|err| classify_request_error(err, self.settings.request_timeout))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ResponseError::Status(status).into());
        }

        let parsed: PredictResponse = response
            .json()
            .await
            .map_err(|err| classify_request_error(err, self.settings.request_timeout))?;

        Ok(PredictionOutcome::new(parsed.prediction))
    }

    fn state(&self) -> MutexGuard<'_, SessionState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn classify_request_error(err: reqwest::Error, timeout: Duration) -> PredictError {
    if err.is_timeout() {
        TransportError::Timeout(timeout).into()
    } else if err.is_decode() {
        ResponseError::Malformed(err.to_string()).into()
    } else {
        TransportError::Unreachable(err.to_string()).into()
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
