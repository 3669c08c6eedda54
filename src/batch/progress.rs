//! Progress events emitted while a batch runs.

use log::{debug, info, warn};
use serde::Serialize;

use crate::identifiers::Identifier;

/// Pipeline step an event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ProgressStep {
    #[serde(rename = "Поиск ID")]
    IdLookup,
    #[serde(rename = "Получение деталей")]
    Details,
    #[serde(rename = "Общий прогресс")]
    Overall,
    #[serde(rename = "Ошибка")]
    Error,
    #[serde(rename = "Проверка")]
    Check,
}

impl ProgressStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProgressStep::IdLookup => "Поиск ID",
            ProgressStep::Details => "Получение деталей",
            ProgressStep::Overall => "Общий прогресс",
            ProgressStep::Error => "Ошибка",
            ProgressStep::Check => "Проверка",
        }
    }
}

impl std::fmt::Display for ProgressStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressStatus {
    Start,
    Success,
    Error,
    Progress,
}

/// One progress notification. Transient; never stored by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressEvent {
    pub identifier: Option<Identifier>,
    pub step: ProgressStep,
    pub status: ProgressStatus,
    /// Percent complete, only on `Progress` events
    pub percent: Option<u8>,
    pub message: Option<String>,
}

impl ProgressEvent {
    pub fn step(
        identifier: &Identifier,
        step: ProgressStep,
        status: ProgressStatus,
        message: impl Into<String>,
    ) -> Self {
        Self {
            identifier: Some(identifier.clone()),
            step,
            status,
            percent: None,
            message: Some(message.into()),
        }
    }

    /// Overall progress after `processed` of `total` identifiers.
    pub fn overall(processed: usize, total: usize, verb: &str) -> Self {
        Self {
            identifier: None,
            step: ProgressStep::Overall,
            status: ProgressStatus::Progress,
            percent: Some(percent_complete(processed, total)),
            message: Some(format!("{}: {} из {}", verb, processed, total)),
        }
    }
}

/// `round(processed / total * 100)`, 100 for an empty batch.
pub fn percent_complete(processed: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    let percent = (processed as f64 / total as f64 * 100.0).round();
    percent.clamp(0.0, 100.0) as u8
}

/// Receives progress events synchronously, in emission order.
pub trait ProgressSink {
    fn on_progress(&mut self, event: ProgressEvent);
}

impl<F> ProgressSink for F
where
    F: FnMut(ProgressEvent),
{
    fn on_progress(&mut self, event: ProgressEvent) {
        self(event)
    }
}

/// Sink that writes every event to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogProgressSink;

impl ProgressSink for LogProgressSink {
    fn on_progress(&mut self, event: ProgressEvent) {
        let message = event.message.as_deref().unwrap_or("");
        let who = event
            .identifier
            .as_ref()
            .map(|id| format!("[{}] ", id))
            .unwrap_or_default();
        match event.status {
            ProgressStatus::Error => warn!("{}{}: {}", who, event.step, message),
            ProgressStatus::Progress => info!(
                "{}% {}",
                event.percent.unwrap_or_default(),
                message
            ),
            ProgressStatus::Start | ProgressStatus::Success => {
                debug!("{}{}: {}", who, event.step, message)
            }
        }
    }
}
