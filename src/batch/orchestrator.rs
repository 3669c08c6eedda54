//! Sequential batch driver.

use std::time::Duration;

use log::{info, warn};

use crate::config::{CHECK_REQUEST_DELAY, REQUEST_DELAY};
use crate::contacts::ContactExtractor;
use crate::error_handling::FetchError;
use crate::identifiers::{dedupe_identifiers, Identifier};
use crate::registry::RegistryLookup;
use crate::utils::sanitize::sanitize_and_truncate_error_message;

use super::assemble::assemble_record;
use super::progress::{ProgressEvent, ProgressSink, ProgressStatus, ProgressStep};
use super::record::{ExistenceRecord, ResultRecord};

/// Lifecycle of the orchestrator's most recent run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchState {
    Idle,
    Running,
    Completed,
    Cancelled,
}

/// Tunables for a batch run.
#[derive(Debug, Clone)]
pub struct BatchSettings {
    /// Pause between the id lookup and the detail fetch
    pub request_delay: Duration,
    /// Pause between identifiers in an existence check
    pub check_delay: Duration,
    /// Drop repeated identifiers before processing
    pub dedupe: bool,
}

impl Default for BatchSettings {
    fn default() -> Self {
        Self {
            request_delay: REQUEST_DELAY,
            check_delay: CHECK_REQUEST_DELAY,
            dedupe: false,
        }
    }
}

/// Drives identifiers through the registry one at a time.
///
/// `run` takes `&mut self`, so two runs on one orchestrator can never overlap.
pub struct BatchOrchestrator<R: RegistryLookup> {
    registry: R,
    extractor: ContactExtractor,
    settings: BatchSettings,
    state: BatchState,
}

async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

impl<R: RegistryLookup> BatchOrchestrator<R> {
    pub fn new(registry: R) -> Self {
        Self {
            registry,
            extractor: ContactExtractor::shared().clone(),
            settings: BatchSettings::default(),
            state: BatchState::Idle,
        }
    }

    pub fn with_settings(mut self, settings: BatchSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_extractor(mut self, extractor: ContactExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    pub fn state(&self) -> BatchState {
        self.state
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    fn prepare(&self, identifiers: &[Identifier]) -> Vec<Identifier> {
        if self.settings.dedupe {
            dedupe_identifiers(identifiers.to_vec())
        } else {
            identifiers.to_vec()
        }
    }

    /// Resolves every identifier in input order.
    ///
    /// Per-identifier failures become records and never stop the batch.
    /// `is_cancelled` is polled before each identifier; once it returns true
    /// the records collected so far are returned.
    pub async fn run(
        &mut self,
        identifiers: &[Identifier],
        sink: &mut dyn ProgressSink,
        is_cancelled: &dyn Fn() -> bool,
    ) -> Vec<ResultRecord> {
        let identifiers = self.prepare(identifiers);
        let total = identifiers.len();
        let mut results = Vec::with_capacity(total);
        self.state = BatchState::Running;
        info!("Processing {} identifier(s)", total);

        for (index, identifier) in identifiers.iter().enumerate() {
            if is_cancelled() {
                info!("Cancelled after {} of {} identifier(s)", index, total);
                self.state = BatchState::Cancelled;
                return results;
            }

            let record = self.process_one(identifier, sink).await;
            results.push(record);
            sink.on_progress(ProgressEvent::overall(index + 1, total, "Обработано"));
        }

        self.state = BatchState::Completed;
        results
    }

    async fn process_one(
        &self,
        identifier: &Identifier,
        sink: &mut dyn ProgressSink,
    ) -> ResultRecord {
        sink.on_progress(ProgressEvent::step(
            identifier,
            ProgressStep::IdLookup,
            ProgressStatus::Start,
            format!("Поиск оператора для ИНН {}...", identifier),
        ));

        match self.lookup(identifier, sink).await {
            Ok(record) => record,
            Err(e) => {
                let message = sanitize_and_truncate_error_message(&e.to_string());
                warn!("[{}] lookup failed: {}", identifier, message);
                sink.on_progress(ProgressEvent::step(
                    identifier,
                    ProgressStep::Error,
                    ProgressStatus::Error,
                    format!("Ошибка: {}", message),
                ));
                ResultRecord::failed(identifier.clone(), message)
            }
        }
    }

    async fn lookup(
        &self,
        identifier: &Identifier,
        sink: &mut dyn ProgressSink,
    ) -> Result<ResultRecord, FetchError> {
        let Some(record_id) = self.registry.resolve_id(identifier).await? else {
            info!("[{}] not found in the registry", identifier);
            sink.on_progress(ProgressEvent::step(
                identifier,
                ProgressStep::IdLookup,
                ProgressStatus::Error,
                format!("Оператор с ИНН {} не найден в реестре", identifier),
            ));
            return Ok(ResultRecord::not_found(identifier.clone()));
        };

        sink.on_progress(ProgressEvent::step(
            identifier,
            ProgressStep::IdLookup,
            ProgressStatus::Success,
            format!("Найден ID: {}", record_id),
        ));

        pause(self.settings.request_delay).await;

        sink.on_progress(ProgressEvent::step(
            identifier,
            ProgressStep::Details,
            ProgressStatus::Start,
            "Загрузка детальной информации...",
        ));
        let details = self.registry.resolve_details(&record_id).await;
        let record = assemble_record(identifier, &record_id, &details, &self.extractor);
        sink.on_progress(ProgressEvent::step(
            identifier,
            ProgressStep::Details,
            ProgressStatus::Success,
            "Данные успешно получены",
        ));

        Ok(record)
    }

    /// Checks which identifiers are present in the registry.
    ///
    /// Same progress and cancellation contract as [`run`](Self::run).
    pub async fn run_existence_check(
        &mut self,
        identifiers: &[Identifier],
        sink: &mut dyn ProgressSink,
        is_cancelled: &dyn Fn() -> bool,
    ) -> Vec<ExistenceRecord> {
        let identifiers = self.prepare(identifiers);
        let total = identifiers.len();
        let mut results = Vec::with_capacity(total);
        self.state = BatchState::Running;
        info!("Checking {} identifier(s)", total);

        for (index, identifier) in identifiers.iter().enumerate() {
            if is_cancelled() {
                info!("Cancelled after {} of {} identifier(s)", index, total);
                self.state = BatchState::Cancelled;
                return results;
            }

            sink.on_progress(ProgressEvent::step(
                identifier,
                ProgressStep::Check,
                ProgressStatus::Start,
                format!("Проверка ИНН {}...", identifier),
            ));

            let record = match self.registry.check_exists(identifier).await {
                Ok(exists) => {
                    sink.on_progress(ProgressEvent::step(
                        identifier,
                        ProgressStep::Check,
                        ProgressStatus::Success,
                        format!(
                            "ИНН {}: {}",
                            identifier,
                            if exists { "найден" } else { "не найден" }
                        ),
                    ));
                    ExistenceRecord::checked(identifier.clone(), exists)
                }
                Err(e) => {
                    let message = sanitize_and_truncate_error_message(&e.to_string());
                    warn!("[{}] existence check failed: {}", identifier, message);
                    sink.on_progress(ProgressEvent::step(
                        identifier,
                        ProgressStep::Error,
                        ProgressStatus::Error,
                        format!("Ошибка проверки ИНН {}", identifier),
                    ));
                    ExistenceRecord::failed(identifier.clone(), &message)
                }
            };
            results.push(record);
            sink.on_progress(ProgressEvent::overall(index + 1, total, "Проверено"));

            if index + 1 < total {
                pause(self.settings.check_delay).await;
            }
        }

        self.state = BatchState::Completed;
        results
    }
}
