//! Per-identifier outcomes.

use serde::Serialize;
use strum_macros::EnumIter as EnumIterMacro;

use crate::config::LIST_SEPARATOR;
use crate::identifiers::Identifier;

/// Outcome of one identifier in a full run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIterMacro)]
pub enum RecordStatus {
    #[serde(rename = "Успешно")]
    Success,
    #[serde(rename = "Не найден")]
    NotFound,
    #[serde(rename = "Ошибка")]
    Error,
}

impl RecordStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordStatus::Success => "Успешно",
            RecordStatus::NotFound => "Не найден",
            RecordStatus::Error => "Ошибка",
        }
    }
}

impl std::fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Message stored on records for identifiers absent from the registry.
pub const NOT_FOUND_MESSAGE: &str = "Оператор не найден в реестре";

/// One row of a batch result. Built once and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRecord {
    pub identifier: Identifier,
    /// Registration number, or the registry record id when the page had none
    pub registry_id: String,
    pub operator_name: String,
    pub legal_address: String,
    pub registration_date: String,
    pub responsible_person: String,
    pub phones: Vec<String>,
    pub emails: Vec<String>,
    pub other_contacts: String,
    pub status: RecordStatus,
    pub error_message: Option<String>,
}

impl ResultRecord {
    fn blank(identifier: Identifier, status: RecordStatus, message: String) -> Self {
        Self {
            identifier,
            registry_id: String::new(),
            operator_name: String::new(),
            legal_address: String::new(),
            registration_date: String::new(),
            responsible_person: String::new(),
            phones: Vec::new(),
            emails: Vec::new(),
            other_contacts: String::new(),
            status,
            error_message: Some(message),
        }
    }

    /// Record for an identifier the registry does not know.
    pub fn not_found(identifier: Identifier) -> Self {
        Self::blank(
            identifier,
            RecordStatus::NotFound,
            NOT_FOUND_MESSAGE.to_string(),
        )
    }

    /// Record for an identifier whose lookup failed.
    pub fn failed(identifier: Identifier, message: String) -> Self {
        Self::blank(identifier, RecordStatus::Error, message)
    }

    /// Phones joined into one spreadsheet cell.
    pub fn phones_joined(&self) -> String {
        self.phones.join(LIST_SEPARATOR)
    }

    /// Emails joined into one spreadsheet cell.
    pub fn emails_joined(&self) -> String {
        self.emails.join(LIST_SEPARATOR)
    }

    /// Cell values in spreadsheet column order.
    pub fn to_row(&self) -> [String; 10] {
        [
            self.identifier.to_string(),
            self.registry_id.clone(),
            self.operator_name.clone(),
            self.legal_address.clone(),
            self.registration_date.clone(),
            self.responsible_person.clone(),
            self.phones_joined(),
            self.emails_joined(),
            self.other_contacts.clone(),
            self.status.to_string(),
        ]
    }
}

/// Whether an identifier is present in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIterMacro)]
pub enum Presence {
    #[serde(rename = "Да")]
    Found,
    #[serde(rename = "Нет")]
    Missing,
    #[serde(rename = "Ошибка")]
    Error,
}

impl Presence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Presence::Found => "Да",
            Presence::Missing => "Нет",
            Presence::Error => "Ошибка",
        }
    }
}

impl std::fmt::Display for Presence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of an existence check run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExistenceRecord {
    pub identifier: Identifier,
    pub found: Presence,
    pub status: String,
}

impl ExistenceRecord {
    /// Record for a completed check.
    pub fn checked(identifier: Identifier, exists: bool) -> Self {
        let (found, status) = if exists {
            (Presence::Found, "Существует")
        } else {
            (Presence::Missing, "Не найден")
        };
        Self {
            identifier,
            found,
            status: status.to_string(),
        }
    }

    /// Record for a check that could not be completed.
    pub fn failed(identifier: Identifier, message: &str) -> Self {
        Self {
            identifier,
            found: Presence::Error,
            status: format!("Ошибка: {}", message),
        }
    }
}
