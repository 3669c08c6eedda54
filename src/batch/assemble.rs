//! Turns a detail page into a result record.

use crate::config::{CONTACTS_LABEL, CONTACTS_LABEL_FRAGMENT, RESPONSIBLE_LABEL_FRAGMENT};
use crate::contacts::ContactExtractor;
use crate::identifiers::Identifier;
use crate::registry::{
    DetailFieldMap, RegistryRecordId, LEGAL_ADDRESS_KEY, OPERATOR_NAME_KEY,
    REGISTRATION_DATE_KEY, REGISTRATION_NUMBER_KEY,
};

use super::record::{RecordStatus, ResultRecord};

fn non_empty(value: &str) -> Option<&str> {
    let value = value.trim();
    (!value.is_empty()).then_some(value)
}

/// The free-text contacts field: the exact label first, then any label
/// mentioning contacts.
pub fn contacts_blob(details: &DetailFieldMap) -> &str {
    details
        .get(CONTACTS_LABEL)
        .or_else(|| {
            details
                .find_by_label_ignore_case(CONTACTS_LABEL_FRAGMENT)
                .map(|(_, value)| value)
        })
        .unwrap_or("")
}

/// Builds a successful record from the detail page of `record_id`.
///
/// Page fields take precedence; the contact extractor fills the responsible
/// person and legal address only when the page leaves them blank.
pub fn assemble_record(
    identifier: &Identifier,
    record_id: &RegistryRecordId,
    details: &DetailFieldMap,
    extractor: &ContactExtractor,
) -> ResultRecord {
    let contacts = extractor.extract(contacts_blob(details));

    let registry_id = non_empty(details.value(REGISTRATION_NUMBER_KEY))
        .unwrap_or(record_id.as_str())
        .to_string();
    let responsible_person = details
        .find_by_label(RESPONSIBLE_LABEL_FRAGMENT)
        .and_then(|(_, value)| non_empty(value))
        .map(str::to_string)
        .unwrap_or(contacts.responsible_person);
    let legal_address = non_empty(details.value(LEGAL_ADDRESS_KEY))
        .map(str::to_string)
        .unwrap_or(contacts.address);

    ResultRecord {
        identifier: identifier.clone(),
        registry_id,
        operator_name: details.value(OPERATOR_NAME_KEY).to_string(),
        legal_address,
        registration_date: details.value(REGISTRATION_DATE_KEY).to_string(),
        responsible_person,
        phones: contacts.phones,
        emails: contacts.emails,
        other_contacts: contacts.other_contacts,
        status: RecordStatus::Success,
        error_message: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::parse_details;

    const PAGE: &str = r#"<table>
        <tr><td>Регистрационный номер</td><td>77-18-012345</td></tr>
        <tr><td>Наименование оператора</td><td>ООО "Ромашка"</td></tr>
        <tr><td>Юридический адрес</td><td>101000, г. Москва, ул. Ленина, д. 1</td></tr>
        <tr><td>Дата регистрации уведомления</td><td>01.02.2018</td></tr>
        <tr><td>ФИО физического лица или наименование юридического лица, ответственных за организацию обработки персональных данных</td><td>Иванов Иван Иванович</td></tr>
        <tr><td>номера их контактных телефонов, почтовые адреса и адреса электронной почты</td><td>тел 89991234567, email: a@b.ru, Петров Петр Петрович</td></tr>
    </table>"#;

    fn inn() -> Identifier {
        Identifier::parse("7701234567").unwrap()
    }

    #[test]
    fn test_page_fields_take_precedence() {
        let details = parse_details(PAGE);
        let record = assemble_record(
            &inn(),
            &RegistryRecordId::new("4242"),
            &details,
            ContactExtractor::shared(),
        );
        assert_eq!(record.registry_id, "77-18-012345");
        assert_eq!(record.operator_name, "ООО \"Ромашка\"");
        assert_eq!(record.legal_address, "101000, г. Москва, ул. Ленина, д. 1");
        assert_eq!(record.registration_date, "01.02.2018");
        assert_eq!(record.responsible_person, "Иванов Иван Иванович");
        assert_eq!(record.phones, vec!["+7-(999)-123-45-67"]);
        assert_eq!(record.emails, vec!["a@b.ru"]);
        assert_eq!(record.status, RecordStatus::Success);
        assert!(record.error_message.is_none());
    }

    #[test]
    fn test_extractor_fills_blank_fields() {
        let details = parse_details(
            r#"<table><tr><td>Контактная информация</td><td>Сидоров Пётр Петрович, 190000 Санкт-Петербург</td></tr></table>"#,
        );
        let record = assemble_record(
            &inn(),
            &RegistryRecordId::new("4242"),
            &details,
            ContactExtractor::shared(),
        );
        assert_eq!(record.registry_id, "4242");
        assert_eq!(record.responsible_person, "Сидоров Пётр Петрович");
        assert_eq!(record.legal_address, "190000 Санкт-Петербург");
        assert_eq!(record.operator_name, "");
    }

    #[test]
    fn test_empty_details_still_succeed() {
        let record = assemble_record(
            &inn(),
            &RegistryRecordId::new("1"),
            &DetailFieldMap::empty(),
            ContactExtractor::shared(),
        );
        assert_eq!(record.registry_id, "1");
        assert!(record.phones.is_empty());
        assert_eq!(record.status, RecordStatus::Success);
    }
}
