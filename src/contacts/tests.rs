// Contact extraction tests.

use super::*;

const SAMPLE: &str = "тел 89991234567, email: a@b.ru, г.Москва 101000 ул.Ленина";

#[test]
fn test_sample_blob() {
    let bundle = extract_contacts(SAMPLE);
    assert_eq!(bundle.phones, vec!["+7-(999)-123-45-67"]);
    assert_eq!(bundle.emails, vec!["a@b.ru"]);
    assert_eq!(bundle.address, "101000 ул.Ленина");
    assert_eq!(bundle.other_contacts, "тел, email:, г.Москва 101000 ул.Ленина");
    assert_eq!(bundle.responsible_person, "");
}

#[test]
fn test_residual_does_not_rediscover_contacts() {
    let blobs = [
        SAMPLE,
        "8 (999) 123-45-67; +7 999 123 45 67, Info@Firm.RU",
        "Телефон: +7 (495) 123-45-67101000, г. Москва, ул. Тверская, д. 1",
        "тел.9991234567101000 факс 8-800-555-35-35 почта: x@y.com",
        "999.123.45.67 / 8(4952)12-34-56",
    ];
    for blob in blobs {
        let first = extract_contacts(blob);
        let again = extract_contacts(&first.other_contacts);
        for phone in &again.phones {
            assert!(
                !first.phones.contains(phone),
                "{} rediscovered in residual of {:?}",
                phone,
                blob
            );
        }
        for email in &again.emails {
            assert!(!first.emails.contains(email));
        }
    }
}

#[test]
fn test_formatted_phone_round_trip() {
    let bundle = extract_contacts("+7-(999)-123-45-67");
    assert_eq!(bundle.phones, vec!["+7-(999)-123-45-67"]);
    assert_eq!(bundle.other_contacts, "");
}

#[test]
fn test_index_glued_to_phone_is_split() {
    let bundle =
        extract_contacts("Телефон: +7 (495) 123-45-67101000, г. Москва, ул. Тверская, д. 1");
    assert_eq!(bundle.phones, vec!["+7-(495)-123-45-67"]);
    assert_eq!(bundle.address, "101000, г. Москва, ул. Тверская, д. 1");
    assert_eq!(
        bundle.other_contacts,
        "Телефон: 101000, г. Москва, ул. Тверская, д. 1"
    );
}

#[test]
fn test_index_glued_to_bare_ten_digits() {
    let bundle = extract_contacts("тел.9991234567101000");
    assert_eq!(bundle.phones, vec!["+7-(999)-123-45-67"]);
    assert!(bundle.address.starts_with("101000"));
}

#[test]
fn test_standalone_index_is_not_a_phone() {
    let bundle = extract_contacts("123456 г. Москва, тел. 8 999 123 45 67, mail@x.ru");
    assert_eq!(bundle.phones, vec!["+7-(999)-123-45-67"]);
    assert!(bundle.address.starts_with("123456 г. Москва"));
    assert!(!bundle.address.contains("999"));
    assert!(!bundle.address.contains("mail@"));
}

#[test]
fn test_equivalent_phones_are_deduplicated() {
    let bundle = extract_contacts("8 (999) 123-45-67; +7 999 123 45 67");
    assert_eq!(bundle.phones, vec!["+7-(999)-123-45-67"]);
    assert_eq!(bundle.other_contacts, "");
}

#[test]
fn test_phones_keep_first_seen_order() {
    let bundle = extract_contacts("8-800-555-35-35, 8 (999) 123-45-67");
    assert_eq!(
        bundle.phones,
        vec!["+7-(800)-555-35-35", "+7-(999)-123-45-67"]
    );
}

#[test]
fn test_city_code_without_country_prefix() {
    let bundle = extract_contacts("Ярославль, тел. 4852 12-34-56, (4852) 12-34-56");
    assert_eq!(bundle.phones, vec!["+7-(485)-212-34-56"]);
    assert_eq!(bundle.other_contacts, "Ярославль, тел.");
}

#[test]
fn test_eleven_digits_not_starting_with_seven_are_rejected() {
    let bundle = extract_contacts("тел. 12345678901");
    assert!(bundle.phones.is_empty());
    assert_eq!(bundle.other_contacts, "тел. 12345678901");
}

#[test]
fn test_emails_lowercased_sorted_deduplicated() {
    let bundle = extract_contacts("Info@Firm.RU, admin@firm.ru; info@firm.ru");
    assert_eq!(bundle.emails, vec!["admin@firm.ru", "info@firm.ru"]);
    assert_eq!(bundle.other_contacts, "");
}

#[test]
fn test_person_full_name() {
    let bundle = extract_contacts("Ответственный: Иванов Иван Иванович, тел. 89991234567");
    assert_eq!(bundle.responsible_person, "Иванов Иван Иванович");
}

#[test]
fn test_person_with_initials() {
    let bundle = extract_contacts("Контакт: Петров П.П.");
    assert_eq!(bundle.responsible_person, "Петров П.П.");
}

#[test]
fn test_person_label_prefixed_lowercase() {
    let bundle = extract_contacts("руководитель: иванов иван иванович");
    assert_eq!(bundle.responsible_person, "иванов иван иванович");
}

#[test]
fn test_address_empty_without_index() {
    let bundle = extract_contacts("г. Москва, ул. Ленина");
    assert_eq!(bundle.address, "");
}

#[test]
fn test_address_window_is_bounded() {
    let blob = format!("101000 {}", "очень длинный адрес ".repeat(30));
    let bundle = extract_contacts(&blob);
    assert!(bundle.address.starts_with("101000"));
    assert!(bundle.address.chars().count() <= crate::config::ADDRESS_WINDOW_CHARS);
}

#[test]
fn test_passes_read_the_original_blob() {
    // The name sits between a phone and an email; removing them must not hide it
    let bundle = extract_contacts("89991234567 Сидоров Пётр Петрович a@b.ru 101000 Москва");
    assert_eq!(bundle.responsible_person, "Сидоров Пётр Петрович");
    assert_eq!(bundle.address, "101000 Москва");
    assert_eq!(bundle.phones.len(), 1);
    assert_eq!(bundle.emails.len(), 1);
}

#[test]
fn test_empty_blob() {
    assert_eq!(extract_contacts(""), ContactBundle::default());
}

#[test]
fn test_with_patterns_substitutes_rules() {
    let extractor = ContactExtractor::with_patterns(ContactPatterns {
        phones: &[r"\d{3}-\d{4}"],
        phone_with_index: &[],
        ..Default::default()
    })
    .unwrap();
    // 555-1234 is seven digits, which never normalizes to a valid phone
    let bundle = extractor.extract("call 555-1234 or 89991234567");
    assert!(bundle.phones.is_empty());
}

#[test]
fn test_with_patterns_reports_bad_regex() {
    let result = ContactExtractor::with_patterns(ContactPatterns {
        email: "[unclosed",
        ..Default::default()
    });
    assert!(result.is_err());
}
