use chrono::{Duration, NaiveDate, NaiveDateTime};
use contact_book::model::*;
use contact_book::queries::*;

fn base() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 2, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn contact(id: u64, name: &str, phone: &str, email: &str, address: &str, minutes: i64) -> Contact {
    Contact::create(
        Id::new(id),
        name.into(),
        phone.into(),
        email.into(),
        address.into(),
        base() + Duration::minutes(minutes),
    )
}

fn sample() -> Vec<Contact> {
    vec![
        contact(1, "Maria Lopez", "5550001001", "maria@mail.com", "", 0),
        contact(2, "alan Turing", "5550001002", "", "Bletchley Park", 5),
        contact(3, "Zed", "(555) 000-1003", "zed@Mail.com", "Mail Street 4", 10),
        contact(4, "Bob", "5550001004", "", "", 2),
    ]
}

// ==========================================================================
// CONTACT QUERIES
// ==========================================================================

#[test]
fn find_by_id_and_phone() {
    let contacts = sample();
    assert_eq!(contact_queries::find_by_id(&contacts, Id::new(3)).unwrap().name, "Zed");
    assert!(contact_queries::find_by_id(&contacts, Id::new(9)).is_none());

    let found = contact_queries::find_by_phone(&contacts, "\t(555) 000-1003 ").unwrap();
    assert_eq!(found.id, Id::new(3));
}

#[test]
fn search_is_case_insensitive_across_fields() {
    let contacts = sample();
    let ids: Vec<u64> = contact_queries::search(&contacts, "MAIL")
        .iter()
        .map(|c| c.id.value)
        .collect();
    assert_eq!(ids, vec![1, 3]);

    let ids: Vec<u64> = contact_queries::search(&contacts, "park")
        .iter()
        .map(|c| c.id.value)
        .collect();
    assert_eq!(ids, vec![2]);
}

#[test]
fn search_trims_query() {
    let contacts = sample();
    assert_eq!(contact_queries::search(&contacts, "  bob  ").len(), 1);
}

#[test]
fn search_blank_query_is_empty() {
    let contacts = sample();
    assert!(contact_queries::search(&contacts, "").is_empty());
    assert!(contact_queries::search(&contacts, " \t ").is_empty());
}

#[test]
fn sorted_by_name_ignores_case_and_is_stable() {
    let mut contacts = sample();
    contacts.push(contact(5, "BOB", "5550001005", "", "", 20));

    let names: Vec<&str> = contact_queries::sorted_by_name(&contacts)
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(names, vec!["alan Turing", "Bob", "BOB", "Maria Lopez", "Zed"]);
}

// ==========================================================================
// STATS QUERIES
// ==========================================================================

#[test]
fn stats_counts_optional_fields() {
    let stats = stats_queries::stats(&sample(), 3);
    assert_eq!(stats.total, 4);
    assert_eq!(stats.with_email, 2);
    assert_eq!(stats.with_address, 2);
    assert!((stats.email_percent() - 50.0).abs() < f64::EPSILON);
    assert!((stats.address_percent() - 50.0).abs() < f64::EPSILON);
}

#[test]
fn stats_lists_newest_first() {
    let stats = stats_queries::stats(&sample(), 3);
    let names: Vec<&str> = stats.recent.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Zed", "alan Turing", "Bob"]);
}

#[test]
fn stats_on_empty_book() {
    let stats = stats_queries::stats(&[], 3);
    assert_eq!(stats.total, 0);
    assert!(stats.recent.is_empty());
    assert_eq!(stats.email_percent(), 0.0);
}
