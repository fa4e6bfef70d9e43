//! End-to-end validation of profiles as the backend delivers them.

use chrono::NaiveDate;
use serde_json::{json, Value};

use mm_core::{Profile, UiState};
use mm_validate::compose::{education, education_ui, employment, employment_ui, personal, privacy};
use mm_validate::{
    combine_validators, employment_validation, personal_validation, validate_profile_complete,
    CombinedValidator, FieldPath, ProfileStep, ValidationErrors, Validator,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

fn profile(value: Value) -> Profile {
    serde_json::from_value(value).unwrap()
}

fn valid_profile_json() -> Value {
    json!({
        "username": "jane",
        "first_name": "Jane",
        "last_name": "Doe",
        "preferred_name": "JD",
        "gender": "f",
        "preferred_language": "en",
        "city": "Cambridge",
        "state_or_territory": "US-MA",
        "country": "US",
        "birth_city": "Porto",
        "birth_state_or_territory": "PT-13",
        "birth_country": "PT",
        "date_of_birth": "1985-03-02",
        "account_privacy": "public_to_mm",
        "email_optin": true,
        "education": [{
            "id": 11,
            "degree_name": "hs",
            "graduation_date": "2003-06-01",
            "field_of_study": null,
            "online_degree": false,
            "school_name": "Liceu",
            "school_city": "Porto",
            "school_state_or_territory": "PT-13",
            "school_country": "PT"
        }],
        "work_history": [{
            "id": 21,
            "company_name": "Acme",
            "position": "Engineer",
            "industry": "Software",
            "start_date": "2010-01-01",
            "end_date": null,
            "city": "Boston",
            "state_or_territory": "US-MA",
            "country": "US"
        }]
    })
}

fn job(start: &str, end: Value, edit: Value) -> Value {
    json!({
        "company_name": "Acme",
        "position": "Engineer",
        "industry": "Software",
        "start_date": start,
        "end_date": end,
        "end_date_edit": edit,
        "city": "Boston",
        "state_or_territory": "US-MA",
        "country": "US"
    })
}

#[test]
fn valid_profile_is_complete() {
    let outcome = validate_profile_complete(&profile(valid_profile_json()), today());
    assert_eq!(outcome.into_parts(), (true, None, ValidationErrors::new()));
}

#[test]
fn empty_profile_reports_every_personal_field() {
    let (complete, step, errors) =
        validate_profile_complete(&profile(json!({})), today()).into_parts();
    assert!(!complete);
    assert_eq!(step, Some(ProfileStep::Personal));
    let expected: Vec<&str> = vec![
        "birth_city",
        "birth_country",
        "birth_state_or_territory",
        "city",
        "country",
        "date_of_birth",
        "first_name",
        "gender",
        "last_name",
        "preferred_language",
        "preferred_name",
        "state_or_territory",
    ];
    assert_eq!(errors.keys().collect::<Vec<_>>(), expected);
    assert_eq!(
        errors.message("date_of_birth"),
        Some("Please enter a valid date of birth")
    );
}

#[test]
fn numeric_zero_first_name_is_present() {
    let mut doc = valid_profile_json();
    doc["first_name"] = json!(0);
    let errors = personal_validation(&profile(doc), today());
    assert!(errors.message("first_name").is_none());
    assert!(errors.is_empty());
}

#[test]
fn each_missing_personal_field_reports_exactly_its_message() {
    let cases = [
        ("first_name", "Given name is required"),
        ("last_name", "Family name is required"),
        ("preferred_name", "Nickname / Preferred name is required"),
        ("gender", "Gender is required"),
        ("preferred_language", "Preferred language is required"),
        ("city", "City is required"),
        ("state_or_territory", "State or Territory is required"),
        ("country", "Country is required"),
        ("birth_city", "City is required"),
        ("birth_state_or_territory", "State or Territory is required"),
        ("birth_country", "Country is required"),
    ];
    for (key, message) in cases {
        let mut doc = valid_profile_json();
        doc[key] = json!("");
        let errors = personal_validation(&profile(doc), today());
        assert_eq!(errors.keys().collect::<Vec<_>>(), vec![key], "{key}");
        assert_eq!(errors.message(key), Some(message), "{key}");
    }
}

#[test]
fn null_collections_are_not_required() {
    let mut doc = valid_profile_json();
    doc["education"] = Value::Null;
    doc["work_history"] = Value::Null;
    assert!(validate_profile_complete(&profile(doc), today()).is_complete());
}

#[test]
fn end_before_start_keyed_at_its_index() {
    let mut doc = valid_profile_json();
    doc["work_history"] = json!([
        job("2015-01-01", json!("2016-01-01"), Value::Null),
        job("2015-05-01", json!("2015-04-01"), Value::Null),
    ]);
    let errors = employment_validation(&profile(doc), today());
    assert_eq!(
        serde_json::to_value(&errors).unwrap(),
        json!({"work_history": {"1": {"end_date": "End date cannot be before start date"}}})
    );
}

#[test]
fn blank_end_date_edit_is_valid() {
    let mut doc = valid_profile_json();
    doc["work_history"] = json!([job("2015-01-01", Value::Null, json!({"year": "", "month": ""}))]);
    assert!(employment_validation(&profile(doc), today()).is_empty());
}

#[test]
fn partial_end_date_edit_is_rejected() {
    let mut doc = valid_profile_json();
    doc["work_history"] = json!([job("2015-01-01", Value::Null, json!({"year": "1943", "month": ""}))]);
    let errors = employment_validation(&profile(doc), today());
    assert_eq!(
        errors.get(&FieldPath::entry("work_history", 0, "end_date")),
        Some("Please enter a valid end date or leave it blank")
    );
}

#[test]
fn combined_validators_equal_merge_of_parts() {
    let mut doc = valid_profile_json();
    doc["first_name"] = Value::Null;
    doc["education"][0]["school_name"] = json!("");
    doc["work_history"][0]["industry"] = json!("");
    let p = profile(doc);
    let ui = UiState {
        work_history_edit: true,
        ..UiState::default()
    };

    let parts: Vec<Box<dyn Validator>> = vec![
        Box::new(personal(today())),
        Box::new(education()),
        Box::new(employment(today())),
        Box::new(privacy()),
        Box::new(education_ui()),
        Box::new(employment_ui()),
    ];
    let expected = parts
        .iter()
        .fold(ValidationErrors::new(), |acc, v| acc.merge(v.validate(&p, &ui)));
    let combined = combine_validators(parts);
    let actual = combined.validate(&p, &ui);
    assert_eq!(actual, expected);
    assert_eq!(actual.message_count(), 3);
}

#[test]
fn combinators_nest() {
    let inner = CombinedValidator::new().with(personal(today())).with(privacy());
    let outer = CombinedValidator::new().with(inner).with(education());
    let errors = outer.validate(&profile(json!({})), &UiState::default());
    assert!(errors.message("first_name").is_some());
    assert!(errors.message("account_privacy").is_some());
}
