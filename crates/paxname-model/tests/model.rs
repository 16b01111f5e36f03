//! Tests for paxname-model types and the policy table.

use paxname_model::{
    AirlinePolicy, ModelError, NameField, NameInput, NameOutput, airline_keys, airlines, policy,
};

#[test]
fn lookup_known_airlines() {
    let mas = policy("mas").expect("mas policy");
    assert_eq!(mas.label, "Malaysia Airlines");
    assert_eq!(*mas, AirlinePolicy::new("Malaysia Airlines"));

    let ana = policy("ana").expect("ana policy");
    assert!(ana.three_fields);

    let korean = policy("korean_air").expect("korean_air policy");
    assert!(korean.duplicate_single);
    assert!(korean.no_spaces);
}

#[test]
fn lookup_is_case_insensitive() {
    let upper = policy("  CHINA_AIRLINES ").expect("policy");
    assert!(upper.no_spaces);
}

#[test]
fn lookup_unknown_airline() {
    let err = policy("pan_am").unwrap_err();
    assert_eq!(err, ModelError::UnknownAirline("pan_am".to_string()));
    assert_eq!(err.to_string(), "unknown airline: pan_am");
}

#[test]
fn table_covers_reference_airlines() {
    let keys = airline_keys();
    for key in [
        "mas",
        "batikair",
        "ana",
        "china_airlines",
        "airasia",
        "hk_express",
    ] {
        assert!(keys.contains(&key), "missing {key}");
    }
    assert_eq!(keys.len(), airlines().count());
    assert!(keys.len() >= 20);
}

#[test]
fn drop_marker_airlines_exist() {
    let dropping: Vec<&str> = airlines()
        .filter(|(_, policy)| policy.drop_marker)
        .map(|(key, _)| key)
        .collect();
    assert_eq!(dropping, vec!["etihad", "saudia"]);
}

#[test]
fn name_input_defaults_missing_fields() {
    let input: NameInput = serde_json::from_str(r#"{"given":"ISKANDAR"}"#).expect("parse");
    assert_eq!(input, NameInput::single("ISKANDAR"));
    assert!(input.patronymic.is_empty());
    assert!(input.surname.is_empty());
}

#[test]
fn name_output_field_access() {
    let output = NameOutput::new("JOHN", "WILLIAM", "DOE");
    assert_eq!(output.get(NameField::First), "JOHN");
    assert_eq!(output.get(NameField::Middle), "WILLIAM");
    assert_eq!(output.get(NameField::Last), "DOE");
    assert_eq!(NameField::Middle.to_string(), "middle");
}

#[test]
fn name_output_middle_defaults_to_empty() {
    let output: NameOutput =
        serde_json::from_str(r#"{"first":"TAI MAN","last":"CHAN"}"#).expect("parse");
    assert_eq!(output, NameOutput::new("TAI MAN", "", "CHAN"));
}

#[test]
fn policy_serializes_flags() {
    let json = serde_json::to_value(policy("saudia").expect("policy")).expect("serialize");
    assert_eq!(json["label"], "Saudia");
    assert_eq!(json["drop_marker"], true);
    assert_eq!(json["no_spaces"], false);
}
