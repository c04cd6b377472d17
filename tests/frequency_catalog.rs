use kep_dash::{Error, Frequency, descriptions, frequency_code_of, index_of};

#[test]
fn index_and_code_round_trip() {
    for i in 0..4 {
        let code = frequency_code_of(i).unwrap();
        assert_eq!(index_of(code).unwrap(), i);
        assert_eq!(frequency_code_of(index_of(code).unwrap()).unwrap(), code);
    }
}

#[test]
fn descriptions_are_fixed_and_ordered() {
    assert_eq!(descriptions(), ["Annual", "Quarterly", "Monthly", "Daily"]);
    let labels: Vec<&str> = Frequency::ALL.iter().map(|f| f.label()).collect();
    assert_eq!(labels, descriptions());
}

#[test]
fn out_of_range_index_is_invalid_choice() {
    match frequency_code_of(4) {
        Err(Error::InvalidChoice { choice }) => assert_eq!(choice, "4"),
        other => panic!("expected InvalidChoice, got {:?}", other),
    }
}

#[test]
fn unknown_code_is_invalid_choice() {
    assert!(matches!(index_of("w"), Err(Error::InvalidChoice { .. })));
    assert!(matches!(index_of(""), Err(Error::InvalidChoice { .. })));
    // Codes are case-sensitive; labels are not.
    assert!(index_of("Q").is_err());
    assert_eq!("QUARTERLY".parse::<Frequency>().unwrap(), Frequency::Quarterly);
}

#[test]
fn display_is_the_api_code() {
    assert_eq!(Frequency::Daily.to_string(), "d");
    assert_eq!(Frequency::from_code("a").unwrap(), Frequency::Annual);
}
