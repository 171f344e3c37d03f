use haven_assistant::PhoneHeuristic;

fn heuristic() -> PhoneHeuristic {
    PhoneHeuristic::default()
}

#[test]
fn extracts_a_labeled_number_near_the_title() {
    let narrative =
        "...Central Hospital is open 24h. Phone: (555) 123-4567 for emergencies...";

    let phone = heuristic().extract_near(narrative, "Central Hospital");

    assert_eq!(phone.as_deref(), Some("(555) 123-4567"));
}

#[test]
fn rejects_runs_with_fewer_than_seven_digits() {
    // "12 34 56" is long enough for the pattern but carries only six
    // digits once everything else is stripped.
    let narrative = "Central Pharmacy is nearby. Contact: 12 34 56 office code.";

    assert_eq!(heuristic().extract_near(narrative, "Central Pharmacy"), None);
}

#[test]
fn short_labeled_runs_never_match() {
    let narrative = "Central Pharmacy is nearby. Tel: 123 is a kiosk code only.";

    assert_eq!(heuristic().extract_near(narrative, "Central Pharmacy"), None);
}

#[test]
fn title_match_is_case_insensitive() {
    let narrative = "The CENTRAL HOSPITAL emergency desk answers around the clock. Call 555-123-4567 anytime.";

    let phone = heuristic().extract_near(narrative, "Central Hospital");

    assert_eq!(phone.as_deref(), Some("555-123-4567"));
}

#[test]
fn titles_with_pattern_metacharacters_are_taken_literally() {
    let narrative =
        "St. Mary's (West) Hospital sits on 5th Ave. Phone: +1 555 987 6543. Open all night.";

    let phone = heuristic().extract_near(narrative, "St. Mary's (West) Hospital");

    assert_eq!(phone.as_deref(), Some("+1 555 987 6543."));
}

#[test]
fn unmentioned_title_yields_nothing() {
    let narrative = "Only the police station is listed here. Phone: 555-123-4567.";

    assert_eq!(heuristic().extract_near(narrative, "Central Hospital"), None);
}

#[test]
fn empty_title_yields_nothing() {
    assert_eq!(heuristic().extract_near("Phone: 555-123-4567", ""), None);
}

#[test]
fn numbers_beyond_the_window_are_ignored() {
    let filler = "y".repeat(320);
    let narrative = format!("Harbor Shelter {filler} Phone: 555-123-4567");

    assert_eq!(
        heuristic().extract_near(&narrative, "Harbor Shelter"),
        None
    );
}

#[test]
fn window_clamps_to_a_char_boundary() {
    // A multibyte character straddles the 300-byte mark; the scan must
    // clamp instead of slicing mid-character.
    let narrative = format!("Clinic {}née Phone: 555-123-4567", "x".repeat(292));

    let phone = heuristic().extract_near(&narrative, "Clinic");

    assert_eq!(phone, None);
}

#[test]
fn accepts_alternate_label_words() {
    let narrative = "Night Watch Desk is staffed. Contact: 5551234567 at any hour.";

    let phone = heuristic().extract_near(narrative, "Night Watch Desk");

    assert_eq!(phone.as_deref(), Some("5551234567"));
}

#[test]
fn shorter_window_narrows_the_scan() {
    let heuristic = PhoneHeuristic {
        window: 40,
        min_digits: 7,
    };
    let narrative = "Harbor Shelter is a long walk away but always open. Phone: 555-123-4567.";

    assert_eq!(heuristic.extract_near(narrative, "Harbor Shelter"), None);
}
