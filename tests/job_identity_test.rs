use chrono::TimeZone;

use recapd::domain::JobIdentity;

#[test]
fn given_fixed_time_when_deriving_identity_then_stamp_is_second_granular() {
    let now = chrono::Local.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
    let id = JobIdentity::from_time(now);

    assert_eq!(id.second_stamp(), "file_20250102_030405");
    assert!(id.as_str().starts_with("file_20250102_030405_"));
}

// The naive derivation the second stamp comes from would collide for two
// requests in the same clock second; the random suffix is the fix.
#[test]
fn given_two_identities_in_same_second_then_stamps_collide_but_tokens_differ() {
    let now = chrono::Local.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
    let a = JobIdentity::from_time(now);
    let b = JobIdentity::from_time(now);

    assert_eq!(a.second_stamp(), b.second_stamp());
    assert_ne!(a.as_str(), b.as_str());
}

#[test]
fn given_fresh_identities_then_they_are_unique() {
    let a = JobIdentity::new();
    let b = JobIdentity::new();

    assert_ne!(a.as_str(), b.as_str());
}
