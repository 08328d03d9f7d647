use chrono::NaiveDate;
use xldate::DateSystem;

#[test]
fn test_default_is_1900() {
    assert_eq!(DateSystem::default(), DateSystem::Date1900);
    assert!(!DateSystem::default().is_1904());
}

#[test]
fn test_epoch_year() {
    assert_eq!(DateSystem::Date1900.epoch_year(), 1900);
    assert_eq!(DateSystem::Date1904.epoch_year(), 1904);
}

#[test]
fn test_flag_conversion() {
    let system: DateSystem = true.into();
    assert!(system.is_1904());
    assert_eq!(
        system.epoch(),
        NaiveDate::from_ymd_opt(1904, 1, 1).unwrap()
    );
}

#[test]
fn test_julian_offsets_are_1461_days_apart() {
    let gap = DateSystem::Date1904.julian_offset() - DateSystem::Date1900.julian_offset();
    assert_eq!(gap, 1_461.0);
}
