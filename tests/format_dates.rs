use xldate::{format_with_id, DateSystem};

#[test]
fn test_format_serial_1900() {
    assert_eq!(format_with_id(46_031.0, 14, false).unwrap(), "01-09-26");
    assert_eq!(format_with_id(46_031.0, 17, false).unwrap(), "Jan-26");
    assert_eq!(format_with_id(46_031.75, 20, false).unwrap(), "18:00");
    assert_eq!(format_with_id(46_031.75, 19, false).unwrap(), "6:00:00 PM");
    assert_eq!(
        format_with_id(46_031.75, 77, DateSystem::Date1900).unwrap(),
        "9/1/2026 18:00"
    );
}

#[test]
fn test_format_serial_1904() {
    assert_eq!(format_with_id(0.0, 31, true).unwrap(), "1904年1月1日");
    assert_eq!(format_with_id(0.0, 15, true).unwrap(), "1-Jan-04");
}

#[test]
fn test_format_time_only() {
    assert_eq!(format_with_id(0.5, 21, false).unwrap(), "12:00:00");
    assert_eq!(format_with_id(0.25, 32, false).unwrap(), "06时00分");
}

#[test]
fn test_format_pre_march_1900() {
    assert_eq!(format_with_id(59.0, 14, false).unwrap(), "02-28-00");
    assert_eq!(format_with_id(1.0, 22, false).unwrap(), "1/1/00 00:00");
}
