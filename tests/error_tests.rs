use xldate::{format_with_id, try_convert_to_date, DateError};

#[test]
fn test_non_finite_error() {
    let err = try_convert_to_date(f64::NAN, false).unwrap_err();
    assert!(matches!(err, DateError::NonFinite { .. }));
    assert!(err.to_string().contains("not finite"));
}

#[test]
fn test_out_of_range_error() {
    let err = try_convert_to_date(1e12, false).unwrap_err();
    assert_eq!(err, DateError::OutOfRange { serial: 1e12 });
    assert_eq!(err.to_string(), "date out of range: serial number 1000000000000");
}

#[test]
fn test_not_a_date_format_error() {
    let err = format_with_id(1.0, 164, false).unwrap_err();
    assert_eq!(err, DateError::NotADateFormat { id: 164 });
    assert_eq!(err.to_string(), "format id 164 is not a built-in date/time format");
}

#[test]
fn test_format_with_id_propagates_conversion_error() {
    assert_eq!(
        format_with_id(f64::INFINITY, 14, false),
        Err(DateError::NonFinite {
            value: f64::INFINITY
        })
    );
}
