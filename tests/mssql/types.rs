use sqlx_datetime::mssql::CalendarTimestamp;
use sqlx_datetime_test::test_datetime;

fn ts(year: i32, month: u8, day: u8, h: u8, m: u8, s: u8, nanos: u32) -> CalendarTimestamp {
    match CalendarTimestamp::new(year, month, day, h, m, s, nanos) {
        Ok(value) => value,
        Err(e) => panic!("bad test timestamp: {e}"),
    }
}

test_datetime!(datetime(
    "1900-01-01T00:00:00" == ts(1900, 1, 1, 0, 0, 0, 0),
    "2025-04-11T10:30:42" == ts(2025, 4, 11, 10, 30, 42, 0),
    "2025-04-11 10:30:42.5" == ts(2025, 4, 11, 10, 30, 42, 500_000_000),
    "2025-04-11T10:30:42.003Z" == ts(2025, 4, 11, 10, 30, 42, 3_333_333),
    "2025-04-11T10:30:42.007" == ts(2025, 4, 11, 10, 30, 42, 6_666_667),
    "2025-04-11T10:30:42.010" == ts(2025, 4, 11, 10, 30, 42, 10_000_000),
));

test_datetime!(datetime_rounding(
    // .001 .002 .004 .005 .008 .009
    "2025-04-11T10:30:42.001" == ts(2025, 4, 11, 10, 30, 42, 0),
    "2025-04-11T10:30:42.002" == ts(2025, 4, 11, 10, 30, 42, 3_333_333),
    "2025-04-11T10:30:42.004" == ts(2025, 4, 11, 10, 30, 42, 3_333_333),
    "2025-04-11T10:30:42.005" == ts(2025, 4, 11, 10, 30, 42, 6_666_667),
    "2025-04-11T10:30:42.008" == ts(2025, 4, 11, 10, 30, 42, 6_666_667),
    "2025-04-11T10:30:42.009" == ts(2025, 4, 11, 10, 30, 42, 10_000_000),
    "2025-04-11T10:30:42.998" == ts(2025, 4, 11, 10, 30, 42, 996_666_667),
));

test_datetime!(datetime_carry(
    "2025-04-11T10:30:42.999" == ts(2025, 4, 11, 10, 30, 43, 0),
    "2025-04-11T10:59:59.999" == ts(2025, 4, 11, 11, 0, 0, 0),
    "2025-04-30T23:59:59.999" == ts(2025, 5, 1, 0, 0, 0, 0),
    "2024-02-28T23:59:59.9995" == ts(2024, 2, 29, 0, 0, 0, 0),
    "2023-02-28T23:59:59.999" == ts(2023, 3, 1, 0, 0, 0, 0),
    "2024-12-31T23:59:59.999" == ts(2025, 1, 1, 0, 0, 0, 0),
));

test_datetime!(datetime_bounds(
    "1753-01-01T00:00:00" == ts(1753, 1, 1, 0, 0, 0, 0),
    "1899-12-31T23:59:59.997" == ts(1899, 12, 31, 23, 59, 59, 996_666_667),
    "9999-12-31T23:59:59.997" == ts(9999, 12, 31, 23, 59, 59, 996_666_667),
));

test_datetime!(datetime_option<Option<CalendarTimestamp>>(
    "2025-04-11T10:30:42.005" == Some(ts(2025, 4, 11, 10, 30, 42, 6_666_667)),
));
