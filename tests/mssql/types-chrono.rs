use sqlx_datetime::types::chrono::{NaiveDate, NaiveDateTime};
use sqlx_datetime_test::{test_datetime, MemoryDatabase};

fn naive(date: (i32, u32, u32), h: u32, m: u32, s: u32, nano: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(date.0, date.1, date.2)
        .and_then(|date| date.and_hms_nano_opt(h, m, s, nano))
        .unwrap_or_else(|| panic!("bad test timestamp: {date:?} {h}:{m}:{s}.{nano}"))
}

test_datetime!(chrono_naive_date_time<NaiveDateTime>(
    "2019-01-02 05:10:20" == naive((2019, 1, 2), 5, 10, 20, 0),
    "2025-04-11T10:30:42.005" == naive((2025, 4, 11), 10, 30, 42, 6_666_667),
    "2025-04-11T10:30:42.999" == naive((2025, 4, 11), 10, 30, 43, 0),
    "2024-02-28T23:59:59.9995" == naive((2024, 2, 29), 0, 0, 0, 0),
));

#[test]
fn chrono_rounds_like_every_other_path() -> anyhow::Result<()> {
    let db = MemoryDatabase::new();
    let table = db.create_table("chrono")?;

    db.insert(table.name(), naive((2025, 4, 11), 10, 30, 42, 4_999_999))?;
    db.insert(table.name(), naive((2025, 4, 11), 10, 30, 42, 5_000_000))?;

    let rows: Vec<NaiveDateTime> = db.select_all(table.name())?;
    assert_eq!(
        rows,
        [
            naive((2025, 4, 11), 10, 30, 42, 3_333_333),
            naive((2025, 4, 11), 10, 30, 42, 6_666_667),
        ]
    );

    Ok(())
}

#[test]
fn chrono_leap_seconds_are_rejected() -> anyhow::Result<()> {
    let db = MemoryDatabase::new();
    let table = db.create_table("chrono_leap")?;

    let leap = naive((2016, 12, 31), 23, 59, 59, 1_000_000_000);
    assert!(db.insert(table.name(), leap).is_err());
    assert_eq!(db.count(table.name())?, 0);

    Ok(())
}
