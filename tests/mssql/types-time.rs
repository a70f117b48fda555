use sqlx_datetime::types::time::{Date, Month, PrimitiveDateTime, Time};
use sqlx_datetime_test::{test_datetime, MemoryDatabase};

fn primitive(date: (i32, u8, u8), h: u8, m: u8, s: u8, nano: u32) -> PrimitiveDateTime {
    let month = Month::try_from(date.1).expect("bad test month");
    let date = Date::from_calendar_date(date.0, month, date.2).expect("bad test date");
    let time = Time::from_hms_nano(h, m, s, nano).expect("bad test time");

    PrimitiveDateTime::new(date, time)
}

test_datetime!(time_primitive_date_time<PrimitiveDateTime>(
    "2019-01-02 05:10:20" == primitive((2019, 1, 2), 5, 10, 20, 0),
    "2025-04-11T10:30:42.002Z" == primitive((2025, 4, 11), 10, 30, 42, 3_333_333),
    "2025-04-11T10:30:42.999" == primitive((2025, 4, 11), 10, 30, 43, 0),
    "9999-12-31T23:59:59.998" == primitive((9999, 12, 31), 23, 59, 59, 996_666_667),
));

#[test]
fn time_reads_back_what_bulk_wrote() -> anyhow::Result<()> {
    use sqlx_datetime::mssql::CalendarTimestamp;

    let db = MemoryDatabase::new();
    let table = db.create_table("time_bulk")?;

    db.bulk_insert(
        table.name(),
        [Some(CalendarTimestamp::new(1753, 1, 1, 0, 0, 0, 1_000_000)?)],
    )?;

    let rows: Vec<PrimitiveDateTime> = db.select_all(table.name())?;
    assert_eq!(rows, [primitive((1753, 1, 1), 0, 0, 0, 0)]);

    Ok(())
}
