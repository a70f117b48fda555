use rand::{Rng, SeedableRng};
use sqlx_datetime::mssql::datetime::{
    BulkDatetimeEncoder, DatetimeDecoder, NativeDatetimeEncoder, TextualDatetimeParser,
    MAX_YEAR, MIN_YEAR,
};
use sqlx_datetime::mssql::{
    decode_datetime, encode_datetime, parse_textual_datetime, quantize, ticks_to_nanos,
    CalendarTimestamp, MssqlDatetimeOptions, RangeError,
};
use sqlx_datetime::Error;
use sqlx_datetime_test::{setup_if_needed, MemoryDatabase};

// `2025-04-11T10:30:42` plus `ms` milliseconds.
fn instant(ms: u32) -> anyhow::Result<CalendarTimestamp> {
    Ok(CalendarTimestamp::new(2025, 4, 11, 10, 30, 42, ms * 1_000_000)?)
}

// Milliseconds with trailing zeros trimmed, and no fraction at all for a whole second.
fn literal(ms: u32) -> String {
    let fraction = format!("{ms:03}");
    let fraction = fraction.trim_end_matches('0');

    if fraction.is_empty() {
        "2025-04-11T10:30:42Z".to_owned()
    } else {
        format!("2025-04-11T10:30:42.{fraction}Z")
    }
}

#[test]
fn it_stores_one_second_identically_on_every_path() -> anyhow::Result<()> {
    setup_if_needed();

    let db = MemoryDatabase::from_env()?;

    let as_str = db.create_table("datetime_test_insert_time_as_str")?;
    let as_time = db.create_table("datetime_test_insert_time_as_time")?;
    let bulk = db.create_table("datetime_test_insert_bulk")?;

    let instants = (0..1000).map(instant).collect::<anyhow::Result<Vec<_>>>()?;

    for (ms, value) in (0..1000).zip(&instants) {
        db.insert_text(as_str.name(), &literal(ms))?;
        db.insert(as_time.name(), value)?;
    }
    db.bulk_insert(bulk.name(), instants.iter().copied().map(Some))?;

    let a: Vec<CalendarTimestamp> = db.select_all(as_str.name())?;
    let b: Vec<CalendarTimestamp> = db.select_all(as_time.name())?;
    let c: Vec<CalendarTimestamp> = db.select_all(bulk.name())?;

    assert_eq!(a.len(), instants.len());
    assert_eq!(b.len(), instants.len());
    assert_eq!(c.len(), instants.len());

    for (i, ((a, b), c)) in a.iter().zip(&b).zip(&c).enumerate() {
        assert!(
            a == b && a == c,
            "rows not equal at #{i}:\n  {:<34} | {:<34} | {:<34}\n  {:<34} | {:<34} | {:<34}",
            as_str.name(),
            as_time.name(),
            bulk.name(),
            a.to_string(),
            b.to_string(),
            c.to_string(),
        );
    }

    // rows come back in insertion order; the last one carried into the next second
    assert_eq!(a[0].to_string(), "2025-04-11T10:30:42");
    assert_eq!(a[998].to_string(), "2025-04-11T10:30:42.996666667");
    assert_eq!(a[999].to_string(), "2025-04-11T10:30:43");

    Ok(())
}

#[test]
fn it_drops_tables_with_their_guard() -> anyhow::Result<()> {
    let db = MemoryDatabase::new();

    {
        let table = db.create_table("scoped")?;
        db.insert_text(table.name(), "2025-04-11T10:30:42")?;

        assert!(db.has_table("scoped"));
        assert!(db.create_table("scoped").is_err());
    }

    assert!(!db.has_table("scoped"));
    let _table = db.create_table("scoped")?;
    assert_eq!(db.count("scoped")?, 0);

    Ok(())
}

#[test]
fn it_round_trips_every_tick() {
    for tick in 0..300 {
        let nanos = ticks_to_nanos(tick);
        let quantized = quantize(nanos);

        assert_eq!(quantized.tick, tick, "{nanos} ns");
        assert!(!quantized.carry);
    }
}

#[test]
fn it_decodes_and_reencodes_random_timestamps() -> anyhow::Result<()> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(20_250_411);

    let native = NativeDatetimeEncoder::new();
    let bulk = BulkDatetimeEncoder::new();
    let decoder = DatetimeDecoder::new();

    for _ in 0..10_000 {
        let value = CalendarTimestamp::new(
            rng.gen_range(MIN_YEAR..MAX_YEAR),
            rng.gen_range(1..=12),
            rng.gen_range(1..=28),
            rng.gen_range(0..24),
            rng.gen_range(0..60),
            rng.gen_range(0..60),
            rng.gen_range(0..1_000_000_000),
        )?;

        let stored = bulk.encode(&value)?;
        let decoded = decoder.decode(stored);

        assert_eq!(decoded, native.encode(&value)?, "{value}");
        assert_eq!(encode_datetime(&decoded)?, stored, "{value}");
        assert_eq!(
            parse_textual_datetime(&value.to_string())?,
            decoded,
            "{value}"
        );
    }

    Ok(())
}

#[test]
fn it_carries_across_a_leap_day() -> anyhow::Result<()> {
    let value = parse_textual_datetime("2024-02-28T23:59:59.9995")?;
    assert_eq!(value.to_string(), "2024-02-29T00:00:00");

    let value = parse_textual_datetime("2024-02-29 23:59:59.999")?;
    assert_eq!(value.to_string(), "2024-03-01T00:00:00");

    let stored = encode_datetime(&value)?;
    assert_eq!((stored.days(), stored.ticks()), (45_350, 0));

    Ok(())
}

#[test]
fn it_refuses_to_carry_out_of_range() -> anyhow::Result<()> {
    let value = CalendarTimestamp::new(9999, 12, 31, 23, 59, 59, 999_000_000)?;
    assert_eq!(
        encode_datetime(&value),
        Err(RangeError::Year { year: 10_000 })
    );

    let last = CalendarTimestamp::new(9999, 12, 31, 23, 59, 59, 998_000_000)?;
    let stored = encode_datetime(&last)?;
    assert_eq!(decode_datetime(stored).to_string(), "9999-12-31T23:59:59.996666667");

    let db = MemoryDatabase::new();
    let table = db.create_table("out_of_range")?;
    let err = db
        .insert_text(table.name(), "9999-12-31T23:59:59.999")
        .unwrap_err();
    assert!(matches!(err.downcast_ref::<Error>(), Some(Error::Range(_))));
    assert_eq!(db.count(table.name())?, 0);

    Ok(())
}

#[test]
fn it_honors_the_offset_option() -> anyhow::Result<()> {
    let options: MssqlDatetimeOptions = "mssql://localhost/master?datetime-offset=reject".parse()?;

    let strict = TextualDatetimeParser::new().with_options(&options);
    assert!(strict.parse("2025-04-11T10:30:42+01:00").is_err());
    assert!(strict.parse("2025-04-11T10:30:42Z").is_ok());

    let db = MemoryDatabase::with_options(options);
    let table = db.create_table("offsets")?;
    assert!(db
        .insert_text(table.name(), "2025-04-11T10:30:42-08:00")
        .is_err());

    let lenient = MemoryDatabase::new();
    let table = lenient.create_table("offsets")?;
    lenient.insert_text(table.name(), "2025-04-11T10:30:42-08:00")?;

    let rows: Vec<CalendarTimestamp> = lenient.select_all(table.name())?;
    assert_eq!(rows, [instant(0)?]);

    Ok(())
}

#[test]
fn it_reads_back_nulls() -> anyhow::Result<()> {
    let db = MemoryDatabase::new();
    let table = db.create_table("nullable")?;

    db.bulk_insert(table.name(), [Some(instant(5)?), None])?;
    db.insert(table.name(), Option::<CalendarTimestamp>::None)?;
    db.insert(table.name(), Some(instant(999)?))?;
    assert_eq!(db.count(table.name())?, 4);

    let rows: Vec<Option<CalendarTimestamp>> = db.select_all(table.name())?;
    assert_eq!(
        rows,
        [
            Some(CalendarTimestamp::new(2025, 4, 11, 10, 30, 42, 6_666_667)?),
            None,
            None,
            Some(CalendarTimestamp::new(2025, 4, 11, 10, 30, 43, 0)?),
        ]
    );

    // a NULL can't be read into a plain timestamp
    assert!(db.select_all::<CalendarTimestamp>(table.name()).is_err());

    Ok(())
}
