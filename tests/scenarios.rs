use chrono::{DateTime, Days, FixedOffset, NaiveDate, TimeZone, Utc};
use tanggalan::{
    is_kabisat, month_lengths, to_gregorian, year_length, Dina, JavaneseDate, ParseError, Pasaran,
    Wulan, ANCHOR, WINDU_CYCLE,
};

fn noon_utc(year: i32, month: u32, day: u32) -> DateTime<FixedOffset> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap().fixed_offset()
}

fn every_nth_day(from: NaiveDate, to: NaiveDate, step: u64) -> impl Iterator<Item = NaiveDate> {
    std::iter::successors(Some(from), move |d| d.checked_add_days(Days::new(step)))
        .take_while(move |d| *d <= to)
}

#[test]
fn test_anchor_day() {
    let date = JavaneseDate::new(noon_utc(2022, 1, 1));
    assert_eq!(date.dina(), Dina::Setu);
    assert_eq!(date.pasaran(), Pasaran::Pahing);
    assert_eq!(date.day(), 28);
    assert_eq!(date.wulan(), Wulan::Jumadilawal);
    assert_eq!(date.year(), 1955);
}

#[test]
fn test_independence_day_1957() {
    let date = JavaneseDate::new(noon_utc(2023, 8, 17));
    assert_eq!(date.dina(), Dina::Kemis);
    assert_eq!(date.pasaran(), Pasaran::Kliwon);
    assert_eq!(date.day(), 30);
    assert_eq!(date.wulan(), Wulan::Sura);
    assert_eq!(date.year(), 1957);
}

#[test]
fn test_render_anchor() {
    let date = JavaneseDate::new(noon_utc(2022, 1, 1));
    assert_eq!(date.format("D P, dd M yyyy"), "Setu Pahing, 28 Jumadilawal 1955");
}

#[test]
fn test_parse_named_month() {
    let date = JavaneseDate::parse_from_str("28 Jumadilawal 1955", "d M yyyy").unwrap();
    assert_eq!(date.gregorian().date_naive(), NaiveDate::from_ymd_opt(2022, 1, 1).unwrap());
    assert_eq!(date.day(), 28);
    assert_eq!(date.wulan(), Wulan::Jumadilawal);
    assert_eq!(date.wulan().index(), 4);
    assert_eq!(date.year(), 1955);
}

#[test]
fn test_parse_rejects_wrong_pasaran() {
    let err = JavaneseDate::parse_from_str("Setu Legi, 28 Jumadilawal 1955", "D P, dd M yyyy")
        .unwrap_err();
    assert_eq!(
        err,
        ParseError::ValidationMismatch {
            field:    "pasaran",
            expected: "Pahing",
            found:    "Legi".to_owned(),
        }
    );
}

#[test]
fn test_next_weton_is_a_full_cycle_away() {
    let start = JavaneseDate::new(noon_utc(2022, 1, 1));
    let next = start.next_weton("Setu Pahing").unwrap();
    assert_eq!(next.gregorian() - start.gregorian(), chrono::TimeDelta::days(35));
    assert_eq!(next.gregorian().date_naive(), NaiveDate::from_ymd_opt(2022, 2, 5).unwrap());
}

#[test]
fn test_round_trip_over_centuries() {
    let from = NaiveDate::from_ymd_opt(1700, 1, 1).unwrap();
    let to = NaiveDate::from_ymd_opt(2300, 12, 31).unwrap();

    for day in every_nth_day(from, to, 3) {
        let date = JavaneseDate::from(day.and_hms_opt(12, 0, 0).unwrap());
        let back = to_gregorian(date.year(), date.wulan(), date.day()).unwrap();
        assert_eq!(back, day, "{date}");
        assert!(date.day() >= 1);
        assert!(u16::from(date.day()) <= date.wulan().length(date.is_kabisat()), "{date}");
    }
}

#[test]
fn test_round_trip_around_year_zero() {
    let from = to_gregorian(-2, Wulan::Sura, 1).unwrap();
    let to = to_gregorian(3, Wulan::Sura, 1).unwrap();
    let mut years = std::collections::BTreeSet::new();

    for day in every_nth_day(from, to.pred_opt().unwrap(), 1) {
        let date = JavaneseDate::from(day.and_hms_opt(12, 0, 0).unwrap());
        assert_eq!(to_gregorian(date.year(), date.wulan(), date.day()).unwrap(), day, "{date}");
        assert!(u16::from(date.day()) <= date.wulan().length(date.is_kabisat()), "{date}");
        years.insert(date.year());
    }
    assert_eq!(years.into_iter().collect::<Vec<_>>(), [-2, -1, 0, 1, 2]);

    let new_year = to_gregorian(0, Wulan::Sura, 1).unwrap();
    let first = JavaneseDate::from(new_year.and_hms_opt(0, 0, 0).unwrap());
    assert_eq!((first.day(), first.wulan(), first.year()), (1, Wulan::Sura, 0));

    let eve = JavaneseDate::from(new_year.pred_opt().unwrap().and_hms_opt(0, 0, 0).unwrap());
    assert_eq!(eve.year(), -1);
    assert_eq!(eve.wulan(), Wulan::Besar);
    assert_eq!(u16::from(eve.day()), Wulan::Besar.length(is_kabisat(-1)));
}

#[test]
fn test_weton_cycles() {
    let from = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();
    let to = NaiveDate::from_ymd_opt(2100, 1, 1).unwrap();

    for day in every_nth_day(from, to, 11) {
        let date = JavaneseDate::from(day.and_hms_opt(12, 0, 0).unwrap());
        let after = |n: u64| {
            let later = day.checked_add_days(Days::new(n)).unwrap();
            JavaneseDate::from(later.and_hms_opt(12, 0, 0).unwrap())
        };

        assert_eq!(after(35).weton(), date.weton(), "{day} + 35");
        assert_eq!(after(7).dina(), date.dina(), "{day} + 7");
        assert_ne!(after(7).pasaran(), date.pasaran(), "{day} + 7");
        assert_eq!(after(5).pasaran(), date.pasaran(), "{day} + 5");
        assert_ne!(after(5).dina(), date.dina(), "{day} + 5");
    }
}

#[test]
fn test_year_lengths_agree_with_reverse_conversion() {
    for year in 1500..2500 {
        let first = to_gregorian(year, Wulan::Sura, 1).unwrap();
        let next = to_gregorian(year + 1, Wulan::Sura, 1).unwrap();
        let days = (next - first).num_days();

        let phase = (i64::from(year) - i64::from(ANCHOR.year)).rem_euclid(WINDU_CYCLE) as usize;
        assert_eq!(days, i64::from(ANCHOR.windu_pattern[phase]), "year {year}");
        assert_eq!(days, i64::from(year_length(year)), "year {year}");
        assert_eq!(is_kabisat(year), days == 355, "year {year}");

        let besar = month_lengths(is_kabisat(year))[Wulan::Besar.index()];
        let last = to_gregorian(year, Wulan::Besar, u8::try_from(besar).unwrap()).unwrap();
        assert_eq!(last.succ_opt(), Some(next), "last day of {year}");
    }
}

#[test]
fn test_neptu_is_sum_of_weights() {
    let from = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
    let to = NaiveDate::from_ymd_opt(2000, 3, 1).unwrap();

    for day in every_nth_day(from, to, 1) {
        let date = JavaneseDate::from(day.and_hms_opt(0, 0, 0).unwrap());
        assert_eq!(date.neptu(), date.dina().neptu() + date.pasaran().neptu());
        assert!((7..=18).contains(&date.neptu()), "{date}");
    }
}

#[test]
fn test_format_parse_round_trip() {
    let layout = "D P, dd-mm-yyyy HH:MM:SS Z";
    let jakarta = FixedOffset::east_opt(7 * 3600).unwrap();

    for day in every_nth_day(
        NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
        37,
    ) {
        let instant = jakarta
            .from_local_datetime(&day.and_hms_opt(18, 45, 9).unwrap())
            .single()
            .unwrap();
        let date = JavaneseDate::new(instant);
        let text = date.format(layout);
        let parsed = JavaneseDate::parse_from_str(&text, layout).unwrap();
        assert_eq!(parsed, date, "{text}");
    }
}

#[test]
fn test_serde_round_trip() {
    let date = JavaneseDate::new(noon_utc(2023, 8, 17));
    let json = serde_json::to_string(&date).unwrap();
    let parsed: JavaneseDate = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, date);
    assert_eq!(parsed.to_string(), "Kemis Kliwon, 30 Sura 1957 Ja, Bedhug");
}
