//! 날짜/시간 유틸리티
//!
//! 급여월(`YYYY-MM`), 근무 스케줄(`HH:MM`) 파싱과 기간 계산을 담당합니다.
//! 모든 시간은 매장 현지 시간(naive)으로 다룹니다.

use std::fmt;
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use crate::errors::errors::AppError;

/// 급여/집계 기준 월
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, AppError> {
        if !(1..=12).contains(&month) {
            return Err(AppError::ValidationError(format!("잘못된 월입니다: {}", month)));
        }
        if !(1..=9999).contains(&year) {
            return Err(AppError::ValidationError(format!("잘못된 연도입니다: {}", year)));
        }
        Ok(Self { year, month })
    }

    /// `2026-10` 형식을 파싱합니다.
    pub fn parse(value: &str) -> Result<Self, AppError> {
        let invalid = || AppError::ValidationError(format!("월 형식은 YYYY-MM 이어야 합니다: {}", value));

        let (year, month) = value.trim().split_once('-').ok_or_else(invalid)?;
        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let month = month.parse::<u32>().map_err(|_| invalid())?;
        Self::new(year, month)
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }

    pub fn last_day(&self) -> NaiveDate {
        self.next().first_day() - Duration::days(1)
    }

    pub fn days(&self) -> u32 {
        self.last_day().day()
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl TryFrom<String> for YearMonth {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<YearMonth> for String {
    fn from(value: YearMonth) -> Self {
        value.to_string()
    }
}

/// `HH:MM` 스케줄 시간을 파싱합니다.
pub fn parse_hhmm(value: &str) -> Result<NaiveTime, AppError> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M")
        .map_err(|_| AppError::ValidationError(format!("시간 형식은 HH:MM 이어야 합니다: {}", value)))
}

/// 근무일 기준 예정 출근/퇴근 시각
///
/// 퇴근 시간이 출근 시간보다 이르거나 같으면 다음날 퇴근으로 봅니다.
pub fn shift_bounds(work_date: NaiveDate, start: NaiveTime, end: NaiveTime) -> (NaiveDateTime, NaiveDateTime) {
    let starts_at = work_date.and_time(start);
    let ends_at = if end <= start {
        (work_date + Duration::days(1)).and_time(end)
    } else {
        work_date.and_time(end)
    };
    (starts_at, ends_at)
}

/// 양 끝 포함 날짜 순회
pub fn dates_between(from: NaiveDate, to: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    from.iter_days().take_while(move |d| *d <= to)
}

/// 양 끝 포함 달력일수
pub fn span_days(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days() + 1
}

/// 분 단위 차이 (음수 가능)
pub fn minutes_between(from: NaiveDateTime, to: NaiveDateTime) -> i64 {
    (to - from).num_minutes()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_year_month_parse_and_display() {
        let month = YearMonth::parse("2026-02").unwrap();
        assert_eq!(month.year, 2026);
        assert_eq!(month.month, 2);
        assert_eq!(month.to_string(), "2026-02");

        assert!(YearMonth::parse("2026-13").is_err());
        assert!(YearMonth::parse("202602").is_err());
        assert!(YearMonth::parse("999999-01").is_err());
        assert!(YearMonth::parse("0-05").is_err());
    }

    #[test]
    fn test_year_month_bounds() {
        let feb = YearMonth::parse("2028-02").unwrap();
        assert_eq!(feb.first_day(), date(2028, 2, 1));
        assert_eq!(feb.last_day(), date(2028, 2, 29));
        assert_eq!(feb.days(), 29);

        let dec = YearMonth::parse("2026-12").unwrap();
        assert_eq!(dec.last_day(), date(2026, 12, 31));
        assert_eq!(dec.next().to_string(), "2027-01");
    }

    #[test]
    fn test_year_month_serde_as_string() {
        let month = YearMonth::parse("2026-10").unwrap();
        let json = serde_json::to_string(&month).unwrap();
        assert_eq!(json, "\"2026-10\"");

        let back: YearMonth = serde_json::from_str(&json).unwrap();
        assert_eq!(back, month);
    }

    #[test]
    fn test_shift_bounds_crossing_midnight() {
        let work_date = date(2026, 10, 1);
        let (start, end) = shift_bounds(
            work_date,
            parse_hhmm("18:00").unwrap(),
            parse_hhmm("02:00").unwrap(),
        );

        assert_eq!(start, work_date.and_hms_opt(18, 0, 0).unwrap());
        assert_eq!(end, date(2026, 10, 2).and_hms_opt(2, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_hhmm_rejects_garbage() {
        assert!(parse_hhmm("9시").is_err());
        assert!(parse_hhmm("25:00").is_err());
    }

    #[test]
    fn test_dates_between_inclusive() {
        let days: Vec<NaiveDate> = dates_between(date(2026, 10, 30), date(2026, 11, 1)).collect();
        assert_eq!(days, vec![date(2026, 10, 30), date(2026, 10, 31), date(2026, 11, 1)]);
        assert_eq!(span_days(date(2026, 10, 30), date(2026, 11, 1)), 3);
    }
}
