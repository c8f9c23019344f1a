//! 근태 판정 계산기
//!
//! DB에 의존하지 않는 순수 함수들입니다. 서비스는 조회한 직원/기록을 넘기고
//! 결과를 그대로 저장합니다.
//!
//! - 지각: 예정 출근 시각 이후 분이 유예 시간을 초과하면 전체 분을 지각으로 기록
//! - 휴게: 체류 시간이 기준(기본 300분) 이상이면 휴게 분(기본 60분) 차감
//! - 조퇴: 예정 퇴근 시각 이전에 퇴근한 분
//! - 연장근무: 예정 퇴근 시각 이후 분을 인정 단위(기본 30분)로 내림
//! - 근무일: 전날/당일/다음날 중 예정 출근 시각이 출근 시점에 가장 가까운 날

use std::collections::HashSet;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use crate::config::AttendanceRules;
use crate::domain::dto::attendance::AttendanceSummary;
use crate::domain::entities::hr::attendance_log::AttendanceLog;
use crate::domain::models::status::OvertimeStatus;
use crate::errors::errors::AppError;
use crate::utils::date_utils::{minutes_between, shift_bounds, YearMonth};

/// 출근 시점 판정 결과
#[derive(Debug, Clone, PartialEq)]
pub struct ClockInJudgement {
    pub work_date: NaiveDate,
    pub scheduled_start: NaiveDateTime,
    pub scheduled_end: NaiveDateTime,
    pub late_minutes: i64,
}

/// 퇴근 시점 판정 결과
#[derive(Debug, Clone, PartialEq)]
pub struct ClockOutJudgement {
    pub worked_minutes: i64,
    pub early_leave_minutes: i64,
    pub overtime_minutes: i64,
    pub overtime_status: OvertimeStatus,
}

/// 퇴근 기록을 찾을 때 예정 시각 앞뒤로 허용하는 폭
const SHIFT_MATCH_WINDOW_HOURS: i64 = 12;

/// `at` 기준 전날, 당일, 다음날
fn dates_around(at: NaiveDateTime) -> impl Iterator<Item = NaiveDate> {
    let today = at.date();
    [today.pred_opt(), Some(today), today.succ_opt()].into_iter().flatten()
}

pub fn judge_clock_in(
    at: NaiveDateTime,
    schedule: (NaiveTime, NaiveTime),
    rules: &AttendanceRules,
) -> ClockInJudgement {
    let (work_date, (scheduled_start, scheduled_end)) = dates_around(at)
        .map(|date| (date, shift_bounds(date, schedule.0, schedule.1)))
        .min_by_key(|(_, (start, _))| minutes_between(*start, at).abs())
        .unwrap_or_else(|| (at.date(), shift_bounds(at.date(), schedule.0, schedule.1)));

    let minutes_late = minutes_between(scheduled_start, at);
    let late_minutes = if minutes_late > rules.late_grace_minutes {
        minutes_late
    } else {
        0
    };

    ClockInJudgement {
        work_date,
        scheduled_start,
        scheduled_end,
        late_minutes,
    }
}

pub fn judge_clock_out(
    log: &AttendanceLog,
    at: NaiveDateTime,
    rules: &AttendanceRules,
) -> Result<ClockOutJudgement, AppError> {
    if at < log.clock_in {
        return Err(AppError::ValidationError(format!(
            "퇴근 시각({})이 출근 시각({})보다 빠릅니다",
            at, log.clock_in
        )));
    }

    let span = minutes_between(log.clock_in, at);
    let worked_minutes = if span >= rules.break_threshold_minutes {
        (span - rules.break_minutes).max(0)
    } else {
        span
    };

    let early_leave_minutes = minutes_between(at, log.scheduled_end).max(0);

    let raw_overtime = minutes_between(log.scheduled_end, at).max(0);
    let unit = rules.overtime_unit_minutes.max(1);
    let overtime_minutes = raw_overtime / unit * unit;

    let overtime_status = if overtime_minutes > 0 {
        OvertimeStatus::Pending
    } else {
        OvertimeStatus::None
    };

    Ok(ClockOutJudgement {
        worked_minutes,
        early_leave_minutes,
        overtime_minutes,
        overtime_status,
    })
}

/// 퇴근을 찍을 때 열린 기록을 찾아볼 근무일 후보
///
/// 예정 출근 12시간 전부터 예정 퇴근 12시간 후까지 `at`을 포함하는 근무일입니다.
/// 자정을 넘는 스케줄은 전날, 자정 직후 시작하는 스케줄은 다음날이 후보가 됩니다.
pub fn candidate_work_dates(at: NaiveDateTime, schedule: (NaiveTime, NaiveTime)) -> Vec<NaiveDate> {
    let window = Duration::hours(SHIFT_MATCH_WINDOW_HOURS);
    dates_around(at)
        .filter(|date| {
            let (start, end) = shift_bounds(*date, schedule.0, schedule.1);
            start - window <= at && at <= end + window
        })
        .collect()
}

/// 월간(또는 임의 기간) 근태 집계
pub fn summarize(
    store: &str,
    employee_name: &str,
    month: Option<YearMonth>,
    logs: &[AttendanceLog],
    holidays: &HashSet<NaiveDate>,
) -> AttendanceSummary {
    let mut summary = AttendanceSummary {
        store: store.to_string(),
        employee_name: employee_name.to_string(),
        month,
        ..Default::default()
    };

    for log in logs {
        let is_holiday = holidays.contains(&log.work_date);
        summary.work_days += 1;

        if log.is_open() {
            summary.missing_clock_out += 1;
        } else {
            summary.completed_days += 1;
        }

        if log.late_minutes > 0 {
            summary.late_count += 1;
        }
        summary.late_minutes += log.late_minutes;
        summary.early_leave_minutes += log.early_leave_minutes;
        summary.worked_minutes += log.worked_minutes;

        let regular = (log.worked_minutes - log.overtime_minutes).max(0);
        if is_holiday {
            summary.holiday_worked_minutes += log.worked_minutes;
            summary.holiday_regular_minutes += regular;
        } else {
            summary.regular_minutes += regular;
        }

        match log.overtime_status {
            OvertimeStatus::Approved if is_holiday => summary.holiday_overtime_minutes += log.overtime_minutes,
            OvertimeStatus::Approved => summary.approved_overtime_minutes += log.overtime_minutes,
            OvertimeStatus::Pending => summary.pending_overtime_minutes += log.overtime_minutes,
            OvertimeStatus::None | OvertimeStatus::Rejected => {}
        }
    }

    summary
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use mongodb::bson::DateTime;

    pub fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    /// 09:00-18:00 스케줄로 판정한 완료 기록
    pub fn closed_log(day: u32, clock_in: NaiveDateTime, clock_out: NaiveDateTime, overtime: OvertimeStatus) -> AttendanceLog {
        let rules = AttendanceRules::default();
        let schedule = (NaiveTime::from_hms_opt(9, 0, 0).unwrap(), NaiveTime::from_hms_opt(18, 0, 0).unwrap());
        let judged_in = judge_clock_in(clock_in, schedule, &rules);
        let now = DateTime::now();

        let mut log = AttendanceLog {
            id: None,
            employee_name: "홍길동".to_string(),
            store: "강남점".to_string(),
            work_date: NaiveDate::from_ymd_opt(2026, 10, day).unwrap(),
            clock_in,
            clock_out: None,
            scheduled_start: judged_in.scheduled_start,
            scheduled_end: judged_in.scheduled_end,
            late_minutes: judged_in.late_minutes,
            early_leave_minutes: 0,
            worked_minutes: 0,
            overtime_minutes: 0,
            overtime_status: OvertimeStatus::None,
            overtime_reviewer: None,
            note: None,
            created_at: now,
            updated_at: now,
        };

        let judged_out = judge_clock_out(&log, clock_out, &rules).unwrap();
        log.clock_out = Some(clock_out);
        log.worked_minutes = judged_out.worked_minutes;
        log.early_leave_minutes = judged_out.early_leave_minutes;
        log.overtime_minutes = judged_out.overtime_minutes;
        log.overtime_status = if judged_out.overtime_minutes > 0 { overtime } else { OvertimeStatus::None };
        log
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    fn nine_to_six() -> (NaiveTime, NaiveTime) {
        (NaiveTime::from_hms_opt(9, 0, 0).unwrap(), NaiveTime::from_hms_opt(18, 0, 0).unwrap())
    }

    #[test]
    fn test_on_time_clock_in_is_not_late() {
        let judged = judge_clock_in(at(1, 8, 55), nine_to_six(), &AttendanceRules::default());
        assert_eq!(judged.late_minutes, 0);
        assert_eq!(judged.scheduled_start, at(1, 9, 0));
        assert_eq!(judged.scheduled_end, at(1, 18, 0));
    }

    #[test]
    fn test_grace_period_then_full_minutes_count() {
        let rules = AttendanceRules { late_grace_minutes: 5, ..Default::default() };

        assert_eq!(judge_clock_in(at(1, 9, 5), nine_to_six(), &rules).late_minutes, 0);
        assert_eq!(judge_clock_in(at(1, 9, 12), nine_to_six(), &rules).late_minutes, 12);
    }

    #[test]
    fn test_clock_out_deducts_break_and_floors_overtime() {
        let log = closed_log(1, at(1, 9, 0), at(1, 18, 0), OvertimeStatus::Pending);
        let judged = judge_clock_out(&log, at(1, 19, 10), &AttendanceRules::default()).unwrap();

        // 10시간 10분 체류 - 휴게 60분
        assert_eq!(judged.worked_minutes, 550);
        assert_eq!(judged.early_leave_minutes, 0);
        assert_eq!(judged.overtime_minutes, 60);
        assert_eq!(judged.overtime_status, OvertimeStatus::Pending);
    }

    #[test]
    fn test_short_stay_keeps_break_and_counts_early_leave() {
        let log = closed_log(1, at(1, 9, 0), at(1, 18, 0), OvertimeStatus::None);
        let judged = judge_clock_out(&log, at(1, 13, 0), &AttendanceRules::default()).unwrap();

        assert_eq!(judged.worked_minutes, 240);
        assert_eq!(judged.early_leave_minutes, 300);
        assert_eq!(judged.overtime_minutes, 0);
        assert_eq!(judged.overtime_status, OvertimeStatus::None);
    }

    #[test]
    fn test_overtime_below_unit_is_not_recorded() {
        let log = closed_log(1, at(1, 9, 0), at(1, 18, 0), OvertimeStatus::None);
        let judged = judge_clock_out(&log, at(1, 18, 29), &AttendanceRules::default()).unwrap();

        assert_eq!(judged.overtime_minutes, 0);
        assert_eq!(judged.overtime_status, OvertimeStatus::None);
    }

    #[test]
    fn test_clock_out_before_clock_in_is_rejected() {
        let log = closed_log(1, at(1, 9, 0), at(1, 18, 0), OvertimeStatus::None);
        assert!(matches!(
            judge_clock_out(&log, at(1, 8, 0), &AttendanceRules::default()),
            Err(AppError::ValidationError(_))
        ));
    }

    fn hm(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    fn open_log(judged: &ClockInJudgement, clock_in: NaiveDateTime) -> AttendanceLog {
        let mut log = closed_log(1, at(1, 9, 0), at(1, 18, 0), OvertimeStatus::None);
        log.work_date = judged.work_date;
        log.clock_in = clock_in;
        log.clock_out = None;
        log.scheduled_start = judged.scheduled_start;
        log.scheduled_end = judged.scheduled_end;
        log.late_minutes = judged.late_minutes;
        log
    }

    #[test]
    fn test_night_shift_looks_back_one_day() {
        let night = (hm(18, 0), hm(2, 0));

        assert_eq!(candidate_work_dates(at(2, 2, 10), night), vec![at(1, 0, 0).date()]);
        assert_eq!(candidate_work_dates(at(2, 18, 0), nine_to_six()), vec![at(2, 0, 0).date()]);
    }

    #[test]
    fn test_night_shift_late_clock_in_after_midnight() {
        let rules = AttendanceRules::default();
        let night = (hm(18, 0), hm(2, 0));

        // 18:00 시작 근무에 다음날 00:30 출근 = 390분 지각
        let judged = judge_clock_in(at(3, 0, 30), night, &rules);
        assert_eq!(judged.work_date, at(2, 0, 0).date());
        assert_eq!(judged.scheduled_start, at(2, 18, 0));
        assert_eq!(judged.scheduled_end, at(3, 2, 0));
        assert_eq!(judged.late_minutes, 390);

        let log = open_log(&judged, at(3, 0, 30));
        assert_eq!(candidate_work_dates(at(3, 2, 0), night), vec![log.work_date]);

        let out = judge_clock_out(&log, at(3, 2, 0), &rules).unwrap();
        assert_eq!(out.worked_minutes, 90);
        assert_eq!(out.early_leave_minutes, 0);
        assert_eq!(out.overtime_minutes, 0);
    }

    #[test]
    fn test_night_shift_overtime_and_early_leave_across_midnight() {
        let rules = AttendanceRules::default();
        let night = (hm(18, 0), hm(2, 0));

        let judged = judge_clock_in(at(1, 17, 55), night, &rules);
        assert_eq!(judged.work_date, at(1, 0, 0).date());
        assert_eq!(judged.late_minutes, 0);
        let log = open_log(&judged, at(1, 17, 55));

        assert_eq!(candidate_work_dates(at(2, 3, 15), night), vec![at(1, 0, 0).date()]);
        let late_out = judge_clock_out(&log, at(2, 3, 15), &rules).unwrap();
        assert_eq!(late_out.overtime_minutes, 60);
        assert_eq!(late_out.overtime_status, OvertimeStatus::Pending);
        assert_eq!(late_out.early_leave_minutes, 0);

        let early_out = judge_clock_out(&log, at(2, 1, 15), &rules).unwrap();
        assert_eq!(early_out.early_leave_minutes, 45);
        assert_eq!(early_out.overtime_minutes, 0);
    }

    #[test]
    fn test_midnight_start_shift_clocked_in_the_evening_before() {
        let rules = AttendanceRules::default();
        let dawn = (hm(0, 0), hm(8, 0));

        let judged = judge_clock_in(at(1, 23, 50), dawn, &rules);
        assert_eq!(judged.work_date, at(2, 0, 0).date());
        assert_eq!(judged.scheduled_start, at(2, 0, 0));
        assert_eq!(judged.scheduled_end, at(2, 8, 0));
        assert_eq!(judged.late_minutes, 0);

        let log = open_log(&judged, at(1, 23, 50));
        assert!(candidate_work_dates(at(2, 8, 0), dawn).contains(&log.work_date));

        let out = judge_clock_out(&log, at(2, 8, 0), &rules).unwrap();
        assert_eq!(out.worked_minutes, 490 - 60);
        assert_eq!(out.early_leave_minutes, 0);
        assert_eq!(out.overtime_minutes, 0);
    }

    #[test]
    fn test_summary_splits_holiday_and_overtime() {
        let holiday = NaiveDate::from_ymd_opt(2026, 10, 13).unwrap();
        let holidays: HashSet<NaiveDate> = [holiday].into_iter().collect();

        let mut open = closed_log(14, at(14, 9, 0), at(14, 18, 0), OvertimeStatus::None);
        open.clock_out = None;
        open.worked_minutes = 0;

        let logs = vec![
            // 20분 지각, 정시 퇴근: 520분 체류 - 휴게 60분
            closed_log(12, at(12, 9, 20), at(12, 18, 0), OvertimeStatus::None),
            // 공휴일 근무 + 승인된 연장 60분
            closed_log(13, at(13, 9, 0), at(13, 19, 0), OvertimeStatus::Approved),
            open,
            // 연장 30분 대기
            closed_log(15, at(15, 9, 0), at(15, 18, 40), OvertimeStatus::Pending),
        ];

        let summary = summarize("강남점", "홍길동", YearMonth::parse("2026-10").ok(), &logs, &holidays);

        assert_eq!(summary.work_days, 4);
        assert_eq!(summary.completed_days, 3);
        assert_eq!(summary.missing_clock_out, 1);
        assert_eq!(summary.late_count, 1);
        assert_eq!(summary.late_minutes, 20);
        assert_eq!(summary.worked_minutes, 460 + 540 + 520);
        assert_eq!(summary.holiday_worked_minutes, 540);
        assert_eq!(summary.holiday_regular_minutes, 480);
        assert_eq!(summary.holiday_overtime_minutes, 60);
        assert_eq!(summary.approved_overtime_minutes, 0);
        assert_eq!(summary.pending_overtime_minutes, 30);
        assert_eq!(summary.regular_minutes, 460 + 490);
    }
}
