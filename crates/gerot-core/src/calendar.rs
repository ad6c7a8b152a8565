use chrono::{
  Datelike,
  Duration,
  NaiveDate,
  Utc
};
use chrono_tz::Tz;

pub const GRID_MAX_ROWS: usize = 6;
pub const DAYS_PER_WEEK: usize = 7;

pub const WEEKDAY_LABELS: [&str; 7] = [
  "Dom", "Seg", "Ter", "Qua", "Qui",
  "Sex", "Sáb",
];

const MONTH_NAMES: [&str; 12] = [
  "Janeiro",
  "Fevereiro",
  "Março",
  "Abril",
  "Maio",
  "Junho",
  "Julho",
  "Agosto",
  "Setembro",
  "Outubro",
  "Novembro",
  "Dezembro"
];

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub struct CalendarDay {
  pub date:     NaiveDate,
  pub is_today: bool
}

impl CalendarDay {
  pub fn day_number(&self) -> u32 {
    self.date.day()
  }

  pub fn key(&self) -> String {
    date_key(self.date)
  }
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum CalendarCell {
  Padding,
  Day(CalendarDay)
}

impl CalendarCell {
  pub fn day(&self) -> Option<&CalendarDay> {
    match self {
      | Self::Padding => None,
      | Self::Day(day) => Some(day)
    }
  }

  pub fn is_padding(&self) -> bool {
    matches!(self, Self::Padding)
  }
}

pub type CalendarWeek =
  [CalendarCell; DAYS_PER_WEEK];

/// Sunday-first month grid. Rows stop as soon as the last day is
/// placed, so there is never a fully padded trailing row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
  pub year:  i32,
  pub month: u32,
  pub weeks: Vec<CalendarWeek>
}

impl MonthGrid {
  pub fn for_date(
    today: NaiveDate
  ) -> Self {
    let year = today.year();
    let month = today.month();
    let total_days =
      days_in_month(year, month);
    let leading = first_day_of_month(
      year, month
    )
    .weekday()
    .num_days_from_sunday()
      as usize;

    let mut weeks = Vec::new();
    let mut next_day = 1_u32;
    for row in 0..GRID_MAX_ROWS {
      let mut week = [CalendarCell::Padding;
        DAYS_PER_WEEK];
      for (column, cell) in
        week.iter_mut().enumerate()
      {
        if row == 0 && column < leading {
          continue;
        }
        if next_day > total_days {
          continue;
        }
        if let Some(date) =
          NaiveDate::from_ymd_opt(
            year, month, next_day
          )
        {
          *cell =
            CalendarCell::Day(CalendarDay {
              date,
              is_today: next_day
                == today.day()
            });
        }
        next_day += 1;
      }
      weeks.push(week);

      if next_day > total_days {
        break;
      }
    }

    tracing::debug!(
      year,
      month,
      rows = weeks.len(),
      leading,
      "built month grid"
    );

    Self {
      year,
      month,
      weeks
    }
  }

  pub fn title(&self) -> String {
    format!(
      "{} {}",
      month_name(self.month),
      self.year
    )
  }

  pub fn days(
    &self
  ) -> impl Iterator<Item = &CalendarDay>
  {
    self
      .weeks
      .iter()
      .flat_map(|week| week.iter())
      .filter_map(CalendarCell::day)
  }

  pub fn today(
    &self
  ) -> Option<&CalendarDay> {
    self.days().find(|day| day.is_today)
  }

  pub fn leading_padding(&self) -> usize {
    self
      .weeks
      .first()
      .map(|week| {
        week
          .iter()
          .take_while(|cell| {
            cell.is_padding()
          })
          .count()
      })
      .unwrap_or(0)
  }

  pub fn find(
    &self,
    key: &str
  ) -> Option<&CalendarDay> {
    let date = parse_date_key(key)?;
    self.days().find(|day| day.date == date)
  }
}

/// Receives clicks on calendar day cells.
pub trait DayDetailHandler {
  fn show_day(&self, date: NaiveDate);
}

/// Placeholder handler: only records which day was picked.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDayDetail;

impl DayDetailHandler for LogDayDetail {
  fn show_day(&self, date: NaiveDate) {
    tracing::info!(
      date = %date_key(date),
      "showing tasks for day"
    );
  }
}

pub fn month_name(
  month: u32
) -> &'static str {
  month
    .checked_sub(1)
    .and_then(|index| {
      MONTH_NAMES.get(index as usize)
    })
    .copied()
    .unwrap_or("")
}

pub fn date_key(
  date: NaiveDate
) -> String {
  date.format("%Y-%m-%d").to_string()
}

pub fn parse_date_key(
  raw: &str
) -> Option<NaiveDate> {
  NaiveDate::parse_from_str(
    raw.trim(),
    "%Y-%m-%d"
  )
  .ok()
}

pub fn today_in_timezone(
  timezone: Tz
) -> NaiveDate {
  Utc::now()
    .with_timezone(&timezone)
    .date_naive()
}

pub fn first_day_of_month(
  year: i32,
  month: u32
) -> NaiveDate {
  NaiveDate::from_ymd_opt(
    year, month, 1
  )
  .unwrap_or(NaiveDate::MIN)
}

pub fn last_day_of_month(
  year: i32,
  month: u32
) -> NaiveDate {
  let (next_year, next_month) =
    if month >= 12 {
      (year.saturating_add(1), 1_u32)
    } else {
      (year, month + 1)
    };
  add_days(
    first_day_of_month(
      next_year, next_month
    ),
    -1
  )
}

pub fn days_in_month(
  year: i32,
  month: u32
) -> u32 {
  last_day_of_month(year, month).day()
}

fn add_days(
  date: NaiveDate,
  days: i64
) -> NaiveDate {
  date
    .checked_add_signed(Duration::days(
      days
    ))
    .unwrap_or(date)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn date(
    year: i32,
    month: u32,
    day: u32
  ) -> NaiveDate {
    NaiveDate::from_ymd_opt(
      year, month, day
    )
    .expect("valid date")
  }

  #[test]
  fn wednesday_start_thirty_days() {
    // April 2026 starts on a Wednesday.
    let grid =
      MonthGrid::for_date(date(
        2026, 4, 10
      ));
    assert_eq!(grid.leading_padding(), 3);
    assert_eq!(grid.weeks.len(), 5);

    let first_row: Vec<Option<u32>> =
      grid.weeks[0]
        .iter()
        .map(|cell| {
          cell
            .day()
            .map(CalendarDay::day_number)
        })
        .collect();
    assert_eq!(
      first_row,
      vec![
        None,
        None,
        None,
        Some(1),
        Some(2),
        Some(3),
        Some(4)
      ]
    );
  }

  #[test]
  fn sunday_start_has_no_leading_padding()
  {
    // February 2026: starts Sunday, 28 days, exactly four rows.
    let grid =
      MonthGrid::for_date(date(
        2026, 2, 1
      ));
    assert_eq!(grid.leading_padding(), 0);
    assert_eq!(grid.weeks.len(), 4);
    assert!(grid.weeks.iter().all(
      |week| {
        week
          .iter()
          .all(|cell| !cell.is_padding())
      }
    ));
  }

  #[test]
  fn long_months_use_six_rows() {
    // August 2026 starts Saturday with 31 days.
    let grid =
      MonthGrid::for_date(date(
        2026, 8, 31
      ));
    assert_eq!(grid.leading_padding(), 6);
    assert_eq!(grid.weeks.len(), 6);
    let last = grid
      .weeks
      .last()
      .expect("last row");
    assert_eq!(
      last[1]
        .day()
        .map(CalendarDay::day_number),
      Some(31)
    );
    assert!(last[2..]
      .iter()
      .all(CalendarCell::is_padding));
  }

  #[test]
  fn every_month_has_one_today_and_all_days()
   {
    for year in [2024, 2025, 2026] {
      for month in 1..=12 {
        let total =
          days_in_month(year, month);
        for day in [1, 15, total] {
          let today =
            date(year, month, day);
          let grid =
            MonthGrid::for_date(today);
          assert_eq!(
            grid.days().count(),
            total as usize
          );
          assert_eq!(
            grid
              .days()
              .filter(|d| d.is_today)
              .count(),
            1
          );
          assert_eq!(
            grid.today().map(|d| d.date),
            Some(today)
          );
          assert_eq!(
            grid.leading_padding(),
            first_day_of_month(
              year, month
            )
            .weekday()
            .num_days_from_sunday()
              as usize
          );
          assert!(
            grid.weeks.len()
              <= GRID_MAX_ROWS
          );
          let last = grid
            .weeks
            .last()
            .expect("at least one row");
          assert!(
            last
              .iter()
              .any(|c| !c.is_padding())
          );
        }
      }
    }
  }

  #[test]
  fn rendering_is_idempotent() {
    let today = date(2026, 10, 17);
    assert_eq!(
      MonthGrid::for_date(today),
      MonthGrid::for_date(today)
    );
  }

  #[test]
  fn keys_are_zero_padded() {
    let grid =
      MonthGrid::for_date(date(
        2026, 3, 5
      ));
    let first = grid
      .days()
      .next()
      .expect("first day");
    assert_eq!(first.key(), "2026-03-01");
    assert_eq!(
      grid
        .find("2026-03-05")
        .map(|d| d.is_today),
      Some(true)
    );
    assert!(grid.find("2026-04-01").is_none());
  }

  #[test]
  fn title_uses_portuguese_month() {
    let grid =
      MonthGrid::for_date(date(
        2026, 10, 17
      ));
    assert_eq!(grid.title(), "Outubro 2026");
    assert_eq!(month_name(13), "");
  }
}
