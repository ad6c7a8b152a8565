use anyhow::anyhow;
use chrono::{
  DateTime,
  NaiveDate,
  NaiveDateTime,
  NaiveTime
};

/// Renders a date as `dd/mm/yyyy`.
///
/// Accepts `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM[:SS]` and RFC 3339.
#[tracing::instrument(level = "trace")]
pub fn format_date(
  raw: &str
) -> anyhow::Result<String> {
  let date = parse_date(raw.trim())
    .ok_or_else(|| {
      anyhow!("unrecognized date: {raw}")
    })?;
  Ok(date.format("%d/%m/%Y").to_string())
}

/// Renders a clock time as `HH:MM`.
#[tracing::instrument(level = "trace")]
pub fn format_time(
  raw: &str
) -> anyhow::Result<String> {
  let token = raw.trim();
  let time = ["%H:%M:%S", "%H:%M"]
    .iter()
    .find_map(|pattern| {
      NaiveTime::parse_from_str(
        token, pattern
      )
      .ok()
    })
    .ok_or_else(|| {
      anyhow!("unrecognized time: {raw}")
    })?;
  Ok(time.format("%H:%M").to_string())
}

fn parse_date(
  token: &str
) -> Option<NaiveDate> {
  if let Ok(date) =
    NaiveDate::parse_from_str(
      token, "%Y-%m-%d"
    )
  {
    return Some(date);
  }

  if let Ok(stamp) =
    DateTime::parse_from_rfc3339(token)
  {
    return Some(stamp.date_naive());
  }

  ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"]
    .iter()
    .find_map(|pattern| {
      NaiveDateTime::parse_from_str(
        token, pattern
      )
      .ok()
    })
    .map(|stamp| stamp.date())
}
