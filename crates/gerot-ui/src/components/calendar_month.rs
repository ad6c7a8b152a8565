use gerot_core::calendar::{
  CalendarCell,
  MonthGrid,
  WEEKDAY_LABELS
};
use yew::{
  Html,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct CalendarMonthProps {
  pub grid: MonthGrid
}

#[function_component(CalendarMonth)]
pub fn calendar_month(
  props: &CalendarMonthProps
) -> Html {
  let grid = &props.grid;

  html! {
      <div id="calendar" class="calendar">
          <div id="calendar-header" class="calendar-header">
              { grid.title() }
          </div>
          <div class="calendar-grid">
              {
                  for WEEKDAY_LABELS.iter().map(|label| html! {
                      <div class="calendar-weekday">{ *label }</div>
                  })
              }
              {
                  for grid.weeks.iter().flat_map(|week| week.iter()).map(render_cell)
              }
          </div>
      </div>
  }
}

fn render_cell(
  cell: &CalendarCell
) -> Html {
  match cell {
    | CalendarCell::Padding => html! {
        <div class="calendar-day empty"></div>
    },
    | CalendarCell::Day(day) => html! {
        <div
            class={classes!("calendar-day", day.is_today.then_some("today"))}
            data-date={day.key()}
        >
            <span class="day-number">{ day.day_number() }</span>
        </div>
    }
  }
}
