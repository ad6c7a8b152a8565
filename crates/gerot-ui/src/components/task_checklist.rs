use gerot_core::filter::TaskFilter;
use gerot_core::format::format_date;
use gerot_core::task::{
  TaskBoard,
  TaskView
};
use yew::{
  AttrValue,
  Html,
  Properties,
  classes,
  function_component,
  html
};

use crate::app::ROUTINE_MODAL_ID;

#[derive(Properties, PartialEq)]
pub struct TaskChecklistProps {
  pub board:      TaskBoard,
  /// `YYYY-MM-DD` of the day being shown.
  pub day:        AttrValue,
  pub share_link: AttrValue
}

#[function_component(TaskChecklist)]
pub fn task_checklist(
  props: &TaskChecklistProps
) -> Html {
  let board = &props.board;
  let progress = board.progress();
  let active_filter = board.filter();
  let day_label =
    format_date(&props.day).ok();

  html! {
      <section class="checklist-page">
          <div class="page-header">
              <h2>
                  { "Checklist do dia" }
                  {
                      for day_label.map(|label| html! {
                          <small class="page-date">{ format!(" {label}") }</small>
                      })
                  }
              </h2>
              <button
                  type="button"
                  class="btn btn-primary"
                  data-modal-target={ROUTINE_MODAL_ID}
              >
                  <i class="fas fa-plus"></i>
                  { " Nova rotina" }
              </button>
          </div>

          <form id="checklist-day" method="get" action="/" data-loading="">
              <input
                  type="date"
                  name="date"
                  class="form-control"
                  value={props.day.clone()}
                  data-auto-submit=""
              />
          </form>

          <div class="progress">
              <div class="progress-bar" style={progress.width_style()}></div>
          </div>
          <p class="progress-text">{ progress.label() }</p>

          <div class="filter-bar">
              {
                  for TaskFilter::all().into_iter().map(|filter| html! {
                      <button
                          type="button"
                          class={classes!("filter-btn", (filter == active_filter).then_some("active"))}
                          data-filter={filter.as_tag()}
                      >
                          { filter.label() }
                      </button>
                  })
              }
          </div>

          if board.tasks().is_empty() {
              <p class="empty-state">{ "Nenhuma tarefa para hoje" }</p>
          } else {
              <div class="checklist">
                  { for board.tasks().iter().map(|task| render_task(task, board.is_visible(task))) }
              </div>
          }

          <div class="share-link">
              <input
                  id="checklist-link"
                  class="form-control"
                  readonly=true
                  value={props.share_link.clone()}
              />
              <button type="button" class="btn" data-copy="#checklist-link" title="Copiar link">
                  <i class="fas fa-copy"></i>
              </button>
          </div>
      </section>
  }
}

fn render_task(
  task: &TaskView,
  visible: bool
) -> Html {
  let checkbox_id =
    format!("task-{}", task.id);
  let display = if visible {
    "display: flex"
  } else {
    "display: none"
  };

  html! {
      <div
          key={task.id.as_str().to_string()}
          class={classes!("checklist-item", task.completed.then_some("completed"))}
          style={display}
      >
          <input
              type="checkbox"
              class="task-checkbox"
              id={checkbox_id.clone()}
              value={task.id.as_str().to_string()}
              checked={task.completed}
          />
          <label for={checkbox_id}>{ task.title.clone() }</label>
          {
              for task.priority.map(|priority| html! {
                  <span class={classes!("priority-badge", priority.as_class())}>
                      { priority.label() }
                  </span>
              })
          }
          {
              for task.estimated_minutes.map(|minutes| html! {
                  <span class="task-time">
                      <i class="far fa-clock"></i>
                      { format!(" {minutes} min") }
                  </span>
              })
          }
      </div>
  }
}
