use gerot_core::editor::TaskFieldRow;
use gerot_core::task::Priority;
use gerot_core::validate::FieldErrors;
use yew::{
  AttrValue,
  Html,
  Properties,
  classes,
  function_component,
  html
};

use super::InlineError;

pub const ROUTINE_FORM_ID: &str =
  "form-rotina";
const DESCRIPTION_FIELD: &str =
  "description";

#[derive(Properties, PartialEq)]
pub struct TaskFieldsEditorProps {
  pub rows:   Vec<TaskFieldRow>,
  pub errors: FieldErrors,
  pub action: AttrValue
}

/// Routine form. Field names match what the server reads on submit:
/// `description`, then one `tasks`/`priorities`/`estimated_times`
/// triple per row.
#[function_component(TaskFieldsEditor)]
pub fn task_fields_editor(
  props: &TaskFieldsEditorProps
) -> Html {
  let description_error = props
    .errors
    .get(DESCRIPTION_FIELD)
    .cloned();

  html! {
      <form
          id={ROUTINE_FORM_ID}
          class="routine-form"
          method="post"
          action={props.action.clone()}
          data-loading=""
      >
          <div class="form-group">
              <label for={DESCRIPTION_FIELD}>{ "Descrição" }</label>
              <input
                  type="text"
                  id={DESCRIPTION_FIELD}
                  name={DESCRIPTION_FIELD}
                  class={classes!("form-control", description_error.is_some().then_some("error"))}
                  placeholder="Ex.: Abertura da loja"
                  required=true
              />
              <InlineError error={description_error} />
          </div>

          <div id="tasks-container" class="tasks-container">
              { for props.rows.iter().map(|row| render_row(row, &props.errors)) }
          </div>

          <div class="form-actions">
              <button
                  type="button"
                  id="add-task-btn"
                  class="btn btn-secondary"
                  data-add-row=""
              >
                  <i class="fas fa-plus"></i>
                  { " Adicionar tarefa" }
              </button>
              <button type="submit" class="btn btn-primary btn-save">
                  { "Salvar rotina" }
              </button>
          </div>
      </form>
  }
}

fn render_row(
  row: &TaskFieldRow,
  errors: &FieldErrors
) -> Html {
  let key = row.key.to_string();
  let title_id = row.title_input_id();
  let title_error =
    errors.get(&title_id).cloned();
  let estimate = row
    .estimated_minutes
    .map(|minutes| minutes.to_string())
    .unwrap_or_default();

  html! {
      <div key={key.clone()} class="task-field-row" data-row-key={key.clone()}>
          <input
              type="text"
              id={title_id}
              name="tasks"
              class={classes!("form-control", title_error.is_some().then_some("error"))}
              placeholder={row.placeholder.clone()}
              value={row.title.clone()}
              data-row-field="title"
              required=true
          />
          <select
              name="priorities"
              class="form-control priority-select"
              data-row-field="priority"
          >
              {
                  for Priority::all().into_iter().map(|priority| html! {
                      <option
                          value={priority.level().to_string()}
                          selected={priority == row.priority}
                      >
                          { priority.label() }
                      </option>
                  })
              }
          </select>
          <input
              type="number"
              min="1"
              name="estimated_times"
              class="form-control estimate-input"
              placeholder="min"
              value={estimate}
              data-row-field="estimate"
          />
          <button
              type="button"
              class="btn btn-icon"
              data-remove-row={key}
              aria-label="Remover tarefa"
          >
              <i class="fas fa-trash"></i>
          </button>
          <InlineError error={title_error} />
      </div>
  }
}
