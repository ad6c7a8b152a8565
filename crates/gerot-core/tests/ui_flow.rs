use chrono::NaiveDate;
use gerot_core::alert::{AlertKind, AlertOrigin, AlertStage};
use gerot_core::config::UiConfig;
use gerot_core::dispatch::{Action, CompletionOutcome, Effect, UiState};
use gerot_core::filter::TaskFilter;
use gerot_core::task::{CompletionAction, TaskId};
use gerot_shared::{CompletionResponse, PageBootstrap, TaskDto};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("gerot_core=debug")
        .with_test_writer()
        .try_init();
}

fn task(id: &str, completed: bool, priority: u8) -> TaskDto {
    TaskDto {
        id: id.to_string(),
        task: format!("tarefa {id}"),
        completed,
        priority: Some(priority),
        estimated_time: None,
    }
}

fn checklist_state() -> UiState {
    init_tracing();
    let today = NaiveDate::from_ymd_opt(2026, 10, 17).expect("valid date");
    UiState::new(
        UiConfig::default(),
        PageBootstrap {
            tasks: vec![
                task("10", false, 3),
                task("11", true, 2),
                task("12", false, 1),
                task("13", false, 3),
            ],
            alerts: vec![],
        },
        today,
    )
}

/// Runs the dispatcher the way the browser would, firing every
/// delayed action immediately. Returns the effects that were not timers.
fn settle(state: &mut UiState, action: Action) -> Vec<Effect> {
    let mut queue = vec![action];
    let mut performed = Vec::new();
    while let Some(next) = queue.pop() {
        for effect in state.dispatch(next) {
            match effect {
                Effect::After { action, .. } => queue.push(action),
                other => performed.push(other),
            }
        }
    }
    performed
}

#[test]
fn failed_completion_keeps_checkbox_and_shows_error() {
    let mut state = checklist_state();
    let id = TaskId::new("10");

    let effects = state.dispatch(Action::ToggleTask {
        id: id.clone(),
        checked: true,
    });
    let request = match effects.as_slice() {
        [Effect::PostCompletion(request)] => request.clone(),
        other => panic!("expected a single post, got {other:?}"),
    };
    assert_eq!(request.action, CompletionAction::Complete);
    assert_eq!(state.board.progress().fraction_label(), "2/4");

    let effects = state.dispatch(Action::CompletionSettled {
        request,
        outcome: CompletionOutcome::Failed("HTTP 500".to_string()),
    });

    assert!(state.board.get(&id).is_some_and(|task| task.completed));
    assert_eq!(state.board.progress().fraction_label(), "2/4");

    let alert = &state.alerts.alerts()[0];
    assert_eq!(alert.kind, AlertKind::Error);
    assert_eq!(alert.kind.icon(), "exclamation-circle");
    assert_eq!(alert.message, "Erro ao completar tarefa");
    assert_eq!(
        effects,
        vec![Effect::After {
            delay_ms: 4_000,
            action: Action::FadeAlert(alert.id),
        }]
    );
}

#[test]
fn confirmed_completion_notifies_success() {
    let mut state = checklist_state();
    let effects = state.dispatch(Action::ToggleTask {
        id: TaskId::new("12"),
        checked: true,
    });
    let Some(Effect::PostCompletion(request)) = effects.into_iter().next() else {
        panic!("toggle should post");
    };

    state.dispatch(Action::CompletionSettled {
        request,
        outcome: CompletionOutcome::Answered(CompletionResponse {
            success: true,
            message: Some("Tarefa marcada como concluída".to_string()),
            completed_at: None,
        }),
    });
    let alert = &state.alerts.alerts()[0];
    assert_eq!(alert.kind, AlertKind::Success);
    assert_eq!(alert.message, "Tarefa completada!");
}

#[test]
fn copy_reports_success_and_failure() {
    let mut state = checklist_state();
    assert_eq!(
        state.dispatch(Action::CopyRequested {
            selector: "#checklist-link".to_string(),
        }),
        vec![Effect::CopyToClipboard {
            selector: "#checklist-link".to_string(),
        }]
    );
    assert!(state.alerts.alerts().is_empty());

    let copied = state.dispatch(Action::CopyFinished { ok: true });
    let alert = state.alerts.alerts()[0].clone();
    assert_eq!(alert.kind, AlertKind::Success);
    assert_eq!(alert.message, "Copiado para a área de transferência");
    assert_eq!(alert.origin, AlertOrigin::Notification);
    assert_eq!(
        copied,
        vec![Effect::After {
            delay_ms: 4_000,
            action: Action::FadeAlert(alert.id),
        }]
    );

    let failed = state.dispatch(Action::CopyFinished { ok: false });
    let alerts = state.alerts.alerts();
    assert_eq!(alerts.len(), 2);
    assert_eq!(alerts[0].kind, AlertKind::Warning);
    assert_eq!(alerts[0].message, "Não foi possível copiar");
    assert_eq!(alerts[1].id, alert.id);
    assert_eq!(
        failed,
        vec![Effect::After {
            delay_ms: 4_000,
            action: Action::FadeAlert(alerts[0].id),
        }]
    );
}

#[test]
fn unsuccessful_answer_is_silent_and_not_rolled_back() {
    let mut state = checklist_state();
    let effects = state.dispatch(Action::ToggleTask {
        id: TaskId::new("11"),
        checked: false,
    });
    let Some(Effect::PostCompletion(request)) = effects.into_iter().next() else {
        panic!("toggle should post");
    };
    assert_eq!(request.action, CompletionAction::Uncomplete);

    let effects = state.dispatch(Action::CompletionSettled {
        request,
        outcome: CompletionOutcome::Answered(CompletionResponse {
            success: false,
            message: None,
            completed_at: None,
        }),
    });
    assert!(effects.is_empty());
    assert!(state.alerts.alerts().is_empty());
    assert_eq!(state.board.progress().fraction_label(), "0/4");
}

#[test]
fn rapid_double_toggle_issues_two_requests() {
    let mut state = checklist_state();
    let id = TaskId::new("13");
    let first = state.dispatch(Action::ToggleTask { id: id.clone(), checked: true });
    let second = state.dispatch(Action::ToggleTask { id, checked: false });
    assert!(matches!(first.as_slice(), [Effect::PostCompletion(r)] if r.action == CompletionAction::Complete));
    assert!(matches!(second.as_slice(), [Effect::PostCompletion(r)] if r.action == CompletionAction::Uncomplete));
}

#[test]
fn notification_fades_then_disappears() {
    let mut state = checklist_state();
    let effects = state.dispatch(Action::Notify {
        kind: AlertKind::Warning,
        message: "Atenção".to_string(),
    });
    let Some(Effect::After { action: Action::FadeAlert(id), .. }) = effects.first().cloned() else {
        panic!("notification should schedule a fade");
    };

    let effects = state.dispatch(Action::FadeAlert(id));
    assert_eq!(state.alerts.get(id).map(|a| a.stage), Some(AlertStage::Fading));
    assert_eq!(
        effects,
        vec![Effect::After {
            delay_ms: 300,
            action: Action::RemoveAlert(id),
        }]
    );

    state.dispatch(Action::RemoveAlert(id));
    assert!(state.alerts.get(id).is_none());
}

#[test]
fn close_button_also_fades() {
    let mut state = checklist_state();
    settle(
        &mut state,
        Action::Notify {
            kind: AlertKind::Info,
            message: "x".to_string(),
        },
    );
    assert!(state.alerts.alerts().is_empty());

    state.dispatch(Action::Notify {
        kind: AlertKind::Info,
        message: "y".to_string(),
    });
    let id = state.alerts.alerts()[0].id;
    let effects = state.dispatch(Action::DismissAlert(id));
    assert!(state.alerts.get(id).is_some());
    assert!(matches!(
        effects.as_slice(),
        [Effect::After { action: Action::RemoveAlert(_), .. }]
    ));
}

#[test]
fn filter_then_toggle_recomputes_visibility() {
    let mut state = checklist_state();
    state.dispatch(Action::SetFilter(TaskFilter::Pending));
    assert_eq!(state.board.visible().count(), 3);

    state.dispatch(Action::ToggleTask {
        id: TaskId::new("10"),
        checked: true,
    });
    assert_eq!(state.board.visible().count(), 2);
    assert_eq!(state.board.tasks().len(), 4);
}

#[test]
fn sidebar_outside_click_flow() {
    let mut state = checklist_state();
    let effects = state.dispatch(Action::ToggleSidebar { viewport_width: 375 });
    assert_eq!(
        effects,
        vec![Effect::After {
            delay_ms: 100,
            action: Action::ArmSidebarOutsideClick,
        }]
    );
    assert!(state.sidebar.is_active());

    state.dispatch(Action::ArmSidebarOutsideClick);
    state.dispatch(Action::DocumentClicked { inside_sidebar: true });
    assert!(state.sidebar.is_active());
    state.dispatch(Action::DocumentClicked { inside_sidebar: false });
    assert!(!state.sidebar.is_active());
    assert!(!state.sidebar.outside_click_armed());
}

#[test]
fn escape_and_save_shortcuts() {
    let mut state = checklist_state();
    settle(&mut state, Action::OpenModal("nova-rotina".to_string()));
    assert!(state.modals.is_open("nova-rotina"));

    let effects = state.dispatch(Action::EscapePressed);
    assert_eq!(effects, vec![Effect::SetScrollLock(false)]);
    assert!(state.dispatch(Action::EscapePressed).is_empty());
    assert_eq!(state.dispatch(Action::SaveShortcut), vec![Effect::ClickSave]);
}

#[test]
fn loading_overlay_lifecycle() {
    let mut state = checklist_state();
    state.dispatch(Action::FormSubmitted);
    assert!(state.loading);
    state.dispatch(Action::PageUnload);
    assert!(!state.loading);
}

#[test]
fn adding_rows_focuses_the_new_title() {
    let mut state = checklist_state();
    let effects = state.dispatch(Action::AddTaskRow);
    let row = state.editor.rows().last().expect("row added");
    assert_eq!(row.placeholder, "Digite a tarefa 2");
    assert_eq!(
        effects,
        vec![Effect::FocusElement {
            element_id: row.title_input_id(),
        }]
    );
}
