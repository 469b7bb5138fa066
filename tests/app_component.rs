mod common;

use common::{test_config, todo, MockTodoApi};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::Duration;
use todoterm::constants::{ERROR_EMPTY_TITLE, ERROR_UNABLE_TO_ADD, ERROR_UNABLE_TO_DELETE, ERROR_UNABLE_TO_LOAD};
use todoterm::state::ErrorKind;
use todoterm::ui::core::{Action, EventType, Focus};
use todoterm::ui::AppComponent;
use todoterm::FilterStatus;

fn key(code: KeyCode) -> EventType {
    EventType::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn press(app: &mut AppComponent, code: KeyCode) {
    app.handle_event(key(code));
}

fn type_text(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Wait for the next background result and apply it
async fn settle(app: &mut AppComponent) -> Action {
    let action = app
        .next_background_action()
        .await
        .expect("background channel closed");
    app.dispatch(action.clone());
    action
}

async fn loaded_app(api: Arc<MockTodoApi>) -> AppComponent {
    let mut app = AppComponent::new(api, &test_config());
    app.trigger_initial_load();
    settle(&mut app).await;
    app
}

fn ids(app: &AppComponent) -> Vec<u64> {
    app.state().todos.iter().map(|todo| todo.id).collect()
}

#[tokio::test]
async fn test_initial_load_populates_list() {
    let api = MockTodoApi::new(vec![todo(1, "Buy milk", false), todo(2, "Walk dog", true)]);
    let mut app = AppComponent::new(api.clone(), &test_config());
    assert!(app.state().loading);

    app.trigger_initial_load();
    let action = settle(&mut app).await;

    assert!(matches!(action, Action::TodosLoaded(Ok(_))));
    assert!(!app.state().loading);
    assert_eq!(ids(&app), vec![1, 2]);
    assert_eq!(app.state().remaining_count(), 1);
    assert_eq!(app.focus(), Focus::Input);
    assert_eq!(api.call_count("list"), 1);
}

#[tokio::test(start_paused = true)]
async fn test_load_failure_banner_expires_after_delay() {
    let api = MockTodoApi::new(vec![]);
    api.fail_list();
    let mut app = loaded_app(api).await;

    assert!(!app.state().loading);
    assert!(app.state().todos.is_empty());
    assert_eq!(app.state().error_message(), Some(ERROR_UNABLE_TO_LOAD));

    let started = tokio::time::Instant::now();
    let action = settle(&mut app).await;

    assert!(matches!(action, Action::ErrorExpired(_)));
    assert!(started.elapsed() >= Duration::from_secs(3));
    assert!(app.state().error.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_stale_timer_does_not_clear_newer_error() {
    let api = MockTodoApi::new(vec![]);
    api.fail_list();
    let mut app = loaded_app(api).await;
    let first = app.state().error.unwrap().generation;

    tokio::time::advance(Duration::from_secs(2)).await;
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.state().error_message(), Some(ERROR_EMPTY_TITLE));

    // The first error's timer fires but the banner now belongs to the second
    let action = settle(&mut app).await;
    assert!(matches!(action, Action::ErrorExpired(generation) if generation == first));
    assert_eq!(app.state().error_message(), Some(ERROR_EMPTY_TITLE));

    let action = settle(&mut app).await;
    assert!(matches!(action, Action::ErrorExpired(_)));
    assert!(app.state().error.is_none());
}

#[tokio::test]
async fn test_blank_title_is_rejected_without_request() {
    let api = MockTodoApi::new(vec![]);
    let mut app = loaded_app(api.clone()).await;

    type_text(&mut app, "   ");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.state().error.map(|e| e.kind), Some(ErrorKind::EmptyTitle));
    assert!(app.state().pending_create.is_none());
    assert_eq!(api.call_count("create"), 0);
}

#[tokio::test]
async fn test_create_appends_todo_and_clears_input() {
    let api = MockTodoApi::new(vec![todo(1, "Existing", false)]);
    let mut app = loaded_app(api.clone()).await;

    type_text(&mut app, "  Buy milk ");
    press(&mut app, KeyCode::Enter);

    let pending = app.state().pending_create.clone().unwrap();
    assert_eq!(pending.title, "Buy milk");
    assert!(!pending.completed);

    // The input is frozen while the request is in flight
    type_text(&mut app, "x");
    assert_eq!(app.state().input, "  Buy milk ");

    settle(&mut app).await;

    let last = app.state().todos.last().unwrap();
    assert_eq!(last.title, "Buy milk");
    assert_eq!(last.id, 2);
    assert!(app.state().input.is_empty());
    assert!(app.state().pending_create.is_none());
    assert_eq!(app.focus(), Focus::Input);
}

#[tokio::test]
async fn test_create_failure_keeps_input() {
    let api = MockTodoApi::new(vec![]);
    api.fail_create();
    let mut app = loaded_app(api).await;

    type_text(&mut app, "Keep me");
    press(&mut app, KeyCode::Enter);
    settle(&mut app).await;

    assert_eq!(app.state().input, "Keep me");
    assert!(app.state().todos.is_empty());
    assert!(app.state().pending_create.is_none());
    assert_eq!(app.state().error_message(), Some(ERROR_UNABLE_TO_ADD));
}

#[tokio::test]
async fn test_second_submit_while_creating_is_ignored() {
    let api = MockTodoApi::new(vec![]);
    let mut app = loaded_app(api.clone()).await;

    type_text(&mut app, "Once");
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);
    settle(&mut app).await;

    assert_eq!(api.call_count("create"), 1);
    assert_eq!(app.state().todos.len(), 1);
}

#[tokio::test]
async fn test_delete_removes_selected_todo() {
    let api = MockTodoApi::new(vec![todo(1, "First", false), todo(2, "Second", false)]);
    let mut app = loaded_app(api.clone()).await;

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus(), Focus::List);
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('d'));
    assert_eq!(app.state().pending_delete, Some(2));

    settle(&mut app).await;

    assert_eq!(ids(&app), vec![1]);
    assert!(app.state().pending_delete.is_none());
    assert_eq!(app.focus(), Focus::Input);
}

#[tokio::test]
async fn test_delete_failure_keeps_row() {
    let api = MockTodoApi::new(vec![todo(1, "Sticky", false)]);
    api.fail_delete(1);
    let mut app = loaded_app(api).await;

    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Delete);
    settle(&mut app).await;

    assert_eq!(ids(&app), vec![1]);
    assert_eq!(app.state().error_message(), Some(ERROR_UNABLE_TO_DELETE));
}

#[tokio::test]
async fn test_clear_completed_keeps_failed_deletes() {
    let api = MockTodoApi::new(vec![todo(1, "Done", true), todo(2, "Also done", true), todo(3, "Open", false)]);
    api.fail_delete(2);
    let mut app = loaded_app(api.clone()).await;

    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('C'));
    assert!(app.state().bulk_delete_in_progress);

    // A second request while the first is running does nothing
    press(&mut app, KeyCode::Char('C'));

    let action = settle(&mut app).await;
    assert!(matches!(action, Action::CompletedCleared(ref results) if results.len() == 2));

    assert_eq!(ids(&app), vec![2, 3]);
    assert!(!app.state().bulk_delete_in_progress);
    assert_eq!(app.state().error_message(), Some(ERROR_UNABLE_TO_DELETE));
    assert_eq!(api.call_count("delete"), 2);
}

#[tokio::test(start_paused = true)]
async fn test_clear_completed_runs_deletes_concurrently() {
    let api = MockTodoApi::new(vec![
        todo(1, "First", true),
        todo(2, "Second", true),
        todo(3, "Third", true),
        todo(4, "Open", false),
    ]);
    // The first id fails before the others have answered
    api.delay_delete(1, Duration::from_millis(100));
    api.delay_delete(2, Duration::from_millis(300));
    api.delay_delete(3, Duration::from_millis(200));
    api.fail_delete(1);
    let mut app = loaded_app(api.clone()).await;

    press(&mut app, KeyCode::Tab);
    let started = tokio::time::Instant::now();
    press(&mut app, KeyCode::Char('C'));
    let action = settle(&mut app).await;

    assert_eq!(api.max_deletes_in_flight(), 3);
    assert_eq!(api.deletes_finished(), 3);
    assert!(started.elapsed() < Duration::from_millis(600));

    let Action::CompletedCleared(results) = action else {
        panic!("expected CompletedCleared, got {:?}", action);
    };
    let order: Vec<u64> = results.iter().map(|(id, _)| *id).collect();
    assert_eq!(order, vec![1, 2, 3]);
    assert!(results[0].1.is_err());
    assert!(results[1].1.is_ok() && results[2].1.is_ok());

    assert_eq!(ids(&app), vec![1, 4]);
    assert_eq!(app.state().error_message(), Some(ERROR_UNABLE_TO_DELETE));
}

#[tokio::test(start_paused = true)]
async fn test_dropping_app_aborts_bulk_deletes() {
    let api = MockTodoApi::new(vec![todo(1, "First", true), todo(2, "Second", true)]);
    api.delay_delete(1, Duration::from_millis(100));
    api.delay_delete(2, Duration::from_millis(100));
    let mut app = loaded_app(api.clone()).await;

    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('C'));
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
    assert_eq!(api.max_deletes_in_flight(), 2);

    drop(app);
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
    tokio::time::advance(Duration::from_secs(1)).await;
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }

    assert_eq!(api.deletes_finished(), 0);
}

#[tokio::test]
async fn test_rows_being_cleared_ignore_toggle_and_delete() {
    let api = MockTodoApi::new(vec![todo(1, "Done", true)]);
    let mut app = loaded_app(api.clone()).await;

    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('C'));
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Char('d'));
    assert!(app.state().pending_toggle.is_none());
    assert!(app.state().pending_delete.is_none());

    settle(&mut app).await;

    assert!(app.state().todos.is_empty());
    assert_eq!(api.call_count("delete"), 1);
    assert_eq!(api.call_count("update"), 0);
}

#[tokio::test]
async fn test_row_being_deleted_cannot_be_toggled() {
    let api = MockTodoApi::new(vec![todo(1, "Going", false)]);
    let mut app = loaded_app(api.clone()).await;

    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Char(' '));
    assert!(app.state().pending_toggle.is_none());

    settle(&mut app).await;

    assert!(app.state().todos.is_empty());
    assert_eq!(api.call_count("delete"), 1);
    assert_eq!(api.call_count("update"), 0);
}

#[tokio::test]
async fn test_toggle_flips_completion() {
    let api = MockTodoApi::new(vec![todo(1, "Flip me", false)]);
    let mut app = loaded_app(api.clone()).await;

    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char(' '));
    assert_eq!(app.state().pending_toggle, Some(1));

    settle(&mut app).await;

    assert!(app.state().todos[0].completed);
    assert!(app.state().pending_toggle.is_none());
    assert_eq!(api.call_count("update"), 1);
}

#[tokio::test]
async fn test_toggle_failure_keeps_state() {
    let api = MockTodoApi::new(vec![todo(1, "Stubborn", false)]);
    api.fail_update();
    let mut app = loaded_app(api).await;

    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Enter);
    settle(&mut app).await;

    assert!(!app.state().todos[0].completed);
    assert_eq!(app.state().error.map(|e| e.kind), Some(ErrorKind::UnableToUpdate));
}

#[tokio::test]
async fn test_filter_keys() {
    let api = MockTodoApi::new(vec![todo(1, "Open", false), todo(2, "Done", true)]);
    let mut app = loaded_app(api).await;
    press(&mut app, KeyCode::Tab);

    press(&mut app, KeyCode::Char('2'));
    assert_eq!(app.state().filter, FilterStatus::Active);
    assert_eq!(app.state().filtered_todos().len(), 1);

    press(&mut app, KeyCode::Char('l'));
    assert_eq!(app.state().filter, FilterStatus::Completed);
    assert_eq!(app.state().filtered_todos()[0].id, 2);

    press(&mut app, KeyCode::Char('l'));
    assert_eq!(app.state().filter, FilterStatus::All);

    press(&mut app, KeyCode::Char('h'));
    assert_eq!(app.state().filter, FilterStatus::Completed);
}

#[tokio::test]
async fn test_footer_keys_need_todos() {
    let api = MockTodoApi::new(vec![]);
    let mut app = loaded_app(api).await;

    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('3'));
    assert_eq!(app.state().filter, FilterStatus::All);
}

#[tokio::test]
async fn test_dismiss_error_with_x() {
    let api = MockTodoApi::new(vec![]);
    api.fail_list();
    let mut app = loaded_app(api).await;

    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('x'));
    assert!(app.state().error.is_none());
}

#[tokio::test]
async fn test_ctrl_x_dismisses_error_while_typing() {
    let api = MockTodoApi::new(vec![]);
    let mut app = loaded_app(api).await;
    let ctrl_x = EventType::Key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL));

    // Without an error the chord neither dismisses nor types
    app.handle_event(ctrl_x.clone());
    assert!(app.state().input.is_empty());

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.state().error_message(), Some(ERROR_EMPTY_TITLE));
    assert_eq!(app.focus(), Focus::Input);

    app.handle_event(ctrl_x);
    assert!(app.state().error.is_none());
    assert!(app.state().input.is_empty());
    assert_eq!(app.focus(), Focus::Input);
}

#[tokio::test]
async fn test_help_dialog_opens_and_closes() {
    let api = MockTodoApi::new(vec![]);
    let mut app = loaded_app(api).await;

    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('?'));
    assert!(app.is_dialog_visible());

    // Keys go to the dialog while it is open
    press(&mut app, KeyCode::Char('j'));
    assert!(!app.should_quit());

    press(&mut app, KeyCode::Esc);
    assert!(!app.is_dialog_visible());
}

#[tokio::test]
async fn test_quit_keys() {
    let api = MockTodoApi::new(vec![]);
    let mut app = loaded_app(api.clone()).await;

    // 'q' is text while the input has focus
    press(&mut app, KeyCode::Char('q'));
    assert!(!app.should_quit());
    assert_eq!(app.state().input, "q");

    let action = app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    assert!(matches!(action, Action::Quit));
    assert!(app.should_quit());

    let mut app = loaded_app(api).await;
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_controller_events_are_logged() {
    let api = MockTodoApi::new(vec![todo(1, "Logged", false)]);
    let app = loaded_app(api).await;

    let logs = app.logger().get_logs();
    assert!(logs.iter().any(|line| line.contains("Loaded 1 todos")));
}
