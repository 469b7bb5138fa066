use crate::api::TodoApi;
use crate::config::Config;
use crate::constants::APP_TITLE;
use crate::entities::{FilterStatus, UserId};
use crate::icons::IconService;
use crate::logger::Logger;
use crate::state::AppState;
use crate::ui::components::{
    DialogComponent, ErrorBanner, FooterComponent, NewTodoInput, StatusBar, TodoListComponent,
};
use crate::ui::core::{
    actions::{Action, DialogType, Focus},
    event_handler::EventType,
    task_manager::TaskManager,
    Component, ViewContext,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Root of the component tree. Owns the application state, routes keys to
/// the focused component and turns actions into state transitions and
/// background API calls.
pub struct AppComponent {
    // Component composition
    input: NewTodoInput,
    todo_list: TodoListComponent,
    footer: FooterComponent,
    banner: ErrorBanner,
    dialog: DialogComponent,

    // Application state
    state: AppState,
    icons: IconService,
    focus: Focus,

    // Services
    api: Arc<dyn TodoApi>,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,
    logger: Logger,

    user_id: UserId,
    error_dismiss_delay: Duration,
    should_quit: bool,
}

impl AppComponent {
    pub fn new(api: Arc<dyn TodoApi>, config: &Config) -> Self {
        let (task_manager, background_action_rx) = TaskManager::new();
        let logger = Logger::new();

        Self {
            input: NewTodoInput::new(),
            todo_list: TodoListComponent::new(),
            footer: FooterComponent::new(),
            banner: ErrorBanner::new(),
            dialog: DialogComponent::new(logger.clone()),
            state: AppState::new(),
            icons: IconService::new(config.ui.icon_theme),
            focus: Focus::Input,
            api,
            task_manager,
            background_action_rx,
            logger,
            user_id: config.api.user_id,
            error_dismiss_delay: config.ui.error_dismiss_delay(),
            should_quit: false,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn icons(&self) -> &IconService {
        &self.icons
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    pub fn is_dialog_visible(&self) -> bool {
        self.dialog.is_visible()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Request the todo list on startup
    pub fn trigger_initial_load(&mut self) {
        self.logger
            .log(format!("AppComponent: Loading todos for user {}", self.user_id));
        self.task_manager.spawn_load(self.api.clone(), self.user_id);
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) -> Action {
        let action = match event_type {
            EventType::Key(key) => self.route_key(key),
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };
        self.dispatch(action)
    }

    /// Run an action through the dialog first, then apply it at app level
    pub fn dispatch(&mut self, action: Action) -> Action {
        let action = self.dialog.update(action);
        self.handle_app_action(action)
    }

    fn route_key(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.logger.log("Global key: Ctrl+C - quitting application".to_string());
            return Action::Quit;
        }

        let ctx = ViewContext::new(&self.state, &self.icons, self.focus);

        // Dialog has priority when visible
        if self.dialog.is_visible() {
            return self.dialog.handle_key_events(key, &ctx);
        }

        // Ctrl+X reaches the banner even while typing
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('x') {
            return if ctx.state.error.is_some() {
                Action::DismissError
            } else {
                Action::None
            };
        }

        if self.focus == Focus::Input {
            return self.input.handle_key_events(key, &ctx);
        }

        let action = self.todo_list.handle_key_events(key, &ctx);
        if !matches!(action, Action::None) {
            return action;
        }

        let action = self.footer.handle_key_events(key, &ctx);
        if !matches!(action, Action::None) {
            return action;
        }

        let action = self.banner.handle_key_events(key, &ctx);
        if !matches!(action, Action::None) {
            return action;
        }

        self.handle_global_key(key)
    }

    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => {
                self.logger.log("Global key: 'q' - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('i') | KeyCode::Tab | KeyCode::Esc => Action::FocusInput,
            KeyCode::Char('?') => {
                self.logger.log("Global key: '?' - opening help dialog".to_string());
                Action::ShowDialog(DialogType::Help)
            }
            KeyCode::Char('G') => {
                self.logger.log("Global key: 'G' - opening logs dialog".to_string());
                Action::ShowDialog(DialogType::Logs)
            }
            KeyCode::Char('T') => Action::CycleIconTheme,
            _ => Action::None,
        }
    }

    /// Apply an action to the application state.
    ///
    /// Any action that writes the error slot schedules a dismissal timer for
    /// the new error. Older timers stay harmless: they carry the generation of
    /// the error they were scheduled for and expire nothing once it has been
    /// replaced.
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        let generation_before = self.state.error_generation();
        let result = self.apply_action(action);

        if self.state.error_generation() != generation_before {
            self.schedule_error_expiry();
        }

        result
    }

    fn apply_action(&mut self, action: Action) -> Action {
        match action {
            Action::InputChar(c) => self.state.push_input(c),
            Action::InputBackspace => self.state.pop_input(),
            Action::SubmitNewTodo => match self.state.begin_create(self.user_id) {
                Some(draft) => {
                    self.logger.log(format!("Todo: Creating '{}'", draft.title));
                    self.task_manager.spawn_create(self.api.clone(), draft);
                }
                None if self.state.pending_create.is_some() => {
                    self.logger.log("Todo: Create already in progress, ignoring".to_string());
                }
                None => self.logger.log("Todo: Create not sent, title is empty".to_string()),
            },
            Action::FocusInput => self.focus = Focus::Input,
            Action::FocusList => self.focus = Focus::List,

            Action::NextTodo => self.todo_list.select_next(self.state.filtered_todos().len()),
            Action::PreviousTodo => self.todo_list.select_previous(self.state.filtered_todos().len()),
            Action::SetFilter(filter) => self.apply_filter(filter),
            Action::NextFilter => self.apply_filter(self.state.filter.next()),
            Action::PreviousFilter => self.apply_filter(self.state.filter.previous()),

            Action::ToggleTodo(id) => match self.state.begin_toggle(id) {
                Some(patch) => {
                    self.logger.log(format!("Todo: Toggling {} to completed={:?}", id, patch.completed));
                    self.task_manager.spawn_toggle(self.api.clone(), id, patch);
                }
                None => self.logger.log(format!("Todo: Toggle of {} ignored", id)),
            },
            Action::DeleteTodo(id) => {
                if self.state.begin_delete(id) {
                    self.logger.log(format!("Todo: Deleting {}", id));
                    self.task_manager.spawn_delete(self.api.clone(), id);
                } else {
                    self.logger.log(format!("Todo: Delete of {} ignored, another delete is running", id));
                }
            }
            Action::ClearCompleted => {
                let ids = self.state.begin_clear_completed();
                if ids.is_empty() {
                    self.logger.log("Todo: Nothing to clear".to_string());
                } else {
                    self.logger.log(format!("Todo: Clearing completed {:?}", ids));
                    self.task_manager.spawn_clear_completed(self.api.clone(), ids);
                }
            }

            Action::TodosLoaded(result) => {
                match &result {
                    Ok(todos) => self.logger.log(format!("API: Loaded {} todos", todos.len())),
                    Err(e) => self.logger.log(format!("API: Failed to load todos: {}", e)),
                }
                self.state.finish_load(result);
                self.restore_focus();
            }
            Action::TodoCreated(result) => {
                match &result {
                    Ok(todo) => self.logger.log(format!("API: Created todo {}", todo.id)),
                    Err(e) => self.logger.log(format!("API: Failed to create todo: {}", e)),
                }
                self.state.finish_create(result);
                self.restore_focus();
            }
            Action::TodoDeleted { id, result } => {
                match &result {
                    Ok(()) => self.logger.log(format!("API: Deleted todo {}", id)),
                    Err(e) => self.logger.log(format!("API: Failed to delete todo {}: {}", id, e)),
                }
                self.state.finish_delete(id, result);
                self.todo_list.clamp_selection(self.state.filtered_todos().len());
                self.restore_focus();
            }
            Action::TodoToggled { id, result } => {
                if let Err(e) = &result {
                    self.logger.log(format!("API: Failed to update todo {}: {}", id, e));
                }
                self.state.finish_toggle(id, result);
                self.todo_list.clamp_selection(self.state.filtered_todos().len());
            }
            Action::CompletedCleared(results) => {
                let failed = results.iter().filter(|(_, result)| result.is_err()).count();
                self.logger.log(format!(
                    "API: Clear completed settled, {} deleted, {} failed",
                    results.len() - failed,
                    failed
                ));
                self.state.finish_clear_completed(results);
                self.todo_list.clamp_selection(self.state.filtered_todos().len());
                self.restore_focus();
            }

            Action::DismissError => self.state.dismiss_error(),
            Action::ErrorExpired(generation) => {
                if self.state.expire_error(generation) {
                    self.logger.log(format!("Error: #{} expired", generation));
                }
            }

            Action::CycleIconTheme => {
                self.icons.cycle_icon_theme();
                self.logger.log(format!("UI: Icon theme is now {:?}", self.icons.theme()));
            }
            Action::ShowDialog(dialog_type) => {
                self.logger.log(format!("Dialog: Showing dialog {:?}", dialog_type));
            }
            Action::HideDialog => self.logger.log("Dialog: Hiding current dialog".to_string()),
            Action::DialogScrollUp | Action::DialogScrollDown => {}

            Action::Quit => {
                self.should_quit = true;
                return Action::Quit;
            }
            Action::None => {}
        }

        Action::None
    }

    fn apply_filter(&mut self, filter: FilterStatus) {
        self.logger.log(format!("Filter: {}", filter.label()));
        self.state.set_filter(filter);
        self.todo_list.reset_selection();
    }

    /// Send focus back to the input once nothing is in flight
    fn restore_focus(&mut self) {
        if self.state.should_focus_input() {
            self.focus = Focus::Input;
        }
    }

    fn schedule_error_expiry(&mut self) {
        if let Some(banner) = self.state.error {
            self.logger.log(format!("Error: #{} {}", banner.generation, banner.kind));
            self.task_manager
                .spawn_error_expiry(banner.generation, self.error_dismiss_delay);
        }
    }

    /// Process background actions from task manager
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();

        // Process all available background actions
        while let Ok(action) = self.background_action_rx.try_recv() {
            actions.push(action);
        }

        // Clean up finished tasks
        for (description, elapsed) in self.task_manager.cleanup_finished_tasks() {
            self.logger
                .log(format!("Background: '{}' finished in {:?}", description, elapsed));
        }

        actions
    }

    /// Wait for the next result from a background task
    pub async fn next_background_action(&mut self) -> Option<Action> {
        self.background_action_rx.recv().await
    }

    pub fn render(&mut self, f: &mut Frame, rect: Rect) {
        let layout = LayoutManager::main_layout(rect, self.state.show_footer(), self.state.error.is_some());
        let ctx = ViewContext::new(&self.state, &self.icons, self.focus);

        let title = Paragraph::new(APP_TITLE)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::LightRed).add_modifier(Modifier::BOLD));
        f.render_widget(title, layout.title);

        self.input.render(f, layout.input, &ctx);
        self.todo_list.render(f, layout.list, &ctx);
        if let Some(area) = layout.footer {
            self.footer.render(f, area, &ctx);
        }
        if let Some(area) = layout.banner {
            self.banner.render(f, area, &ctx);
        }
        StatusBar::render(f, layout.status, &ctx);

        // Render dialog on top if visible
        self.dialog.render(f, rect, &ctx);
    }
}
