//! Application module
//!
//! Contains the main application logic and event handling.
//!
//! # Module Structure
//! - `state` - Application state types (AppState, AppMode)
//! - Main module - App struct and event loop
//!
//! The app owns at most one open [`EmployeeForm`]. The form's close callback
//! posts a [`FormMessage`] on a channel that the loop drains after each key
//! event, which is where the form is torn down and the store is persisted.

mod state;

pub use state::{AppMode, AppState};

use crate::components::keybindings::{KeyAction, KeybindingContext};
use crate::employee::EmployeeId;
use crate::error::{OrgChartError, Result};
use crate::form::{EmployeeForm, SubmitOutcome};
use crate::store::{lock_store, SharedStore};
use crate::store_file::StoreSnapshot;
use crate::theme::StatusKind;
use crate::ui::UiRenderer;
use crate::validation::Field;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{backend::Backend, Frame, Terminal};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Messages sent from an open form back to the app loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMessage {
    /// The form finished a successful submit
    Closed,
}

/// Main application struct
pub struct App {
    state: AppState,
    store: SharedStore,
    form: Option<EmployeeForm>,
    ui_renderer: UiRenderer,
    /// Keybinding context for key resolution and navigation hints
    keybinding_context: KeybindingContext,
    /// Where the store is written after each successful submit
    save_path: Option<PathBuf>,
    /// Channel sender handed to each form's close callback
    form_tx: Sender<FormMessage>,
    /// Channel receiver drained by the main loop
    form_rx: Receiver<FormMessage>,
}

impl App {
    /// Create a new application instance
    pub fn new(store: SharedStore, save_path: Option<PathBuf>) -> Self {
        info!("Creating new App instance");
        let (form_tx, form_rx) = mpsc::channel();

        Self {
            state: AppState::default(),
            store,
            form: None,
            ui_renderer: UiRenderer::new(),
            keybinding_context: KeybindingContext::new(),
            save_path,
            form_tx,
            form_rx,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    /// Currently open form, if any
    pub fn form(&self) -> Option<&EmployeeForm> {
        self.form.as_ref()
    }

    /// Toggle help overlay visibility
    pub fn toggle_help(&mut self) {
        self.state.help_visible = !self.state.help_visible;
    }

    /// Run the main loop until the user quits
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        info!("Starting main application loop");

        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(|e| OrgChartError::terminal(format!("Failed to draw: {}", e)))?;

            if crossterm::event::poll(Duration::from_millis(100))? {
                if let Event::Key(key_event) = crossterm::event::read()? {
                    // Ignore release/repeat reports on terminals that send them
                    if key_event.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key_event(key_event)? {
                        break;
                    }
                }
            }

            self.poll_form_messages()?;
        }

        info!("Main loop finished");
        Ok(())
    }

    /// Draw the current frame
    pub fn render(&self, f: &mut Frame) {
        match lock_store(&self.store) {
            Ok(store) => self.ui_renderer.render(
                f,
                &self.state,
                store.list_employees(),
                self.form.as_ref(),
                &self.keybinding_context,
            ),
            Err(e) => self.ui_renderer.render_fatal(f, &e.to_string()),
        }
    }

    /// Handle keyboard input events. Returns `true` when the app should exit.
    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<bool> {
        if self.state.help_visible {
            if matches!(key_event.code, KeyCode::Char('?') | KeyCode::Esc) {
                self.toggle_help();
            }
            return Ok(false);
        }

        let mode = self.state.mode.clone();
        let action = self.keybinding_context.resolve(&mode, &key_event);
        debug!(?mode, ?action, code = ?key_event.code, "Key event");

        let exit = match mode {
            AppMode::EmployeeList => self.handle_list_key(action)?,
            AppMode::PositionForm => {
                self.handle_form_key(action, key_event)?;
                false
            }
        };

        self.poll_form_messages()?;
        Ok(exit)
    }

    fn handle_list_key(&mut self, action: Option<KeyAction>) -> Result<bool> {
        let len = lock_store(&self.store)?.len();

        match action {
            Some(KeyAction::NavigateUp) => {
                self.state.list_selection = self.state.list_selection.saturating_sub(1);
            }
            Some(KeyAction::NavigateDown) => {
                if self.state.list_selection + 1 < len {
                    self.state.list_selection += 1;
                }
            }
            Some(KeyAction::Home) => self.state.list_selection = 0,
            Some(KeyAction::End) => self.state.list_selection = len.saturating_sub(1),
            Some(KeyAction::NewPosition) => self.open_form(None)?,
            Some(KeyAction::EditPosition) => match self.selected_employee_id()? {
                Some(id) => self.open_form(Some(id))?,
                None => self
                    .state
                    .set_status(StatusKind::Info, "No position selected"),
            },
            Some(KeyAction::Help) => self.toggle_help(),
            Some(KeyAction::Quit) => return Ok(true),
            _ => {}
        }
        Ok(false)
    }

    fn handle_form_key(&mut self, action: Option<KeyAction>, key_event: KeyEvent) -> Result<()> {
        let Some(form) = self.form.as_mut() else {
            // Form vanished underneath us; fall back to the list
            self.state.mode = AppMode::EmployeeList;
            return Ok(());
        };

        match action {
            Some(KeyAction::NextField) => form.focus_next(),
            Some(KeyAction::PrevField) => form.focus_prev(),
            Some(KeyAction::PrevOption) if form.focus() == Field::ParentId => {
                form.cycle_parent(false)?
            }
            Some(KeyAction::NextOption) if form.focus() == Field::ParentId => {
                form.cycle_parent(true)?
            }
            Some(KeyAction::DeleteChar) => form.delete_char(),
            Some(KeyAction::Submit) => {
                match form.submit()? {
                    SubmitOutcome::Rejected(errors) => {
                        self.state.set_status(StatusKind::Error, errors.to_string());
                    }
                    SubmitOutcome::Created(record) => {
                        self.state.set_status(
                            StatusKind::Success,
                            format!("Position added: {}", record.name),
                        );
                    }
                    SubmitOutcome::Updated { id, applied } => {
                        let message = if applied {
                            format!("Position {} updated", id)
                        } else {
                            format!("Position {} no longer exists; nothing updated", id)
                        };
                        self.state.set_status(StatusKind::Success, message);
                    }
                }
            }
            Some(KeyAction::Cancel) => {
                self.close_form();
                self.state.set_status(StatusKind::Info, "Edit cancelled");
            }
            None => {
                if let KeyCode::Char(c) = key_event.code {
                    if !key_event.modifiers.contains(KeyModifiers::CONTROL) {
                        form.insert_char(c);
                    }
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn selected_employee_id(&self) -> Result<Option<EmployeeId>> {
        let store = lock_store(&self.store)?;
        Ok(store
            .list_employees()
            .get(self.state.list_selection)
            .map(|e| e.id))
    }

    /// Open the position form, editing `employee_id` or creating a new record
    pub fn open_form(&mut self, employee_id: Option<EmployeeId>) -> Result<()> {
        let tx = self.form_tx.clone();
        let form = EmployeeForm::new(self.store.clone(), employee_id, move || {
            // Receiver lives as long as the app; a send failure means we are shutting down
            let _ = tx.send(FormMessage::Closed);
        })?;

        self.state.set_status(
            StatusKind::Info,
            format!("{}: fill in the fields and press Enter", form.title()),
        );
        self.form = Some(form);
        self.state.mode = AppMode::PositionForm;
        Ok(())
    }

    fn close_form(&mut self) {
        self.form = None;
        self.state.mode = AppMode::EmployeeList;
    }

    /// Drain close notifications from the open form
    pub fn poll_form_messages(&mut self) -> Result<()> {
        while let Ok(message) = self.form_rx.try_recv() {
            match message {
                FormMessage::Closed => {
                    let created = self.form.as_ref().is_some_and(|f| !f.is_edit());
                    self.close_form();

                    let len = lock_store(&self.store)?.len();
                    if created {
                        self.state.list_selection = len.saturating_sub(1);
                    }
                    self.state.clamp_selection(len);
                    self.persist();
                }
            }
        }
        Ok(())
    }

    /// Write the store to the save path, reporting failures in the status bar
    fn persist(&mut self) {
        let Some(path) = self.save_path.clone() else {
            return;
        };

        let snapshot = match lock_store(&self.store) {
            Ok(store) => StoreSnapshot::from_store(&store),
            Err(e) => {
                warn!("Cannot snapshot store: {}", e);
                self.state.set_status(StatusKind::Error, e.to_string());
                return;
            }
        };

        if let Err(e) = snapshot.save_to_file(&path) {
            warn!("Failed to save employees: {:#}", e);
            self.state
                .set_status(StatusKind::Error, format!("Save failed: {:#}", e));
        }
    }
}
