//! Keybinding system for context-aware keyboard shortcuts
//!
//! Provides a registry of keybindings that change based on the current
//! application mode. The app loop resolves key events through this registry,
//! and the nav bar and help overlay render from the same definitions.

use crate::app::AppMode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    NavigateUp,
    NavigateDown,
    Home,
    End,
    NewPosition,
    EditPosition,
    Help,
    Quit,
    NextField,
    PrevField,
    PrevOption,
    NextOption,
    DeleteChar,
    Submit,
    Cancel,
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    pub display: String,
    pub description: String,
}

impl Keybinding {
    /// Create a new keybinding with no modifiers
    pub fn new(key: KeyCode, action: KeyAction, display: &str, description: &str) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Create a keybinding with modifiers
    pub fn with_modifiers(
        key: KeyCode,
        modifiers: KeyModifiers,
        action: KeyAction,
        display: &str,
        description: &str,
    ) -> Self {
        Self {
            key,
            modifiers,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Whether a key event triggers this binding. Shift is ignored so that
    /// terminals reporting `BackTab` with or without the modifier both match.
    fn matches(&self, event: &KeyEvent) -> bool {
        let significant = event.modifiers - KeyModifiers::SHIFT;
        self.key == event.code && (self.modifiers - KeyModifiers::SHIFT) == significant
    }
}

/// Context-aware keybinding registry
pub struct KeybindingContext {
    mode_bindings: HashMap<AppMode, Vec<Keybinding>>,
}

impl Default for KeybindingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingContext {
    /// Create a new keybinding context with default bindings
    pub fn new() -> Self {
        let mut ctx = Self {
            mode_bindings: HashMap::new(),
        };
        ctx.register_defaults();
        ctx
    }

    fn register_defaults(&mut self) {
        // Employee list
        self.mode_bindings.insert(
            AppMode::EmployeeList,
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Navigate up"),
                Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Navigate down"),
                Keybinding::new(KeyCode::Home, KeyAction::Home, "Home", "Go to first"),
                Keybinding::new(KeyCode::End, KeyAction::End, "End", "Go to last"),
                Keybinding::new(KeyCode::Char('a'), KeyAction::NewPosition, "A", "Add position"),
                Keybinding::new(KeyCode::Enter, KeyAction::EditPosition, "Enter", "Edit position"),
                Keybinding::new(KeyCode::Char('e'), KeyAction::EditPosition, "E", "Edit position"),
                Keybinding::new(KeyCode::Char('?'), KeyAction::Help, "?", "Help"),
                Keybinding::new(KeyCode::Char('q'), KeyAction::Quit, "Q", "Quit"),
                Keybinding::with_modifiers(
                    KeyCode::Char('c'),
                    KeyModifiers::CONTROL,
                    KeyAction::Quit,
                    "Ctrl+C",
                    "Quit",
                ),
            ],
        );

        // Position form. Printable characters are text input, so only
        // non-character keys are bound here.
        self.mode_bindings.insert(
            AppMode::PositionForm,
            vec![
                Keybinding::new(KeyCode::Tab, KeyAction::NextField, "Tab", "Next field"),
                Keybinding::new(KeyCode::Down, KeyAction::NextField, "Down", "Next field"),
                Keybinding::new(KeyCode::BackTab, KeyAction::PrevField, "S-Tab", "Previous field"),
                Keybinding::new(KeyCode::Up, KeyAction::PrevField, "Up", "Previous field"),
                Keybinding::new(KeyCode::Left, KeyAction::PrevOption, "Left", "Previous parent"),
                Keybinding::new(KeyCode::Right, KeyAction::NextOption, "Right", "Next parent"),
                Keybinding::new(KeyCode::Backspace, KeyAction::DeleteChar, "Bksp", "Delete"),
                Keybinding::new(KeyCode::Enter, KeyAction::Submit, "Enter", "Save"),
                Keybinding::new(KeyCode::Esc, KeyAction::Cancel, "Esc", "Cancel"),
            ],
        );
    }

    /// Get keybindings for a specific mode
    pub fn get_bindings(&self, mode: &AppMode) -> Vec<&Keybinding> {
        self.mode_bindings
            .get(mode)
            .map(|bindings| bindings.iter().collect())
            .unwrap_or_default()
    }

    /// Resolve a key event to an action in the given mode
    pub fn resolve(&self, mode: &AppMode, event: &KeyEvent) -> Option<KeyAction> {
        self.mode_bindings
            .get(mode)?
            .iter()
            .find(|b| b.matches(event))
            .map(|b| b.action)
    }

    /// Get navigation bar items for display
    pub fn get_nav_items(&self, mode: &AppMode) -> Vec<NavBarItem> {
        let bindings = self.get_bindings(mode);

        let priority_actions = match mode {
            AppMode::EmployeeList => vec![
                KeyAction::NavigateUp,
                KeyAction::NavigateDown,
                KeyAction::NewPosition,
                KeyAction::EditPosition,
                KeyAction::Help,
                KeyAction::Quit,
            ],
            AppMode::PositionForm => vec![
                KeyAction::NextField,
                KeyAction::PrevOption,
                KeyAction::NextOption,
                KeyAction::Submit,
                KeyAction::Cancel,
            ],
        };

        // Combine paired actions into single items for cleaner display
        let mut items: Vec<NavBarItem> = Vec::new();
        let mut has_nav = false;
        let mut has_options = false;

        for action in priority_actions {
            match action {
                KeyAction::NavigateUp | KeyAction::NavigateDown => {
                    if !has_nav {
                        items.push(NavBarItem {
                            key_display: "Up/Dn".to_string(),
                            action_label: "Navigate".to_string(),
                        });
                        has_nav = true;
                    }
                }
                KeyAction::PrevOption | KeyAction::NextOption => {
                    if !has_options {
                        items.push(NavBarItem {
                            key_display: "Left/Right".to_string(),
                            action_label: "Parent".to_string(),
                        });
                        has_options = true;
                    }
                }
                _ => {
                    if let Some(binding) = bindings.iter().find(|b| b.action == action) {
                        items.push(NavBarItem {
                            key_display: binding.display.clone(),
                            action_label: binding.description.clone(),
                        });
                    }
                }
            }
        }

        items
    }

    /// Get full help content for a mode (for help overlay)
    pub fn get_help_content(&self, mode: &AppMode) -> Vec<HelpSection> {
        let bindings = self.get_bindings(mode);
        let mut sections = Vec::new();

        let mut push_section = |title: &str, filter: fn(KeyAction) -> bool| {
            let items: Vec<(String, String)> = bindings
                .iter()
                .filter(|b| filter(b.action))
                .map(|b| (b.display.clone(), b.description.clone()))
                .collect();
            if !items.is_empty() {
                sections.push(HelpSection {
                    title: title.to_string(),
                    items,
                });
            }
        };

        push_section("Navigation", |a| {
            matches!(
                a,
                KeyAction::NavigateUp
                    | KeyAction::NavigateDown
                    | KeyAction::Home
                    | KeyAction::End
                    | KeyAction::NextField
                    | KeyAction::PrevField
            )
        });
        push_section("Actions", |a| {
            matches!(
                a,
                KeyAction::NewPosition
                    | KeyAction::EditPosition
                    | KeyAction::PrevOption
                    | KeyAction::NextOption
                    | KeyAction::DeleteChar
                    | KeyAction::Submit
                    | KeyAction::Cancel
            )
        });
        push_section("General", |a| matches!(a, KeyAction::Help | KeyAction::Quit));

        sections
    }
}

/// Navigation bar item for display
#[derive(Debug, Clone)]
pub struct NavBarItem {
    pub key_display: String,
    pub action_label: String,
}

/// Help section for the help overlay
#[derive(Debug, Clone)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<(String, String)>,
}
