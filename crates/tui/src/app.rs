//! Main application struct and run loop.
//!
//! This module provides the `App` struct which orchestrates the TUI
//! application lifecycle including event handling, state updates, and rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use plank_config::Config;
use plank_protocol::Message;
use plank_store::ProjectStore;

use crate::{
    AppState, Focus,
    drag::DragPayload,
    event::{event_to_message, poll_event},
    layout::{self, FORM_HEIGHT, HEADER_HEIGHT, MIN_HEIGHT, MIN_HEIGHT_WITH_HEADER, MIN_WIDTH},
    terminal::AppTerminal,
    widgets::{render_alert_overlay, render_board, render_form, render_help_overlay},
};

/// The main application struct.
///
/// Manages the application state and provides the main event loop.
#[derive(Debug)]
pub struct App {
    state: AppState,
    should_quit: bool,
    /// Last known terminal area, used for drag hit-testing.
    last_area: Rect,
    /// Whether the header was shown in the last render (affects drag hit-testing).
    header_visible: bool,
    /// The application configuration.
    config: Config,
}

impl App {
    /// Creates a new application over the given project store.
    ///
    /// # Examples
    ///
    /// ```
    /// use plank_store::ProjectStore;
    /// use plank_tui::App;
    ///
    /// let app = App::new(ProjectStore::new());
    /// ```
    #[must_use]
    pub fn new(store: ProjectStore) -> Self {
        Self::with_config(store, Config::default())
    }

    /// Creates a new application with the given store and configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use plank_config::Config;
    /// use plank_store::ProjectStore;
    /// use plank_tui::App;
    ///
    /// let app = App::with_config(ProjectStore::new(), Config::default());
    /// ```
    #[must_use]
    pub fn with_config(store: ProjectStore, config: Config) -> Self {
        Self {
            state: AppState::new(store),
            should_quit: false,
            last_area: Rect::default(),
            header_visible: true,
            config,
        }
    }

    /// Returns a reference to the application state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Returns a reference to the application configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Updates the application state based on a message.
    ///
    /// Overlays intercept input: while the alert overlay is visible, any
    /// message other than `Quit` dismisses it; while the help overlay is
    /// visible, most messages are intercepted to dismiss help instead of
    /// their normal action.
    ///
    /// # Arguments
    ///
    /// * `msg` - The message to process.
    pub fn update(&mut self, msg: Message) {
        // The alert overlay blocks everything; any key dismisses it
        if self.state.alert.is_some() {
            match msg {
                Message::Quit => {
                    self.should_quit = true;
                }
                _ => {
                    self.state.alert = None;
                }
            }
            return;
        }

        // When help is visible, most keys should dismiss it
        if self.state.help_visible {
            match msg {
                Message::Quit => {
                    self.should_quit = true;
                }
                Message::ToggleHelp | Message::Escape => {
                    self.state.toggle_help();
                }
                // Any other key dismisses help
                _ => {
                    let _ = self.state.dismiss_help();
                }
            }
            return;
        }

        match msg {
            Message::Quit => {
                self.should_quit = true;
            }
            Message::Escape => {
                // Contextual escape: leave the form, or clear the selection
                if self.state.focus == Focus::Form {
                    self.state.focus = Focus::Board;
                } else {
                    self.state.clear_selection();
                }
            }
            Message::FocusForm => {
                self.state.focus = Focus::Form;
            }
            Message::NavigateLeft => {
                if self.state.focus == Focus::Board {
                    self.state.navigate_left();
                }
            }
            Message::NavigateRight => {
                if self.state.focus == Focus::Board {
                    self.state.navigate_right();
                }
            }
            Message::NavigateUp => {
                if self.state.focus == Focus::Board {
                    self.state.navigate_up();
                }
            }
            Message::NavigateDown => {
                if self.state.focus == Focus::Board {
                    self.state.navigate_down();
                }
            }
            Message::ToggleHelp => {
                self.state.toggle_help();
            }
            Message::FormNextField => {
                self.state.form.next_field();
            }
            Message::FormPrevField => {
                self.state.form.prev_field();
            }
            Message::FormInput { ch } => {
                self.state.form.input_char(ch);
            }
            Message::FormBackspace => {
                self.state.form.backspace();
            }
            Message::FormSubmit => {
                self.submit_form();
            }
            Message::DragStart { column, row } => {
                self.handle_drag_start(column, row);
            }
            Message::DragMove { column, row } => {
                self.handle_drag_move(column, row);
            }
            Message::DragDrop { column, row } => {
                self.handle_drag_drop(column, row);
            }
        }
    }

    /// Validates the form and creates a project on success.
    ///
    /// On validation failure the alert overlay is shown and the form keeps
    /// its values so the user can correct them.
    fn submit_form(&mut self) {
        match self
            .state
            .form
            .parse(self.config.min_people, self.config.max_people)
        {
            Ok(draft) => {
                self.state
                    .store
                    .add_project(draft.title, draft.description, draft.people);
                self.state.form.clear();
            }
            Err(err) => {
                self.state.alert = Some(err.to_string());
            }
        }
    }

    /// Returns the board area within the last rendered frame.
    ///
    /// The board sits below the header (when visible) and the form row.
    fn board_area(&self) -> Rect {
        let header_offset = if self.header_visible { HEADER_HEIGHT } else { 0 };
        let top_offset = header_offset + FORM_HEIGHT;
        Rect {
            x: self.last_area.x,
            y: self.last_area.y + top_offset,
            width: self.last_area.width,
            height: self.last_area.height.saturating_sub(top_offset),
        }
    }

    /// Handles a mouse press at the given coordinates.
    ///
    /// If the press is on a project card, selects it and begins a drag
    /// carrying the project's id.
    fn handle_drag_start(&mut self, column: u16, row: u16) {
        let board_area = self.board_area();
        let Some((list_idx, card_idx)) = layout::card_at(board_area, column, row) else {
            return;
        };

        // Validate the card exists in the pressed list
        let Some(project) = self
            .state
            .list_handle(list_idx)
            .borrow()
            .items()
            .get(card_idx)
            .cloned()
        else {
            return;
        };

        self.state.focus = Focus::Board;
        self.state.selected_list = list_idx;
        self.state.selected_card = Some(card_idx);
        self.state.drag.begin(DragPayload::new(project.id));
    }

    /// Handles mouse motion with the button held.
    ///
    /// Marks the list under the pointer as the drop target; moving off the
    /// board clears the marking.
    fn handle_drag_move(&mut self, column: u16, row: u16) {
        if !self.state.drag.is_active() {
            return;
        }

        match layout::list_at(self.board_area(), column, row) {
            Some(list_idx) => self.state.mark_droppable(list_idx),
            None => self.state.clear_droppable_markings(),
        }
    }

    /// Handles the mouse release that ends a drag.
    ///
    /// The drop target marking is cleared unconditionally, whether or not
    /// the release lands on a list. Dropping on a list switches the dragged
    /// project to that list's partition; a drop elsewhere, or a payload that
    /// does not parse, is a no-op.
    fn handle_drag_drop(&mut self, column: u16, row: u16) {
        let Some(payload) = self.state.drag.take() else {
            return;
        };

        // Always clear the highlight, even for drops outside either list
        self.state.clear_droppable_markings();

        let Some(list_idx) = layout::list_at(self.board_area(), column, row) else {
            return;
        };
        let Some(id) = payload.project_id() else {
            return;
        };

        // The store notifies either way; a drop on the project's own list
        // leaves the collection unchanged
        let _ = self
            .state
            .store
            .switch_status(id, AppState::list_status(list_idx));
        self.state.clamp_card_selection();
    }

    /// Renders the application UI to the given frame.
    ///
    /// Implements graceful degradation for small terminal sizes:
    /// - If terminal is below minimum dimensions, shows a "terminal too small" message.
    /// - If terminal is tight (below `MIN_HEIGHT_WITH_HEADER`), hides the header to reclaim space.
    /// - Otherwise, renders normally with header.
    ///
    /// # Arguments
    ///
    /// * `frame` - The frame to render into.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.last_area = area;

        // Check if terminal is too small for any useful rendering
        if area.height < MIN_HEIGHT || area.width < MIN_WIDTH {
            self.header_visible = false;
            self.render_terminal_too_small(frame, area);
            return;
        }

        // Determine if we should show header (compact mode hides it to reclaim space)
        let show_header = area.height >= MIN_HEIGHT_WITH_HEADER;
        self.header_visible = show_header;

        // Create layout based on header visibility
        let content_area = if show_header {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(HEADER_HEIGHT), // Header
                    Constraint::Min(0),                // Content area
                ])
                .split(area);

            // Render header
            self.render_header(frame, chunks[0]);
            chunks[1]
        } else {
            // No header - full area is content
            area
        };

        // Form row above the board
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(FORM_HEIGHT), Constraint::Min(0)])
            .split(content_area);

        let buf = frame.buffer_mut();
        render_form(&self.state.form, self.state.focus == Focus::Form, chunks[0], buf);
        render_board(
            &self.state.active.borrow(),
            &self.state.finished.borrow(),
            self.state.selected_list,
            self.state.selected_card,
            chunks[1],
            buf,
        );

        // Render overlays on top if visible
        if let Some(ref message) = self.state.alert {
            render_alert_overlay(message, area, frame.buffer_mut());
        }
        if self.state.help_visible {
            render_help_overlay(area, frame.buffer_mut());
        }
    }

    /// Renders a message indicating the terminal is too small.
    fn render_terminal_too_small(&self, frame: &mut Frame, area: Rect) {
        let message = format!(
            "Terminal too small ({}×{})\nMinimum: {}×{} (w×h)",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );

        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .wrap(ratatui::widgets::Wrap { trim: false });

        // Center the message vertically
        let vertical_offset = area.height.saturating_sub(2) / 2;
        let centered_area = Rect {
            x: area.x,
            y: area.y + vertical_offset,
            width: area.width,
            height: area.height.saturating_sub(vertical_offset),
        };

        frame.render_widget(paragraph, centered_area);
    }

    /// Runs the main application loop.
    ///
    /// This function blocks until the user quits the application.
    /// It polls for events, updates state, and renders the UI.
    ///
    /// The signature is `async` so it slots directly into the tokio entry
    /// point; the loop itself polls crossterm synchronously and never awaits.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use plank_store::ProjectStore;
    /// use plank_tui::{App, terminal};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let mut terminal = terminal::setup_terminal()?;
    ///     let mut app = App::new(ProjectStore::new());
    ///     app.run(&mut terminal).await?;
    ///     terminal::restore_terminal(&mut terminal)?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        loop {
            // Render
            terminal.draw(|frame| self.view(frame))?;

            // Poll for events (keyboard and mouse)
            if let Some(event) = poll_event()?
                && let Some(msg) = event_to_message(&event, self.state.focus)
            {
                self.update(msg);
            }

            // Check for quit
            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Renders the header bar with title and help cue.
    fn render_header(&self, frame: &mut Frame, area: Rect) {
        // Create the block first to get inner area (with rounded borders)
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        // Split inner area: title left, help cue right
        let [title_area, help_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(17), // "Press ? for help" = 16 chars + padding
        ])
        .areas(inner);

        // Render title on left
        let title = Paragraph::new(Line::from(vec![
            Span::styled(
                "plank",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" - "),
            Span::styled("Project Tracker", Style::default().fg(Color::White)),
        ]));
        frame.render_widget(title, title_area);

        // Render help cue on right
        let help_cue = Paragraph::new(Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("?", Style::default().fg(Color::Yellow)),
            Span::styled(" for help", Style::default().fg(Color::DarkGray)),
        ]))
        .alignment(Alignment::Right);
        frame.render_widget(help_cue, help_area);
    }
}
