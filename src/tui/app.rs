//! Main application logic for the terminal user interface.
//!
//! This module contains the `App` struct which owns the task store, the draft
//! editor, the active filter and the dropdown tracker. It handles keyboard and
//! mouse input and renders the board: the input form, the filter selector and
//! a grid of task cards.
//!
//! Every render records a hit map (clickable rectangles) and the anchors of
//! the status dropdowns. Mouse presses are resolved against the latest render,
//! so anchors always reflect the task ids currently on screen.

use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame, Terminal,
};
use tracing::debug;

use crate::{
    config::Config,
    fields::{FilterMode, Status},
    store::{filter_tasks, format_created, TaskStore},
    task::{Task, TaskId},
    tui::{
        colors::{DANGER_RED, DARK_RED, GOLD, PRIMARY_BLUE, SLATE, SUCCESS_GREEN},
        dropdown::DropdownTracker,
        enums::{AppState, Focus, HitTarget},
        task_form::{CommitOutcome, EditorState, FormField, TaskForm},
        utils::{card_rects, centered_rect, grid_columns, label_width, visible_rows},
    },
};

const VALIDATION_ALERT: &str = "Please enter both task name and description.";

/// Main application state for the terminal user interface.
pub struct App {
    state: AppState,
    store: TaskStore,
    form: TaskForm,
    filter: FilterMode,
    dropdowns: DropdownTracker,
    focus: Focus,
    selected: Option<TaskId>,
    alert: Option<String>,
    status_message: String,
    scroll_row: usize,
    /// Keep the selected card on screen; cleared when the user scrolls with the mouse.
    follow_selection: bool,
    columns: usize,
    rows_visible: usize,
    hit_map: Vec<(Rect, HitTarget)>,
    anchors: Vec<(TaskId, Rect)>,
    tick_rate: Duration,
    should_quit: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let mut app = App {
            state: AppState::Board,
            store: TaskStore::new(),
            form: TaskForm::new(),
            filter: config.default_filter,
            dropdowns: DropdownTracker::new(),
            focus: Focus::TaskName,
            selected: None,
            alert: None,
            status_message: String::new(),
            scroll_row: 0,
            follow_selection: true,
            columns: 1,
            rows_visible: 1,
            hit_map: Vec::new(),
            anchors: Vec::new(),
            tick_rate: config.tick_rate(),
            should_quit: false,
        };
        app.set_focus(Focus::TaskName);
        app
    }

    fn set_status_message(&mut self, msg: String) {
        self.status_message = msg;
    }

    fn clear_status_message(&mut self) {
        self.status_message.clear();
    }

    /// Ids of the tasks visible under the current filter, in list order.
    fn visible_ids(&self) -> Vec<TaskId> {
        filter_tasks(self.filter, self.store.tasks()).into_iter().map(|t| t.id).collect()
    }

    fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.form.set_active(focus.form_field());
        if focus == Focus::Cards {
            self.reconcile_selection(None);
        }
    }

    /// Keep the selection on a visible card, falling back to `preferred_index`
    /// (clamped) or the first card.
    fn reconcile_selection(&mut self, preferred_index: Option<usize>) {
        let visible = self.visible_ids();
        if let Some(id) = self.selected {
            if visible.contains(&id) {
                return;
            }
        }
        self.selected = if visible.is_empty() {
            None
        } else {
            let idx = preferred_index.unwrap_or(0).min(visible.len() - 1);
            Some(visible[idx])
        };
        self.follow_selection = true;
    }

    fn move_selection(&mut self, delta: isize) {
        let visible = self.visible_ids();
        if visible.is_empty() {
            return;
        }
        let current = self.selected.and_then(|id| visible.iter().position(|&v| v == id));
        let next = match current {
            None => 0,
            Some(i) => (i as isize + delta).clamp(0, visible.len() as isize - 1) as usize,
        };
        self.selected = Some(visible[next]);
        self.follow_selection = true;
    }

    /// Commit the draft; a validation failure raises the blocking alert.
    fn submit(&mut self) {
        match self.form.commit(&mut self.store) {
            Ok(CommitOutcome::Created(id)) => {
                self.reconcile_selection(None);
                self.set_status_message(format!("Task {id} created"));
            }
            Ok(CommitOutcome::Updated(id)) => {
                self.reconcile_selection(None);
                self.set_status_message(format!("Task {id} updated"));
            }
            Err(e) if e.is_validation() => {
                debug!(error = %e, "commit rejected");
                self.alert = Some(VALIDATION_ALERT.to_string());
                self.state = AppState::Alert;
            }
            Err(e) => self.set_status_message(format!("Error: {e}")),
        }
    }

    fn begin_edit(&mut self, id: TaskId) {
        let Some(task) = self.store.get(id) else {
            self.set_status_message(format!("Task {id} no longer exists"));
            return;
        };
        let already_editing = self.form.edit_target() == Some(id);
        let discarded = self.form.begin_edit(task);
        self.selected = Some(id);
        self.set_focus(Focus::TaskName);
        self.set_status_message(if discarded {
            format!("Unsaved changes discarded; editing task {id}")
        } else if already_editing {
            format!("Still editing task {id}")
        } else {
            format!("Editing task {id}")
        });
    }

    fn delete_task(&mut self, id: TaskId) {
        let index = self.visible_ids().iter().position(|&v| v == id);
        if self.store.delete(id).is_none() {
            self.set_status_message(format!("Task {id} no longer exists"));
            return;
        }
        self.dropdowns.forget(id);
        let edit_dropped = self.form.clear_target_if(id);
        self.reconcile_selection(index);
        self.set_status_message(if edit_dropped {
            format!("Task {id} deleted; its edit was cancelled")
        } else {
            format!("Task {id} deleted")
        });
    }

    fn toggle_dropdown(&mut self, id: TaskId) {
        self.selected = Some(id);
        self.dropdowns.toggle(id);
    }

    /// Run the single dropdown menu item: flip the status and close the menu.
    fn apply_menu_item(&mut self, id: TaskId) {
        let index = self.visible_ids().iter().position(|&v| v == id);
        match self.store.toggle_status(id) {
            Ok(status) => {
                self.dropdowns.close(id);
                self.form.sync_status(id, status);
                self.reconcile_selection(index);
                self.set_status_message(format!("Task {id} marked {}", status.label().to_lowercase()));
            }
            Err(e) => self.set_status_message(format!("Error: {e}")),
        }
    }

    fn set_filter(&mut self, mode: FilterMode) {
        self.filter = mode;
        self.scroll_row = 0;
        self.reconcile_selection(None);
        let shown = self.visible_ids().len();
        self.set_status_message(format!("Showing {} ({shown} of {} tasks)", mode.label(), self.store.len()));
    }

    /// Handle a key press. Sets the quit flag when the user exits.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.state {
            AppState::Alert => {
                self.alert = None;
                self.state = AppState::Board;
                return;
            }
            AppState::Help => {
                self.state = AppState::Board;
                return;
            }
            AppState::Board => {}
        }

        match key.code {
            KeyCode::F(1) => {
                self.state = AppState::Help;
                return;
            }
            KeyCode::Tab => {
                self.set_focus(self.focus.next());
                return;
            }
            KeyCode::BackTab => {
                self.set_focus(self.focus.prev());
                return;
            }
            _ => {}
        }

        match self.focus {
            Focus::TaskName => self.handle_form_input(FormField::TaskName, key),
            Focus::Description => self.handle_form_input(FormField::Description, key),
            Focus::Submit => self.handle_submit_input(key),
            Focus::Filter => self.handle_filter_input(key),
            Focus::Cards => self.handle_cards_input(key),
        }
    }

    fn handle_form_input(&mut self, field: FormField, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit(),
            KeyCode::Esc => {
                self.form.cancel();
                self.set_status_message("Draft cleared".to_string());
            }
            KeyCode::Up => self.set_focus(self.focus.prev()),
            KeyCode::Down => self.set_focus(self.focus.next()),
            KeyCode::Left => self.form.field_mut(field).move_cursor_left(),
            KeyCode::Right => self.form.field_mut(field).move_cursor_right(),
            KeyCode::Home => self.form.field_mut(field).move_home(),
            KeyCode::End => self.form.field_mut(field).move_end(),
            KeyCode::Backspace => self.form.field_mut(field).handle_backspace(),
            KeyCode::Delete => self.form.field_mut(field).handle_delete(),
            KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                self.form.field_mut(field).handle_char(c);
            }
            _ => {}
        }
    }

    fn handle_submit_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => self.submit(),
            KeyCode::Esc => {
                self.form.cancel();
                self.set_status_message("Draft cleared".to_string());
            }
            KeyCode::Up | KeyCode::Left => self.set_focus(self.focus.prev()),
            KeyCode::Down | KeyCode::Right => self.set_focus(self.focus.next()),
            KeyCode::Char('?') | KeyCode::Char('h') => self.state = AppState::Help,
            _ => {}
        }
    }

    fn handle_filter_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left => self.set_filter(self.filter.prev()),
            KeyCode::Right | KeyCode::Enter | KeyCode::Char(' ') => self.set_filter(self.filter.next()),
            KeyCode::Up => self.set_focus(self.focus.prev()),
            KeyCode::Down => self.set_focus(self.focus.next()),
            KeyCode::Char('?') | KeyCode::Char('h') => self.state = AppState::Help,
            _ => {}
        }
    }

    fn handle_cards_input(&mut self, key: KeyEvent) {
        let columns = self.columns.max(1) as isize;
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc => {
                if self.dropdowns.open_ids().is_empty() {
                    self.should_quit = true;
                } else {
                    self.dropdowns.close_all();
                }
            }
            KeyCode::Left => self.move_selection(-1),
            KeyCode::Right => self.move_selection(1),
            KeyCode::Up => {
                if self.selected_index().is_some_and(|i| i < columns as usize) {
                    self.set_focus(Focus::Filter);
                } else {
                    self.move_selection(-columns);
                }
            }
            KeyCode::Down => self.move_selection(columns),
            KeyCode::Char(' ') | KeyCode::Char('s') => {
                if let Some(id) = self.selected {
                    self.toggle_dropdown(id);
                }
            }
            KeyCode::Enter => {
                if let Some(id) = self.selected {
                    if self.dropdowns.is_open(id) {
                        self.apply_menu_item(id);
                    } else {
                        self.toggle_dropdown(id);
                    }
                }
            }
            KeyCode::Char('e') => {
                if let Some(id) = self.selected {
                    self.begin_edit(id);
                }
            }
            KeyCode::Char('d') => {
                if let Some(id) = self.selected {
                    self.delete_task(id);
                }
            }
            KeyCode::Char('f') => self.set_filter(self.filter.next()),
            KeyCode::Char('a') => self.set_focus(Focus::TaskName),
            KeyCode::Char('?') | KeyCode::Char('h') => self.state = AppState::Help,
            _ => {}
        }
    }

    fn selected_index(&self) -> Option<usize> {
        let id = self.selected?;
        self.visible_ids().iter().position(|&v| v == id)
    }

    /// Handle a mouse event against the hit map of the latest render.
    ///
    /// Any button press first closes every open dropdown whose anchor does not
    /// contain the pointer, then a left press activates the target under it.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(button) => {
                if self.state != AppState::Board {
                    if self.state == AppState::Alert {
                        self.alert = None;
                    }
                    self.state = AppState::Board;
                    return;
                }
                let point = Position::new(mouse.column, mouse.row);
                self.dropdowns.close_outside(point, &self.anchors);
                if button == MouseButton::Left {
                    if let Some(target) = self.hit_test(point) {
                        self.activate(target);
                    }
                }
            }
            MouseEventKind::ScrollDown => {
                self.scroll_row += 1;
                self.follow_selection = false;
            }
            MouseEventKind::ScrollUp => {
                self.scroll_row = self.scroll_row.saturating_sub(1);
                self.follow_selection = false;
            }
            _ => {}
        }
    }

    /// Topmost target under `point`; later entries are drawn on top.
    fn hit_test(&self, point: Position) -> Option<HitTarget> {
        self.hit_map
            .iter()
            .rev()
            .find(|(rect, _)| rect.contains(point))
            .map(|(_, target)| *target)
    }

    fn activate(&mut self, target: HitTarget) {
        debug!(?target, "pointer activation");
        match target {
            HitTarget::Input(field) => self.set_focus(field.into()),
            HitTarget::Submit => {
                self.set_focus(Focus::Submit);
                self.submit();
            }
            HitTarget::FilterSelect => {
                self.set_focus(Focus::Filter);
                self.set_filter(self.filter.next());
            }
            HitTarget::Card(id) => {
                self.selected = Some(id);
                self.set_focus(Focus::Cards);
            }
            HitTarget::StatusToggle(id) => {
                self.set_focus(Focus::Cards);
                self.toggle_dropdown(id);
            }
            HitTarget::StatusMenuItem(id) => self.apply_menu_item(id),
            HitTarget::Edit(id) => self.begin_edit(id),
            HitTarget::Delete(id) => {
                self.set_focus(Focus::Cards);
                self.delete_task(id);
            }
        }
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => {
                self.clear_status_message();
                self.handle_key(key);
            }
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    fn handle_input(&mut self) -> io::Result<()> {
        if event::poll(self.tick_rate)? {
            let ev = event::read()?;
            self.handle_event(ev);
        }
        Ok(())
    }

    fn focus_style(&self, focus: Focus) -> Style {
        if self.focus == focus && self.state == AppState::Board {
            Style::default().fg(GOLD)
        } else {
            Style::default()
        }
    }

    fn render_header(&self, f: &mut Frame, area: Rect) {
        let counts = self.store.counts();
        let header = Line::from(vec![
            Span::styled("Welcome Todo!!!", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("   "),
            Span::styled(
                format!(
                    "{} tasks · {} completed · {} not completed",
                    counts.total(),
                    counts.completed,
                    counts.not_completed
                ),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::ITALIC),
            ),
        ]);
        let paragraph = Paragraph::new(header)
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
    }

    fn render_input(&self, f: &mut Frame, area: Rect, field: FormField, title: &str, placeholder: &str) {
        let input = match field {
            FormField::TaskName => &self.form.task_name,
            FormField::Description => &self.form.description,
        };
        let text = if input.value.is_empty() && !input.active {
            Span::styled(placeholder.to_string(), Style::default().fg(Color::DarkGray))
        } else {
            Span::raw(input.value.clone())
        };
        // Scroll so the cursor column stays inside the box.
        let inner_width = area.width.saturating_sub(2).max(1) as usize;
        let scroll = input.cursor.saturating_sub(inner_width - 1);
        let paragraph = Paragraph::new(Line::from(text))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title.to_string())
                    .border_style(self.focus_style(field.into())),
            )
            .scroll((0, scroll as u16));
        f.render_widget(paragraph, area);

        if input.active && self.state == AppState::Board && area.width > 2 {
            let column = (input.cursor - scroll) as u16;
            f.set_cursor_position((area.x + 1 + column, area.y + 1));
        }
    }

    fn render_form(&mut self, f: &mut Frame, inputs_area: Rect, controls_area: Rect) {
        let inputs = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(inputs_area);
        self.render_input(f, inputs[0], FormField::TaskName, "Task name", "taskName");
        self.render_input(f, inputs[1], FormField::Description, "Description", "description");

        let controls = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(14), Constraint::Length(25), Constraint::Min(0)])
            .split(controls_area);

        let submit_color = if self.form.edit_target().is_some() { PRIMARY_BLUE } else { SUCCESS_GREEN };
        let submit = Paragraph::new(Span::styled(
            self.form.submit_label(),
            Style::default().fg(submit_color).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(self.focus_style(Focus::Submit)));
        f.render_widget(submit, controls[0]);

        let filter = Paragraph::new(format!("< {} >", self.filter.label()))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Filter")
                    .border_style(self.focus_style(Focus::Filter)),
            );
        f.render_widget(filter, controls[1]);

        let hint = match self.form.state() {
            EditorState::Idle => String::new(),
            EditorState::Creating => "New task (Esc to clear)".to_string(),
            EditorState::Editing(id) => format!("Editing task {id} (Esc to cancel)"),
        };
        let hint = Paragraph::new(Span::styled(hint, Style::default().fg(Color::Cyan)));
        f.render_widget(hint, Rect { y: controls[2].y + 1, height: 1, ..controls[2] });

        self.hit_map.push((inputs[0], HitTarget::Input(FormField::TaskName)));
        self.hit_map.push((inputs[1], HitTarget::Input(FormField::Description)));
        self.hit_map.push((controls[0], HitTarget::Submit));
        self.hit_map.push((controls[1], HitTarget::FilterSelect));
    }

    /// Render the card grid for the current filter and record hits and anchors.
    fn render_cards(&mut self, f: &mut Frame, area: Rect) {
        let tasks: Vec<Task> = filter_tasks(self.filter, self.store.tasks()).into_iter().cloned().collect();
        self.columns = grid_columns(area.width);
        self.rows_visible = visible_rows(area.height);

        if tasks.is_empty() {
            let message = if self.store.is_empty() {
                "No tasks yet. Type a task name and description, then press Enter."
            } else {
                "No tasks match the current filter."
            };
            let paragraph = Paragraph::new(message)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            f.render_widget(paragraph, Rect { y: area.y + 1, height: area.height.saturating_sub(1), ..area });
            return;
        }

        let total_rows = tasks.len().div_ceil(self.columns);
        if self.follow_selection {
            if let Some(idx) = self.selected.and_then(|id| tasks.iter().position(|t| t.id == id)) {
                let row = idx / self.columns;
                if row < self.scroll_row {
                    self.scroll_row = row;
                } else if row >= self.scroll_row + self.rows_visible {
                    self.scroll_row = row + 1 - self.rows_visible;
                }
            }
        }
        self.scroll_row = self.scroll_row.min(total_rows.saturating_sub(self.rows_visible));

        let page = &tasks[self.scroll_row * self.columns..];
        let rects = card_rects(area, self.columns, page.len());
        let mut open_menus = Vec::new();
        for (task, rect) in page.iter().zip(rects) {
            let toggle = self.render_card(f, rect, task);
            match toggle {
                Some(toggle) if self.dropdowns.is_open(task.id) => open_menus.push((task.id, task.status, toggle)),
                Some(toggle) => self.anchors.push((task.id, toggle)),
                None => {}
            }
        }
        // Menus are drawn after every card so they overlay neighbours.
        for (id, status, toggle) in open_menus {
            let menu = self.render_menu(f, area, id, status, toggle);
            self.anchors.push((id, toggle.union(menu)));
        }
    }

    /// Render one card; returns the status toggle rectangle when it fits.
    fn render_card(&mut self, f: &mut Frame, rect: Rect, task: &Task) -> Option<Rect> {
        let selected = self.focus == Focus::Cards && self.selected == Some(task.id);
        let border_style = if selected { Style::default().fg(GOLD) } else { Style::default() };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title_bottom(
                Line::from(Span::styled(
                    format!(" {} {} ", task.id, format_created(task)),
                    Style::default().fg(Color::DarkGray),
                ))
                .alignment(Alignment::Right),
            );
        let inner = block.inner(rect);
        f.render_widget(block, rect);
        self.hit_map.push((rect, HitTarget::Card(task.id)));

        let body = vec![
            Line::from(Span::styled(task.task_name.clone(), Style::default().add_modifier(Modifier::BOLD))),
            Line::from(task.description.clone()),
            Line::from(format!("Status: {}", task.status.label())),
        ];
        f.render_widget(Paragraph::new(body), Rect { height: inner.height.min(3), ..inner });
        if inner.height < 4 {
            return None;
        }

        let row_y = inner.y + 3;
        let status_color = match task.status {
            Status::Completed => SUCCESS_GREEN,
            Status::NotCompleted => DANGER_RED,
        };
        let toggle_label = format!("[{} ▾]", task.status.button_label());
        let toggle = Rect::new(inner.x, row_y, label_width(&toggle_label), 1).intersection(inner);
        let edit = Rect::new(toggle.right() + 1, row_y, label_width("[Edit]"), 1).intersection(inner);
        let delete = Rect::new(edit.right() + 1, row_y, label_width("[Delete]"), 1).intersection(inner);

        let buttons = [
            (toggle, toggle_label.as_str(), Style::default().fg(Color::Black).bg(status_color), HitTarget::StatusToggle(task.id)),
            (edit, "[Edit]", Style::default().fg(Color::Black).bg(GOLD), HitTarget::Edit(task.id)),
            (delete, "[Delete]", Style::default().fg(Color::White).bg(DANGER_RED), HitTarget::Delete(task.id)),
        ];
        for (area, label, style, target) in buttons {
            if area.is_empty() {
                continue;
            }
            f.render_widget(Paragraph::new(Span::styled(label.to_string(), style)), area);
            self.hit_map.push((area, target));
        }
        (!toggle.is_empty()).then_some(toggle)
    }

    /// Render the one-item status menu below (or above) its toggle.
    fn render_menu(&mut self, f: &mut Frame, cards_area: Rect, id: TaskId, status: Status, toggle: Rect) -> Rect {
        let label = status.menu_action_label();
        let width = label_width(label) + 4;
        let height = 3;
        let below = Rect::new(toggle.x, toggle.y + 1, width, height);
        let menu = if below.bottom() <= cards_area.bottom() {
            below
        } else {
            Rect::new(toggle.x, toggle.y.saturating_sub(height), width, height)
        }
        .intersection(f.area());

        let block = Block::default().borders(Borders::ALL).border_style(Style::default().fg(GOLD));
        let inner = block.inner(menu);
        f.render_widget(Clear, menu);
        f.render_widget(Paragraph::new(format!(" {label} ")).block(block), menu);
        self.hit_map.push((inner, HitTarget::StatusMenuItem(id)));
        menu
    }

    /// Render the blocking validation alert.
    fn render_alert(&self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .title("Validation error")
            .borders(Borders::ALL)
            .style(Style::default().bg(DARK_RED).fg(Color::White));

        let area = centered_rect(50, 30, area);
        f.render_widget(Clear, area);

        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                self.alert.as_deref().unwrap_or(VALIDATION_ALERT),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Press any key to continue"),
        ];
        let paragraph = Paragraph::new(text)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    /// Render the help screen with keyboard shortcuts and mouse usage.
    fn render_help(&self, f: &mut Frame, area: Rect) {
        let heading = |text: &'static str| {
            Line::from(Span::styled(text, Style::default().add_modifier(Modifier::BOLD)))
        };
        let help_text = vec![
            heading("Todo Help"),
            Line::from(""),
            heading("Anywhere:"),
            Line::from("  Tab / Shift+Tab  Move between task name, description, submit, filter, cards"),
            Line::from("  F1               Show this help"),
            Line::from("  Ctrl+C           Quit"),
            Line::from(""),
            heading("Form:"),
            Line::from("  Enter            Add Todo, or Save when editing"),
            Line::from("  Esc              Clear the draft / cancel the edit"),
            Line::from(""),
            heading("Filter:"),
            Line::from("  ←/→ Enter Space  Cycle All → Not Completed → Completed"),
            Line::from(""),
            heading("Cards:"),
            Line::from("  Arrow keys       Select a card"),
            Line::from("  Space / s        Open or close the status menu"),
            Line::from("  Enter            Open the status menu, or apply it when open"),
            Line::from("  e                Edit selected task"),
            Line::from("  d                Delete selected task"),
            Line::from("  f                Cycle filter"),
            Line::from("  a                Jump to the form"),
            Line::from("  Esc              Close menus, or quit when none are open"),
            Line::from("  q                Quit"),
            Line::from(""),
            heading("Mouse:"),
            Line::from("  Click inputs, buttons and the filter. Clicking outside a status menu closes it."),
        ];

        let paragraph = Paragraph::new(help_text)
            .block(Block::default().borders(Borders::ALL).title("Help - Press any key to return"))
            .wrap(Wrap { trim: true });
        f.render_widget(Clear, area);
        f.render_widget(paragraph, area);
    }

    fn render_status_bar(&self, f: &mut Frame, area: Rect) {
        let status_text = if !self.status_message.is_empty() {
            self.status_message.clone()
        } else {
            match self.state {
                AppState::Alert => "Validation error".to_string(),
                AppState::Help => "Help".to_string(),
                AppState::Board => {
                    let shown = self.visible_ids().len();
                    let focus_tip = match self.focus {
                        Focus::TaskName | Focus::Description | Focus::Submit => "Enter to submit",
                        Focus::Filter => "←/→ to change filter",
                        Focus::Cards => "Space: status menu | e: edit | d: delete",
                    };
                    format!("Tasks: {shown}/{} | {focus_tip} | F1 for help", self.store.len())
                }
            }
        };
        let status = Paragraph::new(status_text)
            .style(Style::default().bg(SLATE).fg(Color::White))
            .alignment(Alignment::Left);
        f.render_widget(status, area);
    }

    /// Main render function; rebuilds the hit map and dropdown anchors.
    fn render(&mut self, f: &mut Frame) {
        self.hit_map.clear();
        self.anchors.clear();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(f.area());
        let board = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(chunks[0]);

        self.render_header(f, board[0]);
        self.render_form(f, board[1], board[2]);
        self.render_cards(f, board[3]);

        match self.state {
            AppState::Board => {}
            AppState::Alert => self.render_alert(f, chunks[0]),
            AppState::Help => self.render_help(f, chunks[0]),
        }
        self.render_status_bar(f, chunks[1]);
    }

    /// Main event loop for the TUI application.
    ///
    /// Handles rendering and input processing until the user exits.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        while !self.should_quit {
            terminal.draw(|f| self.render(f))?;
            self.handle_input()?;
        }
        Ok(())
    }
}
