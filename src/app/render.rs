//! Rendering helpers for the event loop

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::core::{AppState, FocusTarget, ViewMode};
use crate::editor::StyledLine;
use crate::render::{
    render_editor, render_menu_bar, render_menu_dropdown, render_popup, render_status_bar,
    render_tree, AppLayout,
};
use crate::tree::TreeEntry;

/// Context for rendering a frame
pub struct RenderContext<'a> {
    pub state: &'a AppState,
    pub entries: Vec<&'a TreeEntry>,
    /// Highlighted buffer lines, None in plain mode
    pub styled: Option<&'a [StyledLine]>,
    pub layout: AppLayout,
}

/// Render a complete frame
pub fn render_frame(frame: &mut Frame, ctx: RenderContext) {
    let state = ctx.state;
    let layout = ctx.layout;
    let editor_focused =
        state.focus_target == FocusTarget::Editor && matches!(state.mode, ViewMode::Browse);

    render_menu_bar(frame, state, layout.menu_bar);
    render_tree(frame, state, &ctx.entries, layout.tree);
    render_editor(
        frame,
        &state.editor,
        ctx.styled,
        state.tab_width,
        editor_focused,
        layout.editor,
    );
    render_status_bar(frame, state, layout.status);

    // Overlays last
    render_menu_dropdown(frame, state, layout.menu_bar);
    render_popup(frame, state);
}

/// Render the directory prompt shown before a project is open
pub fn render_startup(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let hint = Paragraph::new("Enter: open   Esc: quit")
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL).title(" codepad "));
    frame.render_widget(hint, area);
    render_popup(frame, state);
}
