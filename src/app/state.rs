use crate::notify::Notification;
use std::fmt;

/// Label on the search form's submit button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitLabel {
    #[default]
    Idle,
    Busy,
}

impl SubmitLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmitLabel::Idle => "Submit",
            SubmitLabel::Busy => "Loading...",
        }
    }
}

impl fmt::Display for SubmitLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything visible on the page. Only [`update`](crate::app::update) mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UiState {
    panel_visible: bool,
    heading_html: String,
    list_html: String,
    detail_html: String,
    submit_label: SubmitLabel,
    search_input: String,
    notification: Option<Notification>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the results/detail panel is shown. Hidden until the first fetch.
    pub fn panel_visible(&self) -> bool {
        self.panel_visible
    }

    pub fn heading_html(&self) -> &str {
        &self.heading_html
    }

    pub fn list_html(&self) -> &str {
        &self.list_html
    }

    pub fn detail_html(&self) -> &str {
        &self.detail_html
    }

    pub fn submit_label(&self) -> SubmitLabel {
        self.submit_label
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    /// Most recent notification; each new one replaces the last.
    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub(crate) fn show_panel(&mut self) {
        self.panel_visible = true;
    }

    pub(crate) fn hide_panel(&mut self) {
        self.panel_visible = false;
    }

    pub(crate) fn set_heading(&mut self, html: String) {
        self.heading_html = html;
    }

    pub(crate) fn set_list(&mut self, html: String) {
        self.list_html = html;
    }

    pub(crate) fn set_detail(&mut self, html: String) {
        self.detail_html = html;
    }

    pub(crate) fn clear_results(&mut self) {
        self.heading_html.clear();
        self.list_html.clear();
    }

    pub(crate) fn set_submit_label(&mut self, label: SubmitLabel) {
        self.submit_label = label;
    }

    pub(crate) fn set_search_input(&mut self, input: String) {
        self.search_input = input;
    }

    pub(crate) fn reset_form(&mut self) {
        self.search_input.clear();
    }

    pub(crate) fn set_notification(&mut self, notification: Notification) {
        self.notification = Some(notification);
    }
}
