//! Generic confirm/cancel dialog

use acctdeck_utils::escape_html;

/// Overlay dialog with a title, body, Cancel and one confirm button
///
/// Renders nothing while closed. Input validation belongs to whoever handles
/// the submit action.
#[derive(Debug, Clone)]
pub struct Modal<'a> {
    open: bool,
    title: &'a str,
    submit_label: &'a str,
    close_action: &'a str,
    submit_action: &'a str,
    include: Option<&'a str>,
    body: String,
}

impl<'a> Modal<'a> {
    pub fn new(title: &'a str, submit_label: &'a str) -> Self {
        Self {
            open: false,
            title,
            submit_label,
            close_action: "",
            submit_action: "",
            include: None,
            body: String::new(),
        }
    }

    pub fn open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    /// Endpoint POSTed by the Cancel button
    pub fn on_close(mut self, action: &'a str) -> Self {
        self.close_action = action;
        self
    }

    /// Endpoint POSTed by the confirm button
    pub fn on_submit(mut self, action: &'a str) -> Self {
        self.submit_action = action;
        self
    }

    /// CSS selector of inputs sent along with the submit
    pub fn include(mut self, selector: &'a str) -> Self {
        self.include = Some(selector);
        self
    }

    /// Body HTML, inserted as-is
    pub fn body(mut self, html: impl Into<String>) -> Self {
        self.body = html.into();
        self
    }

    pub fn render(&self) -> String {
        if !self.open {
            return String::new();
        }

        let include = self
            .include
            .map(|selector| format!(" hx-include='{}'", escape_html(selector)))
            .unwrap_or_default();

        format!(
            r#"<div class='modal-backdrop fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center z-50'>
    <div class='modal-panel bg-white rounded-lg p-8 w-96' role='dialog' aria-modal='true'>
        <h2 class='text-2xl font-bold text-blue-600 mb-4'>{}</h2>
        {}
        <div class='flex justify-end space-x-4 mt-6'>
            <button type='button' class='px-4 py-2 text-blue-600 hover:text-blue-800 transition-colors' hx-post='{}'>Cancel</button>
            <button type='button' class='px-4 py-2 bg-blue-500 text-white rounded-md hover:bg-blue-600 transition-colors' hx-post='{}'{}>{}</button>
        </div>
    </div>
</div>"#,
            escape_html(self.title),
            self.body,
            escape_html(self.close_action),
            escape_html(self.submit_action),
            include,
            escape_html(self.submit_label),
        )
    }
}
