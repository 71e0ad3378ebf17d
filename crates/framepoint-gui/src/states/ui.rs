use std::path::PathBuf;

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    /// Failed image load awaiting retry: path + error message.
    pub load_error: Option<(PathBuf, String)>,

    /// Log messages.
    pub log_messages: Vec<String>,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}
