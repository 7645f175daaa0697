//! User interaction seam: blocking confirmation and error notices

use tokio::sync::mpsc;

use super::PanelError;

/// A user-visible notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
}

impl From<PanelError> for Notice {
    fn from(err: PanelError) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait PanelUi: Send + Sync {
    /// Blocking yes/no prompt
    fn confirm(&self, prompt: &str) -> bool;
    fn notify(&self, notice: Notice);
}

/// Forwards notices to a channel and answers prompts with a fixed policy
pub struct ChannelUi {
    notices: mpsc::UnboundedSender<Notice>,
    confirm_all: bool,
}

impl ChannelUi {
    pub fn new(confirm_all: bool) -> (Self, mpsc::UnboundedReceiver<Notice>) {
        let (notices, rx) = mpsc::unbounded_channel();
        (Self { notices, confirm_all }, rx)
    }
}

impl PanelUi for ChannelUi {
    fn confirm(&self, prompt: &str) -> bool {
        tracing::debug!(prompt, answer = self.confirm_all, "Confirmation requested");
        self.confirm_all
    }

    fn notify(&self, notice: Notice) {
        if self.notices.send(notice).is_err() {
            tracing::warn!("Notice dropped: receiver closed");
        }
    }
}
