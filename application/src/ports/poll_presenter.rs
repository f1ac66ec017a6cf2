//! Poll presenter port
//!
//! Renders polls and resolution announcements on the chat surface. The
//! workflow only records a poll as open once [`PollPresenter::open_poll`]
//! succeeded.

use async_trait::async_trait;
use thiserror::Error;
use watchparty_domain::{ChannelId, Poll, WinnerDecision};

/// Errors raised while talking to the chat surface
#[derive(Error, Debug)]
pub enum PresenterError {
    #[error("Failed to render poll: {0}")]
    RenderFailed(String),

    #[error("Channel unavailable: {0}")]
    ChannelUnavailable(String),
}

/// Outbound side of the chat platform
#[async_trait]
pub trait PollPresenter: Send + Sync {
    /// Render a two-option timed vote in `channel`
    async fn open_poll(&self, channel: &ChannelId, poll: &Poll) -> Result<(), PresenterError>;

    /// Tell the channel which film won and was moved to the exclusion list
    async fn announce_resolution(
        &self,
        channel: &ChannelId,
        decision: &WinnerDecision,
    ) -> Result<(), PresenterError>;
}
