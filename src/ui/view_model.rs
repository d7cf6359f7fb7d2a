use crate::api::{ConversionResult, ProxyReply};
use crate::domain::{extract_video_id, is_youtube_url, normalize_url_input, thumbnail_url, VideoId};

/// What the result panel renders after a successful conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionDisplay {
    pub link: String,
    pub title: String,
    /// Whole seconds.
    pub duration_secs: u64,
    /// Megabytes with two decimals, e.g. "3.33".
    pub filesize_mb: String,
    pub thumbnail: String,
}

impl ConversionDisplay {
    fn from_result(result: ConversionResult, video_id: &VideoId) -> Self {
        Self {
            link: result.link,
            title: result.title,
            duration_secs: result.duration.round() as u64,
            filesize_mb: format!("{:.2}", result.filesize as f64 / 1024.0 / 1024.0),
            thumbnail: thumbnail_url(video_id),
        }
    }
}

/// Lifecycle of the result panel. While `Loading` the shell is expected to
/// POST the url and feed the reply back as [`ConvertMessage::Completed`].
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Idle,
    Loading(VideoId),
    Success(ConversionDisplay),
    Failure(String),
}

#[derive(Debug, Clone)]
pub enum ConvertMessage {
    UrlChanged(String),
    Submitted,
    /// The backend reply, or a transport-level error message.
    Completed(Result<ProxyReply, String>),
}

/// Upstream failure modes with fixed user-facing copy. Anything that does
/// not classify falls into `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamErrorKind {
    InvalidUrl,
    VideoRemoved,
    VideoNotAvailable,
    ServerUnreachable,
    Other,
}

impl UpstreamErrorKind {
    pub fn from_message(message: &str) -> Self {
        if message.contains("Invalid YouTube URL") {
            Self::InvalidUrl
        } else if message.contains("Removed") {
            Self::VideoRemoved
        } else if message.contains("Not Available") {
            Self::VideoNotAvailable
        } else {
            Self::Other
        }
    }

    pub fn user_message(self) -> &'static str {
        match self {
            Self::InvalidUrl => "Please paste a valid YouTube link.",
            Self::VideoRemoved => "This video is removed or blocked.",
            Self::VideoNotAvailable => {
                "This video cannot be converted (copyright or region blocked)."
            }
            Self::ServerUnreachable => "Cannot reach server. Is backend running?",
            Self::Other => "Conversion failed. Try a different link.",
        }
    }
}

/// View model for the conversion form. Holds the url field and the panel
/// state; both advance only through [`ConvertView::update`].
#[derive(Debug, Clone)]
pub struct ConvertView {
    pub url_input: String,
    pub state: ViewState,
}

impl Default for ConvertView {
    fn default() -> Self {
        Self {
            url_input: String::new(),
            state: ViewState::Idle,
        }
    }
}

impl ConvertView {
    /// Whether the submit button should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.url_input.is_empty()
            && is_youtube_url(&self.url_input)
            && !matches!(self.state, ViewState::Loading(_))
    }

    pub fn update(&mut self, message: ConvertMessage) {
        match message {
            ConvertMessage::UrlChanged(raw) => {
                self.url_input = normalize_url_input(&raw);
            }
            ConvertMessage::Submitted => {
                if matches!(self.state, ViewState::Loading(_)) {
                    return;
                }
                self.state = match extract_video_id(&self.url_input) {
                    Some(id) => ViewState::Loading(id),
                    None => ViewState::Failure(
                        UpstreamErrorKind::InvalidUrl.user_message().to_string(),
                    ),
                };
            }
            ConvertMessage::Completed(reply) => {
                let video_id = match &self.state {
                    ViewState::Loading(id) => id.clone(),
                    // Stale reply, nothing is in flight.
                    _ => return,
                };

                self.state = match reply {
                    Ok(ProxyReply::Success(result)) => {
                        ViewState::Success(ConversionDisplay::from_result(result, &video_id))
                    }
                    Ok(ProxyReply::Failure(body)) => ViewState::Failure(
                        UpstreamErrorKind::from_message(&body.error)
                            .user_message()
                            .to_string(),
                    ),
                    Ok(ProxyReply::Unrecognized(_)) => {
                        ViewState::Failure(UpstreamErrorKind::Other.user_message().to_string())
                    }
                    Err(_) => ViewState::Failure(
                        UpstreamErrorKind::ServerUnreachable
                            .user_message()
                            .to_string(),
                    ),
                };
            }
        }
    }
}
