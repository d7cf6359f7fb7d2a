pub mod error;
pub mod video;

pub use error::AppError;
pub use video::{extract_video_id, is_youtube_url, normalize_url_input, thumbnail_url, VideoId};
