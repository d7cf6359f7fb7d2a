pub mod view_model;

pub use view_model::{ConversionDisplay, ConvertMessage, ConvertView, UpstreamErrorKind, ViewState};
