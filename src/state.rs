use crate::application::ConversionCoordinator;

pub struct AppState {
    pub coordinator: ConversionCoordinator,
}
