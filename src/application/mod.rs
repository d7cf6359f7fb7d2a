pub mod conversion_coordinator;

pub use conversion_coordinator::ConversionCoordinator;
