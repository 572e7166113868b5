//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::BancoPaths;
pub use settings::Settings;
