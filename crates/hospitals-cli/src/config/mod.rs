pub mod builder;
pub mod defaults;
pub mod models;

pub use builder::build_config;
pub use models::AppConfig;
