pub mod config;
pub mod error;
pub mod generator;
pub mod icon;
pub mod logger;
pub mod models;

pub use config::IconConfig;
pub use error::{IconError, IconErrorKind};
pub use generator::{IconGenerator, generate, try_generate};
pub use models::*;
