pub mod config;
pub mod keywords;
pub mod moment;
pub mod parse_input;
pub mod render;
pub mod validator;

pub use config::Config;
pub use moment::ParsedMoment;
pub use validator::{ValidationFailure, Validator};
