mod ai_settings;
mod levels;
mod user_context;

pub use ai_settings::{
    AiSettings, AiSettingsDraft, AiSettingsError, DEFAULT_BASE_URL, DEFAULT_MODEL,
};
pub use levels::{CodingLevel, MathLevel};
pub use user_context::UserContext;
