use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use lesson_core::model::{AiSettings, AiSettingsDraft, DEFAULT_BASE_URL, DEFAULT_MODEL};
use services::{GeminiClient, LessonContentService};
use tracing::{info, warn};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidModel { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidModel { raw } => write!(f, "invalid --model value: {raw:?}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    lesson_content: Arc<LessonContentService>,
}

impl UiApp for DesktopApp {
    fn lesson_content(&self) -> Arc<LessonContentService> {
        Arc::clone(&self.lesson_content)
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--model <id>] [--base-url <url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --model {DEFAULT_MODEL}");
    eprintln!("  --base-url {DEFAULT_BASE_URL}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  API_KEY (or GEMINI_API_KEY), LESSON_AI_MODEL, LESSON_AI_BASE_URL, RUST_LOG");
}

struct Args {
    settings: AiSettingsDraft,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut settings = AiSettingsDraft {
            api_key: env_value("API_KEY").or_else(|| env_value("GEMINI_API_KEY")),
            model: env_value("LESSON_AI_MODEL"),
            base_url: env_value("LESSON_AI_BASE_URL"),
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--model" => {
                    let value = require_value(args, "--model")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidModel { raw: value });
                    }
                    settings.model = Some(value);
                }
                "--base-url" => {
                    settings.base_url = Some(require_value(args, "--base-url")?);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { settings })
    }
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

fn build_lesson_content(settings: &AiSettings) -> Arc<LessonContentService> {
    if !settings.has_credentials() {
        warn!("no API key configured; lessons will report a generation error");
    }
    let client = GeminiClient::from_settings(settings);
    Arc::new(LessonContentService::new(Arc::new(client)))
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    let settings = parsed.settings.validate()?;
    info!(model = settings.model(), base_url = settings.base_url(), "lesson provider configured");

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        lesson_content: build_lesson_content(&settings),
    });
    let context = build_app_context(&app);

    // Some dev setups default tao windows to always-on-top.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("QuantMind Academy")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
