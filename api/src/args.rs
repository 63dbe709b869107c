use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use healthflow_core::domain::common::{
    GenerationConfig, HealthflowConfig, LLMConfig, LLMProvider, PlanValidation,
};
use url::Url;

#[derive(Debug, Clone, Parser)]
#[command(name = "healthflow", version, about = "Daily plans, meals and shopping lists")]
pub struct Cli {
    #[command(flatten)]
    pub log: LogArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run the HTTP API
    Serve(Args),
    /// Create a plan from the terminal against a running API
    Plan(PlanArgs),
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long, env = "LOG_FILTER", default_value = "info", global = true)]
    pub log_filter: String,

    #[arg(long, env = "LOG_JSON", default_value_t = false, global = true)]
    pub log_json: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub generation: GenerationArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long, env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(long, env = "METRICS_ENABLED", default_value_t = true, action = ArgAction::Set)]
    pub metrics_enabled: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long = "llm-provider", env = "LLM_PROVIDER", default_value = "openai")]
    pub provider: LLMProvider,

    #[arg(long = "llm-api-key", env = "LLM_API_KEY", hide_env_values = true)]
    pub api_key: String,

    #[arg(long = "llm-model", env = "LLM_MODEL")]
    pub model: Option<String>,

    #[arg(long = "llm-base-url", env = "LLM_BASE_URL")]
    pub base_url: Option<Url>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct GenerationArgs {
    #[arg(long, env = "MAX_ATTEMPTS", default_value_t = 2)]
    pub max_attempts: u8,

    #[arg(long, env = "MAX_OUTPUT_TOKENS", default_value_t = 1100)]
    pub max_output_tokens: u32,

    #[arg(long, env = "PLAN_VALIDATION", default_value = "strict")]
    pub plan_validation: PlanValidation,
}

#[derive(Debug, Clone, clap::Args)]
pub struct PlanArgs {
    #[arg(long, env = "HEALTHFLOW_URL", default_value = "http://localhost:3333")]
    pub server_url: Url,

    #[arg(long, env = "HEALTHFLOW_STORE", default_value = ".healthflow/state.json")]
    pub store_path: PathBuf,

    /// What's happening today
    #[arg(long)]
    pub text: Option<String>,

    #[arg(long)]
    pub diet: Option<String>,

    #[arg(long, action = ArgAction::Set)]
    pub low_upf: Option<bool>,

    #[arg(long)]
    pub time: Option<String>,

    /// Use the quick planner: no saved preferences, raw JSON output
    #[arg(long)]
    pub quick: bool,

    /// Copy the shopping list to the terminal clipboard
    #[arg(long)]
    pub copy_shopping: bool,

    /// Write a printable plan to this file
    #[arg(long)]
    pub print: Option<PathBuf>,

    /// Save or unsave a favourite, e.g. "lunch: Lentil soup"
    #[arg(long = "toggle-favourite")]
    pub toggle_favourites: Vec<String>,

    #[arg(long)]
    pub list_favourites: bool,
}

impl From<Args> for HealthflowConfig {
    fn from(args: Args) -> Self {
        HealthflowConfig {
            llm: LLMConfig {
                provider: args.llm.provider,
                api_key: args.llm.api_key,
                model: args.llm.model,
                base_url: args.llm.base_url.map(|url| url.to_string()),
            },
            generation: GenerationConfig {
                max_attempts: args.generation.max_attempts,
                max_output_tokens: args.generation.max_output_tokens,
                plan_validation: args.generation.plan_validation,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["healthflow", "serve", "--llm-api-key", "sk-test"]).unwrap();

        let Command::Serve(args) = cli.command else {
            panic!("expected serve command");
        };
        assert_eq!(args.server.port, 3333);
        assert!(args.server.metrics_enabled);
        assert_eq!(args.llm.provider, LLMProvider::OpenAi);

        let config = HealthflowConfig::from(args);
        assert_eq!(config.generation.max_attempts, 2);
        assert_eq!(config.generation.max_output_tokens, 1100);
        assert_eq!(config.generation.plan_validation, PlanValidation::Strict);
    }

    #[test]
    fn test_plan_args() {
        let cli = Cli::try_parse_from([
            "healthflow",
            "plan",
            "--text",
            "Gym later",
            "--low-upf",
            "false",
            "--toggle-favourite",
            "lunch: Soup",
            "--quick",
        ])
        .unwrap();

        let Command::Plan(args) = cli.command else {
            panic!("expected plan command");
        };
        assert_eq!(args.text.as_deref(), Some("Gym later"));
        assert_eq!(args.low_upf, Some(false));
        assert_eq!(args.toggle_favourites, vec!["lunch: Soup".to_string()]);
        assert!(args.quick);
    }
}
