use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueHint, builder::BoolishValueParser};

/// Command-line arguments for the blogfront binary.
#[derive(Debug, Parser)]
#[command(
    name = "blogfront",
    version,
    about = "Read, publish and delete blog posts from the terminal"
)]
pub struct CliArgs {
    /// Optional path to a configuration file.
    #[arg(
        long = "config-file",
        env = "BLOGFRONT_CONFIG_FILE",
        value_name = "PATH",
        value_hint = ValueHint::FilePath,
        global = true
    )]
    pub config_file: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: GlobalOverrides,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args, Default, Clone)]
pub struct GlobalOverrides {
    /// Base URL of the blog API, e.g. <http://localhost:5000>.
    #[arg(
        long = "api-base-url",
        env = "BLOGFRONT_API_BASE_URL",
        value_name = "URL",
        global = true
    )]
    pub api_base_url: Option<String>,

    /// Override the base log level (trace|debug|info|warn|error).
    #[arg(long = "log-level", value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Toggle JSON logging.
    #[arg(
        long = "log-json",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new(),
        global = true
    )]
    pub log_json: Option<bool>,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// List every post.
    List(ListArgs),
    /// Show one post in full.
    Show(ShowArgs),
    /// Publish a new post.
    Create(CreateArgs),
    /// Delete a post after confirmation.
    Delete(DeleteArgs),
}

#[derive(Debug, Args, Clone, Default)]
pub struct ListArgs {
    /// Print the loaded posts as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args, Clone)]
pub struct ShowArgs {
    /// Server-assigned post id.
    #[arg(value_name = "ID")]
    pub id: String,

    /// Print the post as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Missing fields are sent to local validation as empty strings.
#[derive(Debug, Args, Clone, Default)]
pub struct CreateArgs {
    #[arg(long, default_value = "")]
    pub title: String,

    #[arg(long, default_value = "")]
    pub author: String,

    #[arg(long, conflicts_with = "content_file")]
    pub content: Option<String>,

    /// Read the post body from a file.
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub content_file: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct DeleteArgs {
    /// Server-assigned post id.
    #[arg(value_name = "ID")]
    pub id: String,

    /// Skip the confirmation prompt.
    #[arg(long, short = 'y')]
    pub yes: bool,
}
