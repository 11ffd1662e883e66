//! Command-line surface
//!
//! Builds one request from the arguments (positional or a JSON record), runs
//! it through the workflow and renders the augmented record.

use clap::{ArgGroup, Parser, ValueEnum};
use log::info;
use std::path::PathBuf;

use crate::config::FlowConfig;
use crate::error::FlowError;
use crate::request::Request;
use crate::storage::LocalFs;
use crate::workflow::Workflow;

/// How the finished request is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `Result: <result>`
    Text,
    /// The full request record, with `result`, as JSON
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "fsflow",
    version,
    about = "Route a single filesystem request (read, write, create, delete)"
)]
#[command(group(ArgGroup::new("input").required(true).args(["action", "json"])))]
pub struct Cli {
    /// Action token: read, write, create or delete
    #[arg(requires = "path")]
    pub action: Option<String>,

    /// Target file path
    pub path: Option<PathBuf>,

    /// Content for `write`
    pub content: Option<String>,

    /// A request record such as '{"action":"write","path":"a.txt","content":"hi"}'
    #[arg(long, conflicts_with_all = ["path", "content"])]
    pub json: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
}

impl Cli {
    /// Builds the request described by the arguments.
    pub fn to_request(&self) -> Result<Request, FlowError> {
        if let Some(json) = &self.json {
            return serde_json::from_str(json).map_err(FlowError::InvalidRequest);
        }

        let action = self.action.as_deref().ok_or(FlowError::MissingArgument("action"))?;
        let path = self.path.clone().ok_or(FlowError::MissingArgument("path"))?;

        let request = Request::new(action, path);
        Ok(match &self.content {
            Some(content) => request.with_content(content.as_str()),
            None => request,
        })
    }
}

/// Runs the request described by `cli` and returns the rendered output.
pub fn execute(cli: &Cli, config: &FlowConfig) -> Result<String, FlowError> {
    let request = cli.to_request()?;
    info!(
        "Running {} on {} (base dir: {})",
        request.action(),
        request.path().display(),
        config.base_dir
    );

    let workflow = Workflow::new(LocalFs::new(config.base_dir_path()));
    let done = workflow.run(request)?;
    render(&done, cli.output)
}

/// Formats a finished request for display.
pub fn render(request: &Request, format: OutputFormat) -> Result<String, FlowError> {
    match format {
        OutputFormat::Text => Ok(format!(
            "Result: {}",
            request.result().unwrap_or("<no result>")
        )),
        OutputFormat::Json => serde_json::to_string_pretty(request).map_err(FlowError::Output),
    }
}
