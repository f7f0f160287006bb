//! blogfront: terminal front end for the blog REST API.
//! Each command is one page load: it fetches what it needs and drives one component.
#![deny(clippy::all, clippy::pedantic)]

mod handlers;
mod io;
mod print;

use std::process;

use blogfront::{
    application::error::AppError,
    config::{self, Command, Settings},
    infra::{api::HttpBlogApi, telemetry},
};
use tracing::{Dispatch, Level, dispatcher, error};
use tracing_subscriber::fmt as tracing_fmt;

use handlers::{create, delete, list, show};

/// Everything a handler needs: the API client and the resolved settings.
pub struct Ctx {
    pub api: HttpBlogApi,
    pub settings: Settings,
}

impl Ctx {
    pub fn new(settings: Settings) -> Result<Self, AppError> {
        let api = HttpBlogApi::new(settings.api.base_url.as_str())?;
        Ok(Self { api, settings })
    }
}

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        report_application_error(&error);
        process::exit(1);
    }
}

fn report_application_error(error: &AppError) {
    if dispatcher::has_been_set() {
        error!(error = %error, "command failed");
        return;
    }

    let subscriber = tracing_fmt()
        .with_max_level(Level::ERROR)
        .with_writer(std::io::stderr)
        .finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %error, "command failed");
    });
}

async fn run() -> Result<(), AppError> {
    let (cli, settings) = config::load_with_cli()?;
    telemetry::init(&settings.logging)?;
    let ctx = Ctx::new(settings)?;

    match cli.command {
        Command::List(args) => list::handle(&ctx, args).await,
        Command::Show(args) => show::handle(&ctx, args).await,
        Command::Create(args) => create::handle(&ctx, args).await,
        Command::Delete(args) => delete::handle(&ctx, args, &mut io::Terminal).await,
    }
}
