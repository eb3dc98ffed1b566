//! Skyquery: look up stars and planets from the API Ninjas astronomy endpoints
//!
//! Usage:
//!   skyquery                 - Open the lookup window
//!   skyquery star <name>     - Print a star lookup as HTML
//!   skyquery planet <name>   - Print a planet lookup as HTML
//!   skyquery help            - Show help

mod app;
mod backend;
mod commands;
mod config;
mod error;
mod form;
mod render;
mod request;
mod ui;

use std::env;
use std::process::ExitCode;

use app::Skyquery;
use backend::api::AstroClient;
use commands::Command;
use config::Config;
use form::Group;
use iced::{window, Size, Task};
use render::ResultsPanel;
use request::RequestDescriptor;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let args: Vec<String> = env::args().skip(1).collect();

    match Command::parse(&args) {
        Command::Window => {
            let Some(client) = load_client() else {
                return ExitCode::FAILURE;
            };
            match start_window(client) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Command::Lookup { group, name } => run_lookup(group, &name),
        Command::Help => {
            println!("{}", Command::help_text());
            ExitCode::SUCCESS
        }
        Command::Invalid { message } => {
            eprintln!("{}", message);
            ExitCode::FAILURE
        }
    }
}

fn load_client() -> Option<AstroClient> {
    match Config::load() {
        Ok(config) => Some(AstroClient::new(&config)),
        Err(e) => {
            eprintln!("Error: {}", e);
            None
        }
    }
}

/// One lookup without a window; prints the rendered HTML fragment.
fn run_lookup(group: Group, name: &str) -> ExitCode {
    let Some(client) = load_client() else {
        return ExitCode::FAILURE;
    };

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to create tokio runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let outcome = match RequestDescriptor::new(group, name) {
        Ok(request) => rt.block_on(client.lookup(&request)),
        Err(e) => Err(e),
    };

    let mut panel = ResultsPanel::default();
    panel.render_outcome(group, &outcome);
    print!("{}", panel.to_html());

    if outcome.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn start_window(client: AstroClient) -> iced::Result {
    tracing::info!("Starting Skyquery window");

    iced::application(Skyquery::title, Skyquery::update, Skyquery::view)
        .theme(Skyquery::theme)
        .window(window::Settings {
            size: Size::new(560.0, 640.0),
            position: window::Position::Centered,
            resizable: true,
            ..Default::default()
        })
        .antialiasing(true)
        .run_with(move || (Skyquery::new(client), Task::none()))
}
