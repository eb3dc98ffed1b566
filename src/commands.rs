//! Command line parsing
//!
//! `skyquery` with no arguments opens the window; `skyquery star <name>`
//! and `skyquery planet <name>` run a single lookup and print HTML.

use crate::form::Group;

/// Parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open the lookup window
    Window,
    /// One-shot lookup: star|planet <name>
    Lookup { group: Group, name: String },
    /// Show help
    Help,
    /// Anything else, with the message to print
    Invalid { message: String },
}

impl Command {
    /// Parse arguments (without the program name)
    pub fn parse(args: &[String]) -> Self {
        let Some(first) = args.first() else {
            return Command::Window;
        };

        match first.as_str() {
            "help" | "--help" | "-h" => Command::Help,
            word => match Group::parse(word) {
                Some(group) => {
                    let name = args[1..].join(" ");
                    if name.trim().is_empty() {
                        Command::Invalid {
                            message: format!("Usage: skyquery {} <name>", group.label()),
                        }
                    } else {
                        Command::Lookup { group, name }
                    }
                }
                None => Command::Invalid {
                    message: format!("Unknown command: {}. Run 'skyquery help' for usage.", word),
                },
            },
        }
    }

    /// Get help text for all commands
    pub fn help_text() -> &'static str {
        r#"Skyquery - look up stars and planets

Usage: skyquery [command]

Commands:
  (none)          Open the lookup window
  star <name>     Look up a star and print the result as HTML
  planet <name>   Look up a planet and print the result as HTML
  help            Show this help message

Configuration:
  SKYQUERY_API_KEY    API Ninjas key (or api_key in the config file)
  SKYQUERY_API_BASE   Override the API base URL"#
    }
}
