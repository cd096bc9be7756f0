//! claude-profiles CLI - Scaffold Claude Code configuration by project stack.

use clap::{CommandFactory, Parser};
use claude_profiles::cli::{Cli, Commands};
use claude_profiles::commands::{self, Output};
use claude_profiles::store::ProfileStore;
use claude_profiles::{Error, action_log};
use serde_json::json;
use std::process;
use std::time::Instant;

fn main() {
    let cli = Cli::parse();
    let json_output = cli.json;

    // Serialize command for logging
    let (cmd_name, args_json) = serialize_command(&cli.command);

    // Start timing
    let start = Instant::now();

    // Execute command
    let result = run_command(cli.command, json_output);

    // Calculate duration
    let duration = start.elapsed().as_millis() as u64;

    // Determine success/error
    let (success, error) = match &result {
        Ok(_) => (true, None),
        Err(e) => (false, Some(e.to_string())),
    };

    // Log the invocation (silently fails if logging encounters errors)
    let _ = action_log::log_action(&cmd_name, args_json, success, error, duration);

    // Handle result
    if let Err(e) = result {
        report_error(&e, json_output);
        process::exit(1);
    }
}

fn run_command(command: Option<Commands>, json_output: bool) -> Result<(), Error> {
    match command {
        Some(Commands::Detect { directory }) => {
            let result = commands::detect(&directory)?;
            output(&result, json_output);
        }

        Some(Commands::List) => {
            let result = commands::list()?;
            output(&result, json_output);
        }

        Some(Commands::Show { name }) => {
            let result = commands::show(&name)?;
            output(&result, json_output);
        }

        Some(Commands::Apply {
            name,
            variant,
            directory,
            dry_run,
        }) => {
            let result = commands::apply(&name, variant, &directory, dry_run)?;
            output(&result, json_output);
        }

        Some(Commands::Init { force }) => {
            let result = commands::init(force)?;
            output(&result, json_output);
        }

        Some(Commands::Diff { name, directory }) => {
            let result = commands::diff(&name, &directory)?;
            output(&result, json_output);
        }

        None => {
            let _ = Cli::command().print_help();
        }
    }
    Ok(())
}

/// Print a command result as JSON or human-readable text.
fn output<T: Output>(result: &T, json_output: bool) {
    if json_output {
        match serde_json::to_string_pretty(result) {
            Ok(text) => println!("{text}"),
            Err(e) => eprintln!(r#"{{"error": "{e}"}}"#),
        }
    } else {
        println!("{}", result.human());
    }
}

/// Print an error to stderr, with a hint where one helps.
fn report_error(error: &Error, json_output: bool) {
    if json_output {
        eprintln!("{}", json!({ "error": error.to_string() }));
        return;
    }

    eprintln!("Error: {error}");
    match error {
        Error::ProfileNotFound(_) => {
            let names = ProfileStore::open().list();
            if !names.is_empty() {
                eprintln!("Available profiles: {}", names.join(", "));
            }
        }
        Error::DetectionFailed => {
            eprintln!("Use `claude-profiles list` to see available profiles.");
        }
        _ => {}
    }
}

/// Serialize the parsed command into (name, args) for the history log.
fn serialize_command(command: &Option<Commands>) -> (String, serde_json::Value) {
    match command {
        Some(Commands::Detect { directory }) => {
            ("detect".to_string(), json!({ "directory": directory }))
        }
        Some(Commands::List) => ("list".to_string(), json!({})),
        Some(Commands::Show { name }) => ("show".to_string(), json!({ "name": name })),
        Some(Commands::Apply {
            name,
            variant,
            directory,
            dry_run,
        }) => (
            "apply".to_string(),
            json!({
                "name": name,
                "variant": variant,
                "directory": directory,
                "dry_run": dry_run,
            }),
        ),
        Some(Commands::Init { force }) => ("init".to_string(), json!({ "force": force })),
        Some(Commands::Diff { name, directory }) => (
            "diff".to_string(),
            json!({ "name": name, "directory": directory }),
        ),
        None => ("help".to_string(), serde_json::Value::Null),
    }
}
