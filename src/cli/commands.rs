//! CLI command implementations

use anyhow::Result;
use serde::Serialize;
use std::io::{BufRead, Write};
use std::path::Path;

use crate::chat::{ChatEvent, ChatState};
use crate::cli::args::ConfigCommand;
use crate::config::Settings;
use crate::listing::normalize;
use crate::llm::{build_provider, prompts, CompletionProvider, CompletionRequest, Message};
use crate::photo::Photo;

/// Generate a listing for a product photo.
pub async fn describe_photo(
    settings: &Settings,
    image: &Path,
    prompt: Option<&str>,
    json: bool,
) -> Result<()> {
    let photo = Photo::load(image)?;
    tracing::debug!("Loaded photo {} ({})", image.display(), photo.mime);

    let provider = build_provider(settings)?;
    let instruction = prompt.unwrap_or(prompts::LISTING_PROMPT);

    let request = CompletionRequest {
        model: None,
        messages: vec![Message::user(instruction).with_image(photo.to_data_url())],
        max_tokens: Some(settings.api.max_tokens),
    };

    let raw = provider.complete(request).await?;
    let listing = normalize(&raw);

    if json {
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    if listing.is_empty() {
        println!("The model returned no usable content for this photo.");
        return Ok(());
    }

    if !listing.title.is_empty() {
        println!("{}", listing.title);
    }
    if !listing.description.is_empty() {
        if !listing.title.is_empty() {
            println!();
        }
        println!("{}", listing.description);
    }

    Ok(())
}

/// Chat with the assistant, one-shot or as a stdin session.
pub async fn chat(settings: &Settings, message: Option<String>) -> Result<()> {
    let provider = build_provider(settings)?;
    let mut state = ChatState::default();

    if let Some(text) = message {
        state = send_turn(settings, provider.as_ref(), state, text).await;
        if let Some(reply) = state.last_assistant_text() {
            println!("{}", reply);
        }
        return Ok(());
    }

    if let Some(greeting) = state.last_assistant_text() {
        println!("{}", greeting);
    }
    println!("Type a message and press Enter. Ctrl-D ends the session.");

    let stdin = std::io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let text = line.trim();
        if text.is_empty() {
            continue;
        }

        state = send_turn(settings, provider.as_ref(), state, text.to_string()).await;
        if let Some(reply) = state.last_assistant_text() {
            println!("{}", reply);
        }
    }

    Ok(())
}

/// Run one request/response turn through the session store.
async fn send_turn(
    settings: &Settings,
    provider: &dyn CompletionProvider,
    state: ChatState,
    text: String,
) -> ChatState {
    let state = state.apply(ChatEvent::UserSubmitted(text));

    let request = CompletionRequest {
        model: Some(settings.chat.model.clone()),
        messages: state.to_request_messages(settings.chat.history_limit),
        max_tokens: None,
    };

    match provider.complete(request).await {
        Ok(reply) => state.apply(ChatEvent::AssistantReplied(reply)),
        Err(error) => {
            tracing::warn!("Chat completion failed: {:#}", error);
            state.apply(ChatEvent::RequestFailed)
        }
    }
}

/// Handle config subcommands
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let toml = toml::to_string_pretty(settings)?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}

#[derive(Serialize)]
struct DoctorCheck {
    name: &'static str,
    status: &'static str,
    detail: String,
}

#[derive(Serialize)]
struct DoctorReport {
    provider: String,
    model: String,
    chat_model: String,
    checks: Vec<DoctorCheck>,
    notes: Vec<String>,
}

/// Run diagnostic checks to help troubleshoot local setup issues.
pub async fn run_doctor(settings: &Settings, json: bool) -> Result<()> {
    let report = collect_doctor_report(settings)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("lister doctor");
    println!("provider: {}", report.provider);
    println!("model: {} (chat: {})", report.model, report.chat_model);
    println!();

    for check in &report.checks {
        println!("{:<12} {:<8} {}", check.name, check.status, check.detail);
    }

    if !report.notes.is_empty() {
        println!();
        for note in &report.notes {
            println!("{}", note);
        }
    }

    Ok(())
}

fn collect_doctor_report(settings: &Settings) -> Result<DoctorReport> {
    let config_path = Settings::config_path()?;
    let config_exists = config_path.exists();
    let key_set = !settings.api.api_key.trim().is_empty();
    let provider_known = settings.api.provider.eq_ignore_ascii_case("openai");

    let mut notes = Vec::new();
    if !config_exists {
        notes.push("hint: run `lister config init` to create a config file.".to_string());
    }
    if !key_set {
        notes.push(
            "hint: set api.api_key in the config file or export LISTER_OPENAI_API_KEY."
                .to_string(),
        );
    }
    if !provider_known {
        notes.push(format!(
            "warning: api.provider '{}' is not supported; lister will refuse to run.",
            settings.api.provider
        ));
    }

    Ok(DoctorReport {
        provider: settings.api.provider.clone(),
        model: settings.api.model.clone(),
        chat_model: settings.chat.model.clone(),
        checks: vec![
            DoctorCheck {
                name: "config",
                status: if config_exists { "ok" } else { "missing" },
                detail: config_path.display().to_string(),
            },
            DoctorCheck {
                name: "api key",
                status: if key_set { "ok" } else { "missing" },
                detail: "required for describe and chat".to_string(),
            },
            DoctorCheck {
                name: "provider",
                status: if provider_known { "ok" } else { "unknown" },
                detail: "supported: openai".to_string(),
            },
            DoctorCheck {
                name: "endpoint",
                status: "ok",
                detail: if settings.api.endpoint.trim().is_empty() {
                    "provider default".to_string()
                } else {
                    settings.api.endpoint.clone()
                },
            },
        ],
        notes,
    })
}
