use std::error::Error;
use std::io::{self, BufRead, Write};

use chat_session::{ChatSession, SessionEvent, Settings};
use colored::Colorize;
use llm_chat_service::error_handler::{ChatServiceError, config_instruction};
use llm_chat_service::health_service::HealthService;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load environment variables from .env when present; a missing file
    // just means stock defaults.
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(llm_chat_service::telemetry::layer())
        .init();

    let settings = Settings::from_env();
    let mut session = ChatSession::new(settings);

    banner(&session);

    let stdin = io::stdin();
    loop {
        print!("{} ", "you>".cyan().bold());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // Ctrl-D
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match input {
            "/quit" | "/exit" => break,
            "/help" => {
                print_help();
                continue;
            }
            "/models" => {
                list_models(&session).await;
                continue;
            }
            "/test" => {
                test_connection(&session).await;
                continue;
            }
            _ => {}
        }

        if let Err(err) = session.send_message(input, render_event).await {
            match err {
                ChatServiceError::Config(cfg_err) => {
                    println!(
                        "{}",
                        config_instruction(session.settings().provider, &cfg_err).yellow()
                    );
                }
                other => println!("{}", other.to_string().red()),
            }
        }
    }

    println!("{}", "See you at the bakery! 🧁".magenta());
    Ok(())
}

fn banner(session: &ChatSession) {
    let settings = session.settings();
    println!("{}", "Cupcake Lab — chat with Sarah 🧁".magenta().bold());
    println!(
        "{}",
        format!(
            "backend: {} | model: {} | streaming: {}",
            settings.provider.label(),
            settings.model,
            if settings.stream_responses { "on" } else { "off" }
        )
        .dimmed()
    );
    println!("{}", "Type /help for commands.".dimmed());
}

fn print_help() {
    println!("  /models  list models the configured backend can serve");
    println!("  /test    test connectivity to the configured backend");
    println!("  /quit    leave the chat");
}

fn render_event(event: SessionEvent) {
    match event {
        // The user already sees what they typed.
        SessionEvent::UserMessage(_) => {}
        SessionEvent::Typing(status) => {
            let line: String = status.chars().take(70).collect::<String>().replace('\n', " ");
            eprint!("\r{:<72}", line.dimmed());
        }
        SessionEvent::Assistant(message) => {
            eprint!("\r{:<72}\r", "");
            println!("{} {}", "sarah>".magenta().bold(), message.content);
            if let Some(thinking) = &message.thinking {
                println!("{}", format!("  (thinking: {thinking})").dimmed());
            }
            if let Some(images) = &message.images {
                for image in images {
                    println!("{}", format!("  [image: {image}]").blue());
                }
            }
        }
    }
}

async fn list_models(session: &ChatSession) {
    let cfg = match session.settings().model_config() {
        Ok(cfg) => cfg,
        Err(err) => {
            print_config_error(session, err);
            return;
        }
    };
    match HealthService::new() {
        Ok(health) => {
            for model in health.fetch_models(&cfg).await {
                println!("  {model}");
            }
        }
        Err(err) => println!("{}", err.to_string().red()),
    }
}

async fn test_connection(session: &ChatSession) {
    let cfg = match session.settings().model_config() {
        Ok(cfg) => cfg,
        Err(err) => {
            print_config_error(session, err);
            return;
        }
    };
    match HealthService::new() {
        Ok(health) => {
            let status = health.test_connection(&cfg).await;
            if status.success {
                println!("{}", status.message.green());
            } else {
                println!("{}", status.message.red());
            }
        }
        Err(err) => println!("{}", err.to_string().red()),
    }
}

fn print_config_error(session: &ChatSession, err: ChatServiceError) {
    match err {
        ChatServiceError::Config(cfg_err) => println!(
            "{}",
            config_instruction(session.settings().provider, &cfg_err).yellow()
        ),
        other => println!("{}", other.to_string().red()),
    }
}
