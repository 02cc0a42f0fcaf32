//! CLI entrypoint for Boardroom
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use boardroom_application::{
    ConversationLogger, DecideTurnUseCase, GenerateReplyUseCase, NoConversationLogger,
    TurnDispatcher,
};
use boardroom_domain::BoardSession;
use boardroom_infrastructure::{ConfigLoader, FileConfig, JsonlConversationLogger, OpenAiChatGateway};
use boardroom_presentation::{BoardRepl, Cli, ConsoleFormatter};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Initialize logging based on verbosity level. In chat mode diagnostics
    // go to a file so they don't interleave with the REPL.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let _log_guard = if cli.chat {
        let log_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("boardroom")
            .join("logs");
        let appender = tracing_appender::rolling::daily(log_dir, "boardroom.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_ansi(false)
            .with_target(false)
            .init();
        Some(guard)
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
        None
    };

    info!("Starting Boardroom");

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow::anyhow!(e))?
    };

    // Session profile: config defaults, overridden by CLI flags
    let mut context = config.board.board_context();
    if let Some(company) = &cli.company {
        context.company_name = company.clone();
    }
    if let Some(industry) = &cli.industry {
        context.industry = industry.clone();
    }
    if let Some(country) = &cli.country {
        context.country = country.clone();
    }
    let session = BoardSession::new(context);

    // Per-turn call parameters
    let mut params = config.chat.turn_params();
    if let Some(model) = &cli.model {
        params = params.with_model(model.clone());
    }

    // === Dependency Injection ===
    let gateway = Arc::new(OpenAiChatGateway::from_config(&config.provider.openai)?);
    let conversation_logger = build_conversation_logger(&config);

    let dispatcher = TurnDispatcher::new(
        DecideTurnUseCase::new(gateway.clone())
            .with_conversation_logger(conversation_logger.clone()),
        GenerateReplyUseCase::new(gateway).with_conversation_logger(conversation_logger.clone()),
        params,
    )
    .with_conversation_logger(conversation_logger);

    // Chat mode
    if cli.chat {
        let repl = BoardRepl::new(dispatcher, session)
            .with_progress(config.repl.show_progress && !cli.quiet)
            .with_history_file(config.repl.history_file.as_ref().map(PathBuf::from));

        repl.run().await?;
        return Ok(());
    }

    // Single message mode - message is required
    let message = match cli.message {
        Some(m) => m,
        None => bail!("Message is required. Use --chat for interactive mode."),
    };

    let mut session = session;
    let outcome = dispatcher.dispatch(&mut session, &message).await?;

    for turn in outcome.appended.iter().skip(1) {
        println!("{}", ConsoleFormatter::turn(turn));
    }

    Ok(())
}

/// Build the conversation transcript logger from config, falling back to
/// the no-op logger when disabled or the file cannot be created.
fn build_conversation_logger(config: &FileConfig) -> Arc<dyn ConversationLogger> {
    if !config.log.conversation_log {
        return Arc::new(NoConversationLogger);
    }

    let path = config
        .log
        .conversation_log_path
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            let name = format!(
                "session-{}.jsonl",
                chrono::Utc::now().format("%Y%m%d-%H%M%S")
            );
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("boardroom")
                .join("conversations")
                .join(name)
        });

    match JsonlConversationLogger::new(&path) {
        Some(logger) => {
            info!("Conversation log: {}", logger.path().display());
            Arc::new(logger)
        }
        None => Arc::new(NoConversationLogger),
    }
}
