use std::io::Write as _;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};

use portfolio::client::chat_widget::Speaker;
use portfolio::client::transport::{ChatTransport, TransportError};
use portfolio::client::{ChatWidget, ContactForm, ContactOutcome, HttpTransport, SubmitOutcome};
use portfolio::config::{self, ServerConfig};
use portfolio::llm::{self, LlmConfig, LlmError, OpenAiClient};
use portfolio::services::contact::ContactSubmission;
use portfolio::{routes, state};

#[derive(Debug, thiserror::Error)]
enum MainError {
    #[error("LLM config: {0}")]
    Llm(#[from] LlmError),
    #[error("client transport: {0}")]
    Transport(#[from] TransportError),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("contact form has invalid fields")]
    ContactInvalid,
    #[error("contact form could not be sent")]
    ContactFailed,
}

#[derive(Parser, Debug)]
#[command(name = "portfolio", about = "Portfolio site server with chat assistant and contact form")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Serve,
    /// Talk to a running server's chat assistant from the terminal.
    Chat(ClientArgs),
    /// Send the contact form to a running server.
    Contact(ContactArgs),
}

#[derive(Args, Debug)]
struct ClientArgs {
    #[arg(long, env = "PORTFOLIO_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    #[arg(long, env = "PORTFOLIO_OWNER", default_value = config::DEFAULT_OWNER)]
    owner: String,
}

#[derive(Args, Debug)]
struct ContactArgs {
    #[command(flatten)]
    client: ClientArgs,
    #[arg(long)]
    name: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    subject: String,
    #[arg(long)]
    message: String,
}

#[tokio::main]
async fn main() -> Result<(), MainError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve().await,
        Command::Chat(args) => chat_repl(args).await,
        Command::Contact(args) => send_contact(args).await,
    }
}

async fn serve() -> Result<(), MainError> {
    let server = ServerConfig::from_env();
    let llm_config = LlmConfig::from_env()?;

    // Non-fatal: the chat endpoint answers 500 until a key is configured.
    if llm_config.api_key.is_none() {
        tracing::warn!(var = llm::config::API_KEY_VAR, "completion API key not set; chat disabled");
    }
    let completions = OpenAiClient::new(&llm_config)?;
    tracing::info!(model = completions.model(), base_url = %llm_config.base_url, "completion client initialized");

    let state = state::AppState::new(Arc::new(completions), llm_config.api_key, &server.owner);
    let app = routes::app(state, &server.website_dir);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", server.port)).await?;
    tracing::info!(port = server.port, website_dir = %server.website_dir.display(), "portfolio listening");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn chat_repl(args: ClientArgs) -> Result<(), MainError> {
    let transport = HttpTransport::new(&args.base_url)?;
    let mut widget = ChatWidget::new(&args.owner);
    print_entries(&widget, 0);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        prompt()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let shown = widget.messages().len();
        let Some(message) = widget.begin(&line) else {
            continue;
        };
        println!("  ...");
        let result = transport.send_chat(&message).await;
        if widget.finish(result) == SubmitOutcome::Failed {
            tracing::debug!("chat turn failed; apology shown");
        }
        // The user's own line is already on screen.
        print_entries(&widget, shown + 1);
    }
    Ok(())
}

fn prompt() -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    write!(stdout, "> ")?;
    stdout.flush()
}

fn print_entries(widget: &ChatWidget, from: usize) {
    for entry in widget.messages().iter().skip(from) {
        let who = match entry.role {
            Speaker::User => "you",
            Speaker::Bot => "assistant",
        };
        println!("{who}: {}", entry.content);
    }
}

async fn send_contact(args: ContactArgs) -> Result<(), MainError> {
    let transport = HttpTransport::new(&args.client.base_url)?;
    let mut form = ContactForm::new();
    form.values = ContactSubmission { name: args.name, email: args.email, subject: args.subject, message: args.message };

    let outcome = form.submit(&transport).await;
    if let Some(notice) = form.notice() {
        println!("{} {}", notice.title(), notice.description());
    }
    match outcome {
        ContactOutcome::Sent => Ok(()),
        ContactOutcome::Invalid(errors) => {
            for e in &errors {
                eprintln!("{e}");
            }
            Err(MainError::ContactInvalid)
        }
        ContactOutcome::Failed | ContactOutcome::Busy => Err(MainError::ContactFailed),
    }
}
