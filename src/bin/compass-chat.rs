// Compass Chat - multilingual virtual guide in the terminal

use anyhow::Context;
use clap::Parser;
use compass::GuideConfig;
use compass::guide::{ConversationTurn, Prompt, Session, user_message};
use crossterm::style::Stylize;
use std::io::{self, Write};
use std::path::PathBuf;
use termimad::{MadSkin, crossterm::style::Color};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file (JSON); defaults to ./.compass.json then ~/.compass.json
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directions API key (overrides config and GOOGLE_MAPS_API_KEY)
    #[arg(long)]
    api_key: Option<String>,

    /// Print each turn as JSON instead of formatted text
    #[arg(long)]
    json: bool,

    /// Handle a single message and exit
    message: Vec<String>,
}

/// Reads follow-up answers from stdin
struct ConsolePrompt;

impl ConsolePrompt {
    fn read_line(label: &str) -> io::Result<String> {
        print!("{} ", label);
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line.trim().to_string())
    }
}

impl Prompt for ConsolePrompt {
    fn say(&mut self, text: &str) {
        println!("{}", text);
    }

    fn ask(&mut self, label: &str) -> io::Result<String> {
        Self::read_line(label)
    }

    fn select(&mut self, label: &str, options: &[&str]) -> io::Result<String> {
        println!("{}", label);
        for (i, option) in options.iter().enumerate() {
            println!("  {}. {}", i + 1, option);
        }

        loop {
            let answer = Self::read_line(">")?;
            if let Some(choice) = answer
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| options.get(i))
            {
                return Ok(choice.to_string());
            }
            if let Some(choice) = options.iter().find(|o| o.eq_ignore_ascii_case(&answer)) {
                return Ok(choice.to_string());
            }
            println!("Please pick 1-{} or type a name.", options.len());
        }
    }

    fn confirm(&mut self, action: &str) -> io::Result<bool> {
        let answer = Self::read_line(&format!("[{}] y/N:", action))?;
        Ok(matches!(answer.to_lowercase().as_str(), "y" | "yes"))
    }
}

fn create_markdown_skin() -> MadSkin {
    let mut skin = MadSkin::default();

    skin.headers[0].set_fg(Color::Cyan);
    skin.bold.set_fg(Color::White);
    skin.italic.set_fg(Color::Magenta);
    skin.inline_code.set_fg(Color::Yellow);

    skin
}

fn show_turn(skin: &MadSkin, turn: &ConversationTurn, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(turn)?);
        return Ok(());
    }

    if let Some(detail) = &turn.detail {
        println!();
        println!("✅ {}", detail);
    }
    println!();
    skin.print_text(&format!("🤖 **Bot:** {}", turn.translated_response));
    println!();
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("compass=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut config =
        GuideConfig::load(args.config.as_deref()).context("Failed to load configuration")?;
    if let Some(key) = args.api_key {
        config = config.with_api_key(key);
    }
    if config.api_key.is_none() {
        tracing::warn!("No directions API key configured; set {}", compass::config::API_KEY_ENV);
    }

    let session = Session::from_config(&config).context("Failed to start session")?;
    let skin = create_markdown_skin();
    let mut prompt = ConsolePrompt;

    if !args.message.is_empty() {
        let joined = args.message.join(" ");
        let Some(message) = user_message(&joined) else {
            return Ok(());
        };
        let turn = session.respond(message, &mut prompt).await?;
        return show_turn(&skin, &turn, args.json);
    }

    println!("🌍 Multilingual Chatbot & Virtual Guide");
    println!("Your smart assistant for directions, translations, etiquette, and emergencies!\n");
    println!("Commands: /countries, exit\n");

    loop {
        print!("{} ", "You:".bold().cyan());
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let Some(input) = user_message(&input) else {
            continue;
        };

        if input == "exit" || input == "quit" {
            break;
        }

        if input == "/countries" {
            println!("\nCountries with etiquette and emergency info:");
            for country in session.knowledge().countries() {
                println!("  • {}", country);
            }
            println!();
            continue;
        }

        match session.respond(input, &mut prompt).await {
            Ok(turn) => show_turn(&skin, &turn, args.json)?,
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    println!("Goodbye!");
    Ok(())
}
