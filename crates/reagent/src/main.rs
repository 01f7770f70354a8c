//! A command-line agent executor backed by a local Ollama server.

mod tools;

use std::env;
use std::process;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use reagent_core::{AgentBuilder, RunError, DEFAULT_MAX_ITERATIONS};
use reagent_ollama_model::{OllamaConfigBuilder, OllamaProvider};

use tools::TextLengthTool;

const BAR_CHAR: &str = "▎";

struct CliArgs {
    question: String,
    max_iterations: u32,
}

fn parse_args() -> Option<CliArgs> {
    let mut question_parts = Vec::new();
    let mut max_iterations = DEFAULT_MAX_ITERATIONS;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--max-iterations" => {
                max_iterations = args.next()?.parse().ok()?;
            }
            _ => question_parts.push(arg),
        }
    }

    if question_parts.is_empty() {
        return None;
    }
    Some(CliArgs {
        question: question_parts.join(" "),
        max_iterations,
    })
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let Some(args) = parse_args() else {
        eprintln!("usage: reagent \"<question>\" [--max-iterations N]");
        process::exit(2);
    };

    let mut config =
        OllamaConfigBuilder::new().with_timeout(Duration::from_secs(120));
    if let Ok(base_url) = env::var("OLLAMA_BASE_URL") {
        config = config.with_base_url(base_url);
    }
    if let Ok(model) = env::var("OLLAMA_MODEL") {
        config = config.with_model(model);
    }
    let provider = OllamaProvider::new(config.build());

    let progress_style = ProgressStyle::with_template("{spinner} {wide_msg}")
        .unwrap()
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");
    let progress_bar = ProgressBar::new_spinner();
    progress_bar.set_style(progress_style);
    progress_bar.set_message("🤔 Thinking...");
    progress_bar.enable_steady_tick(Duration::from_millis(100));

    let agent = AgentBuilder::with_provider(provider)
        .with_tool(TextLengthTool::new())
        .with_max_iterations(args.max_iterations)
        .on_turn({
            let progress_bar = progress_bar.clone();
            move |turn| {
                progress_bar.suspend(|| {
                    let bar = BAR_CHAR.bright_cyan().to_string();
                    if !turn.thought().is_empty() {
                        println!("{bar}💭 {}", turn.thought());
                    }
                    println!(
                        "{bar}🛠️  {}",
                        turn.action().bright_white().bold()
                    );
                    println!("{bar}📝 {}", turn.action_input());
                    println!("{bar}📏 {}", turn.observation());
                });
            }
        })
        .build()
        .unwrap_or_else(|err| {
            progress_bar.finish_and_clear();
            eprintln!("failed to set up the agent: {err}");
            process::exit(1);
        });

    let result = agent.run(&args.question).await;
    progress_bar.finish_and_clear();

    match result {
        Ok(outcome) => {
            println!(
                "\n{} {}",
                "✅ Final answer:".bright_green(),
                outcome.answer.bright_white().bold()
            );
        }
        Err(err) => {
            eprintln!("\n{} {err}", "⚠️".bright_yellow());
            if let RunError::Unparseable { raw } = &err {
                eprintln!("offending output:\n{raw}");
            }
            process::exit(1);
        }
    }
}
