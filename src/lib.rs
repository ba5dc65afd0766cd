pub mod cli;
pub mod config;
pub mod error;
pub mod generate;
pub mod publish;
pub mod tts;
pub mod vocab;

use std::fs;
use std::process::ExitCode;

use anyhow::Context;

use cli::{Cli, Commands};
use config::{ApiToken, Settings};
use tts::botnoi::BotnoiClient;
use tts::Voice;
use vocab::VocabItem;

pub fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    setup_tracing(cli.verbose);

    let settings = Settings::with_dirs(cli.source_dir, cli.dest_dir);

    match cli.command {
        Commands::Generate => batch(settings),
        Commands::Single(args) => single(args, settings),
        Commands::Vocab(args) => vocab_table(args),
    }
}

fn setup_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn batch(settings: Settings) -> anyhow::Result<ExitCode> {
    let token = ApiToken::from_env()?;
    settings.ensure_dirs().context("create audio directories")?;
    let client = BotnoiClient::new(&settings, token).context("build http client")?;

    let vocab = vocab::default_vocabulary();
    println!("Starting generation for {} items...", vocab.len());

    let report = generate::run_batch(&client, &settings, &vocab, &Voice::default());

    println!("\nSummary:");
    println!("  Generated: {}", report.generated.len());
    println!("  Failed:    {}", report.failed.len());
    for (filename, reason) in &report.failed {
        println!("    - {filename}: {reason}");
    }
    println!(
        "  Copied to published dir: {} of {}",
        report.copied.len(),
        report.generated.len()
    );

    Ok(ExitCode::from(report.exit_code()))
}

fn single(args: cli::SingleArgs, settings: Settings) -> anyhow::Result<ExitCode> {
    let token = ApiToken::from_env()?;
    settings.ensure_dirs().context("create audio directories")?;
    let client = BotnoiClient::new(&settings, token).context("build http client")?;

    let item = VocabItem::new(args.text, args.output);
    let voice = Voice {
        speaker: args.speaker,
        volume: args.volume,
        speed: args.speed,
    };

    let published = generate::generate_one(&client, &settings, &item, &voice)
        .and_then(|path| {
            publish::copy_to_public(&settings, &item.filename)?;
            Ok(path)
        });

    match published {
        Ok(path) => {
            let size = fs::metadata(&path).map(|meta| meta.len()).unwrap_or(0);
            println!("[ok] {} -> {} ({size} bytes)", item.text, path.display());
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("[fail] {}: {err}", item.filename);
            Ok(ExitCode::from(2))
        }
    }
}

fn vocab_table(args: cli::VocabArgs) -> anyhow::Result<ExitCode> {
    let vocab = vocab::default_vocabulary();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&vocab)?);
        return Ok(ExitCode::SUCCESS);
    }

    for item in &vocab {
        println!("{:24} {}", item.filename, item.text);
    }
    Ok(ExitCode::SUCCESS)
}
