use clap::Parser;
use sentio_core::{
    ContextHints, EmotionalRecognitionResult, EmotionalTrend, EngineConfig, TimeOfDay,
    UserActivity,
};
use sentio_engine::{ChannelRecorder, EmotionEngine};
use std::io::{self, Write};
use std::sync::Arc;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "sentio", author, version, about, long_about = None)]
struct Args {
    /// Path to the engine config file
    #[arg(short, long, default_value = "sentio.toml", env = "SENTIO_CONFIG")]
    config: String,

    /// What the user is doing (working, relaxing, socializing)
    #[arg(long)]
    activity: Option<String>,

    /// Time of day hint (morning, night)
    #[arg(long)]
    time_of_day: Option<String>,

    /// Print results as JSON lines
    #[arg(long)]
    json: bool,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,
}

#[derive(Debug, PartialEq)]
enum Command<'a> {
    Quit,
    Trend,
    Recent(usize),
    Clear,
    Skip,
    Text(&'a str),
}

const DEFAULT_RECENT: usize = 5;

fn parse_command(line: &str) -> Command<'_> {
    let trimmed = line.trim();
    match trimmed {
        "quit" | "exit" => Command::Quit,
        ":trend" => Command::Trend,
        ":clear" => Command::Clear,
        "" => Command::Skip,
        _ => match trimmed.strip_prefix(":recent") {
            Some(rest) => Command::Recent(rest.trim().parse().unwrap_or(DEFAULT_RECENT)),
            None => Command::Text(trimmed),
        },
    }
}

fn init_logging(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // stdout carries results; logs go to stderr
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn build_hints(args: &Args) -> ContextHints {
    let mut hints = ContextHints::none();
    if let Some(raw) = &args.activity {
        match UserActivity::parse(raw) {
            Some(a) => hints = hints.with_activity(a),
            None => warn!("Ignoring unknown activity '{}'", raw),
        }
    }
    if let Some(raw) = &args.time_of_day {
        match TimeOfDay::parse(raw) {
            Some(t) => hints = hints.with_time_of_day(t),
            None => warn!("Ignoring unknown time of day '{}'", raw),
        }
    }
    hints
}

fn print_result(result: &EmotionalRecognitionResult, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string(result)?);
        return Ok(());
    }
    let secondary = result
        .secondary_emotion
        .map(|e| format!(" (+{})", e))
        .unwrap_or_default();
    println!(
        "[{}] {}{}  v={:+.2} a={:+.2} d={:+.2}  confidence {:.2} ({:?})",
        result.timestamp.format("%H:%M:%S"),
        result.primary_emotion,
        secondary,
        result.dimensions.valence,
        result.dimensions.arousal,
        result.dimensions.dominance,
        result.confidence_score,
        result.confidence_level(),
    );
    Ok(())
}

fn print_trend(trend: &EmotionalTrend, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string(trend)?);
        return Ok(());
    }
    println!(
        "Trend: {}  valence {:?}, arousal {:?}, dominance {:?}  confidence {:.2}",
        trend.dominant_emotion,
        trend.valence_direction,
        trend.arousal_direction,
        trend.dominance_direction,
        trend.confidence,
    );
    Ok(())
}

fn prompt(json: bool) -> io::Result<()> {
    if !json {
        print!("> ");
        io::stdout().flush()?;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.json_logs);

    let config = EngineConfig::load_or_default(&args.config);
    info!(
        "History capacity {}, trend window {}s",
        config.history.capacity, config.history.trend_window_secs
    );

    let (recorder, mut records) = ChannelRecorder::channel(config.history.capacity);
    let drain = tokio::spawn(async move {
        while let Some(record) = records.recv().await {
            debug!(
                emotion = %record.primary_emotion,
                valence = record.valence,
                arousal = record.arousal,
                dominance = record.dominance,
                confidence = record.confidence,
                "{}",
                record.content
            );
        }
    });

    let hints = build_hints(&args);
    let engine = EmotionEngine::with_config(config).with_recorder(Arc::new(recorder));

    if !args.json {
        println!("Sentio ready. Type a message, ':trend', ':recent N', ':clear' or 'quit'.");
    }
    prompt(args.json)?;

    let stdin = io::stdin();
    let mut input = String::new();

    loop {
        input.clear();
        if stdin.read_line(&mut input)? == 0 {
            break;
        }

        match parse_command(&input) {
            Command::Quit => break,
            Command::Skip => {}
            Command::Trend => print_trend(&engine.dominant_trend_default(), args.json)?,
            Command::Recent(n) => {
                for r in engine.recent_states(n) {
                    print_result(&r, args.json)?;
                }
            }
            Command::Clear => {
                engine.clear_history();
                info!("History cleared");
            }
            Command::Text(text) => {
                let result = engine.recognize(text, &hints);
                print_result(&result, args.json)?;
            }
        }

        prompt(args.json)?;
    }

    // Dropping the engine closes the channel so the drain task can finish.
    drop(engine);
    if let Err(e) = drain.await {
        warn!("Record drain task failed: {}", e);
    }

    Ok(())
}
