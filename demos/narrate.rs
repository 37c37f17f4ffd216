// ABOUTME: End-to-end narration demo
// ABOUTME: Reads a photo, fetches narrative and insight, synthesizes and plays speech

use clap::Parser;
use retrocast::audio::decode::Decoder;
use retrocast::audio::output::{CpalOutput, OutputFormat};
use retrocast::audio::PcmDecoder;
use retrocast::playback::{PlaybackSession, PlaybackState};
use retrocast::service::{NarrationClient, ServiceConfig, DEFAULT_VOICE};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::time::sleep;

/// Retrocast narration demo
#[derive(Parser, Debug)]
#[command(name = "narrate")]
#[command(about = "Narrate the history of a photographed place and play it back", long_about = None)]
struct Args {
    /// Path to the photograph
    image: PathBuf,

    /// Prebuilt voice for the spoken narration
    #[arg(short, long, default_value = DEFAULT_VOICE)]
    voice: String,

    /// Also fetch a web-grounded safety briefing for the named place
    #[arg(short, long)]
    insight: Option<String>,

    /// Skip audio playback, print the narration only
    #[arg(long)]
    text_only: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();

    let api_key = std::env::var("GEMINI_API_KEY")
        .map_err(|_| "GEMINI_API_KEY environment variable is not set")?;

    let client = NarrationClient::new(ServiceConfig::new(api_key))?;

    let image = tokio::fs::read(&args.image).await?;
    let mime_type = guess_mime(&args.image);

    println!("Narrating {}...", args.image.display());
    let narrative = client.narrate_scene(&image, mime_type).await?;
    println!("\n{}\n", narrative);

    if let Some(place) = &args.insight {
        let insight = client.safety_insight(place).await?;
        println!("Safety briefing for {}:\n{}\n", place, insight.text);
        for source in &insight.sources {
            println!("  source: {} ({})", source.title.as_deref().unwrap_or("untitled"), source.uri);
        }
        println!();
    }

    if args.text_only {
        return Ok(());
    }

    let clip = client.synthesize_speech(&narrative, &args.voice).await?;
    let decoder = PcmDecoder::new(clip.sample_rate, clip.channels)?;
    let buffer = decoder.decode(&clip.pcm)?;

    println!(
        "Playing {:.1}s of narration ({} Hz, {} channel(s))",
        buffer.duration().as_secs_f64(),
        buffer.sample_rate(),
        buffer.channel_count()
    );

    let output = CpalOutput::open(OutputFormat {
        sample_rate: clip.sample_rate,
        channels: clip.channels,
    })?;

    let mut session = PlaybackSession::new(output);
    session.begin_loading();
    session.play(buffer)?;

    while session.advance() != PlaybackState::Stopped {
        sleep(Duration::from_millis(100)).await;
    }

    // The queue is empty but the device may still hold one callback's worth
    sleep(Duration::from_millis(200)).await;

    session.into_output().close()?;
    Ok(())
}

fn guess_mime(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        _ => "image/jpeg",
    }
}
