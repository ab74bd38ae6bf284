#![warn(unused_extern_crates)]

use anyhow::Result;
use clap::Parser;
use crossterm::style::{Color as TermColor, Stylize};
use facehue::advice::{AdviceKind, AdviceRequester, OpenAiClient, client::DEFAULT_MODEL};
use facehue::pipeline::{Pipeline, load_image};
use facehue::session::Session;
use num_cpus::get as get_cpu_count;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Face photo to extract feature colors from
    image_path: PathBuf,

    /// Write a copy of the image annotated with landmarks and sample points
    #[arg(short, long)]
    trace_output: Option<PathBuf>,

    /// API key for the chat endpoint; color advice is skipped when unset
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Chat model to request advice from
    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,

    /// Max threads for the detector runtime
    #[arg(short, long)]
    max_threads: Option<usize>,
}

fn main() -> Result<()> {
    let filter = EnvFilter::from_default_env();
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(filter)
        .init();

    let args = Args::parse();

    let total_threads = get_cpu_count();
    let threads = args.max_threads.unwrap_or(total_threads).min(total_threads);

    let mut img = load_image(&args.image_path)?;
    let mut pipeline = Pipeline::new(threads)?;

    let record = match &args.trace_output {
        Some(path) => {
            let record = pipeline.extract_trace(&mut img)?;
            img.save(path)?;
            info!("annotated image at {path:?}");
            record
        }
        None => pipeline.extract(&img)?,
    };

    println!("Extracted feature colors:");
    for (region, color) in record.iter() {
        println!("  {} {:9} {}", swatch(color.r, color.g, color.b), region.name(), color);
    }

    let Some(api_key) = args.api_key else {
        println!("\nSet OPENAI_API_KEY to get color advice.");
        return Ok(());
    };

    let client = OpenAiClient::new(api_key).with_model(args.model);
    let requester = AdviceRequester::new(client);

    let mut session = Session::new(record);
    // one dispatch per request kind, joined before rendering
    session.seed(requester.request_all(session.record())?);

    for kind in AdviceKind::ALL {
        let advice = session.ask(&requester, kind)?;

        println!("\n> {}", kind.question());
        for line in &advice.lines {
            println!(
                "  {} {} ({}): {}",
                swatch(line.color.r, line.color.g, line.color.b),
                line.color,
                line.name,
                line.text
            );
        }
    }

    Ok(())
}

fn swatch(r: u8, g: u8, b: u8) -> impl std::fmt::Display {
    "  ".on(TermColor::Rgb { r, g, b })
}
