use clap::Parser;
use harmonic_chart::{
    analyze_positions, calculate_chart, find_aspects, resolution_guidance, AspectConfig, AspectInfo, BirthMoment,
    ChartData, HarmonicAnalysis,
};
use serde::Serialize;
use std::error::Error;
use tracing_subscriber::EnvFilter;

/// Approximate natal chart with a harmonic reading.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Birth date, YYYY-MM-DD
    #[arg(long)]
    date: String,

    /// Local birth time, HH:MM (24h)
    #[arg(long, default_value = "12:00")]
    time: String,

    /// Hours east of Greenwich of the local time
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    utc_offset: f64,

    /// Widest orb in degrees reported as an aspect
    #[arg(long, default_value_t = AspectConfig::default().max_orb)]
    max_orb: f64,

    #[arg(long)]
    pretty: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Reading {
    chart: ChartData,
    musical_mode: &'static str,
    aspects: Vec<AspectInfo>,
    analysis: HarmonicAnalysis,
    guidance: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let moment = BirthMoment::from_local(&args.date, &args.time, args.utc_offset)?;

    // no remote ephemeris is wired in here
    let chart = calculate_chart(None, &moment);
    let aspects = find_aspects(&chart.planets, &AspectConfig { max_orb: args.max_orb });
    let observations: Vec<_> = aspects.iter().map(AspectInfo::observation).collect();
    let analysis = analyze_positions(&observations, &chart.planets);

    let reading = Reading {
        musical_mode: chart.musical_mode(),
        guidance: resolution_guidance(&analysis),
        chart,
        aspects,
        analysis,
    };

    let output = if args.pretty {
        serde_json::to_string_pretty(&reading)?
    } else {
        serde_json::to_string(&reading)?
    };
    println!("{}", output);
    Ok(())
}
