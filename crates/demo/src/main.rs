// File: crates/demo/src/main.rs
// Summary: Demo loads a proven/disproven history (CSV or JSON), applies a preset and
// channel visibility, and prints the windowed points plus the Y-axis layout.

use anyhow::{Context, Result};
use proofchart_core::{Channel, ChartSettings, ChartStatus, Sample, Series, ViewState};
use std::path::{Path, PathBuf};

struct Args {
    input: PathBuf,
    preset: Option<String>,
    window: Option<(i64, i64)>,
    hidden: Vec<Channel>,
    settings: Option<PathBuf>,
}

fn main() -> Result<()> {
    let mut log_builder = env_logger::builder();
    if std::env::var_os("RUST_LOG").is_none() {
        log_builder.filter_level(log::LevelFilter::Info);
    }
    log_builder.init();

    let args = parse_args(std::env::args().skip(1))?;
    let settings = match &args.settings {
        Some(p) => load_settings(p)?,
        None => ChartSettings::default(),
    };

    let samples = load_history(&args.input)
        .with_context(|| format!("failed to load history '{}'", args.input.display()))?;
    let raw = samples.len();
    let series = Series::from_samples(samples);
    log::info!("Loaded {} samples ({} kept after dropping empty rows)", raw, series.len());

    let mut view = ViewState::with_settings(series, &settings)?;
    if view.status() == ChartStatus::NoData {
        println!("{}", ChartStatus::NoData.message().unwrap_or_default());
        return Ok(());
    }

    match args.window {
        Some((start, end)) => view.set_window(start, end)?,
        None => {
            let preset = args.preset.as_deref().unwrap_or(settings.default_preset.as_str());
            view.apply_preset(preset)?;
        }
    }
    for ch in &args.hidden {
        view.set_channel(*ch, false);
    }

    println!("Range: {} ({})", view.range_label(), view.active_preset().unwrap_or("custom"));
    if let Some(msg) = view.status().message() {
        println!("{msg}");
        return Ok(());
    }

    let visible: Vec<Channel> = view.visible.iter().collect();
    let header = visible.iter().map(|c| format!("{:>12}", settings.style(*c).label)).collect::<String>();
    println!("{:<20}{}", "date", header);
    for p in view.points() {
        let cols = visible
            .iter()
            .map(|c| match p.value(*c) {
                Some(v) => format!("{v:>12.2}"),
                None => format!("{:>12}", "-"),
            })
            .collect::<String>();
        println!("{:<20}{}", p.full_date, cols);
    }

    let axis = view.axis();
    println!(
        "Y axis: [{}, {}] ticks {:?}",
        axis.domain_low, axis.domain_high, axis.ticks
    );
    Ok(())
}

fn parse_args<I: Iterator<Item = String>>(mut it: I) -> Result<Args> {
    let mut input = None;
    let mut preset = None;
    let mut window = None;
    let mut hidden = Vec::new();
    let mut settings = None;
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--hide" => {
                let key = it.next().context("--hide expects 'proven' or 'disproven'")?;
                let ch = Channel::from_key(&key).with_context(|| format!("unknown channel '{key}'"))?;
                hidden.push(ch);
            }
            "--window" => {
                let mut bound = |name: &str| -> Result<i64> {
                    let raw = it.next().with_context(|| format!("--window expects START END, missing {name}"))?;
                    raw.parse::<i64>().with_context(|| format!("--window {name} '{raw}' is not epoch millis"))
                };
                let start = bound("START")?;
                let end = bound("END")?;
                window = Some((start, end));
            }
            "--settings" => settings = Some(PathBuf::from(it.next().context("--settings expects a path")?)),
            _ if input.is_none() => input = Some(PathBuf::from(arg)),
            _ if preset.is_none() => preset = Some(arg),
            _ => anyhow::bail!("unexpected argument '{arg}'"),
        }
    }
    let input = input.context(
        "usage: proofchart-demo <history.csv|history.json> [preset] \
         [--window START END] [--hide CHANNEL] [--settings FILE]",
    )?;
    if window.is_some() && preset.is_some() {
        anyhow::bail!("give either a preset or --window, not both");
    }
    Ok(Args { input, preset, window, hidden, settings })
}

fn load_settings(path: &Path) -> Result<ChartSettings> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    ChartSettings::from_json(&text).with_context(|| format!("parsing settings {}", path.display()))
}

/// Load samples from `.json` (array of objects) or CSV with `timestamp,proven,disproven` headers.
fn load_history(path: &Path) -> Result<Vec<Sample>> {
    let ext = path.extension().map(|e| e.to_string_lossy().to_lowercase());
    if ext.as_deref() == Some("json") {
        let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        return serde_json::from_str(&text).context("expected a JSON array of samples");
    }

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let mut out = Vec::new();
    for (i, rec) in rdr.deserialize::<Sample>().enumerate() {
        match rec {
            Ok(s) => out.push(s),
            Err(e) => log::warn!("skipping row {}: {}", i + 1, e),
        }
    }
    Ok(out)
}
