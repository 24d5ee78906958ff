// File: crates/playground-demo/src/main.rs
// Summary: Demo host: loads a temperature dataset (CSV/JSON), renders the chart to SVG, replays a pointer sweep and a click.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use futures::executor::LocalPool;
use futures::FutureExt;
use playground_chart::theme;
use playground_chart::{
    ChartConfig, ChartProps, ClickEvent, ClickFuture, ClickPayload, Dataset, HostLayout, PlaygroundChart, PointerInput,
    Record, WidgetAdapter, WidgetIds,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 450.0;

fn main() -> Result<()> {
    init_tracing();

    // Usage: playground-demo [DATA.csv|DATA.json] [CONFIG.json] [THEME]
    let mut args = std::env::args().skip(1);
    let raw = args.next().unwrap_or_else(|| "data/temperatures.csv".to_string());
    let config = match args.next() {
        Some(p) => ChartConfig::from_json_file(&p)?,
        None => ChartConfig::default(),
    };
    let theme = theme::find(&args.next().unwrap_or_else(|| "light".to_string()));

    let path = resolve_path(&raw)?;
    let dataset = load_dataset(&path, &config).with_context(|| format!("failed to load '{}'", path.display()))?;
    info!(records = dataset.len(), path = %path.display(), theme = %theme.name, "dataset loaded");
    if dataset.is_empty() {
        anyhow::bail!("no records loaded; check the header row.");
    }

    let mut pool = LocalPool::new();
    let mut widget = WidgetAdapter::new(chart(), pool.spawner());
    let (date_field, value_field) = (config.date_field.clone(), config.value_field.clone());
    let props = ChartProps::new(dataset, WIDTH, HEIGHT)
        .with_theme(theme)
        .with_config(config)
        .with_layout(HostLayout { surface_left: 24.0, surface_top: 96.0, ..HostLayout::default() })
        .with_ids(WidgetIds { item_id: "demo-item".into(), page_id: "demo-page".into(), app_uid: "demo".into() })
        .with_click_trigger(move |event: ClickEvent, payload: ClickPayload| {
            log_click(&date_field, &value_field, event, payload)
        });
    let margins = props.config.margins;
    widget.attach(props);

    let out = out_name_with(&path, "static");
    widget.surface().write_svg(&out)?;
    info!(path = %out.display(), "wrote static scene");

    // Sweep the pointer along the vertical middle of the plot.
    let plot_w = WIDTH - margins.hsum() as f64;
    let mid_y = margins.top as f64 + (HEIGHT - margins.vsum() as f64) / 2.0;
    for step in 0..=8 {
        let x = margins.left as f64 + plot_w * step as f64 / 8.0;
        widget.dispatch(PointerInput::Move { x, y: mid_y })?;
        if let Some(p) = widget.hooks().selected() {
            info!(x, record = p.index, value = p.value, "hover");
        }
    }

    let out = out_name_with(&path, "hover");
    widget.surface().write_svg(&out)?;
    if let Some(t) = widget.tooltip().get() {
        std::fs::write(out.with_extension("html"), t.to_html())?;
    }
    info!(path = %out.display(), "wrote hovered scene");

    // Click right on the dot of the last selection.
    let dot = widget.hooks().handles().map(|h| h.dot);
    let center = dot.and_then(|d| {
        let s = widget.surface();
        let cx: f64 = s.attr(d, "cx")?.parse().ok()?;
        let cy: f64 = s.attr(d, "cy")?.parse().ok()?;
        Some((cx + margins.left as f64, cy + margins.top as f64))
    });
    match center {
        Some((x, y)) => {
            let spawned = widget.dispatch(PointerInput::Click { x, y })?;
            pool.run_until_stalled();
            info!(spawned, "click replayed");
        }
        None => warn!("no selection to click"),
    }

    widget.dispatch(PointerInput::LeaveRoot)?;
    widget.detach();
    Ok(())
}

fn init_tracing() {
    // RUST_LOG=playground_chart=trace for per-event resolution.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,playground_chart=debug"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_target(true).compact().try_init();
}

#[cfg(feature = "skia")]
fn chart() -> PlaygroundChart {
    info!("measuring tooltip text with skia");
    PlaygroundChart::with_measure(Box::new(playground_chart::text::SkiaTextMeasure::new()))
}

#[cfg(not(feature = "skia"))]
fn chart() -> PlaygroundChart {
    PlaygroundChart::new()
}

fn log_click(date_field: &str, value_field: &str, event: ClickEvent, payload: ClickPayload) -> ClickFuture {
    let date = payload.record.text(date_field).unwrap_or("?").to_string();
    let value = payload.record.number(value_field);
    async move {
        let record = &payload.record;
        info!(
            client_x = event.client_x,
            client_y = event.client_y,
            date = %date,
            value,
            json = %serde_json::to_string(record.as_map()).unwrap_or_default(),
            "click trigger"
        );
        true
    }
    .boxed_local()
}

/// Resolve path as given, then relative to this crate.
fn resolve_path(raw: &str) -> Result<PathBuf> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok(p.to_path_buf());
    }
    let alt = Path::new(env!("CARGO_MANIFEST_DIR")).join(raw);
    if alt.exists() {
        return Ok(alt);
    }
    anyhow::bail!("file not found: {}", p.display());
}

/// Produce output file name like target/out/playground_<stem>_<suffix>.svg
fn out_name_with(input: &Path, suffix: &str) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    let mut out = PathBuf::from("target/out");
    out.push(format!("playground_{stem}_{suffix}.svg"));
    out
}

fn load_dataset(path: &Path, config: &ChartConfig) -> Result<Dataset> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => load_json(path),
        _ => load_csv(path, config),
    }
}

/// A JSON array of objects, each kept as-is.
fn load_json(path: &Path) -> Result<Dataset> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let records: Vec<Record> = serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    Ok(records.into())
}

/// CSV with a header row; every column becomes a record field, numbers stay numbers.
/// Headers matching a configured field case-insensitively take the configured spelling; others are lowercased.
fn field_name(header: &str, config: &ChartConfig) -> String {
    [&config.date_field, &config.value_field]
        .into_iter()
        .find(|f| f.eq_ignore_ascii_case(header))
        .cloned()
        .unwrap_or_else(|| header.to_lowercase())
}

fn load_csv(path: &Path, config: &ChartConfig) -> Result<Dataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| field_name(h, config)).collect::<Vec<_>>();
    info!(?headers, "csv headers");
    for want in [&config.date_field, &config.value_field] {
        if !headers.iter().any(|h| h == want) {
            warn!(column = %want, "column not found; every record will be dropped");
        }
    }

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let record = headers.iter().zip(rec.iter()).fold(Record::new(), |r, (h, v)| {
            let value = v
                .parse::<f64>()
                .ok()
                .and_then(serde_json::Number::from_f64)
                .map(serde_json::Value::Number)
                .unwrap_or_else(|| serde_json::Value::String(v.to_string()));
            r.with(h.clone(), value)
        });
        out.push(record);
    }
    Ok(out.into())
}
