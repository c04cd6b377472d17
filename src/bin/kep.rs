use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use kep_dash::{Client, Frequency, SeriesSource, storage, viz};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "kep",
    version,
    about = "Browse, tabulate & plot mini-kep macroeconomic time series"
)]
struct Cli {
    /// API base URL.
    #[arg(long, global = true, default_value = kep_dash::DEFAULT_BASE_URL)]
    base_url: String,
    /// Request timeout in seconds (no timeout if omitted).
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List series names available at a frequency.
    Names(NamesArgs),
    /// Print one series as date/value pairs.
    Series(SeriesArgs),
    /// Build the two-series table (and optionally save and plot it).
    Table(TableArgs),
}

#[derive(ValueEnum, Clone, Debug)]
enum OutFormat {
    Csv,
    Json,
}

#[derive(Args, Debug)]
struct NamesArgs {
    /// Frequency code or label (a, q, m, d / Annual, Quarterly, ...)
    #[arg(short, long, default_value = "q")]
    freq: Frequency,
}

#[derive(Args, Debug)]
struct SeriesArgs {
    #[arg(short, long, default_value = "q")]
    freq: Frequency,
    /// Series name (e.g., GDP_yoy)
    #[arg(short, long)]
    name: String,
}

#[derive(Args, Debug)]
struct TableArgs {
    #[arg(short, long, default_value = "q")]
    freq: Frequency,
    /// First series (plotted as line1)
    name1: String,
    /// Second series (plotted as line2)
    name2: String,
    /// Save the table to file (format inferred by --format or extension).
    #[arg(long)]
    out: Option<PathBuf>,
    /// Output format (csv or json). If omitted, inferred from --out extension.
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
    /// Create a chart at the given path (.svg or .png).
    #[arg(long)]
    plot: Option<PathBuf>,
    /// Width of the plot (default 600).
    #[arg(long, default_value_t = 600)]
    width: u32,
    /// Height of the plot (default 400).
    #[arg(long, default_value_t = 400)]
    height: u32,
}

fn fmt_opt(v: Option<f64>) -> String {
    match v {
        Some(x) if x.is_finite() => {
            // Format up to 4 decimals, then trim trailing zeros and trailing dot.
            let s = format!("{:.4}", x);
            s.trim_end_matches('0').trim_end_matches('.').to_string()
        }
        _ => "NA".to_string(),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let timeout = cli.timeout_secs.map(Duration::from_secs);
    let client = Client::with_timeout(&cli.base_url, timeout).context("build HTTP client")?;
    match cli.cmd {
        Command::Names(args) => cmd_names(&client, args),
        Command::Series(args) => cmd_series(&client, args),
        Command::Table(args) => cmd_table(&client, args),
    }
}

fn cmd_names(client: &Client, args: NamesArgs) -> Result<()> {
    let names = client
        .list_series_names(args.freq.code())
        .with_context(|| format!("list {} series", args.freq.label()))?;
    for name in names {
        println!("{}", name);
    }
    Ok(())
}

fn cmd_series(client: &Client, args: SeriesArgs) -> Result<()> {
    let ts = client.time_series(args.freq.code(), &args.name)?;
    if ts.is_empty() {
        eprintln!("No data for {} at {} frequency", args.name, args.freq.label());
    }
    for (date, value) in ts.x.iter().zip(&ts.y) {
        println!("{}\t{}", date, fmt_opt(Some(*value)));
    }
    Ok(())
}

fn cmd_table(client: &Client, args: TableArgs) -> Result<()> {
    let table = kep_dash::build_table(client, args.freq.code(), &args.name1, &args.name2)?;

    println!("date\t{}\t{}", args.name1, args.name2);
    for r in table.rows() {
        println!("{}\t{}\t{}", r.date, fmt_opt(r.line1), fmt_opt(r.line2));
    }

    if let Some(path) = args.out.as_ref() {
        let fmt = match args.format {
            Some(OutFormat::Csv) => "csv",
            Some(OutFormat::Json) => "json",
            None => path.extension().and_then(|e| e.to_str()).unwrap_or("csv"),
        }
        .to_ascii_lowercase();
        match fmt.as_str() {
            "csv" => storage::save_csv(&table, path)?,
            "json" => storage::save_json(&table, path)?,
            other => anyhow::bail!("unsupported format: {}", other),
        }
        eprintln!("Saved {} rows to {}", table.len(), path.display());
    }

    if let Some(plot_path) = args.plot.as_ref() {
        viz::plot_table(&table, plot_path, args.width, args.height)?;
        eprintln!("Wrote plot to {}", plot_path.display());
    }

    Ok(())
}
