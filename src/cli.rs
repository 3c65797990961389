// src/cli.rs
//
// Command-line frontend. Same operations as the GUI: scrape a batch (and
// export it), sync a batch into the raw worksheet, dashboard aggregates over
// the enriched worksheet, and monthly counts over any worksheet.

use std::{collections::HashSet, error::Error, path::PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::{
    config::options::{AppOptions, DashboardOptions, ExportFormat, ScrapeOptions, StoreOptions},
    dashboard::{self, compute_aggregates, Aggregates, Filters, GeoReference},
    dataset::{self, IncidentDataset, DATE_COL},
    file,
    progress::Progress,
    scrape::{self, ScrapeReport},
    store::{LocalWorkbook, Workbook},
    sync,
};

#[derive(Parser, Debug)]
#[command(name = "cli", version, about = "Scrape monthly incident listings and summarize them")]
pub struct Cli {
    /// Store root (one folder per spreadsheet). Overrides INCIDENT_SCRAPE_STORE.
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch the selected months and export the batch
    Scrape {
        #[command(flatten)]
        select: ScrapeArgs,
        #[command(flatten)]
        export: ExportArgs,
    },
    /// Fetch the selected months and append new incidents to the raw worksheet
    Sync {
        #[command(flatten)]
        select: ScrapeArgs,
        /// Shared secret; must match INCIDENT_SCRAPE_SECRET
        #[arg(long, default_value = "")]
        secret: String,
        /// Target worksheet (defaults to the raw zone)
        #[arg(long)]
        sheet: Option<String>,
    },
    /// Aggregate views over the enriched worksheet
    Dashboard {
        /// Comma-separated states to keep (default: all)
        #[arg(long, value_delimiter = ',')]
        states: Vec<String>,
        /// Inclusive year range, e.g. 2017-2019 or 2018
        #[arg(long)]
        years: Option<String>,
        /// Region reference for the geo view
        #[arg(long)]
        geojson: Option<PathBuf>,
        /// Write the filtered rows to this file
        #[arg(long)]
        export: Option<String>,
        #[arg(long, value_enum, default_value_t = Format::Csv)]
        format: Format,
    },
    /// Incident counts by calendar month
    Monthly {
        /// Worksheet to count (defaults to the raw zone)
        #[arg(long)]
        sheet: Option<String>,
    },
}

#[derive(Args, Debug)]
pub struct ScrapeArgs {
    /// Years to fetch, comma-separated
    #[arg(long, value_delimiter = ',')]
    pub years: Vec<i32>,
    /// Month abbreviations, comma-separated (Jan,Feb,…)
    #[arg(long, value_delimiter = ',')]
    pub months: Vec<String>,
    #[arg(long)]
    pub base_url: Option<String>,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file; a bare stem takes the format's extension
    #[arg(short, long)]
    pub out: Option<String>,
    #[arg(long, value_enum, default_value_t = Format::Csv)]
    pub format: Format,
    #[arg(long)]
    pub no_headers: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Csv,
    Tsv,
}

impl From<Format> for ExportFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Csv => ExportFormat::Csv,
            Format::Tsv => ExportFormat::Tsv,
        }
    }
}

/// Scrape progress on stderr, one line per unit.
struct CliProgress {
    done: usize,
    total: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn unit_done(&mut self, year: i32, month: &str, records: usize) {
        self.done += 1;
        eprintln!("[{}/{}] {month}-{year}: {records} incident(s)", self.done, self.total);
    }
    fn unit_skipped(&mut self, year: i32, month: &str, reason: &str) {
        self.done += 1;
        eprintln!("[{}/{}] {month}-{year}: skipped ({reason})", self.done, self.total);
    }
}

pub fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let mut opts = AppOptions { store: StoreOptions::from_env(), ..AppOptions::default() };
    if let Some(root) = cli.store {
        opts.store.root = root;
    }

    match cli.command {
        Command::Scrape { select, export } => {
            apply_scrape_args(&mut opts.scrape, select);
            opts.export.format = export.format.into();
            opts.export.include_headers = !export.no_headers;
            if let Some(out) = export.out.as_deref() {
                opts.export.set_path(out);
            }

            let report = scrape_batch(&opts.scrape);
            if report.records.is_empty() {
                println!("Nothing to export");
                return Ok(());
            }
            let ds = report.to_dataset();
            let path = file::write_export_single(&opts.export, &ds.headers, &ds.rows, None)?;
            logf!("Export: OK rows={} → {}", ds.row_count(), path.display());
            println!("Exported {} incident(s) → {}", ds.row_count(), path.display());
        }

        Command::Sync { select, secret, sheet } => {
            if !sync::check_secret(opts.store.secret.as_deref(), &secret) {
                return Err("Incorrect secret; nothing was written".into());
            }
            apply_scrape_args(&mut opts.scrape, select);
            let sheet = sheet.unwrap_or_else(|| opts.store.raw_sheet.clone());

            let report = scrape_batch(&opts.scrape);
            let mut wb = LocalWorkbook::open(&opts.store.root, &opts.store.spreadsheet);
            let outcome = sync::sync_incidents(&mut wb, &sheet, &report.records)?;
            println!("{}", outcome.message());
        }

        Command::Dashboard { states, years, geojson, export, format } => {
            let mut dash = DashboardOptions::default();
            if let Some(path) = geojson {
                dash.geojson_path = path;
            }

            let ds = load_dashboard_dataset(&opts.store)?;
            let mut filters = Filters::all(&ds);
            if !states.is_empty() {
                filters.states = states.into_iter().map(|s| s.trim().to_string()).collect::<HashSet<_>>();
            }
            if let Some(text) = years.as_deref() {
                let (from, to) = parse_year_range(text)?;
                filters = filters.with_years(from, to);
            }

            let geo = match GeoReference::load(&dash.geojson_path, &dash.geo_name_key) {
                Ok(g) => Some(g),
                Err(e) => {
                    logw!("Geo: {e}; map view omitted");
                    None
                }
            };

            let agg = compute_aggregates(&ds, &filters, geo.as_ref());
            print_aggregates(&agg);

            if let Some(out) = export.as_deref() {
                opts.export = opts.export.with_stem(crate::config::consts::DEFAULT_FILTERED_FILE);
                opts.export.format = format.into();
                opts.export.set_path(out);
                let ix = filters.filter_indices(&ds);
                let path = file::write_export_single(&opts.export, &ds.table.headers, &ds.table.rows, Some(ix.as_slice()))?;
                println!("Exported {} filtered row(s) → {}", ix.len(), path.display());
            }
        }

        Command::Monthly { sheet } => {
            let sheet = sheet.unwrap_or_else(|| opts.store.raw_sheet.clone());
            let wb = LocalWorkbook::open(&opts.store.root, &opts.store.spreadsheet);
            let table = wb.read_all(&sheet)?;
            let col = table
                .column(DATE_COL)
                .ok_or_else(|| format!("Worksheet '{sheet}' has no {DATE_COL} column"))?;
            let dates = (0..table.row_count()).filter_map(|i| dataset::parse_date(table.cell(i, col)));

            println!("Month  Events");
            for m in dashboard::monthly_counts(dates) {
                println!("{:>5}  {:>6}", m.month, m.count);
            }
        }
    }
    Ok(())
}

fn apply_scrape_args(scrape: &mut ScrapeOptions, args: ScrapeArgs) {
    if !args.years.is_empty() {
        scrape.years = args.years;
    }
    if !args.months.is_empty() {
        scrape.months = args.months.into_iter().map(|m| m.trim().to_string()).collect();
    }
    if let Some(url) = args.base_url {
        scrape.base_url = url;
    }
}

fn scrape_batch(opts: &ScrapeOptions) -> ScrapeReport {
    let mut prog = CliProgress { done: 0, total: 0 };
    let report = scrape::run(opts, Some(&mut prog));
    eprintln!(
        "Total incidents scraped: {} (skipped months: {}, bad dates: {})",
        report.count(),
        report.skipped.len(),
        report.bad_dates
    );
    report
}

pub fn load_dashboard_dataset(store: &StoreOptions) -> Result<IncidentDataset, Box<dyn Error>> {
    let wb = LocalWorkbook::open(&store.root, &store.spreadsheet);
    let table = wb.read_all(&store.dashboard_sheet)?;
    logf!("Dashboard: loaded '{}' rows={}", store.dashboard_sheet, table.row_count());
    Ok(IncidentDataset::from_table(table))
}

/// "2017-2019" or a single "2018".
pub fn parse_year_range(text: &str) -> Result<(i32, i32), Box<dyn Error>> {
    let text = text.trim();
    let (a, b) = text.split_once('-').unwrap_or((text, text));
    let from: i32 = a.trim().parse().map_err(|_| format!("Bad year range: {text}"))?;
    let to: i32 = b.trim().parse().map_err(|_| format!("Bad year range: {text}"))?;
    Ok((from.min(to), from.max(to)))
}

fn print_aggregates(agg: &Aggregates) {
    println!("Filtered incidents: {}", agg.rows);

    println!("\n== Trend (date, state) ==");
    for t in &agg.trend {
        println!("{}  {:<24} {:>4}", t.date, t.state, t.count);
    }

    println!("\n== Incidents by state (map) ==");
    match &agg.geo {
        Some(rows) => {
            for s in rows {
                println!("{:<24} {:>6}", s.state, s.count);
            }
        }
        None => println!("(no region reference loaded)"),
    }

    println!("\n== Actions ==");
    for a in &agg.actions {
        println!("{:<24} {:>6}", a.action, a.total);
    }

    println!("\n== State × year ==");
    let hm = &agg.heatmap;
    let mut head = format!("{:<24}", "");
    for y in &hm.years {
        head.push_str(&format!(" {y:>6}"));
    }
    println!("{head}");
    for (state, row) in hm.states.iter().zip(&hm.counts) {
        let mut line = format!("{state:<24}");
        for c in row {
            line.push_str(&format!(" {c:>6}"));
        }
        println!("{line}");
    }

    println!("\n== Casualties by date ==");
    for c in &agg.casualties {
        println!("{}  fatalities {:>4}  injuries {:>4}", c.date, c.fatalities, c.injuries);
    }

    println!("\n== By month ==");
    for m in &agg.monthly {
        println!("{:>5}  {:>6}", m.month, m.count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_range_forms() {
        assert_eq!(parse_year_range("2017-2019").unwrap(), (2017, 2019));
        assert_eq!(parse_year_range(" 2019 - 2017 ").unwrap(), (2017, 2019));
        assert_eq!(parse_year_range("2018").unwrap(), (2018, 2018));
        assert!(parse_year_range("last year").is_err());
    }

    #[test]
    fn subcommands_parse() {
        let cli = Cli::try_parse_from([
            "cli", "--store", "tmp", "scrape", "--years", "2017,2018", "--months", "Jan,Feb", "--format", "tsv",
        ])
        .unwrap();
        assert_eq!(cli.store, Some(PathBuf::from("tmp")));
        match cli.command {
            Command::Scrape { select, export } => {
                assert_eq!(select.years, vec![2017, 2018]);
                assert_eq!(select.months, vec!["Jan", "Feb"]);
                assert_eq!(export.format, Format::Tsv);
            }
            other => panic!("unexpected {other:?}"),
        }

        let cli = Cli::try_parse_from(["cli", "dashboard", "--states", "Bihar,Odisha", "--years", "2018"]).unwrap();
        assert!(matches!(cli.command, Command::Dashboard { ref states, .. } if states.len() == 2));
    }
}
