//! DPR Engine CLI
//!
//! Command-line interface for running projections and matching schemes

use std::io::{self, Write};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use dpr_engine::benchmarks::benchmarks;
use dpr_engine::export::{ChartExporter, ExportFormat};
use dpr_engine::projection::{fiscal_year_label, ProjectionConstants, ProjectionInput, ProjectionResult};
use dpr_engine::scenario::{ScenarioPreset, ScenarioRunner, SweepRow};
use dpr_engine::schemes::{Catalog, FilterCriteria, Scheme};
use dpr_engine::voice::{LineSpeechInput, SpeechInput};
use dpr_engine::Language;

/// Cash-flow projections and funding scheme matching for MSME DPRs
#[derive(Parser)]
#[command(name = "dpr-engine", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    /// Display language (en or te)
    #[arg(long, default_value = "en", global = true)]
    lang: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Project revenue, expenses and cumulative cash for one fiscal year
    Project {
        /// Revenue growth, percent per year (5-24)
        #[arg(long)]
        growth: Option<f64>,
        /// Loan tenure in years (2-10)
        #[arg(long)]
        tenure: Option<u32>,
        /// Working capital coverage in months (1-6)
        #[arg(long)]
        wc_months: Option<u32>,
        /// Start from a preset (pessimistic, base, optimistic)
        #[arg(long)]
        preset: Option<String>,
    },
    /// Search and filter funding schemes
    Schemes {
        #[arg(long, default_value = "")]
        search: String,
        /// all, idea, growth or export
        #[arg(long, default_value = "all")]
        stage: String,
        #[arg(long, default_value = "all")]
        sector: String,
        /// Read the search text from spoken transcripts on stdin
        #[arg(long)]
        listen: bool,
    },
    /// List sector tags used by the catalog
    Sectors,
    /// Show sector benchmarks
    Benchmarks,
    /// Run the pessimistic, base and optimistic presets
    Scenarios,
    /// Project every growth rate for a fixed tenure and working capital
    Sweep {
        #[arg(long, default_value_t = 5)]
        tenure: u32,
        #[arg(long, default_value_t = 3)]
        wc_months: u32,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

impl OutputFormat {
    fn exporter(&self) -> Option<Box<dyn ChartExporter>> {
        match self {
            OutputFormat::Table => None,
            OutputFormat::Json => Some(ExportFormat::Json.exporter()),
            OutputFormat::Csv => Some(ExportFormat::Csv.exporter()),
        }
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("error: {:#}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let language: Language = cli.lang.parse()?;
    let constants = ProjectionConstants::from_env().context("loading projection constants")?;
    let runner = ScenarioRunner::with_constants(constants);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Project { growth, tenure, wc_months, preset } => {
            let base = match preset {
                Some(name) => name.parse::<ScenarioPreset>()?.input(),
                None => ProjectionInput::default(),
            };
            let input = ProjectionInput::new(
                growth.unwrap_or(base.growth_rate_percent),
                tenure.unwrap_or(base.loan_tenure_years),
                wc_months.unwrap_or(base.working_capital_months),
            );
            log::info!("Running projection for {:?}", input);

            let result = runner.run(&input)?;
            match cli.format.exporter() {
                Some(exporter) => exporter.export_projection(&result, today(), &mut out)?,
                None => print_projection(&mut out, &result)?,
            }
        }
        Commands::Schemes { search, stage, sector, listen } => {
            let search = if listen {
                let mut speech = LineSpeechInput::new(io::stdin().lock(), language);
                match speech.listen()? {
                    Some(transcript) => {
                        log::info!("Heard \"{}\"", transcript.text);
                        transcript.text
                    }
                    None => search,
                }
            } else {
                search
            };

            let catalog = Catalog::seed();
            let criteria = FilterCriteria::from_params(Some(&search), Some(&stage), Some(&sector))?;
            let matched = catalog.filter(&criteria);

            match cli.format.exporter() {
                Some(exporter) => exporter.export_schemes(&matched, language, &mut out)?,
                None => print_schemes(&mut out, &matched, language)?,
            }
        }
        Commands::Sectors => {
            for sector in Catalog::seed().sectors() {
                writeln!(out, "{}", sector)?;
            }
        }
        Commands::Benchmarks => {
            for row in benchmarks(language) {
                writeln!(out, "{:<28} {:>10}  {}", row.metric, row.value, row.benchmark)?;
            }
        }
        Commands::Scenarios => {
            let results = runner.run_presets()?;
            let rows: Vec<SweepRow> = results.iter().map(|(_, r)| SweepRow::from(r)).collect();
            match cli.format.exporter() {
                Some(exporter) => exporter.export_sweep(&rows, &mut out)?,
                None => {
                    for ((preset, _), row) in results.iter().zip(&rows) {
                        writeln!(out, "{:<12}", preset.label())?;
                        print_sweep_row(&mut out, row)?;
                    }
                }
            }
        }
        Commands::Sweep { tenure, wc_months } => {
            let rows = runner.growth_sweep(tenure, wc_months)?;
            match cli.format.exporter() {
                Some(exporter) => exporter.export_sweep(&rows, &mut out)?,
                None => {
                    for row in &rows {
                        print_sweep_row(&mut out, row)?;
                    }
                }
            }
        }
    }

    Ok(())
}

fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

fn print_projection(out: &mut impl Write, result: &ProjectionResult) -> Result<()> {
    let input = &result.input;
    writeln!(out, "Projection {} ({} months)", fiscal_year_label(today()), result.series.len())?;
    writeln!(
        out,
        "  Growth: {}%  Tenure: {}y  Working capital: {}m",
        input.growth_rate_percent, input.loan_tenure_years, input.working_capital_months
    )?;
    writeln!(out)?;

    writeln!(out, "{:>5} {:>14} {:>14} {:>16}", "Month", "Revenue", "Expenses", "Cumulative")?;
    writeln!(out, "{}", "-".repeat(52))?;
    for point in &result.series {
        writeln!(
            out,
            "{:>5} {:>14} {:>14} {:>16}",
            point.month.as_str(),
            point.revenue,
            point.expenses,
            point.cumulative_cash
        )?;
    }

    let summary = result.summary();
    writeln!(out)?;
    writeln!(out, "Summary:")?;
    writeln!(out, "  Total Revenue:  ₹{}", summary.total_revenue)?;
    writeln!(out, "  Total Expenses: ₹{}", summary.total_expenses)?;
    writeln!(out, "  Closing Cash:   ₹{}", summary.closing_cash)?;
    writeln!(
        out,
        "  DSCR:           {:.2}x ({} the {:.2}x threshold)",
        result.dscr,
        if summary.bankability.meets_threshold { "meets" } else { "below" },
        summary.bankability.threshold
    )?;
    writeln!(out, "  Headroom:       {:+.0}%", summary.bankability.headroom() * 100.0)?;
    Ok(())
}

fn print_schemes(out: &mut impl Write, schemes: &[&Scheme], language: Language) -> Result<()> {
    if schemes.is_empty() {
        let notice = match language {
            Language::En => "No schemes match the current filters.",
            Language::Te => "ప్రస్తుత ఫిల్టర్లకు సరిపోలే పథకాలు లేవు.",
        };
        writeln!(out, "{}", notice)?;
        return Ok(());
    }

    for scheme in schemes {
        writeln!(out, "{} [{}]", scheme.name, scheme.stage.label(language))?;
        writeln!(out, "  {}", scheme.description.get(language))?;
        writeln!(out, "  Sectors:     {}", scheme.sectors.join(", "))?;
        writeln!(out, "  Ticket size: {}", scheme.ticket_size)?;
        writeln!(out, "  Coverage:    {}", scheme.coverage)?;
        writeln!(out, "  Impact:      {}", scheme.impact.get(language))?;
        writeln!(out, "  Link:        {}", scheme.links.get(language))?;
        for source in &scheme.sources {
            writeln!(out, "    - {}", source)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn print_sweep_row(out: &mut impl Write, row: &SweepRow) -> Result<()> {
    writeln!(
        out,
        "  {:>5.1}% {:>3}y {:>2}m  revenue ₹{:>10}  closing ₹{:>10}  DSCR {:>6.2}x",
        row.growth_rate_percent,
        row.loan_tenure_years,
        row.working_capital_months,
        row.total_revenue,
        row.closing_cash,
        row.dscr
    )?;
    Ok(())
}
