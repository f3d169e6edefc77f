//! Chart panel exporters
//!
//! Each chart panel (projection series, scheme list, sweep table) can be
//! written out through a [`ChartExporter`]. CSV is meant for spreadsheets,
//! JSON for downstream tooling.

use std::io::Write;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{DprError, Result};
use crate::language::Language;
use crate::projection::{fiscal_year_label, ProjectionResult};
use crate::scenario::SweepRow;
use crate::schemes::Scheme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn exporter(&self) -> Box<dyn ChartExporter> {
        match self {
            ExportFormat::Csv => Box::new(CsvExporter),
            ExportFormat::Json => Box::new(JsonExporter::default()),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = DprError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            _ => Err(DprError::UnknownFormat(s.to_string())),
        }
    }
}

/// Writes chart panel data to any sink
pub trait ChartExporter {
    /// Monthly series, labelled with the fiscal year containing `as_of`
    fn export_projection(&self, result: &ProjectionResult, as_of: NaiveDate, out: &mut dyn Write) -> Result<()>;

    fn export_schemes(&self, schemes: &[&Scheme], language: Language, out: &mut dyn Write) -> Result<()>;

    fn export_sweep(&self, rows: &[SweepRow], out: &mut dyn Write) -> Result<()>;
}

/// Comma-separated output with a header row
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvExporter;

impl ChartExporter for CsvExporter {
    fn export_projection(&self, result: &ProjectionResult, as_of: NaiveDate, out: &mut dyn Write) -> Result<()> {
        let fiscal_year = fiscal_year_label(as_of);
        let mut writer = csv::Writer::from_writer(out);
        writer.write_record(["FiscalYear", "Month", "Revenue", "Expenses", "CumulativeCash"])?;

        for point in &result.series {
            writer.write_record([
                fiscal_year.clone(),
                point.month.to_string(),
                point.revenue.to_string(),
                point.expenses.to_string(),
                point.cumulative_cash.to_string(),
            ])?;
        }

        writer.flush()?;
        Ok(())
    }

    fn export_schemes(&self, schemes: &[&Scheme], language: Language, out: &mut dyn Write) -> Result<()> {
        let mut writer = csv::Writer::from_writer(out);
        writer.write_record(["Id", "Name", "Stage", "Sectors", "TicketSize", "Coverage", "Description", "Link"])?;

        for scheme in schemes {
            let sectors = scheme.sectors.join("; ");
            writer.write_record([
                scheme.id.as_str(),
                scheme.name.as_str(),
                scheme.stage.as_str(),
                sectors.as_str(),
                scheme.ticket_size.as_str(),
                scheme.coverage.as_str(),
                scheme.description.get(language),
                scheme.links.get(language),
            ])?;
        }

        writer.flush()?;
        Ok(())
    }

    fn export_sweep(&self, rows: &[SweepRow], out: &mut dyn Write) -> Result<()> {
        let mut writer = csv::Writer::from_writer(out);
        writer.write_record([
            "GrowthRatePct",
            "LoanTenureYears",
            "WorkingCapitalMonths",
            "TotalRevenue",
            "TotalExpenses",
            "ClosingCash",
            "DSCR",
            "MeetsThreshold",
        ])?;

        for row in rows {
            writer.write_record([
                format!("{:.1}", row.growth_rate_percent),
                row.loan_tenure_years.to_string(),
                row.working_capital_months.to_string(),
                row.total_revenue.to_string(),
                row.total_expenses.to_string(),
                row.closing_cash.to_string(),
                format!("{:.2}", row.dscr),
                row.meets_threshold.to_string(),
            ])?;
        }

        writer.flush()?;
        Ok(())
    }
}

/// JSON output, optionally pretty-printed
#[derive(Debug, Clone, Copy)]
pub struct JsonExporter {
    pub pretty: bool,
}

impl Default for JsonExporter {
    fn default() -> Self {
        Self { pretty: true }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProjectionExport<'a> {
    fiscal_year: String,
    #[serde(flatten)]
    result: &'a ProjectionResult,
    summary: crate::projection::ProjectionSummary,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SchemeExport<'a> {
    id: &'a str,
    name: &'a str,
    stage: crate::schemes::Stage,
    sectors: &'a [String],
    ticket_size: &'a str,
    coverage: &'a str,
    description: &'a str,
    impact: &'a str,
    link: &'a str,
    sources: &'a [String],
}

impl JsonExporter {
    fn write<T: Serialize>(&self, value: &T, out: &mut dyn Write) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut *out, value)?;
        } else {
            serde_json::to_writer(&mut *out, value)?;
        }
        writeln!(out)?;
        Ok(())
    }
}

impl ChartExporter for JsonExporter {
    fn export_projection(&self, result: &ProjectionResult, as_of: NaiveDate, out: &mut dyn Write) -> Result<()> {
        let export = ProjectionExport {
            fiscal_year: fiscal_year_label(as_of),
            result,
            summary: result.summary(),
        };
        self.write(&export, out)
    }

    fn export_schemes(&self, schemes: &[&Scheme], language: Language, out: &mut dyn Write) -> Result<()> {
        let export: Vec<SchemeExport> = schemes
            .iter()
            .map(|s| SchemeExport {
                id: &s.id,
                name: &s.name,
                stage: s.stage,
                sectors: &s.sectors,
                ticket_size: &s.ticket_size,
                coverage: &s.coverage,
                description: s.description.get(language),
                impact: s.impact.get(language),
                link: s.links.get(language),
                sources: &s.sources,
            })
            .collect();
        self.write(&export, out)
    }

    fn export_sweep(&self, rows: &[SweepRow], out: &mut dyn Write) -> Result<()> {
        self.write(&rows, out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::{project, ProjectionInput};
    use crate::schemes::{Catalog, FilterCriteria};

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn test_csv_projection() {
        let result = project(&ProjectionInput::default()).unwrap();
        let mut buf = Vec::new();
        CsvExporter.export_projection(&result, as_of(), &mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 13);
        assert_eq!(lines[0], "FiscalYear,Month,Revenue,Expenses,CumulativeCash");
        assert_eq!(lines[1], "FY2026-27,Apr,1344000,952040,391960");
        assert!(lines[12].starts_with("FY2026-27,Mar,"));
    }

    #[test]
    fn test_csv_schemes_quotes_fields() {
        let catalog = Catalog::seed();
        let schemes = catalog.filter(&FilterCriteria::new().search("odop"));
        let mut buf = Vec::new();
        CsvExporter.export_schemes(&schemes, Language::En, &mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 2);
        // Descriptions contain commas and must be quoted
        assert!(text.contains("\"Mentorship, branding, and export market access"));
    }

    #[test]
    fn test_json_projection_includes_summary() {
        let result = project(&ProjectionInput::default()).unwrap();
        let mut buf = Vec::new();
        JsonExporter { pretty: false }
            .export_projection(&result, as_of(), &mut buf)
            .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["fiscalYear"], "FY2026-27");
        assert_eq!(value["series"].as_array().unwrap().len(), 12);
        assert_eq!(value["series"][0]["month"], "Apr");
        assert_eq!(value["summary"]["closingCash"], 5_033_702);
        assert_eq!(value["input"]["loanTenureYears"], 5);
    }

    #[test]
    fn test_json_schemes_localized() {
        let catalog = Catalog::seed();
        let schemes = catalog.filter(&FilterCriteria::new().search("cgtmse"));
        let mut buf = Vec::new();
        JsonExporter::default()
            .export_schemes(&schemes, Language::Te, &mut buf)
            .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value[0]["link"], "https://apindustries.gov.in/te/cgtmse");
        assert_eq!(value[0]["stage"], "growth");
    }

    #[test]
    fn test_parse_format() {
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert!(matches!(
            "PNG".parse::<ExportFormat>(),
            Err(DprError::UnknownFormat(ref raw)) if raw == "PNG"
        ));
    }
}
