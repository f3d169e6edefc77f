//! Scheme filtering by search text, stage and sector

use std::str::FromStr;

use super::data::{Scheme, Stage};
use crate::error::DprError;

/// Stage restriction; `All` lets every stage through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StageFilter {
    #[default]
    All,
    Only(Stage),
}

impl StageFilter {
    pub fn matches(&self, stage: Stage) -> bool {
        match self {
            StageFilter::All => true,
            StageFilter::Only(wanted) => *wanted == stage,
        }
    }
}

impl FromStr for StageFilter {
    type Err = DprError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            Ok(StageFilter::All)
        } else {
            s.parse().map(StageFilter::Only)
        }
    }
}

/// Sector restriction; `All` lets every sector through
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SectorFilter {
    #[default]
    All,
    Tag(String),
}

impl SectorFilter {
    pub fn matches(&self, scheme: &Scheme) -> bool {
        match self {
            SectorFilter::All => true,
            SectorFilter::Tag(tag) => scheme.has_sector(tag),
        }
    }
}

impl FromStr for SectorFilter {
    type Err = DprError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            Ok(SectorFilter::All)
        } else {
            Ok(SectorFilter::Tag(s.to_string()))
        }
    }
}

/// Current state of the search box and the two drop-downs
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub search_text: String,
    pub stage: StageFilter,
    pub sector: SectorFilter,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn stage(mut self, stage: StageFilter) -> Self {
        self.stage = stage;
        self
    }

    pub fn sector(mut self, sector: SectorFilter) -> Self {
        self.sector = sector;
        self
    }

    /// Build criteria from optional query-string style values
    pub fn from_params(
        search: Option<&str>,
        stage: Option<&str>,
        sector: Option<&str>,
    ) -> Result<Self, DprError> {
        Ok(Self {
            search_text: search.unwrap_or_default().to_string(),
            stage: stage.map(str::parse::<StageFilter>).transpose()?.unwrap_or_default(),
            sector: sector.map(str::parse::<SectorFilter>).transpose()?.unwrap_or_default(),
        })
    }

    fn matches_search(&self, scheme: &Scheme) -> bool {
        let needle = self.search_text.trim();
        if needle.is_empty() {
            return true;
        }
        let needle = needle.to_lowercase();
        scheme.name.to_lowercase().contains(&needle)
            || scheme.description.en.to_lowercase().contains(&needle)
    }

    pub fn matches(&self, scheme: &Scheme) -> bool {
        self.stage.matches(scheme.stage) && self.sector.matches(scheme) && self.matches_search(scheme)
    }
}

/// Schemes satisfying every criterion, in catalog order
pub fn filter<'a>(catalog: &'a [Scheme], criteria: &FilterCriteria) -> Vec<&'a Scheme> {
    let matched: Vec<&Scheme> = catalog.iter().filter(|s| criteria.matches(s)).collect();
    log::debug!(
        "Filter {:?} matched {} of {} schemes",
        criteria,
        matched.len(),
        catalog.len()
    );
    matched
}

/// Unique sector tags in the order they first appear
pub fn sectors(catalog: &[Scheme]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for scheme in catalog {
        for sector in &scheme.sectors {
            if !seen.contains(&sector.as_str()) {
                seen.push(sector);
            }
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemes::Catalog;

    fn ids(schemes: &[&Scheme]) -> Vec<String> {
        schemes.iter().map(|s| s.id.clone()).collect()
    }

    #[test]
    fn test_empty_criteria_returns_whole_catalog() {
        let catalog = Catalog::seed();
        let result = filter(catalog.schemes(), &FilterCriteria::new());
        assert_eq!(ids(&result), vec!["pmfme", "cgtmse", "odop", "women"]);
    }

    #[test]
    fn test_search_by_name_is_case_insensitive() {
        let catalog = Catalog::seed();
        let result = filter(catalog.schemes(), &FilterCriteria::new().search("cgtmse"));
        assert_eq!(ids(&result), vec!["cgtmse"]);

        let result = filter(catalog.schemes(), &FilterCriteria::new().search("CGTMSE"));
        assert_eq!(ids(&result), vec!["cgtmse"]);
    }

    #[test]
    fn test_search_matches_english_description_only() {
        let catalog = Catalog::seed();
        let result = filter(catalog.schemes(), &FilterCriteria::new().search("collateral-free"));
        assert_eq!(ids(&result), vec!["cgtmse"]);

        // Telugu description text is not searched
        let result = filter(catalog.schemes(), &FilterCriteria::new().search("మైక్రో"));
        assert!(result.is_empty());
    }

    #[test]
    fn test_blank_search_is_ignored() {
        let catalog = Catalog::seed();
        let result = filter(catalog.schemes(), &FilterCriteria::new().search("   "));
        assert_eq!(result.len(), 4);
    }

    #[test]
    fn test_stage_filter() {
        let catalog = Catalog::seed();
        let criteria = FilterCriteria::new().stage(StageFilter::Only(Stage::Export));
        let result = filter(catalog.schemes(), &criteria);
        assert_eq!(ids(&result), vec!["odop"]);
        assert_eq!(result[0].name, "One District One Product Export Readiness");

        let criteria = FilterCriteria::new().stage(StageFilter::Only(Stage::Growth));
        assert_eq!(ids(&filter(catalog.schemes(), &criteria)), vec!["pmfme", "cgtmse"]);
    }

    #[test]
    fn test_sector_filter_is_exact() {
        let catalog = Catalog::seed();
        let criteria = FilterCriteria::new().sector(SectorFilter::Tag("services".to_string()));
        assert_eq!(ids(&filter(catalog.schemes(), &criteria)), vec!["cgtmse", "women"]);

        let criteria = FilterCriteria::new().sector(SectorFilter::Tag("service".to_string()));
        assert!(filter(catalog.schemes(), &criteria).is_empty());
    }

    #[test]
    fn test_absent_sector_yields_empty() {
        let catalog = Catalog::seed();
        let criteria = FilterCriteria::new().sector(SectorFilter::Tag("aerospace".to_string()));
        assert!(filter(catalog.schemes(), &criteria).is_empty());
    }

    #[test]
    fn test_criteria_combine() {
        let catalog = Catalog::seed();
        let criteria = FilterCriteria::new()
            .search("grant")
            .stage(StageFilter::Only(Stage::Growth))
            .sector(SectorFilter::Tag("food processing".to_string()));
        assert_eq!(ids(&filter(catalog.schemes(), &criteria)), vec!["pmfme"]);

        let criteria = FilterCriteria::new()
            .search("cgtmse")
            .stage(StageFilter::Only(Stage::Idea));
        assert!(filter(catalog.schemes(), &criteria).is_empty());
    }

    #[test]
    fn test_parse_filters() {
        assert_eq!("all".parse::<StageFilter>().unwrap(), StageFilter::All);
        assert_eq!("".parse::<StageFilter>().unwrap(), StageFilter::All);
        assert_eq!(
            "Export".parse::<StageFilter>().unwrap(),
            StageFilter::Only(Stage::Export)
        );
        assert!(matches!(
            "Seed".parse::<StageFilter>(),
            Err(DprError::UnknownStage(ref raw)) if raw == "Seed"
        ));

        assert_eq!("ALL".parse::<SectorFilter>().unwrap(), SectorFilter::All);
        assert_eq!(
            "textiles".parse::<SectorFilter>().unwrap(),
            SectorFilter::Tag("textiles".to_string())
        );
    }

    #[test]
    fn test_from_params() {
        let criteria = FilterCriteria::from_params(Some("odop"), Some("export"), None).unwrap();
        assert_eq!(criteria.search_text, "odop");
        assert_eq!(criteria.stage, StageFilter::Only(Stage::Export));
        assert_eq!(criteria.sector, SectorFilter::All);

        assert!(FilterCriteria::from_params(None, Some("later"), None).is_err());
    }

    #[test]
    fn test_sectors_first_seen_order() {
        let catalog = Catalog::seed();
        assert_eq!(
            sectors(catalog.schemes()),
            vec![
                "food processing",
                "agri value chain",
                "manufacturing",
                "services",
                "renewables",
                "exports",
                "handicraft",
                "textiles",
                "tourism",
                "creative economy",
            ]
        );
    }
}
