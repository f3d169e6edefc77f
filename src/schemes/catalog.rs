//! Built-in scheme catalog
//!
//! Four reference schemes covering the idea, growth and export stages.
//! The catalog is read-only; there is no create/update/delete.

use super::data::{Scheme, Stage};
use super::filter::{filter, sectors, FilterCriteria};
use crate::language::Localized;

/// Read-only collection of schemes in display order
#[derive(Debug, Clone)]
pub struct Catalog {
    schemes: Vec<Scheme>,
}

impl Catalog {
    /// Catalog seeded with the built-in schemes
    pub fn seed() -> Self {
        Self {
            schemes: seed_schemes(),
        }
    }

    pub fn schemes(&self) -> &[Scheme] {
        &self.schemes
    }

    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Scheme> {
        self.schemes.iter().find(|s| s.id == id)
    }

    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<&Scheme> {
        filter(&self.schemes, criteria)
    }

    pub fn sectors(&self) -> Vec<&str> {
        sectors(&self.schemes)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seed()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn seed_schemes() -> Vec<Scheme> {
    vec![
        Scheme {
            id: "pmfme".to_string(),
            name: "PMFME + AP Food Processing Grant".to_string(),
            description: Localized::new(
                "Capital subsidy up to 35% for micro food enterprises, bundled with AP cluster infrastructure grants and common facility access.",
                "మైక్రో ఫుడ్ యూనిట్లకు 35% వరకు మూలధన సబ్సిడి, AP క్లస్టర్ మౌలిక వసతుల గ్రాంట్లు మరియు సాధారణ సదుపాయాల ప్రాప్యతతో సహా.",
            ),
            sectors: strings(&["food processing", "agri value chain"]),
            stage: Stage::Growth,
            ticket_size: "₹10L - ₹50L".to_string(),
            coverage: "Capex subsidy · Working capital margin".to_string(),
            sources: strings(&[
                "AP MSME ONE Portal > DPR Preparation Tool dataset",
                "MoFPI PMFME dashboard (Oct 2025 refresh)",
            ]),
            links: Localized::new(
                "https://apmsmeone.in/schemes/pmfme",
                "https://apmsmeone.in/te/schemes/pmfme",
            ),
            impact: Localized::new(
                "Matches women-led and FPO-linked units to cold-chain upgrades & quality certification grants.",
                "మహిళల ఆధ్వర్యంలో ఉన్న మరియు FPO అనుబంధ యూనిట్‌లకు కోల్డ్-చెయిన్ అప్‌గ్రేడ్‌లు & నాణ్యత సర్టిఫికేషన్ గ్రాంట్లను మ్యాచ్ చేస్తుంది.",
            ),
        },
        Scheme {
            id: "cgtmse".to_string(),
            name: "CGTMSE 3.0 + AP Credit Guarantee Top-up".to_string(),
            description: Localized::new(
                "Collateral-free term loans with guarantee cover up to ₹5 crore for greenfield and brownfield units.",
                "గ్రీన్‌ఫీల్డ్ మరియు బ్రౌన్‌ఫీల్డ్ యూనిట్‌లకు ₹5 కోట్లు వరకు గ్యారంటీ కవరుతో కాలేటరల్-ఫ్రీ టర్మ్ లోన్లు.",
            ),
            sectors: strings(&["manufacturing", "services", "renewables"]),
            stage: Stage::Growth,
            ticket_size: "₹50L - ₹5Cr".to_string(),
            coverage: "Term loan guarantee · interest subvention".to_string(),
            sources: strings(&[
                "CGTMSE 3.0 operational guidelines (Aug 2025)",
                "AP Industries Dept. Credit Guarantee corpus note",
            ]),
            links: Localized::new(
                "https://cgtmse.in/product-portfolio",
                "https://apindustries.gov.in/te/cgtmse",
            ),
            impact: Localized::new(
                "Auto-computes guarantee fee slab and DSCR expectations for AP bankers.",
                "AP బ్యాంకర్ల కోసం గ్యారంటీ ఫీజు స్లాబ్ మరియు DSCR అంచనాలను ఆటో కంఫ్యూట్ చేస్తుంది.",
            ),
        },
        Scheme {
            id: "odop".to_string(),
            name: "One District One Product Export Readiness".to_string(),
            description: Localized::new(
                "Mentorship, branding, and export market access for ODOP-identified MSMEs with AP Trade Promotion Council alignment.",
                "ODOP గుర్తించిన MSMEలకు మెంటర్‌షిప్, బ్రాండింగ్ మరియు ఎగుమతి మార్కెట్ ప్రాప్యత AP ట్రేడ్ ప్రమోషన్ కౌన్సిల్ సమన్వయంతో.",
            ),
            sectors: strings(&["exports", "handicraft", "textiles"]),
            stage: Stage::Export,
            ticket_size: "₹5L - ₹35L (grant + services)".to_string(),
            coverage: "Branding · QA/QC · Export logistics".to_string(),
            sources: strings(&[
                "Cross Border Console - Exports dataset",
                "AP Trade Promotion Mission briefs (2025)",
            ]),
            links: Localized::new(
                "https://odop.ap.gov.in/export-readiness",
                "https://odop.ap.gov.in/te/export-readiness",
            ),
            impact: Localized::new(
                "Generates supply-chain narratives and HS code intelligence inside final DPR.",
                "చివరి DPRలో సరఫరా గొలుసు కథనాలు మరియు HS కోడ్ ఇంటెలిజెన్స్ ఉత్పత్తి చేస్తుంది.",
            ),
        },
        Scheme {
            id: "women".to_string(),
            name: "AP Women Entrepreneurs ReSTART Catalyst".to_string(),
            description: Localized::new(
                "Bridge financing + performance grants for women-led units modernising post-pandemic.",
                "పోస్ట్-పాండమిక్ ఆధునికీకరణకు మహిళల ఆధ్వర్యంలోని యూనిట్‌లకు బ్రిడ్జ్ ఫైనాన్సింగ్ + పనితీరు గ్రాంట్లు.",
            ),
            sectors: strings(&["services", "tourism", "creative economy"]),
            stage: Stage::Idea,
            ticket_size: "₹2L - ₹25L".to_string(),
            coverage: "Bridge finance · digital upgradation".to_string(),
            sources: strings(&[
                "AI-Powered Chatbot dataset > Women MSME stack",
                "AP ReSTART policy addendum 2025",
            ]),
            links: Localized::new(
                "https://apmsmeone.in/restart-catalyst",
                "https://apmsmeone.in/te/restart-catalyst",
            ),
            impact: Localized::new(
                "Connects to mentorship pods and community review boards for faster sanction.",
                "త్వరిత ఆమోదం కోసం మెంటర్‌షిప్ పాడ్‌లు మరియు కమ్యూనిటీ రివ్యూ బోర్డులతో లింక్ చేస్తుంది.",
            ),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_catalog() {
        let catalog = Catalog::seed();
        assert_eq!(catalog.len(), 4);

        let ids: Vec<&str> = catalog.schemes().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["pmfme", "cgtmse", "odop", "women"]);

        let unique: HashSet<&str> = ids.iter().copied().collect();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn test_every_scheme_is_fully_localized() {
        for scheme in Catalog::seed().schemes() {
            assert!(!scheme.description.en.is_empty(), "{}", scheme.id);
            assert!(!scheme.description.te.is_empty(), "{}", scheme.id);
            assert!(scheme.links.en.starts_with("https://"), "{}", scheme.id);
            assert!(scheme.links.te.starts_with("https://"), "{}", scheme.id);
            assert!(!scheme.sources.is_empty(), "{}", scheme.id);
        }
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::seed();
        assert_eq!(catalog.get("odop").map(|s| s.stage), Some(Stage::Export));
        assert!(catalog.get("missing").is_none());
    }
}
