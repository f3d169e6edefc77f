//! Sector benchmark reference rows shown next to the projection

use serde::Serialize;

use crate::language::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Benchmark {
    pub metric: &'static str,
    pub value: &'static str,
    pub benchmark: &'static str,
}

const BENCHMARKS_EN: [Benchmark; 3] = [
    Benchmark {
        metric: "DSCR",
        value: "1.65x",
        benchmark: "≥ 1.25x (Food Processing, SIDBI FY25)",
    },
    Benchmark {
        metric: "Gross Margin",
        value: "34%",
        benchmark: "30% - 38% (Cluster Diagnostics, AP Food Valley)",
    },
    Benchmark {
        metric: "Working Capital Cycle",
        value: "62 days",
        benchmark: "45 - 70 days (RBI MSME Pulse Q4 FY24)",
    },
];

const BENCHMARKS_TE: [Benchmark; 3] = [
    Benchmark {
        metric: "DSCR",
        value: "1.65x",
        benchmark: "≥ 1.25x (ఫుడ్ ప్రాసెసింగ్, SIDBI FY25)",
    },
    Benchmark {
        metric: "గ్రాస్ మార్జిన్",
        value: "34%",
        benchmark: "30% - 38% (క్లస్టర్ డయాగ్నస్టిక్స్, AP ఫుడ్ వాలీ)",
    },
    Benchmark {
        metric: "వర్కింగ్ క్యాపిటల్ చక్రం",
        value: "62 రోజులు",
        benchmark: "45 - 70 రోజులు (RBI MSME పల్స్ Q4 FY24)",
    },
];

/// Benchmark rows in the requested language
pub fn benchmarks(language: Language) -> &'static [Benchmark] {
    match language {
        Language::En => &BENCHMARKS_EN,
        Language::Te => &BENCHMARKS_TE,
    }
}
