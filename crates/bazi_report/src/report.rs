//! Incoming report: parsing, validation and reconciliation with the
//! locally computed chart.

use bazi_base::{EarthlyBranch, FourPillars, HeavenlyStem, Pillar, PillarSlot};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::ReportError;

/// The six narrative sections of a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    /// Summary of the subject (the day master).
    pub ming_zhu: String,
    pub personality: String,
    /// Career and wealth.
    pub career: String,
    /// Relationships and marriage.
    pub relationship: String,
    pub health: String,
    /// Overall advice.
    pub summary: String,
}

/// Section keys as they appear in the JSON, with display titles.
static SECTIONS: [(&str, &str); 6] = [
    ("mingZhu", "命主"),
    ("personality", "性格分析"),
    ("career", "事业财运"),
    ("relationship", "感情婚姻"),
    ("health", "健康状况"),
    ("summary", "综合建议"),
];

impl Analysis {
    fn texts(&self) -> [&str; 6] {
        [
            &self.ming_zhu,
            &self.personality,
            &self.career,
            &self.relationship,
            &self.health,
            &self.summary,
        ]
    }

    /// `(title, text)` pairs in display order.
    pub fn sections(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        SECTIONS
            .iter()
            .zip(self.texts())
            .map(|(&(_, title), text)| (title, text))
    }

    fn validate(&self) -> Result<(), ReportError> {
        match SECTIONS
            .iter()
            .zip(self.texts())
            .find(|(_, text)| text.trim().is_empty())
        {
            Some((&(key, _), _)) => Err(ReportError::MissingSection(key)),
            None => Ok(()),
        }
    }
}

#[derive(Deserialize)]
struct RawPillar {
    stem: String,
    branch: String,
}

#[derive(Deserialize)]
struct RawPillars {
    year: RawPillar,
    month: RawPillar,
    day: RawPillar,
    hour: RawPillar,
}

#[derive(Deserialize)]
struct RawReport {
    pillars: RawPillars,
    analysis: Analysis,
}

fn single_char(text: &str) -> Option<char> {
    let mut chars = text.trim().chars();
    let c = chars.next()?;
    chars.next().is_none().then_some(c)
}

/// Each field must be exactly one character of its own kind.
fn parse_pillar(slot: PillarSlot, raw: &RawPillar) -> Result<Pillar, ReportError> {
    let stem = single_char(&raw.stem).and_then(HeavenlyStem::from_hanzi);
    let branch = single_char(&raw.branch).and_then(EarthlyBranch::from_hanzi);
    match (stem, branch) {
        (Some(stem), Some(branch)) => Ok(Pillar::new(stem, branch)),
        _ => Err(ReportError::InvalidPillar {
            slot,
            value: format!("{}{}", raw.stem.trim(), raw.branch.trim()),
        }),
    }
}

/// Drop a surrounding ```` ``` ```` / ```` ```json ```` fence, if any.
fn strip_code_fence(text: &str) -> &str {
    let text = text.trim();
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // no newline: the language tag runs straight into the body
    let body = rest.split_once('\n').map_or_else(
        || rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric()),
        |(_, body)| body,
    );
    body.trim_end()
        .strip_suffix("```")
        .unwrap_or(body)
        .trim()
}

/// A validated service response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Pillars as the service returned them.
    pub pillars: FourPillars,
    pub analysis: Analysis,
}

/// How to treat service pillars that differ from the computed ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverridePolicy {
    /// Always show the locally computed chart.
    #[default]
    KeepComputed,
    /// Show the service's pillars.
    AcceptService,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Discrepancy {
    pub slot: PillarSlot,
    pub computed: Pillar,
    pub service: Pillar,
}

/// Pillars to display, plus every slot where the service disagreed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reconciled {
    pub pillars: FourPillars,
    pub discrepancies: Vec<Discrepancy>,
}

impl Reconciled {
    pub fn is_consistent(&self) -> bool {
        self.discrepancies.is_empty()
    }
}

impl Report {
    /// Parse and validate raw response text.
    pub fn from_json(text: &str) -> Result<Self, ReportError> {
        let raw: RawReport = serde_json::from_str(strip_code_fence(text))?;
        raw.analysis.validate()?;
        let pillars = FourPillars {
            year: parse_pillar(PillarSlot::Year, &raw.pillars.year)?,
            month: parse_pillar(PillarSlot::Month, &raw.pillars.month)?,
            day: parse_pillar(PillarSlot::Day, &raw.pillars.day)?,
            hour: parse_pillar(PillarSlot::Hour, &raw.pillars.hour)?,
        };
        debug!(%pillars, "parsed report");
        Ok(Self {
            pillars,
            analysis: raw.analysis,
        })
    }

    /// Compare the service's pillars against `computed`.
    pub fn reconcile(&self, computed: &FourPillars, policy: OverridePolicy) -> Reconciled {
        let discrepancies: Vec<Discrepancy> = computed
            .iter()
            .filter_map(|(slot, mine)| {
                let theirs = self.pillars.get(slot);
                (mine != theirs).then_some(Discrepancy {
                    slot,
                    computed: mine,
                    service: theirs,
                })
            })
            .collect();
        for d in &discrepancies {
            warn!(
                slot = d.slot.name(),
                computed = %d.computed,
                service = %d.service,
                "service pillar differs from computed"
            );
        }
        let pillars = match policy {
            OverridePolicy::KeepComputed => *computed,
            OverridePolicy::AcceptService => self.pillars,
        };
        Reconciled {
            pillars,
            discrepancies,
        }
    }
}
