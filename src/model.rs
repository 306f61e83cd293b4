use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ShotId {
    pub video_id: String,
    pub shot_number: u32,
}

impl ShotId {
    pub fn new(video_id: impl Into<String>, shot_number: u32) -> Self {
        Self {
            video_id: video_id.into(),
            shot_number,
        }
    }
}

impl fmt::Display for ShotId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}#{}", self.video_id, self.shot_number)
    }
}

#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct Shot {
    pub id: ShotId,
    pub start_time: f64,
    pub end_time: f64,
    pub start_frame: u32,
    pub end_frame: u32,
}

#[derive(Debug, Clone)]
pub struct LabelEntry {
    pub shot: ShotId,
    pub person_name: String,
    pub confidence: f64,
}

#[derive(Debug, Clone)]
pub struct EvidenceEntry {
    pub person_name: String,
    pub shot: ShotId,
    pub source: Source,
}

#[derive(Debug, Clone)]
pub struct LabelReferenceEntry {
    pub shot: ShotId,
    pub person_name: String,
}

#[derive(Debug, Clone)]
pub struct EvidenceReferenceEntry {
    pub shot: ShotId,
    pub person_name: String,
    pub source: Source,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Audio,
    Image,
    Both,
}

impl Source {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "audio" => Some(Self::Audio),
            "image" => Some(Self::Image),
            "both" => Some(Self::Both),
            _ => None,
        }
    }

    // `both` stands for two occurrences, one per modality.
    pub fn modalities(self) -> &'static [Modality] {
        match self {
            Self::Audio => &[Modality::Audio],
            Self::Image => &[Modality::Image],
            Self::Both => &[Modality::Audio, Modality::Image],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    Audio,
    Image,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct QueryScore {
    pub average_precision: f64,
    pub correctness: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct EvaluationSettings {
    pub matching: String,
    pub threshold: f64,
    pub score_evidence: bool,
    pub consensus_shots: Option<String>,
    pub query_source: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TableProvenance {
    pub table: String,
    pub path: String,
    pub sha256: String,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ResolutionStats {
    pub query_count: usize,
    pub resolved_count: usize,
    pub unresolved_count: usize,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CorpusMetrics {
    pub mean_average_precision: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean_correctness: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidence_weighted_map: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EvaluationReport {
    pub manifest_version: u32,
    pub generated_at: String,
    pub settings: EvaluationSettings,
    pub inputs: Vec<TableProvenance>,
    pub resolution: ResolutionStats,
    pub metrics: CorpusMetrics,
    pub per_query: BTreeMap<String, QueryScore>,
}
