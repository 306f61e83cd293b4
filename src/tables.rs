use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result, anyhow, bail};

use crate::model::{
    EvidenceEntry, EvidenceReferenceEntry, LabelEntry, LabelReferenceEntry, Shot, ShotId, Source,
};

// videoID shotNumber startTime endTime startFrame endFrame
pub fn load_shots(path: &Path) -> Result<Vec<Shot>> {
    let mut shots = Vec::new();
    for (line, fields) in records(path, 6)? {
        shots.push(Shot {
            id: ShotId::new(
                fields[0].as_str(),
                parse_field(&fields[1], "shotNumber", path, line)?,
            ),
            start_time: parse_field(&fields[2], "startTime", path, line)?,
            end_time: parse_field(&fields[3], "endTime", path, line)?,
            start_frame: parse_field(&fields[4], "startFrame", path, line)?,
            end_frame: parse_field(&fields[5], "endFrame", path, line)?,
        });
    }
    Ok(shots)
}

// videoID shotNumber personName confidence
pub fn load_labels(path: &Path) -> Result<Vec<LabelEntry>> {
    let mut labels = Vec::new();
    for (line, fields) in records(path, 4)? {
        labels.push(LabelEntry {
            shot: ShotId::new(
                fields[0].as_str(),
                parse_field(&fields[1], "shotNumber", path, line)?,
            ),
            person_name: fields[2].clone(),
            confidence: parse_field(&fields[3], "confidence", path, line)?,
        });
    }
    Ok(labels)
}

// personName videoID shotNumber source
pub fn load_evidence(path: &Path) -> Result<Vec<EvidenceEntry>> {
    let mut evidence = Vec::new();
    for (line, fields) in records(path, 4)? {
        evidence.push(EvidenceEntry {
            person_name: fields[0].clone(),
            shot: ShotId::new(
                fields[1].as_str(),
                parse_field(&fields[2], "shotNumber", path, line)?,
            ),
            source: parse_source(&fields[3], path, line)?,
        });
    }
    Ok(evidence)
}

// videoID shotNumber personName
pub fn load_label_reference(path: &Path) -> Result<Vec<LabelReferenceEntry>> {
    let mut reference = Vec::new();
    for (line, fields) in records(path, 3)? {
        reference.push(LabelReferenceEntry {
            shot: ShotId::new(
                fields[0].as_str(),
                parse_field(&fields[1], "shotNumber", path, line)?,
            ),
            person_name: fields[2].clone(),
        });
    }
    Ok(reference)
}

// videoID shotNumber personName source
pub fn load_evidence_reference(path: &Path) -> Result<Vec<EvidenceReferenceEntry>> {
    let mut reference = Vec::new();
    for (line, fields) in records(path, 4)? {
        reference.push(EvidenceReferenceEntry {
            shot: ShotId::new(
                fields[0].as_str(),
                parse_field(&fields[1], "shotNumber", path, line)?,
            ),
            person_name: fields[2].clone(),
            source: parse_source(&fields[3], path, line)?,
        });
    }
    Ok(reference)
}

// One person name per line; duplicates collapse since queries form a set.
pub fn load_query_list(path: &Path) -> Result<Vec<String>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read query list: {}", path.display()))?;

    let mut seen = HashSet::<&str>::new();
    let mut queries = Vec::new();
    for line in raw.lines() {
        let name = line.trim();
        if name.is_empty() || !seen.insert(name) {
            continue;
        }
        queries.push(name.to_string());
    }

    Ok(queries)
}

// videoID shotNumber pairs naming a shot subset.
pub fn load_shot_subset(path: &Path) -> Result<HashSet<ShotId>> {
    let mut subset = HashSet::new();
    for (line, fields) in records(path, 2)? {
        subset.insert(ShotId::new(
            fields[0].as_str(),
            parse_field(&fields[1], "shotNumber", path, line)?,
        ));
    }
    Ok(subset)
}

fn records(path: &Path, expected_fields: usize) -> Result<Vec<(usize, Vec<String>)>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read table: {}", path.display()))?;

    let mut rows = Vec::new();
    for (index, line) in raw.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let fields = line
            .split_whitespace()
            .map(str::to_string)
            .collect::<Vec<String>>();
        if fields.len() != expected_fields {
            bail!(
                "{}:{}: expected {} fields, found {}",
                path.display(),
                index + 1,
                expected_fields,
                fields.len()
            );
        }

        rows.push((index + 1, fields));
    }

    Ok(rows)
}

fn parse_field<T: FromStr>(raw: &str, column: &str, path: &Path, line: usize) -> Result<T> {
    raw.parse::<T>().map_err(|_| {
        anyhow!(
            "{}:{}: invalid {} value: {}",
            path.display(),
            line,
            column,
            raw
        )
    })
}

fn parse_source(raw: &str, path: &Path, line: usize) -> Result<Source> {
    Source::parse(raw)
        .ok_or_else(|| anyhow!("{}:{}: unknown source value: {}", path.display(), line, raw))
}
