// WHY: requirement manifest for external tracking of normative statements
// Ids are deterministic per document; fingerprints change only when sentence text changes

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::io::Write;
use tracing::info;

use crate::keywords::Keyword;
use crate::scanner::Occurrence;

/// Manifest document for one specification
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Manifest {
    /// Source identifier: a path or a blob URL
    pub specification: String,
    /// RFC 3339 UTC timestamp of generation
    pub processed: String,
    pub requirements: Vec<Requirement>,
}

/// One normative statement
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Requirement {
    pub id: String,
    pub word: Keyword,
    pub lines: String,
    pub section: String,
    pub index: usize,
    pub offset: usize,
    pub text: String,
    pub link: String,
    /// Hex SHA-256 of `text`
    pub fingerprint: String,
}

impl Manifest {
    /// Build a manifest stamped with an explicit generation time
    pub fn build(specification: &str, occurrences: &[Occurrence], processed: DateTime<Utc>) -> Self {
        let name = document_name(specification);
        let blame = blame_url(specification);

        let requirements = occurrences
            .iter()
            .map(|occurrence| {
                let lines = occurrence.line_reference();
                Requirement {
                    id: format!(
                        "{name}{}{}-{}C{}",
                        occurrence.word.identifier(),
                        occurrence.section,
                        occurrence.index,
                        occurrence.offset
                    ),
                    word: occurrence.word,
                    link: format!("{blame}#{lines}"),
                    lines,
                    section: occurrence.section.clone(),
                    index: occurrence.index,
                    offset: occurrence.offset,
                    text: occurrence.sentence.clone(),
                    fingerprint: fingerprint(&occurrence.sentence),
                }
            })
            .collect();

        Self {
            specification: specification.to_string(),
            processed: processed.to_rfc3339_opts(SecondsFormat::Secs, true),
            requirements,
        }
    }

    /// Build a manifest stamped with the current time
    pub fn generate(specification: &str, occurrences: &[Occurrence]) -> Self {
        let manifest = Self::build(specification, occurrences, Utc::now());
        info!(
            specification,
            requirements = manifest.requirements.len(),
            "Manifest generated"
        );
        manifest
    }

    pub fn write_yaml<W: Write>(&self, out: W) -> Result<()> {
        serde_yaml::to_writer(out, self).context("Failed to write manifest")
    }

    pub fn from_yaml(text: &str) -> Result<Self> {
        serde_yaml::from_str(text).context("Failed to parse manifest")
    }
}

/// Base name of the document without `.md`, first letter uppercased
pub fn document_name(specification: &str) -> String {
    let base = specification
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(specification);
    let base = base.strip_suffix(".md").unwrap_or(base);

    let mut chars = base.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Swap the `/blob/` view segment for the `/blame/` history segment
pub fn blame_url(specification: &str) -> String {
    specification.replacen("/blob/", "/blame/", 1)
}

/// Lowercase hex SHA-256 of the sentence text
pub fn fingerprint(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}
