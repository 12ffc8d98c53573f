use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use super::domain::{Audience, Notice, NoticeId};

#[derive(Debug, thiserror::Error)]
pub enum NoticeImportError {
    #[error("failed to read notice seed: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid notice seed data: {0}")]
    Csv(#[from] csv::Error),
    #[error("notice seed row {row} has a blank id")]
    BlankId { row: usize },
}

/// Loads notices from a CSV seed with `id,title,content,is_global,audience` headers.
pub struct NoticeCsvImporter;

impl NoticeCsvImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Notice>, NoticeImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Notice>, NoticeImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut notices = Vec::new();

        for (index, record) in csv_reader.deserialize::<NoticeRow>().enumerate() {
            let row = record?;
            if row.id.is_empty() {
                return Err(NoticeImportError::BlankId { row: index + 1 });
            }

            notices.push(Notice {
                id: NoticeId(row.id),
                title: row.title,
                content: row.content,
                is_global: row.is_global,
                audience: row.audience,
            });
        }

        Ok(notices)
    }
}

#[derive(Debug, Deserialize)]
struct NoticeRow {
    id: String,
    title: String,
    content: String,
    #[serde(deserialize_with = "flag")]
    is_global: bool,
    #[serde(deserialize_with = "audience")]
    audience: Audience,
}

fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "'{other}' is not a yes/no flag"
        ))),
    }
}

fn audience<'de, D>(deserializer: D) -> Result<Audience, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(serde::de::Error::custom)
}
