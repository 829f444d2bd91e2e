//! Client resource link types and dashboard grouping.

use serde::{Deserialize, Serialize};

/// Kind of resource a client link points at.
///
/// Stored as text in `client_links.link_type`; the CHECK constraint there
/// must list exactly these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkType {
    GoogleDoc,
    Clickup,
    Airtable,
    Other,
}

impl LinkType {
    pub const ALL: [LinkType; 4] = [
        LinkType::GoogleDoc,
        LinkType::Clickup,
        LinkType::Airtable,
        LinkType::Other,
    ];

    /// Database / wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            LinkType::GoogleDoc => "google_doc",
            LinkType::Clickup => "clickup",
            LinkType::Airtable => "airtable",
            LinkType::Other => "other",
        }
    }

    /// Parse a type tag sent by the automation system.
    ///
    /// Absent, empty, or unrecognized tags fall back to [`LinkType::Other`].
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag.map(str::trim) {
            Some("google_doc") => LinkType::GoogleDoc,
            Some("clickup") => LinkType::Clickup,
            Some("airtable") => LinkType::Airtable,
            _ => LinkType::Other,
        }
    }

    /// Dashboard bucket this link type is shown under.
    pub fn category(self) -> LinkCategory {
        match self {
            LinkType::GoogleDoc => LinkCategory::Documents,
            LinkType::Clickup => LinkCategory::Projects,
            LinkType::Airtable => LinkCategory::Data,
            LinkType::Other => LinkCategory::Other,
        }
    }
}

impl std::fmt::Display for LinkType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dashboard grouping of client links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkCategory {
    Documents,
    Projects,
    Data,
    Other,
}

/// Links partitioned by [`LinkCategory`], preserving input order in each bucket.
#[derive(Debug, Clone, Serialize)]
pub struct GroupedLinks<T> {
    pub documents: Vec<T>,
    pub projects: Vec<T>,
    pub data: Vec<T>,
    pub other: Vec<T>,
}

impl<T> GroupedLinks<T> {
    /// Partition `items` using `type_of` to read each item's stored type tag.
    ///
    /// Tags that do not parse to a known type land in `other`.
    pub fn partition<F>(items: Vec<T>, type_of: F) -> Self
    where
        F: Fn(&T) -> &str,
    {
        let mut grouped = GroupedLinks {
            documents: Vec::new(),
            projects: Vec::new(),
            data: Vec::new(),
            other: Vec::new(),
        };
        for item in items {
            let bucket = match LinkType::from_tag(Some(type_of(&item))).category() {
                LinkCategory::Documents => &mut grouped.documents,
                LinkCategory::Projects => &mut grouped.projects,
                LinkCategory::Data => &mut grouped.data,
                LinkCategory::Other => &mut grouped.other,
            };
            bucket.push(item);
        }
        grouped
    }

    pub fn total(&self) -> usize {
        self.documents.len() + self.projects.len() + self.data.len() + self.other.len()
    }
}
