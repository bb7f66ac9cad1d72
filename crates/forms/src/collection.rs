//! Collection-index records extracted from an issue-form submission.
//!
//! The issue form renders every input as a `### <label>` header, one blank
//! separator line, and the submitted value. Extraction relies on that exact
//! layout: the value is the raw line **two** positions below the header. It is
//! not the first non-blank line, so a submission with an empty value picks up
//! whatever line sits in that slot.

// ---------------------------------------------------------------------------
// Fields
// ---------------------------------------------------------------------------

/// One of the five fields of a [`CollectionIndexEntry`].
///
/// [`CollectionField::ALL`] lists them in the order they are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionField {
    /// `### Collection Name`
    Name,
    /// `### Maintainer Name`
    Maintainer,
    /// `### Maintainer Contact Link (i.e. repo issues link, email)`
    Contact,
    /// `### Repository URL`
    Repository,
    /// `### OCI Reference`
    OciReference,
}

impl CollectionField {
    /// All fields, in rendering order.
    pub const ALL: [CollectionField; 5] = [
        CollectionField::Name,
        CollectionField::Maintainer,
        CollectionField::Contact,
        CollectionField::Repository,
        CollectionField::OciReference,
    ];

    /// The normalised (trimmed, lowercase) issue-form header for this field.
    pub fn header(self) -> &'static str {
        match self {
            CollectionField::Name => "### collection name",
            CollectionField::Maintainer => "### maintainer name",
            CollectionField::Contact => {
                "### maintainer contact link (i.e. repo issues link, email)"
            }
            CollectionField::Repository => "### repository url",
            CollectionField::OciReference => "### oci reference",
        }
    }

    /// The YAML key written for this field.
    pub fn yaml_key(self) -> &'static str {
        match self {
            CollectionField::Name => "name",
            CollectionField::Maintainer => "maintainer",
            CollectionField::Contact => "contact",
            CollectionField::Repository => "repository",
            CollectionField::OciReference => "ociReference",
        }
    }

    /// Looks up the field whose header equals an already normalised line.
    pub fn from_header(normalised: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.header() == normalised)
    }
}

impl std::fmt::Display for CollectionField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.yaml_key())
    }
}

// ---------------------------------------------------------------------------
// Line handling
// ---------------------------------------------------------------------------

/// Splits an issue body on `\n` and `\r\n`.
///
/// A lone `\r` is kept as content. An empty body yields a single empty line.
pub fn split_lines(body: &str) -> Vec<&str> {
    body.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

/// Whitespace as JavaScript's `trim` and `parseInt` see it: Unicode white
/// space and line terminators plus the byte-order mark, but not U+0085.
pub(crate) fn is_trim_whitespace(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

/// Normalises a line for header comparison: surrounding whitespace is trimmed
/// and the result lowercased.
pub fn normalise_header(line: &str) -> String {
    line.trim_matches(is_trim_whitespace).to_lowercase()
}

// ---------------------------------------------------------------------------
// Entry
// ---------------------------------------------------------------------------

/// A single record of the collection index (`_data/collection-index.yml`).
///
/// Each field is `None` when its header never appeared in the issue body, or
/// when the header sat too close to the end of the body to have a value line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionIndexEntry {
    pub name: Option<String>,
    pub maintainer: Option<String>,
    pub contact: Option<String>,
    pub repository: Option<String>,
    pub oci_reference: Option<String>,
}

impl CollectionIndexEntry {
    /// Extracts an entry from an issue-form body.
    ///
    /// Every header occurrence assigns its field, so when a header is repeated
    /// the last occurrence wins, including when it has no value line.
    pub fn from_issue_body(body: &str) -> Self {
        let lines = split_lines(body);
        let mut entry = Self::default();

        for (index, line) in lines.iter().enumerate() {
            let Some(field) = CollectionField::from_header(&normalise_header(line)) else {
                continue;
            };
            let value = lines.get(index + 2).map(|v| (*v).to_owned());
            tracing::debug!(
                field = %field,
                line = index,
                found = value.is_some(),
                "Matched issue-form header"
            );
            *entry.field_mut(field) = value;
        }

        entry
    }

    /// Returns the value of `field`, if one was extracted.
    pub fn get(&self, field: CollectionField) -> Option<&str> {
        match field {
            CollectionField::Name => self.name.as_deref(),
            CollectionField::Maintainer => self.maintainer.as_deref(),
            CollectionField::Contact => self.contact.as_deref(),
            CollectionField::Repository => self.repository.as_deref(),
            CollectionField::OciReference => self.oci_reference.as_deref(),
        }
    }

    fn field_mut(&mut self, field: CollectionField) -> &mut Option<String> {
        match field {
            CollectionField::Name => &mut self.name,
            CollectionField::Maintainer => &mut self.maintainer,
            CollectionField::Contact => &mut self.contact,
            CollectionField::Repository => &mut self.repository,
            CollectionField::OciReference => &mut self.oci_reference,
        }
    }

    /// Fields that were not found in the issue body.
    pub fn missing_fields(&self) -> Vec<CollectionField> {
        CollectionField::ALL
            .into_iter()
            .filter(|f| self.get(*f).is_none())
            .collect()
    }

    /// Renders the entry as a YAML sequence item, preceded by a blank line.
    ///
    /// Values are interpolated verbatim; no YAML quoting or escaping is
    /// applied. A missing field renders as an empty value.
    pub fn render(&self) -> String {
        let mut out = String::from("\n");
        for (i, field) in CollectionField::ALL.into_iter().enumerate() {
            let prefix = if i == 0 { "- " } else { "  " };
            out.push_str(prefix);
            out.push_str(field.yaml_key());
            out.push_str(": ");
            out.push_str(self.get(field).unwrap_or_default());
            out.push('\n');
        }
        out
    }
}
