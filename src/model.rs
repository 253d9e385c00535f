//! Data model for parsed conf spec files — format-agnostic.

/// One bracketed stanza from a `.conf.spec` file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Stanza {
    /// Header text with the outer brackets removed. `[]` yields "".
    pub name: String,
    /// Non-blank lines after the header, trimmed, in original order.
    pub lines: Vec<String>,
}

impl Stanza {
    /// Code block text: every body line followed by a newline.
    pub fn body(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

/// A DITA concept topic built from a single spec file.
///
/// Built once per input, never mutated after serialization.
#[derive(Debug)]
pub struct Topic {
    /// Root element id, e.g. "app.conf" for app.conf.spec.
    pub id: String,
    pub title: String,
    pub shortdesc: String,
    /// Value of the root element's xml:lang attribute.
    pub lang: String,
    /// Stanzas in first-appearance order, duplicates included.
    pub stanzas: Vec<Stanza>,
}

impl Topic {
    /// Build the topic skeleton for a spec file.
    pub fn from_stanzas(id: impl Into<String>, stanzas: Vec<Stanza>) -> Self {
        let id = id.into();
        Topic {
            title: format!("{} (SpeXML)", id),
            shortdesc: format!("The following are the spec and example files for {}.", id),
            lang: "en-us".to_string(),
            id,
            stanzas,
        }
    }
}
