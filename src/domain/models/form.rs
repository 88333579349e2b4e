#[cfg(test)]
#[path = "form_test.rs"]
mod tests;

/// Labels for the intake form fields, in render order. The order matches the
/// section order of [`FormData::format_context`].
pub const FORM_LABELS: [&str; 5] = [
    "Titel des Projekts",
    "Beschreibung",
    "Anforderungen",
    "Einschränkungen",
    "Weitere Informationen",
];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormData {
    pub title: String,
    pub description: String,
    pub requirements: String,
    pub constraints: String,
    pub additional_info: String,
}

impl FormData {
    /// Renders the five fields into the context block that is injected into
    /// the first chat prompt. Pure, fixed section order, fields verbatim.
    pub fn format_context(&self) -> String {
        return format!(
            "Projektinformationen:\n\nTitel: {}\n\nBeschreibung:\n{}\n\nAnforderungen:\n{}\n\nEinschränkungen:\n{}\n\nWeitere Informationen:\n{}",
            self.title, self.description, self.requirements, self.constraints, self.additional_info
        );
    }
}
