//! Resume download: placeholder text attachment built in memory.

pub const RESUME_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeFile {
    pub filename: String,
    pub body: String,
}

impl ResumeFile {
    /// `Content-Disposition` value that makes browsers save the file.
    #[must_use]
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.filename)
    }
}

/// Lowercase ASCII slug with every other character folded to `_`.
#[must_use]
pub fn owner_slug(owner: &str) -> String {
    let slug: String = owner
        .trim()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
        .collect();
    if slug.is_empty() { "resume_owner".to_string() } else { slug }
}

#[must_use]
pub fn placeholder(owner: &str, headline: &str) -> ResumeFile {
    ResumeFile { filename: format!("{}_resume.txt", owner_slug(owner)), body: format!("{owner}'s Resume - {headline}") }
}

#[cfg(test)]
#[path = "resume_test.rs"]
mod tests;
