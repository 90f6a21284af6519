//! Context assembly from retrieved facts

use crate::rag::SearchResult;

/// Assembler for creating context from search results
pub struct ContextAssembler {
    max_sentences: usize,
}

impl ContextAssembler {
    /// Create a new context assembler
    #[must_use]
    pub const fn new(max_sentences: usize) -> Self {
        Self { max_sentences }
    }

    pub const fn max_sentences(&self) -> usize {
        self.max_sentences
    }

    /// Join the facts into one passage, grouped by section in order of
    /// first appearance. `None` when there is nothing to assemble.
    #[must_use]
    pub fn assemble(&self, results: &[SearchResult]) -> Option<String> {
        let groups = self.group_by_section(results);
        if groups.is_empty() {
            return None;
        }

        let sentences: Vec<&str> = groups
            .into_iter()
            .flat_map(|(_, sentences)| sentences)
            .collect();

        Some(sentences.join(" "))
    }

    /// Facts grouped per section, sections in order of first appearance
    #[must_use]
    pub fn group_by_section<'a>(&self, results: &'a [SearchResult]) -> Vec<(&'a str, Vec<&'a str>)> {
        let mut groups: Vec<(&str, Vec<&str>)> = Vec::new();

        for result in results.iter().take(self.max_sentences) {
            match groups
                .iter_mut()
                .find(|(section, _)| *section == result.section)
            {
                Some((_, sentences)) => sentences.push(result.text.as_str()),
                None => groups.push((result.section.as_str(), vec![result.text.as_str()])),
            }
        }

        groups
    }

    /// Create a summary of the retrieved facts
    #[must_use]
    pub fn create_summary(&self, results: &[SearchResult]) -> String {
        if results.is_empty() {
            return "No relevant facts found.".to_string();
        }

        let mut summary = format!("Found {} relevant fact(s):\n\n", results.len());

        for (idx, result) in results.iter().enumerate().take(self.max_sentences) {
            summary.push_str(&format!(
                "{}. [{}] Score: {:.2}\n   {}\n\n",
                idx + 1,
                result.section,
                result.score,
                result.text
            ));
        }

        summary
    }
}

impl Default for ContextAssembler {
    fn default() -> Self {
        Self::new(5)
    }
}
