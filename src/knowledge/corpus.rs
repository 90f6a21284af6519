//! Sectioned fact corpus and its loader
//!
//! File format:
//!
//! ```text
//! # comment line, ignored
//! [Products]
//! Our products are 100% organic and cruelty-free.
//!
//! [Sustainability]
//! We use biodegradable packaging.
//! ```

use std::collections::HashMap;
use std::path::Path;

use tracing::debug;
use tracing::info;

use crate::errors::FactRagError;
use crate::errors::Result;

/// A named group of fact sentences, in file order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    pub sentences: Vec<String>,
}

/// Immutable fact corpus with a flat sentence index.
///
/// Sentence `i` lives in section `section_of(i)`; the index position is the
/// sentence's identity for the lifetime of the corpus.
#[derive(Debug, Clone, Default)]
pub struct FactCorpus {
    sections: Vec<Section>,
    section_lookup: HashMap<String, usize>,
    all_sentences: Vec<String>,
    // Position into `sections`, parallel to `all_sentences`
    section_of: Vec<usize>,
}

impl FactCorpus {
    /// Parse corpus text. Lenient: orphan facts before the first header are
    /// dropped and the result may be empty.
    pub fn parse(content: &str) -> Self {
        let mut corpus = Self::default();
        let mut current: Option<usize> = None;
        let mut orphans = 0usize;

        for line in content.lines() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(name) = parse_header(line) {
                current = Some(corpus.open_section(name));
                continue;
            }

            match current {
                Some(section_idx) => corpus.push_sentence(section_idx, line),
                None => orphans += 1,
            }
        }

        if orphans > 0 {
            debug!("Dropped {} fact line(s) that appeared before any section header", orphans);
        }

        corpus
    }

    fn open_section(&mut self, name: &str) -> usize {
        if let Some(&idx) = self.section_lookup.get(name) {
            return idx;
        }
        let idx = self.sections.len();
        self.sections.push(Section {
            name: name.to_string(),
            sentences: Vec::new(),
        });
        self.section_lookup.insert(name.to_string(), idx);
        idx
    }

    fn push_sentence(&mut self, section_idx: usize, sentence: &str) {
        self.sections[section_idx]
            .sentences
            .push(sentence.to_string());
        self.all_sentences.push(sentence.to_string());
        self.section_of.push(section_idx);
    }

    pub fn is_empty(&self) -> bool {
        self.all_sentences.is_empty()
    }

    pub fn sentence_count(&self) -> usize {
        self.all_sentences.len()
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Section names in load order
    pub fn section_names(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.name.as_str()).collect()
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// All facts of one section, `None` for an unknown name
    pub fn section(&self, name: &str) -> Option<&[String]> {
        self.section_lookup
            .get(name)
            .map(|&idx| self.sections[idx].sentences.as_slice())
    }

    pub fn all_sentences(&self) -> &[String] {
        &self.all_sentences
    }

    pub fn sentence(&self, index: usize) -> Option<&str> {
        self.all_sentences.get(index).map(String::as_str)
    }

    /// Name of the section owning sentence `index`
    pub fn section_of(&self, index: usize) -> Option<&str> {
        self.section_of
            .get(index)
            .map(|&idx| self.sections[idx].name.as_str())
    }
}

/// `[name]` with a non-empty name
fn parse_header(line: &str) -> Option<&str> {
    let name = line.strip_prefix('[')?.strip_suffix(']')?;
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Load a corpus file. Fails when the file is unreadable or holds no facts.
pub fn load_corpus<P: AsRef<Path>>(path: P) -> Result<FactCorpus> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .map_err(|e| FactRagError::corpus_load(path, e.to_string()))?;

    let corpus = FactCorpus::parse(&content);
    if corpus.section_count() == 0 || corpus.is_empty() {
        return Err(FactRagError::corpus_load(
            path,
            "no sections with facts found",
        ));
    }

    info!(
        "Loaded knowledge base from {}: {} facts in {} sections",
        path.display(),
        corpus.sentence_count(),
        corpus.section_count()
    );

    Ok(corpus)
}
