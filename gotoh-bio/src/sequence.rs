use std::fmt;

/// A named sequence as read from a FASTA record.
///
/// The sequence is text: each `char` is one symbol, whatever its width in
/// UTF-8. No alphabet is assumed and case is kept.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SequenceRecord {
    pub id: String,
    pub description: Option<String>,
    pub sequence: String,
}

impl SequenceRecord {
    pub fn new(id: String, sequence: String) -> Self {
        Self {
            id,
            description: None,
            sequence,
        }
    }

    pub fn with_description(mut self, description: String) -> Self {
        self.description = Some(description);
        self
    }

    /// The symbols to align, one per `char`.
    pub fn symbols(&self) -> Vec<char> {
        self.sequence.chars().collect()
    }

    /// Number of symbols (not bytes)
    pub fn len(&self) -> usize {
        self.sequence.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn header(&self) -> String {
        match &self.description {
            Some(desc) => format!(">{} {}", self.id, desc),
            None => format!(">{}", self.id),
        }
    }
}

impl fmt::Display for SequenceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header())?;
        writeln!(f, "{}", self.sequence)
    }
}
