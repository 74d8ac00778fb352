use crate::types::{NounDeclensionResult, NounEntry, VerbConjugationResult, VerbEntry};

/// Morphological synthesis for one language
///
/// Implementations hold no mutable state, so a single instance can serve
/// any number of concurrent lookups.
pub trait Inflector: Send + Sync {
    /// Language identifier (ISO 639-1 code: "ru", "uk", etc.)
    fn language_code(&self) -> &str;

    /// Build the full verb profile, None if the entry has no usable infinitive
    fn conjugate(&self, entry: &VerbEntry) -> Option<VerbConjugationResult>;

    /// Build singular + plural case tables, None if gender or singular forms are missing
    fn decline(&self, entry: &NounEntry) -> Option<NounDeclensionResult>;
}
