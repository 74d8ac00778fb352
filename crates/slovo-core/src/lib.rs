pub mod error;
pub mod language;
pub mod preprocess;
pub mod types;

pub use error::GrammarError;
pub use language::Inflector;
pub use preprocess::{DefaultPreprocessor, Preprocessor};
pub use types::{
    Aspect, Case, CaseTable, Gender, Imperative, NounDeclensionResult, NounEntry, Participles,
    ParticipleKind, PastTense, Person, PersonTable, VerbConjugationResult, VerbEntry,
};
