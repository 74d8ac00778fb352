pub mod engine;
pub mod noun;
pub mod stress;
pub mod verb;


pub use engine::GrammarEngine;
pub use noun::NounDecliner;
pub use stress::{get_stress_position, has_stress, mark_stress, remove_stress};
pub use verb::VerbConjugator;
