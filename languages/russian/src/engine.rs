use slovo_config::Config;
use slovo_config::grammar::GrammarConfig;
use slovo_core::{
    Aspect, DefaultPreprocessor, Inflector, NounDeclensionResult, NounEntry, Participles, Person,
    Preprocessor, VerbConjugationResult, VerbEntry,
};

use crate::noun::NounDecliner;
use crate::stress;
use crate::verb::VerbConjugator;

/// Russian grammar engine
///
/// Assembles full verb and noun profiles for the lookup layer. Holds only
/// read-only settings, so one instance can be shared across threads.
pub struct GrammarEngine {
    verbs: VerbConjugator,
    nouns: NounDecliner,
    preprocessor: DefaultPreprocessor,
    config: GrammarConfig,
}

impl GrammarEngine {
    /// Create an engine with default settings
    pub fn new() -> Self {
        Self::with_config(GrammarConfig::default())
    }

    pub fn with_config(config: GrammarConfig) -> Self {
        Self {
            verbs: VerbConjugator::new(),
            nouns: NounDecliner::new(),
            preprocessor: DefaultPreprocessor,
            config,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::with_config(config.grammar.clone())
    }

    pub fn config(&self) -> &GrammarConfig {
        &self.config
    }

    /// Present, past, future, imperative and participles for one verb.
    ///
    /// None when grammar is disabled or the infinitive is empty. Fields
    /// that do not apply are left empty rather than failing the lookup.
    pub fn get_full_verb_conjugation(&self, entry: &VerbEntry) -> Option<VerbConjugationResult> {
        if !self.config.enabled {
            return None;
        }

        let infinitive = self.preprocessor.process(&entry.infinitive);
        if infinitive.is_empty() {
            tracing::debug!("Empty infinitive, skipping conjugation");
            return None;
        }

        let aspect = entry.aspect;
        let present = entry.present.as_ref().filter(|table| !table.is_empty());
        let past_stem = if self.config.prefer_dataset_forms {
            entry
                .past_stem
                .as_deref()
                .map(str::trim)
                .filter(|stem| !stem.is_empty())
        } else {
            None
        };

        let imperative = match present {
            Some(table) => {
                let form_2sg = table.get(&Person::SecondSingular);
                let form_3pl = table.get(&Person::ThirdPlural);
                match (form_2sg, form_3pl) {
                    (Some(form_2sg), Some(form_3pl)) => self.verbs.imperative(form_2sg, form_3pl),
                    _ => {
                        tracing::debug!("No ты/они forms for {}, imperative omitted", infinitive);
                        None
                    }
                }
            }
            None => None,
        };

        let participles = if self.config.participles {
            self.verbs.participles(&infinitive, aspect, present, past_stem)
        } else {
            Participles::new()
        };

        let result = VerbConjugationResult {
            present: match aspect {
                Aspect::Imperfective => present.cloned(),
                Aspect::Perfective => None,
            },
            past: self.verbs.past_tense(&infinitive, past_stem),
            future: self.verbs.future_tense(&infinitive, aspect, present),
            imperative,
            participles,
            infinitive,
            aspect,
        };

        if self.config.keep_stress {
            Some(result)
        } else {
            Some(result.map_forms(stress::remove_stress))
        }
    }

    /// Singular table from the dataset plus the plural.
    ///
    /// None when grammar is disabled, or gender or singular forms are missing.
    pub fn get_full_noun_declension(&self, entry: &NounEntry) -> Option<NounDeclensionResult> {
        if !self.config.enabled {
            return None;
        }

        let Some(gender) = entry.gender else {
            tracing::debug!("No gender for {}, skipping declension", entry.nominative());
            return None;
        };

        if entry.singular.is_empty() {
            tracing::debug!("No singular cases for {}, skipping declension", entry.nominative());
            return None;
        }

        let dataset_plural = entry
            .plural
            .as_ref()
            .filter(|plural| self.config.prefer_dataset_forms && !plural.is_empty());

        let plural = match dataset_plural {
            Some(plural) => {
                tracing::debug!("Using dataset plural for {}", entry.nominative());
                plural.clone()
            }
            None => {
                let nominative = self.preprocessor.process(entry.nominative());
                self.nouns
                    .plural_declension(&nominative, gender, entry.animate)
            }
        };

        let result = NounDeclensionResult {
            singular: entry.singular.clone(),
            plural,
        };

        if self.config.keep_stress {
            Some(result)
        } else {
            Some(result.map_forms(stress::remove_stress))
        }
    }
}

impl Default for GrammarEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Inflector for GrammarEngine {
    fn language_code(&self) -> &str {
        "ru"
    }

    fn conjugate(&self, entry: &VerbEntry) -> Option<VerbConjugationResult> {
        self.get_full_verb_conjugation(entry)
    }

    fn decline(&self, entry: &NounEntry) -> Option<NounDeclensionResult> {
        self.get_full_noun_declension(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slovo_core::{Case, CaseTable, Gender, ParticipleKind, PersonTable};

    fn present_table(forms: &[(Person, &str)]) -> PersonTable {
        forms
            .iter()
            .map(|(person, form)| (*person, form.to_string()))
            .collect()
    }

    fn singular_table(forms: &[(Case, &str)]) -> CaseTable {
        forms
            .iter()
            .map(|(case, form)| (*case, form.to_string()))
            .collect()
    }

    fn chitat() -> VerbEntry {
        VerbEntry::new("читать", Aspect::Imperfective).with_present(present_table(&[
            (Person::ThirdPlural, "читают"),
            (Person::SecondSingular, "читаешь"),
            (Person::FirstPlural, "читаем"),
        ]))
    }

    #[test]
    fn full_verb_conjugation() {
        let result = GrammarEngine::new().get_full_verb_conjugation(&chitat()).unwrap();
        assert_eq!(result.infinitive, "читать");
        assert_eq!(result.aspect, Aspect::Imperfective);
        assert_eq!(result.present.as_ref().unwrap().len(), 3);
        assert_eq!(result.past.as_ref().unwrap().masc, "читал");
        assert_eq!(
            stress::remove_stress(&result.future[&Person::FirstSingular]),
            "буду читать"
        );
        assert_eq!(result.imperative.as_ref().unwrap().singular, "читай");
        assert_eq!(result.participles[&ParticipleKind::PresentActive], "читающий");
        assert_eq!(result.participles[&ParticipleKind::PresentPassive], "читаемый");
    }

    #[test]
    fn perfective_has_no_present() {
        let simple_future = present_table(&[
            (Person::FirstSingular, "прочитаю"),
            (Person::SecondSingular, "прочитаешь"),
            (Person::ThirdPlural, "прочитают"),
        ]);
        let entry =
            VerbEntry::new("прочитать", Aspect::Perfective).with_present(simple_future.clone());
        let result = GrammarEngine::new().get_full_verb_conjugation(&entry).unwrap();
        assert!(result.present.is_none());
        assert_eq!(result.future, simple_future);
        assert_eq!(result.imperative.unwrap().singular, "прочитай");
        assert_eq!(result.participles[&ParticipleKind::PastPassive], "прочитанный");
    }

    #[test]
    fn verb_without_present_table() {
        let entry = VerbEntry::new("прочитать", Aspect::Perfective);
        let result = GrammarEngine::new().get_full_verb_conjugation(&entry).unwrap();
        assert!(result.future.is_empty());
        assert!(result.imperative.is_none());
        assert!(result.past.is_some());
    }

    #[test]
    fn imperative_needs_both_forms() {
        let entry = VerbEntry::new("читать", Aspect::Imperfective)
            .with_present(present_table(&[(Person::SecondSingular, "читаешь")]));
        let result = GrammarEngine::new().get_full_verb_conjugation(&entry).unwrap();
        assert!(result.imperative.is_none());
        assert!(result.present.is_some());
    }

    #[test]
    fn dataset_past_stem_wins() {
        let entry = VerbEntry::new("идти", Aspect::Imperfective).with_past_stem("шё");
        let result = GrammarEngine::new().get_full_verb_conjugation(&entry).unwrap();
        assert_eq!(result.past.unwrap().masc, "шёл");
    }

    #[test]
    fn dataset_past_stem_ignored_when_disabled() {
        let config = GrammarConfig {
            prefer_dataset_forms: false,
            ..GrammarConfig::default()
        };
        let entry = VerbEntry::new("идти", Aspect::Imperfective).with_past_stem("шё");
        let result = GrammarEngine::with_config(config)
            .get_full_verb_conjugation(&entry)
            .unwrap();
        let past = result.past.unwrap();
        assert_eq!(past.masc, "ид");
        assert_eq!(past.fem, "идла");
    }

    #[test]
    fn empty_infinitive_gives_nothing() {
        let entry = VerbEntry::new("  ", Aspect::Imperfective);
        assert!(GrammarEngine::new().get_full_verb_conjugation(&entry).is_none());
    }

    #[test]
    fn plain_output_drops_stress() {
        let config = GrammarConfig {
            keep_stress: false,
            ..GrammarConfig::default()
        };
        let entry = VerbEntry::new("говори\u{301}ть", Aspect::Imperfective).with_present(
            present_table(&[
                (Person::SecondSingular, "говори\u{301}шь"),
                (Person::ThirdPlural, "говоря\u{301}т"),
            ]),
        );
        let result = GrammarEngine::with_config(config)
            .get_full_verb_conjugation(&entry)
            .unwrap();
        assert_eq!(result.infinitive, "говорить");
        assert_eq!(result.future[&Person::FirstSingular], "буду говорить");
        assert_eq!(result.imperative.unwrap().singular, "говори");
        assert!(!stress::has_stress(&result.present.unwrap()[&Person::ThirdPlural]));
    }

    #[test]
    fn engine_takes_grammar_section_from_config() {
        let config = Config::from_lookup(|key| {
            (key == "SLOVO_KEEP_STRESS").then(|| "false".to_string())
        });
        let engine = GrammarEngine::from_config(&config);
        assert!(!engine.config().keep_stress);
        assert!(engine.config().participles);

        let entry = NounEntry::new("кни\u{301}га", Gender::Feminine)
            .with_singular(singular_table(&[(Case::Nominative, "кни\u{301}га")]));
        let result = engine.get_full_noun_declension(&entry).unwrap();
        assert_eq!(result.singular.get(Case::Nominative), Some("книга"));
        assert!(result.plural.iter().all(|(_, form)| !stress::has_stress(form)));
    }

    #[test]
    fn verb_result_survives_json_round_trip() {
        let result = GrammarEngine::new()
            .get_full_verb_conjugation(&chitat())
            .unwrap();
        let json = result.to_json().unwrap();
        let back: VerbConjugationResult = serde_json::from_value(json).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn participles_can_be_switched_off() {
        let config = GrammarConfig {
            participles: false,
            ..GrammarConfig::default()
        };
        let result = GrammarEngine::with_config(config)
            .get_full_verb_conjugation(&chitat())
            .unwrap();
        assert!(result.participles.is_empty());
    }

    #[test]
    fn disabled_engine_returns_nothing() {
        let config = GrammarConfig {
            enabled: false,
            ..GrammarConfig::default()
        };
        let engine = GrammarEngine::with_config(config);
        assert!(engine.get_full_verb_conjugation(&chitat()).is_none());
        let noun = NounEntry::new("стол", Gender::Masculine)
            .with_singular(singular_table(&[(Case::Nominative, "стол")]));
        assert!(engine.get_full_noun_declension(&noun).is_none());
    }

    #[test]
    fn full_noun_declension() {
        let entry = NounEntry::new("стол", Gender::Masculine).with_singular(singular_table(&[
            (Case::Nominative, "стол"),
            (Case::Genitive, "стола"),
        ]));
        let result = GrammarEngine::new().get_full_noun_declension(&entry).unwrap();
        assert_eq!(result.singular, entry.singular);
        assert_eq!(result.plural.get(Case::Nominative), Some("столы"));
        assert!(result.plural.is_complete());
    }

    #[test]
    fn noun_nominative_from_singular_table() {
        let entry = NounEntry {
            gender: Some(Gender::Neuter),
            singular: singular_table(&[(Case::Nominative, "слово")]),
            ..NounEntry::default()
        };
        let result = GrammarEngine::new().get_full_noun_declension(&entry).unwrap();
        assert_eq!(result.plural.get(Case::Nominative), Some("слова"));
    }

    #[test]
    fn noun_animacy_reaches_plural() {
        let entry = NounEntry::new("друг", Gender::Masculine)
            .animate(true)
            .with_singular(singular_table(&[(Case::Nominative, "друг")]));
        let result = GrammarEngine::new().get_full_noun_declension(&entry).unwrap();
        assert_eq!(
            result.plural.get(Case::Accusative),
            result.plural.get(Case::Genitive)
        );
    }

    #[test]
    fn dataset_plural_wins() {
        let irregular = singular_table(&[
            (Case::Nominative, "лю\u{301}ди"),
            (Case::Genitive, "люде\u{301}й"),
            (Case::Dative, "лю\u{301}дям"),
            (Case::Accusative, "люде\u{301}й"),
            (Case::Instrumental, "людьми\u{301}"),
            (Case::Prepositional, "лю\u{301}дях"),
        ]);
        let entry = NounEntry::new("человек", Gender::Masculine)
            .animate(true)
            .with_singular(singular_table(&[(Case::Nominative, "челове\u{301}к")]))
            .with_plural(irregular.clone());
        let result = GrammarEngine::new().get_full_noun_declension(&entry).unwrap();
        assert_eq!(result.plural, irregular);
    }

    #[test]
    fn noun_without_gender_or_cases() {
        let engine = GrammarEngine::new();
        let no_gender = NounEntry {
            nominative_singular: "стол".to_string(),
            singular: singular_table(&[(Case::Nominative, "стол")]),
            ..NounEntry::default()
        };
        assert!(engine.get_full_noun_declension(&no_gender).is_none());

        let no_cases = NounEntry::new("стол", Gender::Masculine);
        assert!(engine.get_full_noun_declension(&no_cases).is_none());
    }

    #[test]
    fn noun_result_serializes_with_case_keys() {
        let entry = NounEntry::new("книга", Gender::Feminine)
            .with_singular(singular_table(&[(Case::Nominative, "кни\u{301}га")]));
        let json = GrammarEngine::new()
            .get_full_noun_declension(&entry)
            .unwrap()
            .to_json()
            .unwrap();
        assert_eq!(json["plural"]["nominative"], "книги");
        assert_eq!(json["plural"]["genitive"], "книг");
        assert_eq!(json["singular"]["nominative"], "кни\u{301}га");
    }

    #[test]
    fn verb_result_serializes_with_dataset_keys() {
        let json = GrammarEngine::new()
            .get_full_verb_conjugation(&chitat())
            .unwrap()
            .to_json()
            .unwrap();
        assert_eq!(json["past"]["fem"], "читала");
        assert_eq!(json["imperative"]["plural"], "читайте");
        assert_eq!(json["participles"]["past_active"], "читавший");
        assert_eq!(json["present"]["они"], "читают");
    }

    #[test]
    fn verb_entry_from_json_round_trip_through_engine() {
        let entry = VerbEntry::from_json(
            r#"{"word": "говорить", "aspect": "imperfective",
                "conjugation": {"ты": "говоришь", "они": "говорят"}}"#,
        )
        .unwrap();
        let result = GrammarEngine::new().get_full_verb_conjugation(&entry).unwrap();
        assert_eq!(
            stress::remove_stress(&result.imperative.unwrap().singular),
            "говори"
        );
        assert_eq!(result.participles[&ParticipleKind::PresentActive], "говорящий");
    }

    #[test]
    fn serves_through_inflector_trait() {
        let engine: &dyn Inflector = &GrammarEngine::new();
        assert_eq!(engine.language_code(), "ru");
        assert!(engine.conjugate(&chitat()).is_some());
    }
}
