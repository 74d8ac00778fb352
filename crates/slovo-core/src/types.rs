use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GrammarError;

/// Verbal aspect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Aspect {
    Imperfective,
    Perfective,
}

impl Aspect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Aspect::Imperfective => "imperfective",
            Aspect::Perfective => "perfective",
        }
    }
}

impl FromStr for Aspect {
    type Err = GrammarError;

    /// Dataset labels are free-form ("imperfective (pair: прочитать)"),
    /// so match on the contained keyword. "imperfective" contains
    /// "perfective", so it has to be tested first.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        if lower.contains("imperfective") || lower == "impf" {
            Ok(Aspect::Imperfective)
        } else if lower.contains("perfective") || lower == "pf" {
            Ok(Aspect::Perfective)
        } else {
            Err(GrammarError::UnknownAspect(s.to_string()))
        }
    }
}

impl TryFrom<String> for Aspect {
    type Error = GrammarError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Aspect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grammatical gender of a noun
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Gender {
    Masculine,
    Feminine,
    Neuter,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Masculine => "masculine",
            Gender::Feminine => "feminine",
            Gender::Neuter => "neuter",
        }
    }
}

impl FromStr for Gender {
    type Err = GrammarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "masculine" | "masc" | "m" => Ok(Gender::Masculine),
            "feminine" | "fem" | "f" => Ok(Gender::Feminine),
            "neuter" | "neut" | "n" => Ok(Gender::Neuter),
            _ => Err(GrammarError::UnknownGender(s.to_string())),
        }
    }
}

impl TryFrom<String> for Gender {
    type Error = GrammarError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The six grammatical cases, in traditional table order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Case {
    Nominative,
    Genitive,
    Dative,
    Accusative,
    Instrumental,
    Prepositional,
}

impl Case {
    pub const ALL: [Case; 6] = [
        Case::Nominative,
        Case::Genitive,
        Case::Dative,
        Case::Accusative,
        Case::Instrumental,
        Case::Prepositional,
    ];

    /// Key used by the lexical dataset
    pub fn label(&self) -> &'static str {
        match self {
            Case::Nominative => "nominative",
            Case::Genitive => "genitive",
            Case::Dative => "dative",
            Case::Accusative => "accusative",
            Case::Instrumental => "instrumental",
            Case::Prepositional => "prepositional",
        }
    }

    /// Russian grammatical name
    pub fn russian_name(&self) -> &'static str {
        match self {
            Case::Nominative => "именительный",
            Case::Genitive => "родительный",
            Case::Dative => "дательный",
            Case::Accusative => "винительный",
            Case::Instrumental => "творительный",
            Case::Prepositional => "предложный",
        }
    }

    /// Question words a learner asks to find the case
    pub fn question(&self) -> &'static str {
        match self {
            Case::Nominative => "кто? что?",
            Case::Genitive => "кого? чего?",
            Case::Dative => "кому? чему?",
            Case::Accusative => "кого? что?",
            Case::Instrumental => "кем? чем?",
            Case::Prepositional => "о ком? о чём?",
        }
    }
}

impl FromStr for Case {
    type Err = GrammarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Case::ALL
            .into_iter()
            .find(|case| case.label() == lower || case.russian_name() == lower)
            .ok_or_else(|| GrammarError::UnknownCase(s.to_string()))
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Grammatical person/number slot of a finite verb form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Person {
    #[serde(rename = "я")]
    FirstSingular,
    #[serde(rename = "ты")]
    SecondSingular,
    #[serde(rename = "он/она")]
    ThirdSingular,
    #[serde(rename = "мы")]
    FirstPlural,
    #[serde(rename = "вы")]
    SecondPlural,
    #[serde(rename = "они")]
    ThirdPlural,
}

impl Person {
    pub const ALL: [Person; 6] = [
        Person::FirstSingular,
        Person::SecondSingular,
        Person::ThirdSingular,
        Person::FirstPlural,
        Person::SecondPlural,
        Person::ThirdPlural,
    ];

    /// Pronoun key used by the lexical dataset
    pub fn as_str(&self) -> &'static str {
        match self {
            Person::FirstSingular => "я",
            Person::SecondSingular => "ты",
            Person::ThirdSingular => "он/она",
            Person::FirstPlural => "мы",
            Person::SecondPlural => "вы",
            Person::ThirdPlural => "они",
        }
    }
}

impl FromStr for Person {
    type Err = GrammarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        match lower.as_str() {
            "он" | "она" | "оно" => return Ok(Person::ThirdSingular),
            _ => {}
        }
        Person::ALL
            .into_iter()
            .find(|person| person.as_str() == lower)
            .ok_or_else(|| GrammarError::UnknownPerson(s.to_string()))
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Participle types
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticipleKind {
    PresentActive,
    PastActive,
    PresentPassive,
    PastPassive,
}

impl ParticipleKind {
    pub fn label(&self) -> &'static str {
        match self {
            ParticipleKind::PresentActive => "present_active",
            ParticipleKind::PastActive => "past_active",
            ParticipleKind::PresentPassive => "present_passive",
            ParticipleKind::PastPassive => "past_passive",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ParticipleKind::PresentActive => "present active (наст. действ.)",
            ParticipleKind::PastActive => "past active (прош. действ.)",
            ParticipleKind::PresentPassive => "present passive (наст. страд.)",
            ParticipleKind::PastPassive => "past passive (прош. страд.)",
        }
    }
}

/// Person -> form mapping (present tense, simple or compound future)
pub type PersonTable = BTreeMap<Person, String>;

/// Participle kind -> form, holding only the kinds that apply
pub type Participles = BTreeMap<ParticipleKind, String>;

/// Case -> word form mapping
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CaseTable(BTreeMap<Case, String>);

impl CaseTable {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn get(&self, case: Case) -> Option<&str> {
        self.0.get(&case).map(String::as_str)
    }

    pub fn insert(&mut self, case: Case, form: impl Into<String>) {
        self.0.insert(case, form.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// All six cases present with non-empty forms
    pub fn is_complete(&self) -> bool {
        Case::ALL
            .iter()
            .all(|case| self.get(*case).is_some_and(|form| !form.is_empty()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Case, &str)> {
        self.0.iter().map(|(case, form)| (*case, form.as_str()))
    }

    /// Apply a transform to every form
    pub fn map_forms(self, f: impl Fn(&str) -> String) -> Self {
        Self(
            self.0
                .into_iter()
                .map(|(case, form)| (case, f(&form)))
                .collect(),
        )
    }
}

impl FromIterator<(Case, String)> for CaseTable {
    fn from_iter<T: IntoIterator<Item = (Case, String)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Past tense forms; Russian past agrees in gender/number, never person
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PastTense {
    pub masc: String,
    pub fem: String,
    pub neut: String,
    pub plural: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Imperative {
    pub singular: String,
    pub plural: String,
}

/// Verb headword as supplied by the lexical dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerbEntry {
    #[serde(alias = "word")]
    pub infinitive: String,
    pub aspect: Aspect,
    /// Present tense (imperfective) or simple future (perfective) forms
    #[serde(default, alias = "conjugation")]
    pub present: Option<PersonTable>,
    /// Irregular past stem (шё for идти), used instead of the rule stem
    #[serde(default)]
    pub past_stem: Option<String>,
}

impl VerbEntry {
    pub fn new(infinitive: impl Into<String>, aspect: Aspect) -> Self {
        Self {
            infinitive: infinitive.into(),
            aspect,
            present: None,
            past_stem: None,
        }
    }

    pub fn with_present(mut self, present: PersonTable) -> Self {
        self.present = Some(present);
        self
    }

    pub fn with_past_stem(mut self, stem: impl Into<String>) -> Self {
        self.past_stem = Some(stem.into());
        self
    }

    pub fn from_json(json: &str) -> Result<Self, GrammarError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Noun headword as supplied by the lexical dataset
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NounEntry {
    #[serde(default, alias = "word")]
    pub nominative_singular: String,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub animate: bool,
    /// Full singular table; passed through untouched
    #[serde(default, alias = "cases")]
    pub singular: CaseTable,
    /// Irregular plural (люди for человек), used instead of the derived one
    #[serde(default)]
    pub plural: Option<CaseTable>,
}

impl NounEntry {
    pub fn new(nominative_singular: impl Into<String>, gender: Gender) -> Self {
        Self {
            nominative_singular: nominative_singular.into(),
            gender: Some(gender),
            ..Self::default()
        }
    }

    pub fn animate(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }

    pub fn with_singular(mut self, singular: CaseTable) -> Self {
        self.singular = singular;
        self
    }

    pub fn with_plural(mut self, plural: CaseTable) -> Self {
        self.plural = Some(plural);
        self
    }

    /// Headword, falling back to the nominative of the singular table
    pub fn nominative(&self) -> &str {
        if self.nominative_singular.trim().is_empty() {
            self.singular.get(Case::Nominative).unwrap_or_default()
        } else {
            &self.nominative_singular
        }
    }

    pub fn from_json(json: &str) -> Result<Self, GrammarError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerbConjugationResult {
    pub infinitive: String,
    pub aspect: Aspect,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub present: Option<PersonTable>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub past: Option<PastTense>,
    #[serde(default)]
    pub future: PersonTable,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imperative: Option<Imperative>,
    #[serde(default)]
    pub participles: Participles,
}

impl VerbConjugationResult {
    /// Apply a transform to every derived or passed-through form
    pub fn map_forms(self, f: impl Fn(&str) -> String) -> Self {
        let map_table = |table: PersonTable| -> PersonTable {
            table
                .into_iter()
                .map(|(person, form)| (person, f(&form)))
                .collect()
        };

        Self {
            infinitive: f(&self.infinitive),
            aspect: self.aspect,
            present: self.present.map(map_table),
            past: self.past.map(|past| PastTense {
                masc: f(&past.masc),
                fem: f(&past.fem),
                neut: f(&past.neut),
                plural: f(&past.plural),
            }),
            future: map_table(self.future),
            imperative: self.imperative.map(|imp| Imperative {
                singular: f(&imp.singular),
                plural: f(&imp.plural),
            }),
            participles: self
                .participles
                .into_iter()
                .map(|(kind, form)| (kind, f(&form)))
                .collect(),
        }
    }

    pub fn to_json(&self) -> Result<serde_json::Value, GrammarError> {
        Ok(serde_json::to_value(self)?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NounDeclensionResult {
    pub singular: CaseTable,
    pub plural: CaseTable,
}

impl NounDeclensionResult {
    pub fn map_forms(self, f: impl Fn(&str) -> String) -> Self {
        Self {
            singular: self.singular.map_forms(&f),
            plural: self.plural.map_forms(&f),
        }
    }

    pub fn to_json(&self) -> Result<serde_json::Value, GrammarError> {
        Ok(serde_json::to_value(self)?)
    }
}
