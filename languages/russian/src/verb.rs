use slovo_core::{Aspect, Imperative, ParticipleKind, Participles, PastTense, Person, PersonTable};

use crate::stress::{self, ends_in_vowel, mark_stress, remove_stress, strip_letters};

/// Compound future auxiliary (быть), stressed on the first vowel
const FUTURE_AUXILIARY: [(Person, &str); 6] = [
    (Person::FirstSingular, "буду"),
    (Person::SecondSingular, "будешь"),
    (Person::ThirdSingular, "будет"),
    (Person::FirstPlural, "будем"),
    (Person::SecondPlural, "будете"),
    (Person::ThirdPlural, "будут"),
];

/// -чь roots whose past stem ends in к (печь → пёк); every other -чь verb takes г
const VELAR_K_ROOTS: [&str; 5] = ["печь", "сечь", "течь", "влечь", "толочь"];

/// Russian verb conjugation
///
/// Derives past, future, imperative and participles from the infinitive
/// plus whatever present-tense forms the dataset supplies. Irregular stems
/// are not derived; callers pass them in.
pub struct VerbConjugator;

impl VerbConjugator {
    pub fn new() -> Self {
        Self
    }

    /// Past tense by gender/number.
    ///
    /// `stem` overrides the rule stem for irregular verbs (шё for идти). For
    /// reflexive verbs it is the stem without -ся. Returns None when there
    /// is no stem to build on.
    pub fn past_tense(&self, infinitive: &str, stem: Option<&str>) -> Option<PastTense> {
        let (base, reflexive) = split_reflexive(infinitive);

        let stem = match stem {
            Some(stem) => stem.to_string(),
            None => self.past_stem(base)?,
        };
        if stem.is_empty() {
            return None;
        }

        // Consonant stems drop the masculine -л: мог, нёс
        let masc_ending = if ends_in_vowel(&stem) { "л" } else { "" };

        let forms = PastTense {
            masc: format!("{stem}{masc_ending}"),
            fem: format!("{stem}ла"),
            neut: format!("{stem}ло"),
            plural: format!("{stem}ли"),
        };

        if !reflexive {
            return Some(forms);
        }

        Some(PastTense {
            masc: attach_reflexive(&forms.masc),
            fem: attach_reflexive(&forms.fem),
            neut: attach_reflexive(&forms.neut),
            plural: attach_reflexive(&forms.plural),
        })
    }

    /// Rule past stem of a non-reflexive infinitive
    fn past_stem(&self, infinitive: &str) -> Option<String> {
        let clean = remove_stress(infinitive);
        if clean.is_empty() {
            return None;
        }

        // -ть (делать → дела), -ти (нести → нес)
        if clean.ends_with("ть") || clean.ends_with("ти") {
            return Some(strip_letters(infinitive, 2).to_string());
        }

        // -чь restores the velar: мочь → мог, печь → пек
        if clean.ends_with("чь") {
            let velar = if VELAR_K_ROOTS.iter().any(|root| clean.ends_with(root)) {
                'к'
            } else {
                'г'
            };
            return Some(format!("{}{}", strip_letters(infinitive, 2), velar));
        }

        tracing::debug!("No infinitive ending on {}, using it as the past stem", infinitive);
        Some(infinitive.to_string())
    }

    /// Future tense by person.
    ///
    /// Imperfective: буду + infinitive. Perfective: the supplied present
    /// table as is (simple future), empty if none was supplied.
    pub fn future_tense(
        &self,
        infinitive: &str,
        aspect: Aspect,
        present: Option<&PersonTable>,
    ) -> PersonTable {
        match aspect {
            Aspect::Imperfective => {
                if infinitive.is_empty() {
                    return PersonTable::new();
                }
                FUTURE_AUXILIARY
                    .iter()
                    .map(|(person, aux)| (*person, format!("{} {}", mark_stress(aux, 1), infinitive)))
                    .collect()
            }
            Aspect::Perfective => match present {
                Some(table) => table.clone(),
                None => {
                    tracing::debug!("No simple future forms for perfective {}", infinitive);
                    PersonTable::new()
                }
            },
        }
    }

    /// Imperative from the ты and они forms.
    ///
    /// First match wins:
    /// 1. vowel stem, 1st conjugation: -й / -йте (читай)
    /// 2. 2nd conjugation or stressed ending: -и́ / -и́те (говори)
    /// 3. otherwise: -ь / -ьте (режь)
    pub fn imperative(&self, present_2sg: &str, present_3pl: &str) -> Option<Imperative> {
        if present_2sg.trim().is_empty() || present_3pl.trim().is_empty() {
            return None;
        }

        let (form_2sg, reflexive) = split_reflexive(present_2sg.trim());
        let (form_3pl, _) = split_reflexive(present_3pl.trim());
        let clean_2sg = remove_stress(form_2sg);
        let clean_3pl = remove_stress(form_3pl);

        let second_conjugation = clean_2sg.ends_with("ишь")
            || clean_3pl.ends_with("ят")
            || clean_3pl.ends_with("ат");

        let stem = if second_conjugation && clean_2sg.ends_with("ишь") {
            strip_letters(form_2sg, 3)
        } else if ["ут", "ют", "ат", "ят"]
            .iter()
            .any(|ending| clean_3pl.ends_with(ending))
        {
            strip_letters(form_3pl, 2)
        } else {
            form_3pl
        };

        if stem.is_empty() {
            return None;
        }

        let (singular, plural) = if ends_in_vowel(stem) && !second_conjugation {
            (format!("{stem}й"), format!("{stem}йте"))
        } else if second_conjugation || stress::is_final_vowel_stressed(form_2sg) {
            // Keep a stem mark from the dataset rather than adding a second one
            if stress::has_stress(stem) {
                (format!("{stem}и"), format!("{stem}ите"))
            } else {
                (
                    format!("{stem}{}", mark_stress("и", 1)),
                    format!("{stem}{}", mark_stress("ите", 1)),
                )
            }
        } else {
            (format!("{stem}ь"), format!("{stem}ьте"))
        };

        if reflexive {
            return Some(Imperative {
                singular: attach_reflexive(&singular),
                plural: attach_reflexive(&plural),
            });
        }

        Some(Imperative { singular, plural })
    }

    /// Participles that apply to this verb; the rest are left out
    pub fn participles(
        &self,
        infinitive: &str,
        aspect: Aspect,
        present: Option<&PersonTable>,
        past_stem: Option<&str>,
    ) -> Participles {
        let mut participles = Participles::new();

        let (base, reflexive) = split_reflexive(infinitive);
        let clean_inf = remove_stress(base);
        let stem = match past_stem {
            Some(stem) => Some(stem.to_string()),
            None => self.past_stem(base),
        };
        let clean_stem = stem.map(|s| remove_stress(&s)).unwrap_or_default();

        let finish = |form: String| {
            if reflexive {
                format!("{form}ся")
            } else {
                form
            }
        };

        // читать → читавший, мочь → могший
        if !clean_stem.is_empty() {
            let suffix = if ends_in_vowel(&clean_stem) { "вший" } else { "ший" };
            participles.insert(
                ParticipleKind::PastActive,
                finish(format!("{clean_stem}{suffix}")),
            );
        }

        if aspect == Aspect::Imperfective {
            if let Some(table) = present {
                // читают → читающий, говорят → говорящий
                if let Some(form_3pl) = table.get(&Person::ThirdPlural) {
                    let (form_3pl, _) = split_reflexive(form_3pl);
                    let clean_3pl = remove_stress(form_3pl);
                    let suffix = [("ут", "ущий"), ("ют", "ющий"), ("ат", "ащий"), ("ят", "ящий")]
                        .into_iter()
                        .find(|(ending, _)| clean_3pl.ends_with(ending));
                    if let Some((_, suffix)) = suffix {
                        let stem = strip_letters(&clean_3pl, 2);
                        participles.insert(
                            ParticipleKind::PresentActive,
                            finish(format!("{stem}{suffix}")),
                        );
                    }
                }

                // читаем → читаемый; reflexive verbs have no passive
                if let Some(form_1pl) = table.get(&Person::FirstPlural) {
                    let clean_1pl = remove_stress(form_1pl);
                    let transitive_shape = ["ем", "ём", "им"]
                        .iter()
                        .any(|ending| clean_1pl.ends_with(ending));
                    if transitive_shape && !reflexive {
                        participles.insert(ParticipleKind::PresentPassive, format!("{clean_1pl}ый"));
                    }
                }
            }
        }

        if aspect == Aspect::Perfective && !reflexive && !clean_stem.is_empty() {
            // прочитать → прочитанный, построить → построенный, увидеть → увиденный
            let past_passive = if clean_inf.ends_with("ать") || clean_inf.ends_with("еть") {
                Some(format!("{clean_stem}нный"))
            } else if clean_inf.ends_with("ить") {
                let stem = clean_stem.strip_suffix('и').unwrap_or(&clean_stem);
                Some(format!("{stem}енный"))
            } else {
                None
            };
            if let Some(form) = past_passive {
                participles.insert(ParticipleKind::PastPassive, form);
            }
        }

        participles
    }
}

/// Split a trailing -ся/-сь off a verb form
fn split_reflexive(word: &str) -> (&str, bool) {
    let clean = remove_stress(word);
    if clean.chars().count() > 2 && (clean.ends_with("ся") || clean.ends_with("сь")) {
        (strip_letters(word, 2), true)
    } else {
        (word, false)
    }
}

/// -ся after a consonant, -сь after a vowel: учился, училась, учись
fn attach_reflexive(form: &str) -> String {
    if ends_in_vowel(form) {
        format!("{form}сь")
    } else {
        format!("{form}ся")
    }
}
