use slovo_core::{Case, CaseTable, Gender};

use crate::stress::{is_vowel, last_letter, remove_stress, strip_letters};

const HUSHERS: [char; 4] = ['ж', 'ч', 'ш', 'щ'];
const VELARS: [char; 3] = ['г', 'к', 'х'];

/// Russian noun declension (plural only; the singular comes from the dataset)
pub struct NounDecliner;

impl NounDecliner {
    pub fn new() -> Self {
        Self
    }

    /// Derive the six plural cases from the nominative singular.
    ///
    /// Other singular forms are not consulted. An empty nominative gives an
    /// empty table; anything else gives all six cases.
    pub fn plural_declension(&self, nominative: &str, gender: Gender, animate: bool) -> CaseTable {
        let clean = remove_stress(nominative.trim());
        if clean.is_empty() {
            return CaseTable::new();
        }

        let stem = singular_stem(&clean, gender);
        let nominative_plural = nominative_plural(&clean, stem, gender);
        let genitive_plural = genitive_plural(&clean, stem, gender);

        // Oblique endings hang off the plural stem, not the singular one
        let plural_stem = strip_letters(&nominative_plural, 1);
        let soft = takes_soft_endings(&clean, &nominative_plural, plural_stem);
        let (dative, instrumental, prepositional) = if soft {
            ("ям", "ями", "ях")
        } else {
            ("ам", "ами", "ах")
        };

        let accusative_plural = if animate {
            genitive_plural.clone()
        } else {
            nominative_plural.clone()
        };

        let mut plural = CaseTable::new();
        plural.insert(Case::Nominative, nominative_plural.clone());
        plural.insert(Case::Genitive, genitive_plural);
        plural.insert(Case::Dative, format!("{plural_stem}{dative}"));
        plural.insert(Case::Accusative, accusative_plural);
        plural.insert(Case::Instrumental, format!("{plural_stem}{instrumental}"));
        plural.insert(Case::Prepositional, format!("{plural_stem}{prepositional}"));
        plural
    }
}

fn ends_with_any(word: &str, chars: &[char]) -> bool {
    last_letter(word).is_some_and(|c| chars.contains(&c))
}

/// Strip the gender-typical singular ending. Never strips down to nothing.
fn singular_stem(word: &str, gender: Gender) -> &str {
    let stem = match gender {
        Gender::Masculine if ends_with_any(word, &['й', 'ь']) => strip_letters(word, 1),
        Gender::Feminine if ends_with_any(word, &['а', 'я', 'ь']) => strip_letters(word, 1),
        Gender::Neuter if word.ends_with("мя") => strip_letters(word, 2),
        Gender::Neuter if ends_with_any(word, &['о', 'е']) => strip_letters(word, 1),
        _ => word,
    };

    if stem.is_empty() { word } else { stem }
}

fn nominative_plural(word: &str, stem: &str, gender: Gender) -> String {
    match gender {
        Gender::Masculine => {
            if ends_with_any(word, &['ь', 'й']) {
                // конь → кони, музей → музеи
                format!("{stem}и")
            } else if ends_with_any(word, &HUSHERS) || ends_with_any(word, &VELARS) {
                // врач → врачи, друг → други
                format!("{stem}и")
            } else {
                format!("{word}ы")
            }
        }
        Gender::Feminine => {
            if word.ends_with('а') {
                if ends_with_any(stem, &HUSHERS) || ends_with_any(stem, &VELARS) || stem.ends_with('ц') {
                    format!("{stem}и")
                } else {
                    format!("{stem}ы")
                }
            } else if ends_with_any(word, &['я', 'ь']) {
                format!("{stem}и")
            } else {
                format!("{word}ы")
            }
        }
        Gender::Neuter => {
            if word.ends_with("мя") {
                // время → времена
                format!("{stem}мена")
            } else if word.ends_with('о') {
                format!("{stem}а")
            } else if word.ends_with('е') {
                format!("{stem}я")
            } else {
                format!("{word}а")
            }
        }
    }
}

fn genitive_plural(word: &str, stem: &str, gender: Gender) -> String {
    match gender {
        Gender::Masculine => {
            if word.ends_with('й') {
                format!("{stem}ев")
            } else if word.ends_with('ь') {
                format!("{stem}ей")
            } else if ends_with_any(word, &HUSHERS) {
                format!("{word}ей")
            } else if word.ends_with('ц') {
                format!("{word}ев")
            } else {
                format!("{word}ов")
            }
        }
        Gender::Feminine => {
            if word.ends_with('а') {
                // Zero ending: книга → книг, ручка → ручек
                insert_fleeting_vowel(stem, &['к', 'г']).unwrap_or_else(|| stem.to_string())
            } else if word.ends_with('я') {
                if stem.ends_with('и') {
                    format!("{stem}й")
                } else {
                    format!("{stem}ь")
                }
            } else if word.ends_with('ь') {
                format!("{stem}ей")
            } else {
                stem.to_string()
            }
        }
        Gender::Neuter => {
            if word.ends_with("мя") {
                format!("{stem}мён")
            } else if word.ends_with('о') {
                // слово → слов, окно → окон
                insert_fleeting_vowel(stem, &['н', 'л', 'м', 'р']).unwrap_or_else(|| stem.to_string())
            } else if word.ends_with('е') {
                if stem.ends_with('и') {
                    format!("{stem}й")
                } else {
                    format!("{stem}ей")
                }
            } else {
                stem.to_string()
            }
        }
    }
}

/// Break a final consonant cluster with о/е when the stem ends in a
/// consonant followed by one of `finals`. ь/й before the final consonant
/// turn into е (письм → писем, копейк → копеек); a husher takes е; a velar
/// takes о; any other consonant takes о before к/г and е otherwise.
fn insert_fleeting_vowel(stem: &str, finals: &[char]) -> Option<String> {
    let chars: Vec<char> = stem.chars().collect();
    let [head @ .., before, last] = chars.as_slice() else {
        return None;
    };

    if !finals.contains(last) || is_vowel(*before) {
        return None;
    }

    let head: String = head.iter().collect();
    let inserted = match *before {
        'ь' | 'й' => format!("{head}е{last}"),
        c if HUSHERS.contains(&c) => format!("{head}{c}е{last}"),
        c if VELARS.contains(&c) => format!("{head}{c}о{last}"),
        c if VELARS.contains(last) => format!("{head}{c}о{last}"),
        c => format!("{head}{c}е{last}"),
    };

    Some(inserted)
}

/// -ям/-ями/-ях after a soft plural stem, -ам/-ами/-ах otherwise
fn takes_soft_endings(singular: &str, nominative_plural: &str, plural_stem: &str) -> bool {
    if nominative_plural.ends_with('я') {
        return true;
    }

    nominative_plural.ends_with('и')
        && ends_with_any(singular, &['ь', 'й', 'я'])
        && !ends_with_any(plural_stem, &HUSHERS)
}
