//! Lexical stress marking.
//!
//! Stress is written as a combining acute accent (U+0301) directly after
//! the stressed vowel: до́ма. Nothing outside this module looks at the mark
//! itself. ё always carries the stress and never gets a mark.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

const STRESS_MARK: char = '\u{0301}';

const VOWELS: &str = "аеёиоуыэюяАЕЁИОУЫЭЮЯ";

pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(c)
}

fn is_inherently_stressed(c: char) -> bool {
    c == 'ё' || c == 'Ё'
}

/// Number of vowels in the word
pub fn vowel_count(word: &str) -> usize {
    word.nfc().filter(|c| is_vowel(*c)).count()
}

/// Mark stress on the vowel at the given 1-indexed position.
///
/// Position 0, or a position past the last vowel, returns the word as is.
/// Any existing mark is cleared first, so the result carries at most one.
pub fn mark_stress(word: &str, position: usize) -> String {
    if position < 1 {
        return word.to_string();
    }

    let clean = remove_stress(word);
    if vowel_count(&clean) < position {
        return word.to_string();
    }

    let mut result = String::with_capacity(clean.len() + STRESS_MARK.len_utf8());
    let mut vowels = 0;

    for c in clean.chars() {
        result.push(c);
        if is_vowel(c) {
            vowels += 1;
            if vowels == position && !is_inherently_stressed(c) {
                result.push(STRESS_MARK);
            }
        }
    }

    result
}

/// Strip stress marks from vowels. Everything else passes through,
/// precomposed letters like ќ or é included.
pub fn remove_stress(word: &str) -> String {
    let mut after_vowel = false;
    let stripped: String = word
        .nfc()
        .filter(|&c| {
            if is_vowel(c) {
                after_vowel = true;
            } else if c == STRESS_MARK && after_vowel {
                return false;
            } else if !is_combining_mark(c) {
                after_vowel = false;
            }
            true
        })
        .collect();
    stripped.nfc().collect()
}

pub fn has_stress(word: &str) -> bool {
    get_stress_position(word).is_some()
}

/// 1-indexed position of the marked vowel, None if the word is unmarked
pub fn get_stress_position(word: &str) -> Option<usize> {
    let mut vowels = 0;
    let mut after_vowel = false;

    for c in word.nfc() {
        if is_vowel(c) {
            vowels += 1;
            after_vowel = true;
        } else if c == STRESS_MARK && after_vowel {
            return Some(vowels);
        } else if !is_combining_mark(c) {
            after_vowel = false;
        }
    }

    None
}

/// True when the mark sits on the last vowel, or the last vowel is ё
pub fn is_final_vowel_stressed(word: &str) -> bool {
    let count = vowel_count(word);
    if count == 0 {
        return false;
    }
    if get_stress_position(word) == Some(count) {
        return true;
    }
    remove_stress(word)
        .chars()
        .rev()
        .find(|c| is_vowel(*c))
        .is_some_and(is_inherently_stressed)
}

/// Last letter of the word, ignoring stress and other combining marks
pub fn last_letter(word: &str) -> Option<char> {
    word.chars().rev().find(|c| !is_combining_mark(*c))
}

pub fn ends_in_vowel(word: &str) -> bool {
    last_letter(word).is_some_and(is_vowel)
}

/// Drop the last `count` letters. Combining marks go with the letter they
/// follow, so a mark on a dropped ending disappears and one inside the
/// remaining stem is kept. Returns "" if the word is too short.
pub fn strip_letters(word: &str, count: usize) -> &str {
    if count == 0 {
        return word;
    }

    let mut letters = 0;
    for (idx, c) in word.char_indices().rev() {
        if is_combining_mark(c) {
            continue;
        }
        letters += 1;
        if letters == count {
            return &word[..idx];
        }
    }

    ""
}
