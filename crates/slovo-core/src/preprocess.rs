use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default preprocessor for dictionary headwords
    fn process(&self, text: &str) -> String {
        let mut text = text.trim().to_string();

        if text.is_empty() {
            return text;
        }

        // Canonical composition keeps й/ё as single chars and the stress
        // mark as a separate U+0301 after its vowel
        text = text.nfc().collect();

        text = text.replace(['\n', '\r'], "").trim().to_string();

        text
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}
