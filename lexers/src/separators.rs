/// Decimal and digit-group separators used while scanning numbers.
///
/// Entry fields follow the user's locale, so `1.234,5` is a valid number in
/// German and `1,234.5` in English. The pair is passed explicitly to the
/// tokenizer instead of being read from process-wide state.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Separators {
    pub decimal: char,
    pub group: char,
}

impl Default for Separators {
    fn default() -> Self {
        Separators { decimal: '.', group: ',' }
    }
}

impl Separators {
    pub fn new(decimal: char, group: char) -> Self {
        Separators { decimal, group }
    }

    /// Separators for a locale tag such as `de-DE`, `fr_FR.UTF-8` or `en`.
    /// Unknown languages get the default pair.
    pub fn from_locale_tag(tag: &str) -> Self {
        let tag = tag.split(['.', '@']).next().unwrap_or_default();
        let mut parts = tag.split(['-', '_']);
        let lang = parts.next().unwrap_or_default().to_ascii_lowercase();
        let region = parts.next().unwrap_or_default().to_ascii_uppercase();

        match (lang.as_str(), region.as_str()) {
            ("de" | "it" | "rm", "CH") | ("de", "LI") => Separators::new('.', '\''),
            ("de" | "es" | "it" | "nl" | "pt" | "id" | "tr" | "da" | "el" | "ro"
                | "hr" | "sl" | "sr", _) => Separators::new(',', '.'),
            ("fr" | "ru" | "pl" | "cs" | "sk" | "sv" | "fi" | "nb" | "nn" | "no"
                | "uk" | "hu" | "bg" | "lt" | "lv" | "et", _) => Separators::new(',', '\u{a0}'),
            _ => Separators::default(),
        }
    }

    pub fn is_separator(&self, c: char) -> bool {
        c == self.decimal || c == self.group
    }

    pub fn has_whitespace(&self) -> bool {
        self.decimal.is_whitespace() || self.group.is_whitespace()
    }

    /// Rewrite a buffered number into a form `f64::from_str` accepts.
    ///
    /// Walking from the end, group separators are dropped, the first `,`/`.`
    /// (or locale decimal) becomes `.` and any earlier one is dropped. Only
    /// digits and `-` survive otherwise.
    pub fn normalize(&self, lexeme: &str) -> String {
        let mut seen_decimal = false;
        let mut normalized = lexeme
            .chars()
            .rev()
            .filter_map(|c| {
                if c == self.group {
                    None
                } else if c == ',' || c == '.' || c == self.decimal {
                    if seen_decimal {
                        None
                    } else {
                        seen_decimal = true;
                        Some('.')
                    }
                } else if c.is_ascii_digit() || c == '-' {
                    Some(c)
                } else {
                    None
                }
            })
            .collect::<Vec<char>>();
        normalized.reverse();
        normalized.into_iter().collect()
    }
}
