//! Plural-form selection rules.
//!
//! Translated plural entries are stored as indexed form lists
//! (`msgstr[0]`, `msgstr[1]`, ...), so each rule maps a count to a form
//! index. The boundary arithmetic matches the plural expressions that
//! message catalogs conventionally declare in their headers.

/// Count-to-index rule for one locale family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralRule {
    /// Two forms, singular for exactly one: `plural = (n != 1)`.
    ///
    /// English, German, Spanish, Italian, Dutch, the Scandinavian
    /// languages, and the default for unknown locales.
    Germanic,
    /// Two forms, singular for zero and one: `plural = (n > 1)`.
    Romance,
    /// One form for every count. Japanese, Chinese, Korean, Vietnamese.
    Single,
    /// Three forms with the East Slavic teens exception:
    /// `n%10==1 && n%100!=11 ? 0 : n%10>=2 && n%10<=4 && (n%100<10 || n%100>=20) ? 1 : 2`.
    Slavic,
    /// Three forms, like [`PluralRule::Slavic`] but with a dedicated
    /// singular only for exactly one.
    Polish,
    /// Three forms: one, two-to-four, other.
    CzechSlovak,
    /// Six forms: zero, one, two, few (3-10), many (11-99), other.
    Arabic,
}

impl PluralRule {
    /// Select the rule for a locale tag (`"ru"`, `"ru_RU"`, `"pt-BR"`).
    ///
    /// Only the language subtag is inspected. Unknown languages get
    /// [`PluralRule::Germanic`], which is also the behavior of an
    /// untranslated catalog.
    #[must_use]
    pub fn for_locale(tag: &str) -> Self {
        let language = tag
            .split(['_', '-'])
            .next()
            .unwrap_or(tag)
            .to_ascii_lowercase();
        match language.as_str() {
            "fr" | "oc" => Self::Romance,
            "ja" | "zh" | "ko" | "vi" | "th" | "id" => Self::Single,
            "ru" | "uk" | "be" | "sr" | "hr" | "bs" => Self::Slavic,
            "pl" => Self::Polish,
            "cs" | "sk" => Self::CzechSlovak,
            "ar" => Self::Arabic,
            _ => Self::Germanic,
        }
    }

    /// Number of distinct forms the rule can select.
    #[must_use]
    pub fn nplurals(self) -> usize {
        match self {
            Self::Single => 1,
            Self::Germanic | Self::Romance => 2,
            Self::Slavic | Self::Polish | Self::CzechSlovak => 3,
            Self::Arabic => 6,
        }
    }

    /// Form index for a count. Always below [`PluralRule::nplurals`].
    #[must_use]
    pub fn index(self, n: u64) -> usize {
        match self {
            Self::Germanic => usize::from(n != 1),
            Self::Romance => usize::from(n > 1),
            Self::Single => 0,
            Self::Slavic => {
                if n % 10 == 1 && n % 100 != 11 {
                    0
                } else if (2..=4).contains(&(n % 10)) && !(10..20).contains(&(n % 100)) {
                    1
                } else {
                    2
                }
            }
            Self::Polish => {
                if n == 1 {
                    0
                } else if (2..=4).contains(&(n % 10)) && !(10..20).contains(&(n % 100)) {
                    1
                } else {
                    2
                }
            }
            Self::CzechSlovak => {
                if n == 1 {
                    0
                } else if (2..=4).contains(&n) {
                    1
                } else {
                    2
                }
            }
            Self::Arabic => match n {
                0 => 0,
                1 => 1,
                2 => 2,
                _ if (3..=10).contains(&(n % 100)) => 3,
                _ if n % 100 >= 11 => 4,
                _ => 5,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_subtag_only() {
        assert_eq!(PluralRule::for_locale("ru_RU"), PluralRule::Slavic);
        assert_eq!(PluralRule::for_locale("pt-BR"), PluralRule::Germanic);
        assert_eq!(PluralRule::for_locale("FR"), PluralRule::Romance);
    }

    #[test]
    fn unknown_language_defaults_to_germanic() {
        assert_eq!(PluralRule::for_locale("tlh"), PluralRule::Germanic);
        assert_eq!(PluralRule::for_locale(""), PluralRule::Germanic);
    }

    #[test]
    fn germanic_boundary() {
        let rule = PluralRule::Germanic;
        assert_eq!(rule.index(0), 1);
        assert_eq!(rule.index(1), 0);
        assert_eq!(rule.index(2), 1);
    }

    #[test]
    fn romance_counts_zero_as_singular() {
        let rule = PluralRule::Romance;
        assert_eq!(rule.index(0), 0);
        assert_eq!(rule.index(1), 0);
        assert_eq!(rule.index(2), 1);
    }

    #[test]
    fn single_form_is_constant() {
        let rule = PluralRule::Single;
        for n in [0, 1, 2, 17, 100] {
            assert_eq!(rule.index(n), 0);
        }
    }

    #[test]
    fn slavic_teens_are_many() {
        let rule = PluralRule::Slavic;
        assert_eq!(rule.index(1), 0);
        assert_eq!(rule.index(21), 0);
        assert_eq!(rule.index(101), 0);
        assert_eq!(rule.index(3), 1);
        assert_eq!(rule.index(22), 1);
        assert_eq!(rule.index(5), 2);
        assert_eq!(rule.index(11), 2);
        assert_eq!(rule.index(12), 2);
        assert_eq!(rule.index(111), 2);
    }

    #[test]
    fn polish_singular_is_exactly_one() {
        let rule = PluralRule::Polish;
        assert_eq!(rule.index(1), 0);
        assert_eq!(rule.index(21), 2);
        assert_eq!(rule.index(22), 1);
        assert_eq!(rule.index(25), 2);
    }

    #[test]
    fn czech_two_to_four() {
        let rule = PluralRule::CzechSlovak;
        assert_eq!(rule.index(1), 0);
        assert_eq!(rule.index(2), 1);
        assert_eq!(rule.index(4), 1);
        assert_eq!(rule.index(5), 2);
        assert_eq!(rule.index(22), 2);
    }

    #[test]
    fn arabic_six_forms() {
        let rule = PluralRule::Arabic;
        assert_eq!(rule.index(0), 0);
        assert_eq!(rule.index(1), 1);
        assert_eq!(rule.index(2), 2);
        assert_eq!(rule.index(3), 3);
        assert_eq!(rule.index(10), 3);
        assert_eq!(rule.index(103), 3);
        assert_eq!(rule.index(11), 4);
        assert_eq!(rule.index(99), 4);
        assert_eq!(rule.index(100), 5);
        assert_eq!(rule.index(102), 5);
    }

    #[test]
    fn index_stays_below_nplurals() {
        let rules = [
            PluralRule::Germanic,
            PluralRule::Romance,
            PluralRule::Single,
            PluralRule::Slavic,
            PluralRule::Polish,
            PluralRule::CzechSlovak,
            PluralRule::Arabic,
        ];
        for rule in rules {
            for n in 0..1000 {
                assert!(rule.index(n) < rule.nplurals(), "{rule:?} n={n}");
            }
        }
    }
}
