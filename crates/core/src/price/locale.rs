//! Locale profiles for grouped numerals.
//!
//! A locale decides three things for full format: where digit-group
//! separators go, which characters separate groups and decimals, and which
//! script the digits are written in. Resolution walks an ordered list of
//! candidates and always ends in [`GENERIC_LOCALE`].

use tracing::debug;

/// First fallback when the requested locale is unknown.
pub const PRIMARY_LOCALE: &str = "ne-NP";

/// Second fallback, same grouping as the primary locale.
pub const SECONDARY_LOCALE: &str = "en-IN";

/// Digit grouping convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    /// Last three digits, then pairs: `12,34,567`.
    Regional,
    /// Groups of three: `1,234,567`.
    Uniform,
}

/// Script used for digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitScript {
    /// `0123456789`
    Latin,
    /// `०१२३४५६७८९`
    Devanagari,
}

/// Numeral conventions of a single locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleProfile {
    /// BCP 47 tag.
    pub tag: &'static str,
    /// Digit grouping convention.
    pub grouping: Grouping,
    /// Digit script.
    pub digits: DigitScript,
    /// Separator between digit groups.
    pub group_separator: char,
    /// Separator between integer and fraction.
    pub decimal_separator: char,
}

/// Formatter that is always available.
pub static GENERIC_LOCALE: LocaleProfile =
    LocaleProfile::new("und", Grouping::Uniform, DigitScript::Latin, ',', '.');

static LOCALES: [LocaleProfile; 8] = [
    LocaleProfile::new("ne-NP", Grouping::Regional, DigitScript::Latin, ',', '.'),
    LocaleProfile::new(
        "ne-NP-u-nu-deva",
        Grouping::Regional,
        DigitScript::Devanagari,
        ',',
        '.',
    ),
    LocaleProfile::new("hi-IN", Grouping::Regional, DigitScript::Latin, ',', '.'),
    LocaleProfile::new(
        "hi-IN-u-nu-deva",
        Grouping::Regional,
        DigitScript::Devanagari,
        ',',
        '.',
    ),
    LocaleProfile::new("en-IN", Grouping::Regional, DigitScript::Latin, ',', '.'),
    LocaleProfile::new("en-US", Grouping::Uniform, DigitScript::Latin, ',', '.'),
    LocaleProfile::new("en-GB", Grouping::Uniform, DigitScript::Latin, ',', '.'),
    LocaleProfile::new("de-DE", Grouping::Uniform, DigitScript::Latin, '.', ','),
];

const DEVANAGARI_DIGITS: [char; 10] = ['०', '१', '२', '३', '४', '५', '६', '७', '८', '९'];

impl LocaleProfile {
    const fn new(
        tag: &'static str,
        grouping: Grouping,
        digits: DigitScript,
        group_separator: char,
        decimal_separator: char,
    ) -> Self {
        Self {
            tag,
            grouping,
            digits,
            group_separator,
            decimal_separator,
        }
    }

    /// Renders a plain fixed-point string (`"1234567.89"`) in this locale.
    #[must_use]
    pub fn render(&self, fixed: &str, grouping_enabled: bool) -> String {
        let (integer, fraction) = fixed
            .split_once('.')
            .map_or((fixed, None), |(integer, fraction)| (integer, Some(fraction)));

        let mut out = if grouping_enabled {
            group_digits(integer, self.grouping, self.group_separator)
        } else {
            integer.to_owned()
        };
        if let Some(fraction) = fraction {
            out.push(self.decimal_separator);
            out.push_str(fraction);
        }

        match self.digits {
            DigitScript::Latin => out,
            DigitScript::Devanagari => to_devanagari(&out),
        }
    }
}

/// Looks up a locale by tag, ignoring case and accepting `_` for `-`.
#[must_use]
pub fn lookup(tag: &str) -> Option<&'static LocaleProfile> {
    let normalized = tag.trim().replace('_', "-");
    LOCALES
        .iter()
        .find(|profile| profile.tag.eq_ignore_ascii_case(&normalized))
}

/// Resolves the formatter for `requested`, falling back through the
/// primary and secondary locales to the generic formatter.
#[must_use]
pub fn resolve(requested: &str) -> &'static LocaleProfile {
    for candidate in [requested, PRIMARY_LOCALE, SECONDARY_LOCALE] {
        match lookup(candidate) {
            Some(profile) => return profile,
            None => debug!(
                locale = candidate,
                "locale formatter unavailable, trying next candidate"
            ),
        }
    }
    &GENERIC_LOCALE
}

/// Inserts `separator` between digit groups of an ASCII digit string.
#[must_use]
pub fn group_digits(digits: &str, grouping: Grouping, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 2);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && starts_group(len - i, grouping) {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

// `remaining` counts this digit and everything after it.
fn starts_group(remaining: usize, grouping: Grouping) -> bool {
    match grouping {
        Grouping::Uniform => remaining % 3 == 0,
        Grouping::Regional => remaining == 3 || (remaining > 3 && (remaining - 3) % 2 == 0),
    }
}

fn to_devanagari(text: &str) -> String {
    text.chars()
        .map(|ch| {
            ch.to_digit(10)
                .map_or(ch, |digit| DEVANAGARI_DIGITS[digit as usize])
        })
        .collect()
}
