//! Name translation strategy chain
//!
//! 전략 체인: exact → structural → token → identity.
//! 각 전략은 `&str -> Option<String>` 순수 함수이고 우선순위 순서로
//! 평가되어 처음 결과를 낸 전략이 이긴다.

use super::TranslationTable;

/// Which strategy produced a translation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Full-name dictionary hit
    Exact,
    /// Surname or prefix rule on the first token
    Structural,
    /// Single in-place component substitution
    Token,
    /// No rule matched, name passed through verbatim
    Identity,
}

impl Strategy {
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Exact => "exact",
            Strategy::Structural => "structural",
            Strategy::Token => "token",
            Strategy::Identity => "identity",
        }
    }
}

/// Translation result with the strategy that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub text: String,
    pub strategy: Strategy,
}

impl Translation {
    /// False only for the identity fallback
    pub fn is_translated(&self) -> bool {
        self.strategy != Strategy::Identity
    }
}

/// Strategy chain over one league's tables
///
/// Stateless and side-effect free; callers decide what to do about
/// identity fallbacks (warn, count, ...).
pub struct Translator<'a> {
    table: &'a TranslationTable,
}

impl<'a> Translator<'a> {
    pub fn new(table: &'a TranslationTable) -> Self {
        Self { table }
    }

    /// Run the chain top to bottom, first hit wins
    pub fn translate(&self, name: &str) -> Translation {
        if let Some(text) = self.try_exact(name) {
            return Translation {
                text,
                strategy: Strategy::Exact,
            };
        }
        if let Some(text) = self.try_structural(name) {
            return Translation {
                text,
                strategy: Strategy::Structural,
            };
        }
        if let Some(text) = self.try_token(name) {
            return Translation {
                text,
                strategy: Strategy::Token,
            };
        }
        Translation {
            text: name.to_string(),
            strategy: Strategy::Identity,
        }
    }

    fn try_exact(&self, name: &str) -> Option<String> {
        self.table.exact.get(name).cloned()
    }

    /// Prefix rule first, then the first-token surname rule
    fn try_structural(&self, name: &str) -> Option<String> {
        if let Some(out) = self.try_prefix(name) {
            return Some(out);
        }
        self.try_surname(name)
    }

    /// "Al-Bulayhi" -> "알 불라이히"
    ///
    /// The remainder after the prefix gets one token substitution if
    /// any component is known, otherwise it passes through as-is.
    fn try_prefix(&self, name: &str) -> Option<String> {
        let (key, korean) = self.table.best_prefix(name)?;
        let rest = name[key.len()..].trim_start();
        if rest.is_empty() {
            return None;
        }
        let rest = self.try_token(rest).unwrap_or_else(|| rest.to_string());
        Some(format!("{} {}", korean, rest))
    }

    /// First token is a known surname: localize it and walk the rest.
    /// Known given names get their dictionary form, single-letter
    /// initials keep the "X." shape, anything else passes unchanged.
    fn try_surname(&self, name: &str) -> Option<String> {
        let mut parts = name.split_whitespace();
        let first = parts.next()?;
        let surname = self.table.surnames.get(first)?;

        let mut out = surname.clone();
        for part in parts {
            out.push(' ');
            if let Some(given) = self.table.given_names.get(part) {
                out.push_str(given);
            } else if let Some(letter) = initial_letter(part) {
                out.push(letter);
                out.push('.');
            } else {
                out.push_str(part);
            }
        }
        Some(out)
    }

    /// Replace the earliest known component, leave everything else
    /// untouched, stop after one replacement
    fn try_token(&self, name: &str) -> Option<String> {
        let (start, key, korean) = self.table.first_token_match(name)?;
        let mut out = String::with_capacity(name.len() + korean.len());
        out.push_str(&name[..start]);
        out.push_str(korean);
        out.push_str(&name[start + key.len()..]);
        Some(out)
    }
}

/// "K." -> Some('K'); anything longer or without the dot -> None
fn initial_letter(token: &str) -> Option<char> {
    let mut chars = token.chars();
    let first = chars.next()?;
    if chars.next() == Some('.') && chars.next().is_none() && first != '.' {
        Some(first)
    } else {
        None
    }
}
