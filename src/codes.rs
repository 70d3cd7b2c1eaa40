//! Resolution tables for the label template language.
//!
//! Every code following an escape marker (`\`) or a substitution marker (`$`)
//! maps to a rule describing how the renderer copies or resolves it. Codes
//! without a rule fall back to literal pass-through in the renderer.

use strum_macros::Display;

use crate::constants::render::{PRIMARY_LABEL, SECONDARY_LABEL};
use crate::metrics::MetricsSnapshot;

/// Digits accepted after a selector code (one per data series)
pub const SELECTOR_DIGITS: [char; 2] = ['0', '1'];

/// How an escape code is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeRule {
    /// Marker and code, followed by one selector digit when present
    Selector,
    /// Marker and code only
    PassThrough,
    /// Marker, code and the next character whatever it is
    Attribute,
    /// Marker, code and every following decimal digit
    Width,
    /// Replaced by a single character
    Literal(char),
}

/// Looks up the rule of an escape code.
///
/// # Examples
///
/// ```
/// use gpulabel::codes::{escape_rule, EscapeRule};
///
/// assert_eq!(escape_rule('w'), Some(EscapeRule::Width));
/// assert_eq!(escape_rule('.'), Some(EscapeRule::Literal('.')));
/// assert_eq!(escape_rule('z'), None);
/// ```
pub fn escape_rule(code: char) -> Option<EscapeRule> {
    match code {
        'D' | 'd' => Some(EscapeRule::Selector),
        'f' | 's' => Some(EscapeRule::PassThrough),
        'a' => Some(EscapeRule::Attribute),
        'w' => Some(EscapeRule::Width),
        '.' => Some(EscapeRule::Literal('.')),
        'n' => Some(EscapeRule::Literal('\n')),
        'r' => Some(EscapeRule::Literal('\r')),
        _ => None,
    }
}

/// Value a substitution code expands to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variable {
    Primary,
    Secondary,
    PrimaryLabelled,
    SecondaryLabelled,
}

impl Variable {
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'g' => Some(Variable::Primary),
            'v' => Some(Variable::Secondary),
            'G' => Some(Variable::PrimaryLabelled),
            'V' => Some(Variable::SecondaryLabelled),
            _ => None,
        }
    }

    /// Expands the variable using the given metrics.
    ///
    /// # Examples
    ///
    /// ```
    /// use gpulabel::codes::Variable;
    /// use gpulabel::metrics::MetricsSnapshot;
    ///
    /// let metrics = MetricsSnapshot::new(42, 7);
    /// assert_eq!(Variable::Primary.resolve(&metrics), "42");
    /// assert_eq!(Variable::SecondaryLabelled.resolve(&metrics), "VRAM 7%");
    /// ```
    pub fn resolve(self, metrics: &MetricsSnapshot) -> String {
        match self {
            Variable::Primary => metrics.primary_percent.to_string(),
            Variable::Secondary => metrics.secondary_percent.to_string(),
            Variable::PrimaryLabelled => format!("{} {}%", PRIMARY_LABEL, metrics.primary_percent),
            Variable::SecondaryLabelled => {
                format!("{} {}%", SECONDARY_LABEL, metrics.secondary_percent)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum CodeKind {
    #[strum(serialize = "variable")]
    Variable,
    #[strum(serialize = "escape")]
    Escape,
}

/// A documented code of the template language
#[derive(Debug, Clone, Copy)]
pub struct CodeInfo {
    pub kind: CodeKind,
    pub syntax: &'static str,
    pub description: &'static str,
}

const REFERENCE: &[CodeInfo] = &[
    CodeInfo {
        kind: CodeKind::Variable,
        syntax: "$g",
        description: "GPU usage percentage",
    },
    CodeInfo {
        kind: CodeKind::Variable,
        syntax: "$v",
        description: "VRAM usage percentage",
    },
    CodeInfo {
        kind: CodeKind::Variable,
        syntax: "$G",
        description: "GPU usage with label",
    },
    CodeInfo {
        kind: CodeKind::Variable,
        syntax: "$V",
        description: "VRAM usage with label",
    },
    CodeInfo {
        kind: CodeKind::Escape,
        syntax: "\\D0",
        description: "Use GPU color",
    },
    CodeInfo {
        kind: CodeKind::Escape,
        syntax: "\\D1",
        description: "Use VRAM color",
    },
    CodeInfo {
        kind: CodeKind::Escape,
        syntax: "\\d0",
        description: "Data selector, alternate form",
    },
    CodeInfo {
        kind: CodeKind::Escape,
        syntax: "\\f",
        description: "Format prefix",
    },
    CodeInfo {
        kind: CodeKind::Escape,
        syntax: "\\a",
        description: "Attribute prefix, takes the next character",
    },
    CodeInfo {
        kind: CodeKind::Escape,
        syntax: "\\s",
        description: "Small font",
    },
    CodeInfo {
        kind: CodeKind::Escape,
        syntax: "\\w",
        description: "Width specifier, takes the following digits",
    },
    CodeInfo {
        kind: CodeKind::Escape,
        syntax: "\\.",
        description: "Literal dot",
    },
    CodeInfo {
        kind: CodeKind::Escape,
        syntax: "\\n",
        description: "New line",
    },
    CodeInfo {
        kind: CodeKind::Escape,
        syntax: "\\r",
        description: "Carriage return",
    },
];

/// Returns the documented codes in display order
pub fn reference() -> &'static [CodeInfo] {
    REFERENCE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_codes() {
        assert_eq!(escape_rule('D'), Some(EscapeRule::Selector));
        assert_eq!(escape_rule('d'), Some(EscapeRule::Selector));
    }

    #[test]
    fn test_locally_resolved_codes() {
        assert_eq!(escape_rule('n'), Some(EscapeRule::Literal('\n')));
        assert_eq!(escape_rule('r'), Some(EscapeRule::Literal('\r')));
    }

    #[test]
    fn test_unknown_codes() {
        assert_eq!(escape_rule('t'), None);
        assert_eq!(escape_rule('\\'), None);
        assert_eq!(Variable::from_code('q'), None);
        assert_eq!(Variable::from_code('$'), None);
    }

    #[test]
    fn test_variables_at_boundaries() {
        let low = MetricsSnapshot::new(0, 0);
        let high = MetricsSnapshot::new(100, 100);
        assert_eq!(Variable::Primary.resolve(&low), "0");
        assert_eq!(Variable::Secondary.resolve(&high), "100");
        assert_eq!(Variable::PrimaryLabelled.resolve(&high), "GPU 100%");
        assert_eq!(Variable::SecondaryLabelled.resolve(&low), "VRAM 0%");
    }

    #[test]
    fn test_reference_entries_are_recognized() {
        for info in reference() {
            let mut chars = info.syntax.chars();
            let marker = chars.next().unwrap();
            let code = chars.next().unwrap();
            match info.kind {
                CodeKind::Variable => {
                    assert_eq!(marker, '$');
                    assert!(Variable::from_code(code).is_some(), "{}", info.syntax);
                }
                CodeKind::Escape => {
                    assert_eq!(marker, '\\');
                    assert!(escape_rule(code).is_some(), "{}", info.syntax);
                }
            }
        }
    }

    #[test]
    fn test_code_kind_display() {
        assert_eq!(CodeKind::Escape.to_string(), "escape");
        assert_eq!(CodeKind::Variable.to_string(), "variable");
    }
}
