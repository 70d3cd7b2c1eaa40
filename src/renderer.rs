//! Single-pass renderer for GPU chart label templates.
//!
//! A template mixes plain characters with escape codes (`\D0`, `\f`, `\w12`...)
//! that are copied through for the chart renderer, and variables (`$g`, `$V`...)
//! that expand to the current utilization values:
//!
//! ```
//! use gpulabel::metrics::MetricsSnapshot;
//! use gpulabel::renderer::render;
//!
//! let metrics = MetricsSnapshot::new(42, 7);
//! assert_eq!(render(Some("\\D0\\f$G\\D1\\f$v%"), &metrics), "\\D0\\fGPU 42%\\D1\\f7%");
//! ```
//!
//! Rendering never fails. Unknown codes are copied literally and the output is
//! truncated once it reaches the renderer limit.

use std::iter::Peekable;
use std::str::Chars;

use crate::codes::{escape_rule, EscapeRule, Variable, SELECTOR_DIGITS};
use crate::constants::render::{ESCAPE_MARKER, MAX_OUTPUT, SUBSTITUTION_MARKER};
use crate::metrics::MetricsSnapshot;

/// Renders a template with the default output limit.
///
/// An absent template renders as an empty string.
///
/// # Arguments
/// * `template` - The label template, if one is configured
/// * `metrics` - The values used by the substitution codes
///
/// # Returns
/// The rendered label, at most `MAX_OUTPUT` characters long
pub fn render(template: Option<&str>, metrics: &MetricsSnapshot) -> String {
    template.map_or_else(String::new, |template| {
        TemplateRenderer::default().render(template, metrics)
    })
}

/// Output accumulator holding at most `limit` characters.
struct Output {
    text: String,
    len: usize,
    limit: usize,
    closed: bool,
}

impl Output {
    fn new(limit: usize) -> Self {
        Self {
            text: String::new(),
            len: 0,
            limit,
            closed: false,
        }
    }

    fn remaining(&self) -> usize {
        self.limit.saturating_sub(self.len)
    }

    fn is_exhausted(&self) -> bool {
        self.closed || self.len >= self.limit
    }

    fn push(&mut self, c: char) {
        if self.is_exhausted() {
            return;
        }
        self.text.push(c);
        self.len += 1;
    }

    /// Appends as many characters of `text` as fit.
    fn push_truncated(&mut self, text: &str) {
        for c in text.chars() {
            if self.is_exhausted() {
                break;
            }
            self.push(c);
        }
    }

    /// Appends the whole token or nothing. A token that does not fit closes the output.
    fn push_token(&mut self, token: &str, token_len: usize) {
        if self.is_exhausted() || token_len > self.remaining() {
            self.closed = true;
            return;
        }
        self.text.push_str(token);
        self.len += token_len;
    }

    fn into_string(self) -> String {
        self.text
    }
}

/// Escape token under construction, counting its characters.
struct Token {
    text: String,
    len: usize,
}

impl Token {
    fn new(code: char) -> Self {
        let mut text = String::with_capacity(4);
        text.push(ESCAPE_MARKER);
        text.push(code);
        Self { text, len: 2 }
    }

    fn push(&mut self, c: char) {
        self.text.push(c);
        self.len += 1;
    }
}

/// Renders label templates keeping the output under a fixed number of characters.
///
/// The renderer holds no state between calls: the same value can render the same
/// template against any number of snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateRenderer {
    limit: usize,
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::with_limit(MAX_OUTPUT)
    }
}

impl TemplateRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a renderer producing at most `limit` characters.
    pub fn with_limit(limit: usize) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Renders the template with the given metrics.
    ///
    /// # Arguments
    /// * `template` - The label template
    /// * `metrics` - The values used by the substitution codes
    ///
    /// # Returns
    /// The rendered label. Pass-through escape tokens are either copied whole or,
    /// when they no longer fit, rendering stops right before them.
    ///
    /// # Examples
    ///
    /// ```
    /// use gpulabel::metrics::MetricsSnapshot;
    /// use gpulabel::renderer::TemplateRenderer;
    ///
    /// let renderer = TemplateRenderer::with_limit(6);
    /// let metrics = MetricsSnapshot::new(100, 0);
    /// assert_eq!(renderer.render("$G", &metrics), "GPU 10");
    /// ```
    pub fn render(&self, template: &str, metrics: &MetricsSnapshot) -> String {
        let mut output = Output::new(self.limit);
        let mut chars = template.chars().peekable();

        while !output.is_exhausted() {
            let Some(c) = chars.next() else {
                break;
            };
            match c {
                // A trailing escape marker carries no code and is dropped
                ESCAPE_MARKER => {
                    if let Some(code) = chars.next() {
                        Self::render_escape(code, &mut chars, &mut output);
                    }
                }
                SUBSTITUTION_MARKER => Self::render_variable(chars.next(), metrics, &mut output),
                _ => output.push(c),
            }
        }

        output.into_string()
    }

    fn render_escape(code: char, chars: &mut Peekable<Chars>, output: &mut Output) {
        let rule = match escape_rule(code) {
            Some(EscapeRule::Literal(c)) => {
                output.push(c);
                return;
            }
            Some(rule) => rule,
            None => {
                let token = Token::new(code);
                output.push_token(&token.text, token.len);
                return;
            }
        };

        let mut token = Token::new(code);
        match rule {
            EscapeRule::Selector => {
                if let Some(digit) = chars.next_if(|c| SELECTOR_DIGITS.contains(c)) {
                    token.push(digit);
                }
            }
            EscapeRule::Attribute => {
                if let Some(payload) = chars.next() {
                    token.push(payload);
                }
            }
            EscapeRule::Width => {
                // Digits beyond the remaining room are consumed but not stored
                let room = output.remaining();
                let mut overflow = 0;
                while let Some(digit) = chars.next_if(char::is_ascii_digit) {
                    if token.len < room {
                        token.push(digit);
                    } else {
                        overflow += 1;
                    }
                }
                token.len += overflow;
            }
            EscapeRule::PassThrough | EscapeRule::Literal(_) => {}
        }
        output.push_token(&token.text, token.len);
    }

    fn render_variable(code: Option<char>, metrics: &MetricsSnapshot, output: &mut Output) {
        match code.and_then(Variable::from_code) {
            Some(variable) => output.push_truncated(&variable.resolve(metrics)),
            None => {
                output.push(SUBSTITUTION_MARKER);
                if let Some(c) = code {
                    output.push(c);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn any() -> MetricsSnapshot {
        MetricsSnapshot::new(63, 18)
    }

    fn render_str(template: &str, metrics: &MetricsSnapshot) -> String {
        render(Some(template), metrics)
    }

    #[test]
    fn test_primary_value_for_all_percentages() {
        for m in 0..=100 {
            for n in [0, 50, 100] {
                let metrics = MetricsSnapshot::new(m, n);
                assert_eq!(render_str("$g", &metrics), m.to_string());
                assert_eq!(render_str("$v", &metrics), n.to_string());
            }
        }
    }

    #[test]
    fn test_labelled_values() {
        assert_eq!(render_str("$G", &MetricsSnapshot::new(42, 3)), "GPU 42%");
        assert_eq!(render_str("$V", &MetricsSnapshot::new(90, 7)), "VRAM 7%");
    }

    #[test]
    fn test_locally_resolved_escapes() {
        assert_eq!(render_str("\\.", &any()), ".");
        assert_eq!(render_str("\\n\\r", &any()), "\n\r");
        assert_eq!(render_str("\\f\\ag\\.$g%", &any()), "\\f\\ag.63%");
    }

    #[test]
    fn test_unknown_codes_pass_through() {
        assert_eq!(render_str("\\z", &any()), "\\z");
        assert_eq!(render_str("\\t", &any()), "\\t");
        assert_eq!(render_str("$q", &any()), "$q");
        assert_eq!(render_str("$$g", &any()), "$$g");
    }

    #[test]
    fn test_trailing_markers() {
        assert_eq!(render_str("abc\\", &any()), "abc");
        assert_eq!(render_str("abc$", &any()), "abc$");
        assert_eq!(render_str("\\", &any()), "");
        assert_eq!(render_str("$", &any()), "$");
    }

    #[test]
    fn test_width_and_selector_pass_through() {
        assert_eq!(render_str("\\w123\\D0", &any()), "\\w123\\D0");
        assert_eq!(render_str("\\w", &any()), "\\w");
        assert_eq!(render_str("\\ww\\D0\\f$g", &any()), "\\ww\\D0\\f63");
    }

    #[test]
    fn test_selector_digits() {
        assert_eq!(render_str("\\d1x", &any()), "\\d1x");
        assert_eq!(render_str("\\D", &any()), "\\D");
        // only 0 and 1 belong to the selector
        assert_eq!(render_str("\\D2$V", &any()), "\\D2VRAM 18%");
    }

    #[test]
    fn test_attribute_takes_next_character() {
        assert_eq!(render_str("\\a$g", &any()), "\\a$g");
        assert_eq!(render_str("\\a\\n", &any()), "\\a\\n");
        assert_eq!(render_str("\\a", &any()), "\\a");
        assert_eq!(render_str("\\s\\ax", &any()), "\\s\\ax");
    }

    #[test]
    fn test_default_template() {
        let metrics = MetricsSnapshot::new(42, 7);
        assert_eq!(
            render_str("\\D2$V\\D0\\t\\f$G", &metrics),
            "\\D2VRAM 7%\\D0\\t\\fGPU 42%"
        );
    }

    #[test]
    fn test_plain_text_is_unchanged() {
        let samples = [
            String::new(),
            "GPU load".to_string(),
            "héllo wörld 🦀".to_string(),
            "x".repeat(MAX_OUTPUT),
        ];
        for sample in samples {
            assert_eq!(render_str(&sample, &any()), sample);
        }
    }

    #[test]
    fn test_output_is_bounded() {
        let metrics = MetricsSnapshot::new(100, 100);
        let output = render_str(&"$g".repeat(1000), &metrics);
        assert_eq!(output.chars().count(), MAX_OUTPUT);
        assert!(output.ends_with("10010"));

        let long = render_str(&"$V\\D0\\w99".repeat(200), &metrics);
        assert!(long.chars().count() <= MAX_OUTPUT);

        let wide = render_str(&"é".repeat(MAX_OUTPUT * 2), &metrics);
        assert_eq!(wide.chars().count(), MAX_OUTPUT);
    }

    #[test]
    fn test_tokens_are_never_split() {
        let renderer = TemplateRenderer::with_limit(4);
        assert_eq!(renderer.render("ab\\D0", &any()), "ab");
        assert_eq!(renderer.render("ab\\D0", &any()).len(), 2);
        assert_eq!(renderer.render("x\\w12", &any()), "x");
        assert_eq!(renderer.render("a\\D1", &any()), "a\\D1");

        let renderer = TemplateRenderer::with_limit(6);
        assert_eq!(renderer.render("abc\\D0x", &any()), "abc\\D0");
        // nothing after a rejected token is rendered
        assert_eq!(renderer.render("abcde\\fxyz", &any()), "abcde");
    }

    #[test]
    fn test_oversized_width_token() {
        let template = format!("\\w{}", "9".repeat(1000));
        assert_eq!(render_str(&template, &any()), "");
        assert_eq!(render_str(&format!("ok{}", template), &any()), "ok");
    }

    #[test]
    fn test_substitution_truncated_at_limit() {
        let renderer = TemplateRenderer::with_limit(3);
        let metrics = MetricsSnapshot::new(55, 100);
        assert_eq!(renderer.render("$V", &metrics), "VRA");
        assert_eq!(renderer.render("ab$g", &metrics), "ab5");
        assert_eq!(renderer.render("ab$q", &metrics), "ab$");
    }

    #[test]
    fn test_zero_limit() {
        let renderer = TemplateRenderer::with_limit(0);
        assert_eq!(renderer.render("$G\\D0abc", &any()), "");
    }

    #[test]
    fn test_empty_or_absent_template() {
        for metrics in [MetricsSnapshot::new(0, 0), MetricsSnapshot::new(100, 100)] {
            assert_eq!(render(None, &metrics), "");
            assert_eq!(render(Some(""), &metrics), "");
        }
    }

    #[test]
    fn test_repeated_calls_are_independent() {
        let renderer = TemplateRenderer::new();
        let template = "\\D0$G \\D1$V";
        assert_eq!(
            renderer.render(template, &MetricsSnapshot::new(1, 2)),
            "\\D0GPU 1% \\D1VRAM 2%"
        );
        assert_eq!(
            renderer.render(template, &MetricsSnapshot::new(99, 100)),
            "\\D0GPU 99% \\D1VRAM 100%"
        );
        assert_eq!(
            renderer.render(template, &MetricsSnapshot::new(1, 2)),
            "\\D0GPU 1% \\D1VRAM 2%"
        );
    }
}
