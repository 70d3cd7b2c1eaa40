use crate::error::Result;
use crate::transforms::Transform;

/// Shows the control characters produced by `\n` and `\r` as their escape codes,
/// so a multi-line label can be inspected on a single terminal line.
pub struct ControlEscaper;

impl Transform for ControlEscaper {
    fn transform(&self, text: &str) -> Result<String> {
        let mut escaped = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '\n' => escaped.push_str("\\n"),
                '\r' => escaped.push_str("\\r"),
                _ => escaped.push(c),
            }
        }
        Ok(escaped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_control_characters() {
        let result = ControlEscaper.transform("GPU 4%\nVRAM 9%\r").unwrap();
        assert_eq!(result, "GPU 4%\\nVRAM 9%\\r");
    }

    #[test]
    fn test_keeps_escape_tokens() {
        let result = ControlEscaper.transform("\\D0\\f42").unwrap();
        assert_eq!(result, "\\D0\\f42");
    }
}
