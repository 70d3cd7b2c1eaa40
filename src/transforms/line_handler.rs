use crate::error::Result;
use crate::transforms::Transform;

/// Handles the line ending written after a label
pub struct LineHandler {
    skip_newline: bool,
}

impl LineHandler {
    pub fn new(skip_newline: bool) -> Self {
        Self { skip_newline }
    }
}

/// LineHandler appends a newline at the end of the text unless told to skip it.
impl Transform for LineHandler {
    fn transform(&self, text: &str) -> Result<String> {
        Ok(format!(
            "{}{}",
            text,
            self.skip_newline.then_some("").unwrap_or("\n")
        ))
    }
}
