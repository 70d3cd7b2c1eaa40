use crate::error::Result;

mod control_escaper;
mod line_handler;

pub use control_escaper::ControlEscaper;
pub use line_handler::LineHandler;

/// Trait for text transformations applied to a rendered label before printing
pub trait Transform: Send + Sync {
    /// Transforms the input text
    ///
    /// # Arguments
    /// * `text` - The text to transform
    ///
    /// # Returns
    /// The transformed text or an error if transformation fails
    fn transform(&self, text: &str) -> Result<String>;
}

/// Ordered chain of transforms
#[derive(Default)]
pub struct Pipeline {
    order: Vec<Box<dyn Transform>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a transform to the end of the chain
    pub fn register<T: Transform + 'static>(mut self, transform: T) -> Self {
        self.order.push(Box::new(transform));
        self
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Process the text through all registered transforms in sequence
    ///
    /// # Arguments
    /// * `text` - The text to process
    ///
    /// # Returns
    /// The processed text after applying all transforms or an error if any transform fails
    ///
    /// # Examples
    ///
    /// ```
    /// use gpulabel::transforms::{ControlEscaper, LineHandler, Pipeline};
    ///
    /// let pipeline = Pipeline::new()
    ///     .register(ControlEscaper)
    ///     .register(LineHandler::new(false));
    /// assert_eq!(pipeline.process("GPU\n42%").unwrap(), "GPU\\n42%\n");
    /// ```
    pub fn process(&self, text: &str) -> Result<String> {
        self.order
            .iter()
            .try_fold(text.to_string(), |acc, transform| transform.transform(&acc))
    }
}
