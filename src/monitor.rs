use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use crate::debug;
use crate::error::{Error, Result};
use crate::metrics::MetricsSnapshot;
use crate::renderer::TemplateRenderer;

/// Label state shared between the configuration side and the update loop.
///
/// The template can be replaced at any time; every update renders against the
/// snapshot that was current when the update started.
pub struct LabelMonitor {
    template: RwLock<Option<Arc<str>>>,
    enabled: AtomicBool,
    renderer: TemplateRenderer,
}

impl LabelMonitor {
    pub fn new(template: Option<String>, enabled: bool) -> Self {
        Self::with_renderer(template, enabled, TemplateRenderer::default())
    }

    pub fn with_renderer(template: Option<String>, enabled: bool, renderer: TemplateRenderer) -> Self {
        Self {
            template: RwLock::new(template.map(Arc::from)),
            enabled: AtomicBool::new(enabled),
            renderer,
        }
    }

    /// Replaces the template used by the next updates
    pub fn set_template(&self, template: Option<String>) -> Result<()> {
        let mut current = self
            .template
            .write()
            .map_err(|e| Error::LockError(format!("Failed to acquire write lock: {}", e)))?;
        *current = template.map(Arc::from);
        Ok(())
    }

    /// Gets the current template snapshot
    pub fn template(&self) -> Result<Option<Arc<str>>> {
        self.template
            .read()
            .map(|current| current.clone())
            .map_err(|e| Error::LockError(format!("Failed to acquire read lock: {}", e)))
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Release);
    }

    /// Flips the enable flag, returning the new state
    pub fn toggle(&self) -> bool {
        !self.enabled.fetch_xor(true, Ordering::AcqRel)
    }

    /// Renders the label for the given metrics.
    ///
    /// # Arguments
    /// * `metrics` - The values of the current update tick
    ///
    /// # Returns
    /// The rendered label, or `None` when rendering is disabled or no template
    /// is configured.
    ///
    /// # Examples
    ///
    /// ```
    /// use gpulabel::metrics::MetricsSnapshot;
    /// use gpulabel::monitor::LabelMonitor;
    ///
    /// let monitor = LabelMonitor::new(Some("$G".to_string()), true);
    /// let label = monitor.update(&MetricsSnapshot::new(42, 7)).unwrap();
    /// assert_eq!(label.as_deref(), Some("GPU 42%"));
    /// ```
    pub fn update(&self, metrics: &MetricsSnapshot) -> Result<Option<String>> {
        if !self.is_enabled() {
            debug!("Label rendering disabled, skipping update");
            return Ok(None);
        }
        // The lock is released before rendering starts
        let Some(template) = self.template()? else {
            return Ok(None);
        };
        Ok(Some(self.renderer.render(&template, metrics)))
    }
}
