use std::fmt::Write;

use crate::error::PluginError;
use crate::hooks::{EventPlugin, Service};
use crate::labels::label_for;

impl EventPlugin {
    /// Hook: render the last dispatch outcome and the configured payload
    /// fields as a human-readable summary block.
    ///
    /// Validates the plugin configuration first, so a misconfigured plugin
    /// surfaces the same error here as on dispatch.
    pub async fn render_summary(&self, _service: &Service) -> Result<String, PluginError> {
        let settings = self.settings()?;

        let mut out = String::new();
        match self.last_record().await? {
            Some(record) => {
                let _ = writeln!(out, "{}", record.timestamp);
                let _ = writeln!(out, "Trigger Response: {}", record.response);
            }
            None => {
                let _ = writeln!(out, "Trigger Response: (no response yet)");
            }
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "Fields");
        for (slot, field) in settings.selectors.fields().iter().enumerate() {
            let label = if field.is_empty() {
                "(not set)"
            } else {
                label_for(field).unwrap_or(field.as_str())
            };
            let _ = writeln!(out, "  Value {}: {label}", slot + 1);
        }

        Ok(out)
    }
}
