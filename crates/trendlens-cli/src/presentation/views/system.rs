use std::fmt;

use crate::presentation::view_models::{
    ConfigInitViewModel, ConfigViewModel, ExportViewModel, GuidanceViewModel, HealthViewModel,
};

// --------------------------------------------------------
// Health View
// --------------------------------------------------------

pub struct HealthView<'a> {
    data: &'a HealthViewModel,
}

impl<'a> HealthView<'a> {
    pub fn new(data: &'a HealthViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for HealthView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{:<13} {}", "API", self.data.base_url)?;
        writeln!(f, "{:<13} {}", "Status", self.data.status)?;
        if let Some(version) = &self.data.version {
            writeln!(f, "{:<13} {}", "Version", version)?;
        }
        if let Some(environment) = &self.data.environment {
            writeln!(f, "{:<13} {}", "Environment", environment)?;
        }
        if let Some(cache) = &self.data.cache_status {
            writeln!(f, "{:<13} {}", "Cache", cache)?;
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Config Views
// --------------------------------------------------------

pub struct ConfigView<'a> {
    data: &'a ConfigViewModel,
}

impl<'a> ConfigView<'a> {
    pub fn new(data: &'a ConfigViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ConfigView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let marker = if self.data.exists { "" } else { " (not created)" };
        writeln!(f, "Config file: {}{}", self.data.path, marker)?;
        writeln!(f)?;
        writeln!(f, "[api]")?;
        writeln!(f, "base_url = {}", self.data.base_url)?;
        writeln!(f, "geo = {}", self.data.geo)?;
        writeln!(f, "timeout_secs = {}", self.data.timeout_secs)?;
        writeln!(f)?;
        writeln!(f, "[dashboard]")?;
        writeln!(f, "timeframe = {}", self.data.timeframe)?;
        Ok(())
    }
}

pub struct ConfigInitView<'a> {
    data: &'a ConfigInitViewModel,
}

impl<'a> ConfigInitView<'a> {
    pub fn new(data: &'a ConfigInitViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ConfigInitView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.overwritten {
            writeln!(f, "Replaced {}", self.data.path)
        } else {
            writeln!(f, "Created {}", self.data.path)
        }
    }
}

// --------------------------------------------------------
// Export View
// --------------------------------------------------------

pub struct ExportView<'a> {
    data: &'a ExportViewModel,
}

impl<'a> ExportView<'a> {
    pub fn new(data: &'a ExportViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ExportView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "Exported {} rows for '{}' ({}) to {}",
            self.data.rows, self.data.keyword, self.data.timeframe, self.data.output
        )
    }
}

// --------------------------------------------------------
// Guidance View
// --------------------------------------------------------

pub struct GuidanceView<'a> {
    data: &'a GuidanceViewModel,
}

impl<'a> GuidanceView<'a> {
    pub fn new(data: &'a GuidanceViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for GuidanceView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "trendlens - search-interest trends in the terminal")?;
        writeln!(f)?;
        writeln!(f, "API: {}", self.data.base_url)?;
        if !self.data.config_exists {
            writeln!(f, "No config file found, using defaults.")?;
        }
        Ok(())
    }
}
