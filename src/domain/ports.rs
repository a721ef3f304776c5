use crate::domain::model::{CycleSettings, WakeTimeReport};
use crate::utils::error::Result;

pub trait ConfigProvider {
    fn onset_minutes(&self) -> u32;
    fn cycle_minutes(&self) -> u32;
    fn cycle_count(&self) -> u32;
    fn time_format(&self) -> &str;
    fn timezone(&self) -> Option<&str>;
    fn output_format(&self) -> &str;

    fn cycle_settings(&self) -> CycleSettings {
        CycleSettings {
            onset_minutes: self.onset_minutes(),
            cycle_minutes: self.cycle_minutes(),
            cycle_count: self.cycle_count(),
            time_format: self.time_format().to_string(),
        }
    }
}

/// Turns a finished report into the bytes a front end shows the user.
pub trait Renderer {
    fn render(&self, report: &WakeTimeReport) -> Result<String>;
}
