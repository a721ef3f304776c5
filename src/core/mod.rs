pub mod bedtime;
pub mod calculator;

pub use crate::domain::model::{BedTime, CycleSettings, WakeTimeEntry, WakeTimeReport};
pub use crate::domain::ports::{ConfigProvider, Renderer};
pub use crate::utils::error::Result;
