//! Battery level, as the player announces it.
//!
//! A raw ADC reading goes through the divider math to a battery voltage,
//! then a linear percentage between the configured empty and full voltages,
//! then one of five status tags. Each tag names a prompt in the system
//! directory (`bv00.wav` ... `bv04.wav`).

use std::fmt;

use crate::config::BatterySettings;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BatteryStatus {
    /// 75% and up.
    Full,
    High,
    Medium,
    Low,
    /// Below 10%.
    Critical,
}

impl BatteryStatus {
    pub fn from_percentage(percentage: u8) -> Self {
        match percentage {
            75.. => Self::Full,
            50..=74 => Self::High,
            25..=49 => Self::Medium,
            10..=24 => Self::Low,
            _ => Self::Critical,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Self::Full => "bv00",
            Self::High => "bv01",
            Self::Medium => "bv02",
            Self::Low => "bv03",
            Self::Critical => "bv04",
        }
    }

    /// File name of the prompt announcing this status.
    pub fn sound_file(self) -> String {
        format!("{}.wav", self.tag())
    }
}

impl fmt::Display for BatteryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Anything that can report the current battery status.
pub trait BatteryStatusSource {
    fn status(&mut self) -> BatteryStatus;
}

/// One channel of an analog-to-digital converter.
pub trait AdcSampler {
    fn read_raw(&mut self) -> u16;
}

/// ADC stand-in that always reads what the divider would show for a fixed
/// battery voltage.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedAdc {
    raw: u16,
}

impl SimulatedAdc {
    pub fn from_voltage(voltage: f32, settings: &BatterySettings) -> Self {
        let pin = voltage * settings.divider_r2 / (settings.divider_r1 + settings.divider_r2);
        let raw = (pin / settings.adc_reference_voltage * settings.adc_max_reading)
            .round()
            .clamp(0.0, settings.adc_max_reading);
        Self { raw: raw as u16 }
    }
}

impl AdcSampler for SimulatedAdc {
    fn read_raw(&mut self) -> u16 {
        self.raw
    }
}

pub fn raw_to_pin_voltage(raw: u16, settings: &BatterySettings) -> f32 {
    f32::from(raw) * (settings.adc_reference_voltage / settings.adc_max_reading)
}

pub fn pin_to_battery_voltage(pin: f32, settings: &BatterySettings) -> f32 {
    pin * ((settings.divider_r1 + settings.divider_r2) / settings.divider_r2)
}

/// Two-point linear clamp between `min_volt` (0%) and `max_volt` (100%).
pub fn voltage_to_percentage(voltage: f32, settings: &BatterySettings) -> u8 {
    if voltage >= settings.max_volt {
        return 100;
    }
    if voltage <= settings.min_volt {
        return 0;
    }
    let range = settings.max_volt - settings.min_volt;
    let level = voltage - settings.min_volt;
    ((level / range) * 100.0).clamp(0.0, 100.0) as u8
}

pub struct BatteryMonitor<A> {
    adc: A,
    settings: BatterySettings,
}

impl<A: AdcSampler> BatteryMonitor<A> {
    pub fn new(adc: A, settings: BatterySettings) -> Self {
        Self { adc, settings }
    }

    /// Battery voltage from the average of `samples` readings.
    pub fn voltage(&mut self) -> f32 {
        let samples = self.settings.samples.max(1);
        let sum: u64 = (0..samples).map(|_| u64::from(self.adc.read_raw())).sum();
        let average = (sum / u64::from(samples)) as u16;

        let pin = raw_to_pin_voltage(average, &self.settings);
        pin_to_battery_voltage(pin, &self.settings)
    }

    pub fn percentage(&mut self) -> u8 {
        let voltage = self.voltage();
        voltage_to_percentage(voltage, &self.settings)
    }
}

impl<A: AdcSampler> BatteryStatusSource for BatteryMonitor<A> {
    fn status(&mut self) -> BatteryStatus {
        BatteryStatus::from_percentage(self.percentage())
    }
}
