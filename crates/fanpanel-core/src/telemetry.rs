//! Read-only telemetry shown on the idle screen and the Status/Alarms menus.

use crate::time::has_elapsed;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FanTelemetry {
    pub current_ma: f32,
    pub power_w: f32,
    pub runtime_min: f32,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AlarmKind {
    Door,
    Water,
    Smoke,
    Temperature,
    FanFault,
    Aviation,
}

impl AlarmKind {
    pub const ALL: [AlarmKind; 6] = [
        Self::Door,
        Self::Water,
        Self::Smoke,
        Self::Temperature,
        Self::FanFault,
        Self::Aviation,
    ];

    /// One-letter badge used where there is no room for a label.
    pub const fn badge(self) -> &'static str {
        match self {
            Self::Door => "D",
            Self::Water => "W",
            Self::Smoke => "S",
            Self::Temperature => "T",
            Self::FanFault => "F",
            Self::Aviation => "L",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Alarms {
    pub door: bool,
    pub water: bool,
    pub smoke: bool,
    pub temperature: bool,
    pub fan_fault: bool,
    pub aviation: bool,
}

impl Alarms {
    pub const fn is_active(&self, kind: AlarmKind) -> bool {
        match kind {
            AlarmKind::Door => self.door,
            AlarmKind::Water => self.water,
            AlarmKind::Smoke => self.smoke,
            AlarmKind::Temperature => self.temperature,
            AlarmKind::FanFault => self.fan_fault,
            AlarmKind::Aviation => self.aviation,
        }
    }

    fn toggle_all(&mut self) {
        self.door = !self.door;
        self.water = !self.water;
        self.smoke = !self.smoke;
        self.temperature = !self.temperature;
        self.fan_fault = !self.fan_fault;
        self.aviation = !self.aviation;
    }
}

/// Latest sampled values; most recent write wins.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Telemetry {
    pub temperature_c: f32,
    pub supply_v: f32,
    pub fans: [FanTelemetry; 2],
    pub light_ok: bool,
    pub alarms: Alarms,
}

impl Default for Telemetry {
    fn default() -> Self {
        let fan = FanTelemetry {
            current_ma: 12.5,
            power_w: 12.5,
            runtime_min: 12.5,
        };
        Self {
            temperature_c: 12.0,
            supply_v: 12.0,
            fans: [fan; 2],
            light_ok: true,
            alarms: Alarms {
                door: true,
                water: false,
                smoke: true,
                temperature: false,
                fan_fault: true,
                aviation: false,
            },
        }
    }
}

/// Telemetry value a read-only menu row displays.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ReadingSource {
    Temperature,
    SupplyVoltage,
    FanCurrent(u8),
    FanPower(u8),
    FanRuntime(u8),
    LightCondition,
    Alarm(AlarmKind),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ReadingValue {
    Number(f32),
    Flag(bool),
}

impl Telemetry {
    pub fn reading(&self, source: ReadingSource) -> ReadingValue {
        let fan = |index: u8| &self.fans[(index as usize).min(self.fans.len() - 1)];
        match source {
            ReadingSource::Temperature => ReadingValue::Number(self.temperature_c),
            ReadingSource::SupplyVoltage => ReadingValue::Number(self.supply_v),
            ReadingSource::FanCurrent(index) => ReadingValue::Number(fan(index).current_ma),
            ReadingSource::FanPower(index) => ReadingValue::Number(fan(index).power_w),
            ReadingSource::FanRuntime(index) => ReadingValue::Number(fan(index).runtime_min),
            ReadingSource::LightCondition => ReadingValue::Flag(self.light_ok),
            ReadingSource::Alarm(kind) => ReadingValue::Flag(self.alarms.is_active(kind)),
        }
    }
}

/// Producer of telemetry snapshots, sampled once per loop iteration.
pub trait TelemetrySource {
    /// Returns a snapshot when new values are available.
    fn sample(&mut self, now_ms: u32) -> Option<Telemetry>;
}

const DEMO_UPDATE_MS: u32 = 5_000;
const DEMO_VALUES: [f32; 3] = [27.5, 30.7, 32.2];

/// Canned telemetry for boards without sensors attached.
///
/// Cycles through three fixed values every five seconds and toggles all
/// alarms so every idle-screen element gets exercised.
#[derive(Clone, Copy, Debug)]
pub struct DemoTelemetry {
    current: Telemetry,
    index: usize,
    last_update_ms: u32,
}

impl Default for DemoTelemetry {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoTelemetry {
    pub fn new() -> Self {
        Self {
            current: Telemetry::default(),
            index: 0,
            last_update_ms: 0,
        }
    }
}

impl TelemetrySource for DemoTelemetry {
    fn sample(&mut self, now_ms: u32) -> Option<Telemetry> {
        if !has_elapsed(now_ms, self.last_update_ms, DEMO_UPDATE_MS) {
            return None;
        }
        self.last_update_ms = now_ms;

        let value = DEMO_VALUES[self.index];
        self.current.temperature_c = value;
        self.current.supply_v = value;
        for fan in self.current.fans.iter_mut() {
            *fan = FanTelemetry {
                current_ma: value,
                power_w: value,
                runtime_min: value,
            };
        }
        self.current.alarms.toggle_all();
        self.current.light_ok = !self.current.light_ok;
        self.index = (self.index + 1) % DEMO_VALUES.len();

        Some(self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_source_updates_every_five_seconds() {
        let mut demo = DemoTelemetry::new();
        assert_eq!(demo.sample(4_999), None);

        let first = demo.sample(5_000).expect("first update");
        assert_eq!(first.temperature_c, 27.5);
        assert!(!first.alarms.door);
        assert!(!first.light_ok);

        assert_eq!(demo.sample(9_999), None);
        let second = demo.sample(10_000).expect("second update");
        assert_eq!(second.supply_v, 30.7);
        assert!(second.alarms.door);
    }

    #[test]
    fn readings_map_to_snapshot_fields() {
        let mut telemetry = Telemetry::default();
        telemetry.fans[1].power_w = 3.5;
        assert_eq!(
            telemetry.reading(ReadingSource::FanPower(1)),
            ReadingValue::Number(3.5)
        );
        assert_eq!(
            telemetry.reading(ReadingSource::Alarm(AlarmKind::Smoke)),
            ReadingValue::Flag(true)
        );
    }
}
