//! Device configuration record and the live/staged pair used by the menu.

use log::debug;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FanProfile {
    Auto,
    Normal,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FanModel {
    Krubo,
    Delta,
    Custom,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CurrentUnit {
    MilliAmps,
    Amps,
}

/// Serial line rates offered for the Modbus link.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BaudRate {
    B9600,
    B19200,
    B38400,
    B57600,
    B115200,
}

impl BaudRate {
    pub const fn bits_per_second(self) -> u32 {
        match self {
            Self::B9600 => 9_600,
            Self::B19200 => 19_200,
            Self::B38400 => 38_400,
            Self::B57600 => 57_600,
            Self::B115200 => 115_200,
        }
    }
}

/// Numeric settings editable from a menu field.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NumericField {
    TempLow,
    TempHigh,
    TempAlarm,
    TogglePeriod,
    Fan1Nominal,
    Fan2Nominal,
    VoltLow,
    VoltHigh,
    LdrThreshold,
    SlaveId,
}

/// Enumerated settings picked from a fixed option list.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ChoiceField {
    CurrentUnit,
    FanProfile,
    Fan1Model,
    Fan2Model,
    BaudRate,
}

const UNIT_LABELS: &[&str] = &["mA", "A"];
const PROFILE_LABELS: &[&str] = &["Auto", "Normal"];
const MODEL_LABELS: &[&str] = &["KRUBO", "DELTA", "CUSTOM"];
const BAUD_LABELS: &[&str] = &["9600", "19200", "38400", "57600", "115200"];

impl ChoiceField {
    pub const fn labels(self) -> &'static [&'static str] {
        match self {
            Self::CurrentUnit => UNIT_LABELS,
            Self::FanProfile => PROFILE_LABELS,
            Self::Fan1Model | Self::Fan2Model => MODEL_LABELS,
            Self::BaudRate => BAUD_LABELS,
        }
    }

    pub const fn option_count(self) -> u8 {
        self.labels().len() as u8
    }

    pub fn label(self, option: u8) -> &'static str {
        let labels = self.labels();
        labels[(option as usize).min(labels.len() - 1)]
    }
}

/// Full device configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
    pub temp_low_c: i16,
    pub temp_high_c: i16,
    pub temp_alarm_c: i16,
    pub toggle_period_min: u16,
    pub fan_profile: FanProfile,
    pub fan1_model: FanModel,
    pub fan2_model: FanModel,
    pub fan1_nominal_ma: i32,
    pub fan2_nominal_ma: i32,
    pub current_unit: CurrentUnit,
    pub volt_low_v: i16,
    pub volt_high_v: i16,
    pub ldr_threshold: i16,
    pub baud_rate: BaudRate,
    pub slave_id: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self::factory()
    }
}

impl Settings {
    pub const fn factory() -> Self {
        Self {
            temp_low_c: 24,
            temp_high_c: 35,
            temp_alarm_c: 45,
            toggle_period_min: 1,
            fan_profile: FanProfile::Auto,
            fan1_model: FanModel::Krubo,
            fan2_model: FanModel::Krubo,
            fan1_nominal_ma: 250,
            fan2_nominal_ma: 250,
            current_unit: CurrentUnit::MilliAmps,
            volt_low_v: 10,
            volt_high_v: 15,
            ldr_threshold: 100,
            baud_rate: BaudRate::B115200,
            slave_id: 1,
        }
    }

    pub fn numeric(&self, field: NumericField) -> i32 {
        match field {
            NumericField::TempLow => self.temp_low_c as i32,
            NumericField::TempHigh => self.temp_high_c as i32,
            NumericField::TempAlarm => self.temp_alarm_c as i32,
            NumericField::TogglePeriod => self.toggle_period_min as i32,
            NumericField::Fan1Nominal => self.fan1_nominal_ma,
            NumericField::Fan2Nominal => self.fan2_nominal_ma,
            NumericField::VoltLow => self.volt_low_v as i32,
            NumericField::VoltHigh => self.volt_high_v as i32,
            NumericField::LdrThreshold => self.ldr_threshold as i32,
            NumericField::SlaveId => self.slave_id as i32,
        }
    }

    /// Store `value`, saturating at the storage type's range.
    pub fn set_numeric(&mut self, field: NumericField, value: i32) {
        let as_i16 = value.clamp(i16::MIN as i32, i16::MAX as i32) as i16;
        match field {
            NumericField::TempLow => self.temp_low_c = as_i16,
            NumericField::TempHigh => self.temp_high_c = as_i16,
            NumericField::TempAlarm => self.temp_alarm_c = as_i16,
            NumericField::TogglePeriod => {
                self.toggle_period_min = value.clamp(0, u16::MAX as i32) as u16
            }
            NumericField::Fan1Nominal => self.fan1_nominal_ma = value,
            NumericField::Fan2Nominal => self.fan2_nominal_ma = value,
            NumericField::VoltLow => self.volt_low_v = as_i16,
            NumericField::VoltHigh => self.volt_high_v = as_i16,
            NumericField::LdrThreshold => self.ldr_threshold = as_i16,
            NumericField::SlaveId => self.slave_id = value.clamp(0, u8::MAX as i32) as u8,
        }
    }

    /// Current option index of an enumerated field.
    pub fn choice(&self, field: ChoiceField) -> u8 {
        match field {
            ChoiceField::CurrentUnit => match self.current_unit {
                CurrentUnit::MilliAmps => 0,
                CurrentUnit::Amps => 1,
            },
            ChoiceField::FanProfile => match self.fan_profile {
                FanProfile::Auto => 0,
                FanProfile::Normal => 1,
            },
            ChoiceField::Fan1Model => model_index(self.fan1_model),
            ChoiceField::Fan2Model => model_index(self.fan2_model),
            ChoiceField::BaudRate => match self.baud_rate {
                BaudRate::B9600 => 0,
                BaudRate::B19200 => 1,
                BaudRate::B38400 => 2,
                BaudRate::B57600 => 3,
                BaudRate::B115200 => 4,
            },
        }
    }

    /// Select an option by index; out-of-range indices clamp to the last one.
    pub fn set_choice(&mut self, field: ChoiceField, option: u8) {
        let option = option.min(field.option_count().saturating_sub(1));
        match field {
            ChoiceField::CurrentUnit => {
                self.current_unit = if option == 0 {
                    CurrentUnit::MilliAmps
                } else {
                    CurrentUnit::Amps
                };
            }
            ChoiceField::FanProfile => {
                self.fan_profile = if option == 0 {
                    FanProfile::Auto
                } else {
                    FanProfile::Normal
                };
            }
            ChoiceField::Fan1Model => self.fan1_model = model_from_index(option),
            ChoiceField::Fan2Model => self.fan2_model = model_from_index(option),
            ChoiceField::BaudRate => {
                self.baud_rate = match option {
                    0 => BaudRate::B9600,
                    1 => BaudRate::B19200,
                    2 => BaudRate::B38400,
                    3 => BaudRate::B57600,
                    _ => BaudRate::B115200,
                };
            }
        }
    }
}

fn model_index(model: FanModel) -> u8 {
    match model {
        FanModel::Krubo => 0,
        FanModel::Delta => 1,
        FanModel::Custom => 2,
    }
}

fn model_from_index(index: u8) -> FanModel {
    match index {
        0 => FanModel::Krubo,
        1 => FanModel::Delta,
        _ => FanModel::Custom,
    }
}

/// Live configuration plus the draft the menu edits.
///
/// `live` only changes through [`SettingsStage::apply`]. Each apply starts a
/// new configuration epoch that control logic can poll for.
#[derive(Clone, Copy, Debug)]
pub struct SettingsStage {
    live: Settings,
    staged: Settings,
    epoch: u32,
}

impl Default for SettingsStage {
    fn default() -> Self {
        Self::new(Settings::factory())
    }
}

impl SettingsStage {
    pub const fn new(initial: Settings) -> Self {
        Self {
            live: initial,
            staged: initial,
            epoch: 0,
        }
    }

    pub const fn live(&self) -> &Settings {
        &self.live
    }

    pub const fn staged(&self) -> &Settings {
        &self.staged
    }

    pub fn staged_mut(&mut self) -> &mut Settings {
        &mut self.staged
    }

    pub const fn epoch(&self) -> u32 {
        self.epoch
    }

    /// Start a menu session from the current live values.
    pub fn begin_stage(&mut self) {
        self.staged = self.live;
    }

    pub fn is_dirty(&self) -> bool {
        self.staged != self.live
    }

    /// Replace live with the draft as one whole-record write.
    pub fn apply(&mut self) {
        self.live = self.staged;
        self.epoch = self.epoch.wrapping_add(1);
        debug!("settings: applied epoch={}", self.epoch);
    }

    pub fn discard(&mut self) {
        self.staged = self.live;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edited() -> Settings {
        let mut settings = Settings::factory();
        settings.temp_low_c = 20;
        settings.baud_rate = BaudRate::B9600;
        settings
    }

    #[test]
    fn begin_stage_is_never_dirty() {
        let mut stage = SettingsStage::new(edited());
        stage.staged_mut().slave_id = 9;
        stage.begin_stage();
        assert!(!stage.is_dirty());
        assert_eq!(stage.staged(), stage.live());
    }

    #[test]
    fn apply_copies_draft_and_makes_discard_a_no_op() {
        let mut stage = SettingsStage::default();
        stage.begin_stage();
        stage.staged_mut().set_numeric(NumericField::TempHigh, 40);
        assert!(stage.is_dirty());

        stage.apply();
        assert!(!stage.is_dirty());
        assert_eq!(stage.live().temp_high_c, 40);
        assert_eq!(stage.epoch(), 1);

        let before = *stage.live();
        stage.discard();
        assert_eq!(*stage.live(), before);
        assert_eq!(*stage.staged(), before);
    }

    #[test]
    fn discard_restores_live_values() {
        let mut stage = SettingsStage::default();
        stage.staged_mut().set_choice(ChoiceField::Fan2Model, 1);
        stage.discard();
        assert_eq!(stage.staged().fan2_model, FanModel::Krubo);
        assert_eq!(stage.epoch(), 0);
    }

    #[test]
    fn field_accessors_round_trip_and_saturate() {
        let mut settings = Settings::factory();
        settings.set_numeric(NumericField::SlaveId, 400);
        assert_eq!(settings.numeric(NumericField::SlaveId), 255);
        settings.set_numeric(NumericField::TogglePeriod, -3);
        assert_eq!(settings.toggle_period_min, 0);

        settings.set_choice(ChoiceField::BaudRate, 42);
        assert_eq!(settings.baud_rate, BaudRate::B115200);
        assert_eq!(settings.choice(ChoiceField::BaudRate), 4);
        assert_eq!(ChoiceField::BaudRate.label(1), "19200");
    }

    #[test]
    fn baud_labels_match_line_rates() {
        let mut settings = Settings::factory();
        for option in 0..ChoiceField::BaudRate.option_count() {
            settings.set_choice(ChoiceField::BaudRate, option);
            let label = ChoiceField::BaudRate.label(option);
            assert_eq!(label.parse::<u32>(), Ok(settings.baud_rate.bits_per_second()));
        }
    }
}
