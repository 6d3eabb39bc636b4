use fanpanel_core::settings::Settings;
use log::info;

/// Hands applied settings to the control side, once per apply.
pub(super) struct ControlSync {
    epoch: u32,
    applied: Settings,
}

impl ControlSync {
    pub(super) fn new(epoch: u32, live: Settings) -> Self {
        Self {
            epoch,
            applied: live,
        }
    }

    /// Returns whether a new configuration was picked up.
    pub(super) fn observe(&mut self, epoch: u32, live: &Settings) -> bool {
        if epoch == self.epoch {
            return false;
        }

        self.epoch = epoch;
        self.applied = *live;
        let applied = &self.applied;
        info!(
            "control: epoch={} temp_low={} temp_high={} temp_alarm={} profile={:?} toggle_min={}",
            epoch,
            applied.temp_low_c,
            applied.temp_high_c,
            applied.temp_alarm_c,
            applied.fan_profile,
            applied.toggle_period_min
        );
        info!(
            "control: volt={}..{} ldr={} modbus baud={} slave={}",
            applied.volt_low_v,
            applied.volt_high_v,
            applied.ldr_threshold,
            applied.baud_rate.bits_per_second(),
            applied.slave_id
        );
        true
    }
}
