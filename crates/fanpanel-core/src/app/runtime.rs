impl<IN, TS> HmiApp<IN, TS>
where
    IN: InputProvider,
    TS: TelemetrySource,
{
    pub fn new(input: IN, telemetry_source: TS, initial: Settings, mut config: HmiConfig) -> Self {
        config.frame_period_ms = config.frame_period_ms.max(1);
        config.fan_duty_period_ms = config.fan_duty_period_ms.max(1);
        for digit in config.passcode.iter_mut() {
            *digit %= 10;
        }

        let mut animator = SpriteAnimator::new();
        let mut duty_sprite = None;
        for (x, y, interval_ms) in FAN_SPRITES {
            let id = animator.add_sprite(
                x,
                y,
                FAN_SPRITE_SIZE,
                FAN_SPRITE_SIZE,
                SpriteSheet::Fan,
                interval_ms,
            );
            duty_sprite = duty_sprite.or(id);
        }

        Self {
            input,
            telemetry_source,
            telemetry: Telemetry::default(),
            config,
            mode: UiMode::Idle,
            overlay: Overlay::None,
            queue: EventQueue::new(),
            settings: SettingsStage::new(initial),
            walker: MenuWalker::new(&MAIN_MENU),
            carousel: 0,
            unlocked: false,
            animator,
            duty_sprite,
            last_input_ms: 0,
            last_frame_ms: None,
            pending_redraw: true,
        }
    }

    /// Run one loop iteration: sample telemetry, consume gestures, drain
    /// queued commands, enforce the idle timeout, and step the idle
    /// animation. Render requests are throttled to the frame period.
    pub fn tick(&mut self, now_ms: u32) -> TickResult {
        if let Some(snapshot) = self.telemetry_source.sample(now_ms) {
            self.telemetry = snapshot;
            self.pending_redraw = true;
        }

        self.process_inputs(now_ms);
        self.drain_commands();

        if self.mode != UiMode::Idle
            && elapsed_ms(now_ms, self.last_input_ms) > self.config.menu_timeout_ms
        {
            info!(
                "ui-nav: menu timeout after {}ms dirty={}",
                elapsed_ms(now_ms, self.last_input_ms),
                self.settings.is_dirty()
            );
            self.return_to_idle();
        }

        if self.mode == UiMode::Idle && self.tick_animation(now_ms) {
            self.pending_redraw = true;
        }

        if !self.pending_redraw {
            return TickResult::NoRender;
        }
        if let Some(last) = self.last_frame_ms
            && !has_elapsed(now_ms, last, self.config.frame_period_ms)
        {
            return TickResult::NoRender;
        }

        self.pending_redraw = false;
        self.last_frame_ms = Some(now_ms);
        TickResult::RenderRequested
    }

    fn tick_animation(&mut self, now_ms: u32) -> bool {
        if let Some(id) = self.duty_sprite {
            let interval = duty_cycle_interval(
                now_ms,
                self.config.fan_duty_period_ms,
                self.config.fan_fast_ms,
                self.config.fan_slow_ms,
            );
            self.animator.set_interval(id, interval);
        }
        self.animator.advance(now_ms)
    }

    pub const fn config(&self) -> &HmiConfig {
        &self.config
    }

    pub const fn mode(&self) -> UiMode {
        self.mode
    }

    pub const fn overlay(&self) -> Overlay {
        self.overlay
    }

    pub const fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    pub const fn carousel_index(&self) -> usize {
        self.carousel as usize
    }

    pub fn menu_cursor(&self) -> usize {
        self.walker.cursor()
    }

    pub fn menu_title(&self) -> &'static str {
        self.walker.current_page().label
    }

    /// Authoritative configuration for control logic.
    pub const fn live_settings(&self) -> &Settings {
        self.settings.live()
    }

    pub const fn staged_settings(&self) -> &Settings {
        self.settings.staged()
    }

    pub fn is_dirty(&self) -> bool {
        self.settings.is_dirty()
    }

    /// Advances every time staged settings are applied.
    pub const fn config_epoch(&self) -> u32 {
        self.settings.epoch()
    }

    pub const fn telemetry(&self) -> &Telemetry {
        &self.telemetry
    }
}
