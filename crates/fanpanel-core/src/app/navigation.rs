impl<IN, TS> HmiApp<IN, TS>
where
    IN: InputProvider,
    TS: TelemetrySource,
{
    fn enter_menu(&mut self, now_ms: u32) {
        self.settings.begin_stage();
        self.queue.flush();
        self.walker.reset();
        self.carousel = 0;
        self.overlay = Overlay::None;
        self.mode = UiMode::MenuRoot;
        self.last_input_ms = now_ms;
        self.pending_redraw = true;
        debug!("ui-nav: enter menu epoch={}", self.settings.epoch());
    }

    /// Leave any menu state for the idle screen. Unapplied edits are lost and
    /// the Settings subtree locks again.
    fn return_to_idle(&mut self) {
        self.settings.discard();
        self.queue.flush();
        self.walker.reset();
        self.carousel = 0;
        self.unlocked = false;
        self.overlay = Overlay::None;
        self.mode = UiMode::Idle;
        self.pending_redraw = true;
        debug!("ui-nav: return to idle");
    }

    fn request_exit(&mut self) {
        if self.settings.is_dirty() {
            debug!("ui-nav: exit requested with pending edits");
            self.queue.flush();
            self.overlay = Overlay::ConfirmDialog {
                selected: ConfirmOption::ApplyAndExit,
            };
            self.pending_redraw = true;
        } else {
            self.return_to_idle();
        }
    }

    fn resolve_confirm(&mut self, choice: ConfirmOption) {
        debug!("ui-nav: confirm choice={:?}", choice);
        match choice {
            ConfirmOption::ApplyAndExit => {
                self.settings.apply();
                self.return_to_idle();
            }
            ConfirmOption::DiscardAndExit => self.return_to_idle(),
            ConfirmOption::Cancel => {
                self.overlay = Overlay::None;
                self.pending_redraw = true;
            }
        }
    }

    fn open_password_prompt(&mut self) {
        debug!("ui-nav: password required");
        self.queue.flush();
        self.overlay = Overlay::PasswordPrompt(PasswordGate::new());
        self.pending_redraw = true;
    }

    fn drain_commands(&mut self) {
        while let Some(command) = self.queue.pop() {
            if self.mode == UiMode::Idle || self.overlay != Overlay::None {
                self.queue.flush();
                break;
            }

            let outcome = if self.walker.at_root() {
                self.apply_carousel_command(command)
            } else {
                self.walker
                    .apply(command, self.settings.staged_mut(), self.unlocked)
            };
            self.handle_walk_outcome(outcome);
        }
    }

    fn apply_carousel_command(&mut self, command: Command) -> WalkOutcome {
        let last = self.walker.root().children.len().saturating_sub(1) as u8;
        match command {
            Command::Up if self.carousel > 0 => {
                self.carousel -= 1;
                WalkOutcome::Moved
            }
            Command::Down if self.carousel < last => {
                self.carousel += 1;
                WalkOutcome::Moved
            }
            Command::Enter => self.walker.enter_root_child(
                self.carousel as usize,
                self.settings.staged(),
                self.unlocked,
            ),
            _ => WalkOutcome::Ignored,
        }
    }

    fn handle_walk_outcome(&mut self, outcome: WalkOutcome) {
        match outcome {
            WalkOutcome::Ignored => return,
            WalkOutcome::Blocked => {
                self.open_password_prompt();
                return;
            }
            WalkOutcome::Action(MenuAction::FactoryReset) => {
                info!("ui-nav: factory defaults staged");
                *self.settings.staged_mut() = Settings::factory();
            }
            WalkOutcome::Moved
            | WalkOutcome::Entered
            | WalkOutcome::Exited
            | WalkOutcome::EditStarted
            | WalkOutcome::ValueChanged
            | WalkOutcome::EditFinished => {}
        }

        self.mode = match self.walker.depth() {
            0 => UiMode::MenuRoot,
            depth => UiMode::Submenu { depth: depth as u8 },
        };
        self.pending_redraw = true;
    }
}
