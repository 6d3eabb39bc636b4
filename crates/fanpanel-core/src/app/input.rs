impl<IN, TS> HmiApp<IN, TS>
where
    IN: InputProvider,
    TS: TelemetrySource,
{
    fn process_inputs(&mut self, now_ms: u32) {
        loop {
            match self.input.poll_event(now_ms) {
                Ok(Some(event)) => {
                    self.last_input_ms = now_ms;
                    self.apply_gesture(event, now_ms);
                    // Later gestures in this tick must see the resulting state.
                    self.drain_commands();
                }
                Ok(None) => break,
                Err(_) => {
                    warn!("ui-input: provider error, skipping this tick");
                    break;
                }
            }
        }
    }

    fn apply_gesture(&mut self, event: GestureEvent, now_ms: u32) {
        match self.overlay {
            Overlay::PasswordPrompt(gate) => self.apply_password_gesture(gate, event),
            Overlay::ConfirmDialog { selected } => self.apply_confirm_gesture(selected, event),
            Overlay::None => match self.mode {
                UiMode::Idle => {
                    if event == GestureEvent::double_click(Button::Enter) {
                        self.enter_menu(now_ms);
                    }
                }
                UiMode::MenuRoot | UiMode::Submenu { .. } => self.apply_menu_gesture(event),
            },
        }
    }

    fn apply_menu_gesture(&mut self, event: GestureEvent) {
        let command = match (event.kind, event.button) {
            (GestureKind::Click, Button::Up) => Some(Command::Up),
            (GestureKind::Click, Button::Down) => Some(Command::Down),
            (GestureKind::Click, Button::Enter) => Some(Command::Enter),
            (GestureKind::Click, Button::Esc) => Some(Command::Back),
            (GestureKind::DoubleClick, Button::Esc) => {
                self.request_exit();
                None
            }
            (GestureKind::LongPressRepeat, Button::Up) if self.walker.is_editing_numeric() => {
                Some(Command::Up)
            }
            (GestureKind::LongPressRepeat, Button::Down) if self.walker.is_editing_numeric() => {
                Some(Command::Down)
            }
            _ => None,
        };

        if let Some(command) = command {
            self.queue.push(command);
        }
    }

    fn apply_password_gesture(&mut self, mut gate: PasswordGate, event: GestureEvent) {
        match (event.kind, event.button) {
            (GestureKind::Click | GestureKind::LongPressRepeat, Button::Up) => gate.increment(),
            (GestureKind::Click | GestureKind::LongPressRepeat, Button::Down) => gate.decrement(),
            (GestureKind::Click, Button::Enter) => gate.focus_next(),
            (GestureKind::Click, Button::Esc) => gate.focus_prev(),
            (GestureKind::DoubleClick, Button::Enter) => {
                if gate.verify(&self.config.passcode) {
                    info!("ui-nav: settings unlocked");
                    self.unlocked = true;
                    self.overlay = Overlay::None;
                    // Re-activate the guarded entry so it opens right away.
                    self.queue.push(Command::Enter);
                    self.pending_redraw = true;
                    return;
                }
                debug!("ui-nav: wrong passcode");
            }
            (GestureKind::DoubleClick, Button::Esc) => {
                debug!("ui-nav: password prompt cancelled");
                self.overlay = Overlay::None;
                self.pending_redraw = true;
                return;
            }
            _ => return,
        }

        self.overlay = Overlay::PasswordPrompt(gate);
        self.pending_redraw = true;
    }

    fn apply_confirm_gesture(&mut self, selected: ConfirmOption, event: GestureEvent) {
        if event.kind != GestureKind::Click {
            return;
        }

        match event.button {
            Button::Up => self.set_confirm_selection(selected.previous()),
            Button::Down => self.set_confirm_selection(selected.next()),
            Button::Enter => self.resolve_confirm(selected),
            Button::Esc => self.resolve_confirm(ConfirmOption::Cancel),
        }
    }

    fn set_confirm_selection(&mut self, selected: ConfirmOption) {
        self.overlay = Overlay::ConfirmDialog { selected };
        self.pending_redraw = true;
    }
}
