use embedded_hal::digital::InputPin;

use fanpanel_core::input::{
    Button, GestureEvent, InputProvider,
    gesture::GestureConfig,
    panel::{ButtonLevels, GesturePanel},
};

#[derive(Debug, Clone, Copy)]
pub struct ButtonConfig {
    active_low: bool,
    gestures: [GestureConfig; Button::COUNT],
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            active_low: true,
            gestures: [
                GestureConfig::stepping(),
                GestureConfig::stepping(),
                GestureConfig::command(),
                GestureConfig::command(),
            ],
        }
    }
}

impl ButtonConfig {
    pub const fn with_active_low(mut self, active_low: bool) -> Self {
        self.active_low = active_low;
        self
    }

    pub const fn with_gesture(mut self, button: Button, config: GestureConfig) -> Self {
        self.gestures[button.index()] = config;
        self
    }
}

#[derive(Debug)]
pub enum ButtonInputError<UpErr, DownErr, EnterErr, EscErr> {
    Up(UpErr),
    Down(DownErr),
    Enter(EnterErr),
    Esc(EscErr),
}

type ButtonResult<UpErr, DownErr, EnterErr, EscErr, T> =
    Result<T, ButtonInputError<UpErr, DownErr, EnterErr, EscErr>>;

/// Four push buttons on plain GPIO inputs.
///
/// Levels are sampled at most once per timestamp; gestures found in that
/// sample are handed out one per `poll_event` call.
#[derive(Debug)]
pub struct ButtonPanel<UP, DOWN, ENTER, ESC> {
    up: UP,
    down: DOWN,
    enter: ENTER,
    esc: ESC,
    active_low: bool,
    gestures: GesturePanel,
    last_sample_ms: Option<u32>,
}

impl<UP, DOWN, ENTER, ESC> ButtonPanel<UP, DOWN, ENTER, ESC>
where
    UP: InputPin,
    DOWN: InputPin,
    ENTER: InputPin,
    ESC: InputPin,
{
    pub fn new(up: UP, down: DOWN, enter: ENTER, esc: ESC, config: ButtonConfig) -> Self {
        Self {
            up,
            down,
            enter,
            esc,
            active_low: config.active_low,
            gestures: GesturePanel::new(config.gestures),
            last_sample_ms: None,
        }
    }

    pub fn is_pressed(&self, button: Button) -> bool {
        self.gestures.is_pressed(button)
    }

    fn read_levels(
        &mut self,
    ) -> ButtonResult<UP::Error, DOWN::Error, ENTER::Error, ESC::Error, ButtonLevels> {
        let up_high = self.up.is_high().map_err(ButtonInputError::Up)?;
        let down_high = self.down.is_high().map_err(ButtonInputError::Down)?;
        let enter_high = self.enter.is_high().map_err(ButtonInputError::Enter)?;
        let esc_high = self.esc.is_high().map_err(ButtonInputError::Esc)?;

        Ok([up_high, down_high, enter_high, esc_high]
            .map(|high| pressed_from_level(high, self.active_low)))
    }
}

impl<UP, DOWN, ENTER, ESC> InputProvider for ButtonPanel<UP, DOWN, ENTER, ESC>
where
    UP: InputPin,
    DOWN: InputPin,
    ENTER: InputPin,
    ESC: InputPin,
{
    type Error = ButtonInputError<UP::Error, DOWN::Error, ENTER::Error, ESC::Error>;

    fn poll_event(&mut self, now_ms: u32) -> Result<Option<GestureEvent>, Self::Error> {
        if let Some(event) = self.gestures.next_event() {
            return Ok(Some(event));
        }
        if self.last_sample_ms == Some(now_ms) {
            return Ok(None);
        }

        self.last_sample_ms = Some(now_ms);
        let levels = self.read_levels()?;
        self.gestures.sample(levels, now_ms);
        Ok(self.gestures.next_event())
    }
}

#[inline]
fn pressed_from_level(high: bool, active_low: bool) -> bool {
    if active_low { !high } else { high }
}

#[cfg(test)]
mod tests {
    use core::{cell::Cell, convert::Infallible};
    use std::rc::Rc;

    use embedded_hal::digital::{Error, ErrorKind, ErrorType};
    use fanpanel_core::input::GestureKind;

    use super::*;

    #[derive(Clone)]
    struct SharedPin(Rc<Cell<bool>>);

    impl SharedPin {
        fn released() -> Self {
            Self(Rc::new(Cell::new(true)))
        }

        fn set_high(&self, high: bool) {
            self.0.set(high);
        }
    }

    impl ErrorType for SharedPin {
        type Error = Infallible;
    }

    impl InputPin for SharedPin {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            Ok(self.0.get())
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            Ok(!self.0.get())
        }
    }

    #[derive(Debug)]
    struct PinFault;

    impl Error for PinFault {
        fn kind(&self) -> ErrorKind {
            ErrorKind::Other
        }
    }

    struct BrokenPin;

    impl ErrorType for BrokenPin {
        type Error = PinFault;
    }

    impl InputPin for BrokenPin {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            Err(PinFault)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            Err(PinFault)
        }
    }

    fn drain<P: InputProvider>(panel: &mut P, now_ms: u32) -> Option<GestureEvent> {
        let mut last = None;
        while let Ok(Some(event)) = panel.poll_event(now_ms) {
            last = Some(event);
        }
        last
    }

    #[test]
    fn active_low_double_click_on_enter() {
        let enter = SharedPin::released();
        let mut panel = ButtonPanel::new(
            SharedPin::released(),
            SharedPin::released(),
            enter.clone(),
            SharedPin::released(),
            ButtonConfig::default(),
        );

        assert_eq!(drain(&mut panel, 0), None);
        enter.set_high(false);
        assert_eq!(drain(&mut panel, 10), None);
        assert_eq!(drain(&mut panel, 12), None);
        assert!(panel.is_pressed(Button::Enter));

        enter.set_high(true);
        assert_eq!(drain(&mut panel, 60), None);
        assert_eq!(drain(&mut panel, 62), None);

        enter.set_high(false);
        assert_eq!(drain(&mut panel, 100), None);
        assert_eq!(
            drain(&mut panel, 102),
            Some(GestureEvent::double_click(Button::Enter))
        );
    }

    #[test]
    fn up_clicks_on_release_and_quick_repeats_are_not_merged() {
        let up = SharedPin::released();
        let mut panel = ButtonPanel::new(
            up.clone(),
            SharedPin::released(),
            SharedPin::released(),
            SharedPin::released(),
            ButtonConfig::default(),
        );

        for start in [0, 40] {
            up.set_high(false);
            assert_eq!(drain(&mut panel, start), None);
            assert_eq!(drain(&mut panel, start + 2), None);
            up.set_high(true);
            assert_eq!(drain(&mut panel, start + 20), None);
            assert_eq!(
                drain(&mut panel, start + 22),
                Some(GestureEvent::new(Button::Up, GestureKind::Click))
            );
        }
    }

    #[test]
    fn esc_click_resolves_after_window() {
        let esc = SharedPin::released();
        let mut panel = ButtonPanel::new(
            SharedPin::released(),
            SharedPin::released(),
            SharedPin::released(),
            esc.clone(),
            ButtonConfig::default(),
        );

        esc.set_high(false);
        drain(&mut panel, 0);
        drain(&mut panel, 2);
        esc.set_high(true);
        drain(&mut panel, 40);
        drain(&mut panel, 42);
        assert_eq!(drain(&mut panel, 200), None);
        assert_eq!(
            drain(&mut panel, 263),
            Some(GestureEvent::new(Button::Esc, GestureKind::Click))
        );
    }

    #[test]
    fn pin_errors_name_the_failing_button() {
        let mut panel = ButtonPanel::new(
            SharedPin::released(),
            SharedPin::released(),
            SharedPin::released(),
            BrokenPin,
            ButtonConfig::default(),
        );
        assert!(matches!(
            panel.poll_event(0),
            Err(ButtonInputError::Esc(PinFault))
        ));
    }
}
