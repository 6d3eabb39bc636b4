//! Four-digit code entry guarding the Settings subtree.

pub const CODE_LEN: usize = 4;

/// Digits 0..=9, most significant first.
pub type PassCode = [u8; CODE_LEN];

/// Factory code.
pub const DEFAULT_PASSCODE: PassCode = [1, 0, 0, 1];

/// Code entry state while the password prompt is open.
///
/// Only the four digits present when [`PasswordGate::verify`] runs matter;
/// how they were reached is irrelevant. No attempt counter, no lockout.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PasswordGate {
    digits: PassCode,
    focus: u8,
    wrong: bool,
}

impl PasswordGate {
    pub const fn new() -> Self {
        Self {
            digits: [0; CODE_LEN],
            focus: 0,
            wrong: false,
        }
    }

    pub const fn digits(&self) -> PassCode {
        self.digits
    }

    pub const fn focus(&self) -> usize {
        self.focus as usize
    }

    pub const fn is_wrong(&self) -> bool {
        self.wrong
    }

    pub fn increment(&mut self) {
        let digit = &mut self.digits[self.focus as usize];
        *digit = (*digit + 1) % 10;
        self.wrong = false;
    }

    pub fn decrement(&mut self) {
        let digit = &mut self.digits[self.focus as usize];
        *digit = (*digit + 9) % 10;
        self.wrong = false;
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % CODE_LEN as u8;
        self.wrong = false;
    }

    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + CODE_LEN as u8 - 1) % CODE_LEN as u8;
        self.wrong = false;
    }

    /// Compare the entered digits with `code`, raising the wrong-code flag on
    /// mismatch.
    pub fn verify(&mut self, code: &PassCode) -> bool {
        let matches = self.digits.iter().zip(code.iter()).all(|(a, b)| a == b);
        self.wrong = !matches;
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enter(gate: &mut PasswordGate, digits: PassCode) {
        for digit in digits {
            while gate.digits()[gate.focus()] != digit {
                gate.increment();
            }
            gate.focus_next();
        }
    }

    #[test]
    fn exactly_one_code_of_ten_thousand_is_accepted() {
        let mut accepted = 0;
        for value in 0..10_000u16 {
            let code = [
                (value / 1000 % 10) as u8,
                (value / 100 % 10) as u8,
                (value / 10 % 10) as u8,
                (value % 10) as u8,
            ];
            let mut gate = PasswordGate::new();
            enter(&mut gate, code);
            if gate.verify(&DEFAULT_PASSCODE) {
                accepted += 1;
                assert_eq!(code, DEFAULT_PASSCODE);
            } else {
                assert!(gate.is_wrong());
            }
        }
        assert_eq!(accepted, 1);
    }

    #[test]
    fn entry_order_does_not_matter() {
        let mut gate = PasswordGate::new();
        // Fill the last digit first, walking backwards with wraparound.
        gate.focus_prev();
        gate.increment();
        gate.focus_prev();
        gate.focus_prev();
        gate.focus_prev();
        gate.decrement();
        gate.decrement();
        gate.increment();
        gate.increment();
        gate.increment();
        assert_eq!(gate.focus(), 0);
        assert!(gate.verify(&DEFAULT_PASSCODE));
    }

    #[test]
    fn digits_wrap_and_edits_clear_wrong_flag() {
        let mut gate = PasswordGate::new();
        gate.decrement();
        assert_eq!(gate.digits()[0], 9);
        assert!(!gate.verify(&DEFAULT_PASSCODE));
        assert!(gate.is_wrong());
        gate.increment();
        assert!(!gate.is_wrong());
        assert_eq!(gate.digits()[0], 0);
    }
}
