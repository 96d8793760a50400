use chrono::Utc;
use rand::Rng;

/// Opaque proof that the challenge was passed. It never leaves the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptchaToken(String);

impl CaptchaToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A small sum the user has to solve before the form can be sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptchaChallenge {
    left: u8,
    right: u8,
}

impl CaptchaChallenge {
    pub fn generate() -> Self {
        let mut rng = rand::rng();
        Self::with_operands(rng.random_range(1..=9), rng.random_range(1..=9))
    }

    pub const fn with_operands(left: u8, right: u8) -> Self {
        Self { left, right }
    }

    pub fn question(&self) -> String {
        format!("{} + {} = ?", self.left, self.right)
    }

    fn answer(&self) -> u16 {
        u16::from(self.left) + u16::from(self.right)
    }
}

#[derive(Debug, Clone)]
pub struct CaptchaState {
    challenge: CaptchaChallenge,
    token: Option<CaptchaToken>,
}

impl CaptchaState {
    pub fn new() -> Self {
        Self::with_challenge(CaptchaChallenge::generate())
    }

    pub const fn with_challenge(challenge: CaptchaChallenge) -> Self {
        Self {
            challenge,
            token: None,
        }
    }

    pub const fn challenge(&self) -> CaptchaChallenge {
        self.challenge
    }

    pub fn token(&self) -> Option<&CaptchaToken> {
        self.token.as_ref()
    }

    pub fn is_solved(&self) -> bool {
        self.token.is_some()
    }

    /// Checks an answer. A wrong or unparsable answer drops any earlier token
    /// and rolls a new challenge.
    pub fn answer(&mut self, input: &str) -> bool {
        let correct = input
            .trim()
            .parse::<u16>()
            .is_ok_and(|value| value == self.challenge.answer());

        if correct {
            self.token = Some(CaptchaToken(format!(
                "local-{}-{}",
                Utc::now().timestamp_millis(),
                self.challenge.answer()
            )));
        } else {
            self.token = None;
            self.challenge = CaptchaChallenge::generate();
        }
        correct
    }

    /// Drops the token and starts over with a new challenge.
    pub fn clear(&mut self) {
        self.token = None;
        self.challenge = CaptchaChallenge::generate();
    }
}

impl Default for CaptchaState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_answer_yields_token() {
        let mut captcha = CaptchaState::with_challenge(CaptchaChallenge::with_operands(3, 4));
        assert_eq!(captcha.challenge().question(), "3 + 4 = ?");
        assert!(!captcha.is_solved());

        assert!(captcha.answer(" 7 "));
        assert!(captcha.token().is_some_and(|token| token.as_str().starts_with("local-")));
    }

    #[test]
    fn wrong_answer_clears_token() {
        let mut captcha = CaptchaState::with_challenge(CaptchaChallenge::with_operands(2, 2));
        assert!(captcha.answer("4"));

        assert!(!captcha.answer("5"));
        assert!(captcha.token().is_none());
        assert!(!captcha.answer("empat"));
    }

    #[test]
    fn generated_operands_are_single_digits() {
        for _ in 0..200 {
            let challenge = CaptchaChallenge::generate();
            assert!((1..=9).contains(&challenge.left));
            assert!((1..=9).contains(&challenge.right));
        }
    }

    #[test]
    fn generated_challenges_vary() {
        let first = CaptchaChallenge::generate();
        let differs = (0..200).any(|_| CaptchaChallenge::generate() != first);
        assert!(differs);
    }
}
