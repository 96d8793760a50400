//! Blank spot report form: field state, CAPTCHA gate and the submission
//! lifecycle.

pub mod captcha;
pub mod form;
pub mod notice;
pub mod session;

pub use captcha::{CaptchaChallenge, CaptchaState, CaptchaToken};
pub use form::{ReportField, ReportForm, ReportPayload};
pub use notice::{Notice, NoticeKind};
pub use session::{ReportSession, SubmitBlocked, SubmitTicket};
