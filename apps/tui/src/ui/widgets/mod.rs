pub mod captcha;
pub mod chrome;
pub mod map;
pub mod popup;
pub mod search;
pub mod tables;
pub mod toast;
pub mod tower;
