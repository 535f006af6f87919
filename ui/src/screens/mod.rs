pub mod faq;
pub mod history;
pub mod stake;
pub mod unstake;
