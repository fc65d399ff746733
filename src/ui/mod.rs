pub mod format;
pub mod pages;
pub mod widgets;
