//! Reusable widgets and page chrome.

pub mod icons;
pub mod info_panel;
pub mod legend;
pub mod navigation;
pub mod sankey;
