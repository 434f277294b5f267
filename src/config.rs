//! Application-level configuration constants.

// Page
pub const APP_TITLE: &str = "Cricket Stats Dashboard";

// Dropdowns
pub const PLAYER_SELECT_ID: &str = "playerSelect";
pub const PLAYER_SELECT_LABEL: &str = "Players";
pub const PLAYER_PLACEHOLDER: &str = "Select a player";
pub const TEAM_SELECT_ID: &str = "teamSelect";
pub const TEAM_SELECT_LABEL: &str = "Optimal Team";
pub const TEAM_PLACEHOLDER: &str = "Select an opponent";

// Player option buttons
pub const INTRODUCTION_BUTTON: &str = "Player Introduction";

// Image sizes (px)
pub const CHART_WIDTH: u32 = 800;
pub const CHART_HEIGHT: u32 = 600;
pub const PORTRAIT_WIDTH: u32 = 400;
pub const PORTRAIT_HEIGHT: u32 = 500;
