//! Inline styles for the diary editor layout.

pub const PAGE: &str = "max-width: 720px; margin: 0 auto; padding: 16px; font-family: Arial, sans-serif;";
pub const TAB_BAR: &str = "display: flex; gap: 8px; border-bottom: 1px solid #ccc; margin-bottom: 16px;";
pub const TAB_ACTIVE: &str = "padding: 8px 16px; border: none; border-bottom: 2px solid #1a73e8; background: none; font-weight: bold; cursor: pointer;";
pub const TAB_IDLE: &str = "padding: 8px 16px; border: none; background: none; cursor: pointer;";
pub const FIELD_ROW: &str = "display: flex; flex-direction: column; gap: 4px; margin-bottom: 12px;";
pub const FIELD_LABEL: &str = "font-size: 12px; color: #555;";
pub const FIELD_INPUT: &str = "padding: 6px 8px; border: 1px solid #ccc; border-radius: 4px;";
pub const FIELD_HINT: &str = "font-size: 12px; color: #c62828;";
pub const BUTTON_ROW: &str = "display: flex; gap: 8px; margin-top: 16px;";
pub const SAVE_BUTTON: &str = "padding: 8px 16px; background: #1a73e8; color: #fff; border: none; border-radius: 4px; cursor: pointer;";
pub const DISCARD_BUTTON: &str = "padding: 8px 16px; background: none; color: #555; border: 1px solid #ccc; border-radius: 4px; cursor: pointer;";
pub const LINE_ROW: &str = "display: flex; gap: 8px; align-items: center; margin-bottom: 8px;";
pub const ERROR_BANNER: &str = "background: #fdecea; color: #c62828; padding: 10px 12px; border-radius: 4px; margin-bottom: 16px;";
pub const TOTAL_ROW: &str = "margin-top: 8px; font-weight: bold; text-align: right;";
