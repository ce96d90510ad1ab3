pub const WINDOW_TITLE: &str = "Roster";
pub const WINDOW_SIZE: [f32; 2] = [960.0, 720.0];

pub const HEADING_TITLE: &str = "CRUDS using Rust";
pub const HEADING_FORM: &str = "Please fill the form:";
pub const HEADING_TABLE: &str = "Registered Entry:";
pub const NOTICE_TITLE: &str = "Notice";
pub const NOT_IMPLEMENTED_HINT: &str = "Not implemented";

pub const COLUMN_SELECT: &str = "Select";
pub const COLUMN_ID: &str = "ID";
pub const COLUMN_ACTIONS: &str = "Update/Delete";

pub const INPUT_WIDTH: f32 = 180.0;
pub const GRID_SPACING: [f32; 2] = [16.0, 6.0];
pub const BUTTON_ROW_HEIGHT: f32 = 48.0;
pub const MIN_TABLE_HEIGHT: f32 = 120.0;
