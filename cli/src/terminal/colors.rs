use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::Yellow;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const IP_ADDR: Color = Color::Cyan;
pub const PORT: Color = Color::BrightBlue;
pub const FAILURE: Color = Color::Red;
