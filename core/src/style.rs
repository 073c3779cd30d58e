use colored::Color;

#[macro_export]
macro_rules! print_success {
    ($($arg:tt)*) => {{
        use ::colored::Colorize as _;
        println!("{}", format!($($arg)*).green())
    }};
}

#[macro_export]
macro_rules! print_failure {
    ($($arg:tt)*) => {{
        use ::colored::Colorize as _;
        eprintln!("{}", format!($($arg)*).bright_red())
    }};
}

pub trait ColorTheme {
    fn color(&self) -> Color;
}

impl ColorTheme for log::Level {
    fn color(&self) -> Color {
        use log::Level::*;
        match self {
            Error => Color::BrightRed,
            Warn => Color::BrightYellow,
            Info => Color::Cyan,
            Debug => Color::Magenta,
            Trace => Color::Blue,
        }
    }
}
