use std::fmt::Display;

use colored::{
    Color,
    Colorize,
};

use crate::config::Cluster;

#[derive(strum_macros::Display)]
#[strum(serialize_all = "UPPERCASE")]
enum Message {
    Info,
    Success,
    Warning,
    Error,
}

fn log(msg_ty: Message, label: impl Display, msg: impl Display) {
    let color = msg_ty.get_color();
    println!(
        "[{}] {} {}",
        msg_ty.to_string().color(color),
        label.to_string().color(LogColor::Debug),
        msg.to_string().bright_black()
    );
}

impl Message {
    fn get_color(&self) -> LogColor {
        match self {
            Self::Info => LogColor::Info,
            Self::Success => LogColor::Highlight,
            Self::Warning => LogColor::Warning,
            Self::Error => LogColor::Error,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub enum LogColor {
    Highlight,
    Debug,
    Error,
    Warning,
    Info,
    Gray,
    FadedGray,
}

/// Prints a right-aligned, colored `key: value` line.
///
/// ```ignore
/// print_kv!("Record", record_address);
/// print_kv!("Bytes", view.data.len(), LogColor::Highlight);
/// ```
#[macro_export]
macro_rules! print_kv {
    ( $key:expr, $value:expr $(,)? ) => {
        $crate::print_kv!($key, $value, $crate::logs::LogColor::Gray)
    };
    ( $key:expr, $value:expr, $color:expr $(,)? ) => {{
        use ::colored::Colorize;
        println!(
            "{:>16}: {}",
            ::std::string::ToString::to_string(&$key).color($crate::logs::LogColor::Debug),
            ::std::string::ToString::to_string(&$value).color($color)
        );
    }};
}

/// Logs a confirmed transaction's signature along with its explorer link.
pub fn log_signature(cluster: Cluster, signature: impl Display) {
    log_success("Signature", &signature);
    println!(
        "  {}",
        cluster.explorer_tx_url(signature).color(LogColor::FadedGray)
    );
}

/// Prints program log lines indented under the current transaction.
pub fn log_program_logs(logs: &[String]) {
    for line in logs {
        println!("    {}", line.color(LogColor::Gray));
    }
}

#[rustfmt::skip]
mod unformatted {
    use super::*;

    pub fn log_info(label: impl Display, msg: impl Display) { log(Message::Info, label, msg) }
    pub fn log_success(label: impl Display, msg: impl Display) { log(Message::Success, label, msg) }
    pub fn log_warning(label: impl Display, msg: impl Display) { log(Message::Warning, label, msg) }
    pub fn log_error(label: impl Display, msg: impl Display) { log(Message::Error, label, msg) }
    pub fn log_divider() { println!("--------------------------------------------------------------------------------"); }

    impl From<LogColor> for Color {
        fn from(value: LogColor) -> Color {
            match value {
                LogColor::Highlight  => Color::TrueColor { r: 255, g: 215, b: 87  },
                LogColor::Debug      => Color::TrueColor { r: 40, g: 100,  b: 153 },
                LogColor::Error      => Color::TrueColor { r: 255, g: 0,   b: 45  },
                LogColor::Warning    => Color::TrueColor { r: 180, g: 105, b: 0   },
                LogColor::Info       => Color::TrueColor { r: 0,   g: 95,  b: 255 },
                LogColor::Gray       => Color::TrueColor { r: 192, g: 192, b: 192 },
                LogColor::FadedGray  => Color::TrueColor { r: 95,  g: 95,  b: 95  },
            }
        }
    }
}

pub use unformatted::*;
