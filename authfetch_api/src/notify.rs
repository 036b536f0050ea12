//! User notification capability.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Shows a short message to the user. Fire-and-forget.
pub trait Notifier: Send + Sync {
    fn show_message(&self, message: &str);
}

impl<T: Notifier + ?Sized> Notifier for Arc<T> {
    fn show_message(&self, message: &str) {
        (**self).show_message(message)
    }
}

/// Host platform. Decides how notifications are presented.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Platform {
    #[default]
    Android,
    Ios,
    Web,
    Desktop,
}

impl Platform {
    /// Android shows transient toasts; every other platform uses a modal
    /// dialog.
    pub fn uses_toast(&self) -> bool {
        matches!(self, Self::Android)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Android => "android",
            Self::Ios => "ios",
            Self::Web => "web",
            Self::Desktop => "desktop",
        }
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "android" => Ok(Self::Android),
            "ios" => Ok(Self::Ios),
            "web" => Ok(Self::Web),
            "desktop" => Ok(Self::Desktop),
            _ => Err(format!(
                "unknown platform: {} (expected android, ios, web, or desktop)",
                s
            )),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
