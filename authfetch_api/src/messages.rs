//! Localized user-facing notification text.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Display language for notifications. Korean is the source locale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    Korean,
    English,
}

impl Locale {
    /// Resolves an optional locale code, falling back to the default when the
    /// code is missing or unsupported.
    pub fn resolve(code: Option<&str>) -> Self {
        code.and_then(|c| c.parse().ok()).unwrap_or_default()
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Korean => "ko",
            Self::English => "en",
        }
    }

    /// Title used for modal error dialogs.
    pub fn dialog_title(&self) -> &'static str {
        match self {
            Self::Korean => "오류",
            Self::English => "Error",
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    /// Accepts bare language codes and region-qualified tags (`ko-KR`, `en_US`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lang = s
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        match lang.as_str() {
            "ko" => Ok(Self::Korean),
            "en" => Ok(Self::English),
            _ => Err(format!("unsupported locale: {}", s)),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// The kind of notification raised for a failed call, before localization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    /// The request stage failed before anything was sent.
    RequestFailed,
    /// HTTP 401.
    LoginRequired,
    /// HTTP 403.
    AccessDenied,
    /// HTTP 500.
    InternalServerError,
    /// Any other status with a server-provided message, shown verbatim.
    ServerMessage(String),
    /// Any other status without a usable message.
    Unknown,
    /// The request went out and nothing came back.
    NoResponse,
    /// The request could not be prepared.
    RequestSetup,
}

impl Notice {
    pub fn text(&self, locale: Locale) -> Cow<'_, str> {
        let text = match (self, locale) {
            (Self::ServerMessage(message), _) => return Cow::Borrowed(message.as_str()),
            (Self::RequestFailed, Locale::Korean) => "요청 중 오류가 발생했습니다.",
            (Self::LoginRequired, Locale::Korean) => "로그인이 필요합니다.",
            (Self::AccessDenied, Locale::Korean) => "접근 권한이 없습니다.",
            (Self::InternalServerError, Locale::Korean) => "서버 내부 오류가 발생했습니다.",
            (Self::Unknown, Locale::Korean) => "알 수 없는 오류가 발생했습니다.",
            (Self::NoResponse, Locale::Korean) => "서버로부터 응답이 없습니다.",
            (Self::RequestSetup, Locale::Korean) => "요청을 준비하던 중 문제가 발생했습니다.",
            (Self::RequestFailed, Locale::English) => "An error occurred while sending the request.",
            (Self::LoginRequired, Locale::English) => "Login is required.",
            (Self::AccessDenied, Locale::English) => "Access denied.",
            (Self::InternalServerError, Locale::English) => "An internal server error occurred.",
            (Self::Unknown, Locale::English) => "An unknown error occurred.",
            (Self::NoResponse, Locale::English) => "No response from the server.",
            (Self::RequestSetup, Locale::English) => {
                "A problem occurred while preparing the request."
            }
        };
        Cow::Borrowed(text)
    }
}
