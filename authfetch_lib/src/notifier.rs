//! Console notification surfaces.
//!
//! [`ToastNotifier`] stands in for a transient toast and [`DialogNotifier`]
//! for a modal alert. Both write to a sink, stderr unless told otherwise.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use authfetch_api::{Locale, Notifier, Platform};

/// One-line transient message.
pub struct ToastNotifier<W: Write + Send = io::Stderr> {
    out: Mutex<W>,
}

impl ToastNotifier {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write + Send> ToastNotifier<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|e| e.into_inner())
    }
}

impl<W: Write + Send> Notifier for ToastNotifier<W> {
    fn show_message(&self, message: &str) {
        let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
        if let Err(e) = writeln!(out, "{}", message).and_then(|_| out.flush()) {
            tracing::warn!("Failed to show toast: {}", e);
        }
    }
}

/// Framed alert with a title line.
pub struct DialogNotifier<W: Write + Send = io::Stderr> {
    title: String,
    out: Mutex<W>,
}

impl DialogNotifier {
    pub fn stderr(title: impl Into<String>) -> Self {
        Self::new(title, io::stderr())
    }
}

impl<W: Write + Send> DialogNotifier<W> {
    pub fn new(title: impl Into<String>, out: W) -> Self {
        Self {
            title: title.into(),
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|e| e.into_inner())
    }
}

impl<W: Write + Send> Notifier for DialogNotifier<W> {
    fn show_message(&self, message: &str) {
        let rendered = render_dialog(&self.title, message);
        let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
        if let Err(e) = out.write_all(rendered.as_bytes()).and_then(|_| out.flush()) {
            tracing::warn!("Failed to show dialog: {}", e);
        }
    }
}

/// Renders a closed dialog box. Every row is padded to the widest of the
/// bracketed title and the message lines, counted in characters.
pub fn render_dialog(title: &str, message: &str) -> String {
    let heading = format!("[{}]", title);
    let rows: Vec<&str> = std::iter::once(heading.as_str())
        .chain(message.lines())
        .collect();
    let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
    let rule = format!("+{}+\n", "-".repeat(width + 2));

    let mut out = rule.clone();
    for row in rows {
        let pad = width - row.chars().count();
        out.push_str(&format!("| {}{} |\n", row, " ".repeat(pad)));
    }
    out.push_str(&rule);
    out
}

/// Picks the surface the platform would use: a toast on Android, a dialog
/// titled for `locale` everywhere else.
pub fn notifier_for(platform: Platform, locale: Locale) -> Arc<dyn Notifier> {
    if platform.uses_toast() {
        Arc::new(ToastNotifier::stderr())
    } else {
        Arc::new(DialogNotifier::stderr(locale.dialog_title()))
    }
}
