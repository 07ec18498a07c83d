//! Alert classification and the single alert surface.
//!
//! Collaborator failures arrive as raw signal strings; classification maps
//! them onto a closed, coded, bilingual taxonomy. Unknown signals degrade to
//! a generic unknown-error code instead of propagating raw messages upward.
//! At most one alert is visible at a time: raising a new one replaces the
//! current one and resets its dismissal deadline.

use std::time::{Duration, Instant};

use serde::Serialize;

/// How long a raised alert stays visible without explicit dismissal.
pub const DISMISS_AFTER: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Success,
}

/// Which collaborator surface raised the signal; selects the code table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertDomain {
    Decode,
    Send,
}

/// Closed set of known collaborator signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    InvalidFileType,
    InvalidUrlParameter,
    FileNotFound,
    OsNotSupported,
    InternalError,
    ConnectionError,
    NoResult,
    SendSuccess,
    Unknown,
}

impl Signal {
    /// Parse a raw signal string; anything unrecognized is `Unknown`.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "Invalid file type" => Signal::InvalidFileType,
            "Invalid URL parameter: 'mode'"
            | "Invalid URL parameter: 'modulation'"
            | "Invalid URL parameter: 'protocol'" => Signal::InvalidUrlParameter,
            "File not found" => Signal::FileNotFound,
            "OS not supported" => Signal::OsNotSupported,
            "Internal Error" => Signal::InternalError,
            "Connection error" => Signal::ConnectionError,
            "No result" => Signal::NoResult,
            "Send success" => Signal::SendSuccess,
            _ => Signal::Unknown,
        }
    }
}

/// Bilingual message lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalizedText {
    pub ja: Vec<String>,
    pub en: Vec<String>,
}

impl LocalizedText {
    fn new(ja: &[&str], en: &[&str]) -> Self {
        Self {
            ja: ja.iter().map(|s| s.to_string()).collect(),
            en: en.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// One classified alert as shown on the alert surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    /// Stable alert code (e.g., `ED-03`).
    pub code: String,
    pub severity: Severity,
    /// Short bilingual heading.
    pub title: LocalizedText,
    /// Bilingual detail lines.
    pub detail: LocalizedText,
}

/// Classify a raw signal into a coded alert. Total: unknown signals map to
/// the domain's generic code.
///
/// Each severity has its own table; a signal presented under a severity
/// that does not list it falls to the generic code, so a mismatched pair
/// can never produce a known code with the wrong severity.
///
/// # Examples
/// ```
/// use axscope_core::alert::{AlertDomain, Severity, classify};
///
/// let alert = classify(AlertDomain::Decode, Severity::Error, "File not found");
/// assert_eq!(alert.code, "ED-03");
/// let alert = classify(AlertDomain::Decode, Severity::Error, "anything else");
/// assert_eq!(alert.code, "ED-00");
/// ```
pub fn classify(domain: AlertDomain, severity: Severity, raw: &str) -> Alert {
    let title = title_for(severity);
    let (code, detail) = match (domain, severity, Signal::parse(raw)) {
        (AlertDomain::Decode, Severity::Error, Signal::InvalidFileType) => (
            "ED-01",
            LocalizedText::new(
                &[
                    "選択されたファイルの拡張子が'wav'ではありません",
                    "WAVEファイルを選択してください",
                ],
                &[
                    "The extension of the selected file is not 'wav'",
                    "Please select a WAVE file",
                ],
            ),
        ),
        (AlertDomain::Decode, Severity::Error, Signal::InvalidUrlParameter) => (
            "ED-02",
            LocalizedText::new(
                &["選択された通信モードの値が不正です"],
                &["The value of the selected communication mode is invalid"],
            ),
        ),
        (AlertDomain::Decode, Severity::Error, Signal::FileNotFound) => (
            "ED-03",
            LocalizedText::new(
                &["選択されたファイルが存在しません"],
                &["The selected file does not exist"],
            ),
        ),
        (AlertDomain::Decode, Severity::Error, Signal::OsNotSupported) => (
            "ED-04",
            LocalizedText::new(
                &["本ソフトウェアはお使いのOSに対応していません"],
                &["This software is not compatible with your OS"],
            ),
        ),
        (AlertDomain::Decode, Severity::Error, Signal::InternalError) => (
            "ED-05",
            LocalizedText::new(
                &[
                    "内部エラーが発生しました",
                    "ソフトウェアの再インストールをお試しください",
                ],
                &[
                    "An internal error has occurred",
                    "Please try reinstalling the software",
                ],
            ),
        ),
        (AlertDomain::Decode, Severity::Error, Signal::ConnectionError) => (
            "ED-06",
            LocalizedText::new(
                &[
                    "デコードに失敗しました",
                    "ソフトウェアの再起動をお試しください",
                ],
                &["Failed to decode", "Please try restarting the software"],
            ),
        ),
        (AlertDomain::Decode, Severity::Warning, Signal::NoResult) => (
            "WD-01",
            LocalizedText::new(&["デコード結果が空です"], &["Decoded result is empty"]),
        ),
        (AlertDomain::Send, Severity::Error, Signal::ConnectionError) => (
            "ES-01",
            LocalizedText::new(
                &["送信に失敗しました", "ネットワークの状態をご確認ください"],
                &["Failed to send", "Please check the network status"],
            ),
        ),
        (AlertDomain::Send, Severity::Success, Signal::SendSuccess) => (
            "SS-01",
            LocalizedText::new(&["送信に成功しました"], &["Succeeded in sending"]),
        ),
        (AlertDomain::Decode, _, _) => ("ED-00", unknown_error_text()),
        (AlertDomain::Send, _, _) => ("ES-00", unknown_error_text()),
    };

    Alert {
        code: code.to_string(),
        severity,
        title,
        detail,
    }
}

fn unknown_error_text() -> LocalizedText {
    LocalizedText::new(
        &["不明なエラーが発生しました"],
        &["An unknown error has occurred"],
    )
}

fn title_for(severity: Severity) -> LocalizedText {
    match severity {
        Severity::Error => LocalizedText::new(&["エラー"], &["Error"]),
        Severity::Warning => LocalizedText::new(&["警告"], &["Warning"]),
        Severity::Success => LocalizedText::new(&["成功"], &["Success"]),
    }
}

/// Owner of the single alert surface and its dismissal deadline.
///
/// Raising is cancel-if-present then schedule: the previous alert and its
/// pending deadline are always replaced together, so a stale deadline can
/// never dismiss a newer alert. Time is injected to keep expiry
/// deterministic under test.
#[derive(Debug, Default)]
pub struct AlertManager {
    current: Option<Alert>,
    deadline: Option<Instant>,
}

impl AlertManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show an alert, replacing the current one and resetting the deadline.
    pub fn raise(&mut self, alert: Alert, now: Instant) {
        self.deadline = Some(now + DISMISS_AFTER);
        self.current = Some(alert);
    }

    /// Explicit user dismissal: clears the surface and the deadline.
    pub fn dismiss(&mut self) {
        self.current = None;
        self.deadline = None;
    }

    /// The currently visible alert, expiring it first if its deadline has
    /// passed.
    pub fn current(&mut self, now: Instant) -> Option<&Alert> {
        if let Some(deadline) = self.deadline {
            if now >= deadline {
                self.dismiss();
            }
        }
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_decode_signals_map_to_codes() {
        let cases = [
            ("Invalid file type", "ED-01"),
            ("Invalid URL parameter: 'mode'", "ED-02"),
            ("Invalid URL parameter: 'modulation'", "ED-02"),
            ("Invalid URL parameter: 'protocol'", "ED-02"),
            ("File not found", "ED-03"),
            ("OS not supported", "ED-04"),
            ("Internal Error", "ED-05"),
            ("Connection error", "ED-06"),
        ];
        for (signal, code) in cases {
            let alert = classify(AlertDomain::Decode, Severity::Error, signal);
            assert_eq!(alert.code, code, "signal {signal:?}");
            assert_eq!(alert.severity, Severity::Error);
            assert!(!alert.detail.ja.is_empty());
            assert!(!alert.detail.en.is_empty());
        }
    }

    #[test]
    fn empty_result_is_a_warning() {
        let alert = classify(AlertDomain::Decode, Severity::Warning, "No result");
        assert_eq!(alert.code, "WD-01");
        assert_eq!(alert.severity, Severity::Warning);
    }

    #[test]
    fn send_table_is_separate() {
        let alert = classify(AlertDomain::Send, Severity::Error, "Connection error");
        assert_eq!(alert.code, "ES-01");
        let alert = classify(AlertDomain::Send, Severity::Success, "Send success");
        assert_eq!(alert.code, "SS-01");
    }

    #[test]
    fn signals_off_their_severity_table_fall_to_generic() {
        // a warning-table signal raised as an error must not yield WD-01
        let alert = classify(AlertDomain::Decode, Severity::Error, "No result");
        assert_eq!(alert.code, "ED-00");
        assert_eq!(alert.severity, Severity::Error);

        // a success-table signal raised as an error must not yield SS-01
        let alert = classify(AlertDomain::Send, Severity::Error, "Send success");
        assert_eq!(alert.code, "ES-00");
        assert_eq!(alert.severity, Severity::Error);

        // an error-table signal raised as a warning
        let alert = classify(AlertDomain::Decode, Severity::Warning, "File not found");
        assert_eq!(alert.code, "ED-00");
        assert_eq!(alert.severity, Severity::Warning);
    }

    #[test]
    fn unknown_signals_degrade_to_generic_codes() {
        let alert = classify(AlertDomain::Decode, Severity::Error, "anything-unrecognized");
        assert_eq!(alert.code, "ED-00");
        assert_eq!(alert.detail.en, vec!["An unknown error has occurred"]);

        let alert = classify(AlertDomain::Send, Severity::Warning, "???");
        assert_eq!(alert.code, "ES-00");
    }

    #[test]
    fn alert_expires_after_dismiss_interval() {
        let mut manager = AlertManager::new();
        let t0 = Instant::now();
        manager.raise(classify(AlertDomain::Decode, Severity::Warning, "No result"), t0);

        assert!(manager.current(t0).is_some());
        assert!(manager.current(t0 + DISMISS_AFTER - Duration::from_millis(1)).is_some());
        assert!(manager.current(t0 + DISMISS_AFTER).is_none());
        // stays cleared afterwards
        assert!(manager.current(t0).is_none());
    }

    #[test]
    fn raising_again_replaces_alert_and_deadline() {
        let mut manager = AlertManager::new();
        let t0 = Instant::now();
        manager.raise(classify(AlertDomain::Decode, Severity::Error, "File not found"), t0);

        // second raise just before the first would expire
        let t1 = t0 + DISMISS_AFTER - Duration::from_millis(1);
        manager.raise(classify(AlertDomain::Decode, Severity::Error, "Connection error"), t1);

        // the first deadline has passed but the second alert is still up
        let t2 = t0 + DISMISS_AFTER;
        assert_eq!(manager.current(t2).unwrap().code, "ED-06");
        assert!(manager.current(t1 + DISMISS_AFTER).is_none());
    }

    #[test]
    fn explicit_dismiss_clears_immediately() {
        let mut manager = AlertManager::new();
        let t0 = Instant::now();
        manager.raise(classify(AlertDomain::Send, Severity::Success, "Send success"), t0);
        manager.dismiss();
        assert!(manager.current(t0).is_none());
    }
}
