//! アクセス申請フォーム
//!
//! 必須項目: 名前・メールアドレス（簡易パターンチェック）。
//! 検証エラー時は入力値を保持し、通知は出さない。

use crate::notification::{Notification, Notifier};
use regex::Regex;

lazy_static::lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

/// メールアドレスの簡易チェック
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email.trim())
}

/// 項目ごとのエラー
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: bool,
    pub email: bool,
}

impl FieldErrors {
    pub fn any(&self) -> bool {
        self.name || self.email
    }

    pub fn name_message(&self) -> Option<&'static str> {
        self.name.then_some("Please enter your name")
    }

    pub fn email_message(&self) -> Option<&'static str> {
        self.email.then_some("Please enter a valid email address")
    }
}

/// アクセス申請フォームの状態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessRequestForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
    errors: FieldErrors,
    submitted: bool,
}

impl AccessRequestForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> FieldErrors {
        self.errors
    }

    /// 直近の送信が成功したか
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// 入力値を検証（状態は変えない）
    pub fn validate(&self) -> FieldErrors {
        FieldErrors {
            name: self.name.trim().is_empty(),
            email: !is_valid_email(&self.email),
        }
    }

    /// 送信
    ///
    /// 成功時はエラーをクリアし、通知を1件だけ出して入力欄をリセットする。
    pub fn submit(&mut self, notifier: &mut impl Notifier) -> bool {
        self.errors = self.validate();
        if self.errors.any() {
            self.submitted = false;
            tracing::debug!(errors = ?self.errors, "アクセス申請の入力エラー");
            return false;
        }

        notifier.notify(Notification::AccessRequested {
            name: self.name.trim().to_string(),
        });
        tracing::info!(email = %self.email.trim(), "アクセス申請を受付");

        self.name.clear();
        self.email.clear();
        self.company.clear();
        self.message.clear();
        self.submitted = true;
        true
    }
}
