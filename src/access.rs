//! 対話式アクセス申請
//!
//! 未指定の必須項目は dialoguer で入力を促し、入力エラー時は値を残したまま再入力する。

use crate::error::{Result, ThemeGalleryError};
use crate::notifier::ConsoleNotifier;
use dialoguer::Input;
use theme_gallery_common::AccessRequestForm;

/// 再入力の上限
const MAX_ATTEMPTS: usize = 3;

/// 引数から入力済みのフォームを作成
pub fn prefilled_form(
    name: Option<String>,
    email: Option<String>,
    company: Option<String>,
    message: Option<String>,
) -> AccessRequestForm {
    let mut form = AccessRequestForm::new();
    form.name = name.unwrap_or_default();
    form.email = email.unwrap_or_default();
    form.company = company.unwrap_or_default();
    form.message = message.unwrap_or_default();
    form
}

/// フォームを送信（必要なら対話入力）
pub fn run_access_request(mut form: AccessRequestForm, interactive: bool) -> Result<()> {
    let mut notifier = ConsoleNotifier;

    for attempt in 1..=MAX_ATTEMPTS {
        if form.submit(&mut notifier) {
            return Ok(());
        }

        let errors = form.errors();
        for message in [errors.name_message(), errors.email_message()].into_iter().flatten() {
            println!("✗ {}", message);
        }

        if !interactive || attempt == MAX_ATTEMPTS {
            break;
        }

        if errors.name {
            form.name = Input::new()
                .with_prompt("Name")
                .with_initial_text(form.name.clone())
                .interact_text()?;
        }
        if errors.email {
            form.email = Input::new()
                .with_prompt("Email")
                .with_initial_text(form.email.clone())
                .interact_text()?;
        }
    }

    Err(ThemeGalleryError::Validation(
        "名前とメールアドレスを確認してください".into(),
    ))
}
