use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThemeGalleryError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("テンプレートが見つかりません: {0}")]
    ThemeNotFound(String),

    #[error("サンプルファイルが見つかりません: {0}")]
    CodeFileNotFound(String),

    #[error("入力エラー: {0}")]
    Validation(String),

    #[error("対話入力エラー: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error(transparent)]
    Common(#[from] theme_gallery_common::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ThemeGalleryError>;
