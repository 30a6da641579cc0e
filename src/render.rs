//! 端末向けの表示
//!
//! 文字列を組み立てて返すだけ。出力は呼び出し側で行う。

use theme_gallery_common::{Category, CodeFile, Theme};

/// 一覧が空のときの表示
pub const EMPTY_FEATURED: &str = "おすすめのテンプレートはありません";
pub const EMPTY_NEW: &str = "新着のテンプレートはありません";
pub const EMPTY_CATEGORY: &str = "該当するテンプレートはありません";
pub const EMPTY_SAVED: &str = "保存済みのプロジェクトはありません。`themes list` でテンプレートを探してください";

/// 一覧の1行（コンパクト表示）
pub fn theme_line(theme: &Theme, tag_limit: usize) -> String {
    let mut badges = String::new();
    if theme.is_featured {
        badges.push_str(" [Featured]");
    }
    if theme.is_new {
        badges.push_str(" [New]");
    }

    let tags = theme.compact_tags(tag_limit).join(", ");
    format!("{:<24} {}{}  ({})", theme.id, theme.title, badges, tags)
}

/// 一覧表示（空のときはメッセージ）
pub fn theme_list(themes: &[&Theme], tag_limit: usize, empty_message: &str) -> String {
    if themes.is_empty() {
        return empty_message.to_string();
    }
    themes
        .iter()
        .map(|t| theme_line(t, tag_limit))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn category_table(categories: &[Category], active: &str) -> String {
    categories
        .iter()
        .map(|c| {
            let marker = if c.id == active { "*" } else { " " };
            format!("{} {:<10} {}", marker, c.id, c.label)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// 詳細表示
pub fn theme_details(theme: &Theme, is_saved: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", theme.title));
    out.push_str(&format!("{}\n\n", theme.description));
    out.push_str(&format!("  ID:       {}\n", theme.id));
    out.push_str(&format!("  カテゴリ: {}\n", theme.category.label()));
    out.push_str(&format!("  タグ:     {}\n", theme.tags.join(", ")));
    out.push_str(&format!("  画像:     {}\n", theme.image));
    out.push_str(&format!(
        "  保存:     {}\n",
        if is_saved { "保存済み" } else { "未保存" }
    ));
    out.push_str(&format!(
        "\nThis {} template is perfect for creating professional websites quickly.",
        theme.category
    ));
    out
}

pub fn not_found(id: &str) -> String {
    format!(
        "Template Not Found: '{}'\nThe template you're looking for doesn't exist. `themes list` で一覧を確認してください",
        id
    )
}

/// サンプルファイルの一覧
pub fn code_file_index(files: &[CodeFile]) -> String {
    files
        .iter()
        .map(|f| format!("  {:<28} {}", f.name, f.description))
        .collect::<Vec<_>>()
        .join("\n")
}
