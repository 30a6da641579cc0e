use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "themes")]
#[command(about = "Webサイトテンプレートのカタログ閲覧・保存ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// カタログJSONファイル（省略時は組み込みカタログ）
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// カテゴリ一覧を表示
    Categories,

    /// テンプレート一覧を表示
    List {
        /// カテゴリID (all/landing/dashboard/portfolio/ecommerce/blog)
        #[arg(short, long)]
        category: Option<String>,

        /// おすすめのみ
        #[arg(long, conflicts_with_all = ["category", "new"])]
        featured: bool,

        /// 新着のみ
        #[arg(long, conflicts_with = "category")]
        new: bool,
    },

    /// テンプレートの詳細を表示
    Show {
        /// テンプレートID
        #[arg(required = true)]
        id: String,
    },

    /// サンプルコードを表示
    Code {
        /// テンプレートID
        #[arg(required = true)]
        id: String,

        /// 表示するファイル名（省略時は一覧のみ）
        #[arg(short, long)]
        file: Option<String>,

        /// ダウンロード（通知のみ）
        #[arg(long)]
        download: bool,
    },

    /// 保存済みプロジェクト
    Saved {
        #[command(subcommand)]
        action: SavedAction,
    },

    /// アクセス申請フォーム
    RequestAccess {
        /// 名前（省略時は対話入力）
        #[arg(long)]
        name: Option<String>,

        /// メールアドレス（省略時は対話入力）
        #[arg(long)]
        email: Option<String>,

        /// 会社名
        #[arg(long)]
        company: Option<String>,

        /// メッセージ
        #[arg(long)]
        message: Option<String>,

        /// 対話入力を行わない
        #[arg(long)]
        no_input: bool,
    },

    /// 設定を表示・変更
    Config {
        /// 保存済みリストのパスを設定
        #[arg(long)]
        set_saved_path: Option<PathBuf>,

        /// 既定のカテゴリを設定
        #[arg(long)]
        set_default_category: Option<String>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Subcommand)]
pub enum SavedAction {
    /// 保存済み一覧
    List,

    /// 保存/削除を切り替え
    Toggle {
        #[arg(required = true)]
        id: String,
    },

    /// 削除
    Remove {
        #[arg(required = true)]
        id: String,
    },
}
