use clap::Parser;
use theme_gallery::{access, cli, config, error, logging, notifier, open_saved_projects, render};
use cli::{Cli, Commands, SavedAction};
use config::Config;
use error::{Result, ThemeGalleryError};
use notifier::ConsoleNotifier;
use theme_gallery_common::{
    code_files_for, code_samples::find_code_file, Catalog, CategoryView, Notification, Notifier,
    SaveOutcome,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = Config::load()?;

    let custom_catalog = match &cli.catalog {
        Some(path) => Some(Catalog::from_file(path)?),
        None => None,
    };
    let catalog: &Catalog = custom_catalog.as_ref().unwrap_or_else(|| Catalog::builtin());
    let tag_limit = config.compact_tag_count;

    match cli.command {
        Commands::Categories => {
            println!("{}", render::category_table(catalog.categories(), &config.default_category));
        }

        Commands::List { category, featured, new } => {
            if featured {
                println!("⭐ Featured Templates\n");
                let themes = catalog.featured_themes();
                println!("{}", render::theme_list(&themes, tag_limit, render::EMPTY_FEATURED));
            } else if new {
                println!("🆕 Latest Templates\n");
                let themes = catalog.new_themes();
                println!("{}", render::theme_list(&themes, tag_limit, render::EMPTY_NEW));
            } else {
                let initial = category.as_deref().unwrap_or(&config.default_category);
                let view = CategoryView::new(catalog, Some(initial));
                println!("📂 {} ({}件)\n", view.active_category(), view.filtered_themes().len());
                println!(
                    "{}",
                    render::theme_list(view.filtered_themes(), tag_limit, render::EMPTY_CATEGORY)
                );
            }
        }

        Commands::Show { id } => match catalog.get_theme_by_id(&id) {
            Some(theme) => {
                let saved = open_saved_projects(&config)?;
                println!("{}", render::theme_details(theme, saved.is_saved(&theme.id)));
            }
            None => println!("{}", render::not_found(&id)),
        },

        Commands::Code { id, file, download } => {
            let Some(theme) = catalog.get_theme_by_id(&id) else {
                println!("{}", render::not_found(&id));
                return Ok(());
            };

            let files = code_files_for(theme);
            match file {
                Some(name) => {
                    let code_file = find_code_file(&files, &name)
                        .ok_or_else(|| ThemeGalleryError::CodeFileNotFound(name.clone()))?;
                    println!("// {} - {}\n", code_file.name, code_file.description);
                    println!("{}", code_file.code);
                }
                None => {
                    println!("📄 {} - Complete Code\n", theme.title);
                    println!("{}", render::code_file_index(&files));
                }
            }

            if download {
                ConsoleNotifier.notify(Notification::DownloadStarted);
            }
        }

        Commands::Saved { action } => {
            let mut saved = open_saved_projects(&config)?;
            match action {
                SavedAction::List => {
                    println!("📁 My Projects ({}件)\n", saved.len());
                    let themes: Vec<_> = saved.items().iter().collect();
                    println!(
                        "{}",
                        render::theme_list(&themes, tag_limit, render::EMPTY_SAVED)
                    );
                }
                SavedAction::Toggle { id } => {
                    let theme = catalog
                        .get_theme_by_id(&id)
                        .ok_or_else(|| ThemeGalleryError::ThemeNotFound(id.clone()))?;
                    let notification = match saved.toggle_saved(theme)? {
                        SaveOutcome::Added => Notification::ProjectSaved { title: theme.title.clone() },
                        SaveOutcome::Removed => Notification::ProjectRemoved { title: theme.title.clone() },
                    };
                    ConsoleNotifier.notify(notification);
                }
                SavedAction::Remove { id } => {
                    // カタログから消えたテーマも削除できるよう保存済みリストから探す
                    let title = saved
                        .items()
                        .iter()
                        .find(|t| t.id == id)
                        .map(|t| t.title.clone());
                    match title {
                        Some(title) => {
                            saved.remove(&id)?;
                            ConsoleNotifier.notify(Notification::ProjectRemoved { title });
                        }
                        None => println!("保存済みリストにありません: {}", id),
                    }
                }
            }
        }

        Commands::RequestAccess { name, email, company, message, no_input } => {
            println!("✉ Request Access\n");
            let form = access::prefilled_form(name, email, company, message);
            access::run_access_request(form, !no_input)?;
        }

        Commands::Config { set_saved_path, set_default_category, show } => {
            let mut config = config;
            let mut changed = false;

            if let Some(path) = set_saved_path {
                config.saved_projects_path = Some(path);
                changed = true;
            }

            if let Some(category) = set_default_category {
                config.set_default_category(&category)?;
                changed = true;
            }

            if changed {
                config.save()?;
                println!("✔ 設定を保存しました");
            }

            if show || !changed {
                println!("設定:");
                println!("  設定ファイル: {}", Config::config_path()?.display());
                println!("  保存済みリスト: {}", config.saved_projects_path()?.display());
                println!("  既定カテゴリ: {}", config.default_category);
                println!("  タグ表示数: {}", config.compact_tag_count);
            }
        }
    }

    Ok(())
}
