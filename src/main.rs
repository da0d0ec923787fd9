use clap::Parser;
use odds_filter::{cli, config, error, loader, render, shell};
use cli::{Cli, Commands};
use config::{Config, ConfigEdit};
use error::Result;
use odds_filter_common::{pipeline, FilterCriteria, OddsTriple};

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("✖ {}", e);
        std::process::exit(1);
    }
}

fn init_logger(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Filter { file, home, draw, away, tolerance, mode, json } => {
            let config = Config::load()?;
            let dataset = loader::load_dataset(&file, &config.columns)?;
            let criteria = FilterCriteria::new(
                OddsTriple::new(home, draw, away),
                tolerance.unwrap_or(config.default_tolerance),
                mode.unwrap_or(config.default_policy),
            )?;
            log::debug!("条件: {:?}", criteria);

            let outcome = pipeline::run(&dataset, &criteria);
            render::print_outcome(&outcome, &config.columns, json)?;
        }

        Commands::Preview { file, rows } => {
            let config = Config::load()?;
            let dataset = loader::load_dataset(&file, &config.columns)?;
            println!("✔ Data Loaded Successfully! ({}行)\n", dataset.len());
            let n = rows.unwrap_or(config.preview_rows);
            print!("{}", render::render_preview(dataset.head(n), &config.columns));
        }

        Commands::Interactive { file } => {
            let config = Config::load()?;
            println!("⚽ odds-filter - Match Odds Filter\n");
            shell::run_interactive(&file, &config)?;
        }

        Commands::Config { set_column, set_tolerance, set_mode, reset, show } => {
            // 設定ファイルの範囲チェックはここでは行わない（--reset で復旧できるように）
            let edit = ConfigEdit { set_column, set_tolerance, set_mode, reset };
            let changed = edit.changes_anything();
            let config_path = Config::config_path()?;
            let config = Config::edit_at(&config_path, &edit)?;

            if changed {
                println!("✔ 設定を保存しました: {}", config_path.display());
            }

            if show || !changed {
                println!("設定:");
                println!("  列 (対戦): {}", config.columns.label);
                println!("  列 (結果): {}", config.columns.score);
                println!("  列 (ホーム): {}", config.columns.home_odds);
                println!("  列 (引き分け): {}", config.columns.draw_odds);
                println!("  列 (アウェイ): {}", config.columns.away_odds);
                println!("  列 (日付): {}", config.columns.date);
                println!("  許容幅: {}", config.default_tolerance);
                println!("  絞り込みモード: {}", config.default_policy);
                println!("  プレビュー行数: {}", config.preview_rows);
            }
        }
    }

    Ok(())
}
