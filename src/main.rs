use anyhow::Context;
use catalog_sync::{cli, config, logging, pipeline};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.into_command() {
        Commands::Sync { output, spreadsheet_id } => {
            println!("🛒 catalog-sync - カタログ同期\n");

            let config = Config::load()
                .context("設定の読み込みに失敗")?
                .with_overrides(spreadsheet_id, output);
            let doc = pipeline::run_sync(&config).await?;

            println!(
                "\n✅ 同期完了 (製品 {}件 / アドオン {}件)",
                doc.products.len(),
                doc.addons.len()
            );
        }

        Commands::Config { set_spreadsheet_id, set_output, show } => {
            // 環境変数の上書きを保存しないようファイルから直接読む
            let mut config = Config::load_from(&Config::config_path()?)?;

            if let Some(id) = set_spreadsheet_id {
                config.set_spreadsheet_id(id)?;
                println!("✔ スプレッドシートIDを設定しました");
            }

            if let Some(path) = set_output {
                config.set_output_path(path)?;
                println!("✔ 出力先を設定しました");
            }

            if show {
                println!("設定:");
                println!("  スプレッドシートID: {}", config.spreadsheet_id);
                println!(
                    "  gid: Categories={} / Products={} / Add-ons={}",
                    config.sheets.categories, config.sheets.products, config.sheets.addons
                );
                println!("  出力先: {}", config.output_path.display());
                println!("  ベースURL: {}", config.base_url);
                match config.timeout_seconds {
                    Some(secs) => println!("  タイムアウト: {}秒", secs),
                    None => println!("  タイムアウト: なし"),
                }
            }
        }
    }

    Ok(())
}
