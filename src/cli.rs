use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "catalog-sync")]
#[command(about = "Google Sheetsの製品カタログをCPQ用JSONに変換", long_about = None)]
pub struct Cli {
    /// 省略時は sync
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// シートを取得してJSONを出力
    Sync {
        /// 出力JSONファイル（デフォルト: 設定ファイルの output_path）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// スプレッドシートID
        #[arg(long)]
        spreadsheet_id: Option<String>,
    },

    /// 設定を表示/編集
    Config {
        /// スプレッドシートIDを設定
        #[arg(long)]
        set_spreadsheet_id: Option<String>,

        /// 出力先を設定
        #[arg(long)]
        set_output: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

impl Cli {
    /// サブコマンド（省略時は引数なしの sync）
    ///
    /// オプションなしの config は --show 扱い。
    pub fn into_command(self) -> Commands {
        match self.command {
            Some(Commands::Config { set_spreadsheet_id: None, set_output: None, .. }) => {
                Commands::Config {
                    set_spreadsheet_id: None,
                    set_output: None,
                    show: true,
                }
            }
            Some(command) => command,
            None => Commands::Sync {
                output: None,
                spreadsheet_id: None,
            },
        }
    }
}
