use afterschool_directory::DirectoryError;
use afterschool_directory::cli::{args::Args, commands};
use clap::Parser;
use std::process;

fn main() {
    let args = Args::parse();

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        tokio::select! {
            result = commands::run(args) => result,
            signal = tokio::signal::ctrl_c() => {
                if let Err(e) = signal {
                    return Err(anyhow::anyhow!("Failed to install CTRL+C signal handler: {}", e));
                }
                eprintln!("\nReceived CTRL+C, shutting down...");
                Err(DirectoryError::Interrupted {
                    reason: "Loading interrupted by user".to_string(),
                }
                .into())
            }
        }
    });

    if let Err(error) = result {
        eprintln!("Error: {:#}", error);
        if let Some(DirectoryError::FetchFailure { .. }) = error.downcast_ref::<DirectoryError>() {
            eprintln!("データの読み込みに失敗しました。ネットワーク接続を確認して再実行してください。");
        }
        process::exit(1);
    }
}
