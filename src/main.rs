mod cleanup;
mod display;
mod system;
mod upload;

use std::env;
use std::process;

fn main() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    rt.block_on(async_main());
}

async fn async_main() {
    let args: Vec<String> = env::args().collect();

    // Parse command line arguments: PATH [PATH...]
    let paths = &args[1..];
    if paths.is_empty() {
        eprintln!("Usage: upload-cleaner <path> [path...]");
        process::exit(2);
    }

    // Check for demo mode
    let demo_mode = env::var("DEMO_MODE").unwrap_or_else(|_| "false".to_string()) == "true";

    if let Err(e) = cleanup::run_with_args(demo_mode, paths).await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
