// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use albumrs::browser::chromium::ChromiumDriver;
use albumrs::browser::traits::BrowserDriver;
use albumrs::config::settings::Settings;
use albumrs::output::TextSink;
use albumrs::scrape::AlbumScraper;
use albumrs::utils::telemetry;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, warn};

/// 从Flickr相册/照片集提取HTML嵌入代码
#[derive(Parser, Debug)]
#[command(name = "albumrs", about = "Extract HTML embed codes from a Flickr album")]
struct Cli {
    /// URL of the Flickr album/photoset to extract embed codes from
    album_url: String,

    /// File to write the embed codes to (defaults to stdout)
    output_file: Option<PathBuf>,

    /// Enable debug mode (logs every discovered photo URL)
    #[arg(long)]
    debug: bool,
}

/// 主函数
///
/// 应用程序入口点：加载配置，获取浏览器会话，运行相册遍历，
/// 并保证会话在每个退出路径上都被关闭
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 1. Initialize logging
    telemetry::init_telemetry(cli.debug);
    info!("Starting albumrs...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    // 3. Select the output sink
    let mut sink: TextSink<Box<dyn Write + Send>> = match &cli.output_file {
        Some(path) => TextSink::file(path)?,
        None => TextSink::stdout(),
    };

    // 4. Acquire the browser session
    let driver = ChromiumDriver::launch(&settings.browser).await?;
    info!("Browser session established");

    // 5. Run the traversal; the session is closed before the outcome is
    // surfaced so that errors never leak the browser process
    let scraper = AlbumScraper::new(&driver, &settings);
    let outcome = scraper.scrape_album(&cli.album_url, &mut sink).await;

    if let Err(e) = driver.close().await {
        warn!("Failed to close browser session: {}", e);
    }

    let photo_urls = outcome?;
    info!("Extracted embed codes for {} photos", photo_urls.len());

    Ok(())
}
