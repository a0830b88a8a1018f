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

use crate::browser::traits::{BrowserDriver, PageElement};
use crate::config::settings::Settings;
use crate::embed::{hotlink_to_embed, orientation, PhotoRecord};
use crate::output::EmbedSink;
use crate::scrape::tile::TileStyle;
use crate::utils::errors::ScrapeError;
use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;
use tracing::{debug, info, warn};

/// 相册抓取器
///
/// 给定一个相册URL和一个可导航的浏览器句柄，收集该相册
/// 所有分页上可达的全部可嵌入URL。遍历严格串行：
/// 上一页滚动收敛之前不会访问下一页。
pub struct AlbumScraper<'a> {
    driver: &'a dyn BrowserDriver,
    settings: &'a Settings,
}

impl<'a> AlbumScraper<'a> {
    pub fn new(driver: &'a dyn BrowserDriver, settings: &'a Settings) -> Self {
        Self { driver, settings }
    }

    /// 抓取一个相册
    ///
    /// 导航到相册URL，逐页滚动收敛并收集照片，每发现一张新照片
    /// 立即把它的嵌入代码写入输出（按可嵌入URL去重）。
    ///
    /// # 参数
    ///
    /// * `album_url` - 相册/照片集的URL
    /// * `sink` - 嵌入代码的流式输出目标
    ///
    /// # 返回值
    ///
    /// * `Ok(BTreeSet<String>)` - 所有分页的可嵌入URL并集
    /// * `Err(ScrapeError)` - 导航失败、页面不是相册或转换失败
    pub async fn scrape_album(
        &self,
        album_url: &str,
        sink: &mut dyn EmbedSink,
    ) -> Result<BTreeSet<String>, ScrapeError> {
        self.driver.navigate(album_url).await?;

        // The website signals an unreachable destination through the title
        let title = self.driver.page_title().await?;
        if title.contains(&self.settings.selectors.error_title_marker) {
            return Err(ScrapeError::Navigation(title));
        }

        // Guard against misidentifying arbitrary pages as albums
        let markers = self
            .driver
            .find_all(&self.settings.selectors.photo_marker)
            .await?;
        if markers.is_empty() {
            let url = match self.driver.current_url().await {
                Ok(url) if !url.is_empty() => url,
                _ => album_url.to_string(),
            };
            return Err(ScrapeError::NotAnAlbum(url));
        }

        let mut known = BTreeSet::new();
        let mut page_number = 1u32;
        loop {
            self.collect_current_page(&mut known, sink).await?;
            info!(
                "Page {} converged, {} photos known so far",
                page_number,
                known.len()
            );

            match self
                .driver
                .find_one(&self.settings.selectors.next_page)
                .await?
            {
                Some(next_page) => {
                    next_page.click().await?;
                    page_number += 1;
                }
                // No pagination control left: normal end of traversal
                None => break,
            }
        }

        Ok(known)
    }

    // Scroll-and-settle loop for the current page. No "all loaded" signal is
    // available, so the loop stops once the count of distinct visible photos
    // no longer grows, bounded by max_scroll_rounds.
    async fn collect_current_page(
        &self,
        known: &mut BTreeSet<String>,
        sink: &mut dyn EmbedSink,
    ) -> Result<(), ScrapeError> {
        let mut seen = 0usize;
        for _ in 0..self.settings.traversal.max_scroll_rounds {
            self.driver.scroll_to_bottom().await?;
            tokio::time::sleep(Duration::from_secs(self.settings.traversal.settle_secs)).await;

            let records = self.scan_visible().await?;
            for record in &records {
                if known.insert(record.embed_url.clone()) {
                    debug!("Discovered photo: {}", record.embed_url);
                    sink.emit(&record.embed_code())?;
                }
            }

            if records.len() > seen {
                seen = records.len();
            } else {
                break;
            }
        }
        Ok(())
    }

    // Scans the currently visible photo markers into records, de-duplicated
    // by embed URL within the page.
    async fn scan_visible(&self) -> Result<Vec<PhotoRecord>, ScrapeError> {
        let elements = self
            .driver
            .find_all(&self.settings.selectors.photo_marker)
            .await?;

        let mut records: BTreeMap<String, PhotoRecord> = BTreeMap::new();
        for element in elements {
            match self.read_marker(element.as_ref()).await {
                Ok(record) => {
                    records.entry(record.embed_url.clone()).or_insert(record);
                }
                // Driver failures are never a per-element condition
                Err(err @ ScrapeError::Driver(_)) => return Err(err),
                Err(err) if self.settings.traversal.strict_urls => return Err(err),
                Err(err) => {
                    warn!("Skipping photo with unconvertible attributes: {}", err);
                }
            }
        }
        Ok(records.into_values().collect())
    }

    async fn read_marker(&self, element: &dyn PageElement) -> Result<PhotoRecord, ScrapeError> {
        let page_url = element
            .attribute("href")
            .await?
            .ok_or_else(|| ScrapeError::Conversion("photo marker has no href".to_string()))?;

        let style = element.attribute("style").await?.ok_or_else(|| {
            ScrapeError::Conversion(format!("no style attribute on marker for {}", page_url))
        })?;
        let tile = TileStyle::parse(&style).ok_or_else(|| {
            ScrapeError::Conversion(format!(
                "unparsable size/style attributes for {}: {}",
                page_url, style
            ))
        })?;

        let title = match element.attribute("title").await? {
            Some(title) => title,
            None => element
                .attribute("aria-label")
                .await?
                .unwrap_or_default(),
        };

        Ok(PhotoRecord {
            embed_url: hotlink_to_embed(&tile.hotlink)?,
            page_url,
            title,
            orientation: orientation(tile.width, tile.height),
        })
    }
}
