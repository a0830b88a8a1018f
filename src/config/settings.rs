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

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含浏览器会话、页面遍历和选择器等所有配置项
#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    /// 浏览器配置
    pub browser: BrowserSettings,
    /// 页面遍历配置
    pub traversal: TraversalSettings,
    /// 选择器配置
    pub selectors: SelectorSettings,
}

/// 浏览器配置设置
#[derive(Debug, Deserialize)]
pub struct BrowserSettings {
    /// 远程调试URL（连接已运行的Chrome实例，而非启动新实例）
    pub remote_debugging_url: Option<String>,
    /// 浏览器请求超时时间（秒）
    pub request_timeout_secs: u64,
    /// 元素查找的隐式等待时间（秒），统一应用于所有元素查找
    pub implicit_wait_secs: u64,
}

/// 页面遍历配置设置
#[derive(Debug, Deserialize)]
pub struct TraversalSettings {
    /// 单页最大滚动轮数，没有"全部加载完成"信号时的终止保证
    pub max_scroll_rounds: u32,
    /// 每次滚动后等待懒加载内容渲染的时间（秒）
    pub settle_secs: u64,
    /// 严格URL模式：true时遇到第一个格式错误的热链URL即中止整个抓取，
    /// false时跳过该照片并记录警告
    pub strict_urls: bool,
}

/// 选择器配置设置
///
/// 页面元素的定位方式，与Flickr相册页面的标记结构对应
#[derive(Debug, Deserialize)]
pub struct SelectorSettings {
    /// 照片标记元素选择器
    pub photo_marker: String,
    /// 下一页控件选择器
    pub next_page: String,
    /// 页面标题中表示目标不可达的错误标记
    pub error_title_marker: String,
}

impl Default for BrowserSettings {
    fn default() -> Self {
        Self {
            remote_debugging_url: None,
            request_timeout_secs: 30,
            implicit_wait_secs: 2,
        }
    }
}

impl Default for TraversalSettings {
    fn default() -> Self {
        Self {
            max_scroll_rounds: 100,
            settle_secs: 3,
            strict_urls: false,
        }
    }
}

impl Default for SelectorSettings {
    fn default() -> Self {
        Self {
            photo_marker: "a.overlay".to_string(),
            next_page: "a[data-track='paginationRightClick']".to_string(),
            error_title_marker: "Problem".to_string(),
        }
    }
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Start with default settings
            .set_default("browser.request_timeout_secs", 30)?
            .set_default("browser.implicit_wait_secs", 2)?
            // Default traversal settings
            .set_default("traversal.max_scroll_rounds", 100)?
            .set_default("traversal.settle_secs", 3)?
            .set_default("traversal.strict_urls", false)?
            // Default selector settings
            .set_default("selectors.photo_marker", "a.overlay")?
            .set_default("selectors.next_page", "a[data-track='paginationRightClick']")?
            .set_default("selectors.error_title_marker", "Problem")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("ALBUMRS").separator("__"));

        builder.build()?.try_deserialize()
    }
}
