// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::browser::traits::{BrowserDriver, DriverError, PageElement};
use crate::config::settings::BrowserSettings;
use async_trait::async_trait;
use chromiumoxide::{Browser, BrowserConfig, Element, Page};
use futures::StreamExt;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Chromium浏览器驱动
///
/// 基于chromiumoxide实现的浏览器自动化驱动。会话由单次运行独占持有：
/// 启动时获取，必须在每个退出路径上调用`close`释放。
pub struct ChromiumDriver {
    browser: Mutex<Browser>,
    page: Page,
    implicit_wait: Duration,
    handler_task: JoinHandle<()>,
}

impl ChromiumDriver {
    /// 启动浏览器会话并打开空白页面
    ///
    /// 配置了远程调试URL时连接已运行的Chrome实例，否则启动新实例。
    ///
    /// # 参数
    ///
    /// * `settings` - 浏览器配置
    ///
    /// # 返回值
    ///
    /// * `Ok(ChromiumDriver)` - 可用的浏览器驱动
    /// * `Err(DriverError)` - 启动或连接失败
    pub async fn launch(settings: &BrowserSettings) -> Result<Self, DriverError> {
        let (browser, mut handler) = if let Some(ref url) = settings.remote_debugging_url {
            tracing::info!("Connecting to remote Chrome instance at: {}", url);
            Browser::connect(url).await.map_err(|e| {
                DriverError::Session(format!("Failed to connect to remote Chrome: {}", e))
            })?
        } else {
            let config = BrowserConfig::builder()
                .no_sandbox()
                .request_timeout(Duration::from_secs(settings.request_timeout_secs))
                .arg("--disable-gpu")
                .arg("--disable-dev-shm-usage")
                .build()
                .map_err(DriverError::Session)?;

            Browser::launch(config)
                .await
                .map_err(|e| DriverError::Session(e.to_string()))?
        };

        // Spawn a handler to process browser events
        let handler_task = tokio::spawn(async move {
            while let Some(h) = handler.next().await {
                if h.is_err() {
                    break;
                }
            }
        });

        let page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| DriverError::Session(e.to_string()))?;

        Ok(Self {
            browser: Mutex::new(browser),
            page,
            implicit_wait: Duration::from_secs(settings.implicit_wait_secs),
            handler_task,
        })
    }

    // Implicit-wait lookup: poll until at least one element matches or the
    // wait elapses. A lookup that times out is not an error, it is "nothing
    // visible yet".
    async fn find_with_wait(&self, selector: &str) -> Vec<Element> {
        let deadline = Instant::now() + self.implicit_wait;
        loop {
            if let Ok(elements) = self.page.find_elements(selector).await {
                if !elements.is_empty() {
                    return elements;
                }
            }
            if Instant::now() >= deadline {
                return Vec::new();
            }
            tokio::time::sleep(Duration::from_millis(250)).await;
        }
    }
}

#[async_trait]
impl BrowserDriver for ChromiumDriver {
    async fn navigate(&self, url: &str) -> Result<(), DriverError> {
        // goto waits for the load event by default
        self.page
            .goto(url)
            .await
            .map_err(|e| DriverError::Navigation(e.to_string()))?;
        Ok(())
    }

    async fn page_title(&self) -> Result<String, DriverError> {
        let title = self
            .page
            .get_title()
            .await
            .map_err(|e| DriverError::Attribute(e.to_string()))?;
        Ok(title.unwrap_or_default())
    }

    async fn current_url(&self) -> Result<String, DriverError> {
        let url = self
            .page
            .url()
            .await
            .map_err(|e| DriverError::Attribute(e.to_string()))?;
        Ok(url.unwrap_or_default())
    }

    async fn find_all(&self, selector: &str) -> Result<Vec<Box<dyn PageElement>>, DriverError> {
        let elements = self.find_with_wait(selector).await;
        Ok(elements
            .into_iter()
            .map(|e| Box::new(ChromiumElement(e)) as Box<dyn PageElement>)
            .collect())
    }

    async fn find_one(&self, selector: &str) -> Result<Option<Box<dyn PageElement>>, DriverError> {
        let mut elements = self.find_with_wait(selector).await;
        if elements.is_empty() {
            return Ok(None);
        }
        Ok(Some(Box::new(ChromiumElement(elements.remove(0)))))
    }

    async fn scroll_to_bottom(&self) -> Result<(), DriverError> {
        self.page
            .evaluate("window.scrollTo(0, document.body.scrollHeight);")
            .await
            .map_err(|e| DriverError::Script(format!("Scroll failed: {}", e)))?;
        Ok(())
    }

    async fn close(&self) -> Result<(), DriverError> {
        let mut browser = self.browser.lock().await;
        if let Err(e) = browser.close().await {
            return Err(DriverError::Session(e.to_string()));
        }
        let _ = browser.wait().await;
        self.handler_task.abort();
        Ok(())
    }
}

/// Chromium页面元素
struct ChromiumElement(Element);

#[async_trait]
impl PageElement for ChromiumElement {
    async fn attribute(&self, name: &str) -> Result<Option<String>, DriverError> {
        self.0
            .attribute(name)
            .await
            .map_err(|e| DriverError::Attribute(e.to_string()))
    }

    async fn click(&self) -> Result<(), DriverError> {
        self.0
            .click()
            .await
            .map(|_| ())
            .map_err(|e| DriverError::Lookup(format!("Click failed: {}", e)))
    }
}
