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

use async_trait::async_trait;
use thiserror::Error;

/// 驱动错误类型
#[derive(Error, Debug)]
pub enum DriverError {
    /// 导航失败
    #[error("Navigation failed: {0}")]
    Navigation(String),
    /// 元素查找失败
    #[error("Element lookup failed: {0}")]
    Lookup(String),
    /// 属性读取失败
    #[error("Attribute read failed: {0}")]
    Attribute(String),
    /// 脚本执行失败
    #[error("Script execution failed: {0}")]
    Script(String),
    /// 浏览器会话错误
    #[error("Browser session error: {0}")]
    Session(String),
}

/// 页面元素特质
///
/// 对已定位页面元素的最小能力集：读取属性和点击
#[async_trait]
pub trait PageElement: Send + Sync {
    /// 读取元素属性，属性不存在时返回None
    async fn attribute(&self, name: &str) -> Result<Option<String>, DriverError>;

    /// 点击元素
    async fn click(&self) -> Result<(), DriverError>;
}

/// 浏览器驱动特质
///
/// 抓取核心依赖的页面检查能力集，与具体的自动化产品解耦。
/// 所有元素查找统一应用隐式等待超时。
#[async_trait]
pub trait BrowserDriver: Send + Sync {
    /// 导航到指定URL，等待页面加载完成
    async fn navigate(&self, url: &str) -> Result<(), DriverError>;

    /// 读取当前页面标题
    async fn page_title(&self) -> Result<String, DriverError>;

    /// 读取当前页面URL
    async fn current_url(&self) -> Result<String, DriverError>;

    /// 查找所有匹配选择器的元素，没有匹配时返回空列表
    async fn find_all(&self, selector: &str) -> Result<Vec<Box<dyn PageElement>>, DriverError>;

    /// 查找第一个匹配选择器的元素，没有匹配时返回None
    async fn find_one(&self, selector: &str) -> Result<Option<Box<dyn PageElement>>, DriverError>;

    /// 将视口滚动到页面底部，触发懒加载
    async fn scroll_to_bottom(&self) -> Result<(), DriverError>;

    /// 关闭浏览器会话，必须在每个退出路径上调用
    async fn close(&self) -> Result<(), DriverError>;
}
