// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::browser::traits::{BrowserDriver, DriverError, PageElement};
use crate::config::settings::SelectorSettings;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

/// 脚本化照片
///
/// 以属性映射的形式描述一个照片标记元素
#[derive(Debug, Clone)]
pub struct ScriptedPhoto {
    attrs: BTreeMap<String, String>,
}

impl ScriptedPhoto {
    /// 构造一个结构良好的照片标记
    ///
    /// style属性按Flickr相册瓦片的内联样式格式拼装：
    /// 像素尺寸加上background-image热链
    pub fn new(page_url: &str, hotlink: &str, width: u32, height: u32, title: &str) -> Self {
        let style = format!(
            "width: {}px; height: {}px; background-image: url(\"//{}\")",
            width, height, hotlink
        );
        Self::with_style(page_url, &style, title)
    }

    /// 构造一个带有任意style属性的照片标记，用于模拟格式错误的元素
    pub fn with_style(page_url: &str, style: &str, title: &str) -> Self {
        let mut attrs = BTreeMap::new();
        attrs.insert("href".to_string(), page_url.to_string());
        attrs.insert("style".to_string(), style.to_string());
        if !title.is_empty() {
            attrs.insert("title".to_string(), title.to_string());
        }
        Self { attrs }
    }
}

/// 脚本化相册页
///
/// 照片按批次分组：第N批在第N次滚动后才变得可见，模拟懒加载
#[derive(Debug, Clone, Default)]
pub struct ScriptedPage {
    batches: Vec<Vec<ScriptedPhoto>>,
}

impl ScriptedPage {
    pub fn new(batches: Vec<Vec<ScriptedPhoto>>) -> Self {
        Self { batches }
    }

    /// 所有照片从一开始就可见的单批次页面
    pub fn single(photos: Vec<ScriptedPhoto>) -> Self {
        Self {
            batches: vec![photos],
        }
    }
}

/// 脚本化相册
#[derive(Debug, Clone)]
pub struct ScriptedAlbum {
    /// 页面标题，用于模拟站点错误页
    pub title: String,
    /// 相册的分页序列
    pub pages: Vec<ScriptedPage>,
}

impl ScriptedAlbum {
    pub fn new(title: &str, pages: Vec<ScriptedPage>) -> Self {
        Self {
            title: title.to_string(),
            pages,
        }
    }
}

#[derive(Debug)]
struct State {
    album: ScriptedAlbum,
    page_idx: usize,
    scrolls: usize,
    scroll_count: usize,
    navigated: Option<String>,
    closed: bool,
}

/// 脚本化浏览器驱动
///
/// 完全确定性的内存驱动，按脚本回放相册页面和懒加载批次。
/// 测试套件用它来验证遍历算法的收敛和分页属性，不需要真实浏览器。
pub struct ScriptedDriver {
    state: Arc<Mutex<State>>,
    selectors: SelectorSettings,
}

impl ScriptedDriver {
    pub fn new(album: ScriptedAlbum) -> Self {
        Self {
            state: Arc::new(Mutex::new(State {
                album,
                page_idx: 0,
                scrolls: 0,
                scroll_count: 0,
                navigated: None,
                closed: false,
            })),
            selectors: SelectorSettings::default(),
        }
    }

    /// 本次会话中scroll_to_bottom被调用的总次数
    pub fn scroll_count(&self) -> usize {
        self.state.lock().expect("scripted state poisoned").scroll_count
    }

    /// 会话是否已关闭
    pub fn is_closed(&self) -> bool {
        self.state.lock().expect("scripted state poisoned").closed
    }

    fn visible_photos(state: &State) -> Vec<ScriptedPhoto> {
        let Some(page) = state.album.pages.get(state.page_idx) else {
            return Vec::new();
        };
        if page.batches.is_empty() {
            return Vec::new();
        }
        let limit = state.scrolls.min(page.batches.len() - 1);
        page.batches[..=limit].iter().flatten().cloned().collect()
    }
}

#[async_trait]
impl BrowserDriver for ScriptedDriver {
    async fn navigate(&self, url: &str) -> Result<(), DriverError> {
        let mut state = self.state.lock().expect("scripted state poisoned");
        state.navigated = Some(url.to_string());
        state.page_idx = 0;
        state.scrolls = 0;
        Ok(())
    }

    async fn page_title(&self) -> Result<String, DriverError> {
        let state = self.state.lock().expect("scripted state poisoned");
        Ok(state.album.title.clone())
    }

    async fn current_url(&self) -> Result<String, DriverError> {
        let state = self.state.lock().expect("scripted state poisoned");
        Ok(state.navigated.clone().unwrap_or_default())
    }

    async fn find_all(&self, selector: &str) -> Result<Vec<Box<dyn PageElement>>, DriverError> {
        let state = self.state.lock().expect("scripted state poisoned");
        if selector != self.selectors.photo_marker {
            return Ok(Vec::new());
        }
        Ok(Self::visible_photos(&state)
            .into_iter()
            .map(|photo| Box::new(PhotoElement { photo }) as Box<dyn PageElement>)
            .collect())
    }

    async fn find_one(&self, selector: &str) -> Result<Option<Box<dyn PageElement>>, DriverError> {
        let state = self.state.lock().expect("scripted state poisoned");
        if selector == self.selectors.next_page {
            if state.page_idx + 1 < state.album.pages.len() {
                return Ok(Some(Box::new(NextPageElement {
                    state: Arc::clone(&self.state),
                })));
            }
            return Ok(None);
        }
        if selector == self.selectors.photo_marker {
            return Ok(Self::visible_photos(&state)
                .into_iter()
                .next()
                .map(|photo| Box::new(PhotoElement { photo }) as Box<dyn PageElement>));
        }
        Ok(None)
    }

    async fn scroll_to_bottom(&self) -> Result<(), DriverError> {
        let mut state = self.state.lock().expect("scripted state poisoned");
        state.scrolls += 1;
        state.scroll_count += 1;
        Ok(())
    }

    async fn close(&self) -> Result<(), DriverError> {
        let mut state = self.state.lock().expect("scripted state poisoned");
        state.closed = true;
        Ok(())
    }
}

struct PhotoElement {
    photo: ScriptedPhoto,
}

#[async_trait]
impl PageElement for PhotoElement {
    async fn attribute(&self, name: &str) -> Result<Option<String>, DriverError> {
        Ok(self.photo.attrs.get(name).cloned())
    }

    async fn click(&self) -> Result<(), DriverError> {
        Ok(())
    }
}

struct NextPageElement {
    state: Arc<Mutex<State>>,
}

#[async_trait]
impl PageElement for NextPageElement {
    async fn attribute(&self, _name: &str) -> Result<Option<String>, DriverError> {
        Ok(None)
    }

    async fn click(&self) -> Result<(), DriverError> {
        let mut state = self.state.lock().expect("scripted state poisoned");
        state.page_idx += 1;
        state.scrolls = 0;
        Ok(())
    }
}
