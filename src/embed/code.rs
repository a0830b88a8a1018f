// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::fmt;

/// 照片方向枚举
///
/// 决定嵌入代码渲染哪一组固定的宽高尺寸
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// 横向，宽大于高，渲染为500×334
    Landscape,
    /// 纵向，高大于等于宽，渲染为334×500
    Portrait,
}

impl Orientation {
    /// 该方向对应的固定显示尺寸（宽，高）
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            Orientation::Landscape => (500, 334),
            Orientation::Portrait => (334, 500),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Orientation::Landscape => write!(f, "landscape"),
            Orientation::Portrait => write!(f, "portrait"),
        }
    }
}

/// 根据像素尺寸判定照片方向
///
/// 宽严格大于高为横向，否则为纵向（正方形归为纵向）
pub fn orientation(width: u32, height: u32) -> Orientation {
    if width > height {
        Orientation::Landscape
    } else {
        Orientation::Portrait
    }
}

/// 照片记录
///
/// 合成一条嵌入代码所需的全部信息，瞬态数据，输出后即丢弃
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoRecord {
    /// 规范的可嵌入URL
    pub embed_url: String,
    /// 照片在源站的页面链接
    pub page_url: String,
    /// 照片标题，不可用时为空字符串
    pub title: String,
    /// 照片方向
    pub orientation: Orientation,
}

impl PhotoRecord {
    /// 渲染本照片的HTML嵌入代码
    pub fn embed_code(&self) -> String {
        embed_code(&self.embed_url, &self.page_url, &self.title, self.orientation)
    }
}

/// 合成HTML嵌入代码
///
/// 锚元素携带源页面链接和嵌入标记属性，包裹一个按方向
/// 固定尺寸的图片元素；标题同时作为title和alt文本。
pub fn embed_code(
    embed_url: &str,
    page_url: &str,
    title: &str,
    orientation: Orientation,
) -> String {
    let (width, height) = orientation.dimensions();
    let title = html_escape::encode_double_quoted_attribute(title);
    let href = html_escape::encode_double_quoted_attribute(page_url);
    let src = html_escape::encode_double_quoted_attribute(embed_url);
    format!(
        "<a data-flickr-embed=\"true\" href=\"{}\" title=\"{}\">\
         <img src=\"{}\" width=\"{}\" height=\"{}\" alt=\"{}\"></a>",
        href, title, src, width, height, title
    )
}
