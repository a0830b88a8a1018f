// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use regex::Regex;

static BACKGROUND_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"background-image:\s*url\(["']?([^"')]+)["']?\)"#).expect("valid regex")
});
static WIDTH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"width:\s*(\d+)px").expect("valid regex"));
static HEIGHT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"height:\s*(\d+)px").expect("valid regex"));

/// 照片瓦片样式
///
/// 从照片标记的内联style属性中提取的热链和像素尺寸。
/// 尺寸用于判定方向，热链交给规范化。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileStyle {
    /// background-image中的热链URL
    pub hotlink: String,
    /// 瓦片像素宽度
    pub width: u32,
    /// 瓦片像素高度
    pub height: u32,
}

impl TileStyle {
    /// 解析一个内联style属性值
    ///
    /// 热链、宽度、高度三者缺一即返回None
    pub fn parse(style: &str) -> Option<Self> {
        let hotlink = BACKGROUND_RE
            .captures(style)
            .map(|c| c[1].to_string())?;
        let width = WIDTH_RE.captures(style)?[1].parse().ok()?;
        let height = HEIGHT_RE.captures(style)?[1].parse().ok()?;
        Some(Self {
            hotlink,
            width,
            height,
        })
    }
}
