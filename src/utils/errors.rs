// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::browser::traits::DriverError;
use crate::embed::hotlink::MalformedUrlError;
use thiserror::Error;

/// 抓取错误类型
///
/// 遍历过程中所有会上报给调用者的失败情形。
/// 分页控件不存在不是错误，而是分页循环的正常终止条件。
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// 目标URL不可达或返回站点错误页，对整次运行是致命的
    #[error("Navigation failed: {0}")]
    Navigation(String),

    /// 页面缺少预期的照片标记，可能不是相册页
    #[error("No photo markers found, is this really a Flickr album page? {0}")]
    NotAnAlbum(String),

    /// 发现的URL不符合预期的热链模式
    #[error("Malformed photo URL: {0}")]
    MalformedUrl(#[from] MalformedUrlError),

    /// 元素的尺寸或样式属性无法转换
    #[error("Cannot convert element attributes: {0}")]
    Conversion(String),

    /// 浏览器驱动错误
    #[error("Browser driver error: {0}")]
    Driver(#[from] DriverError),

    /// 输出写入错误
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}
