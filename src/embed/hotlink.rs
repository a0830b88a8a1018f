// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;
use url::Url;

/// 热链URL错误类型
#[derive(Error, Debug)]
pub enum MalformedUrlError {
    #[error("Not a valid URL: {0}")]
    Invalid(String),

    #[error("Not a staticflickr.com host: {0}")]
    WrongHost(String),

    #[error("Missing or non-numeric farm segment: {0}")]
    BadFarm(String),

    #[error("Path does not match <farm>/<server>/<image>.jpg: {0}")]
    BadPath(String),

    #[error("Missing .jpg extension: {0}")]
    NotJpeg(String),
}

/// 热链URL
///
/// 相册页面标记中出现的图片URL的结构化形式：
/// `<subdomain>.staticflickr.com/<farm>/<server>/<image_id>[_<size>].jpg`。
/// 按固定字段语法结构化校验，而非整体模式匹配，
/// 使格式错误的输入可以被精确定位和测试。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotlinkUrl {
    /// farm编号，决定规范域名
    pub farm: u32,
    /// 服务器路径段
    pub server: String,
    /// 图片标识（含secret，不含尺寸后缀）
    pub image_id: String,
    /// 可选的尺寸后缀（如`b`、`z`、`o`）
    pub size_suffix: Option<String>,
}

impl HotlinkUrl {
    /// 解析一个热链URL
    ///
    /// 接受带`http://`、`https://`或`//`前缀以及无前缀的形式。
    ///
    /// # 返回值
    ///
    /// * `Ok(HotlinkUrl)` - 解析出的结构化热链
    /// * `Err(MalformedUrlError)` - 输入不符合预期语法
    pub fn parse(raw: &str) -> Result<Self, MalformedUrlError> {
        let absolute = if raw.contains("://") {
            raw.to_string()
        } else if raw.starts_with("//") {
            format!("https:{}", raw)
        } else {
            format!("https://{}", raw)
        };

        let parsed =
            Url::parse(&absolute).map_err(|_| MalformedUrlError::Invalid(raw.to_string()))?;
        let host = parsed
            .host_str()
            .ok_or_else(|| MalformedUrlError::Invalid(raw.to_string()))?;

        let subdomain = host
            .strip_suffix(".staticflickr.com")
            .ok_or_else(|| MalformedUrlError::WrongHost(raw.to_string()))?;
        if subdomain.is_empty() || subdomain.contains('.') {
            return Err(MalformedUrlError::WrongHost(raw.to_string()));
        }

        let segments: Vec<&str> = parsed
            .path_segments()
            .map(|s| s.filter(|p| !p.is_empty()).collect())
            .unwrap_or_default();
        if segments.len() != 3 {
            return Err(MalformedUrlError::BadPath(raw.to_string()));
        }

        let farm: u32 = segments[0]
            .parse()
            .map_err(|_| MalformedUrlError::BadFarm(raw.to_string()))?;
        let server = segments[1].to_string();

        let stem = segments[2]
            .strip_suffix(".jpg")
            .ok_or_else(|| MalformedUrlError::NotJpeg(raw.to_string()))?;
        if stem.is_empty() {
            return Err(MalformedUrlError::BadPath(raw.to_string()));
        }

        // A size suffix is a short trailing alphabetic segment; the secret
        // segment before it is always longer, so the two never collide.
        let (image_id, size_suffix) = match stem.rsplit_once('_') {
            Some((head, tail))
                if !head.is_empty()
                    && (1..=2).contains(&tail.len())
                    && tail.chars().all(|c| c.is_ascii_alphabetic()) =>
            {
                (head.to_string(), Some(tail.to_string()))
            }
            _ => (stem.to_string(), None),
        };

        Ok(Self {
            farm,
            server,
            image_id,
            size_suffix,
        })
    }

    /// 规范的可嵌入URL形式
    ///
    /// 丢弃尺寸后缀，切换到farm子域形式。对应站点的"medium"显示尺寸。
    pub fn embed_url(&self) -> String {
        format!(
            "https://farm{}.staticflickr.com/{}/{}.jpg",
            self.farm, self.server, self.image_id
        )
    }
}

/// 将页面显示的热链URL转换为规范的可嵌入URL
///
/// 纯函数：相同输入总是产生相同输出，仅相差尺寸后缀的
/// 两个热链规范化为同一个可嵌入URL（去重正确性的前提）。
pub fn hotlink_to_embed(raw: &str) -> Result<String, MalformedUrlError> {
    Ok(HotlinkUrl::parse(raw)?.embed_url())
}
