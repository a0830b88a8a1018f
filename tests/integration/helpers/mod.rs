// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use albumrs::browser::scripted::ScriptedPhoto;
use albumrs::config::settings::Settings;

pub const ALBUM_URL: &str = "https://www.flickr.com/photos/someone/albums/72157659099366191";

/// 不等待懒加载间隔的测试配置
pub fn test_settings() -> Settings {
    let mut settings = Settings::default();
    settings.traversal.settle_secs = 0;
    settings
}

/// 一张结构良好的横向照片标记
pub fn landscape_photo(n: u32) -> ScriptedPhoto {
    ScriptedPhoto::new(
        &format!("https://www.flickr.com/photos/someone/{}/", n),
        &format!("c1.staticflickr.com/1/703/{}_554534770b_b.jpg", n),
        236,
        157,
        &format!("Photo {}", n),
    )
}

/// 一张结构良好的纵向照片标记
pub fn portrait_photo(n: u32) -> ScriptedPhoto {
    ScriptedPhoto::new(
        &format!("https://www.flickr.com/photos/someone/{}/", n),
        &format!("c2.staticflickr.com/6/5807/{}_ed7c7fb8af_b.jpg", n),
        157,
        236,
        &format!("Photo {}", n),
    )
}

/// 第n张照片的规范可嵌入URL（横向构造函数对应的形式）
pub fn landscape_embed_url(n: u32) -> String {
    format!("https://farm1.staticflickr.com/703/{}_554534770b.jpg", n)
}

/// 第n张照片的规范可嵌入URL（纵向构造函数对应的形式）
pub fn portrait_embed_url(n: u32) -> String {
    format!("https://farm6.staticflickr.com/5807/{}_ed7c7fb8af.jpg", n)
}
