// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 浏览器模块
///
/// 定义抽象的页面检查能力接口及其实现，
/// 包括基于chromiumoxide的真实浏览器驱动和用于测试的脚本化驱动
pub mod browser;

/// 配置模块
///
/// 处理应用程序的配置设置，包括浏览器、页面遍历和选择器配置
pub mod config;

/// 嵌入代码模块
///
/// 实现热链URL的规范化解析和HTML嵌入代码的生成
pub mod embed;

/// 输出模块
///
/// 将生成的嵌入代码流式写入目标（标准输出或文件）
pub mod output;

/// 抓取模块
///
/// 实现相册页面的遍历算法：滚动收敛、分页和照片标记扫描
pub mod scrape;

/// 工具模块
///
/// 提供通用的错误类型和遥测功能
pub mod utils;
