// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// 嵌入代码输出特质
///
/// 遍历过程中每发现一张新照片就立即调用一次
pub trait EmbedSink: Send {
    /// 写出一条嵌入代码块
    fn emit(&mut self, code: &str) -> io::Result<()>;
}

/// 文本输出
///
/// 每条嵌入代码块后跟一个空行分隔符
pub struct TextSink<W: Write + Send> {
    writer: W,
}

impl<W: Write + Send> TextSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl TextSink<Box<dyn Write + Send>> {
    /// 写入标准输出的文本输出
    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }

    /// 写入文件的文本输出
    pub fn file(path: &Path) -> io::Result<Self> {
        Ok(Self::new(Box::new(File::create(path)?)))
    }
}

impl<W: Write + Send> EmbedSink for TextSink<W> {
    fn emit(&mut self, code: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", code)?;
        writeln!(self.writer)?;
        self.writer.flush()
    }
}

/// 内存收集输出
///
/// 测试用：按发现顺序收集所有嵌入代码块
#[derive(Debug, Default)]
pub struct CollectSink {
    /// 已收集的嵌入代码块
    pub blocks: Vec<String>,
}

impl CollectSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EmbedSink for CollectSink {
    fn emit(&mut self, code: &str) -> io::Result<()> {
        self.blocks.push(code.to_string());
        Ok(())
    }
}
