//! 行传输
//!
//! 控制协议以换行分隔，读写端分别包装 `BufRead` / `Write`，
//! 上层既可以接标准输入输出，也可以在测试中接内存缓冲区。

use std::io::{BufRead, Write};

use tracing::trace;

use crate::error::{ProtocolError, Result};

/// 行读取器
pub struct LineReader<R> {
    reader: R,
    buffer: String,
}

impl<R: BufRead> LineReader<R> {
    /// 创建新的行读取器
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: String::new(),
        }
    }

    /// 读取一行（去掉行尾换行），输入结束时返回 `ConnectionClosed`
    pub fn read_line(&mut self) -> Result<String> {
        self.buffer.clear();
        let read = self.reader.read_line(&mut self.buffer)?;
        if read == 0 {
            return Err(ProtocolError::ConnectionClosed);
        }
        let line = self.buffer.trim_end_matches(['\r', '\n']).to_string();
        trace!("<- {}", line);
        Ok(line)
    }
}

/// 行写入器
pub struct LineWriter<W> {
    writer: W,
}

impl<W: Write> LineWriter<W> {
    /// 创建新的行写入器
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// 写入一行并立即刷新
    pub fn write_line(&mut self, line: &str) -> Result<()> {
        trace!("-> {}", line);
        writeln!(self.writer, "{}", line)?;
        self.writer.flush()?;
        Ok(())
    }

    /// 取回内部写入端
    pub fn into_inner(self) -> W {
        self.writer
    }
}
