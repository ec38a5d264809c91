// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use crate::EntryType;
use crate::error::Result;
use crate::metadata::{Entry, Metadata};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use std::io::{self, BufRead, Cursor, Read, Seek, SeekFrom};
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::io::{AsyncBufRead, AsyncRead, AsyncSeek, ReadBuf};

/// Immutable file leaf owned by its parent directory
#[derive(Debug, Clone)]
pub struct FileNode {
    name: String,
    created_at: DateTime<Utc>,
    data: Bytes,
}

impl FileNode {
    pub(crate) fn new<N: Into<String>, D: Into<Bytes>>(name: N, data: D) -> Self {
        Self {
            name: name.into(),
            created_at: Utc::now(),
            data: data.into(),
        }
    }

    /// The stored payload. Cloning `Bytes` shares the buffer.
    pub fn data(&self) -> &Bytes {
        &self.data
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Open a fresh stream over this file's payload.
    pub fn open(&self) -> OpenFile {
        OpenFile {
            cursor: Cursor::new(self.data.clone()),
            info: self.info(),
        }
    }
}

impl Entry for FileNode {
    fn name(&self) -> &str {
        &self.name
    }

    fn entry_type(&self) -> EntryType {
        EntryType::File
    }

    fn size(&self) -> u64 {
        self.data.len() as u64
    }

    fn mod_time(&self) -> Option<DateTime<Utc>> {
        Some(self.created_at)
    }
}

/// Readable stream returned by [`crate::MemFs::open`]
///
/// Starts at offset 0 and reads from a shared view of the stored bytes, so
/// neither reading nor closing touches the tree.
#[derive(Debug, Clone)]
pub struct OpenFile {
    cursor: Cursor<Bytes>,
    info: Metadata,
}

impl OpenFile {
    pub fn stat(&self) -> Result<Metadata> {
        Ok(self.info.clone())
    }

    /// Current read offset.
    pub fn position(&self) -> u64 {
        self.cursor.position()
    }

    /// The whole payload regardless of the current offset.
    pub fn contents(&self) -> Bytes {
        self.cursor.get_ref().clone()
    }

    /// Boxed async reader over the remaining bytes.
    pub fn async_reader(self) -> Pin<Box<dyn AsyncRead + Send>> {
        Box::pin(self)
    }

    /// Nothing to release; always succeeds.
    pub fn close(self) -> Result<()> {
        Ok(())
    }
}

impl Read for OpenFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.cursor.read(buf)
    }
}

impl BufRead for OpenFile {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        self.cursor.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        BufRead::consume(&mut self.cursor, amt)
    }
}

impl Seek for OpenFile {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.cursor.seek(pos)
    }
}

impl AsyncRead for OpenFile {
    fn poll_read(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        Pin::new(&mut self.get_mut().cursor).poll_read(cx, buf)
    }
}

impl AsyncBufRead for OpenFile {
    fn poll_fill_buf(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<&[u8]>> {
        Pin::new(&mut self.get_mut().cursor).poll_fill_buf(cx)
    }

    fn consume(self: Pin<&mut Self>, amt: usize) {
        AsyncBufRead::consume(Pin::new(&mut self.get_mut().cursor), amt)
    }
}

impl AsyncSeek for OpenFile {
    fn start_seek(self: Pin<&mut Self>, position: SeekFrom) -> io::Result<()> {
        Pin::new(&mut self.get_mut().cursor).start_seek(position)
    }

    fn poll_complete(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<u64>> {
        Pin::new(&mut self.get_mut().cursor).poll_complete(cx)
    }
}
