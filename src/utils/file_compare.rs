use std::io;
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncReadExt;

const BUFFER_SIZE: usize = 64 * 1024;

/// Byte-for-byte comparison, stopping at the first differing chunk.
pub async fn same_content(left: &Path, right: &Path) -> io::Result<bool> {
    let mut left = File::open(left).await?;
    let mut right = File::open(right).await?;
    let mut left_buffer = vec![0; BUFFER_SIZE];
    let mut right_buffer = vec![0; BUFFER_SIZE];

    loop {
        let left_read = fill(&mut left, &mut left_buffer).await?;
        let right_read = fill(&mut right, &mut right_buffer).await?;
        if left_read != right_read || left_buffer[..left_read] != right_buffer[..right_read] {
            return Ok(false);
        }
        if left_read == 0 {
            return Ok(true);
        }
    }
}

// Reads until the buffer is full or EOF so chunk boundaries line up on both sides.
async fn fill(file: &mut File, buffer: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buffer.len() {
        let bytes_read = file.read(&mut buffer[filled..]).await?;
        if bytes_read == 0 {
            break;
        }
        filled += bytes_read;
    }
    Ok(filled)
}
