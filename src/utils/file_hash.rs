use crate::model::comparison_mode::HashType;
use blake2::{Blake2b512, Blake2s256};
use digest::Digest;
use md5::Md5;
use sha2::Sha256;
use sha3::Sha3_256;
use std::io;
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncReadExt;

const BUFFER_SIZE: usize = 64 * 1024;

pub async fn hash_file(path: &Path, hash_type: HashType) -> io::Result<Vec<u8>> {
    let file = File::open(path).await?;
    match hash_type {
        HashType::MD5 => file_hash::<Md5>(file).await,
        HashType::SHA3 => file_hash::<Sha3_256>(file).await,
        HashType::SHA256 => file_hash::<Sha256>(file).await,
        HashType::BLAKE2B => file_hash::<Blake2b512>(file).await,
        HashType::BLAKE2S => file_hash::<Blake2s256>(file).await,
        HashType::BLAKE3 => file_hash::<blake3::Hasher>(file).await,
    }
}

async fn file_hash<D: Digest + Send>(mut file: File) -> io::Result<Vec<u8>> {
    let mut hasher = D::new();
    let mut buffer = vec![0; BUFFER_SIZE];
    loop {
        let bytes_read = file.read(&mut buffer).await?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }
    Ok(hasher.finalize().to_vec())
}
