//! PCM WAV serialization. The header is built by hand: the format is 44
//! fixed bytes and the RIFF chunk size here counts 40 header bytes, so a
//! generic writer would not reproduce the stream byte-for-byte.

use std::path::Path;

use anyhow::{Context, Result};

use crate::config::{BYTES_PER_SAMPLE, CHANNEL_COUNT};

/// Both the addend in the RIFF ChunkSize field and the byte offset of the
/// data subchunk's size field. The two uses must stay equal.
pub const WAVE_HEADER_LENGTH: u32 = 40;

const AUDIO_FORMAT_PCM: [u8; 2] = [0x01, 0x00];

/// Serialize a complete WAV file: 44-byte header, then `pcm` as the data
/// chunk payload. All multi-byte fields little-endian.
pub fn encode_wav(pcm: &[u8], sample_rate: u32) -> Vec<u8> {
    let data_len = pcm.len() as u32;
    let byte_rate = sample_rate * CHANNEL_COUNT as u32 * BYTES_PER_SAMPLE as u32;
    let block_align = CHANNEL_COUNT * BYTES_PER_SAMPLE;
    let bits_per_sample = BYTES_PER_SAMPLE * 8;

    let mut out = Vec::with_capacity(44 + pcm.len());
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(data_len + WAVE_HEADER_LENGTH).to_le_bytes());
    out.extend_from_slice(b"WAVE");
    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&AUDIO_FORMAT_PCM);
    out.extend_from_slice(&CHANNEL_COUNT.to_le_bytes());
    out.extend_from_slice(&sample_rate.to_le_bytes());
    out.extend_from_slice(&byte_rate.to_le_bytes());
    out.extend_from_slice(&block_align.to_le_bytes());
    out.extend_from_slice(&bits_per_sample.to_le_bytes());
    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_len.to_le_bytes());
    out.extend_from_slice(pcm);
    out
}

/// Write `bytes` to `path`, replacing any existing file in one pass.
pub fn write_fresh(path: &Path, bytes: &[u8]) -> Result<()> {
    if path.exists() {
        std::fs::remove_file(path)
            .with_context(|| format!("Failed to remove old file: {}", path.display()))?;
    }
    std::fs::write(path, bytes)
        .with_context(|| format!("Failed to write: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn u32_at(buf: &[u8], offset: usize) -> u32 {
        u32::from_le_bytes(buf[offset..offset + 4].try_into().unwrap())
    }

    fn u16_at(buf: &[u8], offset: usize) -> u16 {
        u16::from_le_bytes(buf[offset..offset + 2].try_into().unwrap())
    }

    #[test]
    fn test_header_fields_roundtrip() {
        let pcm = vec![0u8; 9000];
        let wav = encode_wav(&pcm, 48_000);

        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(u32_at(&wav, 4), 9040);
        assert_eq!(&wav[8..12], b"WAVE");
        assert_eq!(&wav[12..16], b"fmt ");
        assert_eq!(u32_at(&wav, 16), 16);
        assert_eq!(u16_at(&wav, 20), 1); // PCM
        assert_eq!(u16_at(&wav, 22), 1); // mono
        assert_eq!(u32_at(&wav, 24), 48_000);
        assert_eq!(u32_at(&wav, 28), 48_000); // byte rate, 1 byte/sample mono
        assert_eq!(u16_at(&wav, 32), 1); // block align
        assert_eq!(u16_at(&wav, 34), 8); // bits per sample
        assert_eq!(&wav[36..40], b"data");
        assert_eq!(u32_at(&wav, WAVE_HEADER_LENGTH as usize), 9000);
        assert_eq!(wav.len(), 9044);
    }

    #[test]
    fn test_data_payload_follows_header() {
        let pcm = vec![1, 2, 3, 4];
        let wav = encode_wav(&pcm, 48_000);
        assert_eq!(&wav[44..], &pcm[..]);
    }

    #[test]
    fn test_write_fresh_replaces_existing() {
        let dir = std::env::temp_dir().join("wavetrace_test_wav");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("out.wav");

        std::fs::write(&path, b"stale and much longer than the new contents").unwrap();
        write_fresh(&path, b"new").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"new");

        std::fs::remove_file(&path).ok();
    }
}
