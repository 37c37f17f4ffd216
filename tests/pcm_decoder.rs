use retrocast::audio::decode::{Decoder, PcmDecoder};
use retrocast::error::Error;

#[test]
fn test_decode_pcm_16bit_mono() {
    let decoder = PcmDecoder::new(24000, 1).unwrap();

    // 4 samples (8 bytes) of 16-bit PCM
    let data = vec![
        0x00, 0x04, // 1024 in little-endian
        0x00, 0x08, // 2048
        0xFF, 0xFF, // -1
        0x00, 0x00, // 0
    ];

    let buffer = decoder.decode(&data).unwrap();

    assert_eq!(buffer.channel_count(), 1);
    assert_eq!(buffer.frame_count(), 4);
    assert_eq!(buffer.sample_rate(), 24000);

    let samples = buffer.channel(0);
    assert_eq!(samples[0], 1024.0 / 32768.0);
    assert_eq!(samples[1], 2048.0 / 32768.0);
    assert_eq!(samples[2], -1.0 / 32768.0);
    assert_eq!(samples[3], 0.0);
}

#[test]
fn test_full_scale_negative_is_exactly_minus_one() {
    let decoder = PcmDecoder::new(24000, 1).unwrap();
    let buffer = decoder.decode(&[0x00, 0x80]).unwrap();
    assert_eq!(buffer.channel(0)[0], -1.0);
}

#[test]
fn test_full_scale_positive_is_just_under_one() {
    let decoder = PcmDecoder::new(24000, 1).unwrap();
    let buffer = decoder.decode(&[0xFF, 0x7F]).unwrap();
    assert_eq!(buffer.channel(0)[0], 32767.0 / 32768.0);
    assert!(buffer.channel(0)[0] < 1.0);
}

#[test]
fn test_stereo_deinterleave() {
    let decoder = PcmDecoder::new(48000, 2).unwrap();

    // Two frames: L0=1, R0=2, L1=3, R1=4
    let data = vec![
        0x01, 0x00, // L0
        0x02, 0x00, // R0
        0x03, 0x00, // L1
        0x04, 0x00, // R1
    ];

    let buffer = decoder.decode(&data).unwrap();

    assert_eq!(buffer.channel_count(), 2);
    assert_eq!(buffer.frame_count(), 2);
    assert_eq!(buffer.channel(0), &[1.0 / 32768.0, 3.0 / 32768.0]);
    assert_eq!(buffer.channel(1), &[2.0 / 32768.0, 4.0 / 32768.0]);
}

#[test]
fn test_partial_trailing_frame_is_dropped() {
    let mono = PcmDecoder::new(24000, 1).unwrap();
    let buffer = mono.decode(&[0x01, 0x00, 0x02, 0x00, 0x03]).unwrap();
    assert_eq!(buffer.frame_count(), 2);

    // 7 bytes of stereo covers one full frame plus a 3-byte tail
    let stereo = PcmDecoder::new(24000, 2).unwrap();
    let buffer = stereo
        .decode(&[0x01, 0x00, 0x02, 0x00, 0x03, 0x00, 0x04])
        .unwrap();
    assert_eq!(buffer.frame_count(), 1);
    assert_eq!(buffer.channel(0), &[1.0 / 32768.0]);
    assert_eq!(buffer.channel(1), &[2.0 / 32768.0]);
}

#[test]
fn test_frame_count_is_floor_of_bytes_over_frame_size() {
    for channels in 1u16..=4 {
        let decoder = PcmDecoder::new(24000, channels).unwrap();
        for len in 0usize..=32 {
            let data = vec![0u8; len];
            let buffer = decoder.decode(&data).unwrap();
            let expected = len / (2 * channels as usize);
            assert_eq!(buffer.frame_count(), expected, "len={} ch={}", len, channels);
        }
    }
}

#[test]
fn test_empty_input_decodes_to_empty_buffer() {
    let decoder = PcmDecoder::new(24000, 2).unwrap();
    let buffer = decoder.decode(&[]).unwrap();
    assert_eq!(buffer.frame_count(), 0);
    assert_eq!(buffer.channel_count(), 2);
    assert!(buffer.channel(0).is_empty());
}

#[test]
fn test_zero_channel_count_is_rejected() {
    let err = PcmDecoder::new(24000, 0).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
}

#[test]
fn test_zero_sample_rate_is_rejected() {
    let err = PcmDecoder::new(0, 1).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
}
