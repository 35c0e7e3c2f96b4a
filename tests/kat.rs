//! Known-answer tests against the FIPS 180-4 / NIST vector set.

use sha256_stream::Sha256;

fn digest_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data).as_bytes())
}

#[test]
fn kat_empty_message() {
    assert_eq!(
        digest_hex(b""),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

#[test]
fn kat_abc() {
    assert_eq!(
        digest_hex(b"abc"),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn kat_56_bytes_two_block_padding() {
    // 56 message bytes leave no room for the length field, forcing the
    // two-block trailer path.
    assert_eq!(
        digest_hex(b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq"),
        "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1"
    );
}

#[test]
fn kat_quick_brown_fox() {
    assert_eq!(
        digest_hex(b"The quick brown fox jumps over the lazy dog"),
        "d7a8fbb307d7809469ca9abcb0082e4f8d5651e46d3cdb762d02d0bf37c9e592"
    );
}

#[test]
fn kat_112_bytes() {
    let message = b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmn\
hijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu";
    assert_eq!(message.len(), 112);
    assert_eq!(
        digest_hex(message),
        "cf5b16a778af8380036ce59e7b0492370b249b11e8f07a51afac45037afee9d1"
    );
}

#[test]
fn kat_one_million_a() {
    // Streamed in 1000-byte chunks rather than one allocation.
    let chunk = [b'a'; 1000];
    let mut hasher = Sha256::new();
    for _ in 0..1000 {
        hasher.update(&chunk).unwrap();
    }
    assert_eq!(
        hex::encode(hasher.finalize().unwrap().as_bytes()),
        "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0"
    );
}

#[test]
#[ignore = "hashes 1 GiB; run with --ignored"]
fn kat_gigabyte_pattern() {
    // 16,777,216 repetitions of a 64-byte pattern (2^30 bytes total),
    // streamed without ever materializing the message.
    let pattern = b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmno";
    let mut hasher = Sha256::new();
    for _ in 0..16_777_216u32 {
        hasher.update(pattern).unwrap();
    }
    assert_eq!(
        hex::encode(hasher.finalize().unwrap().as_bytes()),
        "50e72a0e26442fe2552dc3938ac58658228c0cbfb1d2ca872ae435266fcd055e"
    );
}
