use vcopy::{copy_auto, copy_avx2, copy_avx512, copy_scalar, copy_sse, SimdLevel};

type CopyFn = fn(&mut [u8], &[u8]);

const VARIANTS: [(&str, CopyFn); 5] = [
    ("scalar", copy_scalar),
    ("sse", copy_sse),
    ("avx2", copy_avx2),
    ("avx512", copy_avx512),
    ("auto", copy_auto),
];

fn patterned(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 7 + 3) as u8).collect()
}

#[test]
fn destination_matches_source_for_every_variant() {
    for (name, copy) in VARIANTS {
        for len in [0usize, 1, 5, 100, 1000, 4096, 65_537] {
            let src = patterned(len);
            let mut dst = vec![0u8; len];
            copy(&mut dst, &src);
            assert_eq!(dst, src, "{} at len {}", name, len);
        }
    }
}

#[test]
fn remainder_around_each_vector_width() {
    for width in [16usize, 32, 64] {
        for len in [width - 1, width, width + 1] {
            for (name, copy) in VARIANTS {
                let src = patterned(len);
                let mut dst = vec![0xEEu8; len];
                copy(&mut dst, &src);
                assert_eq!(dst, src, "{} at width {} len {}", name, width, len);
            }
        }
    }
}

#[test]
fn empty_buffers_do_not_fault() {
    for (_, copy) in VARIANTS {
        let mut dst: Vec<u8> = Vec::new();
        copy(&mut dst, &[]);
        assert!(dst.is_empty());
    }
}

#[test]
fn variants_agree_with_scalar_baseline() {
    let src = patterned(10_000);
    let mut expected = vec![0u8; src.len()];
    copy_scalar(&mut expected, &src);

    for (name, copy) in VARIANTS {
        let mut dst = vec![0u8; src.len()];
        copy(&mut dst, &src);
        assert_eq!(dst, expected, "{} disagrees with scalar", name);
    }
}

#[test]
fn auto_dispatch_never_exceeds_detected_level() {
    let level = vcopy::best_level();
    assert!(level >= SimdLevel::Scalar);

    // Whatever the host reports, dispatch must still copy correctly.
    let src = patterned(777);
    let mut dst = vec![0u8; 777];
    copy_auto(&mut dst, &src);
    assert_eq!(dst, src);
}
