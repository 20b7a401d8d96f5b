#[cfg(all(feature = "simd", target_arch = "x86_64"))]
use std::arch::x86_64::*;

use std::sync::OnceLock;

static SSE2_AVAILABLE_CACHE: OnceLock<bool> = OnceLock::new();
static AVX2_AVAILABLE_CACHE: OnceLock<bool> = OnceLock::new();
static AVX512_AVAILABLE_CACHE: OnceLock<bool> = OnceLock::new();
static BEST_LEVEL: OnceLock<SimdLevel> = OnceLock::new();

#[cfg(all(feature = "simd", target_arch = "x86_64"))]
#[inline]
fn detect_sse2() -> bool {
    is_x86_feature_detected!("sse2")
}

#[cfg(not(all(feature = "simd", target_arch = "x86_64")))]
#[inline]
fn detect_sse2() -> bool {
    false
}

#[cfg(all(feature = "simd", target_arch = "x86_64"))]
#[inline]
fn detect_avx2() -> bool {
    is_x86_feature_detected!("avx2")
}

#[cfg(not(all(feature = "simd", target_arch = "x86_64")))]
#[inline]
fn detect_avx2() -> bool {
    false
}

#[cfg(all(feature = "avx512", target_arch = "x86_64"))]
#[inline]
fn detect_avx512() -> bool {
    is_x86_feature_detected!("avx512f") && is_x86_feature_detected!("avx512bw")
}

#[cfg(not(all(feature = "avx512", target_arch = "x86_64")))]
#[inline]
fn detect_avx512() -> bool {
    false
}

#[inline]
pub fn is_sse2_available() -> bool {
    *SSE2_AVAILABLE_CACHE.get_or_init(detect_sse2)
}

#[inline]
pub fn is_avx2_available() -> bool {
    *AVX2_AVAILABLE_CACHE.get_or_init(detect_avx2)
}

#[inline]
pub fn is_avx512_available() -> bool {
    *AVX512_AVAILABLE_CACHE.get_or_init(detect_avx512)
}

#[inline]
pub fn simd_info() -> SimdInfo {
    SimdInfo {
        sse2: is_sse2_available(),
        avx2: is_avx2_available(),
        avx512: is_avx512_available(),
    }
}

/// Detected once per process; the driver prints this at startup so the
/// reported columns can be read against what the host actually ran.
#[inline]
pub fn best_level() -> SimdLevel {
    *BEST_LEVEL.get_or_init(|| simd_info().best_available())
}

#[derive(Debug, Clone, Copy)]
pub struct SimdInfo {
    pub sse2: bool,
    pub avx2: bool,
    pub avx512: bool,
}

impl SimdInfo {
    pub fn best_available(&self) -> SimdLevel {
        if self.avx512 {
            SimdLevel::Avx512
        } else if self.avx2 {
            SimdLevel::Avx2
        } else if self.sse2 {
            SimdLevel::Sse2
        } else {
            SimdLevel::Scalar
        }
    }
}

/// Bytes moved per load/store at each level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SimdLevel {
    Scalar,
    Sse2,
    Avx2,
    Avx512,
}

impl SimdLevel {
    pub fn width(&self) -> usize {
        match self {
            SimdLevel::Scalar => 1,
            SimdLevel::Sse2 => 16,
            SimdLevel::Avx2 => 32,
            SimdLevel::Avx512 => 64,
        }
    }
}

impl std::fmt::Display for SimdLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimdLevel::Scalar => write!(f, "Scalar"),
            SimdLevel::Sse2 => write!(f, "SSE2"),
            SimdLevel::Avx2 => write!(f, "AVX2"),
            SimdLevel::Avx512 => write!(f, "AVX-512"),
        }
    }
}

/// Baseline: the platform memcpy via `copy_from_slice`.
#[inline(always)]
pub fn copy_scalar(dst: &mut [u8], src: &[u8]) {
    let len = dst.len().min(src.len());
    dst[..len].copy_from_slice(&src[..len]);
}

#[cfg(all(feature = "simd", target_arch = "x86_64"))]
#[target_feature(enable = "sse2")]
fn copy_sse2_inner(dst: &mut [u8], src: &[u8], len: usize) {
    unsafe {
        let mut i = 0;
        while i + 16 <= len {
            let v = _mm_loadu_si128(src[i..].as_ptr() as *const __m128i);
            _mm_storeu_si128(dst[i..].as_mut_ptr() as *mut __m128i, v);
            i += 16;
        }
        if i < len {
            dst[i..len].copy_from_slice(&src[i..len]);
        }
    }
}

/// 128-bit wide copy. Falls back to the scalar baseline when SSE2 is
/// unavailable or the buffer is shorter than one register.
#[inline(always)]
pub fn copy_sse(dst: &mut [u8], src: &[u8]) {
    let len = dst.len().min(src.len());
    #[cfg(all(feature = "simd", target_arch = "x86_64"))]
    {
        if len >= 16 && is_sse2_available() {
            unsafe { copy_sse2_inner(dst, src, len) };
            return;
        }
    }
    let _ = len;
    copy_scalar(dst, src);
}

#[cfg(all(feature = "simd", target_arch = "x86_64"))]
#[target_feature(enable = "avx2")]
fn copy_avx2_inner(dst: &mut [u8], src: &[u8], len: usize) {
    unsafe {
        let mut i = 0;
        while i + 32 <= len {
            let v = _mm256_loadu_si256(src[i..].as_ptr() as *const __m256i);
            _mm256_storeu_si256(dst[i..].as_mut_ptr() as *mut __m256i, v);
            i += 32;
        }
        while i + 16 <= len {
            let v = _mm_loadu_si128(src[i..].as_ptr() as *const __m128i);
            _mm_storeu_si128(dst[i..].as_mut_ptr() as *mut __m128i, v);
            i += 16;
        }
        if i < len {
            dst[i..len].copy_from_slice(&src[i..len]);
        }
    }
}

/// 256-bit wide copy. Falls back to [`copy_sse`] when AVX2 is
/// unavailable or the buffer is shorter than one register.
#[inline(always)]
pub fn copy_avx2(dst: &mut [u8], src: &[u8]) {
    let len = dst.len().min(src.len());
    #[cfg(all(feature = "simd", target_arch = "x86_64"))]
    {
        if len >= 32 && is_avx2_available() {
            unsafe { copy_avx2_inner(dst, src, len) };
            return;
        }
    }
    let _ = len;
    copy_sse(dst, src);
}

#[cfg(all(feature = "avx512", target_arch = "x86_64"))]
#[target_feature(enable = "avx512f")]
fn copy_avx512_inner(dst: &mut [u8], src: &[u8], len: usize) {
    unsafe {
        let mut i = 0;
        while i + 64 <= len {
            let v = _mm512_loadu_si512(src[i..].as_ptr() as *const __m512i);
            _mm512_storeu_si512(dst[i..].as_mut_ptr() as *mut __m512i, v);
            i += 64;
        }
        while i + 32 <= len {
            let v = _mm256_loadu_si256(src[i..].as_ptr() as *const __m256i);
            _mm256_storeu_si256(dst[i..].as_mut_ptr() as *mut __m256i, v);
            i += 32;
        }
        if i < len {
            dst[i..len].copy_from_slice(&src[i..len]);
        }
    }
}

/// 512-bit wide copy. Falls back to [`copy_avx2`] when AVX-512 is
/// unavailable or the buffer is shorter than one register.
#[cfg(all(feature = "avx512", target_arch = "x86_64"))]
#[inline(always)]
pub fn copy_avx512(dst: &mut [u8], src: &[u8]) {
    let len = dst.len().min(src.len());
    if len >= 64 && is_avx512_available() {
        unsafe { copy_avx512_inner(dst, src, len) };
        return;
    }
    copy_avx2(dst, src);
}

#[cfg(not(all(feature = "avx512", target_arch = "x86_64")))]
#[inline(always)]
pub fn copy_avx512(dst: &mut [u8], src: &[u8]) {
    copy_avx2(dst, src);
}

/// Copy using the widest level the host supports.
#[inline(always)]
pub fn copy_auto(dst: &mut [u8], src: &[u8]) {
    match best_level() {
        SimdLevel::Avx512 => copy_avx512(dst, src),
        SimdLevel::Avx2 => copy_avx2(dst, src),
        SimdLevel::Sse2 => copy_sse(dst, src),
        SimdLevel::Scalar => copy_scalar(dst, src),
    }
}
