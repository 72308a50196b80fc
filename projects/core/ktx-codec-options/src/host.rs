//! Facts about the host that feed derived defaults.

/// Hardware information consulted during resolution.
pub trait HostInfo {
    /// Number of hardware threads, as reported by the platform.
    ///
    /// May be `0` when the platform cannot tell.
    fn hardware_concurrency(&self) -> u32;

    /// Whether the CPU supports the SSE instructions used by the Basis encoders.
    fn supports_sse(&self) -> bool;
}

/// [`HostInfo`] backed by the running machine.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHost;

#[cfg(feature = "std")]
impl HostInfo for SystemHost {
    fn hardware_concurrency(&self) -> u32 {
        std::thread::available_parallelism()
            .map(|p| u32::try_from(p.get()).unwrap_or(u32::MAX))
            .unwrap_or(0)
    }

    fn supports_sse(&self) -> bool {
        has_sse41()
    }
}

/// Fixed [`HostInfo`] for tests and for callers that already know the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedHost {
    /// Reported hardware concurrency.
    pub hardware_concurrency: u32,
    /// Reported SSE support.
    pub supports_sse: bool,
}

impl FixedHost {
    /// A host with `threads` hardware threads and SSE support.
    pub const fn new(threads: u32) -> Self {
        Self {
            hardware_concurrency: threads,
            supports_sse: true,
        }
    }
}

impl HostInfo for FixedHost {
    fn hardware_concurrency(&self) -> u32 {
        self.hardware_concurrency
    }

    fn supports_sse(&self) -> bool {
        self.supports_sse
    }
}

/// Default encoder thread count: the hardware concurrency, or 1 if that is reported as 0.
#[inline]
pub fn default_thread_count<H: HostInfo + ?Sized>(host: &H) -> u32 {
    host.hardware_concurrency().max(1)
}

/// Whether the CPU supports SSE4.1, the level the Basis encoders' SSE paths require.
#[inline]
#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub fn has_sse41() -> bool {
    cpufeatures::new!(cpuid_sse41, "sse4.1");
    cpuid_sse41::get()
}

/// Whether the CPU supports SSE4.1. Always `false` off x86.
#[inline]
#[cfg(not(any(target_arch = "x86_64", target_arch = "x86")))]
pub fn has_sse41() -> bool {
    false
}
