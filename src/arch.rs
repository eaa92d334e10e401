//! CPU architecture class resolved at compile time.

use std::fmt;

/// CPU architecture class this binary was compiled for.
///
/// Resolved once from the Rust target triple when the binary is built and
/// exposed as the [`TARGET`] constant. It is not a runtime CPU probe: a
/// binary cross-compiled for `aarch64` reports `Arm64` wherever it runs.
///
/// # Examples
///
/// ```
/// use archgreet::arch::{ArchitectureClass, TARGET};
///
/// // Exactly one class is selected per build.
/// match TARGET {
///     ArchitectureClass::Arm64 => assert!(cfg!(target_arch = "aarch64")),
///     ArchitectureClass::X86_64 => assert!(cfg!(target_arch = "x86_64")),
///     ArchitectureClass::Unknown => {}
/// }
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ArchitectureClass {
    /// AArch64 / ARM64 (64-bit) - Apple Silicon, modern ARM devices
    Arm64,
    /// x86_64 / AMD64 (64-bit) - Intel and AMD desktop/server machines
    X86_64,
    /// Any other target architecture
    Unknown,
}

/// Architecture class of the current build target.
///
/// Exactly one of these cfg arms is active per build; `Unknown` is the
/// fallback when the target is neither `aarch64` nor `x86_64`.
#[cfg(target_arch = "aarch64")]
pub const TARGET: ArchitectureClass = ArchitectureClass::Arm64;

#[cfg(target_arch = "x86_64")]
pub const TARGET: ArchitectureClass = ArchitectureClass::X86_64;

#[cfg(not(any(target_arch = "aarch64", target_arch = "x86_64")))]
pub const TARGET: ArchitectureClass = ArchitectureClass::Unknown;

impl ArchitectureClass {
    /// Human-readable family name used in the greeting line.
    pub fn describe(self) -> &'static str {
        match self {
            Self::Arm64 => "ARM64 (Apple Silicon)",
            Self::X86_64 => "x86_64 (Intel)",
            Self::Unknown => "unknown architecture",
        }
    }

    /// Architecture-specific second line of the greeting, if any.
    ///
    /// The wording is asymmetric on purpose: ARM64 mentions optimized code,
    /// x86_64 only states the architecture, and unknown targets get no
    /// second line at all.
    pub fn detail(self) -> Option<&'static str> {
        match self {
            Self::Arm64 => Some("Running optimized code for Apple Silicon"),
            Self::X86_64 => Some("Running on Intel architecture"),
            Self::Unknown => None,
        }
    }
}

impl fmt::Display for ArchitectureClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}
