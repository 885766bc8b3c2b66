//! Label font loading.
//!
//! Prefers a bold monospace face from the host's font directories and falls
//! back to a generic system face when none is readable. The fallback degrades
//! fidelity only; rendering still proceeds.

use ab_glyph::{FontVec, PxScale};

use crate::{RenderError, Result};

/// Primary text size in pixels (title and item lines).
pub const PRIMARY_SIZE: f32 = 20.0;

/// Secondary text size in pixels (count/lot and date lines).
pub const SECONDARY_SIZE: f32 = 14.0;

/// A font loaded for a single render pass.
///
/// Each request loads its own instance; nothing is cached across calls.
pub struct LabelFont {
    font: FontVec,
    fallback: bool,
}

impl LabelFont {
    /// Load the preferred bold monospace face, or any readable system face.
    pub fn load() -> Result<Self> {
        if let Some(font) = load_first(bold_mono_candidates()) {
            return Ok(Self {
                font,
                fallback: false,
            });
        }

        if let Some(font) = load_first(generic_candidates()) {
            tracing::warn!("No bold monospace font found, using fallback face");
            return Ok(Self {
                font,
                fallback: true,
            });
        }

        Err(RenderError::FontUnavailable)
    }

    pub fn font(&self) -> &FontVec {
        &self.font
    }

    /// Whether the degraded generic face is in use.
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    pub fn primary(&self) -> PxScale {
        PxScale::from(PRIMARY_SIZE)
    }

    pub fn secondary(&self) -> PxScale {
        PxScale::from(SECONDARY_SIZE)
    }
}

fn load_first(paths: &'static [&'static str]) -> Option<FontVec> {
    for &path in paths {
        if let Ok(data) = std::fs::read(path) {
            match FontVec::try_from_vec(data) {
                Ok(font) => {
                    tracing::debug!(path, "Loaded label font");
                    return Some(font);
                }
                Err(_) => {
                    tracing::warn!(path, "Font file exists but failed to parse, skipping");
                }
            }
        }
    }
    None
}

fn bold_mono_candidates() -> &'static [&'static str] {
    #[cfg(target_os = "macos")]
    {
        &[
            "/System/Library/Fonts/Supplemental/Courier New Bold.ttf",
            "/System/Library/Fonts/Menlo.ttc",
            "/System/Library/Fonts/Monaco.ttf",
        ]
    }
    #[cfg(target_os = "windows")]
    {
        &[
            "C:\\Windows\\Fonts\\courbd.ttf",
            "C:\\Windows\\Fonts\\consolab.ttf",
            "C:\\Windows\\Fonts\\lucon.ttf",
        ]
    }
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        &[
            "/usr/share/fonts/truetype/dejavu/DejaVuSansMono-Bold.ttf",
            "/usr/share/fonts/truetype/liberation/LiberationMono-Bold.ttf",
            "/usr/share/fonts/truetype/liberation2/LiberationMono-Bold.ttf",
            "/usr/share/fonts/TTF/DejaVuSansMono-Bold.ttf",
        ]
    }
}

fn generic_candidates() -> &'static [&'static str] {
    #[cfg(target_os = "macos")]
    {
        &[
            "/System/Library/Fonts/Supplemental/Arial.ttf",
            "/System/Library/Fonts/Supplemental/Helvetica.ttf",
            "/System/Library/Fonts/Helvetica.ttc",
        ]
    }
    #[cfg(target_os = "windows")]
    {
        &[
            "C:\\Windows\\Fonts\\arial.ttf",
            "C:\\Windows\\Fonts\\segoeui.ttf",
        ]
    }
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        &[
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
            "/usr/share/fonts/TTF/DejaVuSans.ttf",
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_lists_are_populated() {
        assert!(!bold_mono_candidates().is_empty());
        assert!(!generic_candidates().is_empty());
    }

    #[test]
    fn scales_match_configured_sizes() {
        let Ok(font) = LabelFont::load() else {
            return;
        };
        assert_eq!(font.primary(), PxScale::from(PRIMARY_SIZE));
        assert_eq!(font.secondary(), PxScale::from(SECONDARY_SIZE));
    }
}
