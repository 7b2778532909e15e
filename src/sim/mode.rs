//! Device capability profiles

use crate::consts::DESKTOP_MIN_WIDTH;

/// Behavior profile selected once at init
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityMode {
    /// Mouse + hover + wide viewport: input, bullets, fragments, cursor overlay
    DesktopInteractive,
    /// Everything else: falling words only
    MobileAmbient,
}

impl CapabilityMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CapabilityMode::DesktopInteractive => "desktop-interactive",
            CapabilityMode::MobileAmbient => "mobile-ambient",
        }
    }

    /// Whether bullets, fragments and pointer input are simulated
    #[inline]
    pub fn is_interactive(&self) -> bool {
        matches!(self, CapabilityMode::DesktopInteractive)
    }

    /// Select the mode for a set of device signals
    pub fn detect(signals: &DeviceSignals) -> Self {
        if signals.fine_pointer && signals.hover && signals.viewport_width >= DESKTOP_MIN_WIDTH {
            CapabilityMode::DesktopInteractive
        } else {
            CapabilityMode::MobileAmbient
        }
    }
}

/// Raw capability signals read from the browser
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DeviceSignals {
    /// `(pointer: fine)`
    pub fine_pointer: bool,
    /// `(hover: hover)`
    pub hover: bool,
    /// `window.innerWidth` in CSS pixels
    pub viewport_width: f64,
    /// `(prefers-reduced-motion: reduce)`
    pub reduced_motion: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signals(fine_pointer: bool, hover: bool, viewport_width: f64) -> DeviceSignals {
        DeviceSignals {
            fine_pointer,
            hover,
            viewport_width,
            reduced_motion: false,
        }
    }

    #[test]
    fn test_desktop_requires_all_signals() {
        assert_eq!(
            CapabilityMode::detect(&signals(true, true, 1440.0)),
            CapabilityMode::DesktopInteractive
        );
        assert_eq!(
            CapabilityMode::detect(&signals(true, true, 1024.0)),
            CapabilityMode::DesktopInteractive
        );
        assert_eq!(
            CapabilityMode::detect(&signals(true, true, 1023.0)),
            CapabilityMode::MobileAmbient
        );
        assert_eq!(
            CapabilityMode::detect(&signals(false, true, 1920.0)),
            CapabilityMode::MobileAmbient
        );
        assert_eq!(
            CapabilityMode::detect(&signals(true, false, 1920.0)),
            CapabilityMode::MobileAmbient
        );
    }

    #[test]
    fn test_mode_names() {
        assert_eq!(CapabilityMode::DesktopInteractive.as_str(), "desktop-interactive");
        assert_eq!(CapabilityMode::MobileAmbient.as_str(), "mobile-ambient");
        assert!(!CapabilityMode::MobileAmbient.is_interactive());
    }
}
